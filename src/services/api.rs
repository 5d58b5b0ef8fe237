use async_trait::async_trait;
use gloo::net::http::Request;
use serde_json::Value;

use crate::common::ApiError;
use crate::config::AppConfig;
use crate::models::CarFilter;
use crate::types::{ApiErrorBody, CreateReservationRequest, ReservationReceipt};

pub const CARS_PATH: &str = "/cars";
pub const CREATE_RESERVATION_PATH: &str = "/reservations/create_auth";

/// Backend calls made by the booking page.
#[async_trait(?Send)]
pub trait CarApi {
    /// Raw JSON body of the listing endpoint. Interpreting it (array or not)
    /// is left to the listing controller.
    async fn list_cars(&self, filter: &CarFilter) -> Result<Value, ApiError>;

    async fn create_reservation(
        &self,
        token: &str,
        request: &CreateReservationRequest,
    ) -> Result<ReservationReceipt, ApiError>;
}

/// `{base}/cars` with the filter's query string, if any.
pub fn listing_url(config: &AppConfig, filter: &CarFilter) -> String {
    let url = config.endpoint(CARS_PATH);
    let query = filter.query_string();
    if query.is_empty() {
        url
    } else {
        format!("{url}?{query}")
    }
}

/// `fetch`-backed client.
#[derive(Clone, Debug)]
pub struct HttpCarApi {
    config: AppConfig,
}

impl HttpCarApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl CarApi for HttpCarApi {
    async fn list_cars(&self, filter: &CarFilter) -> Result<Value, ApiError> {
        let url = listing_url(&self.config, filter);
        log::debug!("GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            // The body is still interpreted; an error object is not an array
            // and ends up as "no results".
            log::warn!("GET {url} returned {}", response.status());
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_reservation(
        &self,
        token: &str,
        request: &CreateReservationRequest,
    ) -> Result<ReservationReceipt, ApiError> {
        let url = self.config.endpoint(CREATE_RESERVATION_PATH);
        log::debug!("POST {url} car_id={}", request.car_id);

        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !response.ok() {
            return Err(ApiError::Status {
                status,
                detail: ApiErrorBody::from_body(&body).message(),
            });
        }

        Ok(ReservationReceipt::from_body(&body))
    }
}
