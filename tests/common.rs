use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};

use rentwheel::common::ApiError;
use rentwheel::config::AppConfig;
use rentwheel::models::{Car, CarFilter};
use rentwheel::services::session::{PENDING_CAR_KEY, TOKEN_KEY, USER_KEY};
use rentwheel::services::{CarApi, MemoryStore, Navigator};
use rentwheel::types::{CreateReservationRequest, ReservationReceipt};
use rentwheel::web::BookingPage;

pub const SEED_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.seed";
pub const SEED_USER_JSON: &str =
    r#"{"email":"sara@example.com","first_name":"Sara","license_no":"LIC12345"}"#;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Invalid date in test helper")
}

pub fn get_seed_camry() -> Car {
    Car {
        id: "c1".into(),
        brand: "Toyota".into(),
        model: "Camry".into(),
        year: 2023,
        category: "Sedan".into(),
        seats: 5,
        transmission: "Auto".into(),
        fuel_type: "Gas".into(),
        price_per_day: 150.0,
        photo_url: None,
    }
}

pub fn get_seed_tahoe() -> Car {
    Car {
        id: "CAR-12".into(),
        brand: "Chevrolet".into(),
        model: "Tahoe".into(),
        year: 2024,
        category: "SUV".into(),
        seats: 7,
        transmission: "Automatic".into(),
        fuel_type: "Gasoline".into(),
        price_per_day: 1250.0,
        photo_url: Some("https://cdn.example.com/tahoe.jpg".into()),
    }
}

pub fn get_seed_listing() -> Value {
    json!([
        {
            "id": "c1",
            "plate_no": "ABC-1234",
            "brand": "Toyota",
            "model": "Camry",
            "year": 2023,
            "category": "Sedan",
            "fuel_type": "Gas",
            "color": "White",
            "seats": 5,
            "transmission": "Auto",
            "price_per_day": 150.0,
            "status": "available",
            "photo_url": "",
            "created_at": "2025-01-02T10:00:00"
        },
        {
            "id": "CAR-12",
            "brand": "Chevrolet",
            "model": "Tahoe",
            "year": 2024,
            "category": "SUV",
            "fuel_type": "Gasoline",
            "seats": 7,
            "transmission": "Automatic",
            "price_per_day": 1250.0,
            "photo_url": "https://cdn.example.com/tahoe.jpg"
        }
    ])
}

pub fn signed_in_store() -> MemoryStore {
    MemoryStore::with_entries([(TOKEN_KEY, SEED_TOKEN), (USER_KEY, SEED_USER_JSON)])
}

pub fn signed_in_store_with_pending(car_id: &str) -> MemoryStore {
    let store = signed_in_store();
    rentwheel::services::KeyValueStore::set(&store, PENDING_CAR_KEY, car_id)
        .expect("Memory store never fails");
    store
}

#[derive(Default)]
struct ApiScript {
    listings: VecDeque<Result<Value, ApiError>>,
    reservations: VecDeque<Result<ReservationReceipt, ApiError>>,
    listing_calls: Vec<CarFilter>,
    reservation_calls: Vec<(String, CreateReservationRequest)>,
    hold_next_listing: bool,
    listing_released: bool,
    reservations_held: bool,
}

/// `CarApi` that replays queued responses and records every call.
/// An exhausted queue answers with an empty listing / empty receipt.
///
/// Calls can be held in flight until released, so tests can interleave
/// page actions with a pending request.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Rc<RefCell<ApiScript>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_listing(&self, response: Result<Value, ApiError>) -> &Self {
        self.script.borrow_mut().listings.push_back(response);
        self
    }

    pub fn push_reservation(&self, response: Result<ReservationReceipt, ApiError>) -> &Self {
        self.script.borrow_mut().reservations.push_back(response);
        self
    }

    /// The next listing call waits until `release_listing`. Its response is
    /// taken from the queue when the call is made.
    pub fn hold_next_listing(&self) {
        let mut script = self.script.borrow_mut();
        script.hold_next_listing = true;
        script.listing_released = false;
    }

    pub fn release_listing(&self) {
        self.script.borrow_mut().listing_released = true;
    }

    /// Reservation calls wait until `release_reservations`.
    pub fn hold_reservations(&self) {
        self.script.borrow_mut().reservations_held = true;
    }

    pub fn release_reservations(&self) {
        self.script.borrow_mut().reservations_held = false;
    }

    pub fn listing_calls(&self) -> Vec<CarFilter> {
        self.script.borrow().listing_calls.clone()
    }

    pub fn reservation_calls(&self) -> Vec<(String, CreateReservationRequest)> {
        self.script.borrow().reservation_calls.clone()
    }
}

#[async_trait(?Send)]
impl CarApi for ScriptedApi {
    async fn list_cars(&self, filter: &CarFilter) -> Result<Value, ApiError> {
        let (response, held) = {
            let mut script = self.script.borrow_mut();
            script.listing_calls.push(filter.clone());
            let held = std::mem::take(&mut script.hold_next_listing);
            let response = script.listings.pop_front().unwrap_or_else(|| Ok(json!([])));
            (response, held)
        };
        if held {
            while !self.script.borrow().listing_released {
                tokio::task::yield_now().await;
            }
        }
        response
    }

    async fn create_reservation(
        &self,
        token: &str,
        request: &CreateReservationRequest,
    ) -> Result<ReservationReceipt, ApiError> {
        self.script
            .borrow_mut()
            .reservation_calls
            .push((token.to_string(), request.clone()));
        while self.script.borrow().reservations_held {
            tokio::task::yield_now().await;
        }
        self.script
            .borrow_mut()
            .reservations
            .pop_front()
            .unwrap_or_else(|| Ok(ReservationReceipt::default()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visit {
    GoTo(String),
    Reload,
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<Visit>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<Visit> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, url: &str) {
        self.visits.borrow_mut().push(Visit::GoTo(url.to_string()));
    }

    fn reload(&self) {
        self.visits.borrow_mut().push(Visit::Reload);
    }
}

pub type TestPage = BookingPage<MemoryStore, ScriptedApi, RecordingNavigator>;

pub fn get_test_page(store: MemoryStore) -> (TestPage, ScriptedApi, RecordingNavigator) {
    let api = ScriptedApi::new();
    let navigator = RecordingNavigator::new();
    let page = BookingPage::new(
        AppConfig::default(),
        store,
        api.clone(),
        navigator.clone(),
    );
    (page, api, navigator)
}
