use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /reservations/create_auth`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub car_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Successful reservation response. Every field is optional; the body may
/// even be empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationReceipt {
    #[serde(default)]
    pub reservation_id: Option<Value>,
    #[serde(default)]
    pub invoice_id: Option<Value>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// Error body returned by the backend on a non-success status
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ReservationReceipt {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

impl ApiErrorBody {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Human readable detail.
    ///
    /// `detail` is usually a string. Validation failures send a list of
    /// objects with a `msg` field; those messages are joined.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) => Some(s.clone()).filter(|s| !s.trim().is_empty()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_iso_dates() {
        let request = CreateReservationRequest {
            car_id: "CAR-12".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "car_id": "CAR-12",
                "start_date": "2026-03-01",
                "end_date": "2026-03-04"
            })
        );
    }

    #[test]
    fn test_error_body_string_detail() {
        let body = ApiErrorBody::from_body(r#"{"detail":"Car not available for selected dates"}"#);
        assert_eq!(
            body.message().as_deref(),
            Some("Car not available for selected dates")
        );
    }

    #[test]
    fn test_error_body_validation_list() {
        let body = ApiErrorBody::from_body(
            r#"{"detail":[{"loc":["body","start_date"],"msg":"start_date cannot be in the past"}]}"#,
        );
        assert_eq!(
            body.message().as_deref(),
            Some("start_date cannot be in the past")
        );
    }

    #[test]
    fn test_error_body_garbage_has_no_message() {
        assert_eq!(ApiErrorBody::from_body("<html>502</html>").message(), None);
        assert_eq!(ApiErrorBody::from_body(r#"{"detail":""}"#).message(), None);
    }

    #[test]
    fn test_receipt_is_lenient() {
        let receipt = ReservationReceipt::from_body(
            r#"{"reservation_id":41,"invoice_id":7,"total_amount":450.0}"#,
        );
        assert_eq!(receipt.total_amount, Some(450.0));
        assert_eq!(ReservationReceipt::from_body(""), ReservationReceipt::default());
    }
}
