use chrono::NaiveDate;

use super::Car;

/// The reservation being edited in the open modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationDraft {
    pub car: Car,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReservationDraft {
    pub fn new(car: Car) -> Self {
        Self {
            car,
            start_date: None,
            end_date: None,
        }
    }

    pub fn title(&self) -> String {
        self.car.name()
    }
}
