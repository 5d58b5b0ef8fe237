use crate::models::CarFilter;

/// Raw values of the filter inputs, as typed or selected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterForm {
    pub category: String,
    pub seats: String,
    pub transmission: String,
    pub max_price: String,
}

impl FilterForm {
    pub fn to_filter(&self) -> CarFilter {
        CarFilter::new(
            &self.category,
            &self.seats,
            &self.transmission,
            &self.max_price,
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Options offered by the category select, matching the backend enum.
pub const CATEGORY_OPTIONS: &[&str] = &["Economy", "Sedan", "SUV", "Luxury", "Van"];
pub const SEAT_OPTIONS: &[&str] = &["2", "4", "5", "7"];
pub const TRANSMISSION_OPTIONS: &[&str] = &["Automatic", "Manual"];
