//! View models rendered by the frontend components.
//!
//! Everything here is plain data computed from controller state, so the
//! rendering decisions can be checked without a browser.

use crate::config::AppConfig;
use crate::models::{Car, Session};
use crate::web::handlers::toasts::Toast;
use crate::web::helpers::format_price;

#[derive(Clone, Debug, PartialEq)]
pub struct ReserveAction {
    pub car_id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: String,
    pub photo_url: String,
    pub photo_alt: String,
    pub title: String,
    pub badges: Vec<String>,
    pub price_text: String,
    pub price_unit: String,
    pub reserve: ReserveAction,
}

impl CardView {
    pub fn from_car(car: &Car, config: &AppConfig) -> Self {
        Self {
            id: car.id.clone(),
            photo_url: car
                .photo()
                .unwrap_or(&config.placeholder_photo)
                .to_string(),
            photo_alt: car.name(),
            title: car.headline(),
            badges: vec![
                format!("Category: {}", car.category),
                format!("Seats: {}", car.seats),
                format!("Trans: {}", car.transmission),
                format!("Fuel: {}", car.fuel_type),
            ],
            price_text: format_price(car.price_per_day),
            price_unit: format!("{} / day", config.currency),
            reserve: ReserveAction {
                car_id: car.id.clone(),
                title: car.name(),
            },
        }
    }
}

/// Header and drawer state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NavView {
    pub greeting: Option<String>,
    pub show_sign_in: bool,
    pub show_sign_out: bool,
}

impl NavView {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self {
                greeting: Some(format!("Hi, {}", session.user.display_name())),
                show_sign_in: false,
                show_sign_out: true,
            },
            None => Self {
                greeting: None,
                show_sign_in: true,
                show_sign_out: false,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingView {
    /// Number of skeleton cards to show; zero once a response is in.
    pub skeletons: usize,
    pub cards: Vec<CardView>,
    pub count_text: Option<String>,
    pub empty_visible: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub auth_hint_visible: bool,
    pub submitting: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageView {
    pub nav: NavView,
    pub listing: ListingView,
    pub modal: Option<ModalView>,
    pub toasts: Vec<Toast>,
}
