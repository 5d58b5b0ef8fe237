use serde_json::Value;

use crate::common::ApiError;
use crate::config::AppConfig;
use crate::models::{Car, CarFilter};
use crate::web::helpers::count_text;
use crate::web::templates::{CardView, ListingView};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed(String),
}

/// Identifies one listing request. Only the most recently issued ticket is
/// allowed to change the listing.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadTicket {
    pub generation: u64,
    pub filter: CarFilter,
}

#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// A newer request was issued while this one was in flight.
    Stale,
    Empty,
    Loaded { count: usize },
    Failed(ApiError),
}

/// Turns a listing response body into cars.
///
/// Anything that is not an array means no results. Array entries that do not
/// look like a car are skipped.
pub fn interpret_listing(body: Value) -> Vec<Car> {
    let Value::Array(items) = body else {
        log::debug!("Listing response is not an array");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Car>(item) {
            Ok(car) => Some(car),
            Err(e) => {
                log::warn!("Skipping malformed listing entry: {e}");
                None
            }
        })
        .collect()
}

/// Owns the cars currently on screen.
#[derive(Debug, Default)]
pub struct ListingController {
    cars: Vec<Car>,
    state: ListingState,
    generation: u64,
    filter: CarFilter,
}

impl ListingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Filter of the most recently issued request.
    pub fn filter(&self) -> &CarFilter {
        &self.filter
    }

    pub fn find(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == car_id)
    }

    /// Starts a request: the listing switches to its loading state and any
    /// earlier in-flight request becomes stale.
    pub fn begin(&mut self, filter: CarFilter) -> LoadTicket {
        self.generation += 1;
        self.state = ListingState::Loading;
        self.filter = filter.clone();
        LoadTicket {
            generation: self.generation,
            filter,
        }
    }

    pub fn finish(&mut self, ticket: &LoadTicket, result: Result<Value, ApiError>) -> LoadOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale listing response {} (latest {})",
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        match result {
            Err(err) => {
                self.cars.clear();
                self.state = ListingState::Failed(err.to_string());
                LoadOutcome::Failed(err)
            }
            Ok(body) => {
                let cars = interpret_listing(body);
                if cars.is_empty() {
                    self.cars.clear();
                    self.state = ListingState::Empty;
                    LoadOutcome::Empty
                } else {
                    let count = cars.len();
                    self.cars = cars;
                    self.state = ListingState::Loaded;
                    LoadOutcome::Loaded { count }
                }
            }
        }
    }

    pub fn view(&self, config: &AppConfig) -> ListingView {
        match &self.state {
            ListingState::Idle => ListingView::default(),
            ListingState::Loading => ListingView {
                skeletons: config.skeleton_count,
                ..ListingView::default()
            },
            ListingState::Empty => ListingView {
                empty_visible: true,
                ..ListingView::default()
            },
            ListingState::Failed(message) => ListingView {
                error: Some(message.clone()),
                ..ListingView::default()
            },
            ListingState::Loaded => ListingView {
                cards: self
                    .cars
                    .iter()
                    .map(|car| CardView::from_car(car, config))
                    .collect(),
                count_text: Some(count_text(self.cars.len())),
                ..ListingView::default()
            },
        }
    }
}
