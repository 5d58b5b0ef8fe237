//! Reusable UI components for the booking page

mod alert;
mod button;
mod car_card;
mod filters;
mod footer;
mod input;
mod nav;
mod reserve_modal;
mod search_bar;

pub use alert::ToastHost;
pub use button::{Button, ButtonVariant};
pub use car_card::{CarCard, CarGrid, SkeletonCard};
pub use filters::FilterBar;
pub use footer::Footer;
pub use input::{DateInput, DateRangeInputs};
pub use nav::Nav;
pub use reserve_modal::ReserveModal;
pub use search_bar::SearchBar;
