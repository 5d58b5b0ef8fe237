mod booking;

pub use booking::{BrowserBookingPage, ListingPage};
