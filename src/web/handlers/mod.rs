pub mod listing;
pub mod nav;
pub mod reservation;
pub mod toasts;

pub use listing::{ListingController, ListingState, LoadOutcome, LoadTicket};
pub use reservation::{ReservationController, Submission};
pub use toasts::{Toast, ToastId, ToastKind, ToastQueue};
