pub use car::*;
pub use filter::*;
pub use reservation::*;
pub use session::*;

mod car;
mod filter;
mod reservation;
mod session;
