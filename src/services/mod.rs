pub mod api;
pub mod dates;
pub mod navigator;
pub mod session;
pub mod storage;

pub use api::{CarApi, HttpCarApi};
pub use navigator::{BrowserNavigator, Navigator};
pub use session::SessionStore;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStore};
