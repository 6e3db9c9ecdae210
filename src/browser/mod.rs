pub mod session;
pub mod types;

pub use session::{BrowserSession, join_url};
pub use types::{BrowserError, BrowserResult, Locator, SessionConfig};
