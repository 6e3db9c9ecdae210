use std::time::Duration;

/// Result type for browser operations
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Errors that can occur while driving the browser
#[derive(Debug)]
pub enum BrowserError {
    /// The browser process could not be started; fatal for the whole run
    Startup(String),

    /// A page navigation failed
    Navigation { url: String, message: String },

    /// An element or marker did not appear within the bounded wait
    Timeout { what: String, waited: Duration },

    /// Any other DevTools protocol fault
    Driver(String),
}

impl std::fmt::Display for BrowserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserError::Startup(msg) => write!(f, "Browser startup failed: {}", msg),
            BrowserError::Navigation { url, message } => {
                write!(f, "Navigation to {} failed: {}", url, message)
            }
            BrowserError::Timeout { what, waited } => {
                write!(f, "Timed out after {:?} waiting for {}", waited, what)
            }
            BrowserError::Driver(msg) => write!(f, "Driver error: {}", msg),
        }
    }
}

impl std::error::Error for BrowserError {}

impl From<chromiumoxide::error::CdpError> for BrowserError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        BrowserError::Driver(err.to_string())
    }
}

/// How to address an element on the page.
///
/// The application under test documents its form fields by element id
/// (`username`, `name`, `InputEmail`, ...) and its submit buttons by the
/// `name` attribute. Everything is resolved to a CSS selector before lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Element id, e.g. `Locator::Id("username")` for `#username`
    Id(&'static str),

    /// `name` attribute, e.g. `Locator::Name("submit")`
    Name(&'static str),

    /// Raw CSS selector, for anything the other two cannot express
    Css(&'static str),
}

impl Locator {
    /// The CSS selector this locator resolves to
    pub fn selector(&self) -> String {
        match self {
            Locator::Id(id) => format!("#{}", id),
            Locator::Name(name) => format!("[name='{}']", name),
            Locator::Css(css) => (*css).to_string(),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.selector())
    }
}

/// Configuration for the browser session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run without a visible window (required for CI)
    pub headless: bool,

    /// Disable the Chromium sandbox (required in most containers)
    pub sandbox: bool,

    /// Explicit browser executable; `None` lets the driver discover one
    pub chrome_path: Option<String>,

    /// Implicit wait applied by `find` to every element lookup
    pub lookup_wait: Duration,

    /// Polling interval for element and marker waits
    pub poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let waits = crate::config::WaitSettings::defaults();
        Self {
            headless: true,
            sandbox: false,
            chrome_path: None,
            lookup_wait: waits.lookup,
            poll_interval: waits.poll,
        }
    }
}

impl SessionConfig {
    /// Set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the browser executable path
    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Set the implicit lookup wait
    pub fn lookup_wait(mut self, wait: Duration) -> Self {
        self.lookup_wait = wait;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locator_selectors() {
        assert_eq!(Locator::Id("username").selector(), "#username");
        assert_eq!(Locator::Name("submit").selector(), "[name='submit']");
        assert_eq!(Locator::Css("form > input").selector(), "form > input");
    }

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert!(config.headless);
        assert!(!config.sandbox);
        assert_eq!(config.chrome_path, None);
    }

    #[test]
    fn test_error_display() {
        let err = BrowserError::Timeout {
            what: "#username".to_string(),
            waited: Duration::from_secs(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("#username"));
        assert!(msg.contains("10s"));
    }
}
