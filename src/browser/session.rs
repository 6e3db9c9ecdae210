//! The single browser session used for the whole run.
//!
//! Wraps a chromiumoxide (Chrome DevTools Protocol) browser configured for
//! unattended execution: headless, sandboxless, with the flags CI containers
//! need. All element lookups go through a bounded polling wait so assertions
//! tolerate pages that have not finished rendering yet.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::types::{BrowserError, BrowserResult, Locator, SessionConfig};

/// Join a base URL and a page path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The single live browser connection for a run.
///
/// At most one of these exists per run. It is opened before any test case
/// executes and closed after all of them have, regardless of how many failed.
pub struct BrowserSession {
    /// `None` once `close` has run
    browser: Option<Browser>,
    page: Page,
    handler_task: JoinHandle<()>,
    base_url: String,
    lookup_wait: Duration,
    poll_interval: Duration,
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("base_url", &self.base_url)
            .field("lookup_wait", &self.lookup_wait)
            .field("open", &self.browser.is_some())
            .finish()
    }
}

impl BrowserSession {
    /// Start the browser process and open the page used for the whole run.
    ///
    /// Failure here is fatal for the run: no test case can proceed without a
    /// session, so the caller is expected to abort.
    pub async fn open(base_url: impl Into<String>, config: SessionConfig) -> BrowserResult<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu");

        if !config.headless {
            builder = builder.with_head();
        }
        if !config.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder.build().map_err(BrowserError::Startup)?;

        let (browser, mut handler) = Browser::launch(cdp_config)
            .await
            .map_err(|e| BrowserError::Startup(e.to_string()))?;

        // The handler future must be polled for the CDP connection to make
        // progress; it runs until the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::Startup(e.to_string()))?;

        Ok(Self {
            browser: Some(browser),
            page,
            handler_task,
            base_url: base_url.into(),
            lookup_wait: config.lookup_wait,
            poll_interval: config.poll_interval,
        })
    }

    /// The base URL this session points at
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load `base_url + path` and wait for the navigation to finish
    pub async fn navigate(&self, path: &str) -> BrowserResult<()> {
        let url = join_url(&self.base_url, path);
        debug!(url = %url, "navigating");
        self.page
            .goto(url.clone())
            .await
            .map_err(|e| BrowserError::Navigation {
                url: url.clone(),
                message: e.to_string(),
            })?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| BrowserError::Navigation {
                url,
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Block until an element matching `locator` is present or `timeout`
    /// elapses, polling at the configured interval
    pub async fn await_element(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> BrowserResult<Element> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.page.find_element(locator.selector()).await {
                Ok(element) => return Ok(element),
                Err(_) if Instant::now() < deadline => {
                    tokio::time::sleep(self.poll_interval).await;
                }
                Err(_) => {
                    return Err(BrowserError::Timeout {
                        what: locator.selector(),
                        waited: timeout,
                    });
                }
            }
        }
    }

    /// Locate an element using the session's implicit lookup wait
    pub async fn find(&self, locator: &Locator) -> BrowserResult<Element> {
        self.await_element(locator, self.lookup_wait).await
    }

    /// Type `text` into the element matching `locator`
    pub async fn fill(&self, locator: &Locator, text: &str) -> BrowserResult<()> {
        let element = self.find(locator).await?;
        element.focus().await?;
        element.type_str(text).await?;
        Ok(())
    }

    /// Click the element matching `locator`
    pub async fn click(&self, locator: &Locator) -> BrowserResult<()> {
        self.find(locator).await?.click().await?;
        Ok(())
    }

    /// Full rendered page source
    pub async fn page_text(&self) -> BrowserResult<String> {
        Ok(self.page.content().await?)
    }

    /// Wait until any of `markers` appears in the page text, bounded by
    /// `timeout`, and return the text.
    ///
    /// Expiry is not an error: a case asserting that a marker is absent still
    /// needs the final page text to inspect. This replaces a fixed post-submit
    /// sleep; the happy path returns as soon as the application has answered.
    pub async fn settle_until_any(
        &self,
        markers: &[&str],
        timeout: Duration,
    ) -> BrowserResult<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let text = self.page_text().await?;
            if markers.iter().any(|m| text.contains(m)) || Instant::now() >= deadline {
                return Ok(text);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Release the browser process. Idempotent; failures are logged, not
    /// propagated, since teardown problems are an environment concern rather
    /// than a test-subject one.
    pub async fn close(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            if let Err(err) = browser.close().await {
                warn!(error = %err, "browser close failed");
            }
            if let Err(err) = browser.wait().await {
                warn!(error = %err, "browser did not exit cleanly");
            }
            self.handler_task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_url_trailing_slash() {
        assert_eq!(
            join_url("http://127.0.0.1:8000/", "register.php"),
            "http://127.0.0.1:8000/register.php"
        );
        assert_eq!(
            join_url("http://127.0.0.1:8000", "register.php"),
            "http://127.0.0.1:8000/register.php"
        );
    }

    #[test]
    fn test_join_url_leading_slash_in_path() {
        assert_eq!(
            join_url("http://127.0.0.1:8000/", "/login.php"),
            "http://127.0.0.1:8000/login.php"
        );
    }

    #[test]
    fn test_join_url_empty_path() {
        assert_eq!(join_url("http://127.0.0.1:8000/", ""), "http://127.0.0.1:8000/");
    }
}
