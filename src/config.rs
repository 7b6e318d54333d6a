//! Environment-derived settings for test sessions.
//!
//! Only session setup reads these; widget operations take everything they
//! need from the [`Locator`](crate::query::Locator) they are given.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::warn;
use serde_json::Value;
use thirtyfour::DesiredCapabilities;

use crate::error::{WidgetError, WidgetResult};
use crate::query::ElementPoller;

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The poller sessions use until told otherwise.
pub fn default_poller() -> ElementPoller {
    ElementPoller::TimeoutWithInterval(DEFAULT_WAIT_TIMEOUT, DEFAULT_POLL_INTERVAL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
}

impl FromStr for Browser {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            other => Err(WidgetError::Config(format!("unsupported browser: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub webdriver_url: String,
    pub browser: Browser,
    pub headless: bool,
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
    /// Base URL of the application under test, if configured.
    pub app_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            browser: Browser::Chrome,
            headless: true,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            app_url: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> WidgetResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> WidgetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(url) = lookup("WEBDRIVER_URL").filter(|u| !u.trim().is_empty()) {
            settings.webdriver_url = url.trim().to_string();
        }

        if let Some(name) = lookup("BROWSER") {
            settings.browser = name.parse().unwrap_or_else(|e| {
                warn!("{}; falling back to chrome", e);
                Browser::Chrome
            });
        }

        if let Some(flag) = lookup("HEADLESS") {
            settings.headless = flag.trim() == "1";
        }

        if let Some(secs) = lookup("SELENIUM_WAIT_TIMEOUT") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                WidgetError::Config(format!("SELENIUM_WAIT_TIMEOUT is not a number: {}", secs))
            })?;
            settings.wait_timeout = Duration::from_secs(secs);
        }

        if let Some(ms) = lookup("WAIT_POLL_INTERVAL_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                WidgetError::Config(format!("WAIT_POLL_INTERVAL_MS is not a number: {}", ms))
            })?;
            settings.poll_interval = Duration::from_millis(ms);
        }

        settings.app_url = lookup("APP_URL").filter(|u| !u.trim().is_empty());

        Ok(settings)
    }

    pub fn poller(&self) -> ElementPoller {
        ElementPoller::TimeoutWithInterval(self.wait_timeout, self.poll_interval)
    }

    /// Browser capabilities for these settings, ready to send to the server.
    pub fn capabilities(&self) -> WidgetResult<Value> {
        let caps_err = |e: thirtyfour::error::WebDriverError| WidgetError::Capabilities(e.to_string());
        let value = match self.browser {
            Browser::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if self.headless {
                    caps.add_chrome_arg("--headless=new").map_err(caps_err)?;
                }
                caps.add_chrome_arg("--disable-gpu").map_err(caps_err)?;
                caps.add_chrome_arg("--window-size=1920,1080").map_err(caps_err)?;
                serde_json::to_value(&caps)?
            }
            Browser::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if self.headless {
                    caps.set_headless().map_err(caps_err)?;
                }
                serde_json::to_value(&caps)?
            }
        };
        Ok(value)
    }
}
