use std::fmt;
use std::time::Duration;

use log::debug;

use crate::error::{WidgetError, WidgetResult};
use crate::query::{ElementPoller, ElementPollerTicker};
use crate::webdrivercommands::WebDriverCommands;
use crate::{By, WebDriverSession, WebElement};

/// The state a located element must reach before it is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readiness {
    /// At least one node matches.
    Present,
    /// A matching node is displayed.
    Visible,
    /// A matching node is displayed and enabled.
    Clickable,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Readiness::Present => write!(f, "present"),
            Readiness::Visible => write!(f, "visible"),
            Readiness::Clickable => write!(f, "clickable"),
        }
    }
}

impl Readiness {
    fn is_met(self, element: &WebElement<'_>) -> WidgetResult<bool> {
        match self {
            Readiness::Present => Ok(true),
            Readiness::Visible => element.is_displayed(),
            Readiness::Clickable => element.is_clickable(),
        }
    }
}

/// Blocks until a query resolves to a ready element, or the poller gives up.
///
/// Every widget operation resolves its elements through a `Locator`; none of
/// them poll the page on their own.
///
/// # Example:
/// ```no_run
/// # use appian_widgets::prelude::*;
/// # fn main() -> WidgetResult<()> {
/// #     let caps = DesiredCapabilities::chrome();
/// #     let driver = WebDriver::new("http://localhost:4444", &caps)?;
/// let locator = driver.locator();
/// let heading = locator.visible("//h1")?;
/// let save = locator
///     .clone()
///     .wait(std::time::Duration::from_secs(2), std::time::Duration::from_millis(100))
///     .clickable(".//button[./span = 'Save']")?;
/// #     save.click()?;
/// #     let _ = heading;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Locator<'a> {
    session: &'a WebDriverSession,
    poller: ElementPoller,
}

impl<'a> Locator<'a> {
    pub fn new(session: &'a WebDriverSession, poller: ElementPoller) -> Self {
        Self {
            session,
            poller,
        }
    }

    /// Use the specified ElementPoller for this Locator.
    /// This will not affect the default ElementPoller used for other lookups.
    pub fn with_poller(mut self, poller: ElementPoller) -> Self {
        self.poller = poller;
        self
    }

    /// Wait for the specified timeout, polling once after each interval.
    pub fn wait(self, timeout: Duration, interval: Duration) -> Self {
        self.with_poller(ElementPoller::TimeoutWithInterval(timeout, interval))
    }

    /// Check once, without waiting.
    pub fn nowait(self) -> Self {
        self.with_poller(ElementPoller::NoWait)
    }

    pub fn session(&self) -> &'a WebDriverSession {
        self.session
    }

    pub fn poller(&self) -> &ElementPoller {
        &self.poller
    }

    /// Wait until `by` resolves to an element satisfying `readiness`.
    pub fn until(&self, by: By<'_>, readiness: Readiness) -> WidgetResult<WebElement<'a>> {
        self.run(None, by, readiness)
    }

    /// Like [`Locator::until`], but searching beneath `parent` only.
    pub fn until_within(
        &self,
        parent: &WebElement<'a>,
        by: By<'_>,
        readiness: Readiness,
    ) -> WidgetResult<WebElement<'a>> {
        self.run(Some(parent), by, readiness)
    }

    pub fn present(&self, xpath: &str) -> WidgetResult<WebElement<'a>> {
        self.until(By::XPath(xpath), Readiness::Present)
    }

    pub fn visible(&self, xpath: &str) -> WidgetResult<WebElement<'a>> {
        self.until(By::XPath(xpath), Readiness::Visible)
    }

    pub fn clickable(&self, xpath: &str) -> WidgetResult<WebElement<'a>> {
        self.until(By::XPath(xpath), Readiness::Clickable)
    }

    /// Returns false instead of failing when the wait times out.
    pub fn exists(&self, by: By<'_>, readiness: Readiness) -> WidgetResult<bool> {
        match self.until(by, readiness) {
            Ok(_) => Ok(true),
            Err(WidgetError::LocatorTimeout { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn run(
        &self,
        parent: Option<&WebElement<'a>>,
        by: By<'_>,
        readiness: Readiness,
    ) -> WidgetResult<WebElement<'a>> {
        debug!("waiting for {} to be {}", by, readiness);
        let mut ticker = ElementPollerTicker::new(self.poller.clone());
        loop {
            match self.poll_once(parent, &by, readiness) {
                Ok(Some(element)) => {
                    debug!("{} is {} after {:?}", by, readiness, ticker.elapsed());
                    return Ok(element);
                }
                Ok(None) => {}
                Err(e) if e.is_transient() => debug!("ignoring transient error: {}", e),
                Err(e) => return Err(e),
            }

            if !ticker.tick() {
                return Err(WidgetError::LocatorTimeout {
                    query: by.to_string(),
                    readiness,
                    waited: ticker.elapsed(),
                });
            }
        }
    }

    /// One poll: the first candidate meeting `readiness`, if any.
    fn poll_once(
        &self,
        parent: Option<&WebElement<'a>>,
        by: &By<'_>,
        readiness: Readiness,
    ) -> WidgetResult<Option<WebElement<'a>>> {
        let candidates = match parent {
            Some(p) => p.find_elements(by.clone())?,
            None => self.session.find_elements(by.clone())?,
        };

        for candidate in candidates {
            match readiness.is_met(&candidate) {
                Ok(true) => return Ok(Some(candidate)),
                Ok(false) => {}
                Err(e) if e.is_transient() => {}
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }
}
