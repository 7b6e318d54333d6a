use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{error, info};
use serde::Serialize;
use serde_json::Value;
use thirtyfour::common::command::Command;
use thirtyfour::common::config::WebDriverConfig;
use thirtyfour::SessionId;

use crate::config::Settings;
use crate::error::WidgetResult;
use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};
use crate::http::reqwest_sync::ReqwestDriverSync;
use crate::webdrivercommands::{start_session, WebDriverCommands};
use crate::WebDriverSession;

/// The WebDriver struct represents a browser session.
///
/// For full documentation of all WebDriver methods,
/// see the [WebDriverCommands](trait.WebDriverCommands.html) trait.
pub type WebDriver = GenericWebDriver<ReqwestDriverSync>;

/// A synchronous WebDriver browser session, generic over the HTTP client.
///
/// # Example:
/// ```no_run
/// use appian_widgets::prelude::*;
///
/// fn main() -> WidgetResult<()> {
///     let caps = DesiredCapabilities::chrome();
///     let driver = WebDriver::new("http://localhost:4444", &caps)?;
///     driver.get("https://example.appiancloud.com/suite")?;
///     button::click(&driver.locator(), "Sign In", MatchPolicy::Exact)?;
///     driver.quit()
/// }
/// ```
#[derive(Debug)]
pub struct GenericWebDriver<T: WebDriverHttpClientSync> {
    pub session: WebDriverSession,
    capabilities: Value,
    quit_on_drop: bool,
    phantom: PhantomData<T>,
}

impl<T: 'static> GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    pub fn new<C>(server_url: &str, capabilities: C) -> WidgetResult<Self>
    where
        C: Serialize,
    {
        Self::new_with_timeout(server_url, capabilities, None)
    }

    /// Creates a new GenericWebDriver just like the `new` function. Allows a
    /// configurable timeout for all HTTP requests including the session creation.
    pub fn new_with_timeout<C>(
        server_url: &str,
        capabilities: C,
        timeout: Option<Duration>,
    ) -> WidgetResult<Self>
    where
        C: Serialize,
    {
        let params = HttpClientCreateParams {
            server_url: server_url.to_string(),
            timeout,
        };
        let conn = T::create(params)?;

        let (session_id, session_capabilities) = start_session(&conn, capabilities)?;
        info!("started WebDriver session {} on {}", session_id, server_url);

        let driver = GenericWebDriver {
            session: WebDriverSession::new(session_id, Arc::new(Mutex::new(conn))),
            capabilities: session_capabilities,
            quit_on_drop: false,
            phantom: PhantomData,
        };

        Ok(driver)
    }

    /// Open a session described by environment-derived settings.
    ///
    /// The session's query poller is taken from the settings and the
    /// session is closed when the driver is dropped.
    pub fn from_settings(settings: &Settings) -> WidgetResult<Self> {
        let caps = settings.capabilities()?;
        let mut driver = Self::new(&settings.webdriver_url, &caps)?;
        driver.set_query_poller(settings.poller());
        driver.quit_on_drop = true;
        Ok(driver)
    }

    /// Return a clone of the capabilities as returned by the server.
    pub fn capabilities(&self) -> Value {
        self.capabilities.clone()
    }

    pub fn session_id(&self) -> &SessionId {
        self.session.session_id()
    }

    pub fn config(&self) -> &WebDriverConfig {
        self.session.config()
    }

    pub fn config_mut(&mut self) -> &mut WebDriverConfig {
        self.session.config_mut()
    }

    /// Close the session automatically when this driver is dropped.
    pub fn set_quit_on_drop(&mut self, quit: bool) {
        self.quit_on_drop = quit;
    }

    /// End the webdriver session.
    pub fn quit(mut self) -> WidgetResult<()> {
        self.cmd(Command::DeleteSession)?;
        self.quit_on_drop = false;
        Ok(())
    }

    /// Set the request timeout for the HTTP client.
    pub fn set_request_timeout(&mut self, timeout: Duration) -> WidgetResult<()> {
        self.session.set_request_timeout(timeout)
    }
}

impl<T> WebDriverCommands for GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    fn session(&self) -> &WebDriverSession {
        &self.session
    }
}

impl<T> Drop for GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    /// Close the current session when the WebDriver struct goes out of scope.
    fn drop(&mut self) {
        if self.quit_on_drop && !(self.session.session_id()).is_empty() {
            if let Err(e) = self.cmd(Command::DeleteSession) {
                error!("Failed to close session: {:?}", e);
            }
        }
    }
}
