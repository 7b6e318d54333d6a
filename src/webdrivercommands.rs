use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thirtyfour::common::command::{By, Command, FormatRequestData};
use thirtyfour::common::connection_common::convert_json;
use thirtyfour::error::{WebDriverError, WebDriverErrorInfo};
use thirtyfour::SessionId;

use crate::error::{no_such_element, WidgetResult};
use crate::http::connection_sync::WebDriverHttpClientSync;
use crate::query::Locator;
use crate::webelement::{convert_elements_sync, WebElement};
use crate::WebDriverSession;

/// Start a new WebDriver session, returning the session id and the
/// capabilities reported by the server.
pub fn start_session<C>(
    conn: &dyn WebDriverHttpClientSync,
    capabilities: C,
) -> WidgetResult<(SessionId, Value)>
where
    C: Serialize,
{
    let caps = serde_json::to_value(capabilities)?;
    let v = conn.execute(Command::NewSession(caps).format_request(&SessionId::null()))?;

    #[derive(Debug, Default, Deserialize)]
    struct ConnectionData {
        #[serde(default, rename(deserialize = "sessionId"))]
        session_id: String,
        #[serde(default)]
        capabilities: Value,
    }

    // W3C servers nest the session under "value"; legacy ones do not.
    let nested: ConnectionData = serde_json::from_value(v["value"].clone()).unwrap_or_default();
    let data = if nested.session_id.is_empty() {
        ConnectionData {
            session_id: v["sessionId"].as_str().unwrap_or_default().to_string(),
            capabilities: v["value"].clone(),
        }
    } else {
        nested
    };

    if data.session_id.is_empty() {
        let info = WebDriverErrorInfo::new(&format!("no sessionId in response: {}", v));
        return Err(WebDriverError::SessionNotCreated(info).into());
    }
    Ok((SessionId::from(data.session_id), data.capabilities))
}

/// All browser-level commands available to a session.
///
/// Anything that returns elements ties them to the session's lifetime.
pub trait WebDriverCommands {
    fn session(&self) -> &WebDriverSession;

    /// Convenience wrapper for executing a WebDriver command.
    fn cmd(&self, command: Command) -> WidgetResult<Value> {
        self.session().execute(command)
    }

    /// Navigate to the specified URL.
    fn get(&self, url: &str) -> WidgetResult<()> {
        self.cmd(Command::NavigateTo(url.to_string()))?;
        Ok(())
    }

    fn current_url(&self) -> WidgetResult<String> {
        let v = self.cmd(Command::GetCurrentUrl)?;
        Ok(convert_json(&v["value"])?)
    }

    fn title(&self) -> WidgetResult<String> {
        let v = self.cmd(Command::GetTitle)?;
        Ok(convert_json(&v["value"])?)
    }

    /// Find all elements matching the selector, without waiting.
    fn find_elements(&self, by: By<'_>) -> WidgetResult<Vec<WebElement<'_>>> {
        let v = self.cmd(Command::FindElements(by.get_w3c_selector()))?;
        convert_elements_sync(self.session(), &v["value"])
    }

    /// Find the first element matching the selector, without waiting.
    fn find_element(&self, by: By<'_>) -> WidgetResult<WebElement<'_>> {
        let description = by.to_string();
        self.find_elements(by)?
            .into_iter()
            .next()
            .ok_or_else(|| no_such_element(&description))
    }

    /// A readiness-gated locator using this session's configured poller.
    fn locator(&self) -> Locator<'_> {
        let session = self.session();
        Locator::new(session, session.config().query_poller.clone())
    }

    /// Take a screenshot of the current window and return it as PNG bytes.
    fn screenshot_as_png(&self) -> WidgetResult<Vec<u8>> {
        let v = self.cmd(Command::TakeScreenshot)?;
        let s: String = convert_json(&v["value"])?;
        Ok(base64::decode(&s)?)
    }

    /// Take a screenshot of the current window and write it to `path`.
    fn screenshot(&self, path: &Path) -> WidgetResult<()> {
        let png = self.screenshot_as_png()?;
        let mut file = File::create(path)?;
        file.write_all(&png)?;
        Ok(())
    }
}
