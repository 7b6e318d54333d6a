use std::fmt;

use serde_json::Value;
use thirtyfour::common::command::{By, Command};
use thirtyfour::common::connection_common::{convert_json, convert_json_vec};
use thirtyfour::{ElementId, ElementRef, TypingData};

use crate::error::{no_such_element, WidgetResult};
use crate::webdrivercommands::WebDriverCommands;
use crate::WebDriverSession;

/// Unwrap the raw JSON into a Vec of WebElement structs.
pub fn convert_elements_sync<'a>(
    driver: &'a WebDriverSession,
    value: &Value,
) -> WidgetResult<Vec<WebElement<'a>>> {
    let values: Vec<ElementRef> = convert_json_vec(value)?;
    Ok(values.into_iter().map(|x| WebElement::new(driver, ElementId::from(x.id))).collect())
}

/// The WebElement struct encapsulates a single element on a page.
///
/// Elements are returned by lookups on a session or a `Locator` and borrow
/// the session, so a handle can never outlive the browser it came from.
/// Widget operations re-resolve their elements on every call; a handle is
/// only good until the page re-renders.
#[derive(Debug, Clone)]
pub struct WebElement<'a> {
    pub element_id: ElementId,
    session: &'a WebDriverSession,
}

impl<'a> WebElement<'a> {
    /// Create a new WebElement struct.
    ///
    /// Typically you would not call this directly. WebElement structs are
    /// usually constructed by a lookup on a session or a `Locator`.
    pub fn new(session: &'a WebDriverSession, element_id: ElementId) -> Self {
        WebElement {
            element_id,
            session,
        }
    }

    ///Convenience wrapper for executing a WebDriver command.
    fn cmd(&self, command: Command) -> WidgetResult<Value> {
        self.session.cmd(command)
    }

    pub fn session(&self) -> &'a WebDriverSession {
        self.session
    }

    /// Get the text contents for this WebElement.
    pub fn text(&self) -> WidgetResult<String> {
        let v = self.cmd(Command::GetElementText(self.element_id.clone()))?;
        Ok(convert_json(&v["value"])?)
    }

    /// Get the id for this WebElement.
    pub fn id(&self) -> WidgetResult<Option<String>> {
        self.get_attribute("id")
    }

    /// Get the class name for this WebElement.
    pub fn class_name(&self) -> WidgetResult<Option<String>> {
        self.get_attribute("class")
    }

    /// Click the WebElement.
    pub fn click(&self) -> WidgetResult<()> {
        self.cmd(Command::ElementClick(self.element_id.clone()))?;
        Ok(())
    }

    /// Clear the WebElement contents.
    pub fn clear(&self) -> WidgetResult<()> {
        self.cmd(Command::ElementClear(self.element_id.clone()))?;
        Ok(())
    }

    /// Get the specified attribute.
    ///
    /// Returns `None` when the attribute is not set on the element.
    pub fn get_attribute(&self, name: &str) -> WidgetResult<Option<String>> {
        let v =
            self.cmd(Command::GetElementAttribute(self.element_id.clone(), name.to_string()))?;
        Ok(v["value"].as_str().map(str::to_string))
    }

    /// Return true if the WebElement is currently displayed, otherwise false.
    pub fn is_displayed(&self) -> WidgetResult<bool> {
        let v = self.cmd(Command::IsElementDisplayed(self.element_id.clone()))?;
        Ok(convert_json(&v["value"])?)
    }

    /// Return true if the WebElement is currently enabled, otherwise false.
    pub fn is_enabled(&self) -> WidgetResult<bool> {
        let v = self.cmd(Command::IsElementEnabled(self.element_id.clone()))?;
        Ok(convert_json(&v["value"])?)
    }

    /// Return true if the WebElement is both displayed and enabled.
    pub fn is_clickable(&self) -> WidgetResult<bool> {
        Ok(self.is_displayed()? && self.is_enabled()?)
    }

    /// Search for all child elements of this WebElement that match the
    /// specified selector.
    pub fn find_elements(&self, by: By<'_>) -> WidgetResult<Vec<WebElement<'a>>> {
        let selector = by.get_w3c_selector();
        let v = self.cmd(Command::FindElementsFromElement(self.element_id.clone(), selector))?;
        convert_elements_sync(self.session, &v["value"])
    }

    /// Search for a child element of this WebElement using the specified
    /// selector.
    pub fn find_element(&self, by: By<'_>) -> WidgetResult<WebElement<'a>> {
        let description = by.to_string();
        self.find_elements(by)?
            .into_iter()
            .next()
            .ok_or_else(|| no_such_element(&format!("{} beneath {}", description, self)))
    }

    /// Type the specified text or keys into this element.
    ///
    /// Accepts anything `TypingData` converts from, including `Keys` and
    /// sums such as `TypingData::from("query") + Keys::Enter`.
    pub fn send_keys<S>(&self, keys: S) -> WidgetResult<()>
    where
        S: Into<TypingData>,
    {
        self.cmd(Command::ElementSendKeys(self.element_id.clone(), keys.into()))?;
        Ok(())
    }
}

impl<'a> fmt::Display for WebElement<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"(session="{}", element="{}")"#, self.session.session_id(), self.element_id)
    }
}
