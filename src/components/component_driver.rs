//! Drive any widget from a `(component, action, label, value)` tuple.
//!
//! Useful for table-driven tests where steps are data rather than code:
//!
//! ```no_run
//! # use appian_widgets::prelude::*;
//! # fn main() -> WidgetResult<()> {
//! #     let caps = DesiredCapabilities::chrome();
//! #     let driver = WebDriver::new("http://localhost:4444", &caps)?;
//! let locator = driver.locator();
//! component_driver::execute(&locator, "Input Text", "Set Value", "Username", Some("jdoe"))?;
//! component_driver::execute(&locator, "Button", "Click", "Sign In", None)?;
//! #     Ok(())
//! # }
//! ```
//!
//! All labels are matched exactly.

use std::str::FromStr;

use crate::components::{button, date, dropdown, input, label, link, search_input, tab};
use crate::error::{WidgetError, WidgetResult};
use crate::query::{Locator, MatchPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Button,
    Link,
    Date,
    InputText,
    DropDown,
    SearchDropDown,
    Tab,
    Label,
}

impl FromStr for Component {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Button" => Ok(Component::Button),
            "Link" => Ok(Component::Link),
            "Date" => Ok(Component::Date),
            "Input Text" => Ok(Component::InputText),
            "Drop Down" => Ok(Component::DropDown),
            "Search Drop Down" => Ok(Component::SearchDropDown),
            "Tab" => Ok(Component::Tab),
            "Label" => Ok(Component::Label),
            other => Err(WidgetError::UnknownComponent(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Click,
    SetValue,
    SetValueAndSubmit,
    Select,
    Find,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Click" => Ok(Action::Click),
            "Set Value" => Ok(Action::SetValue),
            "Set Value And Submit" => Ok(Action::SetValueAndSubmit),
            "Select" => Ok(Action::Select),
            "Find" => Ok(Action::Find),
            other => Err(other.to_string()),
        }
    }
}

/// Parse and run one step.
pub fn execute(
    locator: &Locator<'_>,
    component: &str,
    action: &str,
    label: &str,
    value: Option<&str>,
) -> WidgetResult<()> {
    let parsed_component: Component = component.parse()?;
    let parsed_action: Action = action.parse().map_err(|action| WidgetError::UnsupportedAction {
        component: component.to_string(),
        action,
    })?;
    run(locator, parsed_component, parsed_action, label, value).map_err(|e| match e {
        WidgetError::UnsupportedAction { .. } => WidgetError::UnsupportedAction {
            component: component.to_string(),
            action: action.to_string(),
        },
        WidgetError::MissingValue { .. } => WidgetError::MissingValue {
            component: component.to_string(),
            action: action.to_string(),
        },
        other => other,
    })
}

/// Run one already-parsed step.
pub fn run(
    locator: &Locator<'_>,
    component: Component,
    action: Action,
    label: &str,
    value: Option<&str>,
) -> WidgetResult<()> {
    let exact = MatchPolicy::Exact;
    let need_value = || {
        value.ok_or_else(|| WidgetError::MissingValue {
            component: format!("{:?}", component),
            action: format!("{:?}", action),
        })
    };

    match (component, action) {
        (Component::Button, Action::Click) => button::click(locator, label, exact),
        (Component::Button, Action::Find) => button::find(locator, label, exact).map(drop),
        (Component::Link, Action::Click) => link::click(locator, label, exact).map(drop),
        (Component::Link, Action::Find) => link::find(locator, label, exact).map(drop),
        (Component::Date, Action::Click) => date::click(locator, label, exact).map(drop),
        (Component::Date, Action::SetValue) => {
            date::set_value(locator, label, exact, need_value()?).map(drop)
        }
        (Component::Date, Action::SetValueAndSubmit) => {
            date::set_value_and_submit(locator, label, exact, need_value()?).map(drop)
        }
        (Component::Date, Action::Find) => date::find(locator, label, exact).map(drop),
        (Component::InputText, Action::SetValue) => {
            input::set_value(locator, label, exact, need_value()?).map(drop)
        }
        (Component::InputText, Action::SetValueAndSubmit) => {
            input::set_value_and_submit(locator, label, exact, need_value()?).map(drop)
        }
        (Component::InputText, Action::Find) => input::find(locator, label, exact).map(drop),
        (Component::DropDown, Action::Select) => {
            dropdown::select_by_label(locator, label, exact, need_value()?).map(drop)
        }
        (Component::SearchDropDown, Action::Select) => {
            search_input::select_by_label(locator, label, exact, need_value()?).map(drop)
        }
        (Component::Tab, Action::Select) | (Component::Tab, Action::Click) => {
            tab::select_tab(locator, label, exact)
        }
        (Component::Tab, Action::Find) => tab::find_selected_tab(locator, label, exact).map(drop),
        (Component::Label, Action::Find) => label::find(locator, label, exact).map(drop),
        (Component::Label, Action::Click) => label::click(locator, label, exact),
        (component, action) => Err(WidgetError::UnsupportedAction {
            component: format!("{:?}", component),
            action: format!("{:?}", action),
        }),
    }
}
