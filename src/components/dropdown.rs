//! Appian dropdown fields.
//!
//! ```no_run
//! # use appian_widgets::prelude::*;
//! # fn main() -> WidgetResult<()> {
//! #     let caps = DesiredCapabilities::chrome();
//! #     let driver = WebDriver::new("http://localhost:4444", &caps)?;
//! dropdown::select_by_label(&driver.locator(), "Status", MatchPolicy::Exact, "Approved")?;
//! #     Ok(())
//! # }
//! ```

use crate::components::dependent::{self, Activation, DependentWidget, Trigger};
use crate::components::required_attribute;
use crate::error::{no_such_element, WidgetResult};
use crate::query::xpath::{attr_equals, escape_string, normalized, text_matches};
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

const WIDGET: DependentWidget = DependentWidget {
    family: "dropdown",
    trigger_readiness: Readiness::Clickable,
    option_readiness: Readiness::Clickable,
    option_query,
};

const ENABLED_COMBOBOX: &str = "@role=\"combobox\" and not(@aria-disabled=\"true\")";

/// Where a dropdown field renders its combobox, relative to the field.
const COMPONENT_COMBOBOX: &str = "./div/div/div/div[@role=\"combobox\"]";

/// The enabled combobox beneath the field whose label matches.
pub fn trigger_query(label: &str, policy: MatchPolicy) -> String {
    format!(
        ".//div[./div/span[{}]]/div/div/div/div[{}]",
        text_matches("text()", label, policy),
        ENABLED_COMBOBOX
    )
}

/// The enabled combobox with the given id.
pub fn combobox_query(combobox_id: &str) -> String {
    format!(".//div[{} and {}]", attr_equals("id", combobox_id), ENABLED_COMBOBOX)
}

/// The option showing `value` inside the list with id `list_id`.
pub fn option_query(list_id: &str, value: &str) -> String {
    format!(
        ".//div/ul[{}]/li[./div[{} = {}]]",
        attr_equals("id", list_id),
        normalized("text()"),
        escape_string(value)
    )
}

/// Select `value` in the dropdown labelled `label`.
pub fn select_by_label<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    let trigger = Trigger {
        label,
        policy,
        query: trigger_query(label, policy),
    };
    dependent::select(locator, &WIDGET, trigger, Activation::Click, value)
}

/// Select `value` in the dropdown whose combobox has id `combobox_id`.
pub fn select_by_combobox_id<'a>(
    locator: &Locator<'a>,
    combobox_id: &str,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    let trigger = Trigger {
        label: combobox_id,
        policy: MatchPolicy::Exact,
        query: combobox_query(combobox_id),
    };
    dependent::select(locator, &WIDGET, trigger, Activation::Click, value)
}

/// Select `value` in a dropdown field element the caller already holds.
///
/// Only the field's combobox id is taken from `component`; the selection
/// itself re-resolves the combobox through [`select_by_combobox_id`].
pub fn select_by_component<'a>(
    locator: &Locator<'a>,
    component: &WebElement<'a>,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    let combobox = component
        .find_element(By::XPath(COMPONENT_COMBOBOX))
        .map_err(|e| {
            if e.is_no_such_element() {
                no_such_element(&format!("no dropdown combobox at {}", COMPONENT_COMBOBOX))
            } else {
                e
            }
        })?;
    let combobox_id = required_attribute(&combobox, "id", "dropdown combobox")?;
    select_by_combobox_id(locator, &combobox_id, value)
}
