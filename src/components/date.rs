//! Appian date fields.
//!
//! A date field renders as a `<label for=...>` plus the text input it
//! points at, so lookups resolve the label first and then the input by id.
//! Values are typed as the user would type them, e.g. `"01/31/2024"`.

use log::info;

use crate::components::input;
use crate::error::WidgetResult;
use crate::query::{Locator, MatchPolicy};
use crate::WebElement;

const WIDGET: &str = "date";

/// Find the date input labelled `label`.
pub fn find<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    input::find_labelled(locator, WIDGET, label, policy)
}

/// Type `value` into the date field labelled `label`.
pub fn set_value<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    info!("date \"{}\": setting {}", label, value);
    let component = find(locator, label, policy)?;
    input::set_value_by_component(&component, value)?;
    Ok(component)
}

/// Type `value` into the date field labelled `label`, then press Enter.
pub fn set_value_and_submit<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    info!("date \"{}\": setting {} and submitting", label, value);
    let component = find(locator, label, policy)?;
    input::set_value_and_submit_by_component(&component, value)?;
    Ok(component)
}

/// Click the date field labelled `label`, opening its picker.
pub fn click<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    let component = find(locator, label, policy)?;
    component.click()?;
    Ok(component)
}
