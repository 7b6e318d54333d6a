//! Appian text inputs, found through the `<label for=...>` that names them.

use log::info;

use crate::{By, Keys, TypingData, WebElement};
use crate::components::{required_attribute, resolve};
use crate::error::WidgetResult;
use crate::query::xpath::text_matches;
use crate::query::{Locator, MatchPolicy, Readiness};

pub fn label_query(label: &str, policy: MatchPolicy) -> String {
    format!(".//div/label[{}]", text_matches(".", label, policy))
}

/// Resolve the labelled element named by a `<label>`'s `for` attribute.
pub(crate) fn find_labelled<'a>(
    locator: &Locator<'a>,
    widget: &'static str,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    let label_elem = resolve(
        locator,
        widget,
        label,
        policy,
        By::XPath(&label_query(label, policy)),
        Readiness::Clickable,
    )?;
    let target_id =
        required_attribute(&label_elem, "for", &format!("{} label \"{}\"", widget, label))?;
    resolve(locator, widget, label, policy, By::Id(&target_id), Readiness::Clickable)
}

pub fn find<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    find_labelled(locator, "input", label, policy)
}

/// Replace the contents of `component` with `value`.
pub fn set_value_by_component(component: &WebElement<'_>, value: &str) -> WidgetResult<()> {
    component.clear()?;
    component.send_keys(value)
}

/// Replace the contents of `component` with `value` and press Enter.
pub fn set_value_and_submit_by_component(
    component: &WebElement<'_>,
    value: &str,
) -> WidgetResult<()> {
    component.clear()?;
    component.send_keys(TypingData::from(value) + Keys::Enter)
}

pub fn set_value<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    info!("input \"{}\": setting value", label);
    let component = find(locator, label, policy)?;
    set_value_by_component(&component, value)?;
    Ok(component)
}

pub fn set_value_and_submit<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    info!("input \"{}\": setting value and submitting", label);
    let component = find(locator, label, policy)?;
    set_value_and_submit_by_component(&component, value)?;
    Ok(component)
}
