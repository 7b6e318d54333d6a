//! The two-stage lookup behind dropdowns and search inputs.
//!
//! A trigger (a `combobox` role element) is resolved by label and activated.
//! Once open, it names its options list through `aria-controls`, and the
//! option is then looked up inside that list only, since several lists of
//! the same shape can be open in one page.

use log::{info, warn};

use crate::components::input;
use crate::components::{required_attribute, resolve};
use crate::error::{WidgetError, WidgetResult};
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

pub(crate) const LIST_ID_ATTRIBUTE: &str = "aria-controls";

/// What to do to the trigger to make it open its list.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Activation<'v> {
    Click,
    Type(&'v str),
}

/// Describes one composite widget family.
pub(crate) struct DependentWidget {
    pub family: &'static str,
    pub trigger_readiness: Readiness,
    pub option_readiness: Readiness,
    pub option_query: fn(list_id: &str, value: &str) -> String,
}

/// How the trigger is found.
pub(crate) struct Trigger<'l> {
    pub label: &'l str,
    pub policy: MatchPolicy,
    pub query: String,
}

/// Resolve `trigger`, activate it, then click the option showing `value`.
///
/// Returns the trigger element.
pub(crate) fn select<'a>(
    locator: &Locator<'a>,
    widget: &DependentWidget,
    trigger: Trigger<'_>,
    activation: Activation<'_>,
    value: &str,
) -> WidgetResult<WebElement<'a>> {
    info!("{} \"{}\": selecting \"{}\"", widget.family, trigger.label, value);
    let element = resolve(
        locator,
        widget.family,
        trigger.label,
        trigger.policy,
        By::XPath(&trigger.query),
        widget.trigger_readiness,
    )?;

    match activation {
        Activation::Click => element.click()?,
        Activation::Type(text) => input::set_value_by_component(&element, text)?,
    }

    let description = format!("{} \"{}\"", widget.family, trigger.label);
    let list_id = required_attribute(&element, LIST_ID_ATTRIBUTE, &description).map_err(|e| {
        warn!("{} has no dependent list id", description);
        e
    })?;

    let option_query = (widget.option_query)(&list_id, value);
    let by = By::XPath(&option_query);
    let query = by.to_string();
    let option = locator.until(by, widget.option_readiness).map_err(|e| match e {
        WidgetError::LocatorTimeout { .. } => WidgetError::OptionNotFound {
            value: value.to_string(),
            list_id: list_id.clone(),
            query,
            source: Box::new(e),
        },
        other => other,
    })?;
    option.click()?;
    Ok(element)
}
