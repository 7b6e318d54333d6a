//! Label-keyed operations, one module per Appian widget family.
//!
//! Every operation takes the [`Locator`] it should resolve elements with, so
//! the caller decides how long to wait. Nothing here holds on to element
//! handles between calls.

use crate::error::{WidgetError, WidgetResult};
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

pub mod button;
pub mod component_driver;
pub mod date;
mod dependent;
pub mod dropdown;
pub mod input;
pub mod label;
pub mod link;
pub mod search_input;
pub mod tab;
pub mod table;

/// Resolve a labelled widget, naming the label and policy if it never shows up.
pub(crate) fn resolve<'a>(
    locator: &Locator<'a>,
    widget: &'static str,
    label: &str,
    policy: MatchPolicy,
    by: By<'_>,
    readiness: Readiness,
) -> WidgetResult<WebElement<'a>> {
    let query = by.to_string();
    locator.until(by, readiness).map_err(|e| match e {
        WidgetError::LocatorTimeout { .. } => WidgetError::WidgetNotFound {
            widget,
            label: label.to_string(),
            policy,
            query,
            source: Box::new(e),
        },
        other => other,
    })
}

/// Read an attribute the lookup cannot proceed without.
pub(crate) fn required_attribute(
    element: &WebElement<'_>,
    attribute: &'static str,
    description: &str,
) -> WidgetResult<String> {
    match element.get_attribute(attribute)? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(WidgetError::MissingAttribute {
            attribute,
            element: description.to_string(),
        }),
    }
}
