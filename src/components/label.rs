//! Free-standing text on the page: headings, rich text, messages.

use crate::components::resolve;
use crate::error::WidgetResult;
use crate::query::xpath::text_matches;
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

const WIDGET: &str = "label";

/// Any element whose own text matches `label`.
pub fn query(label: &str, policy: MatchPolicy) -> String {
    format!(".//*[{}]", text_matches("text()", label, policy))
}

pub fn find<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    let query = query(label, policy);
    resolve(locator, WIDGET, label, policy, By::XPath(&query), Readiness::Visible)
}

pub fn click(locator: &Locator<'_>, label: &str, policy: MatchPolicy) -> WidgetResult<()> {
    find(locator, label, policy)?.click()
}

/// Whether the text becomes visible before the locator gives up.
pub fn exists(locator: &Locator<'_>, label: &str, policy: MatchPolicy) -> WidgetResult<bool> {
    locator.exists(By::XPath(&query(label, policy)), Readiness::Visible)
}
