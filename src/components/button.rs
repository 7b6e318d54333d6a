//! Appian buttons, matched on the text of their inner `<span>`.

use log::info;

use crate::components::resolve;
use crate::error::WidgetResult;
use crate::query::xpath::text_matches;
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

const WIDGET: &str = "button";

pub fn query(label: &str, policy: MatchPolicy) -> String {
    format!(".//button[./span[{}]]", text_matches(".", label, policy))
}

pub fn find<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    let query = query(label, policy);
    resolve(locator, WIDGET, label, policy, By::XPath(&query), Readiness::Clickable)
}

pub fn click(locator: &Locator<'_>, label: &str, policy: MatchPolicy) -> WidgetResult<()> {
    info!("button \"{}\": click", label);
    find(locator, label, policy)?.click()
}

/// Click an `<input type="submit">` style button by its id.
pub fn click_input_button_by_id(locator: &Locator<'_>, id: &str) -> WidgetResult<()> {
    info!("input button #{}: click", id);
    resolve(locator, WIDGET, id, MatchPolicy::Exact, By::Id(id), Readiness::Clickable)?.click()
}
