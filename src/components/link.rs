use log::info;

use crate::components::resolve;
use crate::error::WidgetResult;
use crate::query::xpath::text_matches;
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

const WIDGET: &str = "link";

pub fn query(label: &str, policy: MatchPolicy) -> String {
    format!(".//a[{}]", text_matches(".", label, policy))
}

pub fn find<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    let query = query(label, policy);
    resolve(locator, WIDGET, label, policy, By::XPath(&query), Readiness::Clickable)
}

/// Click the link showing `label`, returning it.
pub fn click<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    info!("link \"{}\": click", label);
    let component = find(locator, label, policy)?;
    component.click()?;
    Ok(component)
}
