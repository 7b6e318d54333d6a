use log::info;

use crate::components::resolve;
use crate::error::WidgetResult;
use crate::query::xpath::text_matches;
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

const WIDGET: &str = "tab";

/// Accessible marker Appian renders beside the active tab.
const SELECTED_MARKER: &str = "Selected Tab.";

pub fn tab_query(label: &str, policy: MatchPolicy) -> String {
    format!(
        ".//div[@role=\"link\"]/div/div/div/div/div[./p/span[{}]]",
        text_matches("text()", label, policy)
    )
}

pub fn selected_tab_query(label: &str, policy: MatchPolicy) -> String {
    format!(
        ".//div[./div[./div/div/div/div/div/p/strong[{}]]/span[text()=\"{}\"]]/div[@role=\"link\"]",
        text_matches("text()", label, policy),
        SELECTED_MARKER
    )
}

/// Find the tab labelled `label`, but only while it is the selected one.
pub fn find_selected_tab<'a>(
    locator: &Locator<'a>,
    label: &str,
    policy: MatchPolicy,
) -> WidgetResult<WebElement<'a>> {
    let query = selected_tab_query(label, policy);
    resolve(locator, "selected tab", label, policy, By::XPath(&query), Readiness::Clickable)
}

pub fn select_tab(locator: &Locator<'_>, label: &str, policy: MatchPolicy) -> WidgetResult<()> {
    info!("tab \"{}\": select", label);
    let query = tab_query(label, policy);
    resolve(locator, WIDGET, label, policy, By::XPath(&query), Readiness::Clickable)?.click()
}
