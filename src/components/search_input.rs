//! Appian search inputs ("pickers" whose suggestions depend on typed text).
//!
//! The value is typed into the input; the suggestion list it opens is then
//! searched for an option whose normalized text equals the value.

use crate::components::dependent::{self, Activation, DependentWidget, Trigger};
use crate::error::WidgetResult;
use crate::query::xpath::{attr_equals, escape_string, normalized, text_matches};
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::WebElement;

const WIDGET: DependentWidget = DependentWidget {
    family: "search input",
    trigger_readiness: Readiness::Visible,
    option_readiness: Readiness::Visible,
    option_query,
};

pub fn trigger_query(label: &str, policy: MatchPolicy) -> String {
    format!(
        ".//div[./div/span[{}]]/div/div/div/input[@role=\"combobox\" and not(@aria-disabled=\"true\")]",
        text_matches(".", label, policy)
    )
}

pub fn option_query(list_id: &str, value: &str) -> String {
    format!(
        ".//ul[{} and @role=\"listbox\"]/li[@role=\"option\" and @tabindex=\"-1\" \
         and ./div/div/div/div/div/div/p[{} = {}]]",
        attr_equals("id", list_id),
        normalized("."),
        escape_string(value)
    )
}

/// Type `value` into the search input labelled `label` and pick the
/// matching suggestion.
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
    dependent::select(locator, &WIDGET, trigger, Activation::Type(value), value)
}
