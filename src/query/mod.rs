//! Readiness-gated element lookup and XPath query building.

mod locator;
mod poller;
pub mod xpath;

pub use locator::{Locator, Readiness};
pub use poller::{ElementPoller, ElementPollerTicker};
pub use xpath::{escape_string, MatchPolicy};
