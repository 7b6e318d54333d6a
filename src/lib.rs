//! Label-keyed helpers for driving Appian user interfaces over WebDriver.
//!
//! Appian renders its components as deeply nested, generated markup with
//! few stable ids. This crate hides that markup behind one module per widget
//! family: find the button labelled "Submit", select "Approved" in the
//! dropdown labelled "Status", click the link in row 3 of the "Name" column.
//!
//! Every operation:
//!
//! - builds an XPath query from the caller's label and a [`MatchPolicy`]
//!   (exact or partial, whitespace-normalized),
//! - waits through a [`Locator`] until the element is present, visible or
//!   clickable, failing with the query in the error if it never is,
//! - performs one action on it.
//!
//! Nothing is cached between calls. The crate is synchronous: a session
//! must be driven from one thread at a time.
//!
//! ## Example
//!
//! The following example assumes you have a WebDriver server (chromedriver,
//! geckodriver or Selenium) running at localhost:4444.
//!
//! ```no_run
//! use appian_widgets::prelude::*;
//!
//! fn main() -> WidgetResult<()> {
//!     let caps = DesiredCapabilities::chrome();
//!     let driver = WebDriver::new("http://localhost:4444", &caps)?;
//!     driver.get("https://example.appiancloud.com/suite/sites/requests")?;
//!
//!     let locator = driver.locator();
//!     input::set_value(&locator, "Request Title", MatchPolicy::Exact, "New laptop")?;
//!     dropdown::select_by_label(&locator, "Priority", MatchPolicy::Exact, "High")?;
//!     date::set_value(&locator, "Needed By", MatchPolicy::Exact, "01/31/2025")?;
//!     button::click(&locator, "Submit", MatchPolicy::Partial)?;
//!
//!     let table = table::find_table(&locator, "Request Title")?;
//!     assert!(table::row_count(&table)? > 0);
//!
//!     driver.quit()
//! }
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::needless_doctest_main)]

/// Re-export common types.
pub use thirtyfour::common::command::By;
pub use thirtyfour::error::{WebDriverError, WebDriverResult};
pub use thirtyfour::{DesiredCapabilities, ElementId, Keys, SessionId, TypingData};

pub use components::{
    button, component_driver, date, dropdown, input, label, link, search_input, tab, table,
};
pub use config::Settings;
pub use error::{WidgetError, WidgetResult};
pub use query::{ElementPoller, Locator, MatchPolicy, Readiness};
pub use session::WebDriverSession;
pub use thirtyfour::common::config::WebDriverConfig;
pub use webdriver::GenericWebDriver;
pub use webdriver::WebDriver;
pub use webdrivercommands::WebDriverCommands;
pub use webelement::WebElement;

pub mod prelude {
    pub use crate::components::{
        button, component_driver, date, dropdown, input, label, link, search_input, tab, table,
    };
    pub use crate::error::{WidgetError, WidgetResult};
    pub use crate::query::{ElementPoller, Locator, MatchPolicy, Readiness};
    pub use crate::webdriver::WebDriver;
    pub use crate::webdrivercommands::WebDriverCommands;
    pub use crate::webelement::WebElement;
    pub use crate::{By, DesiredCapabilities, Keys, Settings};
}

pub mod components;
pub mod config;
pub mod error;
pub mod http {
    pub mod connection_sync;
    pub mod reqwest_sync;
}
pub mod query;
mod session;
mod webdriver;
mod webdrivercommands;
mod webelement;
