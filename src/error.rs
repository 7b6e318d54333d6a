use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thiserror::Error;

use crate::query::{MatchPolicy, Readiness};

pub type WidgetResult<T> = Result<T, WidgetError>;

/// Everything that can go wrong while locating or driving a widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Reported by the WebDriver server, or by the transport talking to it.
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),

    /// No node matching the query reached the requested readiness in time.
    #[error("timed out after {waited:?} waiting for {query} to be {readiness}")]
    LocatorTimeout {
        query: String,
        readiness: Readiness,
        waited: Duration,
    },

    #[error("could not find {widget} with {policy} label \"{label}\" using {query}")]
    WidgetNotFound {
        widget: &'static str,
        label: String,
        policy: MatchPolicy,
        query: String,
        #[source]
        source: Box<WidgetError>,
    },

    /// A resolved element lacks an attribute the lookup depends on.
    #[error("{element} has no \"{attribute}\" attribute")]
    MissingAttribute {
        attribute: &'static str,
        element: String,
    },

    #[error("option \"{value}\" not found in list \"{list_id}\" using {query}")]
    OptionNotFound {
        value: String,
        list_id: String,
        query: String,
        #[source]
        source: Box<WidgetError>,
    },

    #[error("column \"{column}\" header has no headCell_<index> class token (class=\"{class}\")")]
    MissingColumnToken { column: String, class: String },

    /// The zero-based cell coordinate has no one-based XPath position.
    #[error("cell (row {row}, column {column_index}) of column \"{column}\" is out of range")]
    CellOutOfRange {
        column: String,
        row: usize,
        column_index: usize,
    },

    #[error("invalid capabilities: {0}")]
    Capabilities(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unknown component type \"{0}\"")]
    UnknownComponent(String),

    #[error("action \"{action}\" is not supported for component \"{component}\"")]
    UnsupportedAction { component: String, action: String },

    #[error("action \"{action}\" on component \"{component}\" requires a value")]
    MissingValue { component: String, action: String },
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        WidgetError::WebDriver(e.into())
    }
}

impl From<std::io::Error> for WidgetError {
    fn from(e: std::io::Error) -> Self {
        WidgetError::WebDriver(e.into())
    }
}

impl From<base64::DecodeError> for WidgetError {
    fn from(e: base64::DecodeError) -> Self {
        WidgetError::WebDriver(e.into())
    }
}

impl WidgetError {
    /// True for errors that only mean "the page is not ready yet".
    ///
    /// The readiness gate keeps polling through these.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            WidgetError::WebDriver(WebDriverError::NoSuchElement(_))
                | WidgetError::WebDriver(WebDriverError::StaleElementReference(_))
        )
    }

    pub fn is_no_such_element(&self) -> bool {
        matches!(self, WidgetError::WebDriver(WebDriverError::NoSuchElement(_)))
    }
}

/// A simulated "no such element" error carrying `message`.
pub fn no_such_element(message: &str) -> WidgetError {
    WidgetError::WebDriver(thirtyfour::error::no_such_element(message))
}
