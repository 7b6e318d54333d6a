use std::fmt::Debug;
use std::time::Duration;

use thirtyfour::error::WebDriverResult;
use thirtyfour::RequestData;

/// Parameters used when creating a HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientCreateParams {
    pub server_url: String,
    pub timeout: Option<Duration>,
}

/// Trait for executing HTTP requests to selenium/webdriver.
/// As long as you have some struct that implements WebDriverHttpClientSync,
/// you can turn it into a WebDriver like this:
///
/// ```ignore
/// // Assuming MyHttpClient implements WebDriverHttpClientSync.
/// pub type MyWebDriver = GenericWebDriver<MyHttpClient>;
/// ```
///
/// The integration tests drive every widget through such a client, one
/// that answers from a scripted page instead of a browser.
pub trait WebDriverHttpClientSync: Debug + Send + Sync {
    fn create(params: HttpClientCreateParams) -> WebDriverResult<Self>
    where
        Self: Sized;

    fn set_request_timeout(&mut self, timeout: Duration);

    fn execute(&self, request_data: RequestData) -> WebDriverResult<serde_json::Value>;
}
