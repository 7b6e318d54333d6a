use std::fmt::Debug;
use std::time::Duration;

use thirtyfour::common::connection_common::reqwest_support::build_reqwest_headers;
use thirtyfour::error::{WebDriverError, WebDriverResult};
use thirtyfour::{RequestData, RequestMethod};

use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};

/// Default timeout for a single WebDriver request.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Synchronous connection to the remote WebDriver server.
#[derive(Debug)]
pub struct ReqwestDriverSync {
    url: String,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl WebDriverHttpClientSync for ReqwestDriverSync {
    fn create(params: HttpClientCreateParams) -> WebDriverResult<Self> {
        let url = params.server_url.trim_end_matches('/').to_owned();
        let headers = build_reqwest_headers(&url)?;
        Ok(ReqwestDriverSync {
            url,
            client: reqwest::blocking::Client::builder().default_headers(headers).build()?,
            timeout: params.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }

    fn set_request_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Send one request, turning W3C error bodies into `WebDriverError`s.
    fn execute(&self, request_data: RequestData) -> WebDriverResult<serde_json::Value> {
        let url = format!("{}{}", self.url, request_data.url);
        let request = match request_data.method {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
            RequestMethod::Delete => self.client.delete(&url),
        };
        let request = match request_data.body {
            Some(body) => request.json(&body),
            None => request,
        };

        let resp = request.timeout(self.timeout).send()?;
        let status = resp.status().as_u16();
        if status < 400 {
            Ok(resp.json()?)
        } else {
            Err(WebDriverError::parse(status, resp.text()?))
        }
    }
}
