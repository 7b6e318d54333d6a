//! A scripted stand-in for a WebDriver server.
//!
//! Elements are registered against the exact selector string the widget code
//! is expected to send. Elements can be hidden until another element has
//! been clicked or typed into, which is how Appian's dropdown lists behave.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use appian_widgets::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};
use appian_widgets::{ElementPoller, WebDriverSession};
use serde_json::{json, Value};
use thirtyfour::common::command::MAGIC_ELEMENTID;
use thirtyfour::error::{WebDriverError, WebDriverResult};
use thirtyfour::{RequestData, RequestMethod, SessionId};

pub const SESSION_ID: &str = "fake-session";

#[derive(Debug, Clone)]
pub struct FakeElement {
    pub name: String,
    pub text: String,
    pub attributes: HashMap<String, String>,
    pub displayed: bool,
    pub enabled: bool,
    /// Only findable once this element has been clicked or typed into.
    pub revealed_by: Option<usize>,
}

impl FakeElement {
    pub fn new(name: &str) -> Self {
        FakeElement {
            name: name.to_string(),
            text: String::new(),
            attributes: HashMap::new(),
            displayed: true,
            enabled: true,
            revealed_by: None,
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn revealed_by(mut self, element: usize) -> Self {
        self.revealed_by = Some(element);
        self
    }
}

#[derive(Debug, Default)]
pub struct FakePage {
    elements: Vec<FakeElement>,
    /// (parent, selector value, element)
    matches: Vec<(Option<usize>, String, usize)>,
    activated: HashSet<usize>,
    failures: HashMap<String, VecDeque<(u16, String)>>,
    pub log: Vec<String>,
}

impl FakePage {
    pub fn shared() -> Arc<Mutex<FakePage>> {
        Arc::new(Mutex::new(FakePage::default()))
    }

    /// Register `element` as a match for the XPath `query`.
    pub fn add(&mut self, query: &str, element: FakeElement) -> usize {
        self.add_scoped(None, query, element)
    }

    /// Register `element` as a match for `query` evaluated beneath `parent`.
    pub fn add_scoped(&mut self, parent: Option<usize>, query: &str, element: FakeElement) -> usize {
        let index = self.elements.len();
        self.elements.push(element);
        self.matches.push((parent, query.to_string(), index));
        index
    }

    /// Register `element` as the element with the given id.
    pub fn add_with_id(&mut self, id: &str, element: FakeElement) -> usize {
        self.add(&id_selector(id), element.attr("id", id))
    }

    /// Make an existing element match another query too.
    pub fn also_match(&mut self, query: &str, element: usize) {
        self.matches.push((None, query.to_string(), element));
    }

    /// The next lookup of `query` fails with the given W3C error.
    pub fn fail_next(&mut self, query: &str, status: u16, error: &str) {
        self.failures
            .entry(query.to_string())
            .or_default()
            .push_back((status, error.to_string()));
    }

    pub fn element(&self, index: usize) -> &FakeElement {
        &self.elements[index]
    }

    pub fn clicked(&self) -> Vec<String> {
        self.log
            .iter()
            .filter_map(|entry| entry.strip_prefix("click ").map(str::to_string))
            .collect()
    }

    fn find(&mut self, parent: Option<usize>, selector: &str) -> WebDriverResult<Value> {
        if let Some((status, error)) =
            self.failures.get_mut(selector).and_then(|queue| queue.pop_front())
        {
            return Err(w3c_error(status, &error));
        }

        let found: Vec<Value> = self
            .matches
            .iter()
            .filter(|(p, q, _)| *p == parent && q == selector)
            .map(|(_, _, index)| *index)
            .filter(|index| match self.elements[*index].revealed_by {
                Some(revealer) => self.activated.contains(&revealer),
                None => true,
            })
            .map(|index| element_ref(index))
            .collect();
        Ok(json!({ "value": found }))
    }

    fn handle(&mut self, request: RequestData) -> WebDriverResult<Value> {
        let parts: Vec<&str> = request.url.trim_start_matches('/').split('/').collect();
        let body = request.body.unwrap_or(Value::Null);

        match (request.method, parts.as_slice()) {
            (RequestMethod::Post, ["session"]) => {
                self.log.push("new session".to_string());
                Ok(json!({"value": {"sessionId": SESSION_ID, "capabilities": {"browserName": "fake"}}}))
            }
            (RequestMethod::Delete, ["session", _]) => {
                self.log.push("quit".to_string());
                Ok(json!({ "value": null }))
            }
            (RequestMethod::Post, ["session", _, "url"]) => {
                self.log.push(format!("navigate {}", body["url"].as_str().unwrap_or_default()));
                Ok(json!({ "value": null }))
            }
            (RequestMethod::Get, ["session", _, "title"]) => Ok(json!({ "value": "Fake Page" })),
            (RequestMethod::Post, ["session", _, "elements"]) => {
                let selector = body["value"].as_str().unwrap_or_default().to_string();
                self.find(None, &selector)
            }
            (RequestMethod::Post, ["session", _, "element", id, "elements"]) => {
                let parent = parse_element_id(id)?;
                let selector = body["value"].as_str().unwrap_or_default().to_string();
                self.find(Some(parent), &selector)
            }
            (method, ["session", _, "element", id, command, rest @ ..]) => {
                let index = parse_element_id(id)?;
                let element = self.elements[index].clone();
                match (method, *command) {
                    (RequestMethod::Post, "click") => {
                        self.log.push(format!("click {}", element.name));
                        self.activated.insert(index);
                        Ok(json!({ "value": null }))
                    }
                    (RequestMethod::Post, "clear") => {
                        self.log.push(format!("clear {}", element.name));
                        Ok(json!({ "value": null }))
                    }
                    (RequestMethod::Post, "value") => {
                        let text = body["text"].as_str().unwrap_or_default();
                        self.log.push(format!("type {} {}", element.name, text));
                        self.activated.insert(index);
                        Ok(json!({ "value": null }))
                    }
                    (RequestMethod::Get, "attribute") => {
                        let name = rest.first().copied().unwrap_or_default();
                        Ok(json!({ "value": element.attributes.get(name) }))
                    }
                    (RequestMethod::Get, "text") => Ok(json!({ "value": element.text })),
                    (RequestMethod::Get, "displayed") => Ok(json!({ "value": element.displayed })),
                    (RequestMethod::Get, "enabled") => Ok(json!({ "value": element.enabled })),
                    _ => Err(w3c_error(404, "unknown command")),
                }
            }
            _ => Err(w3c_error(404, "unknown command")),
        }
    }
}

pub fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id)
}

fn element_ref(index: usize) -> Value {
    let mut reference = serde_json::Map::new();
    reference.insert(MAGIC_ELEMENTID.to_string(), Value::String(element_id(index)));
    Value::Object(reference)
}

fn element_id(index: usize) -> String {
    format!("e{}", index)
}

fn parse_element_id(id: &str) -> WebDriverResult<usize> {
    id.trim_start_matches('e')
        .parse()
        .map_err(|_| w3c_error(404, "no such element"))
}

fn w3c_error(status: u16, error: &str) -> WebDriverError {
    let body = json!({"value": {"error": error, "message": format!("fake: {}", error), "stacktrace": ""}});
    WebDriverError::parse(status, body.to_string())
}

#[derive(Debug)]
pub struct FakeDriver {
    page: Arc<Mutex<FakePage>>,
}

impl WebDriverHttpClientSync for FakeDriver {
    fn create(_params: HttpClientCreateParams) -> WebDriverResult<Self> {
        Ok(FakeDriver {
            page: FakePage::shared(),
        })
    }

    fn set_request_timeout(&mut self, _timeout: Duration) {}

    fn execute(&self, request_data: RequestData) -> WebDriverResult<Value> {
        self.page.lock().unwrap().handle(request_data)
    }
}

/// A session over `page` with a short poller, so timeouts stay fast.
pub fn session(page: &Arc<Mutex<FakePage>>) -> WebDriverSession {
    let conn: Arc<Mutex<dyn WebDriverHttpClientSync>> = Arc::new(Mutex::new(FakeDriver {
        page: page.clone(),
    }));
    let mut session = WebDriverSession::new(SessionId::from(SESSION_ID), conn);
    session.config_mut().query_poller =
        ElementPoller::TimeoutWithInterval(Duration::from_millis(150), Duration::from_millis(10));
    session
}
