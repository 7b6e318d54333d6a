use std::sync::{Arc, Mutex};
use std::time::Duration;

use thirtyfour::common::command::{Command, FormatRequestData};
use thirtyfour::common::config::WebDriverConfig;
use thirtyfour::SessionId;

use crate::config::default_poller;
use crate::error::WidgetResult;
use crate::http::connection_sync::WebDriverHttpClientSync;
use crate::WebDriverCommands;

#[derive(Debug)]
pub struct WebDriverSession {
    session_id: SessionId,
    conn: Arc<Mutex<dyn WebDriverHttpClientSync>>,
    config: WebDriverConfig,
}

impl WebDriverSession {
    /// A session whose lookups poll with the crate's default wait.
    pub fn new(session_id: SessionId, conn: Arc<Mutex<dyn WebDriverHttpClientSync>>) -> Self {
        let mut config = WebDriverConfig::new();
        config.query_poller = default_poller();
        Self {
            session_id,
            conn,
            config,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn config(&self) -> &WebDriverConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WebDriverConfig {
        &mut self.config
    }

    pub fn execute(&self, command: Command) -> WidgetResult<serde_json::Value> {
        let request = command.format_request(&self.session_id);
        let conn = self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(conn.execute(request)?)
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) -> WidgetResult<()> {
        let mut conn = self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        conn.set_request_timeout(timeout);
        Ok(())
    }
}

impl WebDriverCommands for WebDriverSession {
    fn session(&self) -> &WebDriverSession {
        self
    }
}
