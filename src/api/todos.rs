//! HTTP client for the remote to-do list API.
//!
//! Speaks plain JSON over REST, relative to a configurable base URL:
//!
//! | Operation | Request                          | Response  |
//! |-----------|----------------------------------|-----------|
//! | list      | `GET /todos?userId={user_id}`    | `Todo[]`  |
//! | create    | `POST /todos`                    | `Todo`    |
//! | update    | `PATCH /todos/{id}` (full record) | `Todo`   |
//! | delete    | `DELETE /todos/{id}`             | empty     |
//!
//! Any non-success status is reported as an error together with transport
//! and decoding failures.

use super::TodoApi;
use crate::libs::config::ConfigModule;
use crate::libs::data_storage::DEFAULT_API_URL;
use crate::libs::messages::Message;
use crate::libs::todo::{NewTodo, Todo};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::{Deserialize, Serialize};

const TODOS_PATH: &str = "todos";
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// REST client bound to one user.
#[derive(Debug, Clone)]
pub struct TodosClient {
    client: Client,
    config: ApiConfig,
    user_id: u32,
}

impl TodosClient {
    pub fn new(config: &ApiConfig, user_id: u32) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            config: config.clone(),
            user_id,
        })
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), TODOS_PATH)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl TodoApi for TodosClient {
    async fn list(&self) -> Result<Vec<Todo>> {
        let url = self.collection_url();
        tracing::debug!(%url, user_id = self.user_id, "fetching todos");

        let response = self
            .client
            .get(&url)
            .query(&[("userId", self.user_id)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Vec<Todo>>().await?)
    }

    async fn create(&self, todo: &Todo) -> Result<Todo> {
        let url = self.collection_url();
        tracing::debug!(%url, title = %todo.title, "creating todo");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&NewTodo::from(todo))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Todo>().await?)
    }

    async fn update(&self, todo: &Todo) -> Result<Todo> {
        let url = self.item_url(todo.id);
        tracing::debug!(%url, "updating todo");

        let response = self
            .client
            .patch(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(todo)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Todo>().await?)
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, "deleting todo");

        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}

/// Connection settings for the remote API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL without the `/todos` path, e.g. `https://mate.academy/students-api`.
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Todos API".to_string(),
        }
    }

    /// Prompts for the API base URL, offering the current value as default.
    pub fn init(config: &Option<ApiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleApi);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
