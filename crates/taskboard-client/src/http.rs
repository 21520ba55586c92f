//! HTTP implementation of the server boundary.
//!
//! Reads go to the REST endpoints; actions are posted as JSON and answer with
//! `{ "data": .. }` on success or `{ "error": "<message>" }` when rejected.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Card, Tag};

use crate::api::{AssignUserInput, BoardActions, BoardQueries, CreateTagInput, UpdateCardInput};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentCountResponse {
    comment_count: u32,
}

#[derive(Debug, Deserialize)]
struct ActionResponse<T> {
    data: Option<T>,
    error: Option<String>,
}

impl<T> ActionResponse<T> {
    fn into_result(self, action: &str) -> TaskboardResult<T> {
        if let Some(error) = self.error {
            return Err(TaskboardError::Gateway(error));
        }
        self.data.ok_or_else(|| {
            TaskboardError::Internal(format!("{} response missing data", action))
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: Client,
    base_url: String,
}

impl HttpBoardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> TaskboardResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        self.client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json::<T>()
            .await
            .map_err(transport)
    }

    async fn run_action<I, T>(&self, action: &str, input: &I) -> TaskboardResult<T>
    where
        I: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(&format!("/api/actions/{}", action));
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(transport)?;
        parse_action_response(action, response).await
    }
}

async fn parse_action_response<T: DeserializeOwned>(
    action: &str,
    response: Response,
) -> TaskboardResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    match serde_json::from_str::<ActionResponse<T>>(&body) {
        Ok(parsed) if parsed.error.is_some() || status.is_success() => parsed.into_result(action),
        Ok(_) => Err(TaskboardError::Transport(format!("{} returned {}", action, status))),
        Err(_) if !status.is_success() => {
            Err(TaskboardError::Transport(format!("{} returned {}", action, status)))
        }
        Err(e) => Err(TaskboardError::Serialization(format!(
            "Failed to parse {} response: {} (body: {})",
            action, e, body
        ))),
    }
}

fn transport(err: reqwest::Error) -> TaskboardError {
    tracing::warn!("Request failed: {}", err);
    TaskboardError::Transport(err.to_string())
}

#[async_trait]
impl BoardActions for HttpBoardApi {
    async fn assign_user_to_card(&self, input: AssignUserInput) -> TaskboardResult<Card> {
        self.run_action("assign-user-to-card", &input).await
    }

    async fn update_card(&self, input: UpdateCardInput) -> TaskboardResult<Card> {
        self.run_action("update-card", &input).await
    }

    async fn create_tag(&self, input: CreateTagInput) -> TaskboardResult<Tag> {
        self.run_action("create-tag", &input).await
    }
}

#[async_trait]
impl BoardQueries for HttpBoardApi {
    async fn available_tags(&self, board_id: &str) -> TaskboardResult<Vec<Tag>> {
        self.get_json("/api/boards/tags", &[("boardId", board_id)])
            .await
    }

    async fn comment_count(&self, card_id: &str) -> TaskboardResult<u32> {
        let response: CommentCountResponse = self
            .get_json(&format!("/api/cards/{}/comments/count-in-card", card_id), &[])
            .await?;
        Ok(response.comment_count)
    }
}
