use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use taskboard_client::{
    HttpBoardApi, MutationGateway, NavigationContext, NotificationCenter, QueryCache,
};
use taskboard_core::{AppConfig, TaskboardError, TaskboardResult};
use taskboard_domain::{BoardSnapshot, ViewMode};

/// Everything a command needs: the board snapshot on disk plus the resolved
/// server settings.
pub struct CliContext {
    pub snapshot: BoardSnapshot,
    pub config: AppConfig,
    file_path: PathBuf,
    api_url: Option<String>,
    workspace_id: Option<String>,
    cache: Arc<QueryCache>,
    notifications: Arc<NotificationCenter>,
}

impl CliContext {
    pub async fn load(
        file_path: &str,
        api_url: Option<String>,
        workspace_id: Option<String>,
        config: AppConfig,
    ) -> TaskboardResult<Self> {
        let file_path = PathBuf::from(file_path);
        if !file_path.exists() {
            return Err(TaskboardError::NotFound(format!(
                "Board file not found: {}",
                file_path.display()
            )));
        }

        let data = tokio::fs::read_to_string(&file_path).await?;
        let snapshot = BoardSnapshot::from_json(&data)?;
        snapshot.validate()?;
        tracing::debug!(
            board_id = %snapshot.board.id,
            lists = snapshot.board.lists.len(),
            "Loaded board snapshot"
        );

        let api_url = api_url.or_else(|| config.api_base_url.clone());
        let workspace_id = workspace_id.or_else(|| config.workspace_id.clone());

        Ok(Self {
            snapshot,
            config,
            file_path,
            api_url,
            workspace_id,
            cache: Arc::new(QueryCache::new()),
            notifications: Arc::new(NotificationCenter::new()),
        })
    }

    pub fn board_id(&self) -> &str {
        &self.snapshot.board.id
    }

    /// Falls back to the snapshot's own workspace when none was given.
    pub fn navigation(&self) -> NavigationContext {
        let mut navigation = NavigationContext::new().with_board(self.board_id());
        let workspace = self
            .workspace_id
            .clone()
            .or_else(|| Some(self.snapshot.board.workspace_id.clone()))
            .filter(|id| !id.trim().is_empty());
        if let Some(workspace) = workspace {
            navigation = navigation.with_workspace(workspace);
        }
        navigation
    }

    pub fn default_view(&self) -> TaskboardResult<ViewMode> {
        self.config.effective_default_view().parse()
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    pub fn api(&self) -> TaskboardResult<HttpBoardApi> {
        let base_url = self.api_url.as_deref().ok_or_else(|| {
            TaskboardError::Validation(
                "API URL is required (use --api-url or TASKBOARD_API_URL)".to_string(),
            )
        })?;
        Ok(HttpBoardApi::new(base_url))
    }

    pub fn gateway(&self) -> TaskboardResult<MutationGateway<HttpBoardApi>> {
        Ok(MutationGateway::new(
            self.api()?,
            self.cache.clone(),
            self.notifications.clone(),
            self.navigation(),
        ))
    }

    /// Unexpired messages pushed by the gateway during this run, oldest first.
    pub fn notification_messages(&self) -> Vec<String> {
        let ttl = Duration::from_secs(self.config.effective_notification_ttl_secs());
        self.notifications
            .active(ttl)
            .into_iter()
            .map(|n| n.message)
            .collect()
    }

    pub async fn save(&self) -> TaskboardResult<()> {
        let data = serde_json::to_string_pretty(&self.snapshot)?;
        tokio::fs::write(&self.file_path, data).await?;
        tracing::info!("Saved board snapshot to {}", self.file_path.display());
        Ok(())
    }
}
