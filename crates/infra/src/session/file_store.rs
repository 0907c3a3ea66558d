//! JSON file backed [`SessionStore`]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use caliber_core::{SessionContext, SessionStore};
use caliber_domain::{Result, SessionConfig};
use tracing::debug;

use crate::errors::InfraError;

/// Keeps the session context in a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<SessionContext> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored session");
                return Ok(SessionContext::default());
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if contents.trim().is_empty() {
            return Ok(SessionContext::default());
        }

        let context = serde_json::from_str(&contents).map_err(InfraError::from)?;
        Ok(context)
    }

    async fn save(&self, context: &SessionContext) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(InfraError::from)?;
        }

        let json = serde_json::to_string_pretty(context).map_err(InfraError::from)?;
        tokio::fs::write(&self.path, json).await.map_err(InfraError::from)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }
}
