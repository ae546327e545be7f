//! Read-only access to the questions file.

use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::Question;
use crate::prelude::*;
use crate::store::snapshot::SnapshotCache;

mod snapshot;

pub type Questions = Arc<Vec<Question>>;

/// Question store backed by a JSON file.
///
/// Without the snapshot cache the file is re-read on every call,
/// so edits become visible on the next request.
#[derive(Clone)]
pub struct QuestionStore {
    path: Arc<PathBuf>,
    cache: Option<Arc<SnapshotCache>>,
}

impl QuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            cache: None,
        }
    }

    /// Enables the modification-time keyed snapshot cache.
    #[must_use]
    pub fn cached(mut self) -> Self {
        self.cache = Some(Arc::new(SnapshotCache::default()));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieves all the questions in the stored order.
    #[instrument(skip_all, level = "debug", fields(path = ?self.path))]
    pub async fn list_all(&self) -> Result<Questions, StoreError> {
        match &self.cache {
            Some(cache) => cache.get(&self.path).await,
            None => read_questions(&self.path).await.map(Arc::new),
        }
    }

    /// Retrieves the first question with exactly the given ID.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_by_id(&self, id: &str) -> Result<Question, StoreError> {
        self.list_all()
            .await?
            .iter()
            .find(|question| question.id == id)
            .cloned()
            .ok_or_else(|| StoreError::QuestionNotFound(id.to_string()))
    }
}

async fn read_questions(path: &Path) -> Result<Vec<Question>, StoreError> {
    let start_instant = Instant::now();
    let content = tokio::fs::read(path).await.map_err(|error| match error.kind() {
        ErrorKind::NotFound => StoreError::MissingData,
        _ => StoreError::Internal(
            Error::new(error).context(format!("failed to read `{}`", path.display())),
        ),
    })?;
    let questions: Vec<Question> = serde_json::from_slice(&content)
        .with_context(|| format!("failed to parse `{}`", path.display()))
        .map_err(StoreError::Internal)?;
    debug!(n_questions = questions.len(), elapsed = ?start_instant.elapsed(), "loaded");
    Ok(questions)
}

#[derive(Debug)]
pub enum StoreError {
    /// The questions file does not exist.
    MissingData,

    QuestionNotFound(String),

    Internal(Error),
}

impl StoreError {
    /// Tells whether the requested data does not exist, as opposed to failing to load.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingData | Self::QuestionNotFound(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingData => formatter.write_str("問題データが見つかりません"),
            Self::QuestionNotFound(_) => formatter.write_str("問題が見つかりません"),
            Self::Internal(error) => write!(formatter, "{:#}", error),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Internal(error) => Some(&**error),
            _ => None,
        }
    }
}
