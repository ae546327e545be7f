use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use tokio::sync::RwLock;

use crate::prelude::*;
use crate::store::{read_questions, Questions, StoreError};

/// Parsed questions along with the file modification time they were read at.
struct Snapshot {
    modified_at: SystemTime,
    questions: Questions,
}

/// Keeps the last parsed questions until the file modification time changes.
///
/// The snapshot is replaced as a whole, so a reader gets either the old
/// or the new questions.
#[derive(Default)]
pub struct SnapshotCache(RwLock<Option<Snapshot>>);

impl SnapshotCache {
    pub async fn get(&self, path: &Path) -> Result<Questions, StoreError> {
        let modified_at = modified_at(path).await?;

        if let Some(snapshot) = self.0.read().await.as_ref() {
            if snapshot.modified_at == modified_at {
                debug!("snapshot hit");
                return Ok(snapshot.questions.clone());
            }
        }

        let questions = Arc::new(read_questions(path).await?);
        info!(n_questions = questions.len(), ?modified_at, "reloaded the questions");
        *self.0.write().await = Some(Snapshot {
            modified_at,
            questions: questions.clone(),
        });
        Ok(questions)
    }
}

async fn modified_at(path: &Path) -> Result<SystemTime, StoreError> {
    let metadata = tokio::fs::metadata(path).await.map_err(|error| match error.kind() {
        ErrorKind::NotFound => StoreError::MissingData,
        _ => StoreError::Internal(Error::new(error).context("failed to stat the questions file")),
    })?;
    metadata
        .modified()
        .context("modification time is not available")
        .map_err(StoreError::Internal)
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::time::Duration;

    use super::*;
    use crate::store::tests::{write_questions, QUESTIONS};
    use crate::store::QuestionStore;

    #[tokio::test]
    async fn cached_questions_are_shared() -> Result {
        let store = QuestionStore::new(write_questions("cached_questions_are_shared", QUESTIONS)?)
            .cached();
        let first = store.list_all().await?;
        let second = store.list_all().await?;
        assert!(Arc::ptr_eq(&first, &second));
        Ok(())
    }

    #[tokio::test]
    async fn reloads_on_modification() -> Result {
        let path = write_questions("reloads_on_modification", QUESTIONS)?;
        let store = QuestionStore::new(&path).cached();
        assert_eq!(store.list_all().await?.len(), 3);

        fs::write(
            &path,
            // language=JSON
            r#"[{"id":"q9","number":9,"year":2024,"category":"C","title":"T","text":"...","choices":["a"],"correctAnswer":1}]"#,
        )?;
        File::options()
            .write(true)
            .open(&path)?
            .set_modified(SystemTime::now() + Duration::from_secs(60))?;

        let questions = store.list_all().await?;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "q9");
        Ok(())
    }

    #[tokio::test]
    async fn deleted_file_is_missing() -> Result {
        let path = write_questions("deleted_file_is_missing", QUESTIONS)?;
        let store = QuestionStore::new(&path).cached();
        store.list_all().await?;

        fs::remove_file(&path)?;
        assert!(matches!(store.list_all().await, Err(StoreError::MissingData)));
        Ok(())
    }
}
