//! In-memory prompt collection with optional JSON file persistence

use std::path::{Path, PathBuf};

use promptdeck::Prompt;
use tokio::sync::RwLock;

use crate::error::ServerError;
use crate::models::{Database, PatchPromptRequest};

/// Prompts in insertion order
#[derive(Debug, Default)]
pub struct PromptRepository {
    prompts: RwLock<Vec<Prompt>>,
    db_path: Option<PathBuf>,
}

impl PromptRepository {
    /// Memory-only repository
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: RwLock::new(prompts),
            db_path: None,
        }
    }

    /// Load from `path` (missing file means empty), rewriting it after every mutation
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref().to_path_buf();
        let prompts = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let db: Database = serde_json::from_str(&content).map_err(|e| {
                    ServerError::Persistence(format!("Failed to parse {:?}: {}", path, e))
                })?;
                db.prompts
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(ServerError::Persistence(format!(
                    "Failed to read {:?}: {}",
                    path, e
                )))
            }
        };

        tracing::info!(path = ?path, count = prompts.len(), "Loaded prompts");

        Ok(Self {
            prompts: RwLock::new(prompts),
            db_path: Some(path),
        })
    }

    pub async fn list(&self) -> Vec<Prompt> {
        self.prompts.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Prompt, ServerError> {
        self.prompts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ServerError::NotFound(id.to_string()))
    }

    pub async fn insert(&self, prompt: Prompt) -> Result<Prompt, ServerError> {
        let mut prompts = self.prompts.write().await;
        if prompts.iter().any(|p| p.id == prompt.id) {
            return Err(ServerError::Conflict(prompt.id));
        }

        let mut next = prompts.clone();
        next.push(prompt.clone());
        self.commit(&mut prompts, next).await?;
        Ok(prompt)
    }

    pub async fn patch(&self, id: &str, patch: PatchPromptRequest) -> Result<Prompt, ServerError> {
        let mut prompts = self.prompts.write().await;
        let index = Self::position(&prompts, id)?;

        let mut next = prompts.clone();
        patch.apply(&mut next[index]);
        let updated = next[index].clone();
        self.commit(&mut prompts, next).await?;
        Ok(updated)
    }

    pub async fn remove(&self, id: &str) -> Result<Prompt, ServerError> {
        let mut prompts = self.prompts.write().await;
        let index = Self::position(&prompts, id)?;

        let mut next = prompts.clone();
        let removed = next.remove(index);
        self.commit(&mut prompts, next).await?;
        Ok(removed)
    }

    fn position(prompts: &[Prompt], id: &str) -> Result<usize, ServerError> {
        prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServerError::NotFound(id.to_string()))
    }

    /// Persist `next`, then make it current; on failure `current` is untouched
    async fn commit(&self, current: &mut Vec<Prompt>, next: Vec<Prompt>) -> Result<(), ServerError> {
        self.persist(&next).await?;
        *current = next;
        Ok(())
    }

    /// Rewrite the database file while the write lock is held
    async fn persist(&self, prompts: &[Prompt]) -> Result<(), ServerError> {
        let Some(path) = &self.db_path else {
            return Ok(());
        };

        let db = Database {
            prompts: prompts.to_vec(),
        };
        let content = serde_json::to_string_pretty(&db)
            .map_err(|e| ServerError::Persistence(e.to_string()))?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| ServerError::Persistence(format!("Failed to write {:?}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(id: &str) -> Prompt {
        Prompt {
            id: id.to_string(),
            title: format!("Title {id}"),
            body: "Body".to_string(),
            created_at: Some(1),
            updated_at: None,
        }
    }

    fn temp_db(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "promptdeck-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn test_insert_keeps_insertion_order() {
        let repo = PromptRepository::in_memory();
        repo.insert(prompt("b")).await.unwrap();
        repo.insert(prompt("a")).await.unwrap();

        let ids: Vec<String> = repo.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let repo = PromptRepository::with_prompts(vec![prompt("a")]);
        let err = repo.insert(prompt("a")).await.unwrap_err();
        assert!(matches!(err, ServerError::Conflict(id) if id == "a"));
        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = PromptRepository::in_memory();
        assert!(matches!(repo.get("x").await, Err(ServerError::NotFound(_))));
        assert!(matches!(
            repo.patch("x", PatchPromptRequest::default()).await,
            Err(ServerError::NotFound(_))
        ));
        assert!(matches!(repo.remove("x").await, Err(ServerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let path = temp_db("reopen");
        let _ = tokio::fs::remove_file(&path).await;

        let repo = PromptRepository::open(&path).await.unwrap();
        assert!(repo.list().await.is_empty());
        repo.insert(prompt("a")).await.unwrap();
        repo.insert(prompt("b")).await.unwrap();
        repo.remove("a").await.unwrap();

        let reopened = PromptRepository::open(&path).await.unwrap();
        let ids: Vec<String> = reopened.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["b"]);

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["prompts"][0]["prompt"], "Body");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_failed_write_leaves_collection_unchanged() {
        let repo = PromptRepository {
            prompts: RwLock::new(vec![prompt("a")]),
            db_path: Some(std::env::temp_dir().join("promptdeck-missing-dir/db.json")),
        };

        let err = repo.insert(prompt("b")).await.unwrap_err();
        assert!(matches!(err, ServerError::Persistence(_)));

        let patch = PatchPromptRequest {
            title: Some("Changed".to_string()),
            ..Default::default()
        };
        assert!(repo.patch("a", patch).await.is_err());

        assert!(repo.remove("a").await.is_err());

        assert_eq!(repo.list().await, vec![prompt("a")]);
    }

    #[tokio::test]
    async fn test_open_in_missing_dir_then_insert_fails_cleanly() {
        let path = std::env::temp_dir().join("promptdeck-missing-dir/open.json");
        let repo = PromptRepository::open(&path).await.unwrap();

        assert!(repo.insert(prompt("a")).await.is_err());
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let path = temp_db("corrupt");
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = PromptRepository::open(&path).await.unwrap_err();
        assert!(matches!(err, ServerError::Persistence(_)));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
