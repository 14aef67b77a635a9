//! JSON file repository implementation.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use kiosk_core::exhibition::Exhibition;
use kiosk_core::storage::{ExhibitionRepository, RepositoryError, Result};

/// File-backed storage for the exhibition catalog.
///
/// The file holds a JSON array of exhibitions. It is read once on open into
/// a `HashMap` behind `Arc<RwLock<_>>`. Mutations are applied to a copy that
/// is written to disk first and only then replaces the in-memory catalog, so
/// a failed write leaves both unchanged. A missing file is an empty catalog.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    exhibitions: Arc<RwLock<HashMap<Uuid, Exhibition>>>,
}

impl JsonFileRepository {
    /// Opens the catalog at `path`, loading its contents if the file exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let exhibitions = load(&path).await?;

        tracing::debug!(
            path = %path.display(),
            count = exhibitions.len(),
            "Loaded exhibition catalog"
        );

        Ok(Self {
            path,
            exhibitions: Arc::new(RwLock::new(exhibitions)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn load(path: &Path) -> Result<HashMap<Uuid, Exhibition>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(err) => return Err(RepositoryError::Io(err.to_string())),
    };

    if contents.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let exhibitions: Vec<Exhibition> = serde_json::from_str(&contents)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    Ok(exhibitions.into_iter().map(|e| (e.id, e)).collect())
}

async fn persist(path: &Path, exhibitions: &HashMap<Uuid, Exhibition>) -> Result<()> {
    let mut records: Vec<&Exhibition> = exhibitions.values().collect();
    records.sort_by_key(|e| (e.created_at, e.id));

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|e| RepositoryError::Io(e.to_string()))?;

    tracing::debug!(path = %path.display(), count = records.len(), "Saved exhibition catalog");
    Ok(())
}

#[async_trait]
impl ExhibitionRepository for JsonFileRepository {
    async fn list_exhibitions(&self) -> Result<Vec<Exhibition>> {
        let exhibitions = self.exhibitions.read().await;
        let mut list: Vec<Exhibition> = exhibitions.values().cloned().collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    async fn get_exhibition(&self, id: Uuid) -> Result<Option<Exhibition>> {
        let exhibitions = self.exhibitions.read().await;
        Ok(exhibitions.get(&id).cloned())
    }

    async fn create_exhibition(&self, exhibition: &Exhibition) -> Result<()> {
        let mut exhibitions = self.exhibitions.write().await;
        if exhibitions.contains_key(&exhibition.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Exhibition",
                id: exhibition.id.to_string(),
            });
        }
        let mut next = exhibitions.clone();
        next.insert(exhibition.id, exhibition.clone());
        persist(&self.path, &next).await?;
        *exhibitions = next;
        Ok(())
    }

    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()> {
        let mut exhibitions = self.exhibitions.write().await;
        if !exhibitions.contains_key(&exhibition.id) {
            return Err(RepositoryError::exhibition_not_found(exhibition.id));
        }
        let mut next = exhibitions.clone();
        next.insert(exhibition.id, exhibition.clone());
        persist(&self.path, &next).await?;
        *exhibitions = next;
        Ok(())
    }

    async fn delete_exhibition(&self, id: Uuid) -> Result<()> {
        let mut exhibitions = self.exhibitions.write().await;
        if !exhibitions.contains_key(&id) {
            return Err(RepositoryError::exhibition_not_found(id));
        }
        let mut next = exhibitions.clone();
        next.remove(&id);
        persist(&self.path, &next).await?;
        *exhibitions = next;
        Ok(())
    }
}
