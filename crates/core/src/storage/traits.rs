use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::Exhibition;

use super::Result;

/// Repository for exhibition records.
#[async_trait]
pub trait ExhibitionRepository: Send + Sync {
    /// Lists all exhibitions, most recently updated first.
    async fn list_exhibitions(&self) -> Result<Vec<Exhibition>>;

    /// Gets an exhibition by its ID.
    async fn get_exhibition(&self, id: Uuid) -> Result<Option<Exhibition>>;

    /// Creates a new exhibition.
    async fn create_exhibition(&self, exhibition: &Exhibition) -> Result<()>;

    /// Updates an existing exhibition.
    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()>;

    /// Deletes an exhibition by its ID.
    async fn delete_exhibition(&self, id: Uuid) -> Result<()>;
}
