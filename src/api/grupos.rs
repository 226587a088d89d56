//! Grupo endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Grupo, GrupoInput};

impl ApiClient {
    /// Fetch every grupo visible to the current user.
    pub async fn list_grupos(&self) -> ApiResult<Vec<Grupo>> {
        self.get_json("/api/grupos", &[]).await
    }

    pub async fn create_grupo(&self, input: &GrupoInput) -> ApiResult<()> {
        self.post_json("/api/grupos", input).await
    }

    pub async fn update_grupo(&self, id: &str, input: &GrupoInput) -> ApiResult<()> {
        self.patch_json(&format!("/api/grupos/{}", id), input).await
    }

    pub async fn delete_grupo(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/grupos/{}", id)).await
    }
}
