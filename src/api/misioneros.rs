//! Misionero endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Misionero, MisioneroInput};

impl ApiClient {
    /// Fetch the misioneros of one grupo.
    pub async fn list_misioneros(&self, grupo_id: &str) -> ApiResult<Vec<Misionero>> {
        self.get_json("/api/misioneros", &[("grupoId", grupo_id)]).await
    }

    pub async fn create_misionero(&self, input: &MisioneroInput) -> ApiResult<()> {
        self.post_json("/api/misioneros", input).await
    }

    pub async fn update_misionero(&self, id: &str, input: &MisioneroInput) -> ApiResult<()> {
        self.patch_json(&format!("/api/misioneros/{}", id), input).await
    }

    pub async fn delete_misionero(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/misioneros/{}", id)).await
    }
}
