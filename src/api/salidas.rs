//! Salida endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Salida, SalidaInput};

impl ApiClient {
    /// Fetch the salidas of one grupo, newest first as the server orders them.
    pub async fn list_salidas(&self, grupo_id: &str) -> ApiResult<Vec<Salida>> {
        self.get_json("/api/salidas", &[("grupoId", grupo_id)]).await
    }

    pub async fn create_salida(&self, input: &SalidaInput) -> ApiResult<()> {
        self.post_json("/api/salidas", input).await
    }

    pub async fn update_salida(&self, id: &str, input: &SalidaInput) -> ApiResult<()> {
        self.patch_json(&format!("/api/salidas/{}", id), input).await
    }

    pub async fn delete_salida(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/salidas/{}", id)).await
    }
}
