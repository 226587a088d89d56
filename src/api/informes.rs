//! Informe endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Informe, InformeInput};

impl ApiClient {
    /// Fetch the informes of one grupo.
    pub async fn list_informes(&self, grupo_id: &str) -> ApiResult<Vec<Informe>> {
        self.get_json("/api/informes", &[("grupoId", grupo_id)]).await
    }

    pub async fn create_informe(&self, input: &InformeInput) -> ApiResult<()> {
        self.post_json("/api/informes", input).await
    }

    pub async fn update_informe(&self, id: &str, input: &InformeInput) -> ApiResult<()> {
        self.patch_json(&format!("/api/informes/{}", id), input).await
    }

    pub async fn delete_informe(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/informes/{}", id)).await
    }
}
