//! Resource API client module.
//!
//! This module provides the HTTP layer between the console and the REST
//! backend that owns all resource data. The backend is a conventional CRUD
//! API: `POST /api/<resource>` creates, `PATCH /api/<resource>/{id}`
//! updates, `DELETE /api/<resource>/{id}` deletes, and `GET` lists. Success
//! is any 2xx status; everything else, transport errors included, is an
//! [`ApiError`].
//!
//! The [`ResourceApi`] trait is the seam the rest of the application talks
//! through, so tests can substitute a mock backend.

pub mod grupos;
pub mod informes;
pub mod misioneros;
pub mod salidas;

use crate::config::Config;
use crate::models::{
    Grupo, GrupoInput, Informe, InformeInput, Misionero, MisioneroInput, Salida, SalidaInput,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Errors from the resource API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The operations the console needs from the backend.
///
/// Create/update/delete return `()`; the console never consumes the
/// response body of a mutation, it re-fetches the affected list instead.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    async fn list_grupos(&self) -> ApiResult<Vec<Grupo>>;
    async fn create_grupo(&self, input: &GrupoInput) -> ApiResult<()>;
    async fn update_grupo(&self, id: &str, input: &GrupoInput) -> ApiResult<()>;
    async fn delete_grupo(&self, id: &str) -> ApiResult<()>;

    async fn list_misioneros(&self, grupo_id: &str) -> ApiResult<Vec<Misionero>>;
    async fn create_misionero(&self, input: &MisioneroInput) -> ApiResult<()>;
    async fn update_misionero(&self, id: &str, input: &MisioneroInput) -> ApiResult<()>;
    async fn delete_misionero(&self, id: &str) -> ApiResult<()>;

    async fn list_salidas(&self, grupo_id: &str) -> ApiResult<Vec<Salida>>;
    async fn create_salida(&self, input: &SalidaInput) -> ApiResult<()>;
    async fn update_salida(&self, id: &str, input: &SalidaInput) -> ApiResult<()>;
    async fn delete_salida(&self, id: &str) -> ApiResult<()>;

    async fn list_informes(&self, grupo_id: &str) -> ApiResult<Vec<Informe>>;
    async fn create_informe(&self, input: &InformeInput) -> ApiResult<()>;
    async fn update_informe(&self, id: &str, input: &InformeInput) -> ApiResult<()>;
    async fn delete_informe(&self, id: &str) -> ApiResult<()>;
}

/// HTTP client for the resource API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration. The base URL comes from
    /// `CAMPO_API_URL` or `api.base_url`; the bearer token, if any, from the
    /// environment variable named by `api.token_env`.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let base_url = config
            .effective_base_url()
            .ok_or_else(|| ApiError::Config("no API base URL configured".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Ok(token) = std::env::var(&config.api.token_env) {
            if !token.is_empty() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::Config(format!("invalid API token: {}", e)))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()?;

        Ok(Self::new(http, base_url))
    }

    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ResourceApi for ApiClient {
    async fn list_grupos(&self) -> ApiResult<Vec<Grupo>> {
        ApiClient::list_grupos(self).await
    }
    async fn create_grupo(&self, input: &GrupoInput) -> ApiResult<()> {
        ApiClient::create_grupo(self, input).await
    }
    async fn update_grupo(&self, id: &str, input: &GrupoInput) -> ApiResult<()> {
        ApiClient::update_grupo(self, id, input).await
    }
    async fn delete_grupo(&self, id: &str) -> ApiResult<()> {
        ApiClient::delete_grupo(self, id).await
    }

    async fn list_misioneros(&self, grupo_id: &str) -> ApiResult<Vec<Misionero>> {
        ApiClient::list_misioneros(self, grupo_id).await
    }
    async fn create_misionero(&self, input: &MisioneroInput) -> ApiResult<()> {
        ApiClient::create_misionero(self, input).await
    }
    async fn update_misionero(&self, id: &str, input: &MisioneroInput) -> ApiResult<()> {
        ApiClient::update_misionero(self, id, input).await
    }
    async fn delete_misionero(&self, id: &str) -> ApiResult<()> {
        ApiClient::delete_misionero(self, id).await
    }

    async fn list_salidas(&self, grupo_id: &str) -> ApiResult<Vec<Salida>> {
        ApiClient::list_salidas(self, grupo_id).await
    }
    async fn create_salida(&self, input: &SalidaInput) -> ApiResult<()> {
        ApiClient::create_salida(self, input).await
    }
    async fn update_salida(&self, id: &str, input: &SalidaInput) -> ApiResult<()> {
        ApiClient::update_salida(self, id, input).await
    }
    async fn delete_salida(&self, id: &str) -> ApiResult<()> {
        ApiClient::delete_salida(self, id).await
    }

    async fn list_informes(&self, grupo_id: &str) -> ApiResult<Vec<Informe>> {
        ApiClient::list_informes(self, grupo_id).await
    }
    async fn create_informe(&self, input: &InformeInput) -> ApiResult<()> {
        ApiClient::create_informe(self, input).await
    }
    async fn update_informe(&self, id: &str, input: &InformeInput) -> ApiResult<()> {
        ApiClient::update_informe(self, id, input).await
    }
    async fn delete_informe(&self, id: &str) -> ApiResult<()> {
        ApiClient::delete_informe(self, id).await
    }
}
