// employee-client/src/http.rs
// HTTP 客户端 - 网络通信

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use std::time::Duration;

/// HTTP 客户端 trait
///
/// 成功但 body 为空的响应 (记录不存在) 返回 `Ok(None)`
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<Option<T>> {
        let status = response.status();
        let bytes = response.bytes().await?;
        decode_body(status, &bytes)
    }
}

/// Map a raw response onto the client result
fn decode_body<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> ClientResult<Option<T>> {
    if status.is_success() {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        return Ok(Some(serde_json::from_slice(bytes)?));
    }

    let text = String::from_utf8_lossy(bytes).into_owned();
    // 尝试解析为 API 错误响应
    if let Ok(api_err) = serde_json::from_str::<ApiResponse>(&text) {
        return Err(ClientError::Api {
            code: api_err.code,
            message: api_err.message,
        });
    }
    match status {
        StatusCode::BAD_REQUEST => Err(ClientError::InvalidId(text)),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
        _ => Err(ClientError::Internal(format!("{}: {}", status, text))),
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_response(response).await
    }
}
