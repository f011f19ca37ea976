use std::time::Duration;

use async_trait::async_trait;
use dashboard_core::{DataSource, Post, User};
use reqwest::{Client, Method};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Таймаут установки соединения по умолчанию.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Таймаут всего запроса по умолчанию.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    username: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct PostDto {
    #[serde(rename = "userId")]
    user_id: i64,
    id: i64,
    title: String,
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            username: value.username,
            email: value.email,
        }
    }
}

impl From<PostDto> for Post {
    fn from(value: PostDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            title: value.title,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент только для чтения коллекций `/users` и `/posts`.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт клиент с таймаутами по умолчанию.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeouts(base_url, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Создаёт клиент с заданными таймаутами соединения и запроса.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> ClientResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Базовый URL источника данных.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> ClientError {
        let status = response.status();

        let message = match response.text().await {
            Ok(body) if !body.trim().is_empty() => Some(body),
            _ => None,
        };
        ClientError::from_http_status(status, message)
    }

    /// универсальный helper для GET-запросов с json-ответом
    async fn get_json<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let response = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response.json::<T>().await.map_err(ClientError::from_reqwest)
    }

    /// Загружает всех пользователей.
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let dtos: Vec<UserDto> = self.get_json("/users").await?;
        Ok(dtos.into_iter().map(User::from).collect())
    }

    /// Загружает все посты.
    pub async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        let dtos: Vec<PostDto> = self.get_json("/posts").await?;
        Ok(dtos.into_iter().map(Post::from).collect())
    }
}

#[async_trait(?Send)]
impl DataSource for HttpClient {
    type Error = ClientError;

    async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        self.list_users().await
    }

    async fn fetch_posts(&self) -> ClientResult<Vec<Post>> {
        self.list_posts().await
    }
}
