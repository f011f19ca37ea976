use async_trait::async_trait;
use dashboard_core::{DataSource, Post, User};
use gloo_net::http::Request;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "https://jsonplaceholder.typicode.com",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

/// Удалённые записи содержат больше полей, чем нужно дашборду;
/// лишние serde просто пропускает.
#[derive(Debug, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    username: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct PostDto {
    id: i64,
    #[serde(rename = "userId")]
    user_id: i64,
    title: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            username: dto.username,
            email: dto.email,
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
        }
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let fallback = match status {
        404 => "Ресурс не найден".to_string(),
        429 => "Слишком много запросов".to_string(),
        500..=599 => "Ошибка сервера".to_string(),
        _ => format!("HTTP ошибка {status}"),
    };

    let message = if text.trim().is_empty() { fallback } else { text };

    ApiError::Http { status, message }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Источник данных браузера: только чтение коллекций, без записи обратно.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ApiSource;

#[async_trait(?Send)]
impl DataSource for ApiSource {
    type Error = ApiError;

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let users: Vec<UserDto> = get_json("/users").await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let posts: Vec<PostDto> = get_json("/posts").await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}
