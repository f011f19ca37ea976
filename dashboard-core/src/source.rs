use std::fmt;

use async_trait::async_trait;

use crate::domain::post::Post;
use crate::domain::user::User;

/// Источник обеих коллекций, только чтение.
///
/// Футуры не обязаны быть `Send`: браузерная реализация построена на
/// `!Send` fetch-футурах.
#[async_trait(?Send)]
pub trait DataSource {
    type Error: fmt::Display;

    async fn fetch_users(&self) -> Result<Vec<User>, Self::Error>;
    async fn fetch_posts(&self) -> Result<Vec<Post>, Self::Error>;
}

/// Загружает обе коллекции параллельно. Ошибка любого запроса даёт ошибку.
pub async fn fetch_all<S>(source: &S) -> Result<(Vec<User>, Vec<Post>), S::Error>
where
    S: DataSource + ?Sized,
{
    tokio::try_join!(source.fetch_users(), source.fetch_posts())
}
