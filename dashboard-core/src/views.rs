//! Готовые к показу карточки записей, общие для обоих фронтендов.

use crate::domain::post::Post;
use crate::domain::user::User;
use crate::store::EntityStore;

/// Более длинные заголовки постов в списках обрезаются.
pub const TITLE_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub id: i64,
    pub initial: String,
    pub name: String,
    pub handle: String,
    pub email: String,
    pub post_count: usize,
}

impl UserCard {
    pub fn from_user(user: &User, store: &EntityStore) -> Self {
        Self {
            id: user.id,
            initial: avatar_initial(&user.name),
            name: user.name.clone(),
            handle: format!("@{}", user.username),
            email: user.email.clone(),
            post_count: store.post_count_for_user(user.id),
        }
    }

    pub fn post_count_label(&self) -> String {
        format!("{} posts", self.post_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: i64,
    pub user_id: i64,
    pub title_preview: String,
    pub author: String,
}

impl PostCard {
    pub fn from_post(post: &Post, store: &EntityStore) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title_preview: truncate_title(&post.title),
            author: store.user_name_for_post(post.user_id),
        }
    }

    pub fn byline(&self) -> String {
        format!("by {}", self.author)
    }
}

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_PREVIEW_CHARS {
        return title.to_string();
    }
    let mut preview: String = title.chars().take(TITLE_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Первая буква имени в верхнем регистре, `?` для пустого имени.
pub fn avatar_initial(name: &str) -> String {
    match name.chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "?".to_string(),
    }
}
