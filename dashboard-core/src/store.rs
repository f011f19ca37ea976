//! Пользователи и посты в памяти, единственный владелец данных дашборда.
//!
//! Каждая мутация это один вызов с `&mut self`, поэтому каскадное удаление
//! (пользователь и его посты) снаружи видно как один переход. Производные
//! списки пересчитываются при каждом чтении.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::domain::post::{Post, PostDraft};
use crate::domain::user::{User, UserDraft};

/// Результат [`EntityStore::delete_user`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedUser {
    pub user: User,
    pub posts_removed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Полностью заменяет обе коллекции.
    pub fn load(&mut self, users: Vec<User>, posts: Vec<Post>) {
        info!(users = users.len(), posts = posts.len(), "store loaded");
        self.users = users;
        self.posts = posts;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn create_user(&mut self, draft: UserDraft) -> User {
        let id = next_id(self.users.iter().map(|user| user.id));
        let user = draft.into_user(id);
        self.users.push(user.clone());
        info!(user_id = id, "user created");
        user
    }

    /// Заменяет поля пользователя, сохраняя id. Неизвестный id игнорируется.
    pub fn update_user(&mut self, id: i64, draft: UserDraft) -> Option<User> {
        let slot = self.users.iter_mut().find(|user| user.id == id)?;
        *slot = draft.into_user(id);
        info!(user_id = id, "user updated");
        Some(slot.clone())
    }

    /// Удаляет пользователя и все его посты.
    pub fn delete_user(&mut self, id: i64) -> Option<DeletedUser> {
        let index = self.users.iter().position(|user| user.id == id)?;
        let user = self.users.remove(index);

        let before = self.posts.len();
        self.posts.retain(|post| post.user_id != id);
        let posts_removed = before - self.posts.len();

        info!(user_id = id, posts_removed, "user deleted");
        Some(DeletedUser {
            user,
            posts_removed,
        })
    }

    pub fn create_post(&mut self, draft: PostDraft) -> Post {
        let id = next_id(self.posts.iter().map(|post| post.id));
        let post = draft.into_post(id);
        self.posts.push(post.clone());
        info!(post_id = id, user_id = post.user_id, "post created");
        post
    }

    pub fn update_post(&mut self, id: i64, draft: PostDraft) -> Option<Post> {
        let slot = self.posts.iter_mut().find(|post| post.id == id)?;
        *slot = draft.into_post(id);
        info!(post_id = id, "post updated");
        Some(slot.clone())
    }

    pub fn delete_post(&mut self, id: i64) -> Option<Post> {
        let index = self.posts.iter().position(|post| post.id == id)?;
        let post = self.posts.remove(index);
        info!(post_id = id, "post deleted");
        Some(post)
    }

    /// Пользователи, у которых имя, логин или email содержит `term` без учёта регистра.
    pub fn filtered_users(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|user| {
                contains_ci(&user.name, &needle)
                    || contains_ci(&user.email, &needle)
                    || contains_ci(&user.username, &needle)
            })
            .collect()
    }

    /// Посты, заголовок которых содержит `term` без учёта регистра.
    pub fn filtered_posts(&self, term: &str) -> Vec<&Post> {
        let needle = term.to_lowercase();
        self.posts
            .iter()
            .filter(|post| contains_ci(&post.title, &needle))
            .collect()
    }

    pub fn post_count_for_user(&self, user_id: i64) -> usize {
        self.posts.iter().filter(|post| post.user_id == user_id).count()
    }

    /// Имя автора для показа; для висячей ссылки `User {id}`.
    pub fn user_name_for_post(&self, user_id: i64) -> String {
        self.user(user_id)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| format!("User {user_id}"))
    }
}

/// `max(ids, 0) + 1`, уникален только при одном писателе. Если максимум
/// уже `i64::MAX`, берётся наименьший свободный положительный id.
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    let ids: BTreeSet<i64> = ids.collect();
    let max = ids.last().copied().unwrap_or(0).max(0);
    match max.checked_add(1) {
        Some(id) => id,
        None => {
            warn!("id space exhausted at the top, reusing the lowest free id");
            (1..i64::MAX)
                .find(|id| !ids.contains(id))
                .unwrap_or(i64::MAX)
        }
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, username: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    fn post(id: i64, user_id: i64, title: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
        }
    }

    fn seeded() -> EntityStore {
        let mut store = EntityStore::new();
        store.load(
            vec![
                user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
                user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
                user(7, "Kurtis Weissnat", "Elwyn.Skiles", "Telly.Hoeger@billy.biz"),
            ],
            vec![
                post(1, 1, "sunt aut facere"),
                post(2, 1, "qui est esse"),
                post(5, 2, "Nesciunt quas odio"),
            ],
        );
        store
    }

    #[test]
    fn create_user_uses_max_id_plus_one() {
        let mut store = seeded();
        let created = store.create_user(UserDraft::new("Clementine", "Samantha", "n@y.org"));

        assert_eq!(created.id, 8);
        assert_eq!(store.users().last(), Some(&created));
    }

    #[test]
    fn create_user_in_empty_store_starts_at_one() {
        let mut store = EntityStore::new();
        let created = store.create_user(UserDraft::new("a", "b", "c"));
        assert_eq!(created.id, 1);
    }

    #[test]
    fn next_id_ignores_negative_ids() {
        assert_eq!(next_id([-4, -1].into_iter()), 1);
    }

    #[test]
    fn next_id_at_i64_max_falls_back_to_lowest_free_id() {
        assert_eq!(next_id([i64::MAX].into_iter()), 1);
        assert_eq!(next_id([1, 2, i64::MAX].into_iter()), 3);
    }

    #[test]
    fn create_user_after_loading_max_id_does_not_overflow() {
        let mut store = EntityStore::new();
        store.load(vec![user(i64::MAX, "Edge", "edge", "e@x.io"), user(1, "a", "b", "c")], vec![]);

        let created = store.create_user(UserDraft::new("Clementine", "Samantha", "n@y.org"));
        assert_eq!(created.id, 2);
        assert_eq!(store.users().len(), 3);
    }

    #[test]
    fn update_user_keeps_id_and_replaces_fields() {
        let mut store = seeded();
        let updated = store
            .update_user(2, UserDraft::new("Ervin H.", "ervin", "ervin@example.com"))
            .expect("user 2 exists");

        assert_eq!(updated.id, 2);
        assert_eq!(store.user(2).map(|u| u.name.as_str()), Some("Ervin H."));
        assert_eq!(store.users().len(), 3);
    }

    #[test]
    fn update_user_with_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.users().to_vec();

        assert!(store.update_user(99, UserDraft::new("x", "y", "z")).is_none());
        assert_eq!(store.users(), before.as_slice());
    }

    #[test]
    fn delete_user_cascades_to_their_posts() {
        let mut store = seeded();
        let deleted = store.delete_user(1).expect("user 1 exists");

        assert_eq!(deleted.user.id, 1);
        assert_eq!(deleted.posts_removed, 2);
        assert!(store.user(1).is_none());
        assert!(store.posts().iter().all(|p| p.user_id != 1));
        assert_eq!(store.posts().len(), 1);
    }

    #[test]
    fn delete_unknown_user_leaves_posts_alone() {
        let mut store = seeded();
        assert!(store.delete_user(42).is_none());
        assert_eq!(store.posts().len(), 3);
    }

    #[test]
    fn delete_post_removes_only_that_post() {
        let mut store = seeded();
        let users_before = store.users().to_vec();

        let removed = store.delete_post(2).expect("post 2 exists");

        assert_eq!(removed.id, 2);
        assert_eq!(
            store.posts().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 5]
        );
        assert_eq!(store.users(), users_before.as_slice());
    }

    #[test]
    fn create_post_uses_post_ids_not_user_ids() {
        let mut store = seeded();
        let created = store.create_post(PostDraft::new(7, "new"));
        assert_eq!(created.id, 6);
        assert_eq!(created.user_id, 7);
    }

    #[test]
    fn update_post_preserves_id() {
        let mut store = seeded();
        let updated = store
            .update_post(5, PostDraft::new(1, "moved"))
            .expect("post 5 exists");

        assert_eq!(updated, post(5, 1, "moved"));
        assert_eq!(store.post_count_for_user(1), 3);
        assert_eq!(store.post_count_for_user(2), 0);
    }

    #[test]
    fn filtered_users_matches_any_field_ignoring_case() {
        let store = seeded();

        let by_name: Vec<i64> = store.filtered_users("GRAHAM").iter().map(|u| u.id).collect();
        assert_eq!(by_name, vec![1]);

        let by_username: Vec<i64> = store.filtered_users("antonette").iter().map(|u| u.id).collect();
        assert_eq!(by_username, vec![2]);

        let by_email: Vec<i64> = store.filtered_users(".biz").iter().map(|u| u.id).collect();
        assert_eq!(by_email, vec![1, 7]);
    }

    #[test]
    fn empty_term_returns_everything() {
        let store = seeded();
        assert_eq!(store.filtered_users("").len(), 3);
        assert_eq!(store.filtered_posts("").len(), 3);
    }

    #[test]
    fn filtered_posts_matches_title_only() {
        let store = seeded();
        let ids: Vec<i64> = store.filtered_posts("nesciunt").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5]);
        assert!(store.filtered_posts("Graham").is_empty());
    }

    #[test]
    fn user_name_for_post_falls_back_for_dangling_reference() {
        let store = seeded();
        assert_eq!(store.user_name_for_post(2), "Ervin Howell");
        assert_eq!(store.user_name_for_post(11), "User 11");
    }
}
