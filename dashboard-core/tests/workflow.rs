use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashboard_core::{
    Dashboard, DataSource, Deleted, EntityKind, FetchStatus, LOAD_FAILED_MESSAGE, Post, PostField,
    User, UserField,
};

#[derive(Clone)]
struct FakeSource {
    users: Result<Vec<User>, String>,
    posts: Result<Vec<Post>, String>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeSource {
    fn new(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self {
            users: Ok(users),
            posts: Ok(posts),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait(?Send)]
impl DataSource for FakeSource {
    type Error = String;

    async fn fetch_users(&self) -> Result<Vec<User>, String> {
        self.calls.lock().expect("calls mutex poisoned").push("users");
        self.users.clone()
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, String> {
        self.calls.lock().expect("calls mutex poisoned").push("posts");
        self.posts.clone()
    }
}

fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.to_lowercase(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

fn post(id: i64, user_id: i64, title: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
    }
}

async fn loaded(users: Vec<User>, posts: Vec<Post>) -> Dashboard {
    let source = FakeSource::new(users, posts);
    let mut dashboard = Dashboard::new();
    dashboard.load(&source).await;
    assert_eq!(dashboard.status(), &FetchStatus::Ready);
    dashboard
}

#[tokio::test]
async fn load_requests_both_collections() {
    let source = FakeSource::new(vec![user(1, "Leanne")], vec![post(1, 1, "first")]);
    let mut dashboard = Dashboard::new();

    dashboard.load(&source).await;

    let mut calls = source.calls();
    calls.sort_unstable();
    assert_eq!(calls, vec!["posts", "users"]);
    assert_eq!(dashboard.store().users().len(), 1);
    assert_eq!(dashboard.store().posts().len(), 1);
}

#[tokio::test]
async fn failure_of_either_request_fails_the_whole_load() {
    let mut source = FakeSource::new(vec![user(1, "Leanne")], Vec::new());
    source.posts = Err("503 Service Unavailable".to_string());

    let mut dashboard = Dashboard::new();
    dashboard.load(&source).await;

    assert_eq!(
        dashboard.status(),
        &FetchStatus::Failed {
            message: LOAD_FAILED_MESSAGE.to_string()
        }
    );
    assert!(dashboard.store().users().is_empty());
}

#[tokio::test]
async fn reload_after_failure_can_succeed() {
    let mut failing = FakeSource::new(Vec::new(), Vec::new());
    failing.users = Err("timeout".to_string());

    let mut dashboard = Dashboard::new();
    dashboard.load(&failing).await;
    assert!(!dashboard.is_ready());

    dashboard.reload();
    dashboard
        .load(&FakeSource::new(vec![user(1, "Leanne")], Vec::new()))
        .await;
    assert!(dashboard.is_ready());
}

#[tokio::test]
async fn create_post_for_the_only_user() {
    let mut dashboard = loaded(vec![user(1, "Leanne")], Vec::new()).await;

    dashboard.open_post_form(None).expect("dashboard is ready");
    let form = dashboard.post_form_mut().expect("post form is open");
    form.set_field(PostField::Title, "Hello");
    form.set_field(PostField::UserId, "1");

    let created = dashboard.submit_post_form().expect("post is valid");

    assert_eq!(created, post(1, 1, "Hello"));
    assert_eq!(dashboard.store().posts(), &[post(1, 1, "Hello")]);
    assert!(dashboard.active_modal().is_none());
}

#[tokio::test]
async fn deleting_a_user_removes_their_posts() {
    let mut dashboard = loaded(
        vec![user(1, "Leanne"), user(2, "Ervin")],
        vec![post(5, 1, "mine"), post(6, 2, "theirs")],
    )
    .await;

    dashboard
        .open_delete_dialog(EntityKind::User, 1)
        .expect("user 1 exists");
    let deleted = dashboard.confirm_delete().expect("user deleted");

    match deleted {
        Deleted::User(summary) => {
            assert_eq!(summary.user.id, 1);
            assert_eq!(summary.posts_removed, 1);
        }
        Deleted::Post(_) => panic!("expected a user deletion"),
    }
    assert_eq!(dashboard.store().posts(), &[post(6, 2, "theirs")]);
    assert!(dashboard.store().posts().iter().all(|p| p.user_id != 1));
}

#[tokio::test]
async fn new_user_gets_next_id_and_shows_up_in_search() {
    let mut dashboard = loaded(vec![user(3, "Leanne"), user(10, "Ervin")], Vec::new()).await;

    dashboard.open_user_form(None).expect("dashboard is ready");
    let form = dashboard.user_form_mut().expect("user form is open");
    form.set_field(UserField::Name, "Clementine Bauch");
    form.set_field(UserField::Username, "Samantha");
    form.set_field(UserField::Email, "Nathan@yesenia.net");

    let created = dashboard.submit_user_form().expect("user is valid");
    assert_eq!(created.id, 11);

    dashboard.set_search("samantha");
    let visible: Vec<i64> = dashboard.visible_users().iter().map(|u| u.id).collect();
    assert_eq!(visible, vec![11]);
}

#[tokio::test]
async fn cancelling_discards_the_draft() {
    let mut dashboard = loaded(vec![user(1, "Leanne")], Vec::new()).await;

    dashboard.open_user_form(Some(1)).expect("user 1 exists");
    dashboard
        .user_form_mut()
        .expect("user form is open")
        .set_field(UserField::Name, "Changed");
    dashboard.close_all();

    assert_eq!(dashboard.store().users()[0].name, "Leanne");

    dashboard.open_user_form(Some(1)).expect("user 1 exists");
    let form = dashboard.user_form().expect("user form is open");
    assert_eq!(form.value(UserField::Name), "Leanne");
}
