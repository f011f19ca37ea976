use dashboard_client::{DEFAULT_BASE_URL, HttpClient};
use dashboard_core::{Dashboard, EntityKind, FetchStatus};

fn base_url() -> String {
    std::env::var("DASHBOARD_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

#[tokio::test]
#[ignore = "requires network access to the placeholder API"]
async fn http_smoke_flow() {
    let client = HttpClient::new(base_url()).expect("client must build");

    let users = client.list_users().await.expect("users must load");
    let posts = client.list_posts().await.expect("posts must load");
    assert!(!users.is_empty());
    assert!(!posts.is_empty());

    let mut dashboard = Dashboard::new();
    dashboard.load(&client).await;
    assert_eq!(dashboard.status(), &FetchStatus::Ready);

    let first_user = dashboard.store().users()[0].id;
    let owned_before = dashboard.store().post_count_for_user(first_user);
    assert!(owned_before > 0);

    dashboard
        .open_delete_dialog(EntityKind::User, first_user)
        .expect("delete dialog must open");
    dashboard.confirm_delete().expect("delete must succeed");
    assert_eq!(dashboard.store().post_count_for_user(first_user), 0);

    // Локальное удаление не должно затрагивать сервер.
    let users_again = client.list_users().await.expect("users must load");
    assert_eq!(users_again.len(), users.len());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn missing_collection_fails_the_load() {
    let client = HttpClient::new(format!("{}/does-not-exist", base_url())).expect("client");

    let mut dashboard = Dashboard::new();
    dashboard.load(&client).await;
    assert!(matches!(dashboard.status(), FetchStatus::Failed { .. }));
}
