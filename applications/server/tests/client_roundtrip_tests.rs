/// Client round-trip tests
/// Runs the real server on an ephemeral port and drives it with roster-client
use chrono::NaiveDate;
use roster_client::{
    ActionState, AdminPanel, ClientConfig, GridField, PageStatus, Role, RosterClient, UserApi,
    UserFormValues, UserId, UserStatus,
};
use roster_server::{create_router, AppState, ServerConfig};
use roster_storage::{shared, SharedStore, UserStore};
use tokio::net::TcpListener;

/// Start a server over a seeded store, returning its URL
async fn spawn_server() -> (String, SharedStore) {
    let config = ServerConfig::default();
    let store = shared(UserStore::seeded());
    let app = create_router(AppState::new(store.clone(), &config.graphql), &config.graphql);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/", addr), store)
}

#[tokio::test]
async fn test_panel_full_session() {
    let (url, store) = spawn_server().await;
    let panel = AdminPanel::connect(ClientConfig::new(url)).unwrap();

    assert_eq!(panel.users.load().await, PageStatus::Ready);
    assert_eq!(panel.users.total_rows().await, 5);

    // Add
    panel.add.open().await;
    panel
        .add
        .set_values(UserFormValues {
            name: "Frank".into(),
            email: "frank@example.com".into(),
            role: Some(Role::Moderator),
            status: Some(UserStatus::Active),
            birthdate: NaiveDate::from_ymd_opt(1995, 7, 20),
        })
        .await;
    let added = panel.add.submit().await.unwrap();
    assert_eq!(
        added.notification().unwrap().description,
        "User Frank has been added."
    );
    let frank = panel
        .cache()
        .read()
        .await
        .get(&UserId::new("6"))
        .cloned()
        .unwrap();
    assert_eq!(frank.birthdate.to_iso_string(), "1995-07-20T00:00:00.000Z");

    // Edit through the dialog
    panel.edit.open(&frank).await;
    let mut values = panel.edit.values().await;
    values.status = Some(UserStatus::Pending);
    panel.edit.set_values(values).await;
    assert!(matches!(
        panel.edit.submit().await.unwrap(),
        ActionState::Success(_)
    ));

    // Edit inline
    let inline = panel
        .users
        .edit_cell(&UserId::new("2"), GridField::Role, "admin")
        .await;
    assert!(matches!(inline, ActionState::Success(_)));

    // Delete
    panel.delete.request(UserId::new("3")).await;
    assert!(matches!(panel.delete.confirm().await, ActionState::Success(_)));

    // Cache and server agree
    let cached: Vec<_> = panel.cache().read().await.users().to_vec();
    let server: Vec<_> = store.read().await.list().to_vec();
    assert_eq!(cached, server);

    let ids: Vec<_> = cached.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "4", "5", "6"]);
    assert_eq!(cached[1].role, Role::Admin);
    assert_eq!(cached[4].status, UserStatus::Pending);
}

#[tokio::test]
async fn test_client_sees_not_found() {
    let (url, _store) = spawn_server().await;
    let client = RosterClient::new(ClientConfig::new(url)).unwrap();

    assert!(client
        .get_user_by_id(&UserId::new("999"))
        .await
        .unwrap()
        .is_none());

    let err = client.delete_user(&UserId::new("999")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_failed_delete_leaves_cache_alone() {
    let (url, _store) = spawn_server().await;
    let panel = AdminPanel::connect(ClientConfig::new(url)).unwrap();
    panel.users.load().await;

    panel.delete.request(UserId::new("999")).await;
    let outcome = panel.delete.confirm().await;

    assert_eq!(
        outcome.notification().unwrap().message,
        "Error Deleting User"
    );
    assert_eq!(panel.users.total_rows().await, 5);
}
