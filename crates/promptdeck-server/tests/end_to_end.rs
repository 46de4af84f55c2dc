//! Client and server together over a real socket

use promptdeck::{HttpPromptApi, NewPrompt, PromptClient, PromptStore, PromptUpdate};
use promptdeck_server::{app, AppState, PromptRepository};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new(PromptRepository::in_memory())))
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

fn connect(base_url: &str) -> PromptClient {
    PromptClient::new(HttpPromptApi::new(base_url).unwrap(), PromptStore::new())
}

#[tokio::test]
async fn test_full_lifecycle() {
    let base_url = spawn_server().await;
    let client = connect(&base_url);

    let first = client
        .add_prompt(NewPrompt::new("First", "Do one"))
        .await
        .unwrap();
    let second = client
        .add_prompt(NewPrompt::new("Second", "Do two"))
        .await
        .unwrap();

    let state = client.store().snapshot();
    assert_eq!(state.data[0].id(), second.id);
    assert_eq!(state.data[1].id(), first.id);

    let changes = client
        .update_prompt(PromptUpdate::new(first.id.clone(), "First!", "Do one now"))
        .await
        .unwrap();
    assert!(changes.updated_at >= first.created_at.unwrap());

    // a second client sees what the first one wrote
    let other = connect(&base_url);
    let fetched = other.fetch_prompts().await.unwrap();
    let stored = fetched.iter().find(|p| p.id == first.id).unwrap();
    assert_eq!(stored.title, "First!");
    assert_eq!(stored.body, "Do one now");
    assert_eq!(stored.created_at, first.created_at);
    assert_eq!(stored.updated_at, Some(changes.updated_at));
}

#[tokio::test]
async fn test_delete_then_refetch() {
    let base_url = spawn_server().await;
    let client = connect(&base_url);

    let kept = client.add_prompt(NewPrompt::new("Keep", "Stay")).await.unwrap();
    let gone = client.add_prompt(NewPrompt::new("Drop", "Leave")).await.unwrap();

    client.remove_prompt(gone.clone()).await.unwrap();
    assert!(client.store().snapshot().find(&gone.id).is_none());

    let fetched = client.fetch_prompts().await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, kept.id);

    let state = client.store().snapshot();
    assert_eq!(state.data.len(), 1);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_remove_missing_reports_status() {
    let base_url = spawn_server().await;
    let client = connect(&base_url);

    let item = client.add_prompt(NewPrompt::new("Once", "Only")).await.unwrap();
    connect(&base_url).remove_prompt(item.clone()).await.unwrap();

    let err = client.remove_prompt(item.clone()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Request failed with status code 404");
    assert!(client.store().snapshot().find(&item.id).is_some());
    assert!(client.store().snapshot().error.is_failed());
}

