use byda_persist::{
    seed_demo_user, InMemoryPersistenceClient, MessageRole, NewConversation, NewMessage, NewUser,
    PersistError, PersistenceClient,
};
use byda_types::{MessageMetadata, DEMO_USER_ID};
use chrono::{Duration, Utc};

#[tokio::test]
async fn test_create_and_get_conversation() {
    let store = InMemoryPersistenceClient::new();

    let created = store
        .create_conversation(NewConversation::new("Hello", "coding").for_user(DEMO_USER_ID))
        .await
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get_conversation(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(store.get_conversation("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_conversations_filters_and_orders() {
    let store = InMemoryPersistenceClient::new();

    let older = store
        .create_conversation(NewConversation::new("first", "coding").for_user("u1"))
        .await
        .unwrap();
    let newer = store
        .create_conversation(NewConversation::new("second", "music").for_user("u1"))
        .await
        .unwrap();
    store
        .create_conversation(NewConversation::new("other", "search").for_user("u2"))
        .await
        .unwrap();
    store
        .create_conversation(NewConversation::new("orphan", "search"))
        .await
        .unwrap();

    store
        .touch_conversation(&older.id, Utc::now() + Duration::seconds(60))
        .await
        .unwrap();

    let listed = store.list_conversations("u1").await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![older.id.as_str(), newer.id.as_str()]);

    assert!(store.list_conversations("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_touch_unknown_conversation() {
    let store = InMemoryPersistenceClient::new();
    let err = store
        .touch_conversation("missing", Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, PersistError::ConversationNotFound(id) if id == "missing"));
}

#[tokio::test]
async fn test_messages_require_conversation() {
    let store = InMemoryPersistenceClient::new();
    let err = store
        .create_message(NewMessage::user("missing", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, PersistError::ConversationNotFound(_)));
}

#[tokio::test]
async fn test_messages_listed_in_order() {
    let store = InMemoryPersistenceClient::new();
    let conversation = store
        .create_conversation(NewConversation::new("t", "coding"))
        .await
        .unwrap();
    let other = store
        .create_conversation(NewConversation::new("t2", "coding"))
        .await
        .unwrap();

    store
        .create_message(NewMessage::user(&conversation.id, "question"))
        .await
        .unwrap();
    store
        .create_message(NewMessage::user(&other.id, "elsewhere"))
        .await
        .unwrap();
    store
        .create_message(NewMessage::assistant(
            &conversation.id,
            "answer",
            MessageMetadata::for_capability("coding"),
        ))
        .await
        .unwrap();

    let messages = store.list_messages(&conversation.id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "question");
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(
        messages[1].metadata.as_ref().and_then(|m| m.capability.as_deref()),
        Some("coding")
    );

    assert!(store.list_messages("missing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_users() {
    let store = InMemoryPersistenceClient::new();

    let user = store
        .create_user(NewUser {
            username: "ada".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    let by_name = store.get_user_by_username("ada").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    let err = store
        .create_user(NewUser {
            username: "ada".to_string(),
            password: "other".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PersistError::UsernameTaken(_)));
}

#[tokio::test]
async fn test_seed_demo_user_is_idempotent() {
    let store = InMemoryPersistenceClient::new();

    let first = seed_demo_user(&store).await.unwrap();
    let second = seed_demo_user(&store).await.unwrap();

    assert_eq!(first.id, DEMO_USER_ID);
    assert_eq!(first, second);
    assert!(store.get_user(DEMO_USER_ID).await.unwrap().is_some());
}
