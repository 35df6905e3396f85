use byda_chat::{ChatApi, ChatError, ChatSession};
use byda_transcript::{Alignment, Block, MessageBody};
use mockito::Matcher;
use serde_json::{json, Value};

const TS: &str = "2026-01-01T10:00:00Z";

fn conversation(id: &str, title: &str, capability: &str) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "title": title,
        "capability": capability,
        "createdAt": TS,
        "updatedAt": TS
    })
}

fn message(id: &str, role: &str, content: &str, metadata: Value) -> Value {
    json!({
        "id": id,
        "conversationId": "c1",
        "role": role,
        "content": content,
        "metadata": metadata,
        "timestamp": TS
    })
}

#[tokio::test]
async fn test_list_conversations_sends_user_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/conversations")
        .match_query(Matcher::UrlEncoded("userId".into(), "u1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([conversation("c1", "hello", "music")]).to_string())
        .create_async()
        .await;

    let api = ChatApi::new(server.url()).unwrap();
    let conversations = api.list_conversations("u1").await.unwrap();

    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].capability, "music");
    assert_eq!(conversations[0].user_id.as_deref(), Some("u1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_body_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/conversations/missing/messages")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": "Conversation not found: missing"}).to_string())
        .create_async()
        .await;

    let api = ChatApi::new(server.url()).unwrap();
    let err = api.send_message("missing", "hi", "coding").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        ChatError::Api { message, .. } => assert_eq!(message, "Conversation not found: missing"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_body_uses_reason() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/conversations/c1/messages")
        .with_status(500)
        .create_async()
        .await;

    let api = ChatApi::new(server.url()).unwrap();
    let err = api.list_messages("c1").await.unwrap_err();

    match err {
        ChatError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_session_send_flow() {
    let mut server = mockito::Server::new_async().await;

    let create = server
        .mock("POST", "/api/conversations")
        .match_body(Matcher::Json(json!({
            "userId": "u1",
            "title": "write fibonacci",
            "capability": "coding"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(conversation("c1", "write fibonacci", "coding").to_string())
        .create_async()
        .await;

    let reply = "Here you go:\n```python\nprint(1)\n```";
    let post = server
        .mock("POST", "/api/conversations/c1/messages")
        .match_body(Matcher::Json(json!({
            "content": "write fibonacci",
            "capability": "coding"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            message("m2", "assistant", reply, json!({"capability": "coding"})).to_string(),
        )
        .create_async()
        .await;

    let list = server
        .mock("GET", "/api/conversations/c1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                message("m1", "user", "write fibonacci", Value::Null),
                message("m2", "assistant", reply, json!({"capability": "coding", "hasCode": true}))
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let mut session = ChatSession::new(ChatApi::new(server.url()).unwrap(), "u1");
    let views = session
        .send("  write fibonacci \n", "coding")
        .await
        .unwrap()
        .unwrap();

    create.assert_async().await;
    post.assert_async().await;
    list.assert_async().await;

    assert_eq!(session.conversation().unwrap().id, "c1");
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].align, Alignment::Right);
    assert_eq!(views[1].align, Alignment::Left);

    match &views[1].body {
        MessageBody::Formatted { blocks } => {
            assert!(blocks
                .iter()
                .any(|b| matches!(b, Block::Code(code) if code.language == "python" && code.code == "print(1)")));
        }
        other => panic!("unexpected body: {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_input_is_ignored() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/conversations")
        .expect(0)
        .create_async()
        .await;

    let mut session = ChatSession::new(ChatApi::new(server.url()).unwrap(), "u1");
    assert!(session.send("   \n", "coding").await.unwrap().is_none());
    assert!(session.conversation().is_none());

    create.assert_async().await;
}

#[tokio::test]
async fn test_every_send_opens_a_conversation() {
    let mut server = mockito::Server::new_async().await;
    let long = "x".repeat(60);

    let create = server
        .mock("POST", "/api/conversations")
        .match_body(Matcher::PartialJson(json!({"title": format!("{}...", "x".repeat(50))})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(conversation("c1", "x", "search").to_string())
        .expect(2)
        .create_async()
        .await;

    server
        .mock("POST", "/api/conversations/c1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(message("m2", "assistant", "ok", json!({"capability": "search"})).to_string())
        .create_async()
        .await;

    server
        .mock("GET", "/api/conversations/c1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([message("m2", "assistant", "ok", Value::Null)]).to_string())
        .create_async()
        .await;

    let mut session = ChatSession::new(ChatApi::new(server.url()).unwrap(), "u1");
    session.send(&long, "search").await.unwrap();
    session.send(&long, "search").await.unwrap();

    create.assert_async().await;
}
