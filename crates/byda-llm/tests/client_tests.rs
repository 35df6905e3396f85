use byda_llm::{
    AnthropicClient, ChatClient, ChatOptions, ChatRequest, ClientFactory, Message, OpenAIClient,
    ProviderConfig,
};
use mockito::Matcher;
use serde_json::json;

fn request(model: &str) -> ChatRequest {
    ChatRequest::new(
        model,
        vec![Message::system("You are Byda o.1"), Message::human("write fibonacci")],
    )
    .with_options(ChatOptions::new().max_tokens(4000))
}

#[tokio::test]
async fn test_openai_chat_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o",
            "max_tokens": 4000,
            "messages": [
                {"role": "system", "content": "You are Byda o.1"},
                {"role": "user", "content": "write fibonacci"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 0,
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "def fib(n): ..."},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let response = client.chat(request("gpt-4o")).await.unwrap();

    assert_eq!(response.content.as_deref(), Some("def fib(n): ..."));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.unwrap().total_tokens, 15);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_error_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"quota exceeded"}}"#)
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let err = client.chat(request("gpt-4o")).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("OpenAI API error"));
    assert!(message.contains("429"));
    assert!(message.contains("quota exceeded"));
}

#[tokio::test]
async fn test_anthropic_chat_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(Matcher::PartialJson(json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 4000,
            "system": "You are Byda o.1",
            "messages": [{"role": "user", "content": "write fibonacci"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4-20250514",
                "content": [{"type": "text", "text": "Here is fibonacci"}],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 12, "output_tokens": 4}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = AnthropicClient::new("test-key").unwrap().with_base_url(server.url());
    let response = client.chat(request("claude-sonnet-4-20250514")).await.unwrap();

    assert_eq!(response.content.as_deref(), Some("Here is fibonacci"));
    assert_eq!(response.usage.unwrap().total_tokens, 16);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_anthropic_auth_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/messages")
        .with_status(401)
        .with_body(r#"{"type":"error","error":{"type":"authentication_error"}}"#)
        .create_async()
        .await;

    let client = ClientFactory::create_chat_client(
        ProviderConfig::anthropic("default_key").with_base_url(server.url()),
    )
    .unwrap();
    let err = client.chat(request("claude")).await.unwrap_err();

    assert!(err.to_string().contains("Anthropic API error (401"));
}

#[tokio::test]
async fn test_unreachable_provider_is_an_error() {
    // Nothing listens on port 9 locally
    let client = OpenAIClient::new("k").unwrap().with_base_url("http://127.0.0.1:9");
    assert!(client.chat(request("gpt-4o")).await.is_err());
}
