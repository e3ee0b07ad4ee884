//! Integration tests for the gtrans client.
//!
//! The remote endpoint's response shape is reverse-engineered, so these
//! tests pin captured sample payloads behind a wiremock server instead of
//! calling the live service.

use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use gtrans::{Config, Error, GoogleTranslate};

// ==================== Test Helpers ====================

/// Config pointed at a mock server (or at an unroutable endpoint when no
/// request is expected to be made).
fn test_config(endpoint: &str) -> Config {
    Config {
        endpoint: Some(format!("{}/translate_a/single", endpoint)),
        ..Config::default()
    }
}

fn test_client(endpoint: &str) -> GoogleTranslate {
    GoogleTranslate::new(test_config(endpoint)).expect("client should build")
}

const UNROUTABLE: &str = "http://invalid-endpoint-should-not-be-called.test";

// ==================== Translate Tests ====================

#[tokio::test]
async fn test_translate_success() {
    let mock_server = MockServer::start().await;

    let body = r#"[[["話は安いです。","Talk is cheap.",null,null,1]],null,"en"]"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("tl", "ja"))
        .and(query_param("sl", "auto"))
        .and(query_param("q", "Talk is cheap."))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .translate("Talk is cheap.", "ja", "auto")
        .await
        .expect("Should succeed");

    assert_eq!(result.text, "話は安いです。");
    assert_eq!(result.source_lang, "en");
}

#[tokio::test]
async fn test_translate_multi_sentence_joins_in_order() {
    let mock_server = MockServer::start().await;

    let body = r#"[[["Hola. ","Hello. ",null,null,1],["Adiós.","Goodbye.",null,null,1]],null,"en"]"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .translate("Hello. Goodbye.", "es", "en")
        .await
        .expect("Should succeed");

    assert_eq!(result.text, "Hola. Adiós.");
}

#[tokio::test]
async fn test_translate_concrete_source_is_echoed() {
    let mock_server = MockServer::start().await;

    // Some responses omit the detected-language slot for concrete sources
    let body = r#"[[["Hallo","Hello",null,null,1]]]"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .translate("Hello", "de", "en")
        .await
        .expect("Should succeed");

    assert_eq!(result.source_lang, "en");
}

#[tokio::test]
async fn test_translate_invalid_target_skips_network() {
    // Unroutable endpoint: a request attempt would fail loudly
    let client = test_client(UNROUTABLE);

    let result = client.translate("hello", "klingon", "auto").await;
    match result {
        Err(Error::InvalidLanguageCode(code)) => assert_eq!(code, "klingon"),
        other => panic!("expected InvalidLanguageCode, got {other:?}"),
    }
}

#[tokio::test]
async fn test_translate_invalid_source_skips_network() {
    let client = test_client(UNROUTABLE);

    let result = client.translate("hello", "ja", "xx").await;
    assert!(matches!(result, Err(Error::InvalidLanguageCode(_))));
}

#[tokio::test]
async fn test_translate_empty_text_skips_network() {
    let client = test_client(UNROUTABLE);

    assert!(matches!(
        client.translate("", "ja", "auto").await,
        Err(Error::EmptyInput)
    ));
    assert!(matches!(
        client.translate("   \t  ", "ja", "auto").await,
        Err(Error::EmptyInput)
    ));
}

#[tokio::test]
async fn test_translate_malformed_body_keeps_raw_body() {
    let mock_server = MockServer::start().await;

    let body = r#"{"error":{"code":403,"message":"quota"}}"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .translate("hello", "ja", "auto")
        .await
        .expect_err("object body should not decode");

    assert_eq!(err.response_body(), Some(body));
}

#[tokio::test]
async fn test_translate_http_error_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.translate("hello", "ja", "auto").await;

    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn test_translate_connection_refused_is_network_error() {
    // Port 1 on localhost: connection refused, not a decode failure
    let client = test_client("http://127.0.0.1:1");

    let result = client.translate("hello", "ja", "auto").await;
    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn test_translate_auto_convenience() {
    let mock_server = MockServer::start().await;

    let body = r#"[[["ciao","hello",null,null,1]],null,"en"]"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .translate_auto("hello", "it")
        .await
        .expect("Should succeed");

    assert_eq!(result.text, "ciao");
    assert_eq!(result.source_lang, "en");
}

// ==================== Detect Tests ====================

#[tokio::test]
async fn test_detect_simplified_chinese() {
    let mock_server = MockServer::start().await;

    let body = r#"[[["This is my code","这是我的代码",null,null,1]],null,"zh-cn"]"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "auto"))
        .and(query_param("q", "这是我的代码"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let detected = client.detect("这是我的代码").await.expect("Should succeed");

    assert_eq!(detected.len(), 1);
    assert_eq!(
        detected.get("zh-cn").map(String::as_str),
        Some("chinese (simplified)")
    );
}

#[tokio::test]
async fn test_detect_empty_text_skips_network() {
    let client = test_client(UNROUTABLE);

    assert!(matches!(client.detect("  ").await, Err(Error::EmptyInput)));
}

#[tokio::test]
async fn test_detect_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[[]]"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.detect("bonjour").await.expect_err("Should fail");

    assert_eq!(err.response_body(), Some("[[]]"));
}

// ==================== Shared Client Tests ====================

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;

    let body = r#"[[["hallo","hello",null,null,1]],null,"en"]"#;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let (a, b) = tokio::join!(
        client.translate("hello", "de", "en"),
        client.translate("hello", "de", "en"),
    );

    assert_eq!(a.expect("Should succeed").text, "hallo");
    assert_eq!(b.expect("Should succeed").text, "hallo");
}
