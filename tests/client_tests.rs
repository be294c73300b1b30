//! PanLex suggest client wire-format tests (mockito double)

use langvar_picker::domain::error::PickerError;
use langvar_picker::domain::traits::SuggestService;
use langvar_picker::infrastructure::network::client::PanLexClient;
use mockito::Matcher;

fn client_for(server: &mockito::ServerGuard) -> PanLexClient {
    PanLexClient::new(reqwest::Client::new(), server.url(), 187)
}

#[tokio::test]
async fn posts_documented_body_and_parses_suggestions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/suggest/langvar")
        .match_header("content-type", "application/json")
        .match_header("x-app-name", Matcher::Regex("^lvp/".to_string()))
        .match_body(Matcher::Json(serde_json::json!({
            "txt": "eng",
            "pref_trans_langvar": 187
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"suggest":[{"id":"1","uid":"eng-000","trans":[{"txt":"English"},{"txt":"British English"}]}]}"#,
        )
        .create_async()
        .await;

    let items = client_for(&server).suggest("eng").await.unwrap();
    mock.assert_async().await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "1");
    assert_eq!(items[0].uid, "eng-000");
    assert_eq!(items[0].display_name(), "English");
    assert_eq!(items[0].gloss_line(), "British English");
}

#[tokio::test]
async fn missing_suggest_field_yields_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/suggest/langvar")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let items = client_for(&server).suggest("zzzz").await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn empty_suggest_field_yields_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/suggest/langvar")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggest":[]}"#)
        .create_async()
        .await;

    let items = client_for(&server).suggest("zzzz").await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn numeric_ids_decode_as_strings() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/suggest/langvar")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggest":[{"id":187,"uid":"eng-000","trans":[{"txt":"English"}]}]}"#)
        .create_async()
        .await;

    let items = client_for(&server).suggest("eng").await.unwrap();
    assert_eq!(items[0].id, "187");
}

#[tokio::test]
async fn suggestion_without_translations_still_decodes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/suggest/langvar")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggest":[{"id":"9","uid":"art-274"}]}"#)
        .create_async()
        .await;

    let items = client_for(&server).suggest("toki").await.unwrap();
    assert_eq!(items[0].display_name(), "art-274");
}

#[tokio::test]
async fn non_ok_status_surfaces_as_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/suggest/langvar")
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).suggest("eng").await.unwrap_err();
    assert!(matches!(err, PickerError::Http(_)));
}
