//! Keyword (Bing) path against a mock server

use std::collections::HashMap;

use flow_tools::api::ToolState;
use flow_tools::config::ToolsConfig;
use flow_tools::error::ToolError;
use flow_tools::models::SearchQuery;
use flow_tools::search::{SearchOutcome, SearchResultRetriever};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn retriever_for(server: &ServerGuard, key: Option<&str>) -> SearchResultRetriever {
    let mut vars = HashMap::new();
    vars.insert(
        "BING_SEARCH_API_ENDPOINT".to_string(),
        format!("{}/v7.0/search", server.url()),
    );
    if let Some(key) = key {
        vars.insert("BING_SEARCH_API_SUBSCRIPTION_KEY".to_string(), key.to_string());
    }

    let config = ToolsConfig::from_map(vars).expect("config loads");
    ToolState::from_config(&config)
        .expect("state builds")
        .retriever
}

#[tokio::test]
async fn single_page_is_normalized_into_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v7.0/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "cats ".into()),
            Matcher::UrlEncoded("mkt".into(), "en-US".into()),
            Matcher::UrlEncoded("setLang".into(), "en-US".into()),
            Matcher::UrlEncoded("count".into(), "10".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("textDecorations".into(), "false".into()),
            Matcher::UrlEncoded("textFormat".into(), "Raw".into()),
            Matcher::UrlEncoded("safeSearch".into(), "Moderate".into()),
        ]))
        .match_header("Ocp-Apim-Subscription-Key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"webPages": {"value": [
                {"url": "https://a", "snippet": "hi", "datePublished": "2024-01-01"}
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let retriever = retriever_for(&server, Some("test-key"));
    let results = retriever.retrieve(&SearchQuery::new("cats")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        json!([{
            "source": "https://a",
            "content": "hi",
            "time_published": "2024-01-01",
            "question": "cats"
        }])
    );
}

#[tokio::test]
async fn missing_publish_date_reads_not_available() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v7.0/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"webPages": {"value": [{"url": "https://a", "snippet": "hi"}]}}).to_string())
        .create_async()
        .await;

    let retriever = retriever_for(&server, Some("test-key"));
    let results = retriever.retrieve(&SearchQuery::new("cats")).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].time_published.as_deref(), Some("Not available"));
}

#[tokio::test]
async fn server_error_yields_empty_list() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v7.0/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let retriever = retriever_for(&server, Some("test-key"));
    let results = retriever.retrieve(&SearchQuery::new("cats")).await.unwrap();
    assert!(results.is_empty());

    match retriever.retrieve_web_outcome(&SearchQuery::new("cats")).await {
        SearchOutcome::Failed(ToolError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected failed outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn refinement_is_sent_but_question_echoes_original_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v7.0/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "rust site:docs.rs".into()),
            Matcher::UrlEncoded("count".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"webPages": {"value": [
                {"url": "https://1", "snippet": "one\ntwo"},
                {"url": "https://2", "snippet": "three"},
                {"url": "https://3", "snippet": "four"}
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let retriever = retriever_for(&server, Some("test-key"));
    let query = SearchQuery::new("rust")
        .with_refinement("site:docs.rs")
        .with_count(2);
    let results = retriever.retrieve(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].content, "one two");
    assert!(results.iter().all(|r| r.question.as_deref() == Some("rust")));
}

#[tokio::test]
async fn missing_subscription_key_fails_quietly() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v7.0/search")
        .match_query(Matcher::Any)
        .match_header("Ocp-Apim-Subscription-Key", Matcher::Missing)
        .with_status(401)
        .with_body(json!({"error": {"code": "401"}}).to_string())
        .create_async()
        .await;

    let retriever = retriever_for(&server, None);
    let outcome = retriever.retrieve_web_outcome(&SearchQuery::new("cats")).await;
    assert!(outcome.is_failure());
}

#[tokio::test]
async fn response_without_web_pages_is_no_match() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v7.0/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"_type": "SearchResponse"}).to_string())
        .create_async()
        .await;

    let retriever = retriever_for(&server, Some("test-key"));
    let outcome = retriever.retrieve_web_outcome(&SearchQuery::new("cats")).await;
    assert!(matches!(outcome, SearchOutcome::NoMatches));
}
