use crate::common::{ScriptedTransport, scripted_client};
use assert_json_diff::assert_json_eq;
use drs_client::prelude::*;
use mockito::{Matcher, Server};
use reqwest::Method;
use serde_json::{Value, json};

const OBJECT_BODY: &str = r#"{"id":"dg.1234/abc","size":123,"checksums":[{"checksum":"8b9942cf415384b27cadf1f4d2d682e5","type":"md5"}]}"#;

#[tokio::test]
async fn test_check_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/index")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"records":[]}"#)
        .create_async()
        .await;

    let client = DrsClient::new(server.url()).with_token("abc");
    let response = client.check_status().await.unwrap();

    assert_eq!(response.status_code(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ga4gh/drs/v1/objects/abc")
        .match_query(Matcher::UrlEncoded("expand".into(), "false".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(OBJECT_BODY)
        .create_async()
        .await;

    let client = DrsClient::new(server.url());
    let response = client.get("abc").await.unwrap();

    assert!(response.is_success());
    let body: Value = response.json().unwrap();
    assert_eq!(body["size"], 123);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_expanded_bundle_from_custom_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/bundle/b-1")
        .match_query(Matcher::UrlEncoded("expand".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"bundle_id":"b-1","bundles":[]}"#)
        .create_async()
        .await;

    let client = DrsClient::new(format!("{}/", server.url()));
    let response = client.get_with("b-1", "/bundle/", true).await.unwrap();

    assert_eq!(response.status_code(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_returned_as_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ga4gh/drs/v1/objects/missing")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"msg":"no record found"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = DrsClient::new(server.url());
    let response = client.get("missing").await.unwrap();

    assert_eq!(response.status_code(), 404);
    assert!(response.text().contains("no record found"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_all_with_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/bundle")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("form".into(), "bundle".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"records":[]}"#)
        .create_async()
        .await;

    let client = DrsClient::new(server.url());
    let params = ListParams::new()
        .with_endpoint("bundle")
        .with_limit(10)
        .with_page(2)
        .with_form("bundle");
    let response = client.get_all(&params).await.unwrap();

    assert_eq!(response.status_code(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_all_omits_unset_parameters() {
    let transport = ScriptedTransport::ok(r#"{"drs_objects":[]}"#);
    let client = scripted_client(transport.clone());

    client
        .get_all(&ListParams::new().with_start("").with_limit(0))
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.url, "http://indexd.local/ga4gh/drs/v1/objects");
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn test_get_all_passes_unknown_form_through() {
    let transport = ScriptedTransport::ok("{}");
    let client = scripted_client(transport.clone());

    client
        .get_all(&ListParams::new().with_start("dg.1/zzz").with_form("directory"))
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.query_param("start"), Some("dg.1/zzz"));
    assert_eq!(request.query_param("form"), Some("directory"));
    assert_eq!(request.query_param("limit"), None);
}

#[tokio::test]
async fn test_download_access_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ga4gh/drs/v1/objects/abc/access/s3")
        .with_status(200)
        .with_body(r#"{"url":"https://bucket.s3.amazonaws.com/key?X-Amz-Signature=1"}"#)
        .create_async()
        .await;

    let client = DrsClient::new(server.url());
    let response = client.download("abc", "s3").await.unwrap();
    let access: AccessUrl = response.json().unwrap();

    assert!(access.url.starts_with("https://bucket.s3.amazonaws.com/key"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_bundle_body_and_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/bundle")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "bundles": ["dg.1234/abc"],
            "bundle_id": "b-1",
            "name": "my bundle"
        })))
        .with_status(200)
        .with_body(r#"{"bundle_id":"b-1","name":"my bundle"}"#)
        .create_async()
        .await;

    let client = DrsClient::new(server.url());
    let bundle = CreateBundle::with_members(["dg.1234/abc"])
        .with_guid("b-1")
        .with_name("my bundle");
    let response = client.create(&bundle).await.unwrap();

    assert_eq!(response.status_code(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_without_members_sends_empty_list() {
    let transport = ScriptedTransport::ok("{}");
    let client = scripted_client(transport.clone());

    client.create(&CreateBundle::new(None)).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "http://indexd.local/bundle");
    assert_json_eq!(request.body.unwrap(), json!({"bundles": []}));
}

#[tokio::test]
async fn test_create_malformed_checksum_returns_400() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/bundle")
        .with_status(400)
        .with_body(r#"{"error":"malformed checksum"}"#)
        .create_async()
        .await;

    let client = DrsClient::new(server.url());
    let bundle = CreateBundle::with_members(["a"])
        .with_checksums(vec![Checksum::new("not-a-hash", "md5")]);
    let response = client.create(&bundle).await.unwrap();

    assert_eq!(response.status_code(), 400);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_bundle() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/bundle/b-1")
        .with_status(200)
        .create_async()
        .await;

    let client = DrsClient::new(format!("{}/", server.url()));
    let response = client.delete("b-1").await.unwrap();

    assert_eq!(response.status_code(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_an_error() {
    let client = DrsClient::new("http://127.0.0.1:1");

    let err = client.get("abc").await.expect_err("nothing listens on port 1");

    assert!(matches!(err, DrsError::Connection(_)));
}

#[test]
fn test_url_for_never_doubles_separators() {
    for base in ["http://indexd.local", "http://indexd.local/"] {
        let client = DrsClient::new(base);
        for path in ["bundle", "/bundle", "bundle/", "/bundle/"] {
            assert_eq!(client.url_for(&[path]), "http://indexd.local/bundle");
            assert_eq!(client.url_for(&[path, "b-1"]), "http://indexd.local/bundle/b-1");
        }
    }
}
