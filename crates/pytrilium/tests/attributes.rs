//! Tests for attribute ETAPI actions.

mod common;

use common::{connected_client, setup_mock_server};
use pytrilium::{AttributePatch, AttributeType, CreateAttributeParams, Error};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn label_json(value: &str) -> serde_json::Value {
    serde_json::json!({
        "attributeId": "attr1",
        "noteId": "abc",
        "type": "label",
        "name": "priority",
        "value": value,
        "position": 10,
        "isInheritable": false,
        "utcDateModified": "2024-01-01 09:00:00.000Z"
    })
}

#[tokio::test]
async fn test_get_attribute() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/etapi/attributes/attr1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(label_json("high")))
        .expect(1)
        .mount(&server)
        .await;

    let attribute = client.attributes().get("attr1").await.unwrap();
    assert_eq!(attribute.attribute_type, AttributeType::Label);
    assert_eq!(attribute.name, "priority");
    assert_eq!(attribute.value, "high");
}

#[tokio::test]
async fn test_create_attribute() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/etapi/attributes"))
        .and(body_json(serde_json::json!({
            "noteId": "abc",
            "type": "label",
            "name": "priority",
            "value": "high",
            "isInheritable": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(label_json("high")))
        .expect(1)
        .mount(&server)
        .await;

    let params = CreateAttributeParams::label("abc", "priority", "high").inheritable(true);
    let attribute = client.attributes().create(&params).await.unwrap();
    assert_eq!(attribute.attribute_id, "attr1");
}

#[tokio::test]
async fn test_create_attribute_validation_error() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/etapi/attributes"))
        .respond_with(common::etapi_error(
            400,
            "PROPERTIES_VALIDATION_ERROR",
            "Validation failed on property 'name'",
        ))
        .mount(&server)
        .await;

    let params = CreateAttributeParams::label("abc", "", "");
    let err = client.attributes().create(&params).await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 400, .. }));
}

#[tokio::test]
async fn test_patch_attribute() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("PATCH"))
        .and(path("/etapi/attributes/attr1"))
        .and(body_json(serde_json::json!({"value": "low"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(label_json("low")))
        .expect(1)
        .mount(&server)
        .await;

    let patch = AttributePatch {
        value: Some("low".to_string()),
        ..Default::default()
    };
    let attribute = client.attributes().patch("attr1", &patch).await.unwrap();
    assert_eq!(attribute.value, "low");
}

#[tokio::test]
async fn test_delete_attribute() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/etapi/attributes/attr1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.attributes().delete("attr1").await.unwrap();
    assert!(response.is_valid());
}
