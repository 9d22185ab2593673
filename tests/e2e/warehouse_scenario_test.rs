// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::init_tracing;
use seedrs::domain::builders::warehouse::WarehouseBuilder;
use seedrs::infrastructure::fixtures::loader;
use seedrs::infrastructure::remote::rest_driver::RestDriver;
use seedrs::utils::unique_name;
use serde_json::{json, Value};
use std::io::Write;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Warehouse creation flow: seed the builder from a JSON fixture, then
/// override name and value with run-unique ones before applying.
#[tokio::test]
async fn test_warehouse_from_fixture_materializes_in_one_call() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/window/139"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1000042 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut fixture = tempfile::NamedTempFile::new().unwrap();
    fixture
        .write_all(
            json!({
                "name": "Fixture Warehouse",
                "value": "FWH",
                "locator": { "value": "0-0-0", "x": "0", "y": "0", "z": "0" },
                "routes": ["Sales Order", "Purchase Order"]
            })
            .to_string()
            .as_bytes(),
        )
        .unwrap();

    let warehouse_name = unique_name("TestWarehouseName");
    let warehouse_value = unique_name("TestWarehouseValue");

    let bag = loader::load(fixture.path()).unwrap();
    let driver = RestDriver::new(&server.uri(), None, Duration::from_secs(5)).unwrap();

    let record = WarehouseBuilder::new()
        .merge_attributes(&bag)
        .unwrap()
        .set_name(&warehouse_name)
        .set_value(&warehouse_value)
        .apply(&driver)
        .await
        .unwrap();

    assert_eq!(record.id, "1000042");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let payload: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(payload["Name"], warehouse_name.as_str());
    assert_eq!(payload["Value"], warehouse_value.as_str());
    assert_eq!(payload["Locator"]["Value"], "0-0-0");
    let routes = payload["Routes"].as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert!(routes
        .iter()
        .any(|route| route["DocBaseType"] == "Sales Order"));
}

#[tokio::test]
async fn test_duplicate_warehouse_value_fails_loudly() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/window/139"))
        .respond_with(ResponseTemplate::new(409).set_body_string("value already exists"))
        .mount(&server)
        .await;

    let driver = RestDriver::new(&server.uri(), None, Duration::from_secs(5)).unwrap();
    let err = WarehouseBuilder::new()
        .set_name("W")
        .set_value("W")
        .apply(&driver)
        .await
        .unwrap_err();

    // The remote failure reaches the caller verbatim, nothing is retried.
    assert!(err.to_string().contains("409"));
    assert!(err.to_string().contains("value already exists"));
}
