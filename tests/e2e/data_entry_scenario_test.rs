// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::init_tracing;
use seedrs::domain::builders::data_entry_field::{DataEntryFieldBuilder, DataEntryListValueBuilder};
use seedrs::domain::builders::data_entry_group::{
    DataEntryGroupBuilder, DataEntrySectionBuilder, DataEntrySubGroupBuilder,
};
use seedrs::domain::models::data_entry::{PersonalDataCategory, RecordType};
use seedrs::infrastructure::remote::rest_driver::RestDriver;
use seedrs::utils::unique_name;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_window(server: &MockServer, window_id: &str, first_id: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/rest/api/window/{}", window_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": first_id })))
        .mount(server)
        .await;
}

fn requests_in_order(requests: &[wiremock::Request]) -> Vec<(String, Value)> {
    requests
        .iter()
        .map(|request| {
            (
                request.url.path().to_string(),
                serde_json::from_slice(&request.body).unwrap(),
            )
        })
        .collect()
}

/// Full data-entry setup flow: one group carrying a sub group and two
/// sections, then three fields on the sub group, the last one a list
/// field with two list values.
#[tokio::test]
async fn test_group_fields_and_list_values_materialize_in_order() {
    init_tracing();
    let server = MockServer::start().await;
    mount_window(&server, "540571", 1000001).await;
    mount_window(&server, "540572", 1000101).await;
    mount_window(&server, "540573", 1000201).await;
    mount_window(&server, "540574", 1000301).await;
    mount_window(&server, "540575", 1000401).await;

    let driver = RestDriver::new(&server.uri(), None, Duration::from_secs(5)).unwrap();

    let group_name = unique_name("Group1");
    let sub_group_name = unique_name("SubGroup1-1");
    let section1_name = unique_name("Section1-1");
    let section2_name = unique_name("Section1-2");

    DataEntryGroupBuilder::new(&group_name, "Business Partner")
        .unwrap()
        .set_tab_name("Group1-Tab1")
        .set_seq_no(20)
        .set_description(format!("Description of {}", group_name))
        .add_sub_group(
            DataEntrySubGroupBuilder::new(&sub_group_name)
                .unwrap()
                .set_tab_name("Group1-Tab1-SubTab1")
                .set_description(format!("{} - Description", sub_group_name))
                .set_seq_no(10)
                .build()
                .unwrap(),
        )
        .unwrap()
        .add_section(
            DataEntrySectionBuilder::new(&section1_name)
                .unwrap()
                .set_description(format!("{} - Description", section1_name))
                .set_seq_no(15)
                .build()
                .unwrap(),
        )
        .unwrap()
        .add_section(
            DataEntrySectionBuilder::new(&section2_name)
                .unwrap()
                .set_description(format!("{} - Description", section2_name))
                .set_seq_no(25)
                .build()
                .unwrap(),
        )
        .unwrap()
        .apply(&driver)
        .await
        .unwrap();

    DataEntryFieldBuilder::new("Tab1-Field1", &sub_group_name)
        .unwrap()
        .set_section(&section1_name)
        .set_description("Tab1-Field1 Description")
        .set_mandatory(true)
        .set_record_type(RecordType::YesNo)
        .set_personal_data_category(PersonalDataCategory::Personal)
        .set_seq_no(10)
        .apply(&driver)
        .await
        .unwrap();

    DataEntryFieldBuilder::new("Tab1-Field2", &sub_group_name)
        .unwrap()
        .set_section(&section1_name)
        .set_description("Tab1-Field2 Description")
        .set_mandatory(false)
        .set_record_type(RecordType::Date)
        .set_seq_no(20)
        .apply(&driver)
        .await
        .unwrap();

    DataEntryFieldBuilder::new("Tab1-Field3", &sub_group_name)
        .unwrap()
        .set_section(&section2_name)
        .set_description("Tab1-Field3 Description")
        .set_mandatory(true)
        .set_record_type(RecordType::List)
        .set_seq_no(30)
        .add_list_value(
            DataEntryListValueBuilder::new("ListItem 1")
                .unwrap()
                .set_description("ListItem 1 Description")
                .set_seq_no(20)
                .build()
                .unwrap(),
        )
        .unwrap()
        .add_list_value(
            DataEntryListValueBuilder::new("ListItem 2")
                .unwrap()
                .set_description("ListItem 2 Description")
                .set_seq_no(10)
                .build()
                .unwrap(),
        )
        .unwrap()
        .apply(&driver)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let calls = requests_in_order(&requests);
    assert_eq!(calls.len(), 9);

    // Group tree: group first, then children purely by sequence number.
    assert_eq!(calls[0].0, "/rest/api/window/540571");
    assert_eq!(calls[0].1["Name"], group_name.as_str());
    assert_eq!(calls[1].0, "/rest/api/window/540572");
    assert_eq!(calls[1].1["Name"], sub_group_name.as_str());
    assert_eq!(calls[1].1["DataEntry_Tab_ID"], "1000001");
    assert_eq!(calls[2].0, "/rest/api/window/540573");
    assert_eq!(calls[2].1["Name"], section1_name.as_str());
    assert_eq!(calls[3].0, "/rest/api/window/540573");
    assert_eq!(calls[3].1["Name"], section2_name.as_str());

    // Plain fields: one call each.
    assert_eq!(calls[4].0, "/rest/api/window/540574");
    assert_eq!(calls[4].1["Type"], "Yes-No");
    assert_eq!(calls[4].1["PersonalDataCategory"], "Personal");
    assert_eq!(calls[5].0, "/rest/api/window/540574");
    assert_eq!(calls[5].1["Type"], "Date");

    // List field followed by its list values ordered by sequence number.
    assert_eq!(calls[6].0, "/rest/api/window/540574");
    assert_eq!(calls[6].1["Type"], "List");
    assert_eq!(calls[6].1["DataEntry_SubTab"], sub_group_name.as_str());
    assert_eq!(calls[7].0, "/rest/api/window/540575");
    assert_eq!(calls[7].1["Name"], "ListItem 2");
    assert_eq!(calls[7].1["DataEntry_Field_ID"], "1000301");
    assert_eq!(calls[8].0, "/rest/api/window/540575");
    assert_eq!(calls[8].1["Name"], "ListItem 1");
}
