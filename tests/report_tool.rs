use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use seo_geo_review::decode::decode_report_param;
use seo_geo_review::tool::{discovery_manifest, stub_submission};
use seo_geo_review::DescriptionChoice;

#[test]
fn stub_maps_every_page_to_fixed_selections() {
    let body = json!({
        "pages": [
            { "id": "x", "title": "T", "seo": { "recommendations": ["a", "b"] } }
        ]
    });

    let payload = stub_submission(&body).expect("valid input");
    assert_eq!(payload.products.len(), 1);

    let product = &payload.products[0];
    assert_eq!(product.id, "x");
    assert_eq!(product.title, "T");
    assert_eq!(
        product.selected_description,
        DescriptionChoice::Preset("balanced".to_string())
    );
    assert_eq!(product.completed_items, vec!["description".to_string()]);
    assert_eq!(product.todos, vec!["seo-0".to_string(), "seo-1".to_string()]);

    let value = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(value["products"][0]["selectedDescription"], "balanced");
    assert!(value["products"][0].get("customDescription").is_none());
}

#[test]
fn stub_ignores_geo_recommendations() {
    let body = json!({
        "pages": [
            {
                "id": "y",
                "title": "U",
                "seo": { "recommendations": ["a"] },
                "geo": { "recommendations": ["b", "c"] }
            }
        ]
    });

    let payload = stub_submission(&body).expect("valid input");
    assert_eq!(payload.products[0].todos, vec!["seo-0".to_string()]);
}

#[test]
fn stub_tolerates_pages_without_audit_sections() {
    let body = json!({ "pages": [ { "id": "bare" } ] });

    let payload = stub_submission(&body).expect("valid input");
    assert_eq!(payload.products[0].id, "bare");
    assert!(payload.products[0].todos.is_empty());
    assert_eq!(
        payload.products[0].completed_items,
        vec!["description".to_string()]
    );
}

#[test]
fn stub_rejects_missing_or_non_array_pages() {
    assert_eq!(stub_submission(&json!({})), Err("Invalid input".to_string()));
    assert_eq!(
        stub_submission(&json!({ "pages": "nope" })),
        Err("Invalid input".to_string())
    );
    assert_eq!(
        stub_submission(&json!({ "pages": 3 })),
        Err("Invalid input".to_string())
    );
}

#[test]
fn discovery_manifest_describes_the_report_tool() {
    let manifest = discovery_manifest();

    assert_eq!(manifest["name"], "SEO GEO Visual Review");
    let tool = &manifest["tools"][0];
    assert_eq!(tool["id"], "seo-geo-review");
    assert_eq!(tool["execution_url"], "/api/tools/seo-geo-report");
    assert_eq!(tool["input_schema"]["required"], json!(["pages"]));
    assert_eq!(tool["output_schema"]["required"], json!(["products"]));
    assert_eq!(
        tool["output_schema"]["properties"]["products"]["items"]["required"],
        json!(["id", "selectedDescription", "todos"])
    );
}

#[test]
fn decode_accepts_wrapped_and_bare_payloads() {
    let record = json!({ "id": "p-1", "title": "Product" });

    let wrapped = STANDARD.encode(json!({ "pages": [record.clone()] }).to_string());
    let records = decode_report_param(&wrapped);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "p-1");

    let bare = STANDARD.encode(json!([record]).to_string());
    let records = decode_report_param(&bare);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Product");
}

#[test]
fn decode_failures_yield_an_empty_catalog() {
    assert!(decode_report_param("not base64 at all!").is_empty());

    let not_json = STANDARD.encode("definitely not json");
    assert!(decode_report_param(&not_json).is_empty());

    let wrong_shape = STANDARD.encode(json!({ "pages": "nope" }).to_string());
    assert!(decode_report_param(&wrong_shape).is_empty());
}

#[test]
fn description_choice_is_string_transparent() {
    assert_eq!(
        serde_json::to_value(DescriptionChoice::NoChange).unwrap(),
        json!("no-change")
    );
    assert_eq!(
        serde_json::from_value::<DescriptionChoice>(json!("custom")).unwrap(),
        DescriptionChoice::Custom
    );
    assert_eq!(
        serde_json::from_value::<DescriptionChoice>(json!("Some literal text")).unwrap(),
        DescriptionChoice::Preset("Some literal text".to_string())
    );
}
