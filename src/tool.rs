use serde_json::{json, Value};

use crate::{DescriptionChoice, ProductSelection, SubmissionPayload};

/// Static manifest describing the one tool this service exposes, its
/// input/output schemas, and where to execute it.
pub fn discovery_manifest() -> Value {
    json!({
        "name": "SEO GEO Visual Review",
        "description": "Displays SEO and GEO audit data in an interactive format.",
        "tools": [
            {
                "id": "seo-geo-review",
                "name": "SEO GEO Viewer",
                "description": "Displays an interactive canvas of audit data. Returns selected items.",
                "input_schema": {
                    "type": "object",
                    "required": ["pages"],
                    "properties": {
                        "pages": {
                            "type": "array",
                            "items": { "type": "object" }
                        }
                    }
                },
                "output_schema": {
                    "type": "object",
                    "required": ["products"],
                    "properties": {
                        "products": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["id", "selectedDescription", "todos"],
                                "properties": {
                                    "id": { "type": "string" },
                                    "selectedDescription": { "type": "string" },
                                    "todos": {
                                        "type": "array",
                                        "items": { "type": "string" }
                                    }
                                }
                            }
                        }
                    }
                },
                "execution_url": "/api/tools/seo-geo-report",
                "mime_type": "application/json"
            }
        ]
    })
}

/// Fixed-response reshape behind the processing endpoint: every page
/// comes back with the balanced description chosen, the description
/// block marked done, and all of its SEO recommendation slots flagged
/// as to-dos. Real tracker state is deliberately not consulted; this
/// mirrors the placeholder behavior of the workflow stage it stands in
/// for.
///
/// Returns `Err` only when `pages` is missing or not an array, which
/// the HTTP layer surfaces as a 400.
pub fn stub_submission(body: &Value) -> Result<SubmissionPayload, String> {
    let pages = body
        .get("pages")
        .and_then(Value::as_array)
        .ok_or_else(|| "Invalid input".to_string())?;

    let products = pages
        .iter()
        .map(|page| {
            let seo_recommendations = page
                .pointer("/seo/recommendations")
                .and_then(Value::as_array)
                .map(|list| list.len())
                .unwrap_or(0);

            ProductSelection {
                id: string_field(page, "id"),
                title: string_field(page, "title"),
                selected_description: DescriptionChoice::Preset("balanced".to_string()),
                custom_description: None,
                completed_items: vec!["description".to_string()],
                todos: (0..seo_recommendations)
                    .map(|index| format!("seo-{}", index))
                    .collect(),
            }
        })
        .collect();

    Ok(SubmissionPayload { products })
}

fn string_field(page: &Value, field: &str) -> String {
    page.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
