use seo_geo_review::config::ActionablePolicy;
use seo_geo_review::sample::sample_products;
use seo_geo_review::{DescriptionChoice, SelectionTracker};

fn tracker() -> SelectionTracker {
    SelectionTracker::new(sample_products(), ActionablePolicy::Fixed(8))
}

fn balanced_text(tracker: &SelectionTracker, product_id: &str) -> String {
    tracker
        .products()
        .iter()
        .find(|product| product.id == product_id)
        .map(|product| product.description_options.balanced.clone())
        .unwrap_or_default()
}

#[test]
fn untouched_products_report_nothing() {
    let tracker = tracker();

    for product_id in ["ck-001", "ck-002", "never-seen"] {
        assert_eq!(tracker.completed_count(product_id), 0);
        assert!(!tracker.is_completed(product_id, "description"));
        assert!(!tracker.is_todo_selected(product_id, "seo-0"));
        assert!(!tracker.is_custom_input_visible(product_id));
        assert!(tracker.selected_description(product_id).is_none());
    }
}

#[test]
fn double_toggle_is_idempotent() {
    let mut tracker = tracker();

    tracker.toggle_todo("ck-001", "seo-0");
    assert!(tracker.is_todo_selected("ck-001", "seo-0"));
    tracker.toggle_todo("ck-001", "seo-0");
    assert!(!tracker.is_todo_selected("ck-001", "seo-0"));

    tracker.toggle_completed_item("ck-001", "description");
    tracker.toggle_completed_item("ck-001", "description");
    assert!(!tracker.is_completed("ck-001", "description"));

    assert_eq!(tracker.completed_count("ck-001"), 0);
}

#[test]
fn preset_selection_hides_custom_input_but_keeps_text() {
    let mut tracker = tracker();
    let balanced = balanced_text(&tracker, "ck-001");

    tracker.enable_custom_description("ck-001");
    tracker.set_custom_description("ck-001", "Hand-written copy");
    assert!(tracker.is_custom_input_visible("ck-001"));
    assert_eq!(
        tracker.selected_description("ck-001"),
        Some(&DescriptionChoice::Custom)
    );

    tracker.select_description("ck-001", DescriptionChoice::Preset(balanced.clone()));
    assert!(!tracker.is_custom_input_visible("ck-001"));
    assert_eq!(tracker.custom_description("ck-001"), Some("Hand-written copy"));
    assert_eq!(
        tracker.selected_description("ck-001"),
        Some(&DescriptionChoice::Preset(balanced))
    );
}

#[test]
fn selecting_custom_directly_does_not_reveal_input() {
    let mut tracker = tracker();

    tracker.select_description("ck-001", DescriptionChoice::Custom);
    assert!(!tracker.is_custom_input_visible("ck-001"));

    tracker.enable_custom_description("ck-001");
    assert!(tracker.is_custom_input_visible("ck-001"));
}

#[test]
fn completed_count_is_recomputed_after_every_mutation() {
    let mut tracker = tracker();

    tracker.toggle_todo("ck-001", "geo-2");
    assert_eq!(tracker.completed_count("ck-001"), 1);

    tracker.toggle_completed_item("ck-001", "description");
    assert_eq!(tracker.completed_count("ck-001"), 2);

    tracker.select_description("ck-001", DescriptionChoice::NoChange);
    assert_eq!(tracker.completed_count("ck-001"), 3);

    tracker.toggle_todo("ck-001", "geo-2");
    assert_eq!(tracker.completed_count("ck-001"), 2);

    tracker.toggle_completed_item("ck-001", "description");
    assert_eq!(tracker.completed_count("ck-001"), 1);

    // Re-selecting a description never adds a second point.
    tracker.select_description("ck-001", DescriptionChoice::Custom);
    assert_eq!(tracker.completed_count("ck-001"), 1);
}

#[test]
fn submission_defaults_match_catalog_order() {
    let tracker = tracker();
    let payload = tracker.build_submission();

    assert_eq!(payload.products.len(), 2);
    assert_eq!(payload.products[0].id, "ck-001");
    assert_eq!(payload.products[1].id, "ck-002");

    for product in &payload.products {
        assert_eq!(product.selected_description, DescriptionChoice::NoChange);
        assert!(product.custom_description.is_none());
        assert!(product.completed_items.is_empty());
        assert!(product.todos.is_empty());
    }
}

#[test]
fn full_review_scenario_for_first_product() {
    let mut tracker = tracker();
    let balanced = balanced_text(&tracker, "ck-001");

    tracker.toggle_todo("ck-001", "seo-0");
    tracker.toggle_todo("ck-001", "geo-1");
    tracker.select_description("ck-001", DescriptionChoice::Preset(balanced.clone()));
    tracker.toggle_completed_item("ck-001", "description");

    assert_eq!(tracker.completed_count("ck-001"), 4);

    let payload = tracker.build_submission();
    let entry = &payload.products[0];
    assert_eq!(entry.id, "ck-001");
    assert_eq!(entry.selected_description, DescriptionChoice::Preset(balanced));
    assert_eq!(entry.completed_items, vec!["description".to_string()]);
    assert!(entry.todos.contains(&"seo-0".to_string()));
    assert!(entry.todos.contains(&"geo-1".to_string()));
    assert_eq!(entry.todos.len(), 2);

    // The untouched second product is unaffected.
    assert_eq!(payload.products[1].selected_description, DescriptionChoice::NoChange);
    assert!(payload.products[1].todos.is_empty());
}

#[test]
fn submission_serializes_with_wire_field_names() {
    let mut tracker = tracker();

    tracker.enable_custom_description("ck-001");
    tracker.set_custom_description("ck-001", "Hand-written copy");

    let value = serde_json::to_value(tracker.build_submission()).expect("payload serializes");
    let first = &value["products"][0];
    assert_eq!(first["selectedDescription"], "custom");
    assert_eq!(first["customDescription"], "Hand-written copy");
    assert_eq!(first["completedItems"], serde_json::json!([]));

    // Absent custom text is omitted, not null.
    let second = &value["products"][1];
    assert_eq!(second["selectedDescription"], "no-change");
    assert!(second.get("customDescription").is_none());
}

#[test]
fn fixed_policy_ignores_actual_list_lengths() {
    let tracker = tracker();

    assert_eq!(tracker.total_actionable_items("ck-001"), 8);
    assert_eq!(tracker.total_actionable_items("ck-002"), 8);
    assert_eq!(tracker.total_actionable_items("never-seen"), 8);
}

#[test]
fn per_product_policy_counts_actual_list_lengths() {
    let tracker = SelectionTracker::new(sample_products(), ActionablePolicy::PerProduct);

    // ck-001 has 3 SEO + 4 GEO recommendations, ck-002 has 3 + 3.
    assert_eq!(tracker.total_actionable_items("ck-001"), 8);
    assert_eq!(tracker.total_actionable_items("ck-002"), 7);
    assert_eq!(tracker.total_actionable_items("never-seen"), 1);
}

#[test]
fn unknown_product_gets_an_entry_but_no_submission_row() {
    let mut tracker = tracker();

    tracker.select_description("ghost", DescriptionChoice::NoChange);
    assert_eq!(tracker.completed_count("ghost"), 1);

    let payload = tracker.build_submission();
    assert_eq!(payload.products.len(), 2);
    assert!(payload.products.iter().all(|product| product.id != "ghost"));
}

#[test]
fn summary_aggregates_across_products() {
    let mut tracker = tracker();

    tracker.toggle_todo("ck-001", "seo-0");
    tracker.toggle_todo("ck-002", "geo-0");
    tracker.toggle_todo("ck-002", "geo-1");
    tracker.select_description("ck-001", DescriptionChoice::NoChange);
    tracker.toggle_completed_item("ck-002", "description");

    let summary = tracker.summary();
    assert_eq!(summary.products_analyzed, 2);
    assert_eq!(summary.descriptions_selected, 1);
    assert_eq!(summary.todos_created, 3);
    assert_eq!(summary.items_selected, 5);
}
