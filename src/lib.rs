pub mod config;
pub mod decode;
pub mod sample;
pub mod tool;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::config::ActionablePolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAuditRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub original_description: String,
    #[serde(default)]
    pub seo: SeoAudit,
    #[serde(default)]
    pub geo: GeoAudit,
    #[serde(default)]
    pub description_options: DescriptionOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoAudit {
    #[serde(default)]
    pub strengths: BTreeMap<String, String>,
    #[serde(default)]
    pub issues: BTreeMap<String, String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoAudit {
    #[serde(default)]
    pub strengths: BTreeMap<String, String>,
    #[serde(default)]
    pub gaps: BTreeMap<String, String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionOptions {
    #[serde(default)]
    pub seo_prioritized: String,
    #[serde(default)]
    pub geo_prioritized: String,
    #[serde(default)]
    pub balanced: String,
}

/// Radio-state domain for the description block: keep the current copy,
/// write a custom one, or pick a preset variant by its literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DescriptionChoice {
    NoChange,
    Custom,
    Preset(String),
}

impl DescriptionChoice {
    pub fn as_str(&self) -> &str {
        match self {
            DescriptionChoice::NoChange => "no-change",
            DescriptionChoice::Custom => "custom",
            DescriptionChoice::Preset(text) => text,
        }
    }
}

impl From<String> for DescriptionChoice {
    fn from(value: String) -> Self {
        match value.as_str() {
            "no-change" => DescriptionChoice::NoChange,
            "custom" => DescriptionChoice::Custom,
            _ => DescriptionChoice::Preset(value),
        }
    }
}

impl From<DescriptionChoice> for String {
    fn from(choice: DescriptionChoice) -> Self {
        match choice {
            DescriptionChoice::Preset(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

/// Per-product selection state, created lazily on first touch and held
/// for the lifetime of the session. `completed_items` and
/// `selected_todos` keep insertion order with unique membership so the
/// submission arrays come out deterministic.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_description: Option<DescriptionChoice>,
    custom_description: Option<String>,
    custom_input_visible: bool,
    completed_items: Vec<String>,
    selected_todos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    pub id: String,
    pub title: String,
    pub selected_description: DescriptionChoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_description: Option<String>,
    #[serde(default)]
    pub completed_items: Vec<String>,
    #[serde(default)]
    pub todos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub products: Vec<ProductSelection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub products_analyzed: usize,
    pub descriptions_selected: usize,
    pub todos_created: usize,
    pub items_selected: usize,
}

/// Owns the per-product selection map and derives counts and the
/// submission payload from it. Every operation is total: unknown
/// product ids simply get an empty entry.
pub struct SelectionTracker {
    products: Vec<ProductAuditRecord>,
    policy: ActionablePolicy,
    selections: HashMap<String, SelectionState>,
}

impl SelectionTracker {
    pub fn new(products: Vec<ProductAuditRecord>, policy: ActionablePolicy) -> Self {
        Self {
            products,
            policy,
            selections: HashMap::new(),
        }
    }

    pub fn products(&self) -> &[ProductAuditRecord] {
        &self.products
    }

    pub fn select_description(&mut self, product_id: &str, choice: DescriptionChoice) {
        let state = self.entry(product_id);
        // Picking a non-custom option hides the custom input but keeps
        // any text already typed into it.
        if choice != DescriptionChoice::Custom {
            state.custom_input_visible = false;
        }
        state.selected_description = Some(choice);
    }

    pub fn enable_custom_description(&mut self, product_id: &str) {
        self.entry(product_id).custom_input_visible = true;
        self.select_description(product_id, DescriptionChoice::Custom);
    }

    pub fn set_custom_description(&mut self, product_id: &str, text: &str) {
        self.entry(product_id).custom_description = Some(text.to_string());
    }

    pub fn toggle_completed_item(&mut self, product_id: &str, item: &str) {
        let state = self.entry(product_id);
        toggle_membership(&mut state.completed_items, item);
    }

    pub fn toggle_todo(&mut self, product_id: &str, todo: &str) {
        let state = self.entry(product_id);
        toggle_membership(&mut state.selected_todos, todo);
    }

    pub fn selected_description(&self, product_id: &str) -> Option<&DescriptionChoice> {
        self.selections
            .get(product_id)
            .and_then(|state| state.selected_description.as_ref())
    }

    pub fn is_completed(&self, product_id: &str, item: &str) -> bool {
        self.selections
            .get(product_id)
            .map(|state| state.completed_items.iter().any(|entry| entry == item))
            .unwrap_or(false)
    }

    pub fn is_todo_selected(&self, product_id: &str, todo: &str) -> bool {
        self.selections
            .get(product_id)
            .map(|state| state.selected_todos.iter().any(|entry| entry == todo))
            .unwrap_or(false)
    }

    pub fn is_custom_input_visible(&self, product_id: &str) -> bool {
        self.selections
            .get(product_id)
            .map(|state| state.custom_input_visible)
            .unwrap_or(false)
    }

    pub fn custom_description(&self, product_id: &str) -> Option<&str> {
        self.selections
            .get(product_id)
            .and_then(|state| state.custom_description.as_deref())
    }

    /// Derived fresh on every call; the underlying sets mutate
    /// independently, so this is never cached.
    pub fn completed_count(&self, product_id: &str) -> usize {
        match self.selections.get(product_id) {
            Some(state) => {
                state.completed_items.len()
                    + state.selected_todos.len()
                    + usize::from(state.selected_description.is_some())
            }
            None => 0,
        }
    }

    pub fn total_actionable_items(&self, product_id: &str) -> usize {
        match self.policy {
            ActionablePolicy::Fixed(total) => total,
            ActionablePolicy::PerProduct => self
                .products
                .iter()
                .find(|product| product.id == product_id)
                .map(|product| {
                    product.seo.recommendations.len() + product.geo.recommendations.len() + 1
                })
                // Unknown ids can still hold state; only the
                // description slot counts for them.
                .unwrap_or(1),
        }
    }

    pub fn summary(&self) -> ReviewSummary {
        let mut todos_created = 0;
        let mut items_selected = 0;
        for product in &self.products {
            if let Some(state) = self.selections.get(&product.id) {
                todos_created += state.selected_todos.len();
            }
            items_selected += self.completed_count(&product.id);
        }

        ReviewSummary {
            products_analyzed: self.products.len(),
            descriptions_selected: self
                .selections
                .values()
                .filter(|state| state.selected_description.is_some())
                .count(),
            todos_created,
            items_selected,
        }
    }

    /// Serializes the selections in catalog order. Untouched products
    /// come out as "no-change" with empty lists. Producing the payload
    /// has no side effects; transmission is someone else's job.
    pub fn build_submission(&self) -> SubmissionPayload {
        let products = self
            .products
            .iter()
            .map(|product| {
                let state = self.selections.get(&product.id);
                ProductSelection {
                    id: product.id.clone(),
                    title: product.title.clone(),
                    selected_description: state
                        .and_then(|state| state.selected_description.clone())
                        .unwrap_or(DescriptionChoice::NoChange),
                    custom_description: state
                        .and_then(|state| state.custom_description.clone()),
                    completed_items: state
                        .map(|state| state.completed_items.clone())
                        .unwrap_or_default(),
                    todos: state
                        .map(|state| state.selected_todos.clone())
                        .unwrap_or_default(),
                }
            })
            .collect();

        SubmissionPayload { products }
    }

    fn entry(&mut self, product_id: &str) -> &mut SelectionState {
        self.selections.entry(product_id.to_string()).or_default()
    }
}

fn toggle_membership(entries: &mut Vec<String>, value: &str) {
    if let Some(position) = entries.iter().position(|entry| entry == value) {
        entries.remove(position);
    } else {
        entries.push(value.to_string());
    }
}
