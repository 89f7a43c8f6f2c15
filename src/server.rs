use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::services::{ServeDir, ServeFile};

use seo_geo_review::config::ReviewConfig;
use seo_geo_review::tool::{discovery_manifest, stub_submission};
use seo_geo_review::{
    DescriptionChoice, ProductAuditRecord, ReviewSummary, SelectionTracker, SubmissionPayload,
};

#[derive(Clone)]
struct AppState {
    tracker: Arc<Mutex<SelectionTracker>>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let products = crate::load_products(args.data.as_deref(), args.pages.as_deref())?;
    let (config, _) = ReviewConfig::load(None)?;
    let tracker = SelectionTracker::new(products, config.actionable.to_policy());
    let state = AppState {
        tracker: Arc::new(Mutex::new(tracker)),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/discovery", get(discovery_handler))
        .route("/api/tools/seo-geo-report", post(report_tool_handler))
        .route("/api/report", get(catalog_handler))
        .route("/api/report/summary", get(summary_handler))
        .route("/api/report/progress", get(progress_handler))
        .route("/api/report/description", post(description_handler))
        .route("/api/report/custom", post(custom_text_handler))
        .route("/api/report/todo", post(todo_handler))
        .route("/api/report/complete", post(complete_handler))
        .route("/api/report/submit", post(submit_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!("listening on {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn discovery_handler() -> Json<Value> {
    Json(discovery_manifest())
}

async fn report_tool_handler(
    Json(body): Json<Value>,
) -> Result<Json<SubmissionPayload>, (StatusCode, Json<Value>)> {
    match stub_submission(&body) {
        Ok(payload) => Ok(Json(payload)),
        Err(message) => {
            tracing::warn!("rejected report tool call: {}", message);
            Err((StatusCode::BAD_REQUEST, Json(json!({ "error": message }))))
        }
    }
}

async fn catalog_handler(State(state): State<AppState>) -> Json<Vec<ProductAuditRecord>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.products().to_vec())
}

async fn summary_handler(State(state): State<AppState>) -> Json<ReviewSummary> {
    let tracker = state.tracker.lock().await;
    Json(tracker.summary())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressQuery {
    product_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressResponse {
    product_id: String,
    completed: usize,
    total: usize,
}

async fn progress_handler(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Json<ProgressResponse> {
    let tracker = state.tracker.lock().await;
    Json(progress(&tracker, &query.product_id))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptionRequest {
    product_id: String,
    choice: String,
}

async fn description_handler(
    State(state): State<AppState>,
    Json(request): Json<DescriptionRequest>,
) -> Json<ProgressResponse> {
    let mut tracker = state.tracker.lock().await;
    let choice = DescriptionChoice::from(request.choice);
    if choice == DescriptionChoice::Custom {
        tracker.enable_custom_description(&request.product_id);
    } else {
        tracker.select_description(&request.product_id, choice);
    }
    Json(progress(&tracker, &request.product_id))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomTextRequest {
    product_id: String,
    text: String,
}

async fn custom_text_handler(
    State(state): State<AppState>,
    Json(request): Json<CustomTextRequest>,
) -> Json<ProgressResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.set_custom_description(&request.product_id, &request.text);
    Json(progress(&tracker, &request.product_id))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoRequest {
    product_id: String,
    todo: String,
}

async fn todo_handler(
    State(state): State<AppState>,
    Json(request): Json<TodoRequest>,
) -> Json<ProgressResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.toggle_todo(&request.product_id, &request.todo);
    Json(progress(&tracker, &request.product_id))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompleteRequest {
    product_id: String,
    item: String,
}

async fn complete_handler(
    State(state): State<AppState>,
    Json(request): Json<CompleteRequest>,
) -> Json<ProgressResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.toggle_completed_item(&request.product_id, &request.item);
    Json(progress(&tracker, &request.product_id))
}

async fn submit_handler(State(state): State<AppState>) -> Json<SubmissionPayload> {
    let tracker = state.tracker.lock().await;
    Json(tracker.build_submission())
}

fn progress(tracker: &SelectionTracker, product_id: &str) -> ProgressResponse {
    ProgressResponse {
        product_id: product_id.to_string(),
        completed: tracker.completed_count(product_id),
        total: tracker.total_actionable_items(product_id),
    }
}
