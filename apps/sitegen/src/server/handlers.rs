//! Axum route handlers for the static site and the contact endpoint.

use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "index.html").await
}

/// GET /about
pub async fn handle_about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "about.html").await
}

/// GET /services
pub async fn handle_services(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "services.html").await
}

/// GET /contact
pub async fn handle_contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    serve_page(&state, "contact.html").await
}

/// POST /submit-contact
///
/// Logs the submission and acknowledges it. Nothing is persisted; the
/// payload is accepted as-is and surfaced only in the logs.
pub async fn handle_submit_contact(Json(payload): Json<Value>) -> Json<Value> {
    info!("Contact form submitted: {payload}");
    Json(json!({
        "status": "success",
        "message": "Thank you for contacting us!"
    }))
}

async fn serve_page(state: &AppState, file_name: &str) -> Result<Html<String>, AppError> {
    let path = state.config.site_root.join(file_name);
    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("{file_name} has not been rendered")))?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn state_with_root(root: PathBuf) -> AppState {
        AppState {
            config: Config {
                site_root: root.clone(),
                viewmodel_path: root.join("viewmodel.json"),
                job_template_path: root.join("job_page_template.html"),
                index_template_path: root.join("index_template.html"),
                output_dir: root.join("job_pages"),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_index_route_serves_rendered_file() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("index.html"), "<h1>Jobs</h1>").unwrap();
        let state = state_with_root(root.path().to_path_buf());

        let Html(body) = handle_index(State(state)).await.unwrap();
        assert_eq!(body, "<h1>Jobs</h1>");
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let root = TempDir::new().unwrap();
        let state = state_with_root(root.path().to_path_buf());

        let err = handle_about(State(state)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_submit_contact_acknowledges_without_persisting() {
        let payload = json!({"name": "Ada", "message": "Hello"});
        let Json(body) = handle_submit_contact(Json(payload)).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Thank you for contacting us!");
    }
}
