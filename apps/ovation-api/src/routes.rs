use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use ovation_service::{ListItem, StatsSnapshot, SubmitRequest, SubmittedReview};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/reviews", post(submit_review).get(list_reviews))
		.route("/api/stats", get(stats))
		.layer(CorsLayer::permissive())
		.with_state(state)
}

async fn health() -> Json<Value> {
	Json(json!({ "status": "ok" }))
}

async fn submit_review(
	State(state): State<AppState>,
	Json(payload): Json<SubmitRequest>,
) -> Result<Json<Envelope<SubmittedReview>>, ApiError> {
	envelope(
		state.service.submit(payload).await,
		"submit_review",
		"Failed to submit review. Please try again.",
	)
}

async fn list_reviews(
	State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ListItem>>>, ApiError> {
	envelope(state.service.list().await, "list_reviews", "Failed to fetch reviews.")
}

async fn stats(State(state): State<AppState>) -> Result<Json<Envelope<StatsSnapshot>>, ApiError> {
	envelope(state.service.stats().await, "stats", "Failed to fetch stats.")
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
	pub success: bool,
	pub data: Option<T>,
	pub error: Option<String>,
}

/// Maps a service result into the response envelope. Invalid requests are the
/// only hard HTTP rejection; every other failure is logged and reported as
/// `success: false` on a normal status so callers check the flag, not the
/// transport code.
fn envelope<T>(
	result: ovation_service::Result<T>,
	operation: &str,
	failure_message: &str,
) -> Result<Json<Envelope<T>>, ApiError> {
	match result {
		Ok(data) => Ok(Json(Envelope { success: true, data: Some(data), error: None })),
		Err(ovation_service::Error::InvalidRequest { message }) =>
			Err(ApiError::unprocessable(message)),
		Err(err) => {
			tracing::error!("{operation} failed: {err}");

			Ok(Json(Envelope { success: false, data: None, error: Some(failure_message.to_string()) }))
		},
	}
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn unprocessable(message: impl Into<String>) -> Self {
		Self {
			status: StatusCode::UNPROCESSABLE_ENTITY,
			error_code: "invalid_request".to_string(),
			message: message.into(),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
