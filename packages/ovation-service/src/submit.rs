use ovation_storage::{models::NewReview, queries};

use crate::{Error, MAX_REVIEW_CHARS, Result, ReviewService};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitRequest {
	pub rating: u8,
	#[serde(default)]
	pub review: Option<String>,
}

/// The submission response deliberately omits `ai_summary` and
/// `ai_recommended_actions`; both stay internal until read back through the
/// listing endpoint.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmittedReview {
	pub id: i64,
	pub rating: i64,
	pub review: String,
	pub ai_response: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}

impl ReviewService {
	pub async fn submit(&self, req: SubmitRequest) -> Result<SubmittedReview> {
		if !(1..=5).contains(&req.rating) {
			return Err(Error::InvalidRequest {
				message: "rating must be an integer between 1 and 5.".to_string(),
			});
		}

		let review = req.review.unwrap_or_default();
		let review = truncate_chars(review.trim(), MAX_REVIEW_CHARS);
		let content = self.generate(req.rating, review).await;
		let row = queries::insert_review(&self.db, &NewReview {
			rating: i64::from(req.rating),
			review,
			ai_response: &content.user_response,
			ai_summary: &content.summary,
			ai_recommended_actions: &content.recommended_actions,
		})
		.await?;

		Ok(SubmittedReview {
			id: row.id,
			rating: row.rating,
			review: row.review,
			ai_response: row.ai_response,
			created_at: row.created_at,
		})
	}
}

pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
	match text.char_indices().nth(max_chars) {
		Some((index, _)) => &text[..index],
		None => text,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncates_on_char_boundaries() {
		let text = "ü".repeat(12);

		assert_eq!(truncate_chars(&text, 10).chars().count(), 10);
		assert_eq!(truncate_chars("short", 10), "short");
		assert_eq!(truncate_chars("", 10), "");
	}

	#[test]
	fn submit_request_defaults_review_to_none() {
		let req: SubmitRequest =
			serde_json::from_str(r#"{"rating": 3}"#).expect("Failed to parse request.");

		assert_eq!(req.rating, 3);
		assert!(req.review.is_none());
	}
}
