use ovation_storage::queries;

use crate::{Result, ReviewService};

/// One listed review with all five stored text fields.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListItem {
	pub id: i64,
	pub rating: i64,
	pub review: String,
	pub ai_response: String,
	pub ai_summary: String,
	pub ai_recommended_actions: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}

impl ReviewService {
	/// Every stored review, most recent first (`created_at` descending, id
	/// descending as tie-break).
	pub async fn list(&self) -> Result<Vec<ListItem>> {
		let rows = queries::list_reviews(&self.db).await?;
		let items = rows
			.into_iter()
			.map(|row| ListItem {
				id: row.id,
				rating: row.rating,
				review: row.review,
				ai_response: row.ai_response,
				ai_summary: row.ai_summary,
				ai_recommended_actions: row.ai_recommended_actions,
				created_at: row.created_at,
			})
			.collect();

		Ok(items)
	}
}
