use time::OffsetDateTime;

/// One stored review row. Immutable after insert.
#[derive(Debug, sqlx::FromRow)]
pub struct Review {
	pub id: i64,
	pub rating: i64,
	pub review: String,
	pub ai_response: String,
	pub ai_summary: String,
	pub ai_recommended_actions: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug)]
pub struct NewReview<'a> {
	pub rating: i64,
	pub review: &'a str,
	pub ai_response: &'a str,
	pub ai_summary: &'a str,
	pub ai_recommended_actions: &'a str,
}

#[derive(Debug, sqlx::FromRow)]
pub struct RatingCount {
	pub rating: i64,
	pub count: i64,
}
