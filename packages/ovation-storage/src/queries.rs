use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
	Error, Result,
	db::Db,
	models::{NewReview, RatingCount, Review},
};

/// Fixed-width UTC stamp so lexicographic TEXT ordering matches chronological
/// ordering in the `created_at` index.
const STAMP: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z");

pub async fn insert_review(db: &Db, new: &NewReview<'_>) -> Result<Review> {
	let created_at = OffsetDateTime::now_utc()
		.format(&STAMP)
		.map_err(|err| Error::InvalidTimestamp(err.to_string()))?;
	let row: Review = sqlx::query_as(
		"\
INSERT INTO reviews (rating, review, ai_response, ai_summary, ai_recommended_actions, created_at)
VALUES (?, ?, ?, ?, ?, ?)
RETURNING id, rating, review, ai_response, ai_summary, ai_recommended_actions, created_at",
	)
	.bind(new.rating)
	.bind(new.review)
	.bind(new.ai_response)
	.bind(new.ai_summary)
	.bind(new.ai_recommended_actions)
	.bind(&created_at)
	.fetch_one(&db.pool)
	.await?;

	Ok(row)
}

pub async fn list_reviews(db: &Db) -> Result<Vec<Review>> {
	let rows: Vec<Review> = sqlx::query_as(
		"\
SELECT id, rating, review, ai_response, ai_summary, ai_recommended_actions, created_at
FROM reviews
ORDER BY created_at DESC, id DESC",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn count_reviews(db: &Db) -> Result<i64> {
	let total: i64 =
		sqlx::query_scalar("SELECT COUNT(*) FROM reviews").fetch_one(&db.pool).await?;

	Ok(total)
}

/// Only ratings present in the data appear, ascending by rating.
pub async fn count_by_rating(db: &Db) -> Result<Vec<RatingCount>> {
	let rows: Vec<RatingCount> = sqlx::query_as(
		"\
SELECT rating, COUNT(*) AS count
FROM reviews
GROUP BY rating
ORDER BY rating",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn average_rating(db: &Db) -> Result<Option<f64>> {
	let avg: Option<f64> =
		sqlx::query_scalar("SELECT AVG(rating) FROM reviews").fetch_one(&db.pool).await?;

	Ok(avg)
}
