use ovation_storage::queries;

use crate::{Result, ReviewService};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RatingCount {
	pub rating: i64,
	pub count: i64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StatsSnapshot {
	pub total: i64,
	pub by_rating: Vec<RatingCount>,
	pub average_rating: f64,
}

impl ReviewService {
	pub async fn stats(&self) -> Result<StatsSnapshot> {
		let total = queries::count_reviews(&self.db).await?;
		let by_rating = queries::count_by_rating(&self.db)
			.await?
			.into_iter()
			.map(|entry| RatingCount { rating: entry.rating, count: entry.count })
			.collect();
		let average_rating =
			queries::average_rating(&self.db).await?.map(round_one_decimal).unwrap_or(0.0);

		Ok(StatsSnapshot { total, by_rating, average_rating })
	}
}

// Ties go to the even tenth, so an average of exactly 4.25 reports as 4.2.
fn round_one_decimal(value: f64) -> f64 {
	(value * 10.0).round_ties_even() / 10.0
}
