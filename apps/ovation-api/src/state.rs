use std::sync::Arc;

use ovation_service::ReviewService;
use ovation_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ReviewService>,
}
impl AppState {
	pub async fn new(config: ovation_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.sqlite).await?;

		db.ensure_schema().await?;

		let service = ReviewService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
