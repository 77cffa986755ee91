pub mod generate;
pub mod list;
pub mod stats;
pub mod submit;
pub mod time_serde;

mod error;

pub use error::{Error, Result};
pub use generate::GeneratedContent;
pub use list::ListItem;
pub use stats::{RatingCount, StatsSnapshot};
pub use submit::{SubmitRequest, SubmittedReview};

use std::{future::Future, pin::Pin, sync::Arc};

use ovation_config::{Config, GenerationProviderConfig};
use ovation_providers::generation;
use ovation_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Review text is truncated to this many characters before any processing.
pub const MAX_REVIEW_CHARS: usize = 5000;

pub trait GenerationProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a GenerationProviderConfig,
		api_key: &'a str,
		prompt: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub generation: Arc<dyn GenerationProvider>,
}
impl Providers {
	pub fn new(generation: Arc<dyn GenerationProvider>) -> Self {
		Self { generation }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { generation: Arc::new(DefaultProviders) }
	}
}

struct DefaultProviders;

impl GenerationProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a GenerationProviderConfig,
		api_key: &'a str,
		prompt: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(generation::complete(cfg, api_key, prompt))
	}
}

pub struct ReviewService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
}
impl ReviewService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers }
	}
}
