mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, GenerationProviderConfig, Provider, Service, Sqlite, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.path.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.sqlite.path must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.sqlite.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.provider.generation.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "provider.generation.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.provider.generation.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "provider.generation.model must be non-empty.".to_string(),
		});
	}
	if cfg.provider.generation.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "provider.generation.timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	// An empty key in the config file means the same as no key at all.
	if cfg.provider.generation.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
		cfg.provider.generation.api_key = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"
[service]
http_bind = "127.0.0.1:8000"
log_level = "info"

[storage.sqlite]
path = "ovation.db"
pool_max_conns = 4

[provider.generation]
api_base = "https://openrouter.ai"
api_key = ""
path = "/api/v1/chat/completions"
model = "openai/gpt-3.5-turbo"
timeout_ms = 30000
"#;

	#[test]
	fn parses_sample_and_normalizes_empty_api_key() {
		let mut cfg: Config = toml::from_str(SAMPLE).expect("Failed to parse sample config.");

		normalize(&mut cfg);
		validate(&cfg).expect("Sample config must validate.");

		assert_eq!(cfg.service.http_bind, "127.0.0.1:8000");
		assert_eq!(cfg.storage.sqlite.pool_max_conns, 4);
		assert!(cfg.provider.generation.api_key.is_none());
	}

	#[test]
	fn rejects_zero_timeout() {
		let mut cfg: Config = toml::from_str(SAMPLE).expect("Failed to parse sample config.");

		cfg.provider.generation.timeout_ms = 0;

		assert!(validate(&cfg).is_err());
	}

	#[test]
	fn missing_file_is_a_read_error() {
		let result = load(std::path::Path::new("/nonexistent/ovation.toml"));

		assert!(matches!(result, Err(Error::Read { .. })));
	}

	#[test]
	fn invalid_toml_is_a_parse_error() {
		let path = std::env::temp_dir().join("ovation_config_parse_test.toml");

		std::fs::write(&path, "[service").expect("Failed to write temp config.");

		let result = load(&path);
		let _ = std::fs::remove_file(&path);

		assert!(matches!(result, Err(Error::Parse { .. })));
	}

	#[test]
	fn rejects_empty_sqlite_path() {
		let mut cfg: Config = toml::from_str(SAMPLE).expect("Failed to parse sample config.");

		cfg.storage.sqlite.path = " ".to_string();

		assert!(validate(&cfg).is_err());
	}
}
