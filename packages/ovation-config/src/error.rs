use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unable to read config file {path:?}.")]
	Read { path: PathBuf, source: io::Error },
	#[error("Config file {path:?} is not valid TOML.")]
	Parse { path: PathBuf, source: toml::de::Error },
	#[error("Invalid config: {message}")]
	Validation { message: String },
}
