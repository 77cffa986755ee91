pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<ovation_storage::Error> for Error {
	fn from(err: ovation_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}
