mod error;

pub use error::{Error, Result};

use std::{
	env, fs, io,
	path::{Path, PathBuf},
};

use uuid::Uuid;

/// A uniquely named throwaway SQLite database file.
///
/// Each test gets its own file so tests stay independent under parallel
/// execution. Call [`cleanup`](Self::cleanup) at the end of the test; `Drop`
/// removes the files as a fallback when a test fails early.
pub struct TestDatabase {
	path: PathBuf,
	cleaned: bool,
}
impl TestDatabase {
	pub fn new() -> Self {
		let path = env::temp_dir().join(format!("ovation_test_{}.db", Uuid::new_v4().simple()));

		Self { path, cleaned: false }
	}

	pub fn path(&self) -> String {
		self.path.to_string_lossy().into_owned()
	}

	pub fn sqlite(&self, pool_max_conns: u32) -> ovation_config::Sqlite {
		ovation_config::Sqlite { path: self.path(), pool_max_conns }
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		remove_db_files(&self.path)?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestDatabase {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Test database cleanup failed: {err}.");
		}
	}
}

fn remove_db_files(path: &Path) -> Result<()> {
	// SQLite leaves WAL and shared-memory siblings next to the main file.
	for suffix in ["", "-wal", "-shm"] {
		let mut candidate = path.to_path_buf().into_os_string();

		candidate.push(suffix);

		match fs::remove_file(PathBuf::from(candidate)) {
			Ok(()) => {},
			Err(err) if err.kind() == io::ErrorKind::NotFound => {},
			Err(err) => return Err(err.into()),
		}
	}

	Ok(())
}
