use std::io::Error as IoError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("{0}")]
	Graph(#[from] graphproc::Error),
	#[error("failed to create output directory {}: {source}", .path.display())]
	OutDirError { path: PathBuf, source: IoError },
	#[error("{0}")]
	Write(#[from] npyout::Error),
}
