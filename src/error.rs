use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure classes of the pipeline. None of these are retried; the
/// program exits non-zero without printing any result lines.
#[derive(Debug, Error)]
pub enum CenterError {
	#[error("cannot read input file {path}: {source}")]
	Input {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("malformed dump line: {0}")]
	Parse(#[from] csv::Error),

	#[error("input contains no voxel records")]
	EmptyInput,
}
