use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::center;
use crate::dump_reader;
use crate::error::CenterError;
use crate::model::vector3::Vector3;

/// The three derived points, printed in this fixed order.
pub struct Report {
	pub peak: Vector3,
	pub centroid: Vector3,
	pub weighted_centroid: Vector3,
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_line(f, &self.peak)?;
		writeln!(f)?;
		write_line(f, &self.centroid)?;
		writeln!(f)?;
		write_line(f, &self.weighted_centroid)
	}
}

fn write_line(f: &mut fmt::Formatter<'_>, v: &Vector3) -> fmt::Result {
	write!(f, "{:.5} {:.5} {:.5}", v.x, v.y, v.z)
}

/// Loads the dump at `path` and computes all three reductions. Fails before
/// producing any output if the file cannot be read, a line cannot be parsed
/// or the table ends up empty.
pub fn run(path: &Path) -> Result<Report, CenterError> {
	let buf = fs::read(path).map_err(|source| CenterError::Input {
		path: path.to_path_buf(),
		source,
	})?;
	let table = dump_reader::from_dump(&buf)?;
	debug!(
		"loaded {} voxel records from {}",
		table.len(),
		path.display()
	);

	Ok(Report {
		peak: center::find_peak(&table)?,
		centroid: center::centroid(&table)?,
		weighted_centroid: center::weighted_centroid(&table)?,
	})
}

#[cfg(test)]
mod tests {

	use std::io::Write;
	use std::path::Path;

	use crate::error::CenterError;
	use crate::report;

	#[test]
	fn test_run_two_voxels() -> Result<(), Box<dyn std::error::Error>> {
		let report = report::run(Path::new("resources/two_voxels.txt"))?;

		assert_eq!(
			report.to_string(),
			"4.00000 5.00000 6.00000\n\
			 2.50000 3.50000 4.50000\n\
			 45.00000 60.00000 75.00000"
		);

		Ok(())
	}

	#[test]
	fn test_run_single_voxel() -> Result<(), Box<dyn std::error::Error>> {
		let report = report::run(Path::new("resources/single_voxel.txt"))?;

		assert_eq!(
			report.to_string(),
			"2.50000 -1.25000 0.50000\n\
			 2.50000 -1.25000 0.50000\n\
			 7.50000 -3.75000 1.50000"
		);

		Ok(())
	}

	#[test]
	fn test_run_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
		let path = Path::new("resources/two_voxels.txt");
		let first = report::run(path)?.to_string();
		let second = report::run(path)?.to_string();

		assert_eq!(first, second);

		Ok(())
	}

	#[test]
	fn test_run_missing_file() -> Result<(), Box<dyn std::error::Error>> {
		let dir = tempfile::tempdir()?;
		let result = report::run(&dir.path().join("no_such_dump.txt"));

		assert!(matches!(result, Err(CenterError::Input { .. })));

		Ok(())
	}

	#[test]
	fn test_run_empty_file() -> Result<(), Box<dyn std::error::Error>> {
		let mut file = tempfile::NamedTempFile::new()?;
		file.flush()?;

		let result = report::run(file.path());

		assert!(matches!(result, Err(CenterError::EmptyInput)));

		Ok(())
	}

	#[test]
	fn test_run_malformed_line() -> Result<(), Box<dyn std::error::Error>> {
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "1.0 2.0 3.0 10.0")?;
		writeln!(file, "1.0 2.0 not-a-number 10.0")?;
		file.flush()?;

		let result = report::run(file.path());

		assert!(matches!(result, Err(CenterError::Parse(_))));

		Ok(())
	}
}
