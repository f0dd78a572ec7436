use csv::ReaderBuilder;

use crate::error::CenterError;
use crate::model::voxel::{VoxelRecord, VoxelTable};

/// Parses the text output of AFNI's 3dmaskdump: no header, one record per
/// line, four space-separated fields (`x y z intensity`).
pub fn from_dump(buf: &[u8]) -> Result<VoxelTable, CenterError> {
	let mut rdr = ReaderBuilder::new()
		.has_headers(false)
		.delimiter(b' ')
		.from_reader(buf);

	let mut records: Vec<VoxelRecord> = Vec::new();
	for result in rdr.deserialize() {
		let record: VoxelRecord = result?;
		records.push(record);
	}

	Ok(VoxelTable::new(records))
}
