use ord_subset::OrdSubsetIterExt;

use crate::error::CenterError;
use crate::model::vector3::Vector3;
use crate::model::voxel::VoxelTable;

/// Coordinates of the record with maximum intensity. Ties resolve to the
/// first such record in input order, matching a stable descending sort by
/// intensity. NaN intensities never win.
pub fn find_peak(table: &VoxelTable) -> Result<Vector3, CenterError> {
	let max_intensity = table
		.records()
		.iter()
		.map(|r| r.intensity)
		.ord_subset_max()
		.ok_or(CenterError::EmptyInput)?;

	let peak = table
		.records()
		.iter()
		.find(|r| r.intensity == max_intensity)
		.ok_or(CenterError::EmptyInput)?;

	Ok(peak.position())
}

/// Component-wise arithmetic mean of all record coordinates.
pub fn centroid(table: &VoxelTable) -> Result<Vector3, CenterError> {
	if table.is_empty() {
		return Err(CenterError::EmptyInput);
	}

	let sum = table
		.records()
		.iter()
		.fold(Vector3::empty(), |acc, r| acc + r.position());

	Ok(sum / table.len() as f64)
}

/// Component-wise mean of `coordinate * intensity`. Not normalized by the
/// total intensity; downstream tooling consumes the raw mean of products.
pub fn weighted_centroid(table: &VoxelTable) -> Result<Vector3, CenterError> {
	if table.is_empty() {
		return Err(CenterError::EmptyInput);
	}

	let sum = table
		.records()
		.iter()
		.fold(Vector3::empty(), |acc, r| acc + r.weighted_position());

	Ok(sum / table.len() as f64)
}
