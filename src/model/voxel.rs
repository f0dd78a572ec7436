use serde::Deserialize;

use crate::model::vector3::Vector3;

/// One line of a 3dmaskdump file: spatial coordinates plus the sampled
/// intensity at that voxel.
#[derive(Clone, Debug, Deserialize)]
pub struct VoxelRecord {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub intensity: f64,
}

impl VoxelRecord {
	pub fn position(&self) -> Vector3 {
		Vector3 {
			x: self.x,
			y: self.y,
			z: self.z,
		}
	}

	pub fn weighted_position(&self) -> Vector3 {
		self.position() * self.intensity
	}
}

/// Ordered table of voxel records, one per input line. Read-only after
/// construction.
pub struct VoxelTable {
	records: Vec<VoxelRecord>,
}

impl VoxelTable {
	pub fn new(records: Vec<VoxelRecord>) -> VoxelTable {
		VoxelTable { records }
	}

	pub fn records(&self) -> &[VoxelRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}
