pub mod vector3;
pub mod voxel;
