//! Mesh primitives shared by the profile generator and the property calculator.
//!
//! ## Axes
//!
//! - `x` runs along the member (extrusion direction)
//! - `y` is the horizontal axis of the cross-section (width direction)
//! - `z` is the vertical axis of the cross-section (height direction)
//!
//! ## Faces
//!
//! A face is a list of point indices. Each boundary loop inside a face is
//! terminated by [`LOOP_END`]; a face may hold several loops (an end cap with
//! a hole, or the quads of a curved strip).

use serde::{Deserialize, Serialize};

/// Sentinel terminating one loop inside a face
pub const LOOP_END: i32 = -1;

/// One face: sentinel-terminated loops of point indices
pub type Face = Vec<i32>;

/// Ordered list of faces
pub type FaceList = Vec<Face>;

/// Point in member coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Shift within the section plane
    pub fn offset_yz(&self, dy: f64, dz: f64) -> Self {
        Self::new(self.x, self.y + dy, self.z + dz)
    }
}

/// Split a face into its loops (sentinels removed).
///
/// Trailing indices without a terminating sentinel form a final loop.
pub fn face_loops(face: &[i32]) -> Vec<Vec<i32>> {
    let mut loops = Vec::new();
    let mut current = Vec::new();
    for &index in face {
        if index == LOOP_END {
            loops.push(std::mem::take(&mut current));
        } else {
            current.push(index);
        }
    }
    if !current.is_empty() {
        loops.push(current);
    }
    loops
}
