//! # Section Profiles
//!
//! Each section family owns three pieces of data that must stay consistent:
//!
//! - a vertex builder (fixed local vertex order, see [`builders`])
//! - boundary loops: the vertex indices walked by the property integration,
//!   each loop closed by repeating its first index; a hollow family has a
//!   second, reversed loop for the hole
//! - a side style: flat sides get one quad face each, curved sides are
//!   grouped into a single multi-loop strip face
//!
//! [`FamilyLayout`] keeps them together, keyed by [`SectionType`].

pub mod builders;

use tracing::warn;

use crate::geometry::{Face, FaceList, Point3, LOOP_END};
use crate::parameters::Dimensions;
use crate::section_type::SectionType;

/// Vertex builder: dimensions, station along the member, circle segments
pub type VertexBuilder = fn(&Dimensions, f64, usize) -> Vec<Point3>;

const I_LOOPS: &[&[usize]] = &[&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]];
const RECTANGLE_LOOPS: &[&[usize]] = &[&[0, 1, 2, 3, 0]];
const L_LOOPS: &[&[usize]] = &[&[0, 1, 2, 3, 4, 5, 0]];
const CHANNEL_LOOPS: &[&[usize]] = &[&[0, 1, 2, 3, 4, 5, 6, 7, 0]];
const T_LOOPS: &[&[usize]] = &[&[0, 1, 2, 3, 4, 5, 6, 7, 0]];
const HSS_LOOPS: &[&[usize]] = &[&[0, 1, 2, 3, 0], &[4, 5, 6, 7, 4]];

/// How a family's boundary loops are indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Fixed index tables
    Table(&'static [&'static [usize]]),
    /// `rings` consecutive rings of equal size, sized from the point count
    Rings(usize),
}

/// How lateral faces are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sides {
    /// One quad face per boundary edge
    Flat,
    /// One strip face per loop holding all of its quads
    Curved,
}

/// Per-family geometry data
#[derive(Debug, Clone, Copy)]
pub struct FamilyLayout {
    pub build: VertexBuilder,
    pub boundary: Boundary,
    pub sides: Sides,
}

impl FamilyLayout {
    /// Layout for a section family
    pub fn of(section_type: SectionType) -> Self {
        let (build, boundary, sides): (VertexBuilder, Boundary, Sides) = match section_type {
            SectionType::IShape | SectionType::HShape => (builders::i_shape, Boundary::Table(I_LOOPS), Sides::Flat),
            SectionType::AsymmetricIShape => (builders::asymmetric_i_shape, Boundary::Table(I_LOOPS), Sides::Flat),
            SectionType::Rectangle => (builders::rectangle, Boundary::Table(RECTANGLE_LOOPS), Sides::Flat),
            SectionType::LShape => (builders::l_shape, Boundary::Table(L_LOOPS), Sides::Flat),
            SectionType::Channel => (builders::channel, Boundary::Table(CHANNEL_LOOPS), Sides::Flat),
            SectionType::TShape => (builders::t_shape, Boundary::Table(T_LOOPS), Sides::Flat),
            SectionType::RoundBar => (builders::round_bar, Boundary::Rings(1), Sides::Curved),
            SectionType::Chs => (builders::chs, Boundary::Rings(2), Sides::Curved),
            SectionType::Hss => (builders::hss, Boundary::Table(HSS_LOOPS), Sides::Flat),
        };
        FamilyLayout { build, boundary, sides }
    }

    /// Closed boundary loops for a station block of `point_count` points
    pub fn loops(&self, point_count: usize) -> Vec<Vec<usize>> {
        match self.boundary {
            Boundary::Table(table) => table.iter().map(|l| l.to_vec()).collect(),
            Boundary::Rings(rings) => {
                let per_ring = point_count / rings;
                if point_count % rings != 0 {
                    warn!(point_count, rings, "point count does not split into equal rings, trailing points ignored");
                }
                if per_ring == 0 {
                    return Vec::new();
                }
                (0..rings)
                    .map(|r| {
                        let start = r * per_ring;
                        (start..start + per_ring).chain(std::iter::once(start)).collect()
                    })
                    .collect()
            }
        }
    }

    /// Face list for a two-station extrusion whose blocks hold `block` points
    pub fn faces(&self, block: usize) -> FaceList {
        extrusion_faces(&self.loops(block), block, self.sides)
    }
}

fn idx(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

/// Build lateral and end-cap faces for closed `loops` swept from the block
/// at station 0 to the block at station `length` (offset by `block`).
///
/// Loops are expected counter-clockwise for outer boundaries and clockwise
/// for holes (seen from +x); the resulting faces then all point outward.
pub fn extrusion_faces(loops: &[Vec<usize>], block: usize, sides: Sides) -> FaceList {
    let mut faces: FaceList = Vec::new();

    for lp in loops {
        let quads = lp.windows(2).map(|edge| {
            let (a, b) = (edge[0], edge[1]);
            [idx(a), idx(b), idx(b + block), idx(a + block), LOOP_END]
        });

        match sides {
            Sides::Flat => faces.extend(quads.map(|q| q.to_vec())),
            Sides::Curved => faces.push(quads.flatten().collect()),
        }
    }

    let mut near: Face = Vec::new();
    let mut far: Face = Vec::new();
    for lp in loops {
        // loops repeat their first index; caps list each vertex once
        let open = &lp[..lp.len().saturating_sub(1)];
        near.extend(open.iter().rev().map(|&i| idx(i)));
        near.push(LOOP_END);
        far.extend(open.iter().map(|&i| idx(i + block)));
        far.push(LOOP_END);
    }
    if !loops.is_empty() {
        faces.push(near);
        faces.push(far);
    }

    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::face_loops;

    #[test]
    fn test_tables_match_builders() {
        let dims = Dimensions {
            width: 100.0,
            height: 200.0,
            web_thickness: 6.0,
            flange_thickness: 10.0,
            thickness: 5.0,
            diameter: 80.0,
            top_flange_width: 120.0,
            bottom_flange_width: 150.0,
            top_flange_thickness: 10.0,
            bottom_flange_thickness: 12.0,
        };
        for kind in SectionType::ALL {
            let layout = FamilyLayout::of(kind);
            let pts = (layout.build)(&dims, 0.0, 6);
            let loops = layout.loops(pts.len());
            let mut seen: Vec<usize> = loops.iter().flat_map(|l| l[..l.len() - 1].to_vec()).collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..pts.len()).collect::<Vec<_>>(), "{kind:?}");
            for l in &loops {
                assert_eq!(l.first(), l.last(), "{kind:?} loop must be closed");
            }
        }
    }

    #[test]
    fn test_uneven_ring_count_drops_trailing_points() {
        let loops = FamilyLayout::of(SectionType::Chs).loops(13);
        assert_eq!(loops, vec![vec![0, 1, 2, 3, 4, 5, 0], vec![6, 7, 8, 9, 10, 11, 6]]);

        assert!(FamilyLayout::of(SectionType::Chs).loops(1).is_empty());
    }

    #[test]
    fn test_rectangle_faces() {
        let faces = FamilyLayout::of(SectionType::Rectangle).faces(4);
        assert_eq!(faces.len(), 6);
        assert_eq!(faces[0], vec![0, 1, 5, 4, -1]);
        assert_eq!(faces[3], vec![3, 0, 4, 7, -1]);
        assert_eq!(faces[4], vec![3, 2, 1, 0, -1]);
        assert_eq!(faces[5], vec![4, 5, 6, 7, -1]);
    }

    #[test]
    fn test_round_bar_strip_face() {
        let faces = FamilyLayout::of(SectionType::RoundBar).faces(6);
        assert_eq!(faces.len(), 3);
        assert_eq!(face_loops(&faces[0]).len(), 6);
        assert_eq!(face_loops(&faces[1]), vec![vec![5, 4, 3, 2, 1, 0]]);
    }

    #[test]
    fn test_hollow_caps_have_two_loops() {
        let faces = FamilyLayout::of(SectionType::Chs).faces(12);
        // outer strip, inner strip, two caps
        assert_eq!(faces.len(), 4);
        assert_eq!(face_loops(&faces[2]).len(), 2);
        assert_eq!(face_loops(&faces[3]).len(), 2);

        let faces = FamilyLayout::of(SectionType::Hss).faces(8);
        assert_eq!(faces.len(), 8 + 2);
    }

    #[test]
    fn test_empty_rings() {
        let layout = FamilyLayout::of(SectionType::Chs);
        assert!(layout.loops(0).is_empty());
        assert!(layout.faces(0).is_empty());
    }
}
