//! Polygon moment integration (Green's theorem / shoelace summation).
//!
//! Works on any set of closed boundary loops: outer boundaries
//! counter-clockwise, holes clockwise. Orientation of the whole set is
//! normalised, so a fully clockwise input gives the same result.

use tracing::warn;

use super::{Centroid, SectionProperties};
use crate::geometry::Point3;

#[derive(Debug, Default)]
struct Moments {
    /// 2·A
    twice_area: f64,
    /// 6·∫y dA
    sy: f64,
    /// 6·∫z dA
    sz: f64,
    /// 12·∫y² dA
    syy: f64,
    /// 12·∫z² dA
    szz: f64,
    /// 24·∫yz dA
    syz: f64,
}

impl Moments {
    fn add_edge(&mut self, a: &Point3, b: &Point3) {
        let (yi, zi, yj, zj) = (a.y, a.z, b.y, b.z);
        let cross = yi * zj - yj * zi;

        self.twice_area += cross;
        self.sy += (yi + yj) * cross;
        self.sz += (zi + zj) * cross;
        self.syy += (yi * yi + yi * yj + yj * yj) * cross;
        self.szz += (zi * zi + zi * zj + zj * zj) * cross;
        self.syz += (yi * zj + 2.0 * yi * zi + 2.0 * yj * zj + yj * zi) * cross;
    }
}

/// Properties of the region bounded by `loops` (indices into `points`).
///
/// Each loop must repeat its first index at the end. Returns the all-zero
/// record for a zero signed area, and for loops referring past `points`.
/// Plastic moduli are left at 0.
pub fn polygon_properties(points: &[Point3], loops: &[Vec<usize>]) -> SectionProperties {
    if loops.iter().flatten().any(|&i| i >= points.len()) {
        warn!(
            point_count = points.len(),
            "boundary table refers past the supplied points"
        );
        return SectionProperties::zero();
    }

    let mut m = Moments::default();
    for lp in loops {
        for edge in lp.windows(2) {
            m.add_edge(&points[edge[0]], &points[edge[1]]);
        }
    }

    if m.twice_area == 0.0 {
        return SectionProperties::zero();
    }

    // normalise to counter-clockwise so signed sums keep their meaning
    let sign = m.twice_area.signum();
    let area = sign * m.twice_area / 2.0;
    let cy = sign * m.sy / (6.0 * area);
    let cz = sign * m.sz / (6.0 * area);

    let iyy = sign * m.szz / 12.0 - area * cz * cz;
    let izz = sign * m.syy / 12.0 - area * cy * cy;
    let iyz = sign * m.syz / 24.0 - area * cy * cz;

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut z_min, mut z_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &i in loops.iter().flatten() {
        let p = &points[i];
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
        z_min = z_min.min(p.z);
        z_max = z_max.max(p.z);
    }

    SectionProperties {
        area,
        iy: iyy.abs(),
        iz: izz.abs(),
        iyz,
        centroid: Centroid { y: cy, z: cz },
        wel_y: elastic_modulus(iyy.abs(), z_max - cz, cz - z_min),
        wel_z: elastic_modulus(izz.abs(), y_max - cy, cy - y_min),
        ..SectionProperties::zero()
    }
}

/// min(I/e⁺, I/e⁻), or 0 unless both extreme-fibre distances are positive
fn elastic_modulus(i: f64, above: f64, below: f64) -> f64 {
    if above > 0.0 && below > 0.0 {
        (i / above).min(i / below)
    } else {
        0.0
    }
}
