//! # Closed-Form Section Properties
//!
//! Exact formulas for the families whose true boundary is not a polygon
//! (round bar, CHS) or whose hollow is easier handled in closed form (HSS).
//! The generated meshes of these families are only polygonal
//! approximations; the properties reported are those of the true shape.
//!
//! ## Notation
//!
//! - `d` = Outside diameter, `dᵢ = d − 2t` = inside diameter
//! - `b` = Width (along y), `h` = Height (along z)
//! - `t` = Wall thickness
//! - `I` = Second moment of area, `Wel` = Elastic modulus,
//!   `Wpl` = Plastic modulus
//!
//! All three families are doubly symmetric and generated centred, so the
//! centroid is the origin and the product of inertia is zero.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - EN 10210-2: Hot finished structural hollow sections - dimensions and
//!   sectional properties

use std::f64::consts::PI;

use super::SectionProperties;
use crate::parameters::Dimensions;
use crate::section_type::SectionType;

/// Closed-form properties for the analytical families.
///
/// Returns `None` for families that go through polygon integration.
pub fn properties(section_type: SectionType, dims: &Dimensions) -> Option<SectionProperties> {
    match section_type {
        SectionType::RoundBar => Some(round_bar(dims.diameter)),
        SectionType::Chs => Some(chs(dims.diameter, dims.thickness)),
        SectionType::Hss => Some(hss(dims.width, dims.height, dims.thickness)),
        _ => None,
    }
}

// =============================================================================
// ROUND BAR
// =============================================================================

/// Solid circular section
///
/// ```text
///       ╭───╮
///      │  ●  │  d
///       ╰───╯
/// ```
///
/// # Formulas
/// - A = πr²
/// - Iy = Iz = πd⁴/64
/// - Wel = I/r
/// - Wpl = d³/6
///
/// A non-positive diameter yields the all-zero record.
///
/// # Example
/// ```rust
/// use section_core::properties::analytical::round_bar;
///
/// let props = round_bar(100.0);
/// assert!((props.area - 7853.98).abs() < 0.01);
/// assert!((props.wpl_y - 166_666.67).abs() < 0.01);
/// ```
pub fn round_bar(d: f64) -> SectionProperties {
    if d <= 0.0 {
        return SectionProperties::zero();
    }
    let r = d / 2.0;
    let i = PI * d.powi(4) / 64.0;
    let wel = i / r;
    let wpl = round_bar_plastic_modulus(d);

    SectionProperties {
        area: PI * r * r,
        iy: i,
        iz: i,
        wel_y: wel,
        wel_z: wel,
        wpl_y: wpl,
        wpl_z: wpl,
        ..SectionProperties::zero()
    }
}

/// Wpl = d³/6, or 0 for a non-positive diameter
#[inline]
pub fn round_bar_plastic_modulus(d: f64) -> f64 {
    if d <= 0.0 {
        0.0
    } else {
        d.powi(3) / 6.0
    }
}

// =============================================================================
// CIRCULAR HOLLOW SECTION
// =============================================================================

/// Circular hollow section (tube)
///
/// # Formulas
/// - dᵢ = d − 2t
/// - A = π(r² − rᵢ²)
/// - Iy = Iz = π(d⁴ − dᵢ⁴)/64
/// - Wel = I/r
/// - Wpl = (d³ − dᵢ³)/6
///
/// When the wall consumes the whole diameter (dᵢ ≤ 0), or the wall
/// thickness is not positive, the all-zero record is returned.
pub fn chs(d: f64, t: f64) -> SectionProperties {
    let di = d - 2.0 * t;
    if di <= 0.0 || t <= 0.0 {
        return SectionProperties::zero();
    }
    let r = d / 2.0;
    let ri = di / 2.0;
    let i = PI * (d.powi(4) - di.powi(4)) / 64.0;
    let wel = i / r;
    let wpl = chs_plastic_modulus(d, t);

    SectionProperties {
        area: PI * (r * r - ri * ri),
        iy: i,
        iz: i,
        wel_y: wel,
        wel_z: wel,
        wpl_y: wpl,
        wpl_z: wpl,
        ..SectionProperties::zero()
    }
}

/// Wpl = (d³ − dᵢ³)/6, with the same degeneracy guard as [`chs`]
#[inline]
pub fn chs_plastic_modulus(d: f64, t: f64) -> f64 {
    let di = d - 2.0 * t;
    if di <= 0.0 || t <= 0.0 {
        0.0
    } else {
        (d.powi(3) - di.powi(3)) / 6.0
    }
}

// =============================================================================
// RECTANGULAR HOLLOW SECTION
// =============================================================================

fn hss_is_hollow(b: f64, h: f64, t: f64) -> bool {
    t > 0.0 && t < b.min(h) / 2.0
}

/// Rectangular hollow section (box), sharp corners
///
/// ```text
///     ┌─────────────┐
///     │ ┌─────────┐ │
///   h │ │         │ │
///     │ └─────────┘ │
///     └─────────────┘
///            b        t = wall
/// ```
///
/// # Formulas
/// - bᵢ = b − 2t, hᵢ = h − 2t
/// - A = bh − bᵢhᵢ
/// - Iy = (bh³ − bᵢhᵢ³)/12, Iz = (hb³ − hᵢbᵢ³)/12
/// - Wel_y = Iy/(h/2), Wel_z = Iz/(b/2)
/// - Wpl_y = (bh² − bᵢhᵢ²)/4, Wpl_z = (hb² − hᵢbᵢ²)/4
///
/// `t ≤ 0` or `t ≥ min(b, h)/2` returns the all-zero record.
///
/// # Example
/// ```rust
/// use section_core::properties::analytical::hss;
///
/// let props = hss(100.0, 200.0, 10.0);
/// assert!((props.area - 5600.0).abs() < 1e-9);
/// assert_eq!(hss(100.0, 200.0, 50.0).area, 0.0);
/// ```
pub fn hss(b: f64, h: f64, t: f64) -> SectionProperties {
    if !hss_is_hollow(b, h, t) {
        return SectionProperties::zero();
    }
    let bi = b - 2.0 * t;
    let hi = h - 2.0 * t;
    let iy = (b * h.powi(3) - bi * hi.powi(3)) / 12.0;
    let iz = (h * b.powi(3) - hi * bi.powi(3)) / 12.0;
    let (wpl_y, wpl_z) = hss_plastic_moduli(b, h, t);

    SectionProperties {
        area: b * h - bi * hi,
        iy,
        iz,
        wel_y: iy / (h / 2.0),
        wel_z: iz / (b / 2.0),
        wpl_y,
        wpl_z,
        ..SectionProperties::zero()
    }
}

/// (Wpl_y, Wpl_z) for a box, with the same degeneracy guard as [`hss`]
pub fn hss_plastic_moduli(b: f64, h: f64, t: f64) -> (f64, f64) {
    if !hss_is_hollow(b, h, t) {
        return (0.0, 0.0);
    }
    let bi = b - 2.0 * t;
    let hi = h - 2.0 * t;
    (
        (b * h * h - bi * hi * hi) / 4.0,
        (h * b * b - hi * bi * bi) / 4.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_bar_known_values() {
        let props = round_bar(100.0);
        assert_relative_eq!(props.area, PI * 2500.0, max_relative = 1e-12);
        assert_relative_eq!(props.iy, 4_908_738.52, max_relative = 1e-9);
        assert_relative_eq!(props.iz, props.iy);
        assert_relative_eq!(props.wel_y, props.iy / 50.0);
        assert_relative_eq!(props.wpl_y, 166_666.666_666, max_relative = 1e-9);
        assert_eq!(props.centroid.y, 0.0);
        assert_eq!(props.iyz, 0.0);
    }

    #[test]
    fn test_chs_matches_solid_difference() {
        let outer = round_bar(168.3);
        let inner = round_bar(168.3 - 10.0);
        let tube = chs(168.3, 5.0);
        assert_relative_eq!(tube.area, outer.area - inner.area, max_relative = 1e-12);
        assert_relative_eq!(tube.iy, outer.iy - inner.iy, max_relative = 1e-12);
        assert_relative_eq!(tube.wpl_z, outer.wpl_z - inner.wpl_z, max_relative = 1e-12);
        // shape factor of a thin tube is close to 4/π
        assert!(tube.wpl_y / tube.wel_y > 1.25 && tube.wpl_y / tube.wel_y < 1.35);
    }

    #[test]
    fn test_chs_degenerate() {
        assert!(chs(100.0, 50.0).is_degenerate());
        assert!(chs(100.0, 60.0).is_degenerate());
        assert!(chs(100.0, 0.0).is_degenerate());
        assert_eq!(chs_plastic_modulus(100.0, 50.0), 0.0);
    }

    #[test]
    fn test_hss_values() {
        let props = hss(100.0, 200.0, 10.0);
        // Iy = (100·200³ − 80·180³)/12
        assert_relative_eq!(props.iy, (100.0 * 8.0e6 - 80.0 * 5.832e6) / 12.0, max_relative = 1e-12);
        assert_relative_eq!(props.wel_y, props.iy / 100.0);
        assert_relative_eq!(props.wel_z, props.iz / 50.0);
        assert_relative_eq!(props.wpl_y, (100.0 * 40_000.0 - 80.0 * 32_400.0) / 4.0);
    }

    #[test]
    fn test_hss_degenerate() {
        assert!(hss(100.0, 200.0, 50.0).is_degenerate());
        assert!(hss(100.0, 200.0, 0.0).is_degenerate());
        assert!(hss(100.0, 200.0, -1.0).is_degenerate());
        assert_eq!(hss_plastic_moduli(100.0, 200.0, 50.0), (0.0, 0.0));
    }

    #[test]
    fn test_dispatch() {
        let dims = Dimensions {
            diameter: 50.0,
            ..Dimensions::default()
        };
        assert!(properties(SectionType::RoundBar, &dims).is_some());
        assert!(properties(SectionType::IShape, &dims).is_none());
    }
}
