//! # Plastic Section Moduli
//!
//! The plastic modulus is the first moment of area of both halves of the
//! section about the plastic neutral axis (PNA), the axis that splits the
//! area in two equal parts.
//!
//! - Doubly-symmetric families use the textbook closed forms.
//! - Asymmetric I, angle, tee and channel are decomposed into
//!   non-overlapping axis-aligned rectangles (the same layout the vertex
//!   builders produce) and the PNA is located exactly on that
//!   decomposition. The moduli are about the geometric y/z axes, not the
//!   principal axes.
//!
//! Degenerate dimensions give 0.

use super::analytical;
use crate::parameters::Dimensions;
use crate::section_type::SectionType;

/// Axis-aligned rectangle `[y0, y1] × [z0, z1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub y0: f64,
    pub y1: f64,
    pub z0: f64,
    pub z1: f64,
}

impl Rect {
    pub fn new(y0: f64, y1: f64, z0: f64, z1: f64) -> Self {
        Self { y0, y1, z0, z1 }
    }

    fn is_solid(&self) -> bool {
        self.y1 > self.y0 && self.z1 > self.z0
    }
}

/// Strip of a rectangle projected on one axis: `[lo, hi]` with `width`
/// measured along the other axis
#[derive(Debug, Clone, Copy)]
struct Strip {
    lo: f64,
    hi: f64,
    width: f64,
}

/// (Wpl_y, Wpl_z) for a section family
pub fn plastic_moduli(section_type: SectionType, dims: &Dimensions) -> (f64, f64) {
    match section_type {
        SectionType::IShape | SectionType::HShape => i_shape(dims),
        SectionType::Rectangle => rectangle(dims.width, dims.height),
        SectionType::RoundBar => {
            let w = analytical::round_bar_plastic_modulus(dims.diameter);
            (w, w)
        }
        SectionType::Chs => {
            let w = analytical::chs_plastic_modulus(dims.diameter, dims.thickness);
            (w, w)
        }
        SectionType::Hss => analytical::hss_plastic_moduli(dims.width, dims.height, dims.thickness),
        SectionType::AsymmetricIShape | SectionType::LShape | SectionType::Channel | SectionType::TShape => {
            let rects = decompose(section_type, dims);
            (plastic_modulus_y(&rects), plastic_modulus_z(&rects))
        }
    }
}

/// Doubly-symmetric I/H section
///
/// # Formulas
/// - Wpl_y = tw(h − 2tf)²/4 + b·tf·(h − tf)
/// - Wpl_z = 2·tf·b²/4 + (h − 2tf)·tw²/4
pub fn i_shape(dims: &Dimensions) -> (f64, f64) {
    let b = dims.width;
    let h = dims.height;
    let tw = dims.web_thickness;
    let tf = dims.flange_thickness;
    if b <= 0.0 || h <= 0.0 || tw < 0.0 || tf < 0.0 || 2.0 * tf > h {
        return (0.0, 0.0);
    }
    let hw = h - 2.0 * tf;
    let wpl_y = tw * hw * hw / 4.0 + b * tf * (h - tf);
    let wpl_z = 2.0 * tf * b * b / 4.0 + hw * tw * tw / 4.0;
    (wpl_y, wpl_z)
}

/// Solid rectangle: Wpl_y = bh²/4, Wpl_z = hb²/4
pub fn rectangle(b: f64, h: f64) -> (f64, f64) {
    if b <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    (b * h * h / 4.0, h * b * b / 4.0)
}

/// Rectangle decomposition of a polygon family in builder coordinates.
///
/// Families without a decomposition return an empty list.
pub fn decompose(section_type: SectionType, dims: &Dimensions) -> Vec<Rect> {
    let h = dims.height;
    let rects = match section_type {
        SectionType::IShape | SectionType::HShape => {
            let b = dims.width;
            let tf = dims.flange_thickness;
            let c = b / 2.0;
            let hw = dims.web_thickness / 2.0;
            vec![
                Rect::new(0.0, b, 0.0, tf),
                Rect::new(c - hw, c + hw, tf, h - tf),
                Rect::new(0.0, b, h - tf, h),
            ]
        }
        SectionType::AsymmetricIShape => {
            let c = dims.top_flange_width.max(dims.bottom_flange_width) / 2.0;
            let hb = dims.bottom_flange_width / 2.0;
            let ht = dims.top_flange_width / 2.0;
            let hw = dims.web_thickness / 2.0;
            let tfb = dims.bottom_flange_thickness;
            let tft = dims.top_flange_thickness;
            vec![
                Rect::new(c - hb, c + hb, 0.0, tfb),
                Rect::new(c - hw, c + hw, tfb, h - tft),
                Rect::new(c - ht, c + ht, h - tft, h),
            ]
        }
        SectionType::Rectangle => vec![Rect::new(0.0, dims.width, 0.0, h)],
        SectionType::LShape => {
            let t = dims.thickness;
            vec![Rect::new(0.0, dims.width, 0.0, t), Rect::new(0.0, t, t, h)]
        }
        SectionType::Channel => {
            let b = dims.width;
            let tf = dims.flange_thickness;
            vec![
                Rect::new(0.0, b, 0.0, tf),
                Rect::new(0.0, dims.web_thickness, tf, h - tf),
                Rect::new(0.0, b, h - tf, h),
            ]
        }
        SectionType::TShape => {
            let b = dims.width;
            let tf = dims.flange_thickness;
            let c = b / 2.0;
            let hw = dims.web_thickness / 2.0;
            vec![Rect::new(0.0, b, h - tf, h), Rect::new(c - hw, c + hw, 0.0, h - tf)]
        }
        SectionType::RoundBar | SectionType::Chs | SectionType::Hss => Vec::new(),
    };
    rects.into_iter().filter(Rect::is_solid).collect()
}

/// Plastic modulus about a horizontal axis (bending about y)
pub fn plastic_modulus_y(rects: &[Rect]) -> f64 {
    let strips: Vec<Strip> = rects
        .iter()
        .map(|r| Strip {
            lo: r.z0,
            hi: r.z1,
            width: r.y1 - r.y0,
        })
        .collect();
    plastic_modulus(&strips)
}

/// Plastic modulus about a vertical axis (bending about z)
pub fn plastic_modulus_z(rects: &[Rect]) -> f64 {
    let strips: Vec<Strip> = rects
        .iter()
        .map(|r| Strip {
            lo: r.y0,
            hi: r.y1,
            width: r.z1 - r.z0,
        })
        .collect();
    plastic_modulus(&strips)
}

fn plastic_modulus(strips: &[Strip]) -> f64 {
    let total: f64 = strips.iter().map(|s| s.width * (s.hi - s.lo)).sum();
    if total <= 0.0 {
        return 0.0;
    }
    let pna = plastic_neutral_axis(strips, total / 2.0);
    strips.iter().map(|s| s.width * abs_first_moment(s.lo, s.hi, pna)).sum()
}

/// Coordinate below which the strips hold `half` of their area
fn plastic_neutral_axis(strips: &[Strip], half: f64) -> f64 {
    let mut breaks: Vec<f64> = strips.iter().flat_map(|s| [s.lo, s.hi]).collect();
    breaks.sort_by(f64::total_cmp);
    breaks.dedup();

    let mut below = 0.0;
    for pair in breaks.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let density: f64 = strips
            .iter()
            .filter(|s| s.lo <= a && s.hi >= b)
            .map(|s| s.width)
            .sum();
        let slab = density * (b - a);
        if density > 0.0 && below + slab >= half {
            return a + (half - below) / density;
        }
        below += slab;
    }
    breaks.last().copied().unwrap_or(0.0)
}

/// ∫ |s − p| ds over `[lo, hi]`
fn abs_first_moment(lo: f64, hi: f64, p: f64) -> f64 {
    if p <= lo {
        ((hi - p).powi(2) - (lo - p).powi(2)) / 2.0
    } else if p >= hi {
        ((p - lo).powi(2) - (p - hi).powi(2)) / 2.0
    } else {
        ((p - lo).powi(2) + (hi - p).powi(2)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn channel_dims() -> Dimensions {
        // UPN 200 without root fillets
        Dimensions {
            width: 75.0,
            height: 200.0,
            web_thickness: 8.5,
            flange_thickness: 11.5,
            ..Dimensions::default()
        }
    }

    #[test]
    fn test_rectangle_decomposition_matches_closed_form() {
        let rects = vec![Rect::new(0.0, 100.0, 0.0, 200.0)];
        let (wy, wz) = rectangle(100.0, 200.0);
        assert_relative_eq!(plastic_modulus_y(&rects), wy, max_relative = 1e-12);
        assert_relative_eq!(plastic_modulus_z(&rects), wz, max_relative = 1e-12);
    }

    #[test]
    fn test_i_shape_decomposition_matches_closed_form() {
        let dims = Dimensions {
            width: 100.0,
            height: 200.0,
            web_thickness: 5.6,
            flange_thickness: 8.5,
            ..Dimensions::default()
        };
        let rects = decompose(SectionType::IShape, &dims);
        let (wy, wz) = i_shape(&dims);
        assert_relative_eq!(plastic_modulus_y(&rects), wy, max_relative = 1e-12);
        assert_relative_eq!(plastic_modulus_z(&rects), wz, max_relative = 1e-12);
    }

    #[test]
    fn test_channel_strong_axis() {
        let d = channel_dims();
        let (wy, _) = plastic_moduli(SectionType::Channel, &d);
        let hw = d.height - 2.0 * d.flange_thickness;
        let expected = d.width * d.flange_thickness * (d.height - d.flange_thickness)
            + d.web_thickness * hw * hw / 4.0;
        assert_relative_eq!(wy, expected, max_relative = 1e-12);
        // published UPN 200 value with fillets is 228 cm³
        assert_relative_eq!(wy, 228_000.0, max_relative = 0.02);
    }

    #[test]
    fn test_channel_weak_axis_hand_calculation() {
        let d = channel_dims();
        let (_, wz) = plastic_moduli(SectionType::Channel, &d);

        let (b, h, tw, tf) = (d.width, d.height, d.web_thickness, d.flange_thickness);
        let area = 2.0 * b * tf + (h - 2.0 * tf) * tw;
        // the web alone holds more than half the area: PNA lies inside it
        let p = area / 2.0 / h;
        assert!(p < tw);
        let expected = h * p * p / 2.0
            + h * (tw - p).powi(2) / 2.0
            + 2.0 * tf * ((b - p).powi(2) - (tw - p).powi(2)) / 2.0;
        assert_relative_eq!(wz, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_tee_pna_in_flange() {
        // wide thick flange, slender stem: PNA sits in the flange
        let d = Dimensions {
            width: 200.0,
            height: 150.0,
            web_thickness: 10.0,
            flange_thickness: 20.0,
            ..Dimensions::default()
        };
        let (wy, _) = plastic_moduli(SectionType::TShape, &d);
        let area = 200.0 * 20.0 + 130.0 * 10.0;
        // PNA measured down from the top face
        let a = area / 2.0 / 200.0;
        let expected = 200.0 * a * a / 2.0 + 200.0 * (20.0_f64 - a).powi(2) / 2.0 + 10.0 * 130.0 * (20.0 - a + 65.0);
        assert_relative_eq!(wy, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_asymmetric_flange_swap_invariance() {
        let d = Dimensions {
            height: 400.0,
            web_thickness: 10.0,
            top_flange_width: 150.0,
            top_flange_thickness: 12.0,
            bottom_flange_width: 250.0,
            bottom_flange_thickness: 20.0,
            ..Dimensions::default()
        };
        let swapped = Dimensions {
            top_flange_width: d.bottom_flange_width,
            top_flange_thickness: d.bottom_flange_thickness,
            bottom_flange_width: d.top_flange_width,
            bottom_flange_thickness: d.top_flange_thickness,
            ..d
        };
        let (wy, wz) = plastic_moduli(SectionType::AsymmetricIShape, &d);
        let (wy2, wz2) = plastic_moduli(SectionType::AsymmetricIShape, &swapped);
        assert_relative_eq!(wz, wz2, max_relative = 1e-12);
        assert_relative_eq!(wy, wy2, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(rectangle(0.0, 100.0), (0.0, 0.0));
        assert_eq!(plastic_moduli(SectionType::LShape, &Dimensions::default()), (0.0, 0.0));
        assert_eq!(i_shape(&Dimensions::default()), (0.0, 0.0));
        assert!(decompose(SectionType::Hss, &channel_dims()).is_empty());
    }

    #[test]
    fn test_abs_first_moment() {
        assert_relative_eq!(abs_first_moment(0.0, 10.0, 5.0), 25.0);
        assert_relative_eq!(abs_first_moment(0.0, 10.0, 0.0), 50.0);
        assert_relative_eq!(abs_first_moment(0.0, 10.0, 20.0), 150.0);
    }
}
