//! Torsion constant (`J`, reported as `It`) and warping constant (`Iw`)
//! estimates.
//!
//! Open sections use the thin-walled plate sum J = Σ l·t³/3 and ignore root
//! fillets, so rolled sections come out a little low; library entries carry
//! the published `It`/`Iw` as overrides. Closed sections use the exact
//! circular formulas or Bredt's thin-walled formula.

use std::f64::consts::PI;

use crate::parameters::Dimensions;
use crate::section_type::SectionType;

/// Torsion and warping constants of a section
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorsionConstants {
    pub j: f64,
    pub iw: f64,
}

/// Estimate J and Iw for a family; degenerate dimensions give zeros
pub fn torsion_constants(section_type: SectionType, dims: &Dimensions) -> TorsionConstants {
    let constants = match section_type {
        SectionType::IShape | SectionType::HShape => i_shape(dims),
        SectionType::AsymmetricIShape => asymmetric_i_shape(dims),
        SectionType::Rectangle => TorsionConstants {
            j: rectangle_j(dims.width, dims.height),
            iw: 0.0,
        },
        SectionType::LShape => {
            let t = dims.thickness;
            TorsionConstants {
                j: (dims.width + dims.height - t) * t.powi(3) / 3.0,
                iw: 0.0,
            }
        }
        SectionType::Channel => channel(dims),
        SectionType::TShape => {
            let tf = dims.flange_thickness;
            TorsionConstants {
                j: (dims.width * tf.powi(3) + (dims.height - tf) * dims.web_thickness.powi(3)) / 3.0,
                iw: 0.0,
            }
        }
        SectionType::RoundBar => TorsionConstants {
            j: PI * dims.diameter.powi(4) / 32.0,
            iw: 0.0,
        },
        SectionType::Chs => {
            let di = dims.diameter - 2.0 * dims.thickness;
            if di <= 0.0 || dims.thickness <= 0.0 {
                TorsionConstants::default()
            } else {
                TorsionConstants {
                    j: PI * (dims.diameter.powi(4) - di.powi(4)) / 32.0,
                    iw: 0.0,
                }
            }
        }
        SectionType::Hss => TorsionConstants {
            j: hss_j(dims.width, dims.height, dims.thickness),
            iw: 0.0,
        },
    };

    if constants.j.is_finite() && constants.j > 0.0 && dims_positive(section_type, dims) {
        TorsionConstants {
            j: constants.j,
            iw: if constants.iw.is_finite() { constants.iw.max(0.0) } else { 0.0 },
        }
    } else {
        TorsionConstants::default()
    }
}

fn dims_positive(section_type: SectionType, dims: &Dimensions) -> bool {
    section_type
        .required_parameters()
        .iter()
        .all(|&key| dims.value(key).map(|v| v > 0.0).unwrap_or(false))
}

fn i_shape(dims: &Dimensions) -> TorsionConstants {
    let b = dims.width;
    let h = dims.height;
    let tf = dims.flange_thickness;
    let tw = dims.web_thickness;
    TorsionConstants {
        j: (2.0 * b * tf.powi(3) + (h - 2.0 * tf) * tw.powi(3)) / 3.0,
        iw: tf * b.powi(3) * (h - tf).powi(2) / 24.0,
    }
}

fn asymmetric_i_shape(dims: &Dimensions) -> TorsionConstants {
    let bt = dims.top_flange_width;
    let bb = dims.bottom_flange_width;
    let tft = dims.top_flange_thickness;
    let tfb = dims.bottom_flange_thickness;
    let hw = dims.height - tft - tfb;

    let j = (bt * tft.powi(3) + bb * tfb.powi(3) + hw * dims.web_thickness.powi(3)) / 3.0;

    // flanges as two rigidly connected beams at their centroid distance
    let i_top = tft * bt.powi(3) / 12.0;
    let i_bottom = tfb * bb.powi(3) / 12.0;
    let hs = dims.height - tft / 2.0 - tfb / 2.0;
    let iw = if i_top + i_bottom > 0.0 {
        hs * hs * i_top * i_bottom / (i_top + i_bottom)
    } else {
        0.0
    };

    TorsionConstants { j, iw }
}

fn channel(dims: &Dimensions) -> TorsionConstants {
    let tf = dims.flange_thickness;
    let tw = dims.web_thickness;
    let j = (2.0 * dims.width * tf.powi(3) + (dims.height - 2.0 * tf) * tw.powi(3)) / 3.0;

    // centreline dimensions
    let b = dims.width - tw / 2.0;
    let h = dims.height - tf;
    let denominator = 6.0 * b * tf + h * tw;
    let iw = if denominator > 0.0 {
        tf * b.powi(3) * h * h / 12.0 * (3.0 * b * tf + 2.0 * h * tw) / denominator
    } else {
        0.0
    };

    TorsionConstants { j, iw }
}

/// Solid rectangle: J = a·c³/3·(1 − 0.63·c/a), a ≥ c
pub fn rectangle_j(b: f64, h: f64) -> f64 {
    let (a, c) = if b > h { (b, h) } else { (h, b) };
    if a <= 0.0 || c <= 0.0 {
        return 0.0;
    }
    a * c.powi(3) / 3.0 * (1.0 - 0.63 * c / a)
}

/// Box section, Bredt: J = 4·Am²·t/p on the wall centreline
pub fn hss_j(b: f64, h: f64, t: f64) -> f64 {
    if t <= 0.0 || t >= b.min(h) / 2.0 {
        return 0.0;
    }
    let am = (b - t) * (h - t);
    let p = 2.0 * ((b - t) + (h - t));
    4.0 * am * am * t / p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_bar_polar() {
        let dims = Dimensions {
            diameter: 100.0,
            ..Dimensions::default()
        };
        let tc = torsion_constants(SectionType::RoundBar, &dims);
        assert_relative_eq!(tc.j, PI * 1.0e8 / 32.0);
        assert_eq!(tc.iw, 0.0);
    }

    #[test]
    fn test_ipe_200_close_to_published() {
        // published: It = 6.98 cm⁴, Iw = 12.99e3 cm⁶ (with fillets)
        let dims = Dimensions {
            width: 100.0,
            height: 200.0,
            web_thickness: 5.6,
            flange_thickness: 8.5,
            ..Dimensions::default()
        };
        let tc = torsion_constants(SectionType::IShape, &dims);
        assert_relative_eq!(tc.j, 69_800.0, max_relative = 0.3);
        assert_relative_eq!(tc.iw, 12.99e9, max_relative = 0.05);
    }

    #[test]
    fn test_symmetric_asymmetric_agree() {
        let sym = Dimensions {
            width: 150.0,
            height: 300.0,
            web_thickness: 7.1,
            flange_thickness: 10.7,
            ..Dimensions::default()
        };
        let asym = Dimensions {
            height: 300.0,
            web_thickness: 7.1,
            top_flange_width: 150.0,
            bottom_flange_width: 150.0,
            top_flange_thickness: 10.7,
            bottom_flange_thickness: 10.7,
            ..Dimensions::default()
        };
        let a = torsion_constants(SectionType::IShape, &sym);
        let b = torsion_constants(SectionType::AsymmetricIShape, &asym);
        assert_relative_eq!(a.j, b.j, max_relative = 1e-12);
        assert_relative_eq!(a.iw, b.iw, max_relative = 1e-12);
    }

    #[test]
    fn test_rectangle_and_box() {
        assert_relative_eq!(rectangle_j(100.0, 100.0), 1.0e8 / 3.0 * 0.37, max_relative = 1e-12);
        assert_eq!(rectangle_j(0.0, 100.0), 0.0);
        assert!(hss_j(100.0, 200.0, 10.0) > 0.0);
        assert_eq!(hss_j(100.0, 200.0, 50.0), 0.0);
    }

    #[test]
    fn test_missing_dimensions_give_zero() {
        let dims = Dimensions {
            width: 100.0,
            height: 200.0,
            ..Dimensions::default()
        };
        assert_eq!(torsion_constants(SectionType::Channel, &dims), TorsionConstants::default());
        assert_eq!(torsion_constants(SectionType::Chs, &Dimensions::default()), TorsionConstants::default());
    }
}
