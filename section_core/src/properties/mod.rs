//! # Section Properties
//!
//! Computes the mechanical properties of a cross-section. The calculation
//! runs in layers, each later layer overwriting what the earlier ones set:
//!
//! 1. **Analytical** - round bar, CHS and HSS with parameters go through the
//!    closed forms in [`analytical`].
//! 2. **Polygon** - every other case integrates the family's boundary loops
//!    with [`polygon::polygon_properties`].
//! 3. **Plastic moduli** - [`plastic::plastic_moduli`] whenever parameters
//!    are given.
//! 4. **Torsion / warping** - [`torsion::torsion_constants`] whenever
//!    parameters are given.
//! 5. **Overrides** - authoritative values from the parameters replace the
//!    computed ones verbatim.
//!
//! Nothing here fails: negative, inconsistent or missing dimensions give the all-zero
//! record ([`SectionProperties::zero`]). Check [`SectionProperties::is_degenerate`]
//! before dividing by a modulus.
//!
//! ## Example
//!
//! ```rust
//! use section_core::parameters::SectionParameters;
//! use section_core::properties::calculate_section_properties;
//! use section_core::section_type::SectionType;
//!
//! let params = SectionParameters::new().with("Diameter", 100.0);
//! let props = calculate_section_properties(SectionType::RoundBar, &[], Some(&params));
//! assert!((props.area - 7853.98).abs() < 0.01);
//! ```

pub mod analytical;
pub mod plastic;
pub mod polygon;
pub mod torsion;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::Point3;
use crate::parameters::{Dimensions, Overrides, SectionParameters};
use crate::profiles::FamilyLayout;
use crate::section_type::SectionType;

/// Area centroid, measured from the generation origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Centroid {
    pub y: f64,
    pub z: f64,
}

/// Principal second moments and the angle of the major axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxes {
    /// Major principal moment
    pub i_u: f64,
    /// Minor principal moment
    pub i_v: f64,
    /// Angle from the y axis to the major axis (radians)
    pub angle: f64,
}

/// Mechanical properties of a cross-section
///
/// Second moments and moduli refer to the section's own centroidal y/z
/// axes. `iy` is about the horizontal (y) axis, `iz` about the vertical (z)
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area
    pub area: f64,
    /// Second moment of area about y
    pub iy: f64,
    /// Second moment of area about z
    pub iz: f64,
    /// Product of inertia (signed)
    pub iyz: f64,
    pub centroid: Centroid,
    /// Elastic section modulus about y
    pub wel_y: f64,
    /// Elastic section modulus about z
    pub wel_z: f64,
    /// Plastic section modulus about y
    pub wpl_y: f64,
    /// Plastic section modulus about z
    pub wpl_z: f64,
    /// St Venant torsion constant (`It`)
    pub j: f64,
    /// Warping constant
    pub iw: f64,
}

impl SectionProperties {
    /// The all-zero record returned for degenerate geometry
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check whether the section has no area (every modulus is meaningless)
    pub fn is_degenerate(&self) -> bool {
        self.area == 0.0
    }

    /// Radius of gyration about y
    pub fn ry(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (self.iy / self.area).sqrt()
        }
    }

    /// Radius of gyration about z
    pub fn rz(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (self.iz / self.area).sqrt()
        }
    }

    /// Polar moment of area about the centroid
    pub fn polar_moment(&self) -> f64 {
        self.iy + self.iz
    }

    /// Principal axes from Mohr's circle
    pub fn principal_axes(&self) -> PrincipalAxes {
        let mean = (self.iy + self.iz) / 2.0;
        let half_diff = (self.iy - self.iz) / 2.0;
        let radius = half_diff.hypot(self.iyz);
        PrincipalAxes {
            i_u: mean + radius,
            i_v: mean - radius,
            angle: 0.5 * (-2.0 * self.iyz).atan2(self.iy - self.iz),
        }
    }

    /// Replace computed values with the present overrides
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        let slots: [(Option<f64>, &mut f64); 9] = [
            (overrides.area, &mut self.area),
            (overrides.iy, &mut self.iy),
            (overrides.iz, &mut self.iz),
            (overrides.iw, &mut self.iw),
            (overrides.it, &mut self.j),
            (overrides.wel_y, &mut self.wel_y),
            (overrides.wel_z, &mut self.wel_z),
            (overrides.wpl_y, &mut self.wpl_y),
            (overrides.wpl_z, &mut self.wpl_z),
        ];
        for (value, slot) in slots {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

/// Compute the properties of one cross-section.
///
/// `points` is a single station of the family's generated vertices (the
/// order documented in [`crate::profiles::builders`]). `params` enables the
/// analytical path for round/tubular/box families, the plastic and torsion
/// layers, and overrides.
pub fn calculate_section_properties(
    section_type: SectionType,
    points: &[Point3],
    params: Option<&SectionParameters>,
) -> SectionProperties {
    let dims = params.map(SectionParameters::dimensions);

    // a negative dimension mirrors the outline, which the polygon path would
    // otherwise integrate as a valid section
    if let (Some(params), Some(dims)) = (params, dims.as_ref()) {
        if has_negative_dimension(section_type, dims) {
            debug!(?section_type, "negative dimension, degenerate section");
            let mut props = SectionProperties::zero();
            props.apply_overrides(&params.overrides());
            return props;
        }
    }

    let analytical = match (section_type.is_analytical(), dims.as_ref()) {
        (true, Some(dims)) => analytical::properties(section_type, dims),
        _ => None,
    };

    let mut props = match analytical {
        Some(props) => {
            debug!(?section_type, "analytical section properties");
            props
        }
        None => {
            debug!(?section_type, points = points.len(), "polygon section properties");
            let layout = FamilyLayout::of(section_type);
            polygon::polygon_properties(points, &layout.loops(points.len()))
        }
    };

    if let (Some(params), Some(dims)) = (params, dims.as_ref()) {
        let (wpl_y, wpl_z) = plastic::plastic_moduli(section_type, dims);
        props.wpl_y = wpl_y;
        props.wpl_z = wpl_z;

        let torsion = torsion::torsion_constants(section_type, dims);
        props.j = torsion.j;
        props.iw = torsion.iw;

        props.apply_overrides(&params.overrides());
    }

    props
}

fn has_negative_dimension(section_type: SectionType, dims: &Dimensions) -> bool {
    section_type
        .required_parameters()
        .iter()
        .any(|&key| dims.value(key).map(|v| v < 0.0).unwrap_or(false))
}
