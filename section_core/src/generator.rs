//! # Profile Generator
//!
//! Builds the two-station point cloud and face list of an extruded member,
//! computes the section properties from the first station, and moves the
//! points so the area centroid sits on the member axis.
//!
//! ## Example
//!
//! ```rust
//! use section_core::generator::get_section_points;
//! use section_core::parameters::SectionParameters;
//!
//! let params = SectionParameters::new()
//!     .with("Width", 100.0)
//!     .with("Height", 200.0);
//!
//! let geometry = get_section_points("Rectangle", 3000.0, &params);
//! assert_eq!(geometry.points.len(), 8);
//! assert_eq!(geometry.faces.len(), 6);
//! assert!((geometry.properties.area - 20_000.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::{FaceList, Point3};
use crate::parameters::SectionParameters;
use crate::profiles::FamilyLayout;
use crate::properties::{calculate_section_properties, SectionProperties};
use crate::section_type::SectionType;

/// Default number of segments approximating a circle
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 6;

/// Fewest segments that still close a polygon
pub const MIN_CIRCLE_SEGMENTS: usize = 3;

/// Generator configuration, passed explicitly for each call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Segments approximating round bar and CHS outlines
    pub circle_segments: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

impl GeneratorOptions {
    /// Builder: set the circle segment count
    pub fn with_circle_segments(mut self, segments: usize) -> Self {
        self.circle_segments = segments;
        self
    }

    /// Segment count actually used (clamped to a closed polygon)
    pub fn segments(&self) -> usize {
        self.circle_segments.max(MIN_CIRCLE_SEGMENTS)
    }
}

/// Generated member geometry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Resolved section family, `None` when the type was not recognised
    pub section_type: Option<SectionType>,
    /// Station-0 block followed by the station-`length` block
    pub points: Vec<Point3>,
    pub faces: FaceList,
    pub properties: SectionProperties,
}

impl SectionGeometry {
    /// Number of points in one station block
    pub fn block_size(&self) -> usize {
        self.points.len() / 2
    }

    /// Cross-section at station 0
    pub fn near_section(&self) -> &[Point3] {
        &self.points[..self.block_size()]
    }

    /// Cross-section at station `length`
    pub fn far_section(&self) -> &[Point3] {
        &self.points[self.block_size()..]
    }
}

/// Profile generator bound to one set of options
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGenerator {
    options: GeneratorOptions,
}

impl ProfileGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate geometry and properties for a resolved section type
    pub fn generate(&self, section_type: SectionType, length: f64, params: &SectionParameters) -> SectionGeometry {
        let layout = FamilyLayout::of(section_type);
        let dims = params.dimensions();
        let segments = self.options.segments();

        let mut points = (layout.build)(&dims, 0.0, segments);
        let block = points.len();
        points.extend((layout.build)(&dims, length, segments));

        let faces = layout.faces(block);
        let properties = calculate_section_properties(section_type, &points[..block], Some(params));

        if !section_type.is_centered() {
            let (cy, cz) = (properties.centroid.y, properties.centroid.z);
            for p in &mut points {
                *p = p.offset_yz(-cy, -cz);
            }
        }

        debug!(
            ?section_type,
            length,
            points = points.len(),
            faces = faces.len(),
            area = properties.area,
            "generated section"
        );

        SectionGeometry {
            section_type: Some(section_type),
            points,
            faces,
            properties,
        }
    }

    /// Generate from a section type name.
    ///
    /// Unknown names yield empty points and faces with the all-zero
    /// property record.
    pub fn generate_named(&self, section_type: &str, length: f64, params: &SectionParameters) -> SectionGeometry {
        match SectionType::from_name(section_type, params) {
            Ok(kind) => self.generate(kind, length, params),
            Err(err) => {
                warn!(%err, "unsupported section type");
                SectionGeometry::default()
            }
        }
    }
}

/// Generate points, faces and properties with default options.
///
/// See [`ProfileGenerator::generate_named`].
pub fn get_section_points(section_type: &str, length: f64, params: &SectionParameters) -> SectionGeometry {
    ProfileGenerator::default().generate_named(section_type, length, params)
}
