//! # section_core - Structural Cross-Section Engine
//!
//! `section_core` turns a section type name and a parameter mapping into the
//! 3D geometry of an extruded member (points at two stations plus a face
//! list) and the engineering properties of its cross-section. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Never fails on geometry**: degenerate input gives the all-zero record
//! - **Authoritative data wins**: published values override estimates
//! - **Rich Errors**: Structured error types at the typed entry points
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::{get_section_points, SectionParameters};
//!
//! let params = SectionParameters::new()
//!     .with("Width", 100.0)
//!     .with("Height", 200.0)
//!     .with("WebThickness", 5.6)
//!     .with("FlangeThickness", 8.5);
//!
//! let geometry = get_section_points("I-Shape", 6000.0, &params);
//! assert_eq!(geometry.points.len(), 24);
//! assert!(geometry.properties.iy > geometry.properties.iz);
//!
//! let json = serde_json::to_string_pretty(&geometry).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`generator`] - Two-station point and face generation, re-centring
//! - [`profiles`] - Per-family vertex builders and boundary tables
//! - [`properties`] - Area, inertia, moduli, torsion and warping constants
//! - [`parameters`] - Parameter synonyms, dimensions, overrides, validation
//! - [`section_type`] - Section family enum and name parsing
//! - [`library`] - Standard section library (built-in and CSV)
//! - [`geometry`] - Points and face lists
//! - [`errors`] - Structured error types

pub mod errors;
pub mod generator;
pub mod geometry;
pub mod library;
pub mod parameters;
pub mod profiles;
pub mod properties;
pub mod section_type;

// Re-export commonly used types at crate root for convenience
pub use errors::{SectionError, SectionResult};
pub use generator::{get_section_points, GeneratorOptions, ProfileGenerator, SectionGeometry};
pub use geometry::{FaceList, Point3};
pub use library::{builtin_library, builtin_sections, LibrarySection, SectionLibrary};
pub use parameters::{Dimensions, Overrides, SectionParameters};
pub use properties::{calculate_section_properties, SectionProperties};
pub use section_type::SectionType;
