//! # Section Parameters
//!
//! Callers describe a section with a loose name → value mapping (user input,
//! a standard-section table row, a host document's property bag). Before any
//! geometry or property code runs, the mapping is canonicalised once into a
//! typed [`Dimensions`] record and an [`Overrides`] record.
//!
//! ## Synonyms
//!
//! | Canonical key           | Short form |
//! |-------------------------|------------|
//! | `Width`                 | `b`        |
//! | `Height`                | `h`        |
//! | `WebThickness`          | `tw`       |
//! | `FlangeThickness`       | `tf`       |
//! | `Thickness`             | `t`        |
//! | `Diameter`              | `d`        |
//! | `TopFlangeWidth`        | -          |
//! | `BottomFlangeWidth`     | -          |
//! | `TopFlangeThickness`    | -          |
//! | `BottomFlangeThickness` | -          |
//!
//! The canonical key wins when both forms are present. Absent keys are 0.
//!
//! ## Overrides
//!
//! `A`, `Iy`, `Iz`, `Iw`, `It`, `Wel_y`, `Wel_z`, `Wpl_y`, `Wpl_z` replace the
//! computed property of the same name. They are how authoritative table
//! values (rolled sections with root fillets, for instance) take precedence
//! over the geometric estimate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{SectionError, SectionResult};
use crate::section_type::SectionType;

/// Recognized parameter keys
pub mod keys {
    pub const WIDTH: &str = "Width";
    pub const WIDTH_SHORT: &str = "b";
    pub const HEIGHT: &str = "Height";
    pub const HEIGHT_SHORT: &str = "h";
    pub const WEB_THICKNESS: &str = "WebThickness";
    pub const WEB_THICKNESS_SHORT: &str = "tw";
    pub const FLANGE_THICKNESS: &str = "FlangeThickness";
    pub const FLANGE_THICKNESS_SHORT: &str = "tf";
    pub const THICKNESS: &str = "Thickness";
    pub const THICKNESS_SHORT: &str = "t";
    pub const DIAMETER: &str = "Diameter";
    pub const DIAMETER_SHORT: &str = "d";
    pub const TOP_FLANGE_WIDTH: &str = "TopFlangeWidth";
    pub const BOTTOM_FLANGE_WIDTH: &str = "BottomFlangeWidth";
    pub const TOP_FLANGE_THICKNESS: &str = "TopFlangeThickness";
    pub const BOTTOM_FLANGE_THICKNESS: &str = "BottomFlangeThickness";

    pub const AREA: &str = "A";
    pub const IY: &str = "Iy";
    pub const IZ: &str = "Iz";
    pub const IW: &str = "Iw";
    pub const IT: &str = "It";
    pub const WEL_Y: &str = "Wel_y";
    pub const WEL_Z: &str = "Wel_z";
    pub const WPL_Y: &str = "Wpl_y";
    pub const WPL_Z: &str = "Wpl_z";

    /// All override keys, in the order they are applied
    pub const OVERRIDES: [&str; 9] = [AREA, IY, IZ, IW, IT, WEL_Y, WEL_Z, WPL_Y, WPL_Z];
}

/// Raw parameter mapping for one section
///
/// # Example
///
/// ```rust
/// use section_core::parameters::SectionParameters;
///
/// let params = SectionParameters::new()
///     .with("Width", 100.0)
///     .with("h", 200.0);
///
/// let dims = params.dimensions();
/// assert_eq!(dims.width, 100.0);
/// assert_eq!(dims.height, 200.0);
/// assert_eq!(dims.thickness, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionParameters {
    /// Standard designation (e.g., "IPE 200", "CHS 168.3x5"), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parameter values keyed by name
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

impl SectionParameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a parameter
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Builder: set the standard designation
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a parameter in place
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Raw lookup of a single key (no synonym resolution)
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Check whether a key is present (no synonym resolution)
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn resolve(&self, canonical: &str, short: Option<&str>) -> f64 {
        self.get(canonical)
            .or_else(|| short.and_then(|s| self.get(s)))
            .unwrap_or(0.0)
    }

    /// Canonicalise synonyms into a typed dimension record
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.resolve(keys::WIDTH, Some(keys::WIDTH_SHORT)),
            height: self.resolve(keys::HEIGHT, Some(keys::HEIGHT_SHORT)),
            web_thickness: self.resolve(keys::WEB_THICKNESS, Some(keys::WEB_THICKNESS_SHORT)),
            flange_thickness: self.resolve(keys::FLANGE_THICKNESS, Some(keys::FLANGE_THICKNESS_SHORT)),
            thickness: self.resolve(keys::THICKNESS, Some(keys::THICKNESS_SHORT)),
            diameter: self.resolve(keys::DIAMETER, Some(keys::DIAMETER_SHORT)),
            top_flange_width: self.resolve(keys::TOP_FLANGE_WIDTH, None),
            bottom_flange_width: self.resolve(keys::BOTTOM_FLANGE_WIDTH, None),
            top_flange_thickness: self.resolve(keys::TOP_FLANGE_THICKNESS, None),
            bottom_flange_thickness: self.resolve(keys::BOTTOM_FLANGE_THICKNESS, None),
        }
    }

    /// Extract the explicit property overrides
    pub fn overrides(&self) -> Overrides {
        Overrides {
            area: self.get(keys::AREA),
            iy: self.get(keys::IY),
            iz: self.get(keys::IZ),
            iw: self.get(keys::IW),
            it: self.get(keys::IT),
            wel_y: self.get(keys::WEL_Y),
            wel_z: self.get(keys::WEL_Z),
            wpl_y: self.get(keys::WPL_Y),
            wpl_z: self.get(keys::WPL_Z),
        }
    }
}

/// Canonical section dimensions
///
/// All values share the caller's length unit. Missing values are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub web_thickness: f64,
    pub flange_thickness: f64,
    /// Wall/leg thickness for L, CHS, and HSS
    pub thickness: f64,
    pub diameter: f64,
    pub top_flange_width: f64,
    pub bottom_flange_width: f64,
    pub top_flange_thickness: f64,
    pub bottom_flange_thickness: f64,
}

impl Dimensions {
    /// Value of a canonical key
    pub fn value(&self, key: &str) -> Option<f64> {
        let v = match key {
            keys::WIDTH => self.width,
            keys::HEIGHT => self.height,
            keys::WEB_THICKNESS => self.web_thickness,
            keys::FLANGE_THICKNESS => self.flange_thickness,
            keys::THICKNESS => self.thickness,
            keys::DIAMETER => self.diameter,
            keys::TOP_FLANGE_WIDTH => self.top_flange_width,
            keys::BOTTOM_FLANGE_WIDTH => self.bottom_flange_width,
            keys::TOP_FLANGE_THICKNESS => self.top_flange_thickness,
            keys::BOTTOM_FLANGE_THICKNESS => self.bottom_flange_thickness,
            _ => return None,
        };
        Some(v)
    }

    /// Check that the dimensions describe a real section of the given family.
    ///
    /// The engine itself never requires this (it degrades to the all-zero
    /// property record), but callers that want to report problems to a user
    /// get them here in one place.
    ///
    /// # Errors
    ///
    /// - [`SectionError::MissingField`] for a required dimension that is 0
    /// - [`SectionError::InvalidInput`] for a negative dimension or an
    ///   inconsistent combination (e.g. flanges taller than the section)
    pub fn validate(&self, section_type: SectionType) -> SectionResult<()> {
        for &key in section_type.required_parameters() {
            let value = self.value(key).unwrap_or(0.0);
            if value == 0.0 {
                return Err(SectionError::missing_field(key));
            }
            if value < 0.0 {
                return Err(SectionError::invalid_input(key, value.to_string(), "Dimension must be positive"));
            }
        }

        match section_type {
            SectionType::IShape | SectionType::HShape | SectionType::Channel => {
                if 2.0 * self.flange_thickness >= self.height {
                    return Err(SectionError::invalid_input(
                        keys::FLANGE_THICKNESS,
                        self.flange_thickness.to_string(),
                        "Two flanges must leave room for the web",
                    ));
                }
                if self.web_thickness >= self.width {
                    return Err(SectionError::invalid_input(
                        keys::WEB_THICKNESS,
                        self.web_thickness.to_string(),
                        "Web must be thinner than the flange width",
                    ));
                }
            }
            SectionType::TShape => {
                if self.flange_thickness >= self.height {
                    return Err(SectionError::invalid_input(
                        keys::FLANGE_THICKNESS,
                        self.flange_thickness.to_string(),
                        "Flange must leave room for the stem",
                    ));
                }
                if self.web_thickness >= self.width {
                    return Err(SectionError::invalid_input(
                        keys::WEB_THICKNESS,
                        self.web_thickness.to_string(),
                        "Stem must be thinner than the flange width",
                    ));
                }
            }
            SectionType::AsymmetricIShape => {
                if self.top_flange_thickness + self.bottom_flange_thickness >= self.height {
                    return Err(SectionError::invalid_input(
                        keys::HEIGHT,
                        self.height.to_string(),
                        "Height must exceed the combined flange thickness",
                    ));
                }
                if self.web_thickness > self.top_flange_width.min(self.bottom_flange_width) {
                    return Err(SectionError::invalid_input(
                        keys::WEB_THICKNESS,
                        self.web_thickness.to_string(),
                        "Web must not be wider than either flange",
                    ));
                }
            }
            SectionType::LShape => {
                if self.thickness >= self.width.min(self.height) {
                    return Err(SectionError::invalid_input(
                        keys::THICKNESS,
                        self.thickness.to_string(),
                        "Leg thickness must be smaller than both legs",
                    ));
                }
            }
            SectionType::Chs => {
                if 2.0 * self.thickness >= self.diameter {
                    return Err(SectionError::invalid_input(
                        keys::THICKNESS,
                        self.thickness.to_string(),
                        "Wall thickness consumes the whole diameter",
                    ));
                }
            }
            SectionType::Hss => {
                if 2.0 * self.thickness >= self.width.min(self.height) {
                    return Err(SectionError::invalid_input(
                        keys::THICKNESS,
                        self.thickness.to_string(),
                        "Wall thickness leaves no hollow",
                    ));
                }
            }
            SectionType::Rectangle | SectionType::RoundBar => {}
        }

        Ok(())
    }
}

/// Authoritative property values supplied with the parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    pub area: Option<f64>,
    pub iy: Option<f64>,
    pub iz: Option<f64>,
    pub iw: Option<f64>,
    /// Torsion constant (`It` key, stored as `j` on the properties)
    pub it: Option<f64>,
    pub wel_y: Option<f64>,
    pub wel_z: Option<f64>,
    pub wpl_y: Option<f64>,
    pub wpl_z: Option<f64>,
}

impl Overrides {
    /// Check if no override is present
    pub fn is_empty(&self) -> bool {
        *self == Overrides::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_resolution() {
        let params = SectionParameters::new()
            .with("b", 120.0)
            .with("h", 240.0)
            .with("tw", 6.2)
            .with("tf", 9.8)
            .with("t", 4.0)
            .with("d", 60.0);
        let dims = params.dimensions();
        assert_eq!(dims.width, 120.0);
        assert_eq!(dims.height, 240.0);
        assert_eq!(dims.web_thickness, 6.2);
        assert_eq!(dims.flange_thickness, 9.8);
        assert_eq!(dims.thickness, 4.0);
        assert_eq!(dims.diameter, 60.0);
    }

    #[test]
    fn test_canonical_key_wins() {
        let params = SectionParameters::new().with("Width", 100.0).with("b", 50.0);
        assert_eq!(params.dimensions().width, 100.0);
    }

    #[test]
    fn test_missing_defaults_to_zero() {
        let dims = SectionParameters::new().dimensions();
        assert_eq!(dims, Dimensions::default());
    }

    #[test]
    fn test_overrides_extraction() {
        let params = SectionParameters::new()
            .with("Height", 200.0)
            .with("A", 2850.0)
            .with("It", 69_800.0);
        let overrides = params.overrides();
        assert_eq!(overrides.area, Some(2850.0));
        assert_eq!(overrides.it, Some(69_800.0));
        assert_eq!(overrides.iy, None);
        assert!(!overrides.is_empty());
        assert!(SectionParameters::new().overrides().is_empty());
    }

    #[test]
    fn test_validate_missing_field() {
        let dims = SectionParameters::new().with("Width", 100.0).dimensions();
        let err = dims.validate(SectionType::Rectangle).unwrap_err();
        assert_eq!(err, SectionError::missing_field("Height"));
    }

    #[test]
    fn test_validate_negative_dimension() {
        let dims = SectionParameters::new().with("Width", -1.0).with("Height", 10.0).dimensions();
        let err = dims.validate(SectionType::Rectangle).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validate_hollow_consumed() {
        let dims = SectionParameters::new()
            .with("Width", 100.0)
            .with("Height", 200.0)
            .with("Thickness", 50.0)
            .dimensions();
        assert!(dims.validate(SectionType::Hss).is_err());

        let dims = SectionParameters::new().with("d", 100.0).with("t", 50.0).dimensions();
        assert!(dims.validate(SectionType::Chs).is_err());
    }

    #[test]
    fn test_validate_ok() {
        let dims = SectionParameters::new()
            .with("Width", 100.0)
            .with("Height", 200.0)
            .with("WebThickness", 5.6)
            .with("FlangeThickness", 8.5)
            .dimensions();
        assert!(dims.validate(SectionType::IShape).is_ok());
    }

    #[test]
    fn test_parameters_json() {
        let params = SectionParameters::new().with_name("IPE 200").with("Height", 200.0);
        let json = serde_json::to_string(&params).unwrap();
        let back: SectionParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);

        let bare: SectionParameters = serde_json::from_str(r#"{"values": {"d": 10.0}}"#).unwrap();
        assert_eq!(bare.name, None);
        assert_eq!(bare.dimensions().diameter, 10.0);
    }
}
