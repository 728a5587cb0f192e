//! Section type classification
//!
//! The closed set of cross-section families the engine knows how to mesh and
//! analyse, plus name parsing (including the legacy `Tubular-Shape` alias).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{SectionError, SectionResult};
use crate::parameters::{keys, SectionParameters};

/// Cross-section family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    /// Doubly-symmetric I-section (beam proportions)
    IShape,
    /// Doubly-symmetric H-section (column proportions, same geometry as I)
    HShape,
    /// I-section with independent top and bottom flanges
    AsymmetricIShape,
    /// Solid rectangle
    Rectangle,
    /// Equal-thickness angle
    LShape,
    /// Channel (C-Shape / U-Shape)
    Channel,
    /// Tee with the flange on top
    TShape,
    /// Solid circular bar
    RoundBar,
    /// Circular hollow section (tube/pipe)
    Chs,
    /// Rectangular hollow section (box)
    Hss,
}

impl SectionType {
    /// All section types for iteration
    pub const ALL: [SectionType; 10] = [
        SectionType::IShape,
        SectionType::HShape,
        SectionType::AsymmetricIShape,
        SectionType::Rectangle,
        SectionType::LShape,
        SectionType::Channel,
        SectionType::TShape,
        SectionType::RoundBar,
        SectionType::Chs,
        SectionType::Hss,
    ];

    /// Resolve a section type name.
    ///
    /// Matching is case-insensitive. The legacy aliases `Tubular-Shape` and
    /// `Tubular` resolve to [`SectionType::Chs`] when the parameters carry a
    /// diameter (`d` / `Diameter`) or a standard name starting with `CHS`,
    /// and to [`SectionType::Hss`] otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use section_core::parameters::SectionParameters;
    /// use section_core::section_type::SectionType;
    ///
    /// let params = SectionParameters::new().with("d", 168.3).with("t", 5.0);
    /// let kind = SectionType::from_name("Tubular-Shape", &params).unwrap();
    /// assert_eq!(kind, SectionType::Chs);
    /// ```
    pub fn from_name(name: &str, params: &SectionParameters) -> SectionResult<Self> {
        let normalized = name.trim().to_uppercase();
        let kind = match normalized.as_str() {
            "I-SHAPE" => SectionType::IShape,
            "H-SHAPE" => SectionType::HShape,
            "ASYMMETRIC-I-SHAPE" => SectionType::AsymmetricIShape,
            "RECTANGLE" => SectionType::Rectangle,
            "L-SHAPE" => SectionType::LShape,
            "C-SHAPE" | "U-SHAPE" => SectionType::Channel,
            "T-SHAPE" => SectionType::TShape,
            "ROUND-BAR" => SectionType::RoundBar,
            "CHS" => SectionType::Chs,
            "HSS" => SectionType::Hss,
            "TUBULAR-SHAPE" | "TUBULAR" => Self::resolve_tubular(params),
            _ => return Err(SectionError::unknown_section_type(name)),
        };
        Ok(kind)
    }

    fn resolve_tubular(params: &SectionParameters) -> Self {
        let has_diameter = params.contains(keys::DIAMETER) || params.contains(keys::DIAMETER_SHORT);
        let chs_name = params
            .name
            .as_deref()
            .map(|n| n.trim().to_uppercase().starts_with("CHS"))
            .unwrap_or(false);

        if has_diameter || chs_name {
            SectionType::Chs
        } else {
            SectionType::Hss
        }
    }

    /// Canonical name, accepted back by [`SectionType::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            SectionType::IShape => "I-Shape",
            SectionType::HShape => "H-Shape",
            SectionType::AsymmetricIShape => "Asymmetric-I-Shape",
            SectionType::Rectangle => "Rectangle",
            SectionType::LShape => "L-Shape",
            SectionType::Channel => "C-Shape",
            SectionType::TShape => "T-Shape",
            SectionType::RoundBar => "Round-Bar",
            SectionType::Chs => "CHS",
            SectionType::Hss => "HSS",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionType::IShape => "I-Section",
            SectionType::HShape => "H-Section",
            SectionType::AsymmetricIShape => "Asymmetric I-Section",
            SectionType::Rectangle => "Rectangle",
            SectionType::LShape => "Angle (L)",
            SectionType::Channel => "Channel (C/U)",
            SectionType::TShape => "Tee (T)",
            SectionType::RoundBar => "Round Bar",
            SectionType::Chs => "Circular Hollow (CHS)",
            SectionType::Hss => "Rectangular Hollow (HSS)",
        }
    }

    /// Canonical parameter keys this family needs
    pub fn required_parameters(&self) -> &'static [&'static str] {
        match self {
            SectionType::IShape | SectionType::HShape | SectionType::Channel | SectionType::TShape => &[
                keys::WIDTH,
                keys::HEIGHT,
                keys::WEB_THICKNESS,
                keys::FLANGE_THICKNESS,
            ],
            SectionType::AsymmetricIShape => &[
                keys::TOP_FLANGE_WIDTH,
                keys::BOTTOM_FLANGE_WIDTH,
                keys::TOP_FLANGE_THICKNESS,
                keys::BOTTOM_FLANGE_THICKNESS,
                keys::HEIGHT,
                keys::WEB_THICKNESS,
            ],
            SectionType::Rectangle => &[keys::WIDTH, keys::HEIGHT],
            SectionType::LShape | SectionType::Hss => &[keys::WIDTH, keys::HEIGHT, keys::THICKNESS],
            SectionType::RoundBar => &[keys::DIAMETER],
            SectionType::Chs => &[keys::DIAMETER, keys::THICKNESS],
        }
    }

    /// Families whose properties come from closed-form formulas
    pub fn is_analytical(&self) -> bool {
        matches!(self, SectionType::RoundBar | SectionType::Chs | SectionType::Hss)
    }

    /// Families generated already centred on their centroid
    pub fn is_centered(&self) -> bool {
        matches!(self, SectionType::RoundBar | SectionType::Chs)
    }

    /// Families approximated by a polygon with a configurable segment count
    pub fn is_circular(&self) -> bool {
        matches!(self, SectionType::RoundBar | SectionType::Chs)
    }
}

impl FromStr for SectionType {
    type Err = SectionError;

    /// Parse without parameters; the tubular alias therefore resolves to HSS.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::from_name(s, &SectionParameters::new())
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_parsing() {
        let params = SectionParameters::new();
        assert_eq!(SectionType::from_name("I-Shape", &params), Ok(SectionType::IShape));
        assert_eq!(SectionType::from_name("h-shape", &params), Ok(SectionType::HShape));
        assert_eq!(SectionType::from_name("U-Shape", &params), Ok(SectionType::Channel));
        assert_eq!(SectionType::from_name("C-Shape", &params), Ok(SectionType::Channel));
        assert_eq!(SectionType::from_name(" Round-Bar ", &params), Ok(SectionType::RoundBar));
        assert!(SectionType::from_name("Z-Shape", &params).is_err());
    }

    #[test]
    fn test_canonical_names_roundtrip() {
        for kind in SectionType::ALL {
            let parsed: SectionType = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_tubular_alias_with_diameter() {
        let params = SectionParameters::new().with("Diameter", 100.0).with("Thickness", 4.0);
        assert_eq!(SectionType::from_name("Tubular-Shape", &params), Ok(SectionType::Chs));

        let short = SectionParameters::new().with("d", 100.0);
        assert_eq!(SectionType::from_name("Tubular", &short), Ok(SectionType::Chs));
    }

    #[test]
    fn test_tubular_alias_with_standard_name() {
        let params = SectionParameters::new().with_name("CHS 168.3x5");
        assert_eq!(SectionType::from_name("Tubular-Shape", &params), Ok(SectionType::Chs));
    }

    #[test]
    fn test_tubular_alias_defaults_to_hss() {
        let params = SectionParameters::new()
            .with_name("RHS 200x100x6.3")
            .with("Width", 100.0)
            .with("Height", 200.0)
            .with("Thickness", 6.3);
        assert_eq!(SectionType::from_name("Tubular-Shape", &params), Ok(SectionType::Hss));
        assert_eq!("Tubular-Shape".parse::<SectionType>(), Ok(SectionType::Hss));
    }

    #[test]
    fn test_family_flags() {
        assert!(SectionType::Hss.is_analytical());
        assert!(!SectionType::Hss.is_centered());
        assert!(SectionType::Chs.is_circular());
        assert!(!SectionType::IShape.is_analytical());
        assert_eq!(SectionType::Rectangle.required_parameters(), &["Width", "Height"]);
    }
}
