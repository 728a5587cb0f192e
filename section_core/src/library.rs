//! Standard Section Library
//!
//! Named standard sections (IPE 200, HEB 200, CHS 168.3x5, ...) with their
//! dimensions and, where available, the authoritative published properties.
//! Published values are stored as override keys, so they win over the
//! geometric estimate when the section is generated.
//!
//! ## Data Source
//!
//! The built-in table holds a handful of common European profiles in
//! millimetres (values from the EN 10365 / Euronorm tables). Larger tables
//! load from CSV.
//!
//! ## CSV Format
//!
//! ```text
//! Name,Type,h,b,tw,tf,A,Iy
//! IPE 220,I-Shape,220,110,5.9,9.2,3340,27720000
//! ```
//!
//! `Name` and `Type` are required columns. Every other column header is used
//! as a parameter key, so both long (`Width`) and short (`b`) forms work.
//!
//! ## Example
//!
//! ```rust
//! use section_core::library::builtin_library;
//!
//! let ipe = builtin_library().lookup("ipe 200").unwrap();
//! let geometry = ipe.geometry(6000.0);
//! assert_eq!(geometry.properties.area, 2850.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{SectionError, SectionResult};
use crate::generator::{ProfileGenerator, SectionGeometry};
use crate::parameters::SectionParameters;
use crate::section_type::SectionType;

/// One named standard section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarySection {
    /// Designation as published (e.g., "IPE 200")
    pub label: String,
    pub section_type: SectionType,
    /// Dimensions plus published override values, named after `label`
    pub params: SectionParameters,
}

impl LibrarySection {
    pub fn new(label: impl Into<String>, section_type: SectionType, params: SectionParameters) -> Self {
        let label = label.into();
        Self {
            params: params.with_name(label.clone()),
            label,
            section_type,
        }
    }

    /// Generate the member geometry with default generator options
    pub fn geometry(&self, length: f64) -> SectionGeometry {
        self.geometry_with(&ProfileGenerator::default(), length)
    }

    /// Generate the member geometry with a specific generator
    pub fn geometry_with(&self, generator: &ProfileGenerator, length: f64) -> SectionGeometry {
        generator.generate(self.section_type, length, &self.params)
    }
}

impl std::fmt::Display for LibrarySection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.section_type.display_name())
    }
}

/// Section library indexed by normalised name
#[derive(Debug, Clone, Default)]
pub struct SectionLibrary {
    /// Sections indexed by normalised label
    sections: BTreeMap<String, LibrarySection>,

    /// Labels grouped by family for filtering
    by_type: HashMap<SectionType, Vec<String>>,
}

impl SectionLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Load sections from a CSV file
    pub fn load_from_csv(path: &str) -> SectionResult<Self> {
        use std::fs::File;
        use std::io::BufReader;

        let file = File::open(path)
            .map_err(|e| SectionError::file_error("open", path, format!("Failed to open CSV: {}", e)))?;

        parse_csv(BufReader::new(file), path)
    }

    /// Load sections from any buffered reader holding CSV text
    pub fn load_from_reader<R: BufRead>(reader: R) -> SectionResult<Self> {
        parse_csv(reader, "<reader>")
    }

    /// Insert a section, replacing any entry with the same normalised label
    pub fn insert(&mut self, section: LibrarySection) {
        let key = normalize(&section.label);
        let section_type = section.section_type;

        if let Some(previous) = self.sections.insert(key.clone(), section) {
            if let Some(labels) = self.by_type.get_mut(&previous.section_type) {
                labels.retain(|l| *l != key);
            }
        }

        self.by_type.entry(section_type).or_default().push(key);
    }

    /// Look up a section by name
    ///
    /// Matching is case-insensitive and ignores repeated whitespace, so
    /// `"ipe  200"` finds `"IPE 200"`.
    pub fn lookup(&self, name: &str) -> SectionResult<&LibrarySection> {
        self.sections
            .get(&normalize(name))
            .ok_or_else(|| SectionError::section_not_found(name))
    }

    /// Get all sections of one family
    pub fn sections_of_type(&self, section_type: SectionType) -> Vec<&LibrarySection> {
        self.by_type
            .get(&section_type)
            .map(|labels| labels.iter().filter_map(|l| self.sections.get(l)).collect())
            .unwrap_or_default()
    }

    /// Search for sections whose name starts with `prefix`
    pub fn search(&self, prefix: &str) -> Vec<&LibrarySection> {
        let prefix = normalize(prefix);
        self.sections
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, v)| v)
            .collect()
    }

    /// All labels, in sorted order
    pub fn labels(&self) -> Vec<&str> {
        self.sections.values().map(|s| s.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}

fn parse_csv<R: BufRead>(reader: R, path: &str) -> SectionResult<SectionLibrary> {
    let mut lines = reader.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| SectionError::file_error("read", path, "CSV file is empty"))?
        .map_err(|e| SectionError::file_error("read", path, format!("Failed to read header: {}", e)))?;

    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();
    let col_index = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let name_idx = col_index("Name").ok_or_else(|| SectionError::file_error("parse", path, "Missing 'Name' column"))?;
    let type_idx = col_index("Type").ok_or_else(|| SectionError::file_error("parse", path, "Missing 'Type' column"))?;

    let mut library = SectionLibrary::new();
    let mut line_num = 1;

    for line_result in lines {
        line_num += 1;
        let line = line_result
            .map_err(|e| SectionError::file_error("read", path, format!("Failed to read line {}: {}", line_num, e)))?;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let label = fields.get(name_idx).copied().unwrap_or("");
        if label.is_empty() {
            continue;
        }

        let mut params = SectionParameters::new().with_name(label);
        for (idx, header) in headers.iter().enumerate() {
            if idx == name_idx || idx == type_idx || header.is_empty() {
                continue;
            }
            let cell = fields.get(idx).copied().unwrap_or("");
            if let Some(value) = parse_cell(cell, header, line_num)? {
                params.set(*header, value);
            }
        }

        let type_name = fields.get(type_idx).copied().unwrap_or("");
        let section_type = SectionType::from_name(type_name, &params).map_err(|_| {
            SectionError::invalid_input("Type", type_name, format!("Unknown section type on line {}", line_num))
        })?;

        params
            .dimensions()
            .validate(section_type)
            .map_err(|e| SectionError::invalid_input(label, section_type.name(), format!("line {}: {}", line_num, e)))?;

        library.insert(LibrarySection::new(label, section_type, params));
    }

    debug!(path, sections = library.len(), "loaded section library");
    Ok(library)
}

/// Parse one numeric cell. Empty cells and dashes mean "no value".
fn parse_cell(cell: &str, header: &str, line_num: usize) -> SectionResult<Option<f64>> {
    if cell.is_empty() || cell == "-" || cell == "—" {
        return Ok(None);
    }
    f64::from_str(cell)
        .map(Some)
        .map_err(|_| SectionError::invalid_input(header, cell, format!("Not a number on line {}", line_num)))
}

// ============================================================================
// Built-in Sections (for use without a CSV file)
// ============================================================================

static BUILTIN: Lazy<SectionLibrary> = Lazy::new(builtin_sections);

/// Shared read-only instance of [`builtin_sections`]
pub fn builtin_library() -> &'static SectionLibrary {
    &BUILTIN
}

/// Build a library with common European profiles pre-loaded.
///
/// Rolled I/H and channel entries carry the published properties (root
/// fillets included) as overrides. Hollow sections and angles carry
/// dimensions only.
pub fn builtin_sections() -> SectionLibrary {
    let mut library = SectionLibrary::new();

    // label, type, h, b, tw, tf, A, Iy, Iz, Wel_y, Wel_z, Wpl_y, Wpl_z, It, Iw
    let rolled = [
        ("IPE 200", SectionType::IShape, 200.0, 100.0, 5.6, 8.5, 2850.0, 19.43e6, 1.424e6, 194.3e3, 28.47e3, 220.6e3, 44.61e3, 69.8e3, 12.99e9),
        ("IPE 300", SectionType::IShape, 300.0, 150.0, 7.1, 10.7, 5380.0, 83.56e6, 6.038e6, 557.1e3, 80.5e3, 628.4e3, 125.2e3, 201.2e3, 125.9e9),
        ("HEA 200", SectionType::HShape, 190.0, 200.0, 6.5, 10.0, 5380.0, 36.92e6, 13.36e6, 388.6e3, 133.6e3, 429.5e3, 203.8e3, 209.8e3, 108.0e9),
        ("HEB 200", SectionType::HShape, 200.0, 200.0, 9.0, 15.0, 7810.0, 56.96e6, 20.03e6, 569.6e3, 200.3e3, 642.5e3, 305.8e3, 592.8e3, 171.1e9),
    ];

    for (label, section_type, h, b, tw, tf, a, iy, iz, wel_y, wel_z, wpl_y, wpl_z, it, iw) in rolled {
        let params = SectionParameters::new()
            .with("h", h)
            .with("b", b)
            .with("tw", tw)
            .with("tf", tf)
            .with("A", a)
            .with("Iy", iy)
            .with("Iz", iz)
            .with("Wel_y", wel_y)
            .with("Wel_z", wel_z)
            .with("Wpl_y", wpl_y)
            .with("Wpl_z", wpl_z)
            .with("It", it)
            .with("Iw", iw);
        library.insert(LibrarySection::new(label, section_type, params));
    }

    // channel: Wpl_z, It and Iw are left to the geometric estimate
    library.insert(LibrarySection::new(
        "UPN 200",
        SectionType::Channel,
        SectionParameters::new()
            .with("h", 200.0)
            .with("b", 75.0)
            .with("tw", 8.5)
            .with("tf", 11.5)
            .with("A", 3220.0)
            .with("Iy", 19.1e6)
            .with("Iz", 1.48e6)
            .with("Wel_y", 191.0e3)
            .with("Wel_z", 27.0e3)
            .with("Wpl_y", 228.0e3),
    ));

    for (label, d, t) in [("CHS 168.3x5", 168.3, 5.0), ("CHS 114.3x4", 114.3, 4.0)] {
        library.insert(LibrarySection::new(
            label,
            SectionType::Chs,
            SectionParameters::new().with("d", d).with("t", t),
        ));
    }

    library.insert(LibrarySection::new(
        "RHS 200x100x6.3",
        SectionType::Hss,
        SectionParameters::new().with("h", 200.0).with("b", 100.0).with("t", 6.3),
    ));

    library.insert(LibrarySection::new(
        "L 100x100x10",
        SectionType::LShape,
        SectionParameters::new().with("h", 100.0).with("b", 100.0).with("t", 10.0),
    ));

    library
}
