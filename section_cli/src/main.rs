//! # Section CLI
//!
//! Terminal front end for `section_core`: pick a standard section or a
//! section family, enter its dimensions, and get the property table plus the
//! full geometry as JSON.
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`
//! (e.g. `RUST_LOG=section_core=debug`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use section_core::library::builtin_library;
use section_core::{GeneratorOptions, ProfileGenerator, SectionGeometry, SectionParameters, SectionType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_str(prompt: &str, default: &str) -> String {
    match read_line(prompt) {
        Some(s) if !s.is_empty() => s,
        _ => default.to_string(),
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "section_core=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    println!("Section CLI - Cross-Section Geometry & Properties");
    println!("=================================================");
    println!();
    println!("Library sections: {}", builtin_library().labels().join(", "));
    println!(
        "Section types:    {}",
        SectionType::ALL.iter().map(|t| t.name()).collect::<Vec<_>>().join(", ")
    );
    println!();

    let name = prompt_str("Section [IPE 200]: ", "IPE 200");

    let (section_type, params) = match builtin_library().lookup(&name) {
        Ok(section) => {
            tracing::info!(label = %section.label, "using library section");
            (section.section_type, section.params.clone())
        }
        Err(_) => match prompt_dimensions(&name) {
            Some(found) => found,
            None => return ExitCode::FAILURE,
        },
    };

    let length = prompt_f64("Member length [1000.0]: ", 1000.0);

    let mut options = GeneratorOptions::default();
    if section_type.is_circular() {
        let prompt = format!("Circle segments [{}]: ", options.circle_segments);
        options = options.with_circle_segments(prompt_usize(&prompt, options.circle_segments));
    }

    let generator = ProfileGenerator::new(options);
    let geometry = generator.generate(section_type, length, &params);

    println!();
    print_report(&name, section_type, &generator, &geometry);

    println!();
    println!("JSON Output (for LLM/API use):");
    match serde_json::to_string_pretty(&geometry) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }

    ExitCode::SUCCESS
}

/// Resolve a type name and prompt for the dimensions it needs
fn prompt_dimensions(name: &str) -> Option<(SectionType, SectionParameters)> {
    let mut params = SectionParameters::new();

    // the tubular alias decides between CHS and HSS on the diameter key
    let mut section_type = match SectionType::from_name(name, &params) {
        Ok(t) => t,
        Err(e) => {
            report_error(&e);
            return None;
        }
    };
    if section_type == SectionType::Hss && !name.trim().eq_ignore_ascii_case("HSS") {
        let diameter = prompt_f64("Diameter (0 for a box section) [0.0]: ", 0.0);
        if diameter > 0.0 {
            params.set("Diameter", diameter);
            section_type = SectionType::Chs;
        }
    }

    println!();
    println!("{}:", section_type.display_name());
    for &key in section_type.required_parameters() {
        if params.contains(key) {
            continue;
        }
        let value = prompt_f64(&format!("  {} [0.0]: ", key), 0.0);
        params.set(key, value);
    }

    if let Err(e) = params.dimensions().validate(section_type) {
        report_error(&e);
        return None;
    }

    Some((section_type, params))
}

fn report_error(e: &section_core::SectionError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_report(name: &str, section_type: SectionType, generator: &ProfileGenerator, geometry: &SectionGeometry) {
    let p = &geometry.properties;
    let principal = p.principal_axes();

    println!("═══════════════════════════════════════");
    println!("  SECTION PROPERTIES: {}", name);
    println!("═══════════════════════════════════════");
    println!();
    println!("Geometry:");
    println!("  Family:   {}", section_type.display_name());
    println!("  Points:   {}", geometry.points.len());
    println!("  Faces:    {}", geometry.faces.len());
    if section_type.is_circular() {
        println!("  Segments: {}", generator.options().segments());
    }
    println!();
    println!("Properties:");
    println!("  A      = {:>14.1}", p.area);
    println!("  Iy     = {:>14.4e}", p.iy);
    println!("  Iz     = {:>14.4e}", p.iz);
    println!("  Iyz    = {:>14.4e}", p.iyz);
    println!("  Wel_y  = {:>14.4e}", p.wel_y);
    println!("  Wel_z  = {:>14.4e}", p.wel_z);
    println!("  Wpl_y  = {:>14.4e}", p.wpl_y);
    println!("  Wpl_z  = {:>14.4e}", p.wpl_z);
    println!("  It     = {:>14.4e}", p.j);
    println!("  Iw     = {:>14.4e}", p.iw);
    println!("  ry     = {:>14.2}", p.ry());
    println!("  rz     = {:>14.2}", p.rz());
    println!();
    println!("Principal axes:");
    println!("  Iu     = {:>14.4e}", principal.i_u);
    println!("  Iv     = {:>14.4e}", principal.i_v);
    println!("  angle  = {:>14.2} deg", principal.angle.to_degrees());
    println!("═══════════════════════════════════════");

    if p.is_degenerate() {
        println!("  WARNING: degenerate section, all properties are zero");
    }
}
