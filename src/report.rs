//! Plain-text report rendering.
//!
//! The report is a fixed-layout text document built purely from a
//! [`Calculation`] and the branding settings; writing it to disk is a thin
//! wrapper around the renderer.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::calc::Calculation;
use crate::config::BrandingConfig;
use crate::error::Error;

const RULE: &str = "=======================================================";

/// Loads the optional logo banner file.
///
/// # Errors
///
/// Returns [`Error::AssetUnavailable`] if the file cannot be read. Callers
/// inside this module always recover with the title fallback.
fn load_banner(path: &str) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::AssetUnavailable {
        path: path.to_string(),
        source,
    })
}

/// Banner text for the top of the report: the logo file contents when
/// configured and readable, else the branding title. Never fails.
fn banner(branding: &BrandingConfig) -> String {
    if branding.logo_path.is_empty() {
        return branding.title.clone();
    }
    match load_banner(&branding.logo_path) {
        Ok(logo) => {
            let logo = logo.trim_end();
            format!("{logo}\n{}", branding.title)
        }
        Err(e) => {
            eprintln!("warning: {e}; using text banner");
            branding.title.clone()
        }
    }
}

/// Renders the full report document.
///
/// All figures are shown at two decimals; the underlying calculation is
/// carried at full precision.
pub fn render(calc: &Calculation, branding: &BrandingConfig) -> String {
    let mut out = String::new();
    let r = &calc.result;
    let c = &calc.constants;
    let i = &calc.input;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", banner(branding));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Circuit");
    let _ = writeln!(out, "  phase:          {}", i.phase);
    let _ = writeln!(out, "  material:       {}", i.material);
    let _ = writeln!(out, "  cross-section:  {} mm²", i.area_mm2);
    let _ = writeln!(out, "  length:         {} m", i.length_m);
    let _ = writeln!(out, "  current:        {} A", i.current_a);
    let _ = writeln!(out, "  cos φ:          {}", i.cos_phi);
    let _ = writeln!(out, "  usage:          {}", i.usage);
    let _ = writeln!(out);
    let _ = writeln!(out, "Results");
    let _ = writeln!(out, "  voltage drop:   {:.2} V", r.drop_v);
    let _ = writeln!(out, "  relative drop:  {:.2} %", r.drop_pct);
    let _ = writeln!(out, "  verdict:        {}", r.verdict);
    if let Some(advice) = r.verdict.advice() {
        let _ = writeln!(out, "  advice:         {advice}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Applied constants (NF C 15-100)");
    let _ = writeln!(out, "  resistivity ρ:  {} Ω·mm²/m", c.rho);
    let _ = writeln!(out, "  reactance X:    {} Ω/m", c.reactance_per_m);
    let _ = writeln!(out, "  phase coeff b:  {}", c.phase_coeff);
    let _ = writeln!(out, "  nominal volt.:  {} V", c.nominal_v);
    let _ = writeln!(out, "{RULE}");
    out
}

/// Renders the report and writes it to `path`.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn write_report(calc: &Calculation, branding: &BrandingConfig, path: &Path) -> io::Result<()> {
    let document = render(calc, branding);
    let mut file = fs::File::create(path)?;
    file.write_all(document.as_bytes())?;
    file.flush()
}
