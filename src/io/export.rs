//! CSV export for batch calculation results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::calc::{Calculation, Material, Phase, Usage, Verdict};

/// Schema v1 column header for CSV batch export.
const HEADER: &str = "index,phase,material,area_mm2,length_m,current_a,cos_phi,usage,\
                      rho_ohm_mm2_per_m,reactance_ohm_per_m,phase_coeff,nominal_v,\
                      drop_v,drop_pct,verdict";

/// Exports batch results to a CSV file at the given path.
///
/// Writes a header row followed by one data row per calculation using the
/// schema v1 column layout. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(results: &[Calculation], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, buf)
}

/// Writes batch results as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(results: &[Calculation], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for (index, calc) in results.iter().enumerate() {
        let i = &calc.input;
        let c = &calc.constants;
        let r = &calc.result;
        wtr.write_record(&[
            index.to_string(),
            phase_token(i.phase).to_string(),
            material_token(i.material).to_string(),
            format!("{}", i.area_mm2),
            format!("{}", i.length_m),
            format!("{}", i.current_a),
            format!("{}", i.cos_phi),
            usage_token(i.usage).to_string(),
            format!("{}", c.rho),
            format!("{}", c.reactance_per_m),
            format!("{}", c.phase_coeff),
            format!("{}", c.nominal_v),
            format!("{:.2}", r.drop_v),
            format!("{:.2}", r.drop_pct),
            verdict_token(r.verdict).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn phase_token(phase: Phase) -> &'static str {
    match phase {
        Phase::Mono => "mono",
        Phase::Tri => "tri",
    }
}

fn material_token(material: Material) -> &'static str {
    match material {
        Material::Copper => "copper",
        Material::Aluminum => "aluminum",
    }
}

fn usage_token(usage: Usage) -> &'static str {
    match usage {
        Usage::Lighting => "lighting",
        Usage::Other => "other",
    }
}

fn verdict_token(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Compliant => "compliant",
        Verdict::CompliantAllUsages => "compliant_all_usages",
        Verdict::CompliantOtherUsesOnly => "compliant_other_uses_only",
        Verdict::NonCompliant => "non_compliant",
    }
}
