//! voltdrop entry point — CLI wiring and config-driven calculator construction.

use std::path::Path;
use std::process;

use voltdrop::batch::{self, BatchFile};
use voltdrop::calc::{Calculation, Calculator, CircuitInput, Material, Phase, Usage};
use voltdrop::config::AppConfig;
use voltdrop::io::export::export_csv;
use voltdrop::report::write_report;

/// Parsed CLI arguments.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    phase: Option<Phase>,
    material: Option<Material>,
    area_mm2: Option<f64>,
    length_m: Option<f64>,
    current_a: Option<f64>,
    cos_phi: Option<f64>,
    usage: Option<Usage>,
    preset: Option<String>,
    batch_path: Option<String>,
    config_path: Option<String>,
    report_out: Option<String>,
    csv_out: Option<String>,
    #[cfg(feature = "api")]
    api_bind: Option<String>,
}

fn print_help() {
    eprintln!("voltdrop — NF C 15-100 voltage drop calculator");
    eprintln!();
    eprintln!("Usage: voltdrop [OPTIONS]");
    eprintln!();
    eprintln!("Circuit (defaults: mono copper 2.5 mm², 25 m, 16 A, cos φ 0.8, other):");
    eprintln!("  --phase <mono|tri>           Phase topology (230 V / 400 V)");
    eprintln!("  --material <copper|aluminum> Conductor material");
    eprintln!("  --area <mm2>                 Conductor cross-section");
    eprintln!("  --length <m>                 One-way cable length");
    eprintln!("  --current <A>                Load current");
    eprintln!("  --cos-phi <x>                Power factor, in (0, 1]");
    eprintln!("  --usage <lighting|other>     Usage category (3% / 5% limit)");
    eprintln!();
    eprintln!("Sources and outputs:");
    eprintln!("  --preset <name>              Built-in circuit ({})", batch::PRESETS.join(", "));
    eprintln!("  --batch <path>               Evaluate every [[circuit]] in a TOML file");
    eprintln!("  --config <path>              App configuration TOML (mode, branding)");
    eprintln!("  --report-out <path>          Write a text report (single circuit only)");
    eprintln!("  --csv-out <path>             Export batch results to CSV");
    #[cfg(feature = "api")]
    eprintln!("  --api-bind <addr:port>       Serve the REST API instead of computing");
    eprintln!("  --help                       Show this help message");
}

fn parse_args_from(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--phase" => cli.phase = Some(take_value(args, &mut i, "--phase")?.parse()?),
            "--material" => cli.material = Some(take_value(args, &mut i, "--material")?.parse()?),
            "--area" => cli.area_mm2 = Some(take_number(args, &mut i, "--area")?),
            "--length" => cli.length_m = Some(take_number(args, &mut i, "--length")?),
            "--current" => cli.current_a = Some(take_number(args, &mut i, "--current")?),
            "--cos-phi" => cli.cos_phi = Some(take_number(args, &mut i, "--cos-phi")?),
            "--usage" => cli.usage = Some(take_value(args, &mut i, "--usage")?.parse()?),
            "--preset" => cli.preset = Some(take_value(args, &mut i, "--preset")?.to_string()),
            "--batch" => cli.batch_path = Some(take_value(args, &mut i, "--batch")?.to_string()),
            "--config" => cli.config_path = Some(take_value(args, &mut i, "--config")?.to_string()),
            "--report-out" => {
                cli.report_out = Some(take_value(args, &mut i, "--report-out")?.to_string());
            }
            "--csv-out" => cli.csv_out = Some(take_value(args, &mut i, "--csv-out")?.to_string()),
            #[cfg(feature = "api")]
            "--api-bind" => {
                cli.api_bind = Some(take_value(args, &mut i, "--api-bind")?.to_string());
            }
            other => return Err(format!("unknown argument \"{other}\"")),
        }
        i += 1;
    }

    if cli.preset.is_some() && cli.batch_path.is_some() {
        return Err("arguments `--preset` and `--batch` are mutually exclusive".to_string());
    }
    if cli.batch_path.is_some() && cli.has_circuit_flags() {
        return Err("circuit flags cannot be combined with `--batch`".to_string());
    }
    if cli.batch_path.is_some() && cli.report_out.is_some() {
        return Err("`--report-out` applies to a single circuit, not `--batch`".to_string());
    }
    if cli.batch_path.is_none() && cli.csv_out.is_some() {
        return Err("`--csv-out` requires `--batch`".to_string());
    }

    Ok(cli)
}

impl CliArgs {
    fn has_circuit_flags(&self) -> bool {
        self.phase.is_some()
            || self.material.is_some()
            || self.area_mm2.is_some()
            || self.length_m.is_some()
            || self.current_a.is_some()
            || self.cos_phi.is_some()
            || self.usage.is_some()
    }

    /// Assembles the circuit: preset (or the form defaults) with any
    /// explicit flags layered on top.
    fn circuit(&self) -> Result<CircuitInput, String> {
        let base = match &self.preset {
            Some(name) => batch::from_preset(name).map_err(|e| e.to_string())?,
            None => CircuitInput {
                phase: Phase::Mono,
                material: Material::Copper,
                area_mm2: 2.5,
                length_m: 25.0,
                current_a: 16.0,
                cos_phi: 0.8,
                usage: Usage::Other,
            },
        };
        Ok(CircuitInput {
            phase: self.phase.unwrap_or(base.phase),
            material: self.material.unwrap_or(base.material),
            area_mm2: self.area_mm2.unwrap_or(base.area_mm2),
            length_m: self.length_m.unwrap_or(base.length_m),
            current_a: self.current_a.unwrap_or(base.current_a),
            cos_phi: self.cos_phi.unwrap_or(base.cos_phi),
            usage: self.usage.unwrap_or(base.usage),
        })
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn take_number(args: &[String], i: &mut usize, flag: &str) -> Result<f64, String> {
    let raw = take_value(args, i, flag)?;
    raw.parse::<f64>()
        .map_err(|_| format!("{flag} value \"{raw}\" is not a number"))
}

fn print_single(calc: &Calculation) {
    let r = &calc.result;
    let c = &calc.constants;
    println!("ΔU  = {:.2} V", r.drop_v);
    println!("ΔU% = {:.2} % of {} V", r.drop_pct, c.nominal_v);
    println!("verdict: {}", r.verdict);
    if let Some(advice) = r.verdict.advice() {
        println!("advice: {advice}");
    }
    println!(
        "details: ρ={} Ω·mm²/m  X={} Ω/m  b={}  Unom={} V",
        c.rho, c.reactance_per_m, c.phase_coeff, c.nominal_v
    );
}

fn run_batch(cli: &CliArgs, calculator: &Calculator, path: &str) {
    let batch = match BatchFile::from_toml_file(Path::new(path)) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let errors = batch.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let results: Vec<Calculation> = batch
        .circuits
        .iter()
        .map(|input| {
            calculator.run(input).unwrap_or_else(|e| {
                // validate() above already rejected bad entries
                eprintln!("{e}");
                process::exit(1);
            })
        })
        .collect();

    for r in &results {
        println!("{r}");
    }
    let compliant = results
        .iter()
        .filter(|r| r.result.verdict.is_compliant())
        .count();
    println!("\n{compliant}/{} circuits compliant", results.len());

    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_csv(&results, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Results written to {path}");
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            print_help();
            process::exit(1);
        }
    };

    // Load config: --config path or built-in defaults
    let config = match cli.config_path {
        Some(ref path) => match AppConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => AppConfig::default(),
    };
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let calculator = Calculator::new(config.compliance.mode);

    // Serve the API instead of computing
    #[cfg(feature = "api")]
    if let Some(ref bind) = cli.api_bind {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let addr: SocketAddr = match bind.parse() {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("error: --api-bind value \"{bind}\" is not a socket address: {e}");
                process::exit(1);
            }
        };
        let state = Arc::new(voltdrop::api::AppState::new(config));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(voltdrop::api::serve(state, addr));
        return;
    }

    if let Some(ref path) = cli.batch_path {
        run_batch(&cli, &calculator, path);
        return;
    }

    // Single circuit
    let input = match cli.circuit() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let calc = match calculator.run(&input) {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    print_single(&calc);

    if let Some(ref path) = cli.report_out {
        if let Err(e) = write_report(&calc, &config.branding, Path::new(path)) {
            eprintln!("error: failed to write report: {e}");
            process::exit(1);
        }
        eprintln!("Report written to {path}");
    }
}
