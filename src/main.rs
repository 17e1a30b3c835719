//! gridshift entry point — CLI wiring and config-driven scheduling run.

use std::path::Path;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use gridshift::config::ScenarioConfig;
use gridshift::forecast::generator::GridForecaster;
use gridshift::forecast::profile;
use gridshift::forecast::types::hour_of_day;
use gridshift::io::export::export_csv;
use gridshift::sched::optimizer::{find_optimal_window, next_green_hour};
use gridshift::sched::savings::compute_savings;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    region_override: Option<String>,
    seed_override: Option<u64>,
    duration_override: Option<usize>,
    units_override: Option<u32>,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("gridshift — carbon-aware compute-job scheduling demo");
    eprintln!();
    eprintln!("Usage: gridshift [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline)");
    eprintln!("  --region <name>     Override grid region");
    eprintln!("  --seed <u64>        Override random seed");
    eprintln!("  --duration <hours>  Override job duration");
    eprintln!("  --units <count>     Override compute unit count");
    eprintln!("  --export <path>     Export forecast to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve             Start JSON API server after the run");
        eprintln!("  --port <u16>        API server port (default: 3000)");
    }
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        region_override: None,
        seed_override: None,
        duration_override: None,
        units_override: None,
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--region" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --region requires a name argument");
                    process::exit(1);
                }
                cli.region_override = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--duration" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --duration requires an hour count");
                    process::exit(1);
                }
                if let Ok(d) = args[i].parse::<usize>() {
                    cli.duration_override = Some(d);
                } else {
                    eprintln!("error: --duration value \"{}\" is not a valid usize", args[i]);
                    process::exit(1);
                }
            }
            "--units" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --units requires a count");
                    process::exit(1);
                }
                if let Ok(u) = args[i].parse::<u32>() {
                    cli.units_override = Some(u);
                } else {
                    eprintln!("error: --units value \"{}\" is not a valid u32", args[i]);
                    process::exit(1);
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Current unix time in seconds; the generator truncates to the hour.
fn now_unix_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply overrides
    if let Some(region) = cli.region_override {
        scenario.forecast.region = region;
    }
    if let Some(seed) = cli.seed_override {
        scenario.forecast.seed = Some(seed);
    }
    if let Some(duration) = cli.duration_override {
        scenario.job.duration_hours = duration;
    }
    if let Some(units) = cli.units_override {
        scenario.job.unit_count = units;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let region = match profile::lookup(&scenario.forecast.region) {
        Some(p) => p,
        None => {
            // unreachable after validate(), which checks the region name
            eprintln!("error: unknown region \"{}\"", scenario.forecast.region);
            process::exit(1);
        }
    };
    let seed = scenario.forecast.seed.unwrap_or(region.default_seed);

    // Generate the forecast
    let mut forecaster = GridForecaster::new(region, seed);
    let series = forecaster.forecast(now_unix_secs(), scenario.forecast.horizon_hours);

    println!(
        "Grid forecast — region {} (dominant source: {}, seed {seed})",
        region.name, region.dominant_source
    );
    for p in &series {
        println!("{p}");
    }
    println!();

    match next_green_hour(&series, scenario.job.green_threshold_gco2) {
        Some(h) => println!(
            "Next green window: in {h} h ({:02}:00)",
            hour_of_day(series[h].timestamp)
        ),
        None => println!("Next green window: none within the forecast horizon"),
    }

    // Optimize and report
    let job = scenario.job_request();
    let optimal = match find_optimal_window(&series, job.duration_hours) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let savings = match compute_savings(&series, &job, &optimal) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    println!(
        "\nJob: {} units drawing {:.1} kW total for {} h ({:.1} kWh)",
        scenario.job.unit_count,
        job.power_draw_kw,
        job.duration_hours,
        job.energy_kwh()
    );
    println!("{savings}");
    println!("                    ({:.2} kg CO2)", savings.carbon_saved_g / 1000.0);

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&series, Some(&optimal), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Forecast written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(gridshift::api::AppState {
            region: region.name.to_string(),
            next_green_hour: next_green_hour(&series, scenario.job.green_threshold_gco2),
            series,
            job,
            optimal,
            savings,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(gridshift::api::serve(state, addr));
    }
}
