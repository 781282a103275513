//! HOS trip planner entry point — CLI wiring and config-driven trip planning.

use std::path::Path;
use std::process;

use hos_trip_planner::config::ScenarioConfig;
use hos_trip_planner::hos::plan_trip;
use hos_trip_planner::io::export::export_csv;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    cycle_hours_override: Option<u32>,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("hos-trip-planner — FMCSA hours-of-service trip scheduler");
    eprintln!();
    eprintln!("Usage: hos-trip-planner [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load a trip scenario from a TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (short_hop, transcontinental, near_cap_cycle)");
    eprintln!("  --cycle-hours <u32>      Override cycle_hours_used from the loaded scenario");
    eprintln!("  --export-out <path>      Export the stop list to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the HTTP API server instead of planning once");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the short_hop preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        cycle_hours_override: None,
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
            "--cycle-hours" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --cycle-hours requires a u32 argument");
                    process::exit(1);
                }
                if let Ok(h) = args[i].parse::<u32>() {
                    cli.cycle_hours_override = Some(h);
                } else {
                    eprintln!("error: --cycle-hours value \"{}\" is not a valid u32", args[i]);
                    process::exit(1);
                }
            }
            "--export-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-out requires a path argument");
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

fn main() {
    let cli = parse_args();

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;

        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(hos_trip_planner::api::serve(addr));
        return;
    }

    // Load config: --scenario takes priority, then --preset, then short_hop default.
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
        ScenarioConfig::short_hop()
    };

    if let Some(hours) = cli.cycle_hours_override {
        scenario.cycle_hours_used = hours;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let request = scenario.into_plan_request();
    let result = plan_trip(&request);

    println!(
        "{} ({} mi, {} day{})",
        result.name,
        result.total_miles,
        result.total_days,
        if result.total_days == 1 { "" } else { "s" }
    );
    for day in &result.days {
        println!("\nDay {} ({})", day.day, day.date);
        for stop in &day.stops {
            println!(
                "  [{}] {} {} — mile {}",
                stop.time, stop.kind, stop.label, stop.mileage_rounded
            );
        }
        println!(
            "  totals: offDuty={:.1}h sleeperBerth={:.1}h driving={:.1}h onDuty={:.1}h",
            day.log.totals.off_duty, day.log.totals.sleeper_berth, day.log.totals.driving, day.log.totals.on_duty
        );
    }

    println!(
        "\ncycleHoursUsed={} cycleHoursActual={} totalDrivingHours={} totalOnDutyHours={}",
        result.cycle_hours_used, result.cycle_hours_actual, result.total_driving_hours, result.total_on_duty_hours
    );
    if let Some(warning) = &result.warning {
        println!("\nWARNING: {}", warning.message);
    }

    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&result, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Stops written to {path}");
    }
}
