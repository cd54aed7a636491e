use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use pcbplace::io::ext_repr::ExtInstance;
use pcbplace::io::report::solution_report;
use pcbplace::io::svg::solution_to_svg;
use pcbplace::io::{export, import};
use pcbplace::search::PlacementSearch;
use pcbplace_cli::config::PlacerConfig;
use pcbplace_cli::io;
use pcbplace_cli::io::cli::Cli;
use pcbplace_cli::io::output::PlacerOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlacerConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    if let Some(secs) = args.time_limit {
        config.search.time_limit =
            Duration::try_from_secs_f64(secs).context("invalid time limit")?;
    }

    info!("Successfully parsed PlacerConfig: {config:?}");

    let ext_instance = match &args.input_file {
        None => {
            info!("[MAIN] No input file provided, solving the built-in instance");
            ExtInstance::default()
        }
        Some(input_file) => io::read_instance(input_file)?,
    };

    let stem = match &args.input_file {
        None => ext_instance.name.clone(),
        Some(input_file) => input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .context("input file has no valid file name")?
            .to_owned(),
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let instance = import(&ext_instance)?;

    let start = Instant::now();
    let mut search = PlacementSearch::new(&instance, config.search)?;
    let outcome = search.solve()?;
    let run_time = start.elapsed();

    {
        let output = PlacerOutput {
            instance: ext_instance.clone(),
            solution: export(&instance, &outcome, search.n_candidates, run_time),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    if let Some(solution) = outcome.solution() {
        let svg_path = args.solution_folder.join(format!("sol_{stem}.svg"));
        let svg = solution_to_svg(&instance, solution, config.svg_draw_options, &stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    {
        let report = solution_report(&instance, outcome.solution());
        let report_path = args.solution_folder.join(format!("sol_{stem}_summary.txt"));
        io::write_report(&report, Path::new(&report_path))?;
        print!("{report}");
    }

    match outcome.solution() {
        Some(_) => info!("[MAIN] placement found in {:.3}s", run_time.as_secs_f64()),
        None => warn!("[MAIN] no placement found, search {outcome}"),
    }

    Ok(())
}
