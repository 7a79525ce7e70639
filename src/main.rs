// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use seldon_topology::config::{load_and_validate_deployment, load_naming_config, NamingConfig};
use seldon_topology::naming::NameDeriver;
use seldon_topology::plan::ResourcePlan;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // stdout carries the plan; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <deployment.yaml|json> [naming.yaml]", args[0]);
        eprintln!("Example: {} configs/fraud-detector.yaml", args[0]);
        eprintln!("Example: {} configs/ab-test.json configs/naming.yaml", args[0]);
        return ExitCode::FAILURE;
    }

    init_logging();

    match run(&args[1], args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Validation findings are listed one per line by ConfigError's Display
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(deployment_file: &str, naming_file: Option<&str>) -> anyhow::Result<()> {
    let naming = match naming_file {
        Some(path) => load_naming_config(path)
            .with_context(|| format!("loading naming table {}", path))?,
        None => NamingConfig::default(),
    };

    let deployment = load_and_validate_deployment(deployment_file)
        .with_context(|| format!("loading deployment {}", deployment_file))?;

    let plan = ResourcePlan::build(&NameDeriver::new(naming), &deployment);
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
