//! `fra-server` command line: loads configuration, installs logging and serves the API

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fra_server::{init_tracing, serve, ServerConfig, VERSION};
use std::net::SocketAddr;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("fra-server")
        .version(VERSION)
        .about("FRA Atlas & DSS API server")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .global(true)
                .value_parser(value_parser!(SocketAddr))
                .help("Listen address, e.g. 127.0.0.1:5000"),
        )
        .arg(
            Arg::new("log-filter")
                .long("log-filter")
                .global(true)
                .help("Log filter used when RUST_LOG is unset"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit JSON log lines"),
        )
        .arg(
            Arg::new("preferences")
                .long("preferences")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Theme preference file"),
        )
        .arg(
            Arg::new("seed-data")
                .long("seed-data")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("YAML file replacing the built-in seed data"),
        )
        .arg(
            Arg::new("rng-seed")
                .long("rng-seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for recommendation picks"),
        )
        .arg(
            Arg::new("instant")
                .long("instant")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Answer without simulated delays"),
        )
        .subcommand(Command::new("serve").about("Run the API server (default)"))
        .subcommand(Command::new("config").about("Print the effective configuration as TOML"))
}

fn resolve_config(matches: &ArgMatches) -> anyhow::Result<ServerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = matches.get_one::<SocketAddr>("bind") {
        config = config.with_bind(*bind);
    }
    if let Some(filter) = matches.get_one::<String>("log-filter") {
        config = config.with_log_filter(filter.clone());
    }
    if matches.get_flag("json-logs") {
        config = config.with_json_logs(true);
    }
    if let Some(path) = matches.get_one::<PathBuf>("preferences") {
        config = config.with_preference_file(path.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("seed-data") {
        config = config.with_seed_path(path.clone());
    }
    if let Some(seed) = matches.get_one::<u64>("rng-seed") {
        config = config.with_rng_seed(*seed);
    }
    if matches.get_flag("instant") {
        config = config.with_instant(true);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;

    match matches.subcommand() {
        Some(("config", _)) => {
            print!("{}", config.to_toml().context("failed to render config")?);
            Ok(())
        }
        _ => {
            init_tracing(&config.log_filter, config.json_logs)?;
            serve(config).await
        }
    }
}
