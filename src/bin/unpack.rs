//! geosite-unpack: CLI tool for unpacking geosite.dat files into text rules.

use clap::Parser;
use geosite_unpack::{unpack, UnpackConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geosite-unpack")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(
    about = "Unpack geosite file to text files",
    long_about = "Unpack geosite file to text files.\n\n\
                  Without --filter every tag is unpacked and split by attribute."
)]
struct Cli {
    /// geosite.dat file (optionally gzip compressed)
    file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Unpack given tag and attrs (tag[@attr]), repeatable
    #[arg(short, long = "filter", value_name = "TAG[@ATTR]")]
    filters: Vec<String>,

    /// YAML config file; command line values take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> geosite_unpack::Result<()> {
    let config = match &cli.config {
        Some(path) => UnpackConfig::load(path)?,
        None => UnpackConfig::default(),
    };
    let config = config.merge_cli(cli.file, cli.out, cli.filters)?;

    let written = unpack(&config)?;

    let rules: usize = written.iter().map(|w| w.rule_count).sum();
    log::info!(
        "unpacked {:?}: {} files, {} rules",
        config.source,
        written.len(),
        rules
    );
    Ok(())
}
