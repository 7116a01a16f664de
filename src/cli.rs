use crate::config::load_config;
use crate::diagrams;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fleetdiag",
    version,
    about = "Renders the fleet architecture diagram set to PNG"
)]
pub struct Args {
    /// Output directory (default: diagrams, or the config outputDir)
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Config JSON file (theme overrides, output directory)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Render only the named diagram stem (repeatable)
    #[arg(long = "only")]
    pub only: Vec<String>,

    /// List the registered diagrams and exit
    #[arg(long = "list")]
    pub list: bool,
}

pub fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        for (index, diagram) in diagrams::all().iter().enumerate() {
            println!(
                "{}  {}x{}  {}",
                diagram.file_name(index),
                diagram.width,
                diagram.height,
                diagram.title
            );
        }
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let out_dir = args.out_dir.unwrap_or_else(|| config.output_dir.clone());
    diagrams::render_all(&config, &out_dir, &args.only)
}
