use std::io;
use std::path::PathBuf;

use clap::Parser;
use resizable::bounds::BoundsConfig;
use resizable::script::{Script, ScriptError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "resize-replay", about = "Replay a pointer trace against a resizable card")]
struct Cli {
    /// Script file; reads stdin when omitted or `-`.
    script: Option<PathBuf>,

    /// Take bounds from RESIZE_* environment variables instead of the script.
    #[arg(long, env = "RESIZE_ENV_BOUNDS")]
    env_bounds: bool,
}

fn main() -> Result<(), ScriptError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let script = match cli.script.as_deref() {
        Some(path) if path.as_os_str() != "-" => Script::load(path)?,
        _ => Script::from_reader(io::stdin().lock())?,
    };
    let bounds = if cli.env_bounds { Some(BoundsConfig::from_env()?) } else { None };

    for frame in script.replay(bounds)? {
        println!("{}", serde_json::to_string(&frame)?);
    }
    Ok(())
}
