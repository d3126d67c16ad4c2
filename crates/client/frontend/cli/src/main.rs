//! Terminal client entry point.
use anyhow::Result;
use mash_cli::{App, CliConfig, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?;
    let _log_guard = logging::init(config.log_dir.as_deref())?;

    App::new(config)?.run()
}
