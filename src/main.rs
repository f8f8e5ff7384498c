use clap::Parser;

use insta_login::app::settings::user_cache_dir;
use insta_login::cli::Cli;
use insta_login::{logging, runner, startup};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.dump_config {
        let mut settings = cli.load_settings()?;
        cli.apply_overrides(&mut settings);
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    // Without a cache directory the screen still runs, just unlogged.
    let _guard = match user_cache_dir() {
        Some(dir) => Some(logging::init_logging(&dir, cli.log_level.as_deref())?),
        None => None,
    };

    let app = startup::build_app(&cli);
    runner::run_app(app)?;
    Ok(())
}
