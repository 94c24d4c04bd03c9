use anyhow::Context;
use hir_dashboard::{cli, run, DashboardConfig, LogFormat};
use hir_records::{load_path, AssetDirectory};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let matches = cli::command().get_matches();

    let config = DashboardConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load configuration")?
        .with_overrides(
            matches.get_one::<PathBuf>("data").cloned(),
            matches.get_one::<PathBuf>("assets").cloned(),
        );

    init_tracing(&config)?;

    info!(
        data = %config.data_path.display(),
        assets = %config.assets_dir.display(),
        "Starting housing-dashboard"
    );

    let catalog = AssetDirectory::new(config.assets_dir.clone());
    let store = load_path(&config.data_path, &catalog)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;

    let output = run(&matches, &store, &config)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn init_tracing(config: &DashboardConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
    Ok(())
}
