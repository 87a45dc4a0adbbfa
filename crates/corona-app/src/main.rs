mod cli;
mod runner;

use corona_common::{ConfigError, CoronaError};
use corona_config::{toml_loader, CoronaConfig};
use corona_scene::Scene;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the CLI/config directive; an unparsable directive
/// falls back to `corona=info`.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("corona=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Write the documented default config to the override path, or the
/// platform default. An existing file is left untouched.
fn init_config(args: &cli::Args) -> Result<(), CoronaError> {
    let path = toml_loader::resolve_config_path(args.config.as_deref())?;
    toml_loader::create_default_config(&path, false)?;
    println!("{}", path.display());
    Ok(())
}

fn run(args: &cli::Args, config: &CoronaConfig) -> Result<(), CoronaError> {
    let mut scene = match args.seed {
        Some(seed) => Scene::with_seed(config, seed)?,
        None => Scene::from_config(config)?,
    };
    tracing::info!(
        seed = scene.seed(),
        rings = scene.rings().len(),
        "Running {} frames{}",
        args.frames,
        if args.realtime { " (realtime)" } else { "" }
    );

    runner::run(&mut scene, args.frames, &config.performance, args.realtime);

    if let Some(path) = &args.snapshot {
        runner::write_snapshot(path, &scene.snapshot())?;
    }
    Ok(())
}

fn main() {
    let args = cli::parse();

    // Config is read before the subscriber exists so its log level can
    // seed the filter; load failures are reported once logging is up.
    let loaded: Result<CoronaConfig, ConfigError> = if args.init_config {
        Ok(CoronaConfig::default())
    } else {
        corona_config::load_config(args.config.as_deref())
    };

    let directive = args.log_level.clone().unwrap_or_else(|| {
        let level = loaded
            .as_ref()
            .map(|c| c.logging.level.as_filter())
            .unwrap_or("info");
        format!("corona={level}")
    });
    init_logging(&directive);

    tracing::info!("Corona v{} starting...", env!("CARGO_PKG_VERSION"));

    if args.init_config {
        if let Err(e) = init_config(&args) {
            tracing::error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CoronaConfig::default()
    });

    if args.print_config {
        println!("{}", corona_config::config_to_json(&config));
        return;
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
