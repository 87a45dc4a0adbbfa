use std::path::PathBuf;

use clap::Parser;

/// Headless driver for the corona sun-and-rings animation.
#[derive(Parser, Debug)]
#[command(name = "corona", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `corona=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of ticks to run.
    #[arg(short = 'n', long, default_value_t = 600)]
    pub frames: u64,

    /// Ring seed override.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pace ticks at the configured frame rate instead of running flat out.
    #[arg(long)]
    pub realtime: bool,

    /// Write the final frame (ring buffers + sun uniforms) as JSON.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write the documented default config file and exit.
    #[arg(long)]
    pub init_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["corona"]);
        assert_eq!(args.frames, 600);
        assert!(args.config.is_none());
        assert!(!args.realtime);
        assert!(!args.print_config);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "corona",
            "--config",
            "/tmp/c.toml",
            "-n",
            "10",
            "--seed",
            "5",
            "--snapshot",
            "out.json",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.frames, 10);
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.snapshot, Some(PathBuf::from("out.json")));
    }
}
