//! Command-line interface for caro.

use clap::Parser;
use std::path::PathBuf;

/// Caro - terminal tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "caro")]
#[command(about = "Terminal tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, default_value = "caro.toml")]
    pub config: PathBuf,

    /// File that receives log output (the terminal is taken by the board)
    #[arg(long, default_value = "caro.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["caro"]);
        assert_eq!(cli.config, PathBuf::from("caro.toml"));
        assert_eq!(cli.log_file, PathBuf::from("caro.log"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["caro", "-c", "/tmp/x.toml", "--log-file", "/tmp/x.log"]);
        assert_eq!(cli.config, PathBuf::from("/tmp/x.toml"));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/x.log"));
    }
}
