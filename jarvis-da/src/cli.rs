//! Command-line arguments
//!
//! Each argument can also come from an environment variable; a value given
//! on the command line wins over the environment, and both win over the
//! TOML file.

use clap::Parser;
use jarvis_common::config::Overrides;
use std::path::PathBuf;

/// Command-line arguments for jarvis-da
#[derive(Parser, Debug)]
#[command(name = "jarvis-da")]
#[command(about = "Jarvis Design Agent suggestion service")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Interface to bind
    #[arg(long, env = "JARVIS_HOST")]
    pub host: Option<String>,

    /// TOML configuration file
    #[arg(short, long, env = "JARVIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, env = "JARVIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Store URL reported by the diagnostics endpoint
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Store name reported by the diagnostics endpoint
    #[arg(long, env = "DATABASE_NAME")]
    pub database_name: Option<String>,
}

impl Args {
    /// Values to layer over the TOML configuration
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            database_url: self.database_url.clone(),
            database_name: self.database_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [
            "PORT",
            "JARVIS_HOST",
            "JARVIS_CONFIG",
            "JARVIS_LOG_LEVEL",
            "DATABASE_URL",
            "DATABASE_NAME",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_arguments() {
        clear_env();
        let args = Args::try_parse_from(["jarvis-da"]).unwrap();
        assert!(args.port.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    #[serial]
    fn test_env_port() {
        clear_env();
        env::set_var("PORT", "8123");
        let args = Args::try_parse_from(["jarvis-da"]).unwrap();
        env::remove_var("PORT");
        assert_eq!(args.port, Some(8123));
    }

    #[test]
    #[serial]
    fn test_cli_beats_env() {
        clear_env();
        env::set_var("PORT", "8123");
        let args = Args::try_parse_from(["jarvis-da", "--port", "9001"]).unwrap();
        env::remove_var("PORT");
        assert_eq!(args.port, Some(9001));
    }

    #[test]
    #[serial]
    fn test_overrides_carry_store_settings() {
        clear_env();
        let args = Args::try_parse_from([
            "jarvis-da",
            "--database-url",
            "mongodb://db",
            "--host",
            "127.0.0.1",
        ])
        .unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.database_url.as_deref(), Some("mongodb://db"));
        assert_eq!(overrides.host.as_deref(), Some("127.0.0.1"));
        assert!(overrides.database_name.is_none());
    }
}
