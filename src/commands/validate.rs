use super::Host;
use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `devlevel.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    match Config::load_with_source(Utf8Path::new("."), args.config.as_deref()) {
        Ok((_, source)) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = source {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};

    fn write_config(name: &str, content: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = Utf8PathBuf::try_from(temp_dir.path().join(name)).expect("temp path should be UTF-8");
        std::fs::write(&config_path, content).expect("Failed to write test config");
        (temp_dir, config_path)
    }

    #[test]
    fn test_default_config_is_valid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = Utf8PathBuf::try_from(temp_dir.path().join("devlevel.toml")).expect("temp path should be UTF-8");

        let mut init_host = TestHost::new();
        let init_args = InitArgs {
            output: Some(config_path.clone()),
        };
        init_config(&mut init_host, &init_args).expect("init_config should succeed");

        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(config_path.clone()),
        };
        let result = validate_config(&mut host, &args);

        assert!(result.is_ok(), "Default configuration should validate successfully: {result:?}");
        assert!(host.output_text().contains(&format!("Config file: {config_path}")));
        assert_eq!(host.exit_code, None);
    }

    #[test]
    fn test_invalid_toml_syntax() {
        let (_temp_dir, config_path) = write_config("invalid_syntax.toml", "max_pages = [\n");

        let mut host = TestHost::new();
        let args = ValidateArgs { config: Some(config_path) };
        let result = validate_config(&mut host, &args);

        assert!(result.is_err(), "Invalid TOML syntax should fail validation");
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_text().contains("Configuration validation failed"));
    }

    #[test]
    fn test_unknown_field() {
        let (_temp_dir, config_path) = write_config("unknown_field.toml", "max_pages = 5\nunknown_field = \"value\"\n");

        let mut host = TestHost::new();
        let args = ValidateArgs { config: Some(config_path) };
        let result = validate_config(&mut host, &args);

        assert!(result.is_err(), "Unknown field should fail validation");
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    fn test_invalid_duration_format() {
        let (_temp_dir, config_path) = write_config("invalid_duration.toml", "request_timeout = \"not a valid duration\"\n");

        let mut host = TestHost::new();
        let args = ValidateArgs { config: Some(config_path) };
        let result = validate_config(&mut host, &args);

        assert!(result.is_err(), "Invalid duration format should fail validation");
    }

    #[test]
    fn test_invalid_api_url() {
        let (_temp_dir, config_path) = write_config("invalid_url.toml", "api_url = \"api.github.com\"\n");

        let mut host = TestHost::new();
        let args = ValidateArgs { config: Some(config_path) };
        let result = validate_config(&mut host, &args);

        assert!(result.is_err(), "A relative API URL should fail validation");
        assert!(host.error_text().contains("api_url"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let (_temp_dir, config_path) = write_config("empty.toml", "# Empty config file\n");

        let mut host = TestHost::new();
        let args = ValidateArgs { config: Some(config_path) };
        let result = validate_config(&mut host, &args);

        assert!(result.is_ok(), "Empty config should be valid (uses defaults)");
    }
}
