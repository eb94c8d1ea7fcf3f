use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::facts::{Client, Collector, PAGE_SIZE, Paginator, Username};
use crate::profile::{NOT_FOUND_ASSET, Profile, ProfileError, get_profile};
use crate::reports::{generate_console, generate_json, generate_json_error};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::io::Write;

/// How the profile is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    Console,

    /// The profile as a JSON object
    Json,
}

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// GitHub username to profile
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "console")]
    pub format: OutputFormat,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `devlevel.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Base URL of the GitHub API, overriding the configuration file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Build the profile of one user and render it to the host's output
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the client cannot be created, or
/// GitHub fails in a way that cannot be rendered in the requested format
pub async fn process_profile<H: Host>(host: &mut H, args: &ProfileArgs) -> Result<()> {
    init_logging(args.log_level);

    let username = Username::new(args.username.as_str())?;
    let mut config = Config::load(Utf8Path::new("."), args.config.as_deref())?;
    if let Some(api_url) = &args.api_url {
        config.api_url.clone_from(api_url);
        config.validate()?;
    }

    let client = Client::new(args.github_token.as_deref(), &config.api_url, config.request_timeout, &config.user_agent)?;
    let collector = Collector::new(client, Paginator::new(PAGE_SIZE, config.max_pages));

    match get_profile(&collector, &username, Utc::now()).await {
        Ok(profile) => render(host, &profile, args),
        Err(e) => render_failure(host, e, args.format),
    }
}

fn render<H: Host>(host: &mut H, profile: &Profile, args: &ProfileArgs) -> Result<()> {
    let mut output = String::new();
    match args.format {
        OutputFormat::Console => generate_console(profile, args.color.use_colors(), &mut output)?,
        OutputFormat::Json => generate_json(profile, &mut output)?,
    }

    let _ = write!(host.output(), "{output}");
    Ok(())
}

fn render_failure<H: Host>(host: &mut H, error: ProfileError, format: OutputFormat) -> Result<()> {
    match (format, error) {
        (OutputFormat::Json, error) => {
            let mut output = String::new();
            generate_json_error(&error, &mut output)?;
            let _ = write!(host.output(), "{output}");
        }
        (OutputFormat::Console, ProfileError::Upstream(e)) => return Err(e),
        (OutputFormat::Console, error) => {
            if let Some(message) = error.user_message() {
                let _ = writeln!(host.error(), "{message}");
            }
            let _ = writeln!(host.error(), "{NOT_FOUND_ASSET}");
        }
    }

    host.exit(1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::profile::NOT_FOUND_MESSAGE;
    use ohno::app_err;

    fn args(username: &str) -> ProfileArgs {
        ProfileArgs {
            username: username.to_string(),
            format: OutputFormat::Console,
            color: ColorMode::Never,
            github_token: None,
            config: None,
            api_url: None,
            log_level: LogLevel::None,
        }
    }

    #[test]
    fn test_not_found_on_console() {
        let mut host = TestHost::new();
        render_failure(
            &mut host,
            ProfileError::NotFound {
                username: "ghost".to_string(),
            },
            OutputFormat::Console,
        )
        .unwrap();

        assert_eq!(host.exit_code, Some(1));
        assert!(host.output_buf.is_empty());
        assert_eq!(host.error_text(), format!("{NOT_FOUND_MESSAGE}\n{NOT_FOUND_ASSET}\n"));
    }

    #[test]
    fn test_not_found_as_json() {
        let mut host = TestHost::new();
        render_failure(
            &mut host,
            ProfileError::NotFound {
                username: "ghost".to_string(),
            },
            OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(host.exit_code, Some(1));
        let value: serde_json::Value = serde_json::from_str(&host.output_text()).unwrap();
        assert_eq!(value["error"], "GitHub User Not Found");
    }

    #[test]
    fn test_upstream_as_json() {
        let mut host = TestHost::new();
        render_failure(&mut host, ProfileError::Upstream(app_err!("socket closed")), OutputFormat::Json).unwrap();

        assert_eq!(host.exit_code, Some(1));
        let value: serde_json::Value = serde_json::from_str(&host.output_text()).unwrap();
        assert_eq!(value["error"], "GitHub API Error");
    }

    #[test]
    fn test_upstream_on_console_is_propagated() {
        let mut host = TestHost::new();
        let result = render_failure(&mut host, ProfileError::Upstream(app_err!("socket closed")), OutputFormat::Console);

        assert!(format!("{:#}", result.unwrap_err()).contains("socket closed"));
        assert_eq!(host.exit_code, None);
    }

    #[tokio::test]
    async fn test_blank_username_is_rejected() {
        let mut host = TestHost::new();
        let err = process_profile(&mut host, &args("   ")).await.unwrap_err();
        assert!(err.to_string().contains("a username is required"));
    }

    #[tokio::test]
    async fn test_api_url_override_is_validated() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Utf8PathBuf::try_from(tmp.path().join("devlevel.toml")).unwrap();
        Config::save_default(&config).unwrap();

        let mut host = TestHost::new();
        let args = ProfileArgs {
            config: Some(config),
            api_url: Some("ftp://ghe.example.com".to_string()),
            ..args("octocat")
        };

        let err = process_profile(&mut host, &args).await.unwrap_err();
        assert!(format!("{err:#}").contains("api_url must use http or https, got 'ftp'"));
        assert!(host.output_buf.is_empty());
    }
}
