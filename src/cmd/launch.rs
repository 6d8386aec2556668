use clap::Parser;
use horserace::config::HorseRaceConfig;
use horserace::input::InputEncoding;
use horserace::launcher::RaceLauncher;
use horserace::output::{format_race, format_started};
use horserace::providers::starter::SwfStarter;
use horserace::race::resolve_args;
use indicatif::ProgressStyle;
use snafu::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Instrument;
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Invalid launch parameters: {source}"))]
    InvalidParameters { source: horserace::race::Error },

    #[snafu(display("Configuration error: {source}"))]
    Config { source: config::ConfigError },

    #[snafu(display("{source}"))]
    Launch { source: horserace::launcher::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Parser, Debug)]
pub struct LaunchArgs {
    /// Horse names followed by the number of laps. With a single value it is
    /// the lap count for the default roster; with none the defaults are used.
    #[arg(value_name = "HORSES... LAPS", allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Configuration file (YAML)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SWF domain the race workflow is registered in
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Workflow type name
    #[arg(long, value_name = "NAME")]
    pub workflow_type: Option<String>,

    /// Workflow type version
    #[arg(long, value_name = "VERSION")]
    pub workflow_version: Option<String>,

    /// Task list to schedule the first decision task on
    #[arg(long, value_name = "TASK_LIST")]
    pub task_list: Option<String>,

    /// AWS region
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// SWF endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Workflow id to start (a random id is generated when omitted)
    #[arg(long, value_name = "ID")]
    pub workflow_id: Option<String>,

    /// Workflow input encoding
    #[arg(long, value_enum, value_name = "ENCODING")]
    pub encoding: Option<InputEncoding>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl LaunchArgs {
    /// Merge CLI arguments with config file settings
    /// CLI arguments take precedence over config file settings
    #[must_use]
    pub fn merge_with_config(&self, config: HorseRaceConfig) -> HorseRaceConfig {
        let mut workflow_type = config.workflow_type;
        if let Some(name) = &self.workflow_type {
            workflow_type.name.clone_from(name);
        }
        if let Some(version) = &self.workflow_version {
            workflow_type.version.clone_from(version);
        }

        HorseRaceConfig {
            domain: self.domain.clone().unwrap_or(config.domain),
            workflow_type,
            task_list: self.task_list.clone().or(config.task_list),
            execution_start_to_close_timeout: config.execution_start_to_close_timeout,
            task_start_to_close_timeout: config.task_start_to_close_timeout,
            region: self.region.clone().or(config.region),
            endpoint_url: self.endpoint_url.clone().or(config.endpoint_url),
            input_encoding: self.encoding.unwrap_or(config.input_encoding),
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Resolve the race, start it on SWF and report the execution
///
/// Parameters are resolved before any configuration or network access, so a
/// bad lap count never reaches the service.
pub async fn handle_launch(args: LaunchArgs) -> Result<()> {
    let params = resolve_args(&args.args).context(InvalidParametersSnafu)?;

    let config = HorseRaceConfig::load(args.config.as_deref()).context(ConfigSnafu)?;
    let config = args.merge_with_config(config);
    tracing::debug!(?config, "Loaded configuration");

    let settings = config.swf_settings();
    format_race(&params, &settings.domain, &settings.workflow_type);

    let starter = Arc::new(SwfStarter::from_env(settings).await);
    let mut launcher = RaceLauncher::new(starter);
    if let Some(workflow_id) = &args.workflow_id {
        launcher = launcher.with_workflow_id(workflow_id.clone());
    }

    let span = tracing::info_span!("dispatch");
    span.pb_set_style(&spinner_style());
    span.pb_set_message("Requesting workflow start");

    let handle = launcher
        .dispatch(&params)
        .instrument(span)
        .await
        .context(LaunchSnafu)?;

    format_started(&handle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_values_keep_order_and_negative_numbers() {
        let args = LaunchArgs::try_parse_from(["horserace", "Alpha", "Beta", "-3"]).unwrap();
        assert_eq!(args.args, ["Alpha", "Beta", "-3"]);
    }

    #[test]
    fn test_flags_override_config() {
        let args = LaunchArgs::try_parse_from([
            "horserace",
            "--domain",
            "Racing",
            "--workflow-version",
            "2.0",
            "--encoding",
            "json",
            "4",
        ])
        .unwrap();

        let merged = args.merge_with_config(HorseRaceConfig::default());
        assert_eq!(merged.domain, "Racing");
        assert_eq!(merged.workflow_type.name, "RaceFlow.go");
        assert_eq!(merged.workflow_type.version, "2.0");
        assert_eq!(merged.input_encoding, InputEncoding::Json);
        assert_eq!(args.args, ["4"]);
    }

    #[test]
    fn test_config_used_when_flags_absent() {
        let args = LaunchArgs::try_parse_from(["horserace"]).unwrap();
        let config = HorseRaceConfig {
            region: Some("eu-west-1".to_string()),
            ..HorseRaceConfig::default()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.domain, "Demo");
        assert_eq!(merged.region.as_deref(), Some("eu-west-1"));
        assert!(args.args.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_laps_fail_before_dispatch() {
        let args = LaunchArgs::try_parse_from(["horserace", "Alpha", "fast"]).unwrap();
        let result = handle_launch(args).await;
        assert!(matches!(result, Err(Error::InvalidParameters { .. })));
    }
}
