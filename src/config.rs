use crate::input::InputEncoding;
use crate::providers::starter::SwfSettings;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration for horserace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorseRaceConfig {
    /// SWF domain the race workflow type is registered in
    #[serde(deserialize_with = "lenient_string")]
    pub domain: String,

    #[serde(default)]
    pub workflow_type: WorkflowTypeConfig,

    /// Task list override (defaults to the one registered with the workflow type)
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub task_list: Option<String>,

    /// Execution start-to-close timeout override, in seconds
    pub execution_start_to_close_timeout: Option<u64>,

    /// Decision task start-to-close timeout override, in seconds
    pub task_start_to_close_timeout: Option<u64>,

    /// AWS region override
    pub region: Option<String>,

    /// SWF endpoint override
    pub endpoint_url: Option<String>,

    /// How race parameters are encoded into the workflow input
    #[serde(default)]
    pub input_encoding: InputEncoding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowTypeConfig {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    /// Registered workflow type version. YAML reads an unquoted `2.0` as a
    /// number; it is kept as `"2.0"`, but leading zeros and trailing zeros
    /// beyond the first decimal are lost unless the value is quoted.
    #[serde(deserialize_with = "lenient_string")]
    pub version: String,
}

impl Default for WorkflowTypeConfig {
    fn default() -> Self {
        Self {
            name: "RaceFlow.go".to_string(),
            version: "1.0".to_string(),
        }
    }
}

impl Default for HorseRaceConfig {
    fn default() -> Self {
        Self {
            domain: "Demo".to_string(),
            workflow_type: WorkflowTypeConfig::default(),
            task_list: None,
            execution_start_to_close_timeout: None,
            task_start_to_close_timeout: None,
            region: None,
            endpoint_url: None,
            input_encoding: InputEncoding::Flow,
        }
    }
}

impl HorseRaceConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Command line arguments (highest priority, applied by the caller)
    /// 2. Environment variables (HORSERACE__*)
    /// 3. Explicit config file (`--config`)
    /// 4. Config file in the current directory (horserace.yaml)
    /// 5. Config file in the user's config directory (~/.config/horserace/horserace.yaml)
    /// 6. Defaults (lowest priority)
    pub fn load(explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let layers = ConfigLayers {
            user_file: PathBuf::from(home).join(".config/horserace/horserace"),
            local_file: PathBuf::from("horserace"),
            explicit: explicit.map(Path::to_path_buf),
            environment: None,
        };
        Self::load_layers(&layers)
    }

    fn load_layers(layers: &ConfigLayers) -> Result<Self, config::ConfigError> {
        let mut config_builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&HorseRaceConfig::default())?)
            // Add config file from user's config directory
            .add_source(
                config::File::with_name(&layers.user_file.to_string_lossy())
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            // Add config file from current directory
            .add_source(
                config::File::with_name(&layers.local_file.to_string_lossy())
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );

        if let Some(path) = &layers.explicit {
            config_builder = config_builder.add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Yaml)
                    .required(true),
            );
        }

        // Values stay strings; numeric fields are parsed during deserialization
        let config = config_builder
            .add_source(
                config::Environment::with_prefix("HORSERACE")
                    .separator("__")
                    .source(layers.environment.clone()),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Settings for the SWF starter
    #[must_use]
    pub fn swf_settings(&self) -> SwfSettings {
        SwfSettings {
            domain: self.domain.clone(),
            workflow_type: self.workflow_type.name.clone(),
            workflow_version: self.workflow_type.version.clone(),
            task_list: self.task_list.clone(),
            execution_start_to_close_timeout: self.execution_start_to_close_timeout,
            task_start_to_close_timeout: self.task_start_to_close_timeout,
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            input_encoding: self.input_encoding,
        }
    }
}

/// Config file locations (without extension) and the environment to read
struct ConfigLayers {
    user_file: PathBuf,
    local_file: PathBuf,
    explicit: Option<PathBuf>,
    /// `None` reads the process environment
    environment: Option<config::Map<String, String>>,
}

/// A string that YAML may have typed as a number
struct LenientString(String);

impl<'de> Deserialize<'de> for LenientString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = LenientString;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "a string or number")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(LenientString(v.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(LenientString(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(LenientString(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(LenientString(v.to_string()))
            }

            // Debug keeps the decimal point: 2.0 -> "2.0"
            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(LenientString(format!("{v:?}")))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    LenientString::deserialize(deserializer).map(|s| s.0)
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<LenientString>::deserialize(deserializer).map(|s| s.map(|s| s.0))
}
