use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
    pub proposal: ProposalConfig,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Settings for the optional transcript analysis service. Disabled by
/// default; quoting never depends on it.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub api_key: Option<SecretString>,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ProposalConfig {
    pub output_dir: PathBuf,
    pub filename_prefix: String,
    pub template_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub analysis_endpoint: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub filename_prefix: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
            analysis: AnalysisConfig {
                enabled: false,
                endpoint: None,
                api_key: None,
                timeout_secs: 30,
            },
            proposal: ProposalConfig {
                output_dir: PathBuf::from("."),
                filename_prefix: "BlackFriday_Factorial".to_string(),
                template_dir: None,
            },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("proposta.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }

        if let Some(analysis) = patch.analysis {
            if let Some(enabled) = analysis.enabled {
                self.analysis.enabled = enabled;
            }
            if let Some(endpoint) = analysis.endpoint {
                self.analysis.endpoint = Some(endpoint);
            }
            if let Some(api_key_value) = analysis.api_key {
                self.analysis.api_key = Some(api_key_value.into());
            }
            if let Some(timeout_secs) = analysis.timeout_secs {
                self.analysis.timeout_secs = timeout_secs;
            }
        }

        if let Some(proposal) = patch.proposal {
            if let Some(output_dir) = proposal.output_dir {
                self.proposal.output_dir = PathBuf::from(output_dir);
            }
            if let Some(filename_prefix) = proposal.filename_prefix {
                self.proposal.filename_prefix = filename_prefix;
            }
            if let Some(template_dir) = proposal.template_dir {
                self.proposal.template_dir = Some(PathBuf::from(template_dir));
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let log_level =
            read_env("PROPOSTA_LOGGING_LEVEL").or_else(|| read_env("PROPOSTA_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("PROPOSTA_LOGGING_FORMAT").or_else(|| read_env("PROPOSTA_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        if let Some(value) = read_env("PROPOSTA_ANALYSIS_ENABLED") {
            self.analysis.enabled = parse_bool("PROPOSTA_ANALYSIS_ENABLED", &value)?;
        }
        if let Some(value) = read_env("PROPOSTA_ANALYSIS_ENDPOINT") {
            self.analysis.endpoint = Some(value);
        }
        if let Some(value) = read_env("PROPOSTA_ANALYSIS_API_KEY") {
            self.analysis.api_key = Some(value.into());
        }
        if let Some(value) = read_env("PROPOSTA_ANALYSIS_TIMEOUT_SECS") {
            self.analysis.timeout_secs = parse_u64("PROPOSTA_ANALYSIS_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = read_env("PROPOSTA_PROPOSAL_OUTPUT_DIR") {
            self.proposal.output_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("PROPOSTA_PROPOSAL_FILENAME_PREFIX") {
            self.proposal.filename_prefix = value;
        }
        if let Some(value) = read_env("PROPOSTA_PROPOSAL_TEMPLATE_DIR") {
            self.proposal.template_dir = Some(PathBuf::from(value));
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(endpoint) = overrides.analysis_endpoint {
            self.analysis.endpoint = Some(endpoint);
        }
        if let Some(output_dir) = overrides.output_dir {
            self.proposal.output_dir = output_dir;
        }
        if let Some(filename_prefix) = overrides.filename_prefix {
            self.proposal.filename_prefix = filename_prefix;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_logging(&self.logging)?;
        validate_analysis(&self.analysis)?;
        validate_proposal(&self.proposal)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("proposta.toml"), PathBuf::from("config/proposta.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn validate_analysis(analysis: &AnalysisConfig) -> Result<(), ConfigError> {
    if !analysis.enabled {
        return Ok(());
    }

    let endpoint = analysis.endpoint.as_deref().unwrap_or("").trim().to_string();
    if endpoint.is_empty() {
        return Err(ConfigError::Validation(
            "analysis.endpoint is required when analysis.enabled is true".to_string(),
        ));
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ConfigError::Validation(
            "analysis.endpoint must start with http:// or https://".to_string(),
        ));
    }

    let missing_key = analysis
        .api_key
        .as_ref()
        .map(|value| value.expose_secret().trim().is_empty())
        .unwrap_or(true);
    if missing_key {
        return Err(ConfigError::Validation(
            "analysis.api_key is required when analysis.enabled is true".to_string(),
        ));
    }

    if analysis.timeout_secs == 0 || analysis.timeout_secs > 300 {
        return Err(ConfigError::Validation(
            "analysis.timeout_secs must be in range 1..=300".to_string(),
        ));
    }

    Ok(())
}

fn validate_proposal(proposal: &ProposalConfig) -> Result<(), ConfigError> {
    let prefix = proposal.filename_prefix.trim();
    if prefix.is_empty() {
        return Err(ConfigError::Validation(
            "proposal.filename_prefix must not be empty".to_string(),
        ));
    }
    if prefix.chars().any(|ch| ch.is_whitespace() || ch == '/' || ch == '\\') {
        return Err(ConfigError::Validation(
            "proposal.filename_prefix must not contain whitespace or path separators".to_string(),
        ));
    }

    if proposal.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "proposal.output_dir must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    logging: Option<LoggingPatch>,
    analysis: Option<AnalysisPatch>,
    proposal: Option<ProposalPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalysisPatch {
    enabled: Option<bool>,
    endpoint: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ProposalPatch {
    output_dir: Option<String>,
    filename_prefix: Option<String>,
    template_dir: Option<String>,
}
