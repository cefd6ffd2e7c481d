use crate::domain::model::{ReportFormat, RoomSurvey, SupplyParams};
use crate::domain::ports::JobProvider;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A survey job file: one room survey plus what to do with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyJob {
    pub job: JobMeta,
    pub room: RoomSurvey,
    pub supply: Option<SupplyParams>,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_formats")]
    pub formats: Vec<ReportFormat>,
    #[serde(default = "ReportConfig::default_output_path")]
    pub output_path: String,
    pub file_stem: Option<String>,
}

impl ReportConfig {
    fn default_formats() -> Vec<ReportFormat> {
        vec![ReportFormat::Text]
    }

    fn default_output_path() -> String {
        "./reports".to_string()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            formats: Self::default_formats(),
            output_path: Self::default_output_path(),
            file_stem: None,
        }
    }
}

impl SurveyJob {
    /// Loads a job from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a job from a TOML string, after environment-variable
    /// substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AdvisorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces ${VAR_NAME} occurrences with the environment value, leaving
    /// unset variables untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_path("report.output_path", &self.report.output_path)?;

        if self.report.formats.is_empty() {
            return Err(AdvisorError::InvalidConfigValueError {
                field: "report.formats".to_string(),
                value: "[]".to_string(),
                reason: "At least one output format is required".to_string(),
            });
        }

        if let Some(stem) = &self.report.file_stem {
            validate_non_empty_string("report.file_stem", stem)?;
        }

        // Dimension and wattage checks live with the estimator, which every
        // consumer has to go through; only job-shape concerns are here.
        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.report.output_path
    }
}

impl JobProvider for SurveyJob {
    fn job_name(&self) -> &str {
        &self.job.name
    }

    fn survey(&self) -> &RoomSurvey {
        &self.room
    }

    fn supply(&self) -> Option<&SupplyParams> {
        self.supply.as_ref()
    }

    fn formats(&self) -> &[ReportFormat] {
        &self.report.formats
    }

    fn file_stem(&self) -> &str {
        self.report
            .file_stem
            .as_deref()
            .unwrap_or("survey_advisory")
    }
}

impl Validate for SurveyJob {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
