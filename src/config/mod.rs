#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::{CollaboratorSpec, Credential};
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "seed.toml";
pub const DEFAULT_QUESTION: &str =
    "This will insert demo data (companies, users, technicians, work orders, comments) into the database. Continue?";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_validator")]
    pub validator: CollaboratorSpec,
    #[serde(default = "default_seeder")]
    pub seeder: CollaboratorSpec,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub question: Option<String>,
}

fn default_validator() -> CollaboratorSpec {
    CollaboratorSpec::new("python3", &["scripts/test_seed.py"])
}

fn default_seeder() -> CollaboratorSpec {
    CollaboratorSpec::new("python3", &["scripts/seed_database.py"])
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            validator: default_validator(),
            seeder: default_seeder(),
            prompt: PromptConfig::default(),
            credentials: Vec::new(),
        }
    }
}

impl SeedConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SeedError::config(format!(
                "cannot read '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given (it must exist); otherwise the default file if present,
    /// falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::debug!("Using config file {}", default_path.display());
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| SeedError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${DATABASE_URL})
    ///
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn question(&self) -> &str {
        self.prompt.question.as_deref().unwrap_or(DEFAULT_QUESTION)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_collaborator("validator", &self.validator)?;
        validate_collaborator("seeder", &self.seeder)?;

        for (i, credential) in self.credentials.iter().enumerate() {
            validate_non_empty_string(&format!("credentials[{}].username", i), &credential.username)?;
        }

        Ok(())
    }
}

fn validate_collaborator(name: &str, spec: &CollaboratorSpec) -> Result<()> {
    validate_non_empty_string(&format!("{}.program", name), &spec.program)?;
    if let Some(dir) = &spec.working_dir {
        validate_path(&format!("{}.working_dir", name), dir)?;
    }
    Ok(())
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
