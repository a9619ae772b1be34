use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_idf_version, validate_non_empty_string, validate_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_IDF_VERSION: &str = "9.4";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub idf: IdfConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdfConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> String {
    DEFAULT_IDF_VERSION.to_string()
}

fn default_output_dir() -> String {
    "./output".to_string()
}

fn default_output_file() -> String {
    "model.idf".to_string()
}

impl Default for IdfConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
        }
    }
}

impl ConvertConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_idf_version("idf.version", &self.idf.version)?;
        validate_path("idf.output_dir", &self.idf.output_dir)?;
        validate_non_empty_string("idf.output_file", &self.idf.output_file)?;
        validate_file_extension("idf.output_file", &self.idf.output_file, &["idf"])?;
        Ok(())
    }
}

impl ConfigProvider for ConvertConfig {
    fn idf_version(&self) -> &str {
        &self.idf.version
    }

    fn output_file(&self) -> &str {
        &self.idf.output_file
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
