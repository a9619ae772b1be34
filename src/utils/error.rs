use crate::schema::FieldIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("{schema} schema validation failed: {}", join_issues(.issues))]
    SchemaValidationError {
        schema: &'static str,
        issues: Vec<FieldIssue>,
    },

    #[error("Validation failure: {message}")]
    ValidationFailure { message: String },

    #[error("Failed to construct {class} object: {message}")]
    ObjectConstructionError { class: &'static str, message: String },
}

impl ConvertError {
    pub fn construction(class: &'static str, message: impl Into<String>) -> Self {
        ConvertError::ObjectConstructionError {
            class,
            message: message.into(),
        }
    }

    /// 輸入資料本身的問題（缺欄位、型別錯誤等）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConvertError::MissingFieldError { .. }
                | ConvertError::SchemaValidationError { .. }
                | ConvertError::ValidationFailure { .. }
        )
    }

    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("無法讀寫檔案: {}", e),
            ConvertError::SerializationError(e) => format!("輸入檔不是有效的 JSON: {}", e),
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                format!("設定錯誤: {}", self)
            }
            ConvertError::MissingFieldError { field } => format!("建築資料缺少必要欄位: {}", field),
            _ => self.to_string(),
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ConvertError>;
