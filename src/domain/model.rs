use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::AddAssign;

/// 使用者提供的原始輸入（未經型別化的 key/value）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只接受 JSON 物件；其他型別回傳 `None`
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        value.as_object().map(|obj| Record {
            data: obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        })
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// 輸入 JSON 檔的結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub user_input: Record,
    #[serde(default)]
    pub zones: Vec<serde_json::Value>,
}

/// 單一轉換器的成功/失敗計數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionState {
    pub success: u32,
    pub failed: u32,
}

impl ConversionState {
    pub fn one_success() -> Self {
        Self {
            success: 1,
            failed: 0,
        }
    }

    pub fn one_failure() -> Self {
        Self {
            success: 0,
            failed: 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.success + self.failed
    }
}

impl AddAssign for ConversionState {
    fn add_assign(&mut self, rhs: Self) {
        self.success += rhs.success;
        self.failed += rhs.failed;
    }
}

/// 整次執行的彙總結果，由 pipeline 逐次累加
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub converters: BTreeMap<String, ConversionState>,
}

impl ConversionReport {
    pub fn record(&mut self, converter: &str, delta: ConversionState) {
        *self.converters.entry(converter.to_string()).or_default() += delta;
    }

    pub fn get(&self, converter: &str) -> ConversionState {
        self.converters.get(converter).copied().unwrap_or_default()
    }

    pub fn total(&self) -> ConversionState {
        let mut total = ConversionState::default();
        for state in self.converters.values() {
            total += *state;
        }
        total
    }

    pub fn has_failures(&self) -> bool {
        self.total().failed > 0
    }
}
