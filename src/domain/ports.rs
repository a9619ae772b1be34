use crate::domain::model::ConversionState;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// 實際寫入位置，用於回報
    fn resolve(&self, path: &str) -> String;
}

/// 將一類輸入轉成 IDF 物件的轉換器
///
/// `convert` 不回傳錯誤：失敗一律記錄在計數中，回傳值是這次呼叫造成的增量。
pub trait Converter {
    fn name(&self) -> &str;
    fn convert(&mut self) -> ConversionState;
    fn state(&self) -> ConversionState;
}

pub trait ConfigProvider {
    fn idf_version(&self) -> &str;
    fn output_file(&self) -> &str;
}
