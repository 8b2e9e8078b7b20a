use crate::log::error::LogError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// JSON 缩进
const INDENT: &[u8] = b"    ";

/// 美化 JSON 文本（4 空格缩进）
///
/// 只处理以 `{` 或 `[` 开头的文本，其余文本原样返回；
/// 解析失败时返回错误，由调用方决定是否原样输出。
pub fn pretty_json(text: &str) -> Result<String, LogError> {
    let trimmed = text.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return Ok(text.to_string());
    }

    let value: Value = serde_json::from_str(text)?;

    let mut buf = Vec::with_capacity(text.len() * 2);
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| LogError::Malformed(e.to_string()))
}
