use crate::log::formatter::json::pretty_json;
use crate::log::formatter::xml::pretty_xml;
use crate::log::log_record::{LogKind, LogValue};
use std::fmt::Write;

/// 没有日志内容时的提示
pub const NULL_TIPS: &str = "Log with null object.";

/// 缺失值的文本
pub const NULL: &str = "null";

const ARGS: &str = "args";

/// 渲染日志正文
///
/// - 没有内容：[`NULL_TIPS`]
/// - 单个值：值的文本；Json/Xml 类别先尝试美化，失败时原样输出
/// - 多个值：每行一个 `args[i] = value`
pub fn render_body(kind: LogKind, payload: &[LogValue]) -> String {
    match payload {
        [] => NULL_TIPS.to_string(),
        [value] => {
            let text = value_text(value);
            match kind {
                LogKind::Json => pretty_json(&text).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "json pretty print failed, passthrough");
                    text
                }),
                LogKind::Xml => pretty_xml(&text).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "xml pretty print failed, passthrough");
                    text
                }),
                _ => text,
            }
        }
        values => {
            let mut body = String::with_capacity(values.len() * 16);
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    body.push('\n');
                }
                let _ = write!(body, "{}[{}] = {}", ARGS, i, value_text(value));
            }
            body
        }
    }
}

fn value_text(value: &LogValue) -> String {
    match value {
        LogValue::Null => NULL.to_string(),
        other => other.to_string(),
    }
}
