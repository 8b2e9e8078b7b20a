use crate::log::error::LogError;
use quick_xml::events::{BytesDecl, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

/// 输入没有声明时补上的 XML 声明
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// 美化 XML 文本（4 空格缩进）
///
/// 输出总是以 XML 声明开头，声明的第一个 `>` 之后紧跟换行。
/// 没有任何元素、有多个根元素、标签不配对或解析失败时返回错误。
pub fn pretty_xml(text: &str) -> Result<String, LogError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut writer = Writer::new_with_indent(Vec::with_capacity(text.len() * 2), b' ', 4);
    let mut declared = false;
    let mut depth = 0usize;
    let mut elements = 0usize;
    let mut roots = 0usize;

    loop {
        let event = reader.read_event()?;
        if matches!(event, Event::Eof) {
            break;
        }

        if !declared && !matches!(event, Event::Decl(_)) {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        declared = true;

        if matches!(event, Event::Start(_) | Event::Empty(_)) && depth == 0 {
            roots += 1;
            if roots > 1 {
                return Err(LogError::Malformed("multiple root elements".to_string()));
            }
        }

        match &event {
            Event::Start(_) => {
                depth += 1;
                elements += 1;
            }
            Event::Empty(_) => elements += 1,
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| LogError::Malformed("unexpected closing tag".to_string()))?;
            }
            _ => {}
        }

        writer.write_event(event)?;
    }

    if elements == 0 {
        return Err(LogError::Malformed("no element found".to_string()));
    }
    if depth != 0 {
        return Err(LogError::Malformed("unclosed element".to_string()));
    }

    let pretty = String::from_utf8(writer.into_inner())
        .map_err(|e| LogError::Malformed(e.to_string()))?;

    Ok(break_after_declaration(pretty))
}

/// 确保第一个 `>` 之后是换行
fn break_after_declaration(mut xml: String) -> String {
    if let Some(pos) = xml.find('>') {
        if !xml[pos + 1..].starts_with('\n') {
            xml.insert(pos + 1, '\n');
        }
    }
    xml
}
