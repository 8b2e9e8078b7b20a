use crate::log::appender::LogAppender;
use crate::log::error::LogError;
use crate::log::formatter::{BOTTOM_BORDER, LEFT_BORDER, TOP_BORDER};
use crate::log::log_record::LogLevel;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 单次终端输出的最大长度（字符数），超出部分分段输出
pub const MAX_LEN: usize = 4000;

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 输出目标
    pub target: Target,

    /// 是否给级别着色
    #[default = false]
    pub colored: bool,
}

/// 终端输出器
///
/// 每一行输出为 `<级别字母>/<标签>: <内容>`
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }

    fn write_lines<W: Write>(
        &self,
        out: &mut W,
        level: LogLevel,
        tag: &str,
        msg: &str,
    ) -> io::Result<()> {
        let prefix = if self.config.colored {
            get_colored_level(level).to_string()
        } else {
            level.as_char().to_string()
        };

        if msg.is_empty() {
            writeln!(out, "{}/{}: ", prefix, tag)?;
        }
        for line in msg.lines() {
            writeln!(out, "{}/{}: {}", prefix, tag, line)?;
        }
        out.flush()
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&self, level: LogLevel, tag: &str, msg: &str) -> Result<(), LogError> {
        let result = match self.config.target {
            Target::Stdout => self.write_lines(&mut io::stdout().lock(), level, tag, msg),
            Target::Stderr => self.write_lines(&mut io::stderr().lock(), level, tag, msg),
        };
        result.map_err(LogError::Console)
    }

    fn flush(&self) -> Result<(), LogError> {
        let result = match self.config.target {
            Target::Stdout => io::stdout().flush(),
            Target::Stderr => io::stderr().flush(),
        };
        result.map_err(LogError::Console)
    }
}

impl From<ConsoleAppenderConfig> for ConsoleAppender {
    fn from(config: ConsoleAppenderConfig) -> Self {
        ConsoleAppender::new(config)
    }
}

fn get_colored_level(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Verbose => "\u{1b}[37;2mV\u{1b}[0m", // 白色+dimmed
        LogLevel::Debug => "\u{1b}[36mD\u{1b}[0m",     // 青色
        LogLevel::Info => "\u{1b}[32mI\u{1b}[0m",      // 绿色
        LogLevel::Warn => "\u{1b}[33mW\u{1b}[0m",      // 黄色
        LogLevel::Error => "\u{1b}[31mE\u{1b}[0m",     // 红色
        LogLevel::Assert => "\u{1b}[35;1mA\u{1b}[0m",  // 品红+加粗
    }
}

/// 按 [`MAX_LEN`] 个字符切分，最后一段可以更短
pub fn split_chunks(msg: &str) -> Vec<&str> {
    let mut chunks = Vec::with_capacity(msg.len() / MAX_LEN + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in msg.char_indices() {
        if count == MAX_LEN {
            chunks.push(&msg[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&msg[start..]);

    chunks
}

/// 输出一条完整日志
///
/// 加边框时先输出顶部边框、最后输出底部边框，各自单独一次输出；
/// 超长内容分段输出，除第一段外每段重新加上左边框。
pub fn print_chunked(
    appender: &dyn LogAppender,
    level: LogLevel,
    tag: &str,
    msg: &str,
    show_border: bool,
) -> Result<(), LogError> {
    if show_border {
        appender.append(level, tag, TOP_BORDER)?;
    }

    for (i, chunk) in split_chunks(msg).into_iter().enumerate() {
        if i > 0 && show_border {
            appender.append(level, tag, &format!("{}{}", LEFT_BORDER, chunk))?;
        } else {
            appender.append(level, tag, chunk)?;
        }
    }

    if show_border {
        appender.append(level, tag, BOTTOM_BORDER)?;
    }
    Ok(())
}
