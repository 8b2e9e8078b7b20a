use crate::log::appender::{
    print_chunked, ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig,
    LogAppender,
};
use crate::log::caller::CallerContext;
use crate::log::config::{LogConfig, LogConfigBuilder, LogSettings};
use crate::log::error::LogError;
use crate::log::formatter::{frame, render_body};
use crate::log::log_record::{LogKind, LogLevel, LogRecord, LogValue};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// 无法从调用位置推导标签时使用的标签
pub const FALLBACK_TAG: &str = "framelog";

/// Logger 配置
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 运行时开关
    pub settings: LogSettings,

    /// 终端输出
    pub console: ConsoleAppenderConfig,

    /// 文件输出
    pub file: FileAppenderConfig,
}

impl LoggerConfig {
    /// 从 json5 文本解析
    pub fn from_json5(text: &str) -> Result<Self> {
        Ok(json5::from_str(text)?)
    }

    /// 从配置文件加载，按扩展名选择格式
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)?;

        match ext.as_str() {
            "json" | "json5" => Ok(json5::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            _ => Err(anyhow!("不支持的文件格式: {}", ext)),
        }
    }
}

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// 最终使用的标签
    pub tag: String,
    /// 日志头、正文和左边框拼接后的文本
    pub text: String,
}

/// 渲染一条日志
///
/// 标签优先级：固定的全局标签 > 调用时指定的非空标签 > 调用位置的类名 > [`FALLBACK_TAG`]
pub fn render(record: &LogRecord, settings: &LogSettings) -> RenderedMessage {
    let head = match (&record.caller, settings.show_head) {
        (Some(caller), true) => caller.head(&record.thread),
        _ => String::new(),
    };
    let body = render_body(record.kind, &record.payload);

    RenderedMessage {
        tag: resolve_tag(record, settings),
        text: frame(&head, &body, settings.show_border),
    }
}

fn resolve_tag(record: &LogRecord, settings: &LogSettings) -> String {
    if let Some(tag) = settings.pinned_tag() {
        return tag.to_string();
    }
    if let Some(tag) = record.tag.as_deref().filter(|tag| !tag.trim().is_empty()) {
        return tag.to_string();
    }
    match record.caller.as_ref().map(CallerContext::class_name) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FALLBACK_TAG.to_string(),
    }
}

/// 日志器
///
/// 每次调用读取一份配置快照，按类别分发到终端和文件。
/// 所有入口都不返回错误，也不会 panic；内部失败只会被上报。
pub struct Logger {
    config: LogConfig,
    console: Arc<dyn LogAppender>,
    file: FileAppender,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        let console = Arc::new(ConsoleAppender::new(config.console.clone()));
        Self::with_appender(config, console)
    }

    /// 使用自定义的终端输出器
    pub fn with_appender(config: LoggerConfig, console: Arc<dyn LogAppender>) -> Self {
        Self {
            config: LogConfig::new(config.settings),
            file: FileAppender::new(config.file, console.clone()),
            console,
        }
    }

    /// 共享的运行时配置
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// 链式修改运行时配置
    pub fn configure(&self) -> LogConfigBuilder {
        self.config.builder()
    }

    /// 当前配置快照
    pub fn settings(&self) -> Arc<LogSettings> {
        self.config.snapshot()
    }

    /// 记录日志
    pub fn log(&self, record: LogRecord) {
        let settings = self.config.snapshot();
        if !settings.enabled {
            return;
        }
        if let LogKind::Level(level) = record.kind {
            if level < settings.level {
                return;
            }
        }

        let rendered = render(&record, &settings);
        match record.kind {
            LogKind::Level(level) => {
                self.print(level, &rendered, &settings);
                if settings.file_enabled {
                    self.file
                        .append(&rendered.tag, &rendered.text, &record.timestamp, &settings);
                }
            }
            LogKind::File => {
                self.file
                    .append(&rendered.tag, &rendered.text, &record.timestamp, &settings);
            }
            LogKind::Json | LogKind::Xml => self.print(LogLevel::Debug, &rendered, &settings),
        }
    }

    fn print(&self, level: LogLevel, rendered: &RenderedMessage, settings: &LogSettings) {
        let result = print_chunked(
            self.console.as_ref(),
            level,
            &rendered.tag,
            &rendered.text,
            settings.show_border,
        );
        if let Err(e) = result {
            tracing::warn!(error = %e, "console output failed");
        }
    }

    #[track_caller]
    fn log_value(&self, kind: LogKind, value: impl Into<LogValue>) {
        let location = Location::caller();
        self.log(
            LogRecord::new(kind)
                .with_caller(CallerContext::new("", location.file(), location.line()))
                .with_value(value),
        );
    }

    #[track_caller]
    pub fn v(&self, value: impl Into<LogValue>) {
        self.log_value(LogLevel::Verbose.into(), value);
    }

    #[track_caller]
    pub fn d(&self, value: impl Into<LogValue>) {
        self.log_value(LogLevel::Debug.into(), value);
    }

    #[track_caller]
    pub fn i(&self, value: impl Into<LogValue>) {
        self.log_value(LogLevel::Info.into(), value);
    }

    #[track_caller]
    pub fn w(&self, value: impl Into<LogValue>) {
        self.log_value(LogLevel::Warn.into(), value);
    }

    #[track_caller]
    pub fn e(&self, value: impl Into<LogValue>) {
        self.log_value(LogLevel::Error.into(), value);
    }

    #[track_caller]
    pub fn a(&self, value: impl Into<LogValue>) {
        self.log_value(LogLevel::Assert.into(), value);
    }

    /// 只写文件，不受级别过滤和文件开关影响
    #[track_caller]
    pub fn file(&self, value: impl Into<LogValue>) {
        self.log_value(LogKind::File, value);
    }

    /// 美化 JSON 后以 DEBUG 输出到终端
    #[track_caller]
    pub fn json(&self, value: impl Into<LogValue>) {
        self.log_value(LogKind::Json, value);
    }

    /// 美化 XML 后以 DEBUG 输出到终端
    #[track_caller]
    pub fn xml(&self, value: impl Into<LogValue>) {
        self.log_value(LogKind::Xml, value);
    }

    /// 刷新终端，并等待已入队的文件写入完成
    pub fn flush(&self) -> Result<(), LogError> {
        self.console.flush()?;
        self.file.flush()
    }

    /// 写完剩余文件内容后停止后台写线程
    pub fn shutdown(&self) -> Result<(), LogError> {
        self.file.shutdown()
    }

    /// 注册为 `log` 门面的日志器
    pub fn install(self) -> Result<(), ::log::SetLoggerError> {
        ::log::set_boxed_logger(Box::new(self))
            .map(|()| ::log::set_max_level(::log::LevelFilter::Trace))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LoggerConfig::default())
    }
}

impl From<LoggerConfig> for Logger {
    fn from(config: LoggerConfig) -> Self {
        Logger::new(config)
    }
}

/// `log` 门面的级别映射
pub fn from_log_level(level: ::log::Level) -> LogLevel {
    match level {
        ::log::Level::Trace => LogLevel::Verbose,
        ::log::Level::Debug => LogLevel::Debug,
        ::log::Level::Info => LogLevel::Info,
        ::log::Level::Warn => LogLevel::Warn,
        ::log::Level::Error => LogLevel::Error,
    }
}

/// 把 `log` 门面的记录转换为日志记录
///
/// target 作为调用标签，模块路径作为调用位置。
pub fn from_log_record(record: &::log::Record<'_>) -> LogRecord {
    let mut converted = LogRecord::new(from_log_level(record.level()))
        .with_tag(record.target())
        .with_value(record.args().to_string());

    if let (Some(module), Some(file), Some(line)) =
        (record.module_path_static(), record.file_static(), record.line())
    {
        converted = converted.with_caller(CallerContext::in_module(module, file, line));
    }
    converted
}

impl ::log::Log for Logger {
    fn enabled(&self, metadata: &::log::Metadata<'_>) -> bool {
        let settings = self.config.snapshot();
        settings.enabled && from_log_level(metadata.level()) >= settings.level
    }

    fn log(&self, record: &::log::Record<'_>) {
        if ::log::Log::enabled(self, record.metadata()) {
            Logger::log(self, from_log_record(record));
        }
    }

    fn flush(&self) {
        if let Err(e) = Logger::flush(self) {
            tracing::warn!(error = %e, "flush failed");
        }
    }
}
