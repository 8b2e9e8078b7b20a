use crate::log::caller::CallerContext;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 最详细的日志
    Verbose = 0,
    /// 调试信息
    Debug = 1,
    /// 一般信息
    Info = 2,
    /// 警告信息
    Warn = 3,
    /// 错误信息
    Error = 4,
    /// 不应该发生的严重错误
    Assert = 5,
}

impl LogLevel {
    /// 单字母表示，用于终端输出前缀
    pub fn as_char(&self) -> char {
        match self {
            LogLevel::Verbose => 'V',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
            LogLevel::Assert => 'A',
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" | "v" => Ok(LogLevel::Verbose),
            "debug" | "d" => Ok(LogLevel::Debug),
            "info" | "i" => Ok(LogLevel::Info),
            "warn" | "w" => Ok(LogLevel::Warn),
            "error" | "e" => Ok(LogLevel::Error),
            "assert" | "a" => Ok(LogLevel::Assert),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Verbose => write!(f, "VERBOSE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Assert => write!(f, "ASSERT"),
        }
    }
}

/// 日志类别
///
/// 标准级别参与级别过滤；File/Json/Xml 只决定渲染和输出路径，
/// 从不与过滤级别比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Level(LogLevel),
    /// 只写文件
    File,
    /// JSON 美化后以 DEBUG 输出到终端
    Json,
    /// XML 美化后以 DEBUG 输出到终端
    Xml,
}

impl From<LogLevel> for LogKind {
    fn from(level: LogLevel) -> Self {
        LogKind::Level(level)
    }
}

/// 日志内容值，支持多种类型
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Char(char),
    /// 任意 JSON 兼容的数据
    Json(Value),
    /// 缺失的值
    Null,
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Text(s) => write!(f, "{}", s),
            LogValue::I64(n) => write!(f, "{}", n),
            LogValue::U64(n) => write!(f, "{}", n),
            LogValue::F64(n) => write!(f, "{}", n),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Char(c) => write!(f, "{}", c),
            LogValue::Json(v) => write!(f, "{}", v),
            LogValue::Null => write!(f, "null"),
        }
    }
}

impl LogValue {
    /// 使用值自身的 Display 表示
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        LogValue::Text(value.to_string())
    }

    /// 使用值自身的 Debug 表示
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        LogValue::Text(format!("{:?}", value))
    }

    /// 从任意实现了 Serialize 的结构体创建，序列化失败时为 Null
    pub fn from_struct<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => LogValue::Json(json_value),
            Err(_) => LogValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, LogValue::Null)
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::I64(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::U64(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        LogValue::F64(n)
    }
}

impl From<f32> for LogValue {
    fn from(n: f32) -> Self {
        LogValue::F64(n as f64)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<char> for LogValue {
    fn from(c: char) -> Self {
        LogValue::Char(c)
    }
}

impl From<Value> for LogValue {
    fn from(v: Value) -> Self {
        LogValue::Json(v)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogValue::Null, Into::into)
    }
}

/// 一次日志调用
///
/// 在调用线程上构造，携带调用时刻的线程名和本地时间。
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 日志类别
    pub kind: LogKind,
    /// 调用时指定的标签
    pub tag: Option<String>,
    /// 日志内容，为空表示没有内容
    pub payload: Vec<LogValue>,
    /// 调用位置
    pub caller: Option<CallerContext>,
    /// 线程名（未命名线程使用线程 ID）
    pub thread: String,
    /// 时间戳
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// 创建新的日志记录
    pub fn new(kind: impl Into<LogKind>) -> Self {
        Self {
            kind: kind.into(),
            tag: None,
            payload: Vec::new(),
            caller: None,
            thread: current_thread_name(),
            timestamp: Local::now(),
        }
    }

    /// 设置标签
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// 设置调用位置
    pub fn with_caller(mut self, caller: CallerContext) -> Self {
        self.caller = Some(caller);
        self
    }

    /// 追加一个内容值
    pub fn with_value(mut self, value: impl Into<LogValue>) -> Self {
        self.payload.push(value.into());
        self
    }

    /// 替换全部内容
    pub fn with_payload(mut self, payload: Vec<LogValue>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

fn current_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}
