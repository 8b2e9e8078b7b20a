//! 日志模块
//!
//! 带边框、调用位置和按天分文件的日志引擎。
//!
//! # 特性
//!
//! - 六个级别：Verbose, Debug, Info, Warn, Error, Assert，支持运行时级别过滤
//! - 日志头：线程名、方法名、文件名和行号，由宏在调用点捕获
//! - 终端输出超长内容自动分段，分段后仍保持边框
//! - 文件输出写入 `<dir>/<MM>-<dd>.txt`，由后台线程按顺序追加
//! - JSON / XML 美化输出
//! - 运行时配置通过快照读取，读写互不阻塞
//! - 可作为 `log` 门面的后端
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use framelog::log::*;
//! use framelog::{logi, logjson};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LoggerConfig::from_json5(r#"
//!         {
//!             settings: {
//!                 global_tag: "App",
//!                 file_enabled: true,
//!                 level: "debug",
//!             },
//!             console: {
//!                 target: "stdout",
//!                 colored: true,
//!             },
//!         }
//!     "#)?;
//!     init(config);
//!
//!     logi!("application started");
//!     logjson!(r#"{"id": 1, "name": "framelog"}"#);
//!
//!     flush()?;
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod formatter;
pub mod global_logger;
pub mod log_record;
pub mod logger;
pub mod macros;

pub use appender::{
    ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig, LogAppender,
    MemoryAppender, Target,
};
pub use caller::CallerContext;
pub use config::{default_dir, LogConfig, LogConfigBuilder, LogSettings};
pub use error::LogError;
pub use formatter::{NULL, NULL_TIPS};
pub use global_logger::{
    configure, dispatch, flush, global_logger, init, install_log_facade, set_global_logger,
    shutdown,
};
pub use log_record::{LogKind, LogLevel, LogRecord, LogValue};
pub use logger::{render, Logger, LoggerConfig, RenderedMessage, FALLBACK_TAG};
