//! framelog - 带边框和调用位置的日志库
//!
//! 把一次日志调用渲染为带日志头、左边框的文本块，输出到终端，
//! 并可按天追加到日志文件。
//!
//! ## 模块
//!
//! - **log**: 日志引擎（记录、渲染、终端与文件输出、全局 Logger 和宏）
//!
//! ## 设计理念
//!
//! - 🔒 **不干扰调用方**: 日志入口不返回错误也不会 panic
//! - ⚡ **调用方不阻塞**: 文件写入由后台线程完成
//! - 🔄 **运行时可调**: 配置以快照形式读取，修改立即生效

pub mod log;

// 重新导出主要的公共 API
pub use log::{
    LogAppender, LogConfig, LogError, LogLevel, LogRecord, LogSettings, LogValue, Logger,
    LoggerConfig,
};
