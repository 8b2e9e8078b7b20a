use crate::log::error::LogError;
use crate::log::log_record::LogLevel;

/// 日志输出器 trait
///
/// 终端一类的同步输出目标：接收级别、标签和一段已经格式化好的文本。
/// 返回的错误只会被引擎记录，不会影响日志调用方。
pub trait LogAppender: Send + Sync {
    /// 输出日志
    fn append(&self, level: LogLevel, tag: &str, msg: &str) -> Result<(), LogError>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<(), LogError> {
        Ok(())
    }
}
