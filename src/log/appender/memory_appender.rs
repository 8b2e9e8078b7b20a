use crate::log::appender::LogAppender;
use crate::log::error::LogError;
use crate::log::log_record::LogLevel;
use std::sync::{Mutex, PoisonError};

/// 一次输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedMessage {
    pub level: LogLevel,
    pub tag: String,
    pub msg: String,
}

/// 内存输出器
///
/// 按顺序保存每一次输出，便于在测试中检查日志内容。
#[derive(Debug, Default)]
pub struct MemoryAppender {
    messages: Mutex<Vec<AppendedMessage>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已输出内容的副本
    pub fn messages(&self) -> Vec<AppendedMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogAppender for MemoryAppender {
    fn append(&self, level: LogLevel, tag: &str, msg: &str) -> Result<(), LogError> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(AppendedMessage {
                level,
                tag: tag.to_string(),
                msg: msg.to_string(),
            });
        Ok(())
    }
}
