use std::path::PathBuf;
use thiserror::Error;

/// 日志引擎内部错误
///
/// 只在内部边界上传递，引擎自身总是把它们消化为"上报并继续"，
/// 不会从任何日志入口返回给调用方。
#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO 错误 [{}]: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("路径不是文件: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("写入队列已满: {}", .path.display())]
    QueueFull { path: PathBuf },

    #[error("写入线程不可用")]
    WorkerGone,

    #[error("写入线程启动失败: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML 解析错误: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("格式不合法: {0}")]
    Malformed(String),

    #[error("终端输出错误: {0}")]
    Console(#[source] std::io::Error),
}

impl LogError {
    /// 附带路径的 IO 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}
