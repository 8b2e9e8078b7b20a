use crate::log::appender::worker::{flush_via, FileWriteTask, Worker, WorkerMessage};
use crate::log::appender::LogAppender;
use crate::log::config::LogSettings;
use crate::log::error::LogError;
use crate::log::formatter::{BOTTOM_BORDER, LEFT_BORDER, TOP_BORDER};
use crate::log::log_record::LogLevel;
use chrono::{DateTime, Local};
use crossbeam::channel::TrySendError;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FileAppender 配置
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct FileAppenderConfig {
    /// 写入队列容量，队列满时新的写入被丢弃并上报
    #[default = 4096]
    pub queue_capacity: usize,
}

/// 文件输出器
///
/// 按天把日志追加到 `<dir>/<MM>-<dd>.txt`。写入由一个后台线程完成，
/// 日志调用方只负责入队，永远不会因为文件 IO 阻塞。
pub struct FileAppender {
    config: FileAppenderConfig,
    console: Arc<dyn LogAppender>,
    worker: Mutex<Option<Worker>>,
}

impl FileAppender {
    /// 创建 FileAppender，失败信息通过 `console` 上报
    pub fn new(config: FileAppenderConfig, console: Arc<dyn LogAppender>) -> Self {
        Self {
            config,
            console,
            worker: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &FileAppenderConfig {
        &self.config
    }

    /// 追加一条日志，失败时上报后继续
    pub fn append(&self, tag: &str, msg: &str, time: &DateTime<Local>, settings: &LogSettings) {
        let task = FileWriteTask {
            target_path: partition_path(&settings.output_dir(), time),
            payload: file_block(tag, msg, time, settings.show_border),
            tag: tag.to_string(),
        };
        let target_path = task.target_path.clone();

        if let Err(e) = self.enqueue(task) {
            report_failure(self.console.as_ref(), tag, &target_path, &e);
        }
    }

    fn enqueue(&self, task: FileWriteTask) -> Result<(), LogError> {
        let mut slot = self.slot();
        if slot.is_none() {
            *slot = Some(Worker::spawn(
                self.config.queue_capacity,
                self.console.clone(),
            )?);
        }

        let path = task.target_path.clone();
        let Some(worker) = slot.as_ref() else {
            return Err(LogError::WorkerGone);
        };
        match worker.try_send(WorkerMessage::Write(task)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(LogError::QueueFull { path }),
            Err(TrySendError::Disconnected(_)) => {
                // 线程异常退出，下次入队时重新创建
                *slot = None;
                Err(LogError::WorkerGone)
            }
        }
    }

    /// 阻塞直到此前入队的写入全部完成
    pub fn flush(&self) -> Result<(), LogError> {
        let sender = self.slot().as_ref().map(Worker::sender);
        match sender {
            Some(sender) => flush_via(sender),
            None => Ok(()),
        }
    }

    /// 处理完剩余写入后停止后台线程，之后的写入会重新启动线程
    pub fn shutdown(&self) -> Result<(), LogError> {
        let worker = self.slot().take();
        match worker {
            Some(worker) => worker.shutdown(),
            None => Ok(()),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Worker>> {
        self.worker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 日志文件路径：`<dir>/<MM>-<dd>.txt`
pub fn partition_path(dir: &Path, time: &DateTime<Local>) -> PathBuf {
    dir.join(format!("{}.txt", time.format("%m-%d")))
}

/// 追加到文件的完整文本块
///
/// 第一行是 `HH:MM:SS.mmm ` 时间和标签，之后是正文，以空行结束。
pub fn file_block(tag: &str, msg: &str, time: &DateTime<Local>, show_border: bool) -> String {
    let head = format!("{}{}", time.format("%H:%M:%S%.3f "), tag);

    if show_border {
        format!(
            "{}\n{}{}\n{}{}\n\n",
            TOP_BORDER, LEFT_BORDER, head, msg, BOTTOM_BORDER
        )
    } else {
        format!("{}\n{}\n\n", head, msg)
    }
}

/// 确保日志文件存在
///
/// 路径已存在但不是普通文件时返回 [`LogError::NotAFile`]。
pub fn ensure_file(path: &Path) -> Result<(), LogError> {
    if path.exists() {
        if path.is_file() {
            return Ok(());
        }
        return Err(LogError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LogError::io(parent, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::io(path, e))?;
    Ok(())
}

pub(crate) fn write_block(path: &Path, payload: &str) -> Result<(), LogError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| LogError::io(path, e))?;
    file.write_all(payload.as_bytes())
        .map_err(|e| LogError::io(path, e))
}

pub(crate) fn report_failure(console: &dyn LogAppender, tag: &str, path: &Path, err: &LogError) {
    tracing::warn!(path = %path.display(), error = %err, "log file write failed");
    let _ = console.append(
        LogLevel::Error,
        tag,
        &format!("log to {} failed!", path.display()),
    );
}
