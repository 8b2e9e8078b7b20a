use crate::log::appender::file_appender::{ensure_file, report_failure, write_block};
use crate::log::appender::LogAppender;
use crate::log::error::LogError;
use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

const WORKER_THREAD_NAME: &str = "framelog-file-writer";

/// 一次文件追加
#[derive(Debug, Clone)]
pub struct FileWriteTask {
    /// 目标文件
    pub target_path: PathBuf,
    /// 追加的完整文本
    pub payload: String,
    /// 写入失败时上报使用的标签
    pub tag: String,
}

pub(crate) enum WorkerMessage {
    Write(FileWriteTask),
    Flush(Sender<()>),
    Shutdown,
}

/// 后台写文件线程
///
/// 单线程按入队顺序依次处理，同一时刻只有一个写操作在进行。
pub(crate) struct Worker {
    sender: Sender<WorkerMessage>,
    handle: JoinHandle<()>,
}

impl Worker {
    pub fn spawn(capacity: usize, console: Arc<dyn LogAppender>) -> Result<Self, LogError> {
        let (sender, receiver) = channel::bounded(capacity.max(1));

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || run(receiver, console))
            .map_err(LogError::WorkerSpawn)?;

        tracing::debug!(capacity, "file writer started");
        Ok(Self { sender, handle })
    }

    pub fn try_send(&self, message: WorkerMessage) -> Result<(), TrySendError<WorkerMessage>> {
        self.sender.try_send(message)
    }

    pub fn sender(&self) -> Sender<WorkerMessage> {
        self.sender.clone()
    }

    /// 处理完队列中已有的任务后退出线程并等待其结束
    pub fn shutdown(self) -> Result<(), LogError> {
        let Worker { sender, handle } = self;
        // 线程已退出时发送失败，直接 join 即可
        let _ = sender.send(WorkerMessage::Shutdown);
        drop(sender);

        handle.join().map_err(|_| LogError::WorkerGone)?;
        tracing::debug!("file writer stopped");
        Ok(())
    }
}

/// 等待 flush 之前入队的任务全部完成
pub(crate) fn flush_via(sender: Sender<WorkerMessage>) -> Result<(), LogError> {
    let (ack_tx, ack_rx) = channel::bounded(1);
    sender
        .send(WorkerMessage::Flush(ack_tx))
        .map_err(|_| LogError::WorkerGone)?;
    drop(sender);

    ack_rx.recv().map_err(|_| LogError::WorkerGone)
}

fn run(receiver: Receiver<WorkerMessage>, console: Arc<dyn LogAppender>) {
    for message in receiver.iter() {
        match message {
            WorkerMessage::Write(task) => process(&task, console.as_ref()),
            WorkerMessage::Flush(ack) => {
                let _ = ack.send(());
            }
            WorkerMessage::Shutdown => break,
        }
    }
}

fn process(task: &FileWriteTask, console: &dyn LogAppender) {
    let result = ensure_file(&task.target_path)
        .and_then(|_| write_block(&task.target_path, &task.payload));

    match result {
        Ok(()) => tracing::debug!(
            path = %task.target_path.display(),
            bytes = task.payload.len(),
            "log block written"
        ),
        Err(e) => report_failure(console, &task.tag, &task.target_path, &e),
    }
}
