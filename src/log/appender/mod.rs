mod console_appender;
mod file_appender;
mod memory_appender;
mod trait_;
mod worker;

pub use console_appender::{
    print_chunked, split_chunks, ConsoleAppender, ConsoleAppenderConfig, Target, MAX_LEN,
};
pub use file_appender::{ensure_file, file_block, partition_path, FileAppender, FileAppenderConfig};
pub use memory_appender::{AppendedMessage, MemoryAppender};
pub use trait_::LogAppender;
pub use worker::FileWriteTask;
