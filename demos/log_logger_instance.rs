//! Logger 实例使用示例
//!
//! 演示如何创建独立的 Logger 实例，并把内部诊断输出到 tracing

use anyhow::Result;
use framelog::log::*;
use framelog::{logi, logw};
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = std::env::temp_dir().join("framelog-instance");
    let logger = Arc::new(Logger::new(LoggerConfig {
        settings: LogSettings {
            file_enabled: true,
            dir: Some(dir.clone()),
            ..Default::default()
        },
        ..Default::default()
    }));

    // 方法调用
    logger.i("hello from a logger instance");
    logger.json(r#"[1, 2, 3]"#);

    // 宏调用，自动捕获方法名
    logi!(logger: logger; "with caller context");
    logw!(logger: logger, tag: "Custom"; "a", 1, 2.5, true);

    // 多线程写入同一个文件
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = logger.clone();
            thread::Builder::new()
                .name(format!("worker-{}", i))
                .spawn(move || {
                    for j in 0..3 {
                        logi!(logger: logger; "worker", i, j);
                    }
                })
        })
        .collect::<std::io::Result<_>>()?;
    for handle in handles {
        let _ = handle.join();
    }

    logger.flush()?;
    logger.shutdown()?;
    println!("\n日志文件目录: {}", dir.display());

    Ok(())
}
