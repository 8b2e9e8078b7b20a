//! 分发、级别过滤和终端分段输出的集成测试

use chrono::{Local, TimeZone};
use framelog::log::appender::{partition_path, MemoryAppender, MAX_LEN};
use framelog::log::formatter::{BOTTOM_BORDER, LEFT_BORDER, TOP_BORDER};
use framelog::log::{CallerContext, LogKind, LogLevel, LogRecord, LogSettings, Logger, LoggerConfig};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// 辅助函数
// ============================================================================

fn create_logger(settings: LogSettings) -> (Logger, Arc<MemoryAppender>) {
    let memory = Arc::new(MemoryAppender::new());
    let config = LoggerConfig {
        settings,
        ..Default::default()
    };
    (Logger::with_appender(config, memory.clone()), memory)
}

const LEVELS: [LogLevel; 6] = [
    LogLevel::Verbose,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Assert,
];

// ============================================================================
// 测试用例
// ============================================================================

#[test]
fn test_threshold_matrix() {
    let time = Local.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap();

    for threshold in LEVELS {
        for level in LEVELS {
            let temp_dir = TempDir::new().unwrap();
            let (logger, memory) = create_logger(LogSettings {
                level: threshold,
                show_border: false,
                file_enabled: true,
                dir: Some(temp_dir.path().to_path_buf()),
                ..Default::default()
            });

            logger.log(LogRecord::new(level).with_value("x").with_timestamp(time));
            logger.flush().unwrap();

            let files: Vec<_> = fs::read_dir(temp_dir.path())
                .unwrap()
                .map(|e| e.unwrap().path())
                .collect();
            if level < threshold {
                assert!(memory.is_empty(), "level {} threshold {}", level, threshold);
                assert!(files.is_empty(), "level {} threshold {}", level, threshold);
            } else {
                assert_eq!(memory.len(), 1, "level {} threshold {}", level, threshold);
                assert_eq!(files, vec![partition_path(temp_dir.path(), &time)]);
                let content = fs::read_to_string(&files[0]).unwrap();
                assert_eq!(content.matches("\n\n").count(), 1);
                assert!(content.ends_with("x\n\n"));
            }
        }
    }
}

#[test]
fn test_disabled_emits_nothing() {
    let (logger, memory) = create_logger(LogSettings {
        enabled: false,
        ..Default::default()
    });

    for level in LEVELS {
        logger.log(LogRecord::new(level).with_value("x"));
    }
    logger.log(LogRecord::new(LogKind::Json).with_value("{}"));
    logger.log(LogRecord::new(LogKind::Xml).with_value("<a/>"));

    assert!(memory.is_empty());
}

#[test]
fn test_plain_message_is_single_write() {
    let (logger, memory) = create_logger(LogSettings {
        show_head: false,
        show_border: false,
        ..Default::default()
    });

    logger.log(LogRecord::new(LogLevel::Info).with_tag("T").with_value("hello"));

    let messages = memory.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].tag, "T");
    assert_eq!(messages[0].msg, "hello");
}

#[test]
fn test_pinned_tag_without_head_or_border() {
    let (logger, memory) = create_logger(LogSettings {
        show_head: false,
        show_border: false,
        global_tag: Some("T".to_string()),
        ..Default::default()
    });

    logger.log(
        LogRecord::new(LogLevel::Info)
            .with_caller(CallerContext::new("app::Main::run", "src/main.rs", 1))
            .with_value("hello"),
    );

    let messages = memory.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].level, LogLevel::Info);
    assert_eq!(messages[0].tag, "T");
    assert_eq!(messages[0].msg, "hello");
}

#[test]
fn test_single_value_and_null_body() {
    let (logger, memory) = create_logger(LogSettings {
        show_head: false,
        show_border: false,
        ..Default::default()
    });

    logger.log(LogRecord::new(LogLevel::Info).with_value(42u8));
    logger.log(LogRecord::new(LogLevel::Info).with_value(None::<&str>));
    logger.log(LogRecord::new(LogLevel::Info).with_value(1.5).with_value(None::<i64>));

    let bodies: Vec<String> = memory.messages().into_iter().map(|m| m.msg).collect();
    assert_eq!(bodies, vec!["42", "null", "args[0] = 1.5\nargs[1] = null"]);
}

#[test]
fn test_long_message_chunks_reassemble() {
    let (logger, memory) = create_logger(LogSettings {
        show_head: false,
        ..Default::default()
    });
    let body: String = (0..3 * MAX_LEN + 123)
        .map(|i| char::from(b'a' + (i % 26) as u8))
        .collect();

    logger.log(LogRecord::new(LogLevel::Error).with_value(body.clone()));

    let messages = memory.messages();
    let framed = format!("{}{}\n", LEFT_BORDER, body);
    let expected_chunks = (framed.chars().count() + MAX_LEN - 1) / MAX_LEN;
    assert_eq!(messages.len(), expected_chunks + 2);
    assert_eq!(messages.first().unwrap().msg, TOP_BORDER);
    assert_eq!(messages.last().unwrap().msg, BOTTOM_BORDER);

    let chunks = &messages[1..messages.len() - 1];
    let mut rebuilt = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if i == 0 {
            rebuilt.push_str(&chunk.msg);
        } else {
            assert!(chunk.msg.starts_with(LEFT_BORDER));
            rebuilt.push_str(&chunk.msg[LEFT_BORDER.len()..]);
        }
    }
    assert_eq!(rebuilt, framed);
}

#[test]
fn test_exactly_max_len_is_not_chunked() {
    let (logger, memory) = create_logger(LogSettings {
        show_head: false,
        show_border: false,
        ..Default::default()
    });

    logger.log(LogRecord::new(LogLevel::Info).with_value("x".repeat(MAX_LEN)));
    assert_eq!(memory.len(), 1);

    memory.clear();
    logger.log(LogRecord::new(LogLevel::Info).with_value("x".repeat(MAX_LEN + 1)));
    assert_eq!(memory.len(), 2);
}

#[test]
fn test_head_uses_caller_and_thread() {
    let (logger, memory) = create_logger(LogSettings {
        show_border: false,
        ..Default::default()
    });

    let handle = std::thread::Builder::new()
        .name("io-thread".to_string())
        .spawn(move || {
            logger.log(
                LogRecord::new(LogLevel::Info)
                    .with_caller(CallerContext::new(
                        "app::net::Client::connect",
                        "src/net/client.rs",
                        88,
                    ))
                    .with_value("connected"),
            );
        })
        .unwrap();
    handle.join().unwrap();

    let messages = memory.messages();
    assert_eq!(messages[0].tag, "Client");
    assert_eq!(
        messages[0].msg,
        "Thread: io-thread, connect(client.rs:88)\nconnected"
    );
}

#[test]
fn test_json_and_xml_pretty_print() {
    let (logger, memory) = create_logger(LogSettings {
        show_head: false,
        show_border: false,
        level: LogLevel::Assert,
        ..Default::default()
    });

    logger.log(LogRecord::new(LogKind::Json).with_value(r#"{"b":1,"a":[1,2]}"#));
    logger.log(LogRecord::new(LogKind::Json).with_value("not json"));
    logger.log(LogRecord::new(LogKind::Xml).with_value("<a><b>1</b></a>"));

    let messages = memory.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages[0].msg,
        "{\n    \"b\": 1,\n    \"a\": [\n        1,\n        2\n    ]\n}"
    );
    assert_eq!(messages[1].msg, "not json");
    assert!(messages[2].msg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(messages[2].msg.contains("    <b>1</b>"));
}
