//! 日志宏
//!
//! 每个宏在调用点捕获调用位置（函数路径、文件、行号），支持以下形式：
//!
//! ```ignore
//! use framelog::{logd, logi, logjson};
//!
//! logi!("application started");
//! logd!("user", user_id, None::<String>);   // 多个值逐行输出为 args[i] = ...
//! logi!(tag: "Net"; "connected");
//! logi!(logger: &logger; "to a specific logger");
//! logi!(logger: &logger, tag: "Net"; "both");
//! logjson!(r#"{"id": 1}"#);
//! ```
//!
//! 不指定 logger 时写入全局 Logger。

#[doc(hidden)]
#[macro_export]
macro_rules! __framelog_record {
    ($kind:expr; tag: $tag:expr; $($arg:expr),*) => {
        $crate::__framelog_record!($kind; $($arg),*).with_tag($tag)
    };
    ($kind:expr; $($arg:expr),*) => {
        $crate::log::LogRecord::new($kind)
            .with_caller($crate::caller!())
            $(.with_value($arg))*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __framelog_log {
    ($kind:expr; logger: $logger:expr, tag: $tag:expr; $($arg:expr),* $(,)?) => {
        $logger.log($crate::__framelog_record!($kind; tag: $tag; $($arg),*))
    };
    ($kind:expr; logger: $logger:expr; $($arg:expr),* $(,)?) => {
        $logger.log($crate::__framelog_record!($kind; $($arg),*))
    };
    ($kind:expr; tag: $tag:expr; $($arg:expr),* $(,)?) => {
        $crate::log::dispatch($crate::__framelog_record!($kind; tag: $tag; $($arg),*))
    };
    ($kind:expr; $($arg:expr),* $(,)?) => {
        $crate::log::dispatch($crate::__framelog_record!($kind; $($arg),*))
    };
}

/// 记录 VERBOSE 级别日志
#[macro_export]
macro_rules! logv {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Level($crate::log::LogLevel::Verbose); $($t)*)
    };
}

/// 记录 DEBUG 级别日志
#[macro_export]
macro_rules! logd {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Level($crate::log::LogLevel::Debug); $($t)*)
    };
}

/// 记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// logi!("user logged in");
/// logi!(tag: "Auth"; "user", 12345);
/// ```
#[macro_export]
macro_rules! logi {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Level($crate::log::LogLevel::Info); $($t)*)
    };
}

/// 记录 WARN 级别日志
#[macro_export]
macro_rules! logw {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Level($crate::log::LogLevel::Warn); $($t)*)
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! loge {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Level($crate::log::LogLevel::Error); $($t)*)
    };
}

/// 记录 ASSERT 级别日志
#[macro_export]
macro_rules! loga {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Level($crate::log::LogLevel::Assert); $($t)*)
    };
}

/// 只写日志文件
#[macro_export]
macro_rules! logfile {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::File; $($t)*)
    };
}

/// 美化 JSON 后以 DEBUG 输出
#[macro_export]
macro_rules! logjson {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Json; $($t)*)
    };
}

/// 美化 XML 后以 DEBUG 输出
#[macro_export]
macro_rules! logxml {
    ($($t:tt)*) => {
        $crate::__framelog_log!($crate::log::LogKind::Xml; $($t)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::log::appender::MemoryAppender;
    use crate::log::{LogLevel, LogSettings, Logger, LoggerConfig, NULL_TIPS};
    use std::sync::Arc;

    fn create_test_logger() -> (Logger, Arc<MemoryAppender>) {
        let memory = Arc::new(MemoryAppender::new());
        let config = LoggerConfig {
            settings: LogSettings {
                show_border: false,
                ..Default::default()
            },
            ..Default::default()
        };
        (Logger::with_appender(config, memory.clone()), memory)
    }

    #[test]
    fn test_macro_captures_caller() {
        let (logger, memory) = create_test_logger();

        let line = line!() + 1;
        logi!(logger: &logger; "hello");

        let messages = memory.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, LogLevel::Info);
        assert_eq!(messages[0].tag, "tests");

        let head = messages[0].msg.lines().next().unwrap();
        assert!(head.starts_with("Thread: "));
        assert!(head.ends_with(&format!("test_macro_captures_caller(macros.rs:{})", line)));
    }

    #[test]
    fn test_macro_with_tag() {
        let (logger, memory) = create_test_logger();

        logw!(logger: &logger, tag: "Net"; "a", 1);

        let messages = memory.messages();
        assert_eq!(messages[0].tag, "Net");
        assert!(messages[0].msg.ends_with("args[0] = a\nargs[1] = 1"));
    }

    #[test]
    fn test_macro_every_level() {
        let (logger, memory) = create_test_logger();

        logv!(logger: &logger; "v");
        logd!(logger: &logger; "d");
        logi!(logger: &logger; "i");
        logw!(logger: &logger; "w");
        loge!(logger: &logger; "e");
        loga!(logger: &logger; "a");
        logjson!(logger: &logger; "[1]");
        logxml!(logger: &logger; "<a/>");

        let levels: Vec<LogLevel> = memory.messages().iter().map(|m| m.level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Verbose,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
                LogLevel::Assert,
                LogLevel::Debug,
                LogLevel::Debug,
            ]
        );
    }

    #[test]
    fn test_macro_empty_payload() {
        let (logger, memory) = create_test_logger();

        loge!(logger: &logger;);

        assert!(memory.messages()[0].msg.ends_with(NULL_TIPS));
    }

    #[test]
    fn test_macro_inside_closure() {
        let (logger, memory) = create_test_logger();

        let run = || logd!(logger: &logger; "in closure");
        run();

        let messages = memory.messages();
        assert_eq!(messages[0].tag, "tests");
        assert!(messages[0].msg.contains("test_macro_inside_closure(macros.rs:"));
    }
}
