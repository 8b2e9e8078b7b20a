use crate::log::config::LogConfigBuilder;
use crate::log::error::LogError;
use crate::log::log_record::LogRecord;
use crate::log::logger::{Logger, LoggerConfig};
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// 全局 Logger 单例
///
/// 默认输出到标准输出，带日志头和边框，不写文件。
static GLOBAL_LOGGER: Lazy<ArcSwap<Logger>> =
    Lazy::new(|| ArcSwap::from_pointee(Logger::default()));

/// 获取全局 Logger
pub fn global_logger() -> Arc<Logger> {
    GLOBAL_LOGGER.load_full()
}

/// 替换全局 Logger
///
/// 被替换的 Logger 会先刷新；仍持有它的线程可以继续使用，
/// 最后一个引用释放后其后台写线程处理完剩余内容后退出。
pub fn set_global_logger(logger: Logger) {
    let previous = GLOBAL_LOGGER.swap(Arc::new(logger));
    if let Err(e) = previous.flush() {
        tracing::warn!(error = %e, "flush previous global logger failed");
    }
}

/// 使用配置初始化全局 Logger
///
/// # 示例
///
/// ```ignore
/// use framelog::log::{init, LoggerConfig};
///
/// fn main() -> anyhow::Result<()> {
///     init(LoggerConfig::from_file("log.yaml")?);
///     framelog::logi!("started");
///     Ok(())
/// }
/// ```
pub fn init(config: LoggerConfig) {
    set_global_logger(Logger::new(config));
}

/// 链式修改全局 Logger 的运行时配置
///
/// ```ignore
/// framelog::log::configure()
///     .set_global_tag("App")
///     .set_show_border(false)
///     .set_level(LogLevel::Info);
/// ```
pub fn configure() -> LogConfigBuilder {
    global_logger().configure()
}

/// 通过全局 Logger 记录日志
pub fn dispatch(record: LogRecord) {
    global_logger().log(record);
}

/// 刷新全局 Logger
pub fn flush() -> Result<(), LogError> {
    global_logger().flush()
}

/// 停止全局 Logger 的后台写线程，之后写文件会重新启动
pub fn shutdown() -> Result<(), LogError> {
    global_logger().shutdown()
}

struct GlobalFacade;

static GLOBAL_FACADE: GlobalFacade = GlobalFacade;

impl ::log::Log for GlobalFacade {
    fn enabled(&self, metadata: &::log::Metadata<'_>) -> bool {
        ::log::Log::enabled(global_logger().as_ref(), metadata)
    }

    fn log(&self, record: &::log::Record<'_>) {
        ::log::Log::log(global_logger().as_ref(), record);
    }

    fn flush(&self) {
        ::log::Log::flush(global_logger().as_ref());
    }
}

/// 把 `log` 门面转发到全局 Logger
///
/// 与 [`Logger::install`] 不同，之后通过 [`set_global_logger`] 替换的 Logger 同样生效。
pub fn install_log_facade() -> Result<(), ::log::SetLoggerError> {
    ::log::set_logger(&GLOBAL_FACADE).map(|()| ::log::set_max_level(::log::LevelFilter::Trace))
}
