use crate::log::log_record::LogLevel;
use arc_swap::ArcSwap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 默认日志目录（进程内只解析一次）
static DEFAULT_DIR: OnceCell<PathBuf> = OnceCell::new();

/// 默认日志目录
///
/// 平台缓存目录可用时为 `<cache>/framelog/log`，否则为 `<temp>/framelog/log`。
/// 第一次调用时解析并缓存，之后即使缓存目录状态变化也不再重新计算。
pub fn default_dir() -> &'static Path {
    DEFAULT_DIR.get_or_init(|| {
        let base = match dirs::cache_dir() {
            Some(dir) if dir.is_dir() => dir,
            _ => std::env::temp_dir(),
        };
        base.join("framelog").join("log")
    })
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// 日志运行时设置
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// 总开关
    #[default = true]
    pub enabled: bool,

    /// 全局标签，为空或空白时按调用位置自动生成
    #[default(None)]
    pub global_tag: Option<String>,

    /// 是否输出调用位置头
    #[default = true]
    pub show_head: bool,

    /// 是否绘制边框
    #[default = true]
    pub show_border: bool,

    /// 是否同时写入文件
    #[default = false]
    pub file_enabled: bool,

    /// 日志目录，None 表示使用默认目录
    #[default(None)]
    pub dir: Option<PathBuf>,

    /// 最低输出级别
    #[default(LogLevel::Verbose)]
    pub level: LogLevel,
}

impl LogSettings {
    /// 是否按调用位置自动生成标签
    pub fn tag_is_auto(&self) -> bool {
        self.pinned_tag().is_none()
    }

    /// 固定的全局标签
    pub fn pinned_tag(&self) -> Option<&str> {
        self.global_tag.as_deref().filter(|tag| !is_blank(tag))
    }

    /// 实际使用的日志目录
    pub fn output_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) if !is_blank(&dir.to_string_lossy()) => dir.clone(),
            _ => default_dir().to_path_buf(),
        }
    }
}

/// 共享的日志配置
///
/// 读取方每次调用取一份快照，写入方整体替换快照，后写者生效。
/// 读写都不会阻塞，也不会失败。
#[derive(Debug, Clone)]
pub struct LogConfig {
    settings: Arc<ArcSwap<LogSettings>>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogSettings::default())
    }
}

impl LogConfig {
    pub fn new(settings: LogSettings) -> Self {
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
        }
    }

    /// 当前设置的快照
    pub fn snapshot(&self) -> Arc<LogSettings> {
        self.settings.load_full()
    }

    /// 修改设置
    pub fn update<F>(&self, f: F)
    where
        F: Fn(&mut LogSettings),
    {
        self.settings.rcu(|current| {
            let mut next = LogSettings::clone(current);
            f(&mut next);
            next
        });
    }

    /// 整体替换设置
    pub fn replace(&self, settings: LogSettings) {
        self.settings.store(Arc::new(settings));
    }

    /// 获取链式配置器
    pub fn builder(&self) -> LogConfigBuilder {
        LogConfigBuilder::new(self.clone())
    }
}

/// 链式配置器
///
/// 每个 setter 立即生效。
///
/// # 示例
///
/// ```ignore
/// logger.configure()
///     .set_global_tag("App")
///     .set_show_border(false)
///     .set_level(LogLevel::Info);
/// ```
pub struct LogConfigBuilder {
    config: LogConfig,
}

impl LogConfigBuilder {
    pub fn new(config: LogConfig) -> Self {
        // 第一次使用配置器时解析默认目录
        let _ = default_dir();
        Self { config }
    }

    pub fn set_enabled(self, enabled: bool) -> Self {
        self.config.update(|s| s.enabled = enabled);
        self
    }

    /// 设置全局标签，空白时恢复自动标签
    pub fn set_global_tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag = if is_blank(&tag) { None } else { Some(tag) };
        self.config.update(|s| s.global_tag = tag.clone());
        self
    }

    pub fn set_show_head(self, show_head: bool) -> Self {
        self.config.update(|s| s.show_head = show_head);
        self
    }

    pub fn set_file_enabled(self, file_enabled: bool) -> Self {
        self.config.update(|s| s.file_enabled = file_enabled);
        self
    }

    /// 设置日志目录，空白时恢复默认目录
    pub fn set_dir(self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let dir = if is_blank(&dir.to_string_lossy()) {
            None
        } else {
            Some(dir)
        };
        self.config.update(|s| s.dir = dir.clone());
        self
    }

    pub fn set_show_border(self, show_border: bool) -> Self {
        self.config.update(|s| s.show_border = show_border);
        self
    }

    pub fn set_level(self, level: LogLevel) -> Self {
        self.config.update(|s| s.level = level);
        self
    }

    /// 当前设置的快照
    pub fn settings(&self) -> Arc<LogSettings> {
        self.config.snapshot()
    }
}

impl fmt::Display for LogConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.config.snapshot();
        writeln!(f, "switch: {}", s.enabled)?;
        writeln!(f, "tag: {}", s.pinned_tag().unwrap_or("null"))?;
        writeln!(f, "head: {}", s.show_head)?;
        writeln!(f, "file: {}", s.file_enabled)?;
        writeln!(f, "dir: {}", s.output_dir().display())?;
        writeln!(f, "border: {}", s.show_border)?;
        write!(f, "filter: {}", s.level.to_string().to_lowercase())
    }
}
