//! 调用位置
//!
//! 调用位置由调用点上的 [`caller!`](crate::caller) 宏在编译期捕获：
//! 函数路径、源文件、行号。运行时不遍历调用栈。

/// 捕获当前调用位置
///
/// 函数路径通过在调用点声明一个嵌套函数并读取其 `type_name` 获得。
#[macro_export]
macro_rules! caller {
    () => {
        $crate::log::CallerContext::new(
            {
                fn __framelog_here() {}
                fn __framelog_name_of<T>(_: T) -> &'static str {
                    ::std::any::type_name::<T>()
                }
                let name = __framelog_name_of(__framelog_here);
                name.strip_suffix("::__framelog_here").unwrap_or(name)
            },
            file!(),
            line!(),
        )
    };
}

/// 一次日志调用的源码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerContext {
    /// 完整函数路径，如 `app::net::Client::connect`
    pub function: &'static str,
    /// 源文件路径（`file!()`）
    pub file: &'static str,
    /// 行号
    pub line: u32,
    /// `function` 只是模块路径，不含方法名
    pub module_only: bool,
}

impl CallerContext {
    pub fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
            module_only: false,
        }
    }

    /// 只知道模块路径的调用位置，如 `log` 门面转来的记录
    pub fn in_module(module: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function: module,
            file,
            line,
            module_only: true,
        }
    }

    /// 方法名：最后一个非闭包路径段
    ///
    /// 没有函数路径时取源文件名（不含扩展名），只有模块路径时为空。
    pub fn method_name(&self) -> &str {
        if self.module_only {
            return "";
        }
        let segments = named_segments(self.function);
        segments.last().copied().unwrap_or_else(|| self.file_stem())
    }

    /// 所属名称：方法前一段的简短名
    ///
    /// - `app::net::Client::connect` -> `Client`
    /// - `<app::net::Client as app::Handler>::handle` -> `Client`
    /// - `app::net::connect` -> `net`
    pub fn class_name(&self) -> &str {
        let segments = named_segments(self.function);
        if self.module_only {
            return segments.last().copied().unwrap_or_else(|| self.file_stem());
        }
        match segments.len() {
            0 => self.file_stem(),
            1 => simple_name(segments[0]),
            n => simple_name(segments[n - 2]),
        }
    }

    /// 源文件名（不含目录）
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    fn file_stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(pos) if pos > 0 => &name[..pos],
            _ => name,
        }
    }

    /// 日志头：`Thread: <thread>, <method>(<file>:<line>)`
    ///
    /// 只有模块路径时用完整模块路径代替方法名。
    pub fn head(&self, thread: &str) -> String {
        let location = if self.module_only {
            self.function
        } else {
            self.method_name()
        };
        format!(
            "Thread: {}, {}({}:{})",
            thread,
            location,
            self.file_name(),
            self.line
        )
    }
}

/// 按 `::` 切分路径（忽略尖括号内部），并去掉 `{{closure}}` 一类的匿名段
fn named_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let bytes = path.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);

    segments
        .into_iter()
        .filter(|s| !s.is_empty() && !s.starts_with("{{"))
        .collect()
}

/// 简化单个路径段
///
/// `<app::Client as app::Handler>` -> `Client`，`Wrapper<i32>` -> `Wrapper`
fn simple_name(segment: &str) -> &str {
    let mut name = segment;

    if let Some(inner) = name.strip_prefix('<') {
        let inner = inner.strip_suffix('>').unwrap_or(inner);
        name = match inner.find(" as ") {
            Some(pos) => &inner[..pos],
            None => inner,
        };
        name = name.trim_start_matches(['&', '*']);
        name = name.strip_prefix("mut ").unwrap_or(name);
        name = name.strip_prefix("dyn ").unwrap_or(name);
    }

    // 去掉泛型参数
    if let Some(pos) = name.find('<') {
        name = &name[..pos];
    }

    name.rsplit("::").next().unwrap_or(name)
}
