//! 全局 Logger 使用示例
//!
//! 演示如何通过配置初始化全局 Logger，然后使用宏记录日志

use anyhow::Result;
use framelog::log::*;
// 宏定义在 crate root，需要单独导入
use framelog::{logd, loge, logfile, logi, logjson, logw, logxml};

#[derive(serde::Serialize)]
struct User {
    id: u64,
    name: String,
}

fn main() -> Result<()> {
    println!("=== 全局 Logger 示例 ===\n");

    // 1. 从 json5 创建配置
    let config = LoggerConfig::from_json5(
        r#"
        {
            settings: {
                show_head: true,
                show_border: true,
                file_enabled: true,
                dir: "/tmp/framelog",
                level: "debug",
            },
            console: {
                target: "stdout",
                colored: true,
            },
        }
        "#,
    )?;

    // 2. 初始化全局 Logger
    init(config);
    println!("当前配置:\n{}\n", configure());

    // 3. 使用宏记录日志
    logi!("application started");
    logd!(tag: "Net"; "connecting", "127.0.0.1", 8080);
    logw!("user", LogValue::from_struct(User { id: 1, name: "alice".to_string() }));
    loge!(None::<String>);

    // 4. JSON / XML 美化输出
    logjson!(r#"{"id": 1, "name": "framelog", "tags": ["a", "b"]}"#);
    logxml!("<config><item key=\"a\">1</item><item key=\"b\">2</item></config>");

    // 5. 只写文件
    logfile!("only in file");

    // 6. 运行时修改配置
    configure()
        .set_global_tag("Demo")
        .set_show_border(false)
        .set_level(LogLevel::Warn);
    logi!("filtered");
    logw!("tag pinned, no border");

    // 7. 接管 log 门面
    install_log_facade()?;
    ::log::warn!("from the log facade");

    flush()?;
    shutdown()?;
    println!("\n日志文件目录: /tmp/framelog");

    Ok(())
}
