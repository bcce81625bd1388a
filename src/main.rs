use anyhow::{Context, Result};
use sql_log_assembler::{app, config::Config};
use std::env;
use std::path::PathBuf;

const USAGE: &str = "用法: sql-assembler-cli <日志文件>\n\
结果写入 <日志文件>.out，已存在的文件会被覆盖。";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 1 {
        println!("{USAGE}");
        return Ok(());
    }
    let input = PathBuf::from(&args[0]);

    let config_path = env::var_os("SQL_ASSEMBLER_CONFIG").map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("加载配置失败")?;

    #[cfg(feature = "logging")]
    let _guard = sql_log_assembler::logging::init_logging(&config.log)
        .context("初始化日志失败")?;

    let summary = app::run(&config, &input)
        .with_context(|| format!("处理文件失败: {}", input.display()))?;
    println!("输出已写入 {}", summary.output_path.display());
    Ok(())
}
