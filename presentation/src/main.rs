//! # 命令行入口
//!
//! 运行一种装配方式，在标准输出打印一行 `RES=<值>` 或错误信息。
//! 日志写到标准错误。装配失败时进程以状态码 1 退出。

use anyhow::Context;
use clap::{Parser, Subcommand};
use config_impl::AppSettings;
use infrastructure_composition::{
    render_report, CompositionBuilder, LoggingConfig, ReflectMode, WiringDriver, WiringOutcome,
};
use infrastructure_common::InfrastructureError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "presentation")]
#[command(about = "依赖注入装配演示", version)]
struct Args {
    /// 设置文件路径（默认查找当前目录下可选的 presentation.toml）
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// 日志级别，覆盖设置文件
    #[arg(long, global = true)]
    log_level: Option<tracing::Level>,

    #[command(subcommand)]
    command: Command,
}

/// 装配方式
#[derive(Subcommand, Debug)]
enum Command {
    /// 静态装配：固定类型，直接构造
    Static,

    /// 按文本类型清单装配
    Reflect {
        /// 类型清单路径
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 使用单依赖构造器一次完成装配
        #[arg(long, conflicts_with = "data_only")]
        single_phase: bool,

        /// 只读取数据访问实现
        #[arg(long)]
        data_only: bool,
    },

    /// 按 bean 描述文件创建容器
    Xml {
        /// 描述文件路径（.toml / .json / .yaml）
        #[arg(short, long)]
        descriptor: Option<PathBuf>,

        /// 业务 bean 名称
        #[arg(short, long, default_value = "metier")]
        bean: String,
    },

    /// 扫描注解组件创建容器
    Annotation {
        /// 扫描的包，可重复
        #[arg(short, long = "package")]
        packages: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let settings = AppSettings::load(args.settings.as_deref()).context("加载应用设置失败")?;

    let mut logging =
        LoggingConfig::from_settings(&settings.logging).context("日志级别无效")?;
    if let Some(level) = args.log_level {
        logging = logging.with_level(level);
    }

    let driver = CompositionBuilder::new()
        .with_logging(logging)
        .build()
        .context("构建装配驱动失败")?;

    info!("执行装配: {:?}", args.command);
    let result = run(&driver, &settings, args.command);
    println!("{}", render_report(&result));

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("装配失败: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(
    driver: &WiringDriver,
    settings: &AppSettings,
    command: Command,
) -> Result<WiringOutcome, InfrastructureError> {
    match command {
        Command::Static => driver.run_static(),
        Command::Reflect {
            config,
            single_phase,
            data_only,
        } => {
            let mode = if data_only {
                ReflectMode::DataOnly
            } else if single_phase {
                ReflectMode::SinglePhase
            } else {
                ReflectMode::TwoPhase
            };
            let path = config.unwrap_or_else(|| settings.config_path.clone());
            driver.run_from_file(path, mode)
        }
        Command::Xml { descriptor, bean } => {
            let path = descriptor.unwrap_or_else(|| settings.descriptor_path.clone());
            driver.run_descriptor(path, &bean)
        }
        Command::Annotation { packages } => {
            if packages.is_empty() {
                driver.run_annotation(&settings.package_refs())
            } else {
                let packages: Vec<&str> = packages.iter().map(String::as_str).collect();
                driver.run_annotation(&packages)
            }
        }
    }
}
