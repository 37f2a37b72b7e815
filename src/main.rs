// ==========================================
// 业务流程再造建议系统 - 命令行主入口
// ==========================================
// 子命令: report / analyze / prompt / ask
// ==========================================

use anyhow::Context;
use bpr_agent::engine::ReportRequest;
use bpr_agent::{logging, AppConfig, ReportApi, ReportContext};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bpr-agent", version, about = "Business Process Reengineering Suggestion Agent")]
struct Cli {
    /// JSON 配置文件（可选,环境变量优先级更高）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出 JSON 格式日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 生成完整报告（调用补全服务）
    Report {
        /// 流程文档（.pdf/.txt/.md）
        #[arg(long)]
        process: PathBuf,
        /// 绩效表（.xlsx/.xls/.csv）
        #[arg(long)]
        performance: PathBuf,
        /// 流程图（可选,缺失时仅告警）
        #[arg(long)]
        diagram: Option<PathBuf>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        org: Option<String>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// 仅输出指标与低效标记（JSON）
    Analyze {
        #[arg(long)]
        performance: PathBuf,
    },
    /// 打印组装后的提示词（不调用补全服务）
    Prompt {
        #[arg(long)]
        process: PathBuf,
        #[arg(long)]
        performance: PathBuf,
    },
    /// 基于上一次报告的上下文追问
    Ask {
        /// 报告目录中的 context.txt
        #[arg(long)]
        context: PathBuf,
        #[arg(long)]
        question: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", bpr_agent::APP_NAME, bpr_agent::VERSION);

    let mut config = AppConfig::load(cli.config.as_deref()).context("加载配置失败")?;
    if let Command::Report {
        output_dir: Some(dir),
        ..
    } = &cli.command
    {
        config.output_dir = dir.clone();
    }
    tracing::debug!(config = ?config, "配置加载完成");

    let api = ReportApi::from_config(&config)?;

    match cli.command {
        Command::Report {
            process,
            performance,
            diagram,
            user,
            org,
            ..
        } => {
            let request = ReportRequest {
                process_path: process,
                performance_path: performance,
                diagram_path: diagram,
                context: ReportContext::new(user.as_deref(), org.as_deref()),
            };
            let outcome = api.generate_report(&request).await?;

            println!("Run ID: {}", outcome.run_id);
            println!("{}", outcome.analysis.summary);
            for flag in &outcome.analysis.flags {
                println!("! {}", flag);
            }
            for warning in &outcome.warnings {
                println!("warning: {}", warning);
            }
            println!("Text report: {}", outcome.text_report_path.display());
            for path in &outcome.rendered_paths {
                println!("Rendered: {}", path.display());
            }
            println!("Context: {}", outcome.context_path.display());
        }
        Command::Analyze { performance } => {
            let analysis = api.analyze(&performance)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Prompt {
            process,
            performance,
        } => {
            println!("{}", api.preview_prompt(&process, &performance)?);
        }
        Command::Ask { context, question } => {
            println!("{}", api.ask_followup_from_file(&context, &question).await?);
        }
    }

    Ok(())
}
