use anyhow::Result;
use clap::Parser;
use exam_extract::orchestrator::App;
use exam_extract::utils::logging;
use exam_extract::Config;
use std::path::PathBuf;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "exam_extract", about = "从保存的试题 HTML 页面中批量提取题目")]
struct Args {
    /// 存放 HTML 文件的目录（递归扫描）
    input_dir: PathBuf,

    /// 输出文本文件名（写入输出目录的 Text 子目录）
    #[arg(short, long, default_value = "结果.txt")]
    output: String,

    /// 同时导出 Word 文档（写入输出目录的 Word 子目录）
    #[arg(long)]
    word: bool,

    /// 同时导出 JSON 结果（与文本文件同名）
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    let args = Args::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config)?
        .run(&args.input_dir, &args.output, args.word, args.json)
        .await?;

    Ok(())
}
