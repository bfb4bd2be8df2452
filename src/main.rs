/// 命令行入口：列出牌、查看候选名、解析路径、审计目录

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mahjong_assets::assets::{candidate_names, resolve_loaded_path, AuditReport, NamingScheme, RECOMMENDED_SOURCES};
use mahjong_assets::{AssetConfig, AssetError, TileKind};

#[derive(Parser, Debug)]
#[command(name = "mahjong-assets", version, about = "麻将牌图片资源工具")]
struct Cli {
    /// JSON 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 覆盖配置中的图片目录
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 列出所有牌的代码、标签和张数
    List,
    /// 显示某种牌的候选文件名（按优先级）
    Names { code: String },
    /// 解析某种牌加载时实际使用的文件（跳过无法解码的候选）
    Resolve { code: String },
    /// 审计图片目录
    Audit {
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
        /// 有警告时返回非零退出码
        #[arg(long)]
        strict: bool,
    },
    /// 创建图片目录并显示推荐的素材来源
    Init,
}

fn load_config(cli: &Cli) -> Result<AssetConfig, AssetError> {
    let mut config = match &cli.config {
        Some(path) => AssetConfig::from_file(path)?,
        None => AssetConfig::default(),
    };
    if let Some(dir) = &cli.dir {
        config.tiles_dir = dir.clone();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode, AssetError> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::List => {
            for kind in TileKind::all() {
                println!("{:<14} {:<3} x{}", kind.code(), kind.label(), kind.copies());
            }
            println!("共 {} 种，{} 张", TileKind::KIND_COUNT, TileKind::TOTAL_TILES);
        }
        Command::Names { code } => {
            let kind: TileKind = code.parse()?;
            let naming = NamingScheme::from_config(&config)?;
            for name in naming.candidates(kind) {
                println!("{}", name);
            }
            log::debug!("内置候选名 {} 个", candidate_names(kind).len());
        }
        Command::Resolve { code } => {
            let kind: TileKind = code.parse()?;
            match resolve_loaded_path(&config, kind)? {
                Some(path) => println!("{}", path.display()),
                None => println!("placeholder ({})", kind.code()),
            }
        }
        Command::Audit { json, strict } => {
            let report = AuditReport::run(&config)?;
            if json {
                let text = serde_json::to_string_pretty(&report)?;
                println!("{}", text);
            } else {
                print!("{}", report);
            }
            if strict && report.warning_count() > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Init => {
            std::fs::create_dir_all(&config.tiles_dir).map_err(|source| AssetError::Io {
                path: config.tiles_dir.clone(),
                source,
            })?;
            println!("图片目录: {}", config.tiles_dir.display());
            println!("推荐的素材来源:");
            for source in RECOMMENDED_SOURCES {
                println!("  - {}: {}（搜索: {}）", source.name, source.url, source.search);
            }
            println!(
                "PNG 格式，推荐透明背景，最小 {}x{} 像素；没有图片时使用占位图",
                config.min_width, config.min_height
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
