// ==========================================
// 项目会议纪要助手 - 命令行入口
// ==========================================
// 用法:
//   meeting-minutes [--config <path>] compose <opportunity|bidding|kickoff|all> <record.json>
//   meeting-minutes [--config <path>] paste [--merge <record.json>]   (从标准输入读取粘贴文本)
//   meeting-minutes [--config <path>] export <record.json> [dir]
// ==========================================

use anyhow::{bail, Context, Result};
use meeting_minutes::importer::{PasteSource, StdinSource};
use meeting_minutes::{logging, AppConfig, MinutesApi, APP_NAME, VERSION};
use std::path::{Path, PathBuf};

const USAGE: &str = "用法:
  meeting-minutes [--config <path>] compose <opportunity|bidding|kickoff|all> <record.json>
  meeting-minutes [--config <path>] paste [--merge <record.json>]
  meeting-minutes [--config <path>] export <record.json> [dir]";

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    tracing::info!("{} v{}", APP_NAME, VERSION);

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = take_option(&mut args, "--config")?;
    let config = AppConfig::load(config_path.as_deref()).context("加载配置失败")?;
    let api = MinutesApi::new(config);

    let mut args = args.into_iter();
    match args.next().as_deref() {
        Some("compose") => {
            let (Some(kind), Some(record)) = (args.next(), args.next()) else {
                bail!("compose 需要纪要类型与数据文件\n{}", USAGE);
            };
            let form = api.import_file(Path::new(&record))?;
            if kind == "all" {
                for doc in api.compose_all(&form) {
                    println!("==================== {} ====================", doc.title);
                    println!("{}", doc);
                }
            } else {
                println!("{}", api.compose_named(&kind, &form)?);
            }
        }
        Some("paste") => {
            let mut rest: Vec<String> = args.collect();
            let merge = take_option(&mut rest, "--merge")?;
            let Some(text) = StdinSource.read_text().await else {
                eprintln!("未读取到粘贴内容");
                return Ok(());
            };
            match merge {
                Some(path) => {
                    let mut form = api.import_file(&path)?;
                    let outcome = api.apply_paste(&mut form, &text);
                    report_filled(outcome.filled);
                    println!("{}", api.export_json(&form)?);
                }
                None => {
                    let patch = api.paste_patch(&text);
                    report_filled(patch.filled);
                    println!("{}", serde_json::to_string_pretty(&patch.record)?);
                }
            }
        }
        Some("export") => {
            let Some(record) = args.next() else {
                bail!("export 需要数据文件\n{}", USAGE);
            };
            let dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
            let form = api.import_file(Path::new(&record))?;
            let path = api.export_to_dir(&form, &dir)?;
            println!("{}", path.display());
        }
        _ => bail!("{}", USAGE),
    }
    Ok(())
}

fn report_filled(filled: usize) {
    if filled == 0 {
        eprintln!("未识别到有效数据，请检查复制内容。");
    } else {
        eprintln!("成功填充 {} 项", filled);
    }
}

/// 取出并移除 `--name <value>` 形式的参数
fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        bail!("{} 需要一个路径参数", name);
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(value)))
}
