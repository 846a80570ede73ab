use crate::address::AddressValue;
use crate::allocator::{find_first_available, find_first_available_strict};
use crate::cli::Cli;
use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::output::emit_report;
use crate::parse::{collect_allocated, parse_address_lines};
use crate::range::AddressRange;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Serialize)]
pub struct NextReport {
    pub range: String,
    pub range_size: u64,
    pub allocated: usize,
    pub next_available: Option<AddressValue>,
    pub exhausted: bool,
}

/// nextサブコマンドのメイン処理
pub async fn run_next(
    args: &Cli,
    start: &str,
    end: &str,
    allocated_files: &[PathBuf],
    strict: bool,
) -> Result<(), AppError> {
    let range = AddressRange::parse(start, end)?;
    let texts = read_allocated_files(allocated_files).await?;
    let report = build_next_report(&range, &texts, strict)?;

    emit_report(
        "next",
        &report,
        OutputFormat::from_str(&args.output_format),
        args.output.as_deref(),
        &args.mode,
    )
    .await
}

/// 割り当て済みファイルを順に読み込む
async fn read_allocated_files(paths: &[PathBuf]) -> Result<Vec<String>, AppError> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        debug_log(format!("reading allocated addresses from {}", path.display()));
        texts.push(fs::read_to_string(path).await?);
    }
    Ok(texts)
}

/// strict の場合は並び替えず、そのままの順序で昇順・重複なしを検証する
pub fn build_next_report(
    range: &AddressRange,
    texts: &[String],
    strict: bool,
) -> Result<NextReport, AppError> {
    let (allocated, next) = if strict {
        let mut allocated = Vec::new();
        for text in texts {
            allocated.extend(parse_address_lines(text)?);
        }
        let next = find_first_available_strict(range, &allocated)?;
        (allocated, next)
    } else {
        let allocated = collect_allocated(texts)?;
        let next = find_first_available(range, &allocated)?;
        (allocated, next)
    };

    Ok(NextReport {
        range: range.to_string(),
        range_size: range.size(),
        allocated: allocated.len(),
        next_available: next,
        exhausted: next.is_none(),
    })
}
