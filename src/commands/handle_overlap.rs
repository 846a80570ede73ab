use crate::cli::Cli;
use crate::common::{OutputFormat, debug_log};
use crate::error::AppError;
use crate::ipv6_utils::is_ipv6_range_overlap;
use crate::output::emit_report;
use crate::overlap::overlap_cidrs;
use crate::range::AddressRange;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OverlapReport {
    pub overlap: bool,
    pub overlapping_cidrs: Vec<String>,
}

/// overlapモードのメイン処理
pub async fn run_overlap(
    args: &Cli,
    (start1, end1): (&str, &str),
    (start2, end2): (&str, &str),
) -> Result<(), AppError> {
    let report = build_overlap_report((start1, end1), (start2, end2));
    emit_report(
        "overlap",
        &report,
        OutputFormat::from_str(&args.output_format),
        args.output.as_deref(),
        &args.mode,
    )
    .await
}

/// 重複判定はフェイルセーフ (不正入力は重複あり)。
/// CIDR一覧は両方の範囲が正しく読めた場合のみ計算する。
pub fn build_overlap_report(
    (start1, end1): (&str, &str),
    (start2, end2): (&str, &str),
) -> OverlapReport {
    let overlap = is_ipv6_range_overlap(start1, end1, start2, end2);

    let overlapping_cidrs = match (
        AddressRange::parse(start1, end1),
        AddressRange::parse(start2, end2),
    ) {
        (Ok(r1), Ok(r2)) => overlap_cidrs(&r1, &r2)
            .into_iter()
            .map(|net| net.to_string())
            .collect(),
        _ => {
            debug_log("skipping CIDR breakdown for malformed ranges");
            Vec::new()
        }
    };

    OverlapReport {
        overlap,
        overlapping_cidrs,
    }
}
