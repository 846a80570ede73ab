use crate::cli::Cli;
use crate::common::OutputFormat;
use crate::error::AppError;
use crate::ipv6_utils::{is_valid_unicast_ipv6_range, network_cidr_of_range};
use crate::output::emit_report;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckRangeReport {
    pub network: Option<String>,
    pub start: String,
    pub end: String,
    pub gateway: String,
    pub valid: bool,
}

/// check-rangeサブコマンドのメイン処理
pub async fn run_check_range(
    args: &Cli,
    start: &str,
    end: &str,
    gateway: &str,
    prefix_len: u8,
) -> Result<(), AppError> {
    let report = build_check_range_report(start, end, gateway, prefix_len);
    emit_report(
        "check-range",
        &report,
        OutputFormat::from_str(&args.output_format),
        args.output.as_deref(),
        &args.mode,
    )
    .await
}

/// パースできない入力は valid = false として報告する
pub fn build_check_range_report(
    start: &str,
    end: &str,
    gateway: &str,
    prefix_len: u8,
) -> CheckRangeReport {
    CheckRangeReport {
        network: network_cidr_of_range(start, prefix_len),
        start: start.to_string(),
        end: end.to_string(),
        gateway: gateway.to_string(),
        valid: is_valid_unicast_ipv6_range(start, end, gateway, prefix_len),
    }
}
