use crate::address::AddressValue;
use crate::cli::Cli;
use crate::common::OutputFormat;
use crate::error::AppError;
use crate::output::emit_report;
use crate::prefix::{NetworkPrefix, PrefixBounds};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CidrReport {
    pub cidr: String,
    pub prefix_len: u8,
    pub netmask: AddressValue,
    pub network: AddressValue,
    pub gateway: AddressValue,
    pub first_usable: AddressValue,
    pub last: AddressValue,
    pub size: u64,
    pub valid_unicast: bool,
}

/// cidrサブコマンドのメイン処理
pub async fn run_cidr(args: &Cli, cidr: &str) -> Result<(), AppError> {
    let report = build_cidr_report(cidr, args.prefix_bounds())?;
    emit_report(
        "cidr",
        &report,
        OutputFormat::from_str(&args.output_format),
        args.output.as_deref(),
        &args.mode,
    )
    .await
}

pub fn build_cidr_report(cidr: &str, bounds: PrefixBounds) -> Result<CidrReport, AppError> {
    let prefix = cidr.parse::<NetworkPrefix>()?;
    Ok(CidrReport {
        cidr: prefix.formal(),
        prefix_len: prefix.prefix_len(),
        netmask: prefix.netmask(),
        network: prefix.network_address(),
        gateway: prefix.gateway_address(),
        first_usable: prefix.first_usable_address(),
        last: prefix.last_address(),
        size: prefix.size(),
        valid_unicast: prefix.is_valid_unicast(bounds),
    })
}
