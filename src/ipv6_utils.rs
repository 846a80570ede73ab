//! 文字列で受け取ったIPv6アドレス・CIDRに対する判定と導出。
//!
//! 真偽値を返す判定はパース失敗を「不正」(false) として扱う。
//! ただし範囲の重複判定だけは、誤って重なる範囲を許可しないよう
//! パース失敗時に「重複あり」(true) を返す。

use crate::address::AddressValue;
use crate::common::debug_log;
use crate::error::AppError;
use crate::prefix::{self, NetworkPrefix, PrefixBounds};
use crate::range::AddressRange;

pub fn is_ipv6_address(ip: &str) -> bool {
    ip.parse::<AddressValue>().is_ok()
}

/// マルチキャスト・リンクローカル・サイトローカル以外のIPv6アドレスか
pub fn is_ipv6_unicast_address(ip: &str) -> bool {
    match ip.parse::<AddressValue>() {
        Ok(addr) => prefix::is_unicast(addr),
        Err(_) => false,
    }
}

/// start/prefix_len のブロックに end と gateway が収まっているか
pub fn is_valid_unicast_ipv6_range(start: &str, end: &str, gateway: &str, prefix_len: u8) -> bool {
    let (Ok(s), Ok(e), Ok(g)) = (
        start.parse::<AddressValue>(),
        end.parse::<AddressValue>(),
        gateway.parse::<AddressValue>(),
    ) else {
        return false;
    };
    prefix::is_valid_unicast_range(s, e, g, prefix_len)
}

/// 2つの範囲が重なるか。入力が不正な場合は重複ありとみなす。
pub fn is_ipv6_range_overlap(start1: &str, end1: &str, start2: &str, end2: &str) -> bool {
    let ranges = AddressRange::parse(start1, end1)
        .and_then(|r1| AddressRange::parse(start2, end2).map(|r2| (r1, r2)));
    match ranges {
        Ok((r1, r2)) => r1.overlaps(&r2),
        Err(e) => {
            debug_log(format!(
                "treating [{start1}, {end1}] and [{start2}, {end2}] as overlapping: {e}"
            ));
            true
        }
    }
}

/// プレフィックス長が範囲内かつユニキャストなネットワークCIDRか
pub fn is_valid_unicast_network_cidr(cidr: &str, bounds: PrefixBounds) -> bool {
    match cidr.parse::<NetworkPrefix>() {
        Ok(prefix) => prefix.is_valid_unicast(bounds),
        Err(_) => false,
    }
}

pub fn is_ipv6_in_range(ip: &str, start: &str, end: &str) -> Result<bool, AppError> {
    let range = AddressRange::parse(start, end)?;
    Ok(range.contains(ip.parse()?))
}

pub fn is_ipv6_in_cidr_range(ip: &str, cidr: &str) -> Result<bool, AppError> {
    let prefix = cidr.parse::<NetworkPrefix>()?;
    Ok(prefix.contains(ip.parse()?))
}

/// 範囲内のアドレス数 (u64::MAX で飽和)
pub fn ipv6_range_size(start: &str, end: &str) -> Result<u64, AppError> {
    Ok(AddressRange::parse(start, end)?.size())
}

pub fn is_ipv6_range_full(start: &str, end: &str, used: u64) -> Result<bool, AppError> {
    Ok(AddressRange::parse(start, end)?.is_full(used))
}

/// ホスト部を落とした正規形 ("2001:db8::1/64" → "2001:db8::/64")
pub fn formal_cidr(cidr: &str) -> Result<String, AppError> {
    Ok(cidr.parse::<NetworkPrefix>()?.formal())
}

pub fn netmask_of_cidr(cidr: &str) -> Result<String, AppError> {
    Ok(cidr.parse::<NetworkPrefix>()?.netmask().to_string())
}

/// 割り当て可能な先頭アドレス
pub fn start_ip_of_cidr(cidr: &str) -> Result<String, AppError> {
    Ok(cidr.parse::<NetworkPrefix>()?.first_usable_address().to_string())
}

pub fn end_ip_of_cidr(cidr: &str) -> Result<String, AppError> {
    Ok(cidr.parse::<NetworkPrefix>()?.last_address().to_string())
}

pub fn gateway_of_cidr(cidr: &str) -> Result<String, AppError> {
    Ok(cidr.parse::<NetworkPrefix>()?.gateway_address().to_string())
}

pub fn prefix_len_of_cidr(cidr: &str) -> Result<u8, AppError> {
    Ok(cidr.parse::<NetworkPrefix>()?.prefix_len())
}

/// start/prefix_len が属するネットワークのCIDR表記。失敗時は None。
pub fn network_cidr_of_range(start: &str, prefix_len: u8) -> Option<String> {
    let addr = start.parse::<AddressValue>().ok()?;
    NetworkPrefix::new(addr, prefix_len).ok().map(|p| p.formal())
}

pub fn netmask_of_range(start: &str, prefix_len: u8) -> Option<String> {
    let addr = start.parse::<AddressValue>().ok()?;
    NetworkPrefix::new(addr, prefix_len)
        .ok()
        .map(|p| p.netmask().to_string())
}
