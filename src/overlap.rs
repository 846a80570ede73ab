use crate::address::AddressValue;
use crate::range::AddressRange;
use ipnet::Ipv6Net;
use std::cmp::{max, min};
use std::net::Ipv6Addr;

/// 2つの範囲の共通部分。重ならなければ None。
pub fn intersection(a: &AddressRange, b: &AddressRange) -> Option<AddressRange> {
    let overlap_start = max(a.start(), b.start());
    let overlap_end = min(a.end(), b.end());

    if overlap_start <= overlap_end {
        Some(AddressRange::from_ordered(overlap_start, overlap_end))
    } else {
        None
    }
}

/// 2つの範囲の重複部分をCIDR単位で返す
pub fn overlap_cidrs(a: &AddressRange, b: &AddressRange) -> Vec<Ipv6Net> {
    intersection(a, b)
        .map(|r| summarize_range(&r))
        .unwrap_or_default()
}

/// 開始～終了アドレスを最小個数のIPv6 CIDRに分割
pub fn summarize_range(range: &AddressRange) -> Vec<Ipv6Net> {
    let mut cidrs = Vec::new();
    let mut current = range.start().value();
    let end = range.end().value();

    loop {
        let Some(prefix_len) = largest_ipv6_block(current, end) else {
            break;
        };
        let Ok(net) = Ipv6Net::new(Ipv6Addr::from(current), prefix_len) else {
            // フェイルセーフ
            break;
        };
        cidrs.push(net);

        let last = AddressValue::from(net.broadcast()).value();
        // ::/0 や末尾 ffff:...:ffff に到達した場合はここで終わる
        if last >= end {
            break;
        }
        current = last + 1;
    }

    cidrs
}

/// current から始まり end を超えない最大ブロックのプレフィックス長 (0..=128)。
/// current > end の場合は None。
pub fn largest_ipv6_block(current: u128, end: u128) -> Option<u8> {
    let remaining = end.checked_sub(current)?;

    // 末尾ゼロビット数 (current == 0 なら 128)
    let tz = current.trailing_zeros();
    // 残り範囲に収まるビット数。全域 (2^128 個) は u128 に収まらないので 128 とする
    let span = match remaining.checked_add(1) {
        Some(count) => count.ilog2(),
        None => 128,
    };
    let max_block = tz.min(span);
    Some((128 - max_block) as u8)
}
