use crate::address::AddressValue;
use crate::error::AppError;
use std::collections::BTreeSet;

/// 割り当て済みアドレスのテキスト (1行1アドレス) をパースする。
/// 空行と '#' から始まる行は読み飛ばす。行末の '#' 以降もコメント扱い。
pub fn parse_address_lines(text: &str) -> Result<Vec<AddressValue>, AppError> {
    let mut addrs = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((body, _comment)) => body.trim(),
            None => raw.trim(),
        };
        if line.is_empty() {
            continue;
        }

        let addr = line
            .parse::<AddressValue>()
            .map_err(|e| AppError::ParseError(format!("line {}: '{}': {}", idx + 1, line, e)))?;
        addrs.push(addr);
    }

    Ok(addrs)
}

/// 複数テキストをまとめてパースし、昇順・重複なしのリストにする
pub fn collect_allocated(texts: &[String]) -> Result<Vec<AddressValue>, AppError> {
    let mut set = BTreeSet::new();
    for text in texts {
        set.extend(parse_address_lines(text)?);
    }
    // BTreeSet なので既に昇順
    Ok(set.into_iter().collect())
}
