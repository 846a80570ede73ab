use std::{io, net::AddrParseError, num::ParseIntError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // IOまわりのエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // JSON出力のシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // 汎用的なパースエラー
    #[error("Parse error: {0}")]
    ParseError(String),

    // 特定の入力が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Ipv6Addr のパース失敗
    #[error("Address parse error: {0}")]
    AddrParseError(#[from] AddrParseError),

    // Ipv6Net (CIDR表記) のパース失敗
    #[error("CIDR parse error: {0}")]
    NetParse(#[from] ipnet::AddrParseError),

    // プレフィックス長が 0..=128 の範囲外
    #[error("Prefix length error: {0}")]
    PrefixLen(#[from] ipnet::PrefixLenError),

    // 文字列 → 数値パース失敗
    #[error("Integer parse error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // start > end の範囲指定
    #[error("[{start}, {end}] is an invalid ip range, end ip must be greater than start ip")]
    InvalidRange { start: String, end: String },

    // 割り当て済みリストが範囲外、または昇順でない
    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),

    // 内部の事前条件違反 (呼び出し側のバグ)
    #[error("Internal invariant violation: {0}")]
    InternalInvariantViolation(String),

    // 128ビット符号なし整数の範囲外への演算
    #[error("Out of 128-bit address domain: {0}")]
    OutOfDomain(String),
}
