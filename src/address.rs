use crate::error::AppError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// IPv6アドレス1つを表す128ビット符号なし整数。
/// 加減算は常にチェックされ、ラップアラウンドせず `OutOfDomain` を返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AddressValue(u128);

impl AddressValue {
    pub const MIN: AddressValue = AddressValue(0);
    pub const MAX: AddressValue = AddressValue(u128::MAX);

    pub const fn new(value: u128) -> Self {
        AddressValue(value)
    }

    pub const fn value(self) -> u128 {
        self.0
    }

    pub fn to_ipv6(self) -> Ipv6Addr {
        Ipv6Addr::from(self.0)
    }

    /// 整数を加算する。u128::MAX を超える場合はエラー。
    pub fn checked_add(self, rhs: u128) -> Result<Self, AppError> {
        self.0.checked_add(rhs).map(AddressValue).ok_or_else(|| {
            AppError::OutOfDomain(format!("{} + {} exceeds the maximum address", self, rhs))
        })
    }

    /// 整数を減算する。負になる場合はエラー。
    pub fn checked_sub(self, rhs: u128) -> Result<Self, AppError> {
        self.0.checked_sub(rhs).map(AddressValue).ok_or_else(|| {
            AppError::OutOfDomain(format!("{} - {} is below ::", self, rhs))
        })
    }

    pub fn checked_add_addr(self, rhs: AddressValue) -> Result<Self, AppError> {
        self.checked_add(rhs.0)
    }

    pub fn checked_sub_addr(self, rhs: AddressValue) -> Result<Self, AppError> {
        self.checked_sub(rhs.0)
    }

    /// 2つのアドレスの差 (self - other)。self < other なら None。
    pub fn distance_from(self, other: AddressValue) -> Option<u128> {
        self.0.checked_sub(other.0)
    }

    /// タグ値用に "::" を "--" へ置き換えた表記
    pub fn to_tag_value(self) -> String {
        to_tag_value(&self.to_string())
    }

    /// ホスト名に使える表記 ("::" → "--", ":" → "-")
    pub fn to_hostname(self) -> String {
        to_hostname(&self.to_string())
    }
}

impl From<u128> for AddressValue {
    fn from(v: u128) -> Self {
        AddressValue(v)
    }
}

impl From<AddressValue> for u128 {
    fn from(v: AddressValue) -> Self {
        v.0
    }
}

impl From<Ipv6Addr> for AddressValue {
    fn from(addr: Ipv6Addr) -> Self {
        AddressValue(u128::from_be_bytes(addr.octets()))
    }
}

impl From<AddressValue> for Ipv6Addr {
    fn from(v: AddressValue) -> Self {
        v.to_ipv6()
    }
}

impl FromStr for AddressValue {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = s.trim().parse::<Ipv6Addr>()?;
        Ok(AddressValue::from(addr))
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ipv6(), f)
    }
}

// JSON出力ではIPv6表記の文字列として書き出す
impl Serialize for AddressValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn to_tag_value(ip: &str) -> String {
    ip.replace("::", "--")
}

pub fn to_hostname(ip: &str) -> String {
    ip.replace("::", "--").replace(':', "-")
}

pub fn from_tag_value(tag: &str) -> String {
    tag.replace("--", "::")
}

/// IPv6文字列を128ビット整数へ
pub fn address_to_u128(ip: &str) -> Result<u128, AppError> {
    Ok(ip.parse::<AddressValue>()?.value())
}

/// 128ビット整数をIPv6文字列へ
pub fn u128_to_address(value: u128) -> String {
    AddressValue::new(value).to_string()
}
