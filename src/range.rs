use crate::address::AddressValue;
use crate::error::AppError;
use serde::Serialize;
use std::fmt;

/// 閉区間 [start, end] のIPv6アドレス範囲。常に start <= end を満たす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRange {
    start: AddressValue,
    end: AddressValue,
}

impl AddressRange {
    pub fn new(start: AddressValue, end: AddressValue) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(AddressRange { start, end })
    }

    /// start <= end が呼び出し側で保証されている場合に使う
    pub(crate) fn from_ordered(start: AddressValue, end: AddressValue) -> Self {
        debug_assert!(start <= end, "start must be <= end");
        AddressRange { start, end }
    }

    /// 文字列2つから範囲を作る
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        AddressRange::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> AddressValue {
        self.start
    }

    pub fn end(&self) -> AddressValue {
        self.end
    }

    /// end - start (区間の幅)。不変条件により負にならない。
    pub fn span(&self) -> u128 {
        self.end.value() - self.start.value()
    }

    /// 範囲内のアドレス数。u64に収まらない場合は u64::MAX で飽和する。
    pub fn size(&self) -> u64 {
        let size = self.span().saturating_add(1);
        u64::try_from(size).unwrap_or(u64::MAX)
    }

    /// 使用数が容量に達しているか (end - start <= used)
    pub fn is_full(&self, used: u64) -> bool {
        self.span() <= u128::from(used)
    }

    pub fn contains(&self, addr: AddressValue) -> bool {
        self.start <= addr && addr <= self.end
    }

    /// 閉区間同士が1アドレスでも重なっていれば true
    pub fn overlaps(&self, other: &AddressRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
