//! 割り当て済みアドレス列から、次に払い出せるアドレスを探す。
//!
//! IPv6 の範囲は全列挙できない (/64 だけで 2^64 個) ため、
//! 昇順に並んだ割り当て済みリストを二分して最初の「穴」を見つける。

use crate::address::AddressValue;
use crate::common::debug_log;
use crate::error::AppError;
use crate::range::AddressRange;

/// 昇順の列が隙間なく連続しているか。
/// 末尾 - 先頭 == 要素数 - 1 の1回の比較で判定する。
pub fn is_consecutive(seq: &[AddressValue]) -> bool {
    let (Some(first), Some(last)) = (seq.first(), seq.last()) else {
        return false;
    };
    match last.distance_from(*first) {
        Some(span) => span == (seq.len() - 1) as u128,
        // 降順になっている場合
        None => false,
    }
}

/// 連続していない昇順の列から、最初に欠けている値を二分法で求める。
///
/// 要素数2未満、または連続している列を渡すのは呼び出し側のバグなので
/// `InternalInvariantViolation` を返す。
pub fn find_first_hole(seq: &[AddressValue]) -> Result<AddressValue, AppError> {
    if seq.len() < 2 {
        return Err(AppError::InternalInvariantViolation(format!(
            "cannot search a hole in a sequence of {} address(es)",
            seq.len()
        )));
    }
    if is_consecutive(seq) {
        return Err(AppError::InternalInvariantViolation(format!(
            "cannot search a hole in consecutive range [{}, {}]",
            seq[0],
            seq[seq.len() - 1]
        )));
    }

    // 2要素で連続していなければ、穴は先頭の直後
    if seq.len() == 2 {
        return seq[0].checked_add(1);
    }

    let (left, right) = seq.split_at(seq.len() / 2);

    // 3要素の特殊ケース: [1, 3, 4] や [1, 5, 9]
    if left.len() == 1 {
        if is_consecutive(right) {
            return left[0].checked_add(1);
        }
        if !is_consecutive(&[left[0], right[0]]) {
            return left[0].checked_add(1);
        }
    }

    // 両側が連続していれば穴は境目にある: [1, 2, 4, 5]
    if is_consecutive(left) && is_consecutive(right) {
        return left[left.len() - 1].checked_add(1);
    }

    if !is_consecutive(left) {
        return find_first_hole(left);
    }

    // 左が連続で右に穴がある場合でも、境目の穴の方が先: [1, 2, 4, 6]
    let junction = left[left.len() - 1].checked_add(1)?;
    if junction != right[0] {
        return Ok(junction);
    }
    find_first_hole(right)
}

/// 範囲内で最初に空いているアドレスを返す。満杯なら `None`。
///
/// `allocated` は昇順・重複なしであること。範囲外の要素があれば
/// `InvalidAllocation` を返すが、順序そのものは検証しない
/// (検証が必要なら [`find_first_available_strict`] を使う)。
pub fn find_first_available(
    range: &AddressRange,
    allocated: &[AddressValue],
) -> Result<Option<AddressValue>, AppError> {
    let start = range.start();
    let end = range.end();

    let (Some(&first), Some(&last)) = (allocated.first(), allocated.last()) else {
        return Ok(Some(start));
    };

    if first < start || last > end {
        debug_log(format!(
            "allocated [{}, {}] is not inside {}",
            first, last, range
        ));
        return Err(AppError::InvalidAllocation(format!(
            "[{}, {}] is an invalid allocated ip range, it's not a sub range of ip range {}",
            first, last, range
        )));
    }

    // start + 割り当て数 > end なら満杯 (溢れる場合も同様)
    let occupied_end = start.value().checked_add(allocated.len() as u128);
    if occupied_end.is_none_or(|v| v > end.value()) {
        debug_log(format!(
            "range {} is fully occupied ({} allocated)",
            range,
            allocated.len()
        ));
        return Ok(None);
    }

    if first > start {
        return Ok(Some(start));
    }

    if is_consecutive(allocated) {
        // 上の容量チェックにより last + 1 <= end
        return last.checked_add(1).map(Some);
    }

    find_first_hole(allocated).map(Some)
}

/// 生の start/end から範囲を組み立てて [`find_first_available`] を呼ぶ
pub fn find_first_available_in(
    start: AddressValue,
    end: AddressValue,
    allocated: &[AddressValue],
) -> Result<Option<AddressValue>, AppError> {
    let range = AddressRange::new(start, end)?;
    find_first_available(&range, allocated)
}

/// 割り当て済みリストが狭義単調増加であることを確認する。O(n)。
pub fn ensure_strictly_ascending(allocated: &[AddressValue]) -> Result<(), AppError> {
    match allocated.windows(2).find(|w| w[0] >= w[1]) {
        Some(w) => Err(AppError::InvalidAllocation(format!(
            "allocated addresses must be strictly ascending, found {} followed by {}",
            w[0], w[1]
        ))),
        None => Ok(()),
    }
}

/// 順序と重複を検証してから [`find_first_available`] を呼ぶ
pub fn find_first_available_strict(
    range: &AddressRange,
    allocated: &[AddressValue],
) -> Result<Option<AddressValue>, AppError> {
    ensure_strictly_ascending(allocated)?;
    find_first_available(range, allocated)
}
