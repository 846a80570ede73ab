use rand::Rng;
use v6_ipam::address::AddressValue;
use v6_ipam::allocator::{
    ensure_strictly_ascending, find_first_available, find_first_available_in,
    find_first_available_strict, find_first_hole, is_consecutive,
};
use v6_ipam::error::AppError;
use v6_ipam::range::AddressRange;

fn seq(values: &[u128]) -> Vec<AddressValue> {
    values.iter().copied().map(AddressValue::new).collect()
}

fn addr(s: &str) -> AddressValue {
    s.parse().unwrap_or_else(|e| panic!("failed to parse {s}: {e}"))
}

fn range(start: &str, end: &str) -> AddressRange {
    AddressRange::parse(start, end).unwrap_or_else(|e| panic!("bad range: {e}"))
}

/// 線形探索による正解
fn linear_first_hole(values: &[AddressValue]) -> AddressValue {
    values
        .windows(2)
        .find(|w| w[1].value() - w[0].value() > 1)
        .map(|w| AddressValue::new(w[0].value() + 1))
        .unwrap_or_else(|| panic!("no hole in sequence"))
}

#[test]
fn consecutive_detection() {
    assert!(!is_consecutive(&[]));
    assert!(is_consecutive(&seq(&[5])));
    assert!(is_consecutive(&seq(&[1, 2, 3])));
    assert!(!is_consecutive(&seq(&[1, 3])));
    // 降順はパニックせず false
    assert!(!is_consecutive(&seq(&[3, 1])));
}

#[test]
fn single_hole_at_any_position() {
    // 境目
    assert_eq!(find_first_hole(&seq(&[0, 1, 3, 4])).unwrap(), AddressValue::new(2));
    // 先頭直後
    assert_eq!(find_first_hole(&seq(&[0, 2, 3])).unwrap(), AddressValue::new(1));
    // 末尾手前
    assert_eq!(find_first_hole(&seq(&[0, 1, 2, 4])).unwrap(), AddressValue::new(3));
}

#[test]
fn three_element_special_cases() {
    assert_eq!(find_first_hole(&seq(&[1, 3, 4])).unwrap(), AddressValue::new(2));
    assert_eq!(find_first_hole(&seq(&[1, 5, 9])).unwrap(), AddressValue::new(2));
    assert_eq!(find_first_hole(&seq(&[1, 2, 4])).unwrap(), AddressValue::new(3));
}

#[test]
fn hole_at_junction_wins_over_later_holes() {
    assert_eq!(find_first_hole(&seq(&[0, 1, 3, 5])).unwrap(), AddressValue::new(2));
    assert_eq!(
        find_first_hole(&seq(&[10, 11, 12, 14, 20, 21])).unwrap(),
        AddressValue::new(13)
    );
}

#[test]
fn find_first_hole_rejects_bad_input() {
    for bad in [seq(&[]), seq(&[7]), seq(&[1, 2, 3])] {
        match find_first_hole(&bad) {
            Err(AppError::InternalInvariantViolation(_)) => {}
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }
}

#[test]
fn find_first_hole_matches_linear_scan_on_random_input() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let len = rng.random_range(2..64);
        let base: u128 = rng.random_range(0..u64::MAX as u128);
        let mut values = Vec::with_capacity(len);
        let mut current = base;
        for _ in 0..len {
            values.push(AddressValue::new(current));
            // たまに隙間を空ける
            current += if rng.random_bool(0.2) { rng.random_range(2..5) } else { 1 };
        }
        if is_consecutive(&values) {
            // 最後の要素をずらして必ず穴を作る
            let last = values.len() - 1;
            values[last] = AddressValue::new(values[last].value() + 1);
        }

        let expected = linear_first_hole(&values);
        let got = find_first_hole(&values).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(got, expected, "sequence: {values:?}");
    }
}

#[test]
fn empty_allocation_returns_start() {
    let r = range("2001:db8::10", "2001:db8::ff");
    assert_eq!(find_first_available(&r, &[]).unwrap(), Some(addr("2001:db8::10")));

    // 1アドレスだけの範囲
    let single = range("::5", "::5");
    assert_eq!(find_first_available(&single, &[]).unwrap(), Some(addr("::5")));
}

#[test]
fn finds_hole_in_small_range() {
    let r = range("::1", "::10");
    let allocated = vec![addr("::1"), addr("::2"), addr("::3"), addr("::5"), addr("::6")];
    assert_eq!(find_first_available(&r, &allocated).unwrap(), Some(addr("::4")));
}

#[test]
fn fully_allocated_range_is_exhausted() {
    let r = range("::1", "::10");
    let allocated = seq(&(1..=16).collect::<Vec<_>>());
    assert_eq!(r.size(), allocated.len() as u64);
    assert_eq!(find_first_available(&r, &allocated).unwrap(), None);
}

#[test]
fn consecutive_allocation_returns_next_after_last() {
    let r = range("::1", "::10");
    let allocated = seq(&(1..=15).collect::<Vec<_>>());
    assert_eq!(find_first_available(&r, &allocated).unwrap(), Some(addr("::10")));

    let allocated = seq(&[1, 2, 3]);
    assert_eq!(find_first_available(&r, &allocated).unwrap(), Some(addr("::4")));
}

#[test]
fn leading_gap_returns_start() {
    let r = range("::1", "::10");
    let allocated = seq(&[3, 4, 5]);
    assert_eq!(find_first_available(&r, &allocated).unwrap(), Some(addr("::1")));
}

#[test]
fn allocation_outside_range_is_rejected() {
    let r = range("::10", "::20");
    for allocated in [seq(&[0x0f, 0x10]), seq(&[0x10, 0x21])] {
        match find_first_available(&r, &allocated) {
            Err(AppError::InvalidAllocation(_)) => {}
            other => panic!("expected InvalidAllocation, got {other:?}"),
        }
    }
}

#[test]
fn inverted_range_is_rejected() {
    match find_first_available_in(addr("::10"), addr("::1"), &[]) {
        Err(AppError::InvalidRange { .. }) => {}
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn top_of_address_space_does_not_overflow() {
    let max = AddressValue::MAX;
    let below = AddressValue::new(u128::MAX - 1);
    let r = AddressRange::new(below, max).unwrap();

    assert_eq!(find_first_available(&r, &[below]).unwrap(), Some(max));
    assert_eq!(find_first_available(&r, &[below, max]).unwrap(), None);
}

#[test]
fn works_on_a_slash_64_without_enumeration() {
    let r = range("2001:db8::", "2001:db8::ffff:ffff:ffff:ffff");
    let start = addr("2001:db8::").value();
    let allocated = seq(&[start, start + 1, start + (1 << 40)]);
    assert_eq!(
        find_first_available(&r, &allocated).unwrap(),
        Some(AddressValue::new(start + 2))
    );
}

#[test]
fn strict_finder_rejects_duplicates_and_unsorted_lists() {
    let r = range("::1", "::10");
    assert!(ensure_strictly_ascending(&seq(&[1, 2, 5])).is_ok());

    for allocated in [seq(&[1, 1, 2]), seq(&[1, 4, 3])] {
        match find_first_available_strict(&r, &allocated) {
            Err(AppError::InvalidAllocation(_)) => {}
            other => panic!("expected InvalidAllocation, got {other:?}"),
        }
    }

    assert_eq!(
        find_first_available_strict(&r, &seq(&[1, 2, 4])).unwrap(),
        Some(addr("::3"))
    );
}
