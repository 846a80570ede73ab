use v6_ipam::overlap::{intersection, largest_ipv6_block, overlap_cidrs, summarize_range};
use v6_ipam::range::AddressRange;

fn range(start: &str, end: &str) -> AddressRange {
    AddressRange::parse(start, end).unwrap_or_else(|e| panic!("bad range: {e}"))
}

fn cidr_strings(r: &AddressRange) -> Vec<String> {
    summarize_range(r).iter().map(|n| n.to_string()).collect()
}

#[test]
fn largest_block_basic_cases() {
    assert_eq!(largest_ipv6_block(0, 255), Some(120));
    assert_eq!(largest_ipv6_block(0, 511), Some(119));
    // 単一アドレス → /128
    assert_eq!(largest_ipv6_block(1, 1), Some(128));
    // 全域
    assert_eq!(largest_ipv6_block(0, u128::MAX), Some(0));
}

#[test]
fn largest_block_rejects_reversed_bounds() {
    // 逆順はパニックせず None
    assert_eq!(largest_ipv6_block(5, 1), None);
    assert_eq!(largest_ipv6_block(u128::MAX, 0), None);
}

#[test]
fn summarizes_range_minimal_sets() {
    assert_eq!(cidr_strings(&range("::", "::ff")), vec!["::/120"]);
    assert_eq!(cidr_strings(&range("::1", "::3")), vec!["::1/128", "::2/127"]);
    assert_eq!(
        cidr_strings(&range("::", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff")),
        vec!["::/0"]
    );
    assert_eq!(
        cidr_strings(&range(
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        )),
        vec!["ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe/127"]
    );
}

#[test]
fn intersection_of_ranges() {
    let a = range("2001:db8::", "2001:db8::ff");
    let b = range("2001:db8::80", "2001:db8::1ff");
    assert_eq!(intersection(&a, &b), Some(range("2001:db8::80", "2001:db8::ff")));
    assert_eq!(intersection(&a, &range("2001:db8::100", "2001:db8::1ff")), None);

    let got: Vec<String> = overlap_cidrs(&a, &b).iter().map(|n| n.to_string()).collect();
    assert_eq!(got, vec!["2001:db8::80/121"]);
    assert!(overlap_cidrs(&a, &range("2001:db8::100", "2001:db8::1ff")).is_empty());
}
