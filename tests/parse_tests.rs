use v6_ipam::address::AddressValue;
use v6_ipam::parse::{collect_allocated, parse_address_lines};

fn lines_sample() -> String {
    let mut s = String::new();
    s.push_str("# allocated in 2001:db8::/64\n");
    s.push_str("2001:db8::3\n");
    s.push_str("\n");
    s.push_str("  2001:db8::1  \n");
    s.push_str("2001:db8::2 # gateway\n");
    s
}

#[test]
fn parses_addresses_skipping_comments() {
    let got = parse_address_lines(&lines_sample()).unwrap_or_else(|e| panic!("parse err: {e}"));
    let s: Vec<String> = got.iter().map(|a| a.to_string()).collect();
    // 入力順のまま
    assert_eq!(s, vec!["2001:db8::3", "2001:db8::1", "2001:db8::2"]);
}

#[test]
fn reports_line_number_on_bad_address() {
    let text = "::1\n::2\nnot-an-address\n";
    let err = match parse_address_lines(text) {
        Ok(v) => panic!("unexpected success: {v:?}"),
        Err(e) => e.to_string(),
    };
    assert!(err.contains("line 3"), "{err}");
}

#[test]
fn collect_allocated_sorts_and_dedups() {
    let texts = vec![lines_sample(), "2001:db8::1\n2001:db8::10\n".to_string()];
    let got = collect_allocated(&texts).unwrap_or_else(|e| panic!("parse err: {e}"));
    let expected: Vec<AddressValue> = ["2001:db8::1", "2001:db8::2", "2001:db8::3", "2001:db8::10"]
        .iter()
        .map(|s| s.parse().unwrap_or_else(|e| panic!("{e}")))
        .collect();
    assert_eq!(got, expected);
}
