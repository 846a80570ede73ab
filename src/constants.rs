/// 定数の共通化

/// ユニキャスト用として受け付ける最小のプレフィックス長
pub const IPV6_PREFIX_LEN_MIN: u8 = 64;

/// ユニキャスト用として受け付ける最大のプレフィックス長
pub const IPV6_PREFIX_LEN_MAX: u8 = 126;

/// これ未満のプレフィックス長では先頭2アドレス(ネットワーク/ゲートウェイ)を予約する
pub const RESERVED_HEAD_PREFIX_LEN: u8 = 127;

/// ユニキャストの先頭アドレスとして許可しないスコープ
/// (ネットワークアドレス, プレフィックス長, ラベル)
pub const NON_UNICAST_SCOPES: &[(u128, u8, &str)] = &[
    (0xff00_0000_0000_0000_0000_0000_0000_0000, 8, "multicast"),
    (0xfe80_0000_0000_0000_0000_0000_0000_0000, 10, "link-local"),
    (0xfec0_0000_0000_0000_0000_0000_0000_0000, 10, "site-local"),
];
