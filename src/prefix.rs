use crate::address::AddressValue;
use crate::common::debug_log;
use crate::constants::{
    IPV6_PREFIX_LEN_MAX, IPV6_PREFIX_LEN_MIN, NON_UNICAST_SCOPES, RESERVED_HEAD_PREFIX_LEN,
};
use crate::error::AppError;
use crate::range::AddressRange;
use ipnet::Ipv6Net;
use once_cell::sync::Lazy;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// ユニキャスト判定で除外するスコープをIpv6Netとして保持
static NON_UNICAST_NETS: Lazy<Vec<(Ipv6Net, &'static str)>> = Lazy::new(|| {
    NON_UNICAST_SCOPES
        .iter()
        .filter_map(|&(base, len, label)| {
            Ipv6Net::new(Ipv6Addr::from(base), len)
                .ok()
                .map(|net| (net, label))
        })
        .collect()
});

/// 受け付けるプレフィックス長の下限・上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixBounds {
    pub min: u8,
    pub max: u8,
}

impl Default for PrefixBounds {
    fn default() -> Self {
        PrefixBounds {
            min: IPV6_PREFIX_LEN_MIN,
            max: IPV6_PREFIX_LEN_MAX,
        }
    }
}

impl PrefixBounds {
    pub fn contains(&self, prefix_len: u8) -> bool {
        (self.min..=self.max).contains(&prefix_len)
    }
}

/// マルチキャスト・リンクローカル・サイトローカルのいずれかなら、そのラベルを返す
pub fn non_unicast_scope(addr: AddressValue) -> Option<&'static str> {
    let ip = addr.to_ipv6();
    NON_UNICAST_NETS
        .iter()
        .find(|(net, _)| net.contains(&ip))
        .map(|(_, label)| *label)
}

pub fn is_unicast(addr: AddressValue) -> bool {
    non_unicast_scope(addr).is_none()
}

/// ベースアドレスとプレフィックス長で定まるCIDRブロック
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkPrefix {
    net: Ipv6Net,
}

impl NetworkPrefix {
    pub fn new(base: AddressValue, prefix_len: u8) -> Result<Self, AppError> {
        let net = Ipv6Net::new(base.to_ipv6(), prefix_len)?;
        Ok(NetworkPrefix { net })
    }

    pub fn from_net(net: Ipv6Net) -> Self {
        NetworkPrefix { net }
    }

    pub fn as_net(&self) -> Ipv6Net {
        self.net
    }

    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    /// ホスト部をクリアしたアドレス
    pub fn network_address(&self) -> AddressValue {
        AddressValue::from(self.net.network())
    }

    /// ホスト部をすべて立てたアドレス
    pub fn last_address(&self) -> AddressValue {
        AddressValue::from(self.net.broadcast())
    }

    pub fn netmask(&self) -> AddressValue {
        AddressValue::from(self.net.netmask())
    }

    /// /128 以外は先頭+1。ホスト部の最下位ビットが0なので加算は溢れない。
    pub fn gateway_address(&self) -> AddressValue {
        let first = self.network_address().value();
        if self.prefix_len() <= RESERVED_HEAD_PREFIX_LEN {
            AddressValue::new(first + 1)
        } else {
            AddressValue::new(first)
        }
    }

    /// 割り当て可能な先頭アドレス。/127 未満ではネットワークとゲートウェイの2つを飛ばす。
    pub fn first_usable_address(&self) -> AddressValue {
        let first = self.network_address().value();
        if self.prefix_len() < RESERVED_HEAD_PREFIX_LEN {
            AddressValue::new(first + 2)
        } else {
            AddressValue::new(first)
        }
    }

    /// ブロック内のアドレス数。u64に収まらない場合は u64::MAX で飽和する。
    pub fn size(&self) -> u64 {
        let host_bits = 128 - u32::from(self.prefix_len());
        1u128
            .checked_shl(host_bits)
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or(u64::MAX)
    }

    pub fn contains(&self, addr: AddressValue) -> bool {
        self.net.contains(&addr.to_ipv6())
    }

    /// ブロック全体を範囲として返す
    pub fn to_range(&self) -> AddressRange {
        AddressRange::from_ordered(self.network_address(), self.last_address())
    }

    /// ホスト部を落とした正規形のCIDR表記
    pub fn formal(&self) -> String {
        self.net.trunc().to_string()
    }

    /// プレフィックス長が許容範囲内で、先頭アドレスがユニキャストかどうか
    pub fn is_valid_unicast(&self, bounds: PrefixBounds) -> bool {
        if !bounds.contains(self.prefix_len()) {
            debug_log(format!(
                "prefix length {} of {} is outside {}..={}",
                self.prefix_len(),
                self.formal(),
                bounds.min,
                bounds.max
            ));
            return false;
        }
        match non_unicast_scope(self.network_address()) {
            Some(label) => {
                debug_log(format!("{} is a {} prefix", self.formal(), label));
                false
            }
            None => true,
        }
    }
}

impl FromStr for NetworkPrefix {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let net = s.trim().parse::<Ipv6Net>()?;
        Ok(NetworkPrefix { net })
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.net.trunc(), f)
    }
}

/// start/prefix_len で作るブロックに end と gateway が含まれているか
pub fn is_valid_unicast_range(
    start: AddressValue,
    end: AddressValue,
    gateway: AddressValue,
    prefix_len: u8,
) -> bool {
    match NetworkPrefix::new(start, prefix_len) {
        Ok(prefix) => prefix.contains(end) && prefix.contains(gateway),
        Err(_) => false,
    }
}
