// src/predicates.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    static ref URL_REGEX: Regex =
        Regex::new(r"^(https?://)?[\w\\.\-]+(:\d{2,6})?(/[\\/\w \.\-]*)?(\?[\\/\w .\-=]*)?$")
            .unwrap();
}

/// True iff the value has the shape of an Ethereum address: `0x` followed by
/// 40 hex characters. Checksum casing is not enforced.
pub fn is_eth_address(value: &str) -> bool {
    ADDRESS_REGEX.is_match(value)
}

/// True iff the value looks like an http(s) URL. The pattern is deliberately
/// permissive: the scheme is optional, hosts need no TLD, ports are 2-6
/// digits, and path/query segments may contain spaces.
pub fn is_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

/// True iff the value is a `0x`-prefixed hex string with an even-length body.
/// No byte-length requirement beyond that; `"0x"` itself is accepted.
pub fn is_hex_string(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(body) => hex::decode(body).is_ok(),
        None => false,
    }
}
