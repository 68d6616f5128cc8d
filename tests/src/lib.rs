//! Code generated from `fixtures/shop.json`, compiled against the runtime.

include!(concat!(env!("OUT_DIR"), "/shop.rs"));

pub const SHOP: &str = include_str!("../fixtures/shop.json");
