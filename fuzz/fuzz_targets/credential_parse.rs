//! Fuzz harness for key card parsing.
//!
//! The parser must never panic. Accepted card data must round-trip its two
//! fields, and a granted card must still report the fields it carried.

#![no_main]
use std::sync::Arc;

use cellguard_access::{AccessPolicy, CredentialParser, KeyCardParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(card_data) = std::str::from_utf8(data) else {
        return;
    };

    let plain = KeyCardParser::new();
    let granted = KeyCardParser::with_policy(Arc::new(
        AccessPolicy::new().with_standing_grant(card_data),
    ));

    match (plain.read(card_data), granted.read(card_data)) {
        (Ok(a), Ok(b)) => {
            assert_eq!(format!("{},{}", a.primary(), a.secondary()), card_data);
            assert_eq!(a.name(), b.name());
            assert!(b.is_privileged());
            assert_ne!(a, b);
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("policy changed parse outcome"),
    }
});
