//! Property-based tests using proptest
//!
//! Checks the codec laws over the whole 32-bit address space.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ipv4codec::{format, mask, parse, Address};
use proptest::prelude::*;

// Property: format is total and yields four decimal octets
proptest! {
    #[test]
    fn prop_format_total(value in any::<u32>()) {
        let text = format(Address::new(value));
        let segments: Vec<&str> = text.split('.').collect();

        prop_assert_eq!(segments.len(), 4);
        for segment in segments {
            let octet: u32 = segment.parse().expect("segment should be decimal");
            prop_assert!(octet <= 255);
            prop_assert_eq!(octet.to_string(), segment);
        }
    }
}

// Property: parse inverts format
proptest! {
    #[test]
    fn prop_parse_format_roundtrip(value in any::<u32>()) {
        let addr = Address::new(value);
        prop_assert_eq!(parse(&format(addr)), Ok(addr));
    }
}

// Property: canonical text survives a round trip
proptest! {
    #[test]
    fn prop_text_roundtrip(octets in any::<[u8; 4]>()) {
        let text = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        let addr = parse(&text).expect("canonical text should parse");

        prop_assert_eq!(addr.octets(), octets);
        prop_assert_eq!(format(addr), text);
    }
}

// Property: any octet above 255 is rejected as a format error
proptest! {
    #[test]
    fn prop_out_of_range_rejected(position in 0usize..4, octet in 256u32..100_000) {
        let mut segments = vec!["1".to_string(); 4];
        segments[position] = octet.to_string();
        let err = parse(&segments.join(".")).unwrap_err();

        prop_assert!(err.is_invalid_format());
    }
}

// Property: mask laws
proptest! {
    #[test]
    fn prop_mask_laws(a in any::<u32>(), m in any::<u32>()) {
        let addr = Address::new(a);
        let netmask = Address::new(m);

        prop_assert_eq!(mask(addr, addr), addr);
        prop_assert_eq!(mask(addr, Address::new(0)), Address::new(0));
        prop_assert_eq!(mask(addr, Address::new(u32::MAX)), addr);
        prop_assert_eq!(mask(addr, netmask), mask(netmask, addr));
        prop_assert_eq!(mask(addr, netmask).value(), a & m);
    }
}
