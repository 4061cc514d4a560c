use itostr::codec::{
    FormatSpec, LetterCase, Radix, Signedness, WideChar, Width, format_signed, max_len,
    normalize_signed, normalize_unsigned, signed_to_str, signed_to_wcs, unsigned_to_str,
};
use proptest::prelude::*;

const BIG: usize = 160;

fn text(buf: &[u8], len: usize) -> &str {
    std::str::from_utf8(&buf[..len]).unwrap()
}

proptest! {
    #[test]
    fn signed_round_trip(value: i128, width in 1usize..=16, radix in 2u32..=36) {
        let mut buf = [0u8; BIG];
        let len = signed_to_str(value, width, &mut buf, radix).unwrap();

        prop_assert_eq!(buf[len], 0);
        let decoded = i128::from_str_radix(text(&buf, len), radix).unwrap();
        prop_assert_eq!(decoded, normalize_signed(value, Width::new(width).unwrap()));
    }

    #[test]
    fn unsigned_round_trip(value: u128, width in 1usize..=16, radix in 2u32..=36) {
        let mut buf = [0u8; BIG];
        let len = unsigned_to_str(value, width, &mut buf, radix).unwrap();

        prop_assert_eq!(buf[len], 0);
        let decoded = u128::from_str_radix(text(&buf, len), radix).unwrap();
        prop_assert_eq!(decoded, normalize_unsigned(value, Width::new(width).unwrap()));
    }

    #[test]
    fn uppercase_round_trip(value: i128, width in 1usize..=16, radix in 11u32..=36) {
        let mut buf = [0u8; BIG];
        let spec = FormatSpec::radix(radix).with_case(LetterCase::Upper);
        let len = format_signed(value, width, &mut buf[..], spec).unwrap();

        let out = text(&buf, len);
        prop_assert!(!out.bytes().any(|b| b.is_ascii_lowercase()));
        prop_assert_eq!(
            i128::from_str_radix(out, radix).unwrap(),
            normalize_signed(value, Width::new(width).unwrap())
        );
    }

    #[test]
    fn length_never_exceeds_bound(value: i128, width in 1usize..=16, radix in 2u32..=36) {
        let mut none: [u8; 0] = [];
        let len = signed_to_str(value, width, &mut none, radix).unwrap();

        let bound = max_len(Width::new(width).unwrap(), Radix::new(radix).unwrap(), Signedness::Signed);
        prop_assert!(len <= bound);
    }

    #[test]
    fn zero_capacity_measures(value: u128, width in 1usize..=16, radix in 2u32..=36) {
        let mut none: [u8; 0] = [];
        let measured = unsigned_to_str(value, width, &mut none, radix).unwrap();

        let mut buf = [0u8; BIG];
        let written = unsigned_to_str(value, width, &mut buf, radix).unwrap();
        prop_assert_eq!(measured, written);
    }

    #[test]
    fn truncation_yields_prefix(value: i128, width in 1usize..=16, radix in 2u32..=36, cap in 1usize..48) {
        let mut full = [0u8; BIG];
        let len = signed_to_str(value, width, &mut full, radix).unwrap();

        let mut small = [0xAAu8; 48];
        let truncated = signed_to_str(value, width, &mut small[..cap], radix).unwrap();
        prop_assert_eq!(truncated, len);

        let kept = len.min(cap - 1);
        prop_assert_eq!(&small[..kept], &full[..kept]);
        prop_assert_eq!(small[kept], 0);
        prop_assert!(small[cap..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn wide_matches_narrow(value: i128, width in 1usize..=16, radix in 2u32..=36) {
        let mut buf = [0u8; BIG];
        let mut wbuf: [WideChar; BIG] = [0; BIG];

        let len = signed_to_str(value, width, &mut buf, radix).unwrap();
        let wlen = signed_to_wcs(value, width, &mut wbuf, radix).unwrap();

        prop_assert_eq!(len, wlen);
        for i in 0..=len {
            prop_assert_eq!(WideChar::from(buf[i]), wbuf[i]);
        }
    }
}
