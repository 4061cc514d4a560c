use itostr::codec::Width;
use itostr::{CARRIER_BYTES, IntoCarrier, signed_carrier, unsigned_carrier};

#[test]
fn carrier_is_sixteen_bytes() {
    assert_eq!(CARRIER_BYTES, 16);
    assert_eq!(Width::MAX.bytes(), CARRIER_BYTES);
}

#[test]
fn unsigned_sources_zero_extend() {
    assert_eq!(signed_carrier(u16::MAX), 65535);
    assert_eq!(signed_carrier(u8::MAX), 255);
    assert_eq!(unsigned_carrier(u32::MAX), 0xFFFF_FFFF);
}

#[test]
fn signed_sources_sign_extend() {
    assert_eq!(signed_carrier(-1i8), -1);
    assert_eq!(signed_carrier(i16::MIN), -32768);

    let wide = unsigned_carrier(i16::MIN);
    assert_eq!(wide & 0xFFFF, 0x8000);
    assert_eq!(wide >> 16, u128::MAX >> 16);
}

#[test]
fn same_width_keeps_bit_pattern() {
    assert_eq!(signed_carrier(u128::MAX), -1);
    assert_eq!(unsigned_carrier(i128::MIN), 1u128 << 127);
}

#[test]
fn natural_widths() {
    assert_eq!(<i8 as IntoCarrier>::WIDTH, 1);
    assert_eq!(<u16 as IntoCarrier>::WIDTH, 2);
    assert_eq!(<i64 as IntoCarrier>::WIDTH, 8);
    assert_eq!(<u128 as IntoCarrier>::WIDTH, 16);
    assert_eq!(<usize as IntoCarrier>::WIDTH, std::mem::size_of::<usize>());

    assert_eq!(Width::of::<u32>().bytes(), 4);
    assert_eq!(Width::of::<i16>().bits(), 16);
}
