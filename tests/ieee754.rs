use gmath::ieee754::*;
use gmath::Float;

#[test]
fn parameters() {
    assert_eq!(Double::E, 11);
    assert_eq!(Double::N, 64);
    assert_eq!(Double::B, 2);
    assert_eq!(Double::PREC, 53);
    assert_eq!(Double::M, 52);
    assert_eq!(Double::EMAX, 1023);
    assert_eq!(Double::EMIN, -1022);
    assert_eq!(Double::EXPMIN, -1074);
    assert_eq!(Double::BIAS, 1023);
    assert_eq!(Double::NAN_PAYLOAD_SIZE, 51);

    assert_eq!(Single::E, 8);
    assert_eq!(Single::N, 32);
    assert_eq!(Single::PREC, 24);
    assert_eq!(Single::EMAX, 127);
    assert_eq!(Single::EMIN, -126);
    assert_eq!(Single::EXPMIN, -149);
    assert_eq!(Single::NAN_PAYLOAD_SIZE, 22);

    assert_eq!(Format::<5, 16>::PREC, 11);
    assert_eq!(Format::<5, 16>::EMAX, 15);
    assert_eq!(Format::<5, 16>::EMIN, -14);
    assert_eq!(Format::<5, 16>::EXPMIN, -24);
}

#[test]
fn classify_f64() {
    let fp = 1.0f64;
    let c = fp.class();
    assert_eq!(c, Class::Normal(false, 0), "classification of f64 failed: {:.20e}", fp);
    assert_eq!(c.exponent(), Some(0), "classification of f64 failed (exponent): {:.20e}", fp);

    let fp = -1.0f64;
    let c = fp.class();
    assert_eq!(c, Class::Normal(true, 0), "classification of f64 failed: {:.20e}", fp);

    let fp = 0.0f64;
    assert_eq!(fp.class(), Class::Zero(false), "classification of f64 failed: {:.20e}", fp);
    assert_eq!(fp.class().exponent(), None);

    let fp = -0.0f64;
    assert_eq!(fp.class(), Class::Zero(true), "classification of f64 failed: {:.20e}", fp);

    let fp = f64::MIN_POSITIVE;
    assert_eq!(fp.class(), Class::Normal(false, -1022), "classification of f64 failed: {:.20e}", fp);

    let fp = f64::MAX;
    assert_eq!(fp.class(), Class::Normal(false, 1023), "classification of f64 failed: {:.20e}", fp);

    let fp = f64::from_bits(1);
    assert_eq!(fp.class(), Class::Subnormal(false, -1074), "classification of f64 failed: {:.20e}", fp);

    let fp = -f64::from_bits(0x0008_0000_0000_0000);
    assert_eq!(fp.class(), Class::Subnormal(true, -1023), "classification of f64 failed: {:.20e}", fp);

    let fp = f64::INFINITY;
    assert!(fp.class().is_infinity(), "classification of f64 failed: {}", fp);
    assert_eq!(fp.class(), Class::Infinity(false), "classification of f64 failed: {}", fp);

    let fp = f64::NEG_INFINITY;
    assert_eq!(fp.class(), Class::Infinity(true), "classification of f64 failed: {}", fp);
}

#[test]
fn classify_nan() {
    // quiet NaN with no payload
    let fp = f64::from_bits((0x7FF << 52) | (1 << 51));
    assert!(fp.class().is_nan(), "classification of f64 failed: {:#x}", fp.to_bits());
    assert_eq!(fp.class().is_signaling_nan(), Some(false));
    assert!(fp.is_quiet() && !fp.is_signaling());

    // signaling NaN with payload of 0x1
    let fp = f64::from_bits((0x7FF << 52) | 0x1);
    assert!(fp.class().is_nan(), "classification of f64 failed: {:#x}", fp.to_bits());
    assert_eq!(fp.class().is_signaling_nan(), Some(true));
    assert!(fp.is_signaling() && !fp.is_quiet());

    // negative quiet NaN
    let fp = f32::from_bits(0xFFC0_0000);
    assert_eq!(fp.class(), Class::Nan { sign: true, quiet: true });

    // numbers are neither
    assert_eq!(1.0f32.class().is_signaling_nan(), None);
    assert!(!1.0f32.is_quiet() && !1.0f32.is_signaling());
}

#[test]
fn classify_half_width() {
    assert_eq!(Format::<5, 16>::classify(0x3C00), Class::Normal(false, 0));
    assert_eq!(Format::<5, 16>::classify(0x7BFF), Class::Normal(false, 15));
    assert_eq!(Format::<5, 16>::classify(0x0001), Class::Subnormal(false, -24));
    assert_eq!(Format::<5, 16>::classify(0x8000), Class::Zero(true));
    assert_eq!(Format::<5, 16>::classify(0xFC00), Class::Infinity(true));
    assert_eq!(Format::<5, 16>::classify(0x7E00), Class::Nan { sign: false, quiet: true });
}

#[test]
fn pack() {
    assert_eq!(Double::pack(true, 1023, 1 << 51), (-1.5f64).to_bits());
    assert_eq!(Double::pack(false, 0, 1), f64::from_bits(1).to_bits());
    assert_eq!(Single::pack(false, 128, 1 << 22), 3.0f32.to_bits() as u64);
    assert_eq!(Single::pack(true, 0, 0), (-0.0f32).to_bits() as u64);
}

#[test]
fn nan_encodings() {
    assert_eq!(Single::canonical_nan(), 0x7FC0_0000);
    assert_eq!(Double::canonical_nan(), 0x7FF8_0000_0000_0000);
    assert_eq!(Format::<5, 16>::canonical_nan(), 0x7E00);
    assert_eq!(Single::nan_bits(true, true, 0), 0xFFC0_0000);
    assert_eq!(Single::nan_bits(false, false, 1), 0x7F80_0001);
    assert_eq!(Double::nan_bits(false, false, 1), 0x7FF0_0000_0000_0001);

    assert_eq!(Single::infinity_bits(false), f32::INFINITY.to_bits() as u64);
    assert_eq!(Double::infinity_bits(true), f64::NEG_INFINITY.to_bits());
}

#[test]
#[should_panic]
fn signaling_nan_requires_payload() {
    Double::nan_bits(false, false, 0);
}

#[test]
#[should_panic]
fn nan_payload_too_wide() {
    Single::nan_bits(false, true, 1 << 22);
}

#[test]
#[should_panic]
fn pack_exponent_too_wide() {
    Single::pack(false, 1 << 8, 0);
}
