use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn opaque_pixels_survive_premultiply_roundtrip() {
    for px in [[255, 255, 255, 255], [0, 255, 255, 255], [12, 34, 56, 255]] {
        assert_eq!(unpremultiply(premultiply(px)), px);
    }
}

#[test]
fn unpremultiply_of_transparent_is_zero() {
    assert_eq!(unpremultiply([10, 10, 10, 0]), [0, 0, 0, 0]);
}

#[test]
fn content_color_is_pure() {
    assert_eq!(content_color("hello"), content_color("hello"));
    assert_ne!(content_color("hello"), content_color("hello!"));
}

#[test]
fn content_color_uses_leading_digest_bytes() {
    // MD5("") = d41d8cd9...
    assert_eq!(content_color(""), [0xd4, 0x1d, 0x8c]);
    // MD5("hello") = 5d41402a...
    assert_eq!(content_color("hello"), [0x5d, 0x41, 0x40]);
}
