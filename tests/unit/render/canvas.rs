use super::*;

#[test]
fn new_canvas_is_transparent() {
    let c = Canvas::new(3, 2);
    assert_eq!(c.data().len(), 3 * 2 * 4);
    assert_eq!(c.ink_pixels(), 0);
}

#[test]
fn from_raw_rejects_mismatched_buffers() {
    assert!(Canvas::from_raw(2, 2, vec![0; 15]).is_err());
    assert!(Canvas::from_raw(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn set_and_get_pixel() {
    let mut c = Canvas::new(4, 4);
    c.set_pixel(3, 1, [1, 2, 3, 4]);
    assert_eq!(c.pixel(3, 1), [1, 2, 3, 4]);
    assert_eq!(c.ink_pixels(), 1);
}

#[test]
fn row_mut_addresses_a_single_row() {
    let mut c = Canvas::new(2, 3);
    c.row_mut(1).fill(9);
    assert_eq!(c.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(c.pixel(1, 1), [9, 9, 9, 9]);
    assert_eq!(c.pixel(0, 2), [0, 0, 0, 0]);
}

#[test]
fn premultiplied_roundtrip_keeps_opaque_pixels() {
    let c = Canvas::filled(2, 2, [10, 200, 30, 255]);
    let back = Canvas::from_premultiplied(2, 2, &c.to_premultiplied());
    assert_eq!(back, c);
}
