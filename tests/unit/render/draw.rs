use super::*;

#[test]
fn builtin_text_is_fully_opaque_ink() {
    let font = FontHandle::builtin();
    let mut c = Canvas::new(40, 12);
    draw_text(&mut c, &font, "Hi", 0, 0, [255, 255, 255, 255]);
    assert!(c.ink_pixels() > 0);
    for px in c.data().chunks_exact(4) {
        assert!(px[3] == 0 || px == [255, 255, 255, 255]);
    }
}

#[test]
fn glyphs_land_below_the_line_top() {
    let font = FontHandle::builtin();
    let mut c = Canvas::new(10, 10);
    draw_text(&mut c, &font, "T", 0, 2, [255, 0, 0, 255]);
    // Top bar of 'T' is the first row of the cell.
    assert_eq!(c.pixel(0, 2), [255, 0, 0, 255]);
    assert_eq!(c.pixel(0, 1)[3], 0);
}

#[test]
fn out_of_bounds_drawing_is_clipped() {
    let font = FontHandle::builtin();
    let mut c = Canvas::new(4, 4);
    draw_text(&mut c, &font, "WWW", -3, -3, [255, 255, 255, 255]);
    draw_text(&mut c, &font, "WWW", 100, 100, [255, 255, 255, 255]);
    assert!(c.ink_pixels() > 0);
}
