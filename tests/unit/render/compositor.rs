use super::*;
use crate::font::resolve::FontResolver;
use crate::layout::engine::layout_text;

fn layout(text: &str) -> LayoutResult {
    layout_text(text, &FontResolver::builtin_only())
}

#[test]
fn plain_is_white_on_transparent() {
    let l = layout("Hello");
    let c = compose(&l, TextStyle::Plain).unwrap();
    assert_eq!((c.width(), c.height()), (l.canvas_width, l.canvas_height));
    assert!(c.ink_pixels() > 0);
    for px in c.data().chunks_exact(4) {
        assert!(px[3] == 0 || px == [255, 255, 255, 255]);
    }
}

#[test]
fn shadowed_background_comes_from_the_text_hash() {
    let text = "Hash me";
    let l = layout(text);
    let c = compose(&l, TextStyle::shadowed_for(text)).unwrap();
    let [r, g, b] = content_color(text);
    assert_eq!(c.pixel(0, 0), [r, g, b, 255]);
    assert_eq!(c.ink_pixels(), (c.width() * c.height()) as usize);
    assert!(c.data().chunks_exact(4).any(|px| px == [255, 255, 255, 255]));
    assert!(c.data().chunks_exact(4).any(|px| px == [0, 0, 0, 255]));
}

#[test]
fn shadowed_lines_are_centered() {
    let l = layout("ab");
    let c = compose(&l, TextStyle::Shadowed { background: [1, 2, 3] }).unwrap();
    let white_cols: Vec<u32> = (0..c.width())
        .filter(|&x| (0..c.height()).any(|y| c.pixel(x, y) == [255, 255, 255, 255]))
        .collect();
    let left = *white_cols.first().unwrap();
    let right = c.width() - 1 - *white_cols.last().unwrap();
    assert!(left.abs_diff(right) <= 2, "left {left} right {right}");
}

#[test]
fn glow_puts_opaque_cyan_over_a_soft_halo() {
    let l = layout("Neon");
    let c = compose(&l, TextStyle::Glow).unwrap();
    let pixels: Vec<&[u8]> = c.data().chunks_exact(4).collect();
    assert!(pixels.iter().any(|px| *px == [0, 255, 255, 255]));
    assert!(pixels.iter().any(|px| px[3] > 0 && px[3] < 255));
    for px in pixels.iter().filter(|px| px[3] > 0) {
        assert_eq!(px[0], 0);
    }
}
