use super::*;

#[test]
fn hue_wraps_every_fifty_columns() {
    assert_eq!(hue_at(0), 0.0);
    assert!((hue_at(25) - 0.5).abs() < 1e-9);
    assert!(hue_at(50) < 1e-9 || (1.0 - hue_at(50)) < 1e-9);
    assert!(hue_at(51) < 0.03);
}

#[test]
fn hue_is_monotonic_between_wraps() {
    let mut prev = hue_at(0);
    for x in 1..200 {
        let h = hue_at(x);
        if h < prev {
            // Wraparound drops back near zero.
            assert!(h < 0.05, "x={x} h={h} prev={prev}");
        }
        prev = h;
    }
}

#[test]
fn wave_stays_in_unit_range() {
    for y in 0..40 {
        for x in 0..120 {
            let c = wave_at(x, y);
            assert!((0.0..=1.0).contains(&c));
        }
    }
}

#[test]
fn origin_is_pure_red_sector() {
    // hue 0, chroma sin(0) * 0.5 + 0.5 = 0.5
    assert_eq!(rainbow_color(0, 0), [127, 0, 0]);
}

#[test]
fn rainbow_recolors_only_ink() {
    let mut canvas = Canvas::new(8, 8);
    canvas.set_pixel(5, 6, [255, 255, 255, 255]);
    apply_rainbow(&mut canvas);
    let [r, g, b] = rainbow_color(5, 6);
    assert_eq!(canvas.pixel(5, 6), [r, g, b, 255]);
    assert_eq!(canvas.ink_pixels(), 1);
}
