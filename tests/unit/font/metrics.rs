use super::*;

#[test]
fn empty_text_measures_zero() {
    assert_eq!(measure("", &FontHandle::builtin()), TextExtent::default());
}

#[test]
fn builtin_widths_follow_the_advance() {
    let f = FontHandle::builtin();
    // Five columns of ink, then a one pixel gap per advance.
    assert_eq!(measure("A", &f).width, 6);
    assert_eq!(measure("AB", &f).width, 12);
    assert_eq!(measure("AB ", &f).width, 18);
}

#[test]
fn sample_height_spans_ascender_and_descender() {
    let f = FontHandle::builtin();
    assert_eq!(measure(LINE_SAMPLE, &f).height, 8);
    assert_eq!(measure("A", &f).height, 7);
}

#[test]
fn spaces_have_width_but_no_height() {
    let e = measure("   ", &FontHandle::builtin());
    assert_eq!(e.width, 18);
    assert_eq!(e.height, 0);
}
