use super::*;

fn builtin() -> FontResolver {
    FontResolver::builtin_only()
}

#[test]
fn font_size_shrinks_with_length() {
    assert_eq!(font_size_for(0), 14);
    assert_eq!(font_size_for(99), 14);
    assert_eq!(font_size_for(100), 12);
    assert_eq!(font_size_for(199), 12);
    assert_eq!(font_size_for(200), 10);
    assert_eq!(font_size_for(5000), 10);
}

#[test]
fn wrap_width_thresholds() {
    assert_eq!(wrap_width_for(501, 10), 800);
    assert_eq!(wrap_width_for(500, 10_000), 600);
    assert_eq!(wrap_width_for(201, 10), 600);
    assert_eq!(wrap_width_for(200, 401), 400);
    assert_eq!(wrap_width_for(200, 400), 400);
    assert_eq!(wrap_width_for(50, 123), 123);
}

#[test]
fn empty_text_is_one_empty_line_at_the_floor() {
    let l = layout_text("", &builtin());
    assert_eq!(l.lines, vec![String::new()]);
    assert_eq!(l.canvas_width, MIN_WIDTH);
    assert_eq!(l.canvas_height, l.line_height + PAD_Y);
    assert!(l.canvas_height >= MIN_HEIGHT);
}

#[test]
fn whitespace_only_text_behaves_like_empty() {
    let l = layout_text(" \t\n ", &builtin());
    assert_eq!(l.lines, vec![String::new()]);
}

#[test]
fn line_height_is_one_and_a_half_sample_heights() {
    let l = layout_text("Hi", &builtin());
    // Built-in "Ay" is eight pixels tall.
    assert_eq!(l.line_height, 12);
    assert_eq!(l.lines, vec!["Hi".to_string()]);
}

#[test]
fn dimensions_hold_their_invariants() {
    let samples: [&str; 4] = [
        "a",
        "Hello, World!",
        &"word ".repeat(60),
        &"lorem ipsum dolor sit amet ".repeat(30),
    ];
    for text in samples {
        let l = layout_text(text, &builtin());
        assert!(l.canvas_width >= MIN_WIDTH);
        assert!(l.canvas_height >= MIN_HEIGHT);
        assert!(l.canvas_height >= l.line_height * l.lines.len() as u32);
        let widest = l.line_widths().into_iter().max().unwrap();
        assert!(l.canvas_width >= widest);
    }
}

#[test]
fn wrapping_preserves_the_word_sequence() {
    let text = "  the quick\tbrown fox   jumps over the lazy dog  ".repeat(12);
    let l = layout_text(&text, &builtin());
    assert!(l.lines.len() > 1);
    let normalized: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(l.lines.join(" "), normalized.join(" "));
}

#[test]
fn lines_respect_the_wrap_width() {
    let text = "alpha beta gamma delta ".repeat(20);
    let l = layout_text(&text, &builtin());
    for w in l.line_widths() {
        assert!(w <= l.wrap_width, "line width {w} > wrap {}", l.wrap_width);
    }
}

#[test]
fn overlong_word_is_never_split() {
    let long = "x".repeat(150);
    let font = FontHandle::builtin();
    let lines = wrap_words(&format!("a {long} b"), 100, &font);
    assert_eq!(lines, vec!["a".to_string(), long.clone(), "b".to_string()]);

    let l = layout_text(&long, &builtin());
    assert_eq!(l.lines, vec![long.clone()]);
    assert_eq!(l.canvas_width, measure(&long, &font).width + PAD_X);
}

#[test]
fn long_input_uses_the_widest_wrap() {
    let text = "abcd ".repeat(120);
    assert!(text.chars().count() > 500);
    let l = layout_text(&text, &builtin());
    assert_eq!(l.wrap_width, 800);
    assert!(l.lines.len() > 1);
}

#[test]
fn estimate_floors_the_wrap_width() {
    let font = FontHandle::builtin();
    let est = estimate_size("Hi", &font, 14);
    assert_eq!(est.wrap_width, MIN_WIDTH);
    assert_eq!(est.height, 21 + PAD_Y);
    assert_eq!(est.font_size, 14);
}
