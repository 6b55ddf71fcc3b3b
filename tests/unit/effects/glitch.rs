use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::font::resolve::FontResolver;
use crate::layout::engine::layout_text;

fn is_mark(ch: char) -> bool {
    COMBINING_MARK_RANGES
        .iter()
        .any(|r| r.contains(&u32::from(ch)))
}

#[test]
fn marks_come_from_the_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        assert!(is_mark(random_mark(&mut rng)));
    }
}

#[test]
fn corruption_keeps_source_chars_in_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let out = corrupt_text("abc", 0.8, &mut rng);
    let kept: String = out.chars().filter(|c| !is_mark(*c)).collect();
    assert_eq!(kept, "abc");
}

#[test]
fn corruption_adds_one_to_five_marks_per_char() {
    let mut rng = StdRng::seed_from_u64(99);
    for intensity in [0.2, 0.4, 0.8] {
        let out = corrupt_text("hello world", intensity, &mut rng);
        let mut run = None::<usize>;
        for ch in out.chars() {
            if is_mark(ch) {
                run = run.map(|n| n + 1);
            } else {
                if let Some(n) = run {
                    assert!((1..=5).contains(&n), "run of {n} marks");
                }
                run = Some(0);
            }
        }
        let n = run.unwrap_or(0);
        assert!((1..=5).contains(&n));
    }
}

#[test]
fn zero_length_text_stays_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(corrupt_text("", 0.5, &mut rng), "");
}

#[test]
fn scanline_phase_alternates() {
    assert_eq!(scanline_start(FrameIndex(0)), 2);
    assert_eq!(scanline_start(FrameIndex(1)), 0);
    assert_eq!(scanline_start(FrameIndex(2)), 2);
}

#[test]
fn layer_offsets_start_from_their_base() {
    assert_eq!(layer_offset(0.0, 0), (-2, 1));
    assert_eq!(layer_offset(0.0, 1), (3, 2));
    assert!((0.0..=0.4).contains(&intensity_modifier(0.0)));
}

#[test]
fn roll_row_moves_pixels_right() {
    let mut row = vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3];
    roll_row(&mut row, 1);
    assert_eq!(row, vec![3, 3, 3, 3, 1, 1, 1, 1, 2, 2, 2, 2]);
    roll_row(&mut row, -1);
    assert_eq!(row, vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
}

#[test]
fn frame_is_padded_and_seed_deterministic() {
    let layout = layout_text("Glitch me", &FontResolver::builtin_only());
    let a = glitch_frame(&layout, FrameIndex(3), &mut StdRng::seed_from_u64(5)).unwrap();
    let b = glitch_frame(&layout, FrameIndex(3), &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.width(), layout.canvas_width + GLITCH_PADDING);
    assert_eq!(a.height(), layout.canvas_height + GLITCH_PADDING);
    assert!(a.ink_pixels() > 0);
}
