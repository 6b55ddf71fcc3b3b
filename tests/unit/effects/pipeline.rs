use super::*;

fn renderer(threading: FrameThreading) -> Renderer {
    Renderer::new(RenderOptions {
        fonts: FontResolver::builtin_only(),
        threading,
        threads: Some(2),
        gradient_frames: None,
    })
    .unwrap()
}

#[test]
fn zero_threads_is_rejected() {
    let err = Renderer::new(RenderOptions {
        fonts: FontResolver::builtin_only(),
        threading: FrameThreading::Parallel,
        threads: Some(0),
        gradient_frames: None,
    })
    .unwrap_err();
    assert!(matches!(err, TextFxError::Validation(_)));
}

#[test]
fn stills_have_layout_size() {
    let r = renderer(FrameThreading::Sequential);
    let layout = r.layout("Still");
    for effect in [Effect::Basic, Effect::Gradient, Effect::Neon, Effect::RainbowWave] {
        let out = r
            .render_frames(effect, "Still", &mut StdRng::seed_from_u64(0))
            .unwrap();
        let RenderedEffect::Still(canvas) = out else {
            panic!("{effect:?} should be a still");
        };
        assert_eq!(canvas.width(), layout.canvas_width);
        assert_eq!(canvas.height(), layout.canvas_height);
    }
}

#[test]
fn animated_gradient_loops_seamlessly() {
    let r = renderer(FrameThreading::Sequential);
    let RenderedEffect::Animation { frames, timing } = r
        .render_frames(Effect::AnimatedGradient, "Loop", &mut StdRng::seed_from_u64(0))
        .unwrap()
    else {
        panic!("expected animation");
    };
    assert_eq!(frames.len(), 30);
    assert_eq!(timing.frames, 30);

    let layout = r.layout("Loop");
    let mut wrapped = compose(&layout, TextStyle::Plain).unwrap();
    gradient::apply_gradient(&mut wrapped, gradient::frame_phase(FrameIndex(30), 30));
    assert_eq!(wrapped, frames[0]);
}

#[test]
fn parallel_frames_match_sequential() {
    let seq = renderer(FrameThreading::Sequential)
        .render_frames(Effect::Glitch, "same output", &mut StdRng::seed_from_u64(42))
        .unwrap();
    let par = renderer(FrameThreading::Parallel)
        .render_frames(Effect::Glitch, "same output", &mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(seq.frames().len(), 20);
    assert_eq!(seq, par);
}

#[test]
fn encoded_output_carries_format_and_name() {
    let r = renderer(FrameThreading::Sequential);
    let png = r
        .render_with_rng(Effect::Neon, "Hi", &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(png.mime(), "image/png");
    assert_eq!(png.filename, "neon_Hi.png");
    assert!(png.bytes.starts_with(b"\x89PNG"));

    let gif = r
        .render_with_rng(Effect::Glitch, "Hi", &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(gif.mime(), "image/gif");
    assert!(gif.bytes.starts_with(b"GIF89a"));
}

#[test]
fn threading_reflects_the_pool() {
    assert_eq!(
        renderer(FrameThreading::Sequential).threading(),
        FrameThreading::Sequential
    );
    assert_eq!(
        renderer(FrameThreading::Parallel).threading(),
        FrameThreading::Parallel
    );
}

#[test]
fn gradient_frame_count_is_configurable() {
    let r = Renderer::new(RenderOptions {
        fonts: FontResolver::builtin_only(),
        gradient_frames: Some(12),
        ..RenderOptions::default()
    })
    .unwrap();
    assert_eq!(r.gradient_timing().frames, 12);
    let out = r
        .render_frames(Effect::AnimatedGradient, "Loop", &mut StdRng::seed_from_u64(0))
        .unwrap();
    let RenderedEffect::Animation { frames, timing } = out else {
        panic!("expected animation");
    };
    assert_eq!(frames.len(), 12);
    assert_eq!(timing.delay_ms, gradient::ANIMATED_GRADIENT_DELAY_MS);

    let err = Renderer::new(RenderOptions {
        gradient_frames: Some(0),
        ..RenderOptions::default()
    })
    .unwrap_err();
    assert!(matches!(err, TextFxError::Validation(_)));
}

#[test]
fn oversized_animations_fail_before_rendering() {
    let r = renderer(FrameThreading::Sequential);
    let word = "W".repeat(12_000);
    assert!(r.layout(&word).canvas_width > u32::from(u16::MAX));
    for effect in [Effect::Glitch, Effect::AnimatedGradient] {
        let err = r
            .render_frames(effect, &word, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, TextFxError::Encoding(_)), "{effect:?}: {err}");
    }
}
