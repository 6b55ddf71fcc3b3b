use super::*;

#[test]
fn routes_round_trip() {
    for effect in Effect::ALL {
        assert_eq!(Effect::from_route(effect.route()), Some(effect));
    }
    assert_eq!(Effect::from_route("/api/v1/nope"), None);
}

#[test]
fn animated_effects_are_gifs() {
    assert_eq!(Effect::Glitch.format(), ImageFormat::Gif);
    assert_eq!(Effect::AnimatedGradient.format(), ImageFormat::Gif);
    assert_eq!(Effect::Gradient.format(), ImageFormat::Png);
    assert_eq!(Effect::Glitch.timing().map(|t| t.frames), Some(20));
    assert_eq!(Effect::AnimatedGradient.timing().map(|t| t.frames), Some(30));
    assert_eq!(Effect::Neon.timing(), None);
}

#[test]
fn filename_truncates_to_thirty_chars() {
    let text = "é".repeat(40);
    let name = Effect::Glitch.filename(&text);
    assert_eq!(name, format!("glitch_{}.gif", "é".repeat(30)));
    assert_eq!(Effect::Gradient.filename("Hi"), "gradient_Hi.png");
    assert_eq!(Effect::AnimatedGradient.filename("Hi"), "gradient_Hi.gif");
}
