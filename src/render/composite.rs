use crate::foundation::{
    core::Rgba8,
    error::{TextFxError, TextFxResult},
    math::{mul_div255_u8, premultiply, unpremultiply},
};
use crate::render::canvas::Canvas;

/// Premultiplied RGBA8 color.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over with an extra opacity multiplier.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Per-channel linear mix, `a` at `t = 0` and `b` at `t = 1`.
pub fn crossfade(a: Rgba8, b: Rgba8, t: f32) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    let tt = ((t * 255.0).round() as i32).clamp(0, 255) as u16;
    let it = 255u16 - tt;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let av = mul_div255_u8(u16::from(a[i]), it);
        let bv = mul_div255_u8(u16::from(b[i]), tt);
        out[i] = av.saturating_add(bv);
    }
    out
}

/// Source-over for straight-alpha pixels.
pub fn over_straight(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src[3] == 255 {
        return src;
    }
    if src[3] == 0 {
        return dst;
    }
    unpremultiply(over(premultiply(dst), premultiply(src), 1.0))
}

/// Alpha-composite `src` over `dst` in place. Both canvases must share a size.
pub fn composite_over(dst: &mut Canvas, src: &Canvas) -> TextFxResult<()> {
    check_same_size(dst, src, "composite_over")?;
    for (d, s) in dst.data_mut().chunks_exact_mut(4).zip(src.data().chunks_exact(4)) {
        let out = over_straight([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Blend `other` into `dst` with weight `t`, channel by channel including alpha.
pub fn blend_in_place(dst: &mut Canvas, other: &Canvas, t: f32) -> TextFxResult<()> {
    check_same_size(dst, other, "blend_in_place")?;
    for (d, o) in dst
        .data_mut()
        .chunks_exact_mut(4)
        .zip(other.data().chunks_exact(4))
    {
        let out = crossfade([d[0], d[1], d[2], d[3]], [o[0], o[1], o[2], o[3]], t);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn check_same_size(a: &Canvas, b: &Canvas, what: &str) -> TextFxResult<()> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(TextFxError::validation(format!(
            "{what} expects equal-size canvases, got {}x{} and {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
