use crate::render::canvas::Canvas;

/// Hue of column `x`, in `[0, 1)`.
pub fn hue_at(x: u32) -> f64 {
    (f64::from(x) * 0.02) % 1.0
}

/// Chroma of the sine field at `(x, y)`, in `[0, 1]`.
pub fn wave_at(x: u32, y: u32) -> f64 {
    (f64::from(x) * 0.1 + f64::from(y) * 0.2).sin() * 0.5 + 0.5
}

/// Rainbow color at `(x, y)`.
///
/// Hue comes from the column alone and chroma from the sine field. There is no value offset,
/// so low-chroma pixels go dark rather than grey.
pub fn rainbow_color(x: u32, y: u32) -> [u8; 3] {
    let hue = hue_at(x);
    let c = wave_at(x, y);
    let second = c * (1.0 - ((hue * 6.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if hue < 1.0 / 6.0 {
        (c, second, 0.0)
    } else if hue < 2.0 / 6.0 {
        (second, c, 0.0)
    } else if hue < 3.0 / 6.0 {
        (0.0, c, second)
    } else if hue < 4.0 / 6.0 {
        (0.0, second, c)
    } else if hue < 5.0 / 6.0 {
        (second, 0.0, c)
    } else {
        (c, 0.0, second)
    };
    [to_u8(r), to_u8(g), to_u8(b)]
}

fn to_u8(v: f64) -> u8 {
    (v * 255.0) as u8
}

/// Recolor every ink pixel with the rainbow field. Alpha is left alone.
pub fn apply_rainbow(canvas: &mut Canvas) {
    for y in 0..canvas.height() {
        for (x, px) in canvas.row_mut(y).chunks_exact_mut(4).enumerate() {
            if px[3] > 0 {
                px[..3].copy_from_slice(&rainbow_color(x as u32, y));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rainbow.rs"]
mod tests;
