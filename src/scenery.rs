/// Background helpers shared by the platformers: drifting clouds and the
/// vertical sky gradient.  Purely cosmetic, never touches gameplay.

use rand::Rng;

use crate::config::Rgb;
use crate::entities::Cloud;

/// How far past either screen edge a cloud travels before it wraps.
pub const CLOUD_MARGIN: f32 = 60.0;

/// Scatter `count` clouds across the full width, with `y` in `y_range`
/// (inclusive on both ends).
pub fn spawn_clouds(
    rng: &mut impl Rng,
    count: usize,
    width: f32,
    y_range: (i32, i32),
) -> Vec<Cloud> {
    (0..count)
        .map(|_| Cloud {
            x: rng.gen_range(0..=width as i32) as f32,
            y: rng.gen_range(y_range.0..=y_range.1) as f32,
        })
        .collect()
}

/// Drift every cloud left by `speed`; clouds leaving on the left re-enter
/// from beyond the right edge.
pub fn drift_clouds(clouds: &[Cloud], speed: f32, width: f32) -> Vec<Cloud> {
    clouds
        .iter()
        .map(|c| {
            let x = c.x - speed;
            let x = if x < -CLOUD_MARGIN { width + CLOUD_MARGIN } else { x };
            Cloud { x, ..c.clone() }
        })
        .collect()
}

/// Colour of scanline `y` in a gradient running from `top` (y = 0) to
/// `bottom` (y = height).  Channels are truncated, not rounded.
pub fn sky_color(top: Rgb, bottom: Rgb, y: f32, height: f32) -> Rgb {
    let ratio = if height > 0.0 { (y / height).clamp(0.0, 1.0) } else { 0.0 };
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8;
    (mix(top.0, bottom.0), mix(top.1, bottom.1), mix(top.2, bottom.2))
}
