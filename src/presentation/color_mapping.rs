//! Color mapping for map regions.
//!
//! Each region carries vote shares and a turnout figure. The active
//! color mode decides how those become a fill color. Color modes are open
//! identifiers; unknown modes fall back to a neutral fill.

use egui::Color32;

use crate::io::RegionResult;

pub const PARTY_A: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const PARTY_B: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const NEUTRAL: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);

/// Returns the fill color of a region under `color_mode`.
///
/// # Arguments
/// * `color_mode` - The active map color mode
/// * `result` - The region's result summary
pub fn region_color(color_mode: &str, result: &RegionResult) -> Color32 {
    match color_mode {
        "winner" => winner_color(result),
        "margin" => {
            let margin = ((result.two_party_share_a() - 0.5).abs() * 2.0).clamp(0.0, 1.0);
            blend(NEUTRAL, winner_color(result), 0.25 + 0.75 * margin)
        }
        "turnout" => blend(Color32::WHITE, Color32::from_rgb(0x16, 0xa3, 0x4a), result.turnout),
        _ => NEUTRAL,
    }
}

/// Returns the color of the party with the larger share.
pub fn winner_color(result: &RegionResult) -> Color32 {
    if result.share_a >= result.share_b { PARTY_A } else { PARTY_B }
}

/// Linear blend from `from` to `to` by `t` in [0, 1].
pub fn blend(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}
