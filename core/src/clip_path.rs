use std::fmt::Write;

use crate::profile::NotchProfile;

/// Break points of one notch outline for one rectangle. Constructed fresh on
/// every recomputation and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPathParams {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub bottom_y: f64,
    pub full_bottom_y: f64,
    pub left_corner_x: f64,
    pub right_corner_x: f64,
    pub left_notch_start_x: f64,
    pub right_notch_end_x: f64,
    pub left_tangent_x: f64,
    pub right_tangent_x: f64,
    pub left_tangent_y: f64,
    pub right_tangent_y: f64,
    pub corner_radius: f64,
}

/// Pure function of its inputs; defined for positive finite extents.
/// Guarantees `left_corner_x < left_notch_start_x < center_x <
/// right_notch_end_x < right_corner_x` and `bottom_y < full_bottom_y`.
pub fn compute_clip_path_params(width: f64, height: f64, profile: NotchProfile) -> ClipPathParams {
    let center_x = width / 2.0;
    let full_bottom_y = height;
    let bottom_y = height - profile.shoulder_drop.delta(height);
    let left_corner_x = center_x - profile.corner_offset;
    let right_corner_x = center_x + profile.corner_offset;
    let left_notch_start_x = center_x - profile.notch_offset;
    let right_notch_end_x = center_x + profile.notch_offset;
    let slope = (full_bottom_y - bottom_y) / (left_notch_start_x - left_corner_x);
    // Radius projected along the tangent direction: how far before the notch
    // start the straight diagonal stops so the rounding arc meets it
    // tangentially.
    let tangent_offset = profile.corner_radius / (1.0 + slope * slope).sqrt();
    let tangent_y = full_bottom_y - profile.corner_radius;
    ClipPathParams {
        width,
        height,
        center_x,
        bottom_y,
        full_bottom_y,
        left_corner_x,
        right_corner_x,
        left_notch_start_x,
        right_notch_end_x,
        left_tangent_x: left_notch_start_x - tangent_offset,
        right_tangent_x: right_notch_end_x + tangent_offset,
        left_tangent_y: tangent_y,
        right_tangent_y: tangent_y,
        corner_radius: profile.corner_radius,
    }
}

/// Serializes the outline as a CSS `path("M .. Z")` value: down the left
/// edge to the shoulder, across to the left break, diagonal to the tangent
/// point, a quadratic into the notch floor, across the floor, the mirrored
/// quadratic and diagonal back up, then across and up the right edge. Equal
/// params produce byte-identical strings.
pub fn generate_clip_path_string(params: &ClipPathParams) -> String {
    let mut path = String::from("M 0 0");
    let _ = write!(path, " L 0 {}", fmt_px(params.bottom_y));
    let _ = write!(
        path,
        " L {} {}",
        fmt_px(params.left_corner_x),
        fmt_px(params.bottom_y)
    );
    let _ = write!(
        path,
        " L {} {}",
        fmt_px(params.left_tangent_x),
        fmt_px(params.left_tangent_y)
    );
    let _ = write!(
        path,
        " Q {} {} {} {}",
        fmt_px(params.left_notch_start_x),
        fmt_px(params.full_bottom_y),
        fmt_px(params.left_notch_start_x + params.corner_radius),
        fmt_px(params.full_bottom_y)
    );
    let _ = write!(
        path,
        " L {} {}",
        fmt_px(params.right_notch_end_x - params.corner_radius),
        fmt_px(params.full_bottom_y)
    );
    let _ = write!(
        path,
        " Q {} {} {} {}",
        fmt_px(params.right_notch_end_x),
        fmt_px(params.full_bottom_y),
        fmt_px(params.right_tangent_x),
        fmt_px(params.right_tangent_y)
    );
    let _ = write!(
        path,
        " L {} {}",
        fmt_px(params.right_corner_x),
        fmt_px(params.bottom_y)
    );
    let _ = write!(
        path,
        " L {} {}",
        fmt_px(params.width),
        fmt_px(params.bottom_y)
    );
    let _ = write!(path, " L {} 0 Z", fmt_px(params.width));
    format!("path(\"{path}\")")
}

// At most three decimals, trailing zeros trimmed ("485", not "485.000").
fn fmt_px(value: f64) -> String {
    let mut text = format!("{value:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
