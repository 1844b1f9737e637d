use notchfx_core::{
    compute_clip_path_params, generate_clip_path_string, NotchProfile, ShoulderDrop,
    SECTION_PROFILE, SHADOW_PROFILE,
};

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {expected}, got {actual} (delta {delta})"
    );
}

#[test]
fn section_profile_break_points_at_1000x500() {
    let params = compute_clip_path_params(1000.0, 500.0, SECTION_PROFILE);
    assert_close(params.center_x, 500.0);
    assert_close(params.bottom_y, 485.0);
    assert_close(params.full_bottom_y, 500.0);
    assert_close(params.left_corner_x, 380.0);
    assert_close(params.left_notch_start_x, 400.0);
    assert_close(params.right_notch_end_x, 600.0);
    assert_close(params.right_corner_x, 620.0);
    assert_close(params.corner_radius, 6.0);
    assert_close(params.left_tangent_y, 494.0);
    assert_close(params.right_tangent_y, 494.0);
    // Slope 0.75 over the 20 px shoulder run puts the tangent 4.8 px out.
    assert_close(params.left_tangent_x, 395.2);
    assert_close(params.right_tangent_x, 604.8);
}

#[test]
fn path_string_at_1000x500_is_exact() {
    let params = compute_clip_path_params(1000.0, 500.0, SECTION_PROFILE);
    let clip = generate_clip_path_string(&params);
    assert_eq!(
        clip,
        "path(\"M 0 0 L 0 485 L 380 485 L 395.2 494 Q 400 500 406 500 \
         L 594 500 Q 600 500 604.8 494 L 620 485 L 1000 485 L 1000 0 Z\")"
    );
}

#[test]
fn notch_floor_points_sit_one_radius_from_the_breaks() {
    let params = compute_clip_path_params(1000.0, 500.0, SECTION_PROFILE);
    let clip = generate_clip_path_string(&params);
    assert!(clip.contains("Q 400 500 406 500"));
    assert!(clip.contains("L 594 500"));
}

#[test]
fn equal_params_serialize_byte_identically() {
    let params = compute_clip_path_params(1366.0, 768.0, SECTION_PROFILE);
    let again = params;
    assert_eq!(
        generate_clip_path_string(&params),
        generate_clip_path_string(&again)
    );
}

#[test]
fn break_point_ordering_holds_across_viewport_sizes() {
    let widths = [200.0, 320.0, 768.0, 1000.0, 1440.0, 1920.5, 3840.0];
    let heights = [120.0, 320.0, 500.0, 887.5, 2160.0];
    for profile in [SECTION_PROFILE, SHADOW_PROFILE] {
        for &width in &widths {
            for &height in &heights {
                let p = compute_clip_path_params(width, height, profile);
                assert!(p.left_corner_x < p.left_notch_start_x);
                assert!(p.left_notch_start_x < p.center_x);
                assert!(p.center_x < p.right_notch_end_x);
                assert!(p.right_notch_end_x < p.right_corner_x);
                assert!(p.bottom_y < p.full_bottom_y);
                assert!(p.left_corner_x < p.left_tangent_x);
                assert!(p.left_tangent_x < p.left_notch_start_x);
                assert!(p.right_notch_end_x < p.right_tangent_x);
                assert!(p.right_tangent_x < p.right_corner_x);
                assert!(p.corner_radius > 0.0);
                assert!(p.corner_radius < (p.right_notch_end_x - p.left_notch_start_x) / 2.0);
                for value in [
                    p.center_x,
                    p.bottom_y,
                    p.left_tangent_x,
                    p.right_tangent_x,
                    p.left_tangent_y,
                ] {
                    assert!(value.is_finite(), "non-finite coordinate for {width}x{height}");
                }
            }
        }
    }
}

#[test]
fn shadow_profile_uses_fixed_drop_and_wider_shoulders() {
    let p = compute_clip_path_params(1000.0, 500.0, SHADOW_PROFILE);
    assert_close(p.bottom_y, 470.0);
    assert_close(p.left_corner_x, 372.0);
    assert_close(p.left_notch_start_x, 392.0);
    assert_close(p.right_notch_end_x, 608.0);
    assert_close(p.right_corner_x, 628.0);
    assert_close(p.left_tangent_y, 494.0);
    // Tangent offset satisfies offset * sqrt(1 + slope^2) = radius.
    let slope = (p.full_bottom_y - p.bottom_y) / (p.left_notch_start_x - p.left_corner_x);
    let offset = p.left_notch_start_x - p.left_tangent_x;
    assert_close(offset * (1.0 + slope * slope).sqrt(), 6.0);
}

#[test]
fn even_width_mirrors_around_center() {
    for &width in &[1000.0, 1920.0, 2560.0] {
        let p = compute_clip_path_params(width, 640.0, SECTION_PROFILE);
        assert_close(
            p.center_x - p.left_notch_start_x,
            p.right_notch_end_x - p.center_x,
        );
        assert_close(p.center_x - p.left_corner_x, p.right_corner_x - p.center_x);
        assert_close(
            p.left_notch_start_x - p.left_tangent_x,
            p.right_tangent_x - p.right_notch_end_x,
        );
    }
}

#[test]
fn fractional_and_pixel_drops_agree_when_equivalent() {
    let fraction = NotchProfile {
        shoulder_drop: ShoulderDrop::Fraction(0.03),
        ..SECTION_PROFILE
    };
    let pixels = NotchProfile {
        shoulder_drop: ShoulderDrop::Pixels(15.0),
        ..SECTION_PROFILE
    };
    let a = compute_clip_path_params(1000.0, 500.0, fraction);
    let b = compute_clip_path_params(1000.0, 500.0, pixels);
    assert_close(a.bottom_y, b.bottom_y);
    assert_eq!(
        generate_clip_path_string(&a),
        generate_clip_path_string(&b)
    );
}

#[test]
fn path_string_is_wrapped_for_clip_path_use() {
    let p = compute_clip_path_params(431.5, 217.25, SECTION_PROFILE);
    let clip = generate_clip_path_string(&p);
    assert!(clip.starts_with("path(\"M 0 0 "));
    assert!(clip.ends_with(" 0 Z\")"));
    assert_eq!(clip.matches(" Q ").count(), 2);
    assert_eq!(clip.matches(" L ").count(), 7);
}
