pub const CORNER_RADIUS: f64 = 6.0;

pub const SECTION_PROFILE: NotchProfile = NotchProfile {
    shoulder_drop: ShoulderDrop::Fraction(0.03),
    corner_offset: 120.0,
    notch_offset: 100.0,
    corner_radius: CORNER_RADIUS,
};

pub const SHADOW_PROFILE: NotchProfile = NotchProfile {
    shoulder_drop: ShoulderDrop::Pixels(30.0),
    corner_offset: 128.0,
    notch_offset: 108.0,
    corner_radius: CORNER_RADIUS,
};

/// How far the shoulder line sits above the notch floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShoulderDrop {
    Fraction(f64),
    Pixels(f64),
}

impl ShoulderDrop {
    pub fn delta(self, height: f64) -> f64 {
        match self {
            ShoulderDrop::Fraction(fraction) => height * fraction,
            ShoulderDrop::Pixels(pixels) => pixels,
        }
    }
}

/// One notch shape preset. `corner_offset` must exceed `notch_offset` so the
/// diagonal between the shoulder break and the notch start has a nonzero run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchProfile {
    pub shoulder_drop: ShoulderDrop,
    pub corner_offset: f64,
    pub notch_offset: f64,
    pub corner_radius: f64,
}
