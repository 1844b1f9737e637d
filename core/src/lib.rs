pub mod clip_path;
pub mod profile;

pub use clip_path::{compute_clip_path_params, generate_clip_path_string, ClipPathParams};
pub use profile::{NotchProfile, ShoulderDrop, CORNER_RADIUS, SECTION_PROFILE, SHADOW_PROFILE};
