mod dom;
mod error;
mod install;
mod shadow;
mod sync;

pub use error::NotchError;
pub use install::{
    attach_section, install_document, install_when_ready, NotchRuntime, SectionHandle,
};
pub use notchfx_core::{
    compute_clip_path_params, generate_clip_path_string, ClipPathParams, NotchProfile,
    ShoulderDrop, CORNER_RADIUS, SECTION_PROFILE, SHADOW_PROFILE,
};
pub use shadow::ShadowStyle;
pub use sync::{sync_section, update_section_clip_path};
