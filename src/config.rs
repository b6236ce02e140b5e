/// Scroll offset in pixels past which the fixed nav bar switches from
/// transparent to its solid, blurred variant.
pub const NAV_SOLID_THRESHOLD: i32 = 50;

/// Gap in pixels left between the viewport top and a section scrolled into
/// view, so the fixed nav bar does not cover the section heading.
pub const NAV_SCROLL_MARGIN: f64 = 80.0;

/// Period of the testimonial auto-rotation.
pub const TESTIMONIAL_ROTATE_MS: u32 = 5_000;

/// Simulated round-trip before a contact submission reports success.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// How long the success state lingers before the form resets to idle.
pub const SUBMIT_RESET_MS: u32 = 3_000;

pub fn get_demo_video_url() -> &'static str {
    "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
}
