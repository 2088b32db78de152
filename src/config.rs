// Site-wide interaction tuning. Pixel values match the stylesheet.

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const MOBILE_MENU_BREAKPOINT: f64 = 992.0;

// Fixed-header correction applied to in-page scroll targets.
pub const HEADER_SCROLL_OFFSET: i32 = 80;

pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const CAROUSEL_REVEAL_DELAY_MS: u32 = 100;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

pub const SUBMIT_SIMULATED_DELAY_MS: u32 = 2_000;

pub const NOTIFICATION_DISMISS_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// 350px card plus the 30px grid gap.
pub const TESTIMONIAL_CARD_WIDTH: f64 = 380.0;

pub const PARALLAX_DEFAULT_SPEED: f64 = 0.5;

pub const VISIBILITY_THRESHOLD: f64 = 0.1;
pub const VISIBILITY_ROOT_MARGIN: &str = "0px 0px -50px 0px";
