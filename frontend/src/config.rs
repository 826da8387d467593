//! Fixed site settings: brand copy, outbound endpoints and animation timings.

pub const BRAND: &str = "Immortal Flame";
pub const ROOM_BRAND: &str = "Room of Light";
pub const TAGLINE: &str = "Burn what is false. Keep what is eternal.";

/// Used for redirect targets when the page origin cannot be read.
pub const SITE_URL: &str = "https://immortalflame.com";

pub const CONTACT_EMAIL: &str = "hello@immortalflame.com";

/// Third-party form relay. The recipient address is appended as the last
/// path segment.
pub const FORM_RELAY_URL: &str = "https://formsubmit.co";

pub const LAVA_RECIPIENT: &str = "lava@immortalflame.com";
pub const ROOM_RECIPIENT: &str = "room@immortalflame.com";

/// Payment-processor checkout links.
pub mod checkout {
    pub const LAVA_FULL: &str = "https://buy.stripe.com/immortal-flame-lava-full";
    pub const LAVA_INSTALLMENTS: &str = "https://buy.stripe.com/immortal-flame-lava-3-pay";
    pub const ROOM_MONTHLY: &str = "https://buy.stripe.com/room-of-light-monthly";
    pub const ROOM_YEARLY: &str = "https://buy.stripe.com/room-of-light-yearly";
    pub const ROOM_LIFETIME: &str = "https://buy.stripe.com/room-of-light-eternal";
}

pub const TESTIMONIAL_ROTATION_MS: u32 = 7_000;
pub const PROPHECY_ROTATION_MS: u32 = 9_000;
pub const REVEAL_STEP_MS: u32 = 160;

/// Distance from the viewport top at which a section counts as active.
pub const ACTIVE_SECTION_MARGIN: f64 = 120.0;
/// Scroll distance after which the header switches to its compact style.
pub const HEADER_SCROLLED_AT: f64 = 40.0;

pub fn site_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
        .unwrap_or_else(|| SITE_URL.to_string())
}
