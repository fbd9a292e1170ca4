//! Shared element ids, class names and pixel constants.

// ── Navigation ──────────────────────────────────────────────────

/// Id of the hamburger button in the header.
pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";

/// Id of the collapsible mobile navigation container.
pub const MOBILE_NAV_ID: &str = "mobileNav";

/// Class that marks the mobile navigation as open.
pub const MOBILE_NAV_OPEN_CLASS: &str = "mobile-nav-open";

/// Scope class for links inside the mobile navigation.
pub const MOBILE_NAV_SCOPE_CLASS: &str = "mobile-nav";

/// Class carried by every navigation link.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Class applied to the link of the section currently in view.
pub const ACTIVE_CLASS: &str = "active";

// ── Injected controls ───────────────────────────────────────────

/// Class of the floating back-to-top button.
pub const BACK_TO_TOP_CLASS: &str = "back-to-top";

/// Class of the floating theme switch.
pub const THEME_TOGGLE_CLASS: &str = "theme-toggle";

// ── Theme ───────────────────────────────────────────────────────

/// Root attribute consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Local storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Scroll geometry ─────────────────────────────────────────────

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset above which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Distance below the viewport top used to probe for the active section.
pub const ACTIVE_LINK_OFFSET_PX: f64 = 100.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the bottom edge is pulled in by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
