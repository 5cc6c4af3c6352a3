//! Shared defaults for the interaction cores.

// ── Typewriter ──────────────────────────────────────────────────

/// Per-character reveal delay in milliseconds.
pub const DEFAULT_TYPING_MS: u32 = 100;

/// Per-character removal delay in milliseconds.
pub const DEFAULT_ERASING_MS: u32 = 50;

/// Pause at a fully typed phrase before erasing starts, in milliseconds.
pub const DEFAULT_DELAY_BETWEEN_MS: u32 = 2000;

/// Pause after a phrase is fully erased, before the next one starts typing.
pub const PHRASE_PAUSE_MS: u32 = 500;

// ── Scroll spy ──────────────────────────────────────────────────

/// Height of the fixed page header. Sections become current this many
/// pixels before their top edge reaches the viewport top.
pub const HEADER_OFFSET: f64 = 80.0;

// ── Presentation classes ────────────────────────────────────────

/// Class carried by the navigation menu while it is expanded.
pub const OPEN_CLASS: &str = "open";

/// Class carried by the toggle button while the menu is expanded, and by the
/// navigation link of the current section.
pub const ACTIVE_CLASS: &str = "active";
