/// Markup contract between the page and the front end.
///
/// Element ids used when `CardLighting.mount` is called without arguments and
/// the attribute names read from or written to the card element.
// Host elements
pub const DEFAULT_CARD_ID: &str = "card";
pub const DEFAULT_PRISM_CANVAS_ID: &str = "prism-canvas";

// Text slots inside the card carry `data-slot="number-0"` etc.
pub const SLOT_ATTRIBUTE: &str = "data-slot";

// Non-numeric settings that can be seeded from markup
pub const LOOK_ATTRIBUTE: &str = "data-look";
pub const PRESET_ATTRIBUTE: &str = "data-preset";

// Window events the engine listens to
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const POINTER_LEAVE_EVENT: &str = "pointerleave";
pub const RESIZE_EVENT: &str = "resize";

// Used when the device pixel ratio is unavailable or nonsensical
pub const FALLBACK_DPR: f64 = 1.0;
