// Shared stacking constants for the effect family.

// Stacking value of the page's primary foreground content (hero copy, nav,
// buttons). Decorative layers must stay strictly below this and strictly
// above the page background at 0; see OrbitParams::z_front / z_back.
pub const CONTENT_Z: i32 = 10;
