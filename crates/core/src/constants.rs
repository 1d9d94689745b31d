/// Decimal precision used when rendering prices and NAV values for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
