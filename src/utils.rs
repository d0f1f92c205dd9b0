//! Utility functions shared across widgets
//!
//! **Why**: Centralized helpers used by more than one module
//!
//! **Used by**: curve_editor readout, preview transition label

/// Format a number with a fixed number of decimal places.
///
/// Rounds half away from zero at the displayed precision, so
/// `format_fixed(-0.125, 2)` is `"-0.13"` rather than `"-0.12"`.
pub fn format_fixed(value: f32, precision: usize) -> String {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value as f64 * factor).round() / factor;
    format!("{:.*}", precision, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_pads_trailing_zeros() {
        assert_eq!(format_fixed(0.5, 2), "0.50");
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_fixed_rounds_at_precision() {
        assert_eq!(format_fixed(0.104, 2), "0.10");
        assert_eq!(format_fixed(0.105999, 2), "0.11");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_format_fixed_out_of_range_values() {
        // Drag math is unclamped, readout must handle values outside [0,1]
        assert_eq!(format_fixed(1.337, 2), "1.34");
        assert_eq!(format_fixed(-0.2, 2), "-0.20");
    }

    #[test]
    fn test_format_fixed_zero_precision() {
        assert_eq!(format_fixed(0.6, 0), "1");
        assert_eq!(format_fixed(0.4, 0), "0");
    }
}
