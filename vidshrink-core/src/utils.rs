//! Utility functions for formatting.

/// Formats a byte count with binary units and one decimal place.
///
/// Values below 1024 print as whole bytes; anything larger uses the biggest
/// unit from KiB to EiB that keeps the scaled value at or above one.
///
/// ```rust
/// use vidshrink_core::format_size;
///
/// assert_eq!(format_size(1023), "1023 B");
/// assert_eq!(format_size(1536), "1.5 KiB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut divisor = UNIT;
    let mut exp = 0;
    while exp + 1 < PREFIXES.len() && bytes / divisor >= UNIT {
        divisor *= UNIT;
        exp += 1;
    }

    format!("{:.1} {}iB", bytes as f64 / divisor as f64, PREFIXES[exp])
}
