//! The provider sends every number as a string. These parse on demand and
//! never fail loudly; a value the dashboard cannot read is treated as zero or
//! missing.

#[must_use]
pub fn parse_position(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|p| *p > 0)
}

#[must_use]
pub fn parse_points(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Points are whole numbers except for half-points races; print them the way
/// the provider does.
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points}")
    }
}
