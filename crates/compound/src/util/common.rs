//! Parsing helpers for command-line and settings values

use compound_core::CompoundingFrequency;

/// Parse a compounding frequency by name or by periods per year.
///
/// Accepts the option labels case-insensitively ("Monthly", "semi-annually",
/// "semiannually") and the numbers 1, 2, 4 and 12.
pub fn parse_frequency(s: &str) -> Result<CompoundingFrequency, String> {
    let normalized: String = s
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(*c, '-' | '_' | ' '))
        .collect();

    let by_name = CompoundingFrequency::ALL.into_iter().find(|freq| {
        freq.label()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-')
            .eq(normalized.chars())
    });

    by_name
        .or_else(|| {
            normalized
                .parse::<u32>()
                .ok()
                .and_then(CompoundingFrequency::from_periods)
        })
        .ok_or_else(|| {
            format!("unknown compounding frequency '{s}' (expected annually, semi-annually, quarterly or monthly)")
        })
}
