//! Input parameters for a compounding series.

use serde::{Deserialize, Serialize};

/// Whether the rate is applied as growth or as decay.
///
/// Decay is growth with a negated rate; the calculator never uses a separate formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Growth,
    Decay,
}

impl Direction {
    /// Sign multiplier applied to the rate.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Growth => 1.0,
            Direction::Decay => -1.0,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Direction::Growth => Direction::Decay,
            Direction::Decay => Direction::Growth,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Growth => "Growth",
            Direction::Decay => "Decay",
        }
    }

    /// Label for the direction toggle, e.g. "Growth Mode".
    pub fn mode_label(self) -> &'static str {
        match self {
            Direction::Growth => "Growth Mode",
            Direction::Decay => "Decay Mode",
        }
    }

    /// Lowercase tag used in export filenames.
    pub fn file_tag(self) -> &'static str {
        match self {
            Direction::Growth => "growth",
            Direction::Decay => "decay",
        }
    }
}

/// The compounding frequencies offered to users.
///
/// The calculator itself accepts any positive number of periods per year; this
/// enum only enumerates the supported choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-Annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
        }
    }

    /// Look up the supported frequency with the given number of periods per year.
    pub fn from_periods(periods: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.periods_per_year() == periods)
    }

    pub fn index(self) -> usize {
        match self {
            CompoundingFrequency::Annually => 0,
            CompoundingFrequency::SemiAnnually => 1,
            CompoundingFrequency::Quarterly => 2,
            CompoundingFrequency::Monthly => 3,
        }
    }

    /// Next option, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Parameters for one series computation.
///
/// Defaults match the calculator's initial form: 100 at 5% for 10 years,
/// compounded annually, growing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// The principal
    pub initial_value: f64,
    /// Annualized percentage rate, e.g. `5.0` for 5%
    pub rate_percent: f64,
    /// Last year of the series (inclusive)
    pub years: u32,
    /// Compounding periods per year
    pub compounding_frequency: u32,
    #[serde(default)]
    pub direction: Direction,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            initial_value: 100.0,
            rate_percent: 5.0,
            years: 10,
            compounding_frequency: CompoundingFrequency::Annually.periods_per_year(),
            direction: Direction::Growth,
        }
    }
}

impl Parameters {
    /// Growth parameters compounded annually.
    pub fn new(initial_value: f64, rate_percent: f64, years: u32) -> Self {
        Self {
            initial_value,
            rate_percent,
            years,
            ..Self::default()
        }
    }

    /// Set an arbitrary number of compounding periods per year.
    pub fn with_frequency(mut self, periods_per_year: u32) -> Self {
        self.compounding_frequency = periods_per_year;
        self
    }

    pub fn with_compounding(self, frequency: CompoundingFrequency) -> Self {
        self.with_frequency(frequency.periods_per_year())
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn growth(self) -> Self {
        self.with_direction(Direction::Growth)
    }

    pub fn decay(self) -> Self {
        self.with_direction(Direction::Decay)
    }

    /// The supported frequency matching `compounding_frequency`, if any.
    pub fn compounding(&self) -> Option<CompoundingFrequency> {
        CompoundingFrequency::from_periods(self.compounding_frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        let periods: Vec<u32> = CompoundingFrequency::ALL
            .iter()
            .map(|f| f.periods_per_year())
            .collect();
        assert_eq!(periods, vec![1, 2, 4, 12]);
    }

    #[test]
    fn test_frequency_from_periods() {
        assert_eq!(
            CompoundingFrequency::from_periods(4),
            Some(CompoundingFrequency::Quarterly)
        );
        assert_eq!(CompoundingFrequency::from_periods(3), None);
        assert_eq!(CompoundingFrequency::from_periods(0), None);
    }

    #[test]
    fn test_frequency_cycle_wraps() {
        assert_eq!(
            CompoundingFrequency::Monthly.next(),
            CompoundingFrequency::Annually
        );
        assert_eq!(
            CompoundingFrequency::Annually.prev(),
            CompoundingFrequency::Monthly
        );
        for freq in CompoundingFrequency::ALL {
            assert_eq!(freq.next().prev(), freq);
        }
    }

    #[test]
    fn test_direction_sign_and_toggle() {
        assert_eq!(Direction::Growth.sign(), 1.0);
        assert_eq!(Direction::Decay.sign(), -1.0);
        assert_eq!(Direction::Growth.toggle(), Direction::Decay);
        assert_eq!(Direction::Decay.toggle().toggle(), Direction::Decay);
    }

    #[test]
    fn test_builder_setters() {
        let params = Parameters::new(1000.0, 12.0, 1)
            .with_compounding(CompoundingFrequency::Monthly)
            .decay();

        assert_eq!(params.initial_value, 1000.0);
        assert_eq!(params.rate_percent, 12.0);
        assert_eq!(params.years, 1);
        assert_eq!(params.compounding_frequency, 12);
        assert_eq!(params.direction, Direction::Decay);
        assert_eq!(params.compounding(), Some(CompoundingFrequency::Monthly));
    }

    #[test]
    fn test_default_matches_form_defaults() {
        let params = Parameters::default();
        assert_eq!(params, Parameters::new(100.0, 5.0, 10));
    }
}
