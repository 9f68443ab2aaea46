//! Synthetic demo data
//!
//! Random placeholder figures for exercising a dashboard layout. Nothing here
//! is a forecast or a measurement, and every value carries that label.

use rand::RngExt;
use serde::Serialize;

pub const CONDITIONS: [&str; 10] = [
    "Sunny",
    "Cloudy",
    "Rain",
    "Overcast",
    "Thunder",
    "Partly Sunny",
    "Fog",
    "Showers",
    "Snowy",
    "Clear Night",
];

pub const SAMPLE_COUNT: usize = 10;

pub const DISCLAIMER: &str =
    "Synthetic demo data generated at random. Not a forecast and not a measured accuracy.";

#[derive(Debug, Clone, Serialize)]
pub struct SyntheticDemo {
    /// Always `true`
    pub synthetic: bool,
    pub disclaimer: &'static str,
    /// Random condition names, one per slot
    pub conditions: Vec<&'static str>,
    /// Random percentages in `[80, 100)`
    pub accuracy_percent: Vec<f64>,
}

impl SyntheticDemo {
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let conditions = (0..SAMPLE_COUNT)
            .map(|_| CONDITIONS[rng.random_range(0..CONDITIONS.len())])
            .collect();
        let accuracy_percent = (0..SAMPLE_COUNT)
            .map(|_| rng.random_range(80.0..100.0))
            .collect();

        Self {
            synthetic: true,
            disclaimer: DISCLAIMER,
            conditions,
            accuracy_percent,
        }
    }
}

impl std::fmt::Display for SyntheticDemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[SYNTHETIC] {}", self.disclaimer)?;
        for (slot, (condition, accuracy)) in self
            .conditions
            .iter()
            .zip(&self.accuracy_percent)
            .enumerate()
        {
            writeln!(f, "   #{slot:<2} {condition:<13} {accuracy:.1}%")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_labelled_synthetic() {
        let demo = SyntheticDemo::generate();
        assert!(demo.synthetic);
        assert!(demo.disclaimer.contains("Not a forecast"));
    }

    #[test]
    fn test_generate_shapes_and_ranges() {
        let demo = SyntheticDemo::generate();
        assert_eq!(demo.conditions.len(), SAMPLE_COUNT);
        assert_eq!(demo.accuracy_percent.len(), SAMPLE_COUNT);
        assert!(demo.conditions.iter().all(|c| CONDITIONS.contains(c)));
        assert!(
            demo.accuracy_percent
                .iter()
                .all(|a| (80.0..100.0).contains(a))
        );
    }

    #[test]
    fn test_display_marks_synthetic() {
        let text = SyntheticDemo::generate().to_string();
        assert!(text.starts_with("[SYNTHETIC]"));
        assert_eq!(text.lines().count(), SAMPLE_COUNT + 1);
    }
}
