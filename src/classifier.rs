//! Air quality index bucketing

use serde::Serialize;
use std::fmt::Display;

/// Severity bucket for an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQualityCategory {
    Good,
    Moderate,
    CompromisedRisk,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityCategory {
    /// All categories, lowest severity first
    pub const ALL: [AirQualityCategory; 6] = [
        AirQualityCategory::Good,
        AirQualityCategory::Moderate,
        AirQualityCategory::CompromisedRisk,
        AirQualityCategory::Unhealthy,
        AirQualityCategory::VeryUnhealthy,
        AirQualityCategory::Hazardous,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AirQualityCategory::Good => "Good",
            AirQualityCategory::Moderate => "Moderate",
            AirQualityCategory::CompromisedRisk => "Compromised Risk",
            AirQualityCategory::Unhealthy => "Unhealthy",
            AirQualityCategory::VeryUnhealthy => "Very Unhealthy",
            AirQualityCategory::Hazardous => "Hazardous",
        }
    }

    /// Decorative sample weight for charts. Not a population statistic.
    #[must_use]
    pub fn illustrative_weight(self) -> u8 {
        match self {
            AirQualityCategory::Good => 40,
            AirQualityCategory::Moderate => 30,
            AirQualityCategory::CompromisedRisk => 15,
            AirQualityCategory::Unhealthy => 10,
            AirQualityCategory::VeryUnhealthy => 4,
            AirQualityCategory::Hazardous => 1,
        }
    }

    /// Inclusive upper AQI bound, `None` for the open-ended top bucket
    #[must_use]
    pub fn upper_bound(self) -> Option<i64> {
        match self {
            AirQualityCategory::Good => Some(50),
            AirQualityCategory::Moderate => Some(100),
            AirQualityCategory::CompromisedRisk => Some(150),
            AirQualityCategory::Unhealthy => Some(200),
            AirQualityCategory::VeryUnhealthy => Some(300),
            AirQualityCategory::Hazardous => None,
        }
    }
}

impl Display for AirQualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an AQI to its category and illustrative weight.
///
/// Bounds are inclusive and checked lowest first. Negative values fall in
/// [`AirQualityCategory::Good`].
#[must_use]
pub fn classify(aqi: i64) -> (AirQualityCategory, u8) {
    let category = AirQualityCategory::ALL
        .into_iter()
        .find(|category| category.upper_bound().is_none_or(|bound| aqi <= bound))
        .unwrap_or(AirQualityCategory::Hazardous);
    (category, category.illustrative_weight())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(30, AirQualityCategory::Good, 40)]
    #[case(75, AirQualityCategory::Moderate, 30)]
    #[case(130, AirQualityCategory::CompromisedRisk, 15)]
    #[case(180, AirQualityCategory::Unhealthy, 10)]
    #[case(250, AirQualityCategory::VeryUnhealthy, 4)]
    #[case(400, AirQualityCategory::Hazardous, 1)]
    fn test_classify_ranges(
        #[case] aqi: i64,
        #[case] category: AirQualityCategory,
        #[case] weight: u8,
    ) {
        assert_eq!(classify(aqi), (category, weight));
    }

    #[rstest]
    #[case(0, AirQualityCategory::Good)]
    #[case(50, AirQualityCategory::Good)]
    #[case(51, AirQualityCategory::Moderate)]
    #[case(100, AirQualityCategory::Moderate)]
    #[case(101, AirQualityCategory::CompromisedRisk)]
    #[case(150, AirQualityCategory::CompromisedRisk)]
    #[case(151, AirQualityCategory::Unhealthy)]
    #[case(200, AirQualityCategory::Unhealthy)]
    #[case(201, AirQualityCategory::VeryUnhealthy)]
    #[case(300, AirQualityCategory::VeryUnhealthy)]
    #[case(301, AirQualityCategory::Hazardous)]
    #[case(i64::MAX, AirQualityCategory::Hazardous)]
    fn test_classify_boundaries(#[case] aqi: i64, #[case] category: AirQualityCategory) {
        assert_eq!(classify(aqi).0, category);
    }

    #[test]
    fn test_negative_aqi_is_good() {
        assert_eq!(classify(-1), (AirQualityCategory::Good, 40));
        assert_eq!(classify(i64::MIN), (AirQualityCategory::Good, 40));
    }

    #[test]
    fn test_exactly_one_category_matches() {
        for aqi in 0..=600 {
            let matches = AirQualityCategory::ALL
                .iter()
                .filter(|category| {
                    let lower = AirQualityCategory::ALL
                        .iter()
                        .take_while(|c| c != category)
                        .filter_map(|c| c.upper_bound())
                        .max()
                        .map_or(i64::MIN, |bound| bound + 1);
                    aqi >= lower && category.upper_bound().is_none_or(|bound| aqi <= bound)
                })
                .count();
            assert_eq!(matches, 1, "aqi {aqi} matched {matches} categories");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(AirQualityCategory::CompromisedRisk.label(), "Compromised Risk");
        assert_eq!(AirQualityCategory::VeryUnhealthy.to_string(), "Very Unhealthy");
    }
}
