//! Text entry for numbers and the closed tag sets.
//!
//! Tags match case-insensitively; `_` and `-` count as spaces.

use colony_data::{Preset, UpdateRule, WeightFunction};

use crate::error::{ColonyError, Result};

fn normalize(tag: &str) -> String {
    tag.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parses a decimal (`2.5`) or a single fraction (`7/3`).
pub fn parse_real(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value = match trimmed.split_once('/') {
        None => trimmed.parse::<f64>().ok(),
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok();
            let den = den.trim().parse::<f64>().ok();
            match (num, den) {
                (Some(n), Some(d)) if d != 0.0 => Some(n / d),
                _ => None,
            }
        }
    };
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColonyError::invalid_number(text))
}

/// Parses four comma-separated payoff entries, each a decimal or fraction.
pub fn parse_payoff(text: &str) -> Result<[f64; 4]> {
    let values = text
        .split(',')
        .map(parse_real)
        .collect::<Result<Vec<_>>>()?;
    <[f64; 4]>::try_from(values).map_err(|_| ColonyError::invalid_number(text))
}

pub fn parse_update_rule(tag: &str) -> Result<UpdateRule> {
    match normalize(tag).as_str() {
        "threshold" => Ok(UpdateRule::Threshold),
        "perfect best response" | "pbr" => Ok(UpdateRule::PerfectBestResponse),
        "irrational best response" | "ibr" => Ok(UpdateRule::IrrationalBestResponse),
        _ => Err(ColonyError::unsupported_rule(tag)),
    }
}

pub fn parse_weight_function(tag: &str) -> Result<WeightFunction> {
    match normalize(tag).as_str() {
        "uniform" => Ok(WeightFunction::Uniform),
        "inverse manhattan" => Ok(WeightFunction::InverseManhattan),
        "inverse euclidean" => Ok(WeightFunction::InverseEuclidean),
        _ => Err(ColonyError::UnsupportedWeightFunction(tag.to_string())),
    }
}

pub fn parse_preset(tag: &str) -> Result<Preset> {
    match normalize(tag).as_str() {
        "all cooperators" | "all cooperate" => Ok(Preset::AllCooperate),
        "von neumann" => Ok(Preset::VonNeumann),
        "3x3 defectors" | "3x3" => Ok(Preset::Block3x3),
        "5x5 defectors" | "5x5" => Ok(Preset::Block5x5),
        "glider" => Ok(Preset::Glider),
        _ => Err(ColonyError::UnsupportedPreset(tag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real_decimal_and_fraction() {
        assert_eq!(parse_real("2.5").unwrap(), 2.5);
        assert_eq!(parse_real(" 7/3 ").unwrap(), 7.0 / 3.0);
        assert_eq!(parse_real("-1 / 4").unwrap(), -0.25);
    }

    #[test]
    fn test_parse_real_rejects_garbage() {
        for text in ["", "abc", "1/0", "1/2/3", "inf", "NaN"] {
            assert!(
                matches!(parse_real(text), Err(ColonyError::InvalidNumber(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_payoff() {
        assert_eq!(
            parse_payoff("1, 0, 0, 7/3").unwrap(),
            [1.0, 0.0, 0.0, 7.0 / 3.0]
        );
        assert!(parse_payoff("1,0,0").is_err());
    }

    #[test]
    fn test_rule_names_round_trip_through_labels() {
        for rule in UpdateRule::ALL {
            assert_eq!(parse_update_rule(rule.label()).unwrap(), rule);
        }
        for weighting in WeightFunction::ALL {
            assert_eq!(parse_weight_function(weighting.label()).unwrap(), weighting);
        }
        for preset in Preset::ALL {
            assert_eq!(parse_preset(preset.label()).unwrap(), preset);
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!(parse_update_rule("IBR").unwrap(), UpdateRule::IrrationalBestResponse);
        assert_eq!(
            parse_update_rule("perfect_best_response").unwrap(),
            UpdateRule::PerfectBestResponse
        );
        assert_eq!(
            parse_weight_function("inverse-manhattan").unwrap(),
            WeightFunction::InverseManhattan
        );
    }

    #[test]
    fn test_unknown_rule_surfaces_error() {
        assert_eq!(
            parse_update_rule("Majority"),
            Err(ColonyError::UnsupportedUpdateRule("Majority".into()))
        );
        assert!(matches!(
            parse_weight_function("gaussian"),
            Err(ColonyError::UnsupportedWeightFunction(_))
        ));
        assert!(matches!(
            parse_preset("checkerboard"),
            Err(ColonyError::UnsupportedPreset(_))
        ));
    }
}
