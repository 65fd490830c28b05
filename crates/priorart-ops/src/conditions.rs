//! Process-condition extraction from claim text

use once_cell::sync::Lazy;
use priorart_domain::{LayerMention, OxygenMention, ProcessConditions};
use regex::Regex;

/// Oxygen concentration with a unit, e.g. "O2 21 Pa" or "oxygen: 0.5 %".
static OXYGEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:oxygen|O2)[^0-9]{0,10}(\d+\.?\d*)\s*(Pa|%|sccm)").unwrap()
});

/// Two-to-three digit Celsius temperatures; the degree sign is optional.
static TEMPERATURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{2,3})\s*°?C").unwrap());

/// Layer counts, numeric ("3 layers") or the word "multilayer".
static LAYERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)multi[-\s]?layer|(\d+)\s*layers?").unwrap());

/// Extract simple process conditions from claim text.
///
/// Best effort: text with no recognizable parameters yields empty lists,
/// never an error.
///
/// # Examples
///
/// ```
/// use priorart_ops::parse_conditions;
///
/// let cond = parse_conditions("120°C multilayer film with O2 21 Pa");
/// assert_eq!(cond.temperatures_c, vec!["120"]);
/// assert_eq!(cond.oxygen[0].amount, "21");
/// assert_eq!(cond.oxygen[0].unit, "Pa");
/// assert!(cond.layers[0].raw.contains("multilayer"));
/// ```
pub fn parse_conditions(text: &str) -> ProcessConditions {
    let oxygen = OXYGEN
        .captures_iter(text)
        .filter_map(|caps| {
            Some(OxygenMention {
                amount: caps.get(1)?.as_str().to_string(),
                unit: caps.get(2)?.as_str().to_string(),
            })
        })
        .collect();

    let temperatures_c = TEMPERATURE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();

    let layers = LAYERS
        .captures_iter(text)
        .map(|caps| LayerMention {
            raw: caps.get(0).map_or(String::new(), |m| m.as_str().to_string()),
            count: caps.get(1).and_then(|m| m.as_str().parse().ok()),
        })
        .collect();

    ProcessConditions {
        oxygen,
        temperatures_c,
        layers,
    }
}
