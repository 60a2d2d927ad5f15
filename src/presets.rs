//! Named starting configurations.

use crate::config::InputFields;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Quadratic Koch curve.
    Koch,
    /// Heighway dragon.
    Dragon,
    /// Branching plant.
    Plant,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Koch, Preset::Dragon, Preset::Plant];

    pub fn label(self) -> &'static str {
        match self {
            Self::Koch => "Koch Snowflake",
            Self::Dragon => "Dragon Curve",
            Self::Plant => "Fractal Plant",
        }
    }

    /// `(axiom, rules, angle, iterations, length)`.
    pub fn values(self) -> (&'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Koch => ("F", "F:F+F-F-F+F", "90", "3", "5"),
            Self::Dragon => ("FX", "X:X+YF+\nY:-FX-Y", "90", "10", "5"),
            Self::Plant => ("X", "F:FF\nX:F+[[X]-X]-F[-FX]+X", "25", "4", "5"),
        }
    }

    pub fn fields(self) -> InputFields {
        let (axiom, rules, angle, iterations, length) = self.values();
        InputFields {
            axiom: axiom.into(),
            rules: rules.into(),
            angle: angle.into(),
            iterations: iterations.into(),
            length: length.into(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a name does not match any preset.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown preset '{0}' (expected koch, dragon or plant)")]
pub struct ParsePresetError(pub String);

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "koch" => Ok(Self::Koch),
            "dragon" => Ok(Self::Dragon),
            "plant" => Ok(Self::Plant),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::expand;

    #[test]
    fn every_preset_parses() {
        for preset in Preset::ALL {
            let config = preset.fields().parse().unwrap();
            assert!(!config.rules.is_empty(), "{preset}");
            assert_eq!(config.length, 5.0);
        }
    }

    #[test]
    fn dragon_rules() {
        let config = Preset::Dragon.fields().parse().unwrap();
        assert_eq!(config.iterations, 10);
        assert_eq!(config.rules.get('X'), Some("X+YF+"));
        assert_eq!(config.rules.get('Y'), Some("-FX-Y"));
        // The dragon curve draws 2^n segments.
        let word = expand(&config.axiom, &config.rules, config.iterations);
        assert_eq!(word.matches('F').count(), 1 << 10);
    }

    #[test]
    fn plant_branches() {
        let drawing = Preset::Plant.fields().parse().unwrap().interpret().unwrap();
        assert_eq!(drawing.pushes, drawing.restores);
        assert!(drawing.segments.iter().any(|s| s.depth > 1));
    }

    #[test]
    fn names_parse() {
        assert_eq!("Koch".parse::<Preset>(), Ok(Preset::Koch));
        assert_eq!(" plant ".parse::<Preset>(), Ok(Preset::Plant));
        let err = "Fern".parse::<Preset>().unwrap_err();
        assert_eq!(err, ParsePresetError("fern".into()));
        assert_eq!(
            err.to_string(),
            "unknown preset 'fern' (expected koch, dragon or plant)"
        );
    }
}
