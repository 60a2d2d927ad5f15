//! Input fields and validated configuration.

use crate::error::{Error, Result};
use crate::grammar::{DEFAULT_MAX_INSTRUCTION_LEN, Expander, RuleSet};
use crate::interpreter::{Drawing, Placement, TurtleConfig, TurtleInterpreter};
use serde::{Deserialize, Serialize};

/// Raw text as entered by the user, before any validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFields {
    pub axiom: String,
    /// One `symbol:replacement` pair per line.
    pub rules: String,
    pub angle: String,
    pub iterations: String,
    pub length: String,
}

impl Default for InputFields {
    fn default() -> Self {
        Self {
            axiom: "F".into(),
            rules: "F:F+F-F-F+F".into(),
            angle: "90".into(),
            iterations: "4".into(),
            length: "5".into(),
        }
    }
}

impl InputFields {
    /// Validates every field. Numeric fields are checked before anything else is built.
    pub fn parse(&self) -> Result<LSystemConfig> {
        let angle = parse_angle(&self.angle)?;
        let length = parse_length(&self.length)?;
        let iterations = parse_iterations(&self.iterations)?;
        Ok(LSystemConfig {
            axiom: self.axiom.trim().to_string(),
            rules: RuleSet::parse(self.rules.trim()),
            angle,
            iterations,
            length,
            max_instruction_len: DEFAULT_MAX_INSTRUCTION_LEN,
        })
    }
}

fn parse_angle(raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| Error::invalid("angle", raw, "not a number"))?;
    if !value.is_finite() {
        return Err(Error::invalid("angle", raw, "must be finite"));
    }
    Ok(value)
}

fn parse_length(raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| Error::invalid("length", raw, "not a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid("length", raw, "must be a positive number"));
    }
    Ok(value)
}

fn parse_iterations(raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| Error::invalid("iterations", raw, "not a non-negative integer"))
}

/// A validated L-system render request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemConfig {
    pub axiom: String,
    pub rules: RuleSet,
    /// Turn angle in degrees.
    pub angle: f32,
    pub iterations: usize,
    /// Step length, always positive.
    pub length: f32,
    /// Ceiling on the expanded instruction string.
    pub max_instruction_len: usize,
}

impl LSystemConfig {
    /// Expands the axiom under the configured ceiling.
    pub fn expand(&self) -> Result<String> {
        Expander::new(self.max_instruction_len).expand(&self.axiom, &self.rules, self.iterations)
    }

    pub fn turtle_config(&self) -> TurtleConfig {
        TurtleConfig {
            angle: self.angle,
            length: self.length,
            placement: Placement::Auto,
        }
    }

    /// Expands and interprets with the standard symbol table.
    pub fn interpret(&self) -> Result<Drawing> {
        let word = self.expand()?;
        Ok(TurtleInterpreter::standard(self.turtle_config()).interpret(&word))
    }

    /// Turns the configuration back into text fields.
    pub fn to_fields(&self) -> InputFields {
        InputFields {
            axiom: self.axiom.clone(),
            rules: self.rules.to_text(),
            angle: self.angle.to_string(),
            iterations: self.iterations.to_string(),
            length: self.length.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(angle: &str, iterations: &str, length: &str) -> InputFields {
        InputFields {
            angle: angle.into(),
            iterations: iterations.into(),
            length: length.into(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_parse() {
        let config = InputFields::default().parse().unwrap();
        assert_eq!(config.axiom, "F");
        assert_eq!(config.rules.get('F'), Some("F+F-F-F+F"));
        assert_eq!(config.angle, 90.0);
        assert_eq!(config.iterations, 4);
        assert_eq!(config.length, 5.0);
    }

    #[test]
    fn fields_are_trimmed() {
        let mut input = fields(" 25.5 ", "\t2\n", " 7 ");
        input.axiom = "  X ".into();
        let config = input.parse().unwrap();
        assert_eq!(config.axiom, "X");
        assert_eq!(config.angle, 25.5);
        assert_eq!(config.iterations, 2);
        assert_eq!(config.length, 7.0);
    }

    #[test]
    fn bad_iterations_are_rejected() {
        for raw in ["", "abc", "-1", "2.5"] {
            let err = fields("90", raw, "5").parse().unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfig { field: "iterations", .. }),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn bad_angle_is_rejected() {
        for raw in ["ninety", "NaN", "inf"] {
            let err = fields(raw, "1", "5").parse().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { field: "angle", .. }), "{raw}");
        }
        assert_eq!(fields("-30", "1", "5").parse().unwrap().angle, -30.0);
    }

    #[test]
    fn bad_length_is_rejected() {
        for raw in ["", "x", "0", "-5", "inf"] {
            let err = fields("90", "1", raw).parse().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { field: "length", .. }), "{raw}");
        }
    }

    #[test]
    fn error_names_field_and_value() {
        let err = fields("90", "four", "5").parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid configuration: iterations = "four" (not a non-negative integer)"#
        );
    }

    #[test]
    fn interpret_runs_pipeline() {
        let drawing = fields("90", "1", "10").parse().unwrap().interpret().unwrap();
        assert_eq!(drawing.segments.len(), 5);
    }

    #[test]
    fn interpret_respects_ceiling() {
        let mut config = InputFields::default().parse().unwrap();
        config.max_instruction_len = 50;
        assert!(matches!(
            config.interpret(),
            Err(Error::InstructionLimit { iteration: 3, .. })
        ));
    }

    #[test]
    fn to_fields_reparses() {
        let config = fields("60", "3", "2.5").parse().unwrap();
        assert_eq!(config.to_fields().parse().unwrap(), config);
    }
}
