//! Turtle state and operations for 2D interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The cursor of the drawing turtle.
///
/// Headings are in degrees, measured clockwise from the +X axis with Y pointing up,
/// and kept normalized to `[0, 360)`. Saving and restoring a state is a plain copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: Vec2,

    /// Current heading in degrees.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading: normalize(heading),
        }
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        Vec2::new(cos, -sin)
    }

    /// Rotates clockwise by `degrees` (negative turns counter-clockwise).
    pub fn turn(&mut self, degrees: f32) {
        self.heading = normalize(self.heading + degrees);
    }

    /// Moves `distance` along the heading and returns the new position.
    pub fn advance(&mut self, distance: f32) -> Vec2 {
        self.position += self.direction() * distance;
        self.position
    }
}

/// Folds `degrees` into `[0, 360)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly `360.0`, which maps back to `0.0`.
pub fn normalize(degrees: f32) -> f32 {
    let h = degrees.rem_euclid(360.0);
    if h >= 360.0 { 0.0 } else { h }
}

/// Operations that can be performed by the drawing turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward, drawing a segment (`F`).
    Draw,
    /// Move forward without drawing (`f`).
    Move,
    /// Rotate by the configured angle times the sign (`+` is `1.0`, `-` is `-1.0`).
    Turn(f32),
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed state (`]`).
    Pop,
    /// No-op: symbol has no drawing meaning (grammar placeholders such as `X`, `Y`).
    Ignore,
}

/// The conventional symbol table.
pub const STANDARD_SYMBOLS: [(char, TurtleOp); 6] = [
    ('F', TurtleOp::Draw),
    ('f', TurtleOp::Move),
    ('+', TurtleOp::Turn(1.0)),
    ('-', TurtleOp::Turn(-1.0)),
    ('[', TurtleOp::Push),
    (']', TurtleOp::Pop),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn clockwise_turns_point_down() {
        let mut t = TurtleState::default();
        assert!(close(t.direction(), Vec2::X));
        t.turn(90.0);
        assert_eq!(t.heading, 90.0);
        assert!(close(t.direction(), Vec2::NEG_Y));
        t.turn(-180.0);
        assert_eq!(t.heading, 270.0);
        assert!(close(t.direction(), Vec2::Y));
    }

    #[test]
    fn heading_is_normalized() {
        assert_eq!(TurtleState::new(Vec2::ZERO, -90.0).heading, 270.0);
        assert_eq!(TurtleState::new(Vec2::ZERO, 720.0).heading, 0.0);
    }

    #[test]
    fn tiny_negative_turn_stays_below_full_circle() {
        let mut t = TurtleState::new(Vec2::ZERO, 0.0);
        t.turn(-1e-6);
        assert!((0.0..360.0).contains(&t.heading), "{}", t.heading);
        assert!((0.0..360.0).contains(&TurtleState::new(Vec2::ZERO, -1e-6).heading));
        assert_eq!(normalize(-1e-6), 0.0);
        assert_eq!(normalize(-0.5), 359.5);
    }

    #[test]
    fn advance_moves_along_heading() {
        let mut t = TurtleState::new(Vec2::new(1.0, 1.0), 270.0);
        let p = t.advance(10.0);
        assert!(close(p, Vec2::new(1.0, 11.0)));
        assert_eq!(t.position, p);
    }
}
