//! Interpreter that converts an instruction string into a [`Drawing`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] (or start from
//! [`TurtleInterpreter::standard`]), then call [`TurtleInterpreter::interpret`].
//!
//! Parametric words produced by [`symbios`] can be drawn with
//! [`TurtleInterpreter::interpret_state`] after registering symbol IDs through
//! [`TurtleInterpreter::populate_standard_symbols`].

use crate::palette::{Color, depth_color};
use crate::turtle::{STANDARD_SYMBOLS, TurtleOp, TurtleState};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use symbios::{SymbiosState, SymbolTable};
use tracing::{debug, warn};

/// Where the turtle starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Bottom-center facing up for branching words, left-center facing right otherwise.
    #[default]
    Auto,
    /// A fixed starting state.
    At(TurtleState),
}

impl Placement {
    /// Start used by [`Placement::Auto`] for words containing `[`.
    pub const BRANCHING: TurtleState = TurtleState {
        position: Vec2::new(0.0, -250.0),
        heading: 270.0,
    };

    /// Start used by [`Placement::Auto`] for words without branches.
    pub const LINEAR: TurtleState = TurtleState {
        position: Vec2::new(-200.0, 0.0),
        heading: 0.0,
    };

    pub fn resolve(self, branching: bool) -> TurtleState {
        match self {
            Self::At(state) => state,
            Self::Auto if branching => Self::BRANCHING,
            Self::Auto => Self::LINEAR,
        }
    }
}

/// Configuration for turtle interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Turn angle in degrees for `+`/`-`.
    pub angle: f32,
    /// Distance covered by `F`/`f`.
    pub length: f32,
    /// Starting position and heading.
    pub placement: Placement,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            angle: 90.0,
            length: 5.0,
            placement: Placement::Auto,
        }
    }
}

/// A single drawing instruction for a [`Canvas`](crate::render::Canvas).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Lift the pen and place it at the point.
    MoveTo(Vec2),
    /// Draw a line from the current point to `to`.
    LineTo { to: Vec2, color: Color },
}

/// A drawn line segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    /// Heading the segment was drawn along.
    pub heading: f32,
    /// Stack depth at the time of drawing.
    pub depth: usize,
    pub color: Color,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// The geometry produced by one interpretation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// State the turtle started in.
    pub start: TurtleState,
    /// State the turtle finished in.
    pub end: TurtleState,
    /// Ordered commands, beginning with a `MoveTo` to the start position.
    pub commands: Vec<DrawCommand>,
    /// Every drawn segment in order.
    pub segments: Vec<Segment>,
    /// Number of `[` operations.
    pub pushes: usize,
    /// Number of `]` operations that restored a saved state.
    pub restores: usize,
}

impl Drawing {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Interprets instruction strings as turtle graphics.
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    symbol_ops: Vec<TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the given configuration and an empty symbol map.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            symbol_ops: Vec::new(),
            config,
        }
    }

    /// Creates an interpreter with [`STANDARD_SYMBOLS`] registered.
    pub fn standard(config: TurtleConfig) -> Self {
        let mut interpreter = Self::new(config);
        for (symbol, op) in STANDARD_SYMBOLS {
            interpreter.set_op(symbol, op);
        }
        interpreter
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Assigns a [`TurtleOp`] to a character symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Operation registered for `symbol`, or [`TurtleOp::Ignore`].
    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Assigns a [`TurtleOp`] to an interned symbol ID.
    ///
    /// The map is grown automatically when `sym_id` exceeds its current length;
    /// gaps are filled with [`TurtleOp::Ignore`].
    pub fn set_symbol_op(&mut self, sym_id: u16, op: TurtleOp) {
        let idx = sym_id as usize;
        if idx >= self.symbol_ops.len() {
            self.symbol_ops.resize(idx + 1, TurtleOp::Ignore);
        }
        self.symbol_ops[idx] = op;
    }

    fn symbol_op(&self, idx: usize) -> TurtleOp {
        self.symbol_ops.get(idx).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Registers [`STANDARD_SYMBOLS`] by interned ID. Symbols missing from `interner` are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        for (symbol, op) in STANDARD_SYMBOLS {
            if let Some(id) = interner.resolve_id(symbol.encode_utf8(&mut [0; 4])) {
                self.set_symbol_op(id, op);
            }
        }
    }

    /// Interprets `word` from a freshly placed turtle and returns the resulting [`Drawing`].
    ///
    /// With [`Placement::Auto`] the start depends on whether the word contains a push symbol.
    pub fn interpret(&self, word: &str) -> Drawing {
        let branching = word.chars().any(|c| self.op(c) == TurtleOp::Push);
        let mut pen = Pen::new(self.config.placement.resolve(branching));
        for c in word.chars() {
            pen.apply(self.op(c), self.config.angle, self.config.length);
        }
        debug!(
            symbols = word.chars().count(),
            segments = pen.segments.len(),
            "interpreted word"
        );
        pen.finish()
    }

    /// Interprets a parametric [`SymbiosState`].
    ///
    /// The first parameter of a module, when present, replaces the configured length for
    /// `Draw`/`Move` and the configured angle (degrees) for `Turn`.
    pub fn interpret_state(&self, state: &SymbiosState) -> Drawing {
        let op_at = |i: usize| {
            state
                .get_view(i)
                .map_or(TurtleOp::Ignore, |v| self.symbol_op(v.sym as usize))
        };
        let branching = (0..state.len()).any(|i| op_at(i) == TurtleOp::Push);
        let mut pen = Pen::new(self.config.placement.resolve(branching));

        for view in (0..state.len()).filter_map(|i| state.get_view(i)) {
            let p0 = view.params.first().map(|&x| x as f32);
            pen.apply(
                self.symbol_op(view.sym as usize),
                p0.unwrap_or(self.config.angle),
                p0.unwrap_or(self.config.length),
            );
        }
        pen.finish()
    }
}

/// Mutable state of a single interpretation run.
struct Pen {
    start: TurtleState,
    turtle: TurtleState,
    stack: Vec<TurtleState>,
    commands: Vec<DrawCommand>,
    segments: Vec<Segment>,
    pushes: usize,
    restores: usize,
}

impl Pen {
    fn new(start: TurtleState) -> Self {
        Self {
            start,
            turtle: start,
            stack: Vec::new(),
            commands: vec![DrawCommand::MoveTo(start.position)],
            segments: Vec::new(),
            pushes: 0,
            restores: 0,
        }
    }

    fn apply(&mut self, op: TurtleOp, angle: f32, length: f32) {
        match op {
            TurtleOp::Draw => {
                let from = self.turtle.position;
                let to = self.turtle.advance(length);
                let depth = self.stack.len();
                let color = depth_color(depth);
                self.commands.push(DrawCommand::LineTo { to, color });
                self.segments.push(Segment {
                    from,
                    to,
                    heading: self.turtle.heading,
                    depth,
                    color,
                });
            }
            TurtleOp::Move => {
                let to = self.turtle.advance(length);
                self.commands.push(DrawCommand::MoveTo(to));
            }
            TurtleOp::Turn(sign) => self.turtle.turn(angle * sign),
            TurtleOp::Push => {
                self.stack.push(self.turtle);
                self.pushes += 1;
            }
            TurtleOp::Pop => match self.stack.pop() {
                Some(saved) => {
                    self.turtle = saved;
                    self.restores += 1;
                    self.commands.push(DrawCommand::MoveTo(saved.position));
                }
                None => warn!("pop on empty stack ignored"),
            },
            TurtleOp::Ignore => {}
        }
    }

    fn finish(self) -> Drawing {
        Drawing {
            start: self.start,
            end: self.turtle,
            commands: self.commands,
            segments: self.segments,
            pushes: self.pushes,
            restores: self.restores,
        }
    }
}
