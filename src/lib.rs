//! # lsystem-architect
//!
//! Generates and renders L-System fractals.
//!
//! An axiom and a [`RuleSet`] are expanded by repeated parallel rewriting into an
//! instruction string, which a [`TurtleInterpreter`] walks to produce a [`Drawing`]:
//! colored line segments plus the pen movements between them. Drawings are replayed onto
//! any [`Canvas`], so the core has no dependency on a particular graphics toolkit.
//!
//! ```
//! use lsystem_architect::{Preset, SvgCanvas};
//!
//! let drawing = Preset::Koch.fields().parse()?.interpret()?;
//! let mut svg = SvgCanvas::new();
//! drawing.render(&mut svg);
//! assert_eq!(svg.line_count(), 125);
//! # Ok::<(), lsystem_architect::Error>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod logging;
pub mod palette;
pub mod presets;
pub mod render;
pub mod turtle;

pub use app::*;
pub use config::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use palette::*;
pub use presets::*;
pub use render::*;
pub use turtle::*;
