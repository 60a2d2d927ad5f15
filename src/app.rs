//! The architect session: input fields plus the current canvas contents.
//!
//! This is the form-and-canvas workflow without a widget toolkit. Every generate call
//! builds a fresh interpreter run; a failed call leaves the canvas as it was.

use crate::config::InputFields;
use crate::error::Result;
use crate::interpreter::Drawing;
use crate::presets::Preset;
use crate::render::Canvas;
use tracing::{info, warn};

#[derive(Clone, Debug, Default)]
pub struct Architect {
    /// Text currently in the form.
    pub fields: InputFields,
    drawing: Option<Drawing>,
}

impl Architect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: InputFields) -> Self {
        Self {
            fields,
            drawing: None,
        }
    }

    /// What the canvas currently shows.
    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    /// Overwrites every input field with the preset's values. The canvas is untouched.
    pub fn load_preset(&mut self, preset: Preset) {
        info!(%preset, "loading preset");
        self.fields = preset.fields();
    }

    /// Parses the fields, expands and interprets, then replaces the canvas contents.
    pub fn generate(&mut self) -> Result<&Drawing> {
        let config = self.fields.parse().inspect_err(|e| warn!(%e, "rejected input"))?;
        let drawing = config.interpret().inspect_err(|e| warn!(%e, "expansion failed"))?;
        info!(
            iterations = config.iterations,
            segments = drawing.segments.len(),
            "generated drawing"
        );
        let drawing: &Drawing = self.drawing.insert(drawing);
        Ok(drawing)
    }

    pub fn clear(&mut self) {
        self.drawing = None;
    }

    /// Replays the current drawing, if any, onto `canvas`.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(drawing) = &self.drawing {
            drawing.render(canvas);
        }
    }
}
