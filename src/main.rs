use anyhow::Context;
use clap::{Parser, ValueEnum};
use lsystem_architect::logging::init_logging;
use lsystem_architect::{DrawCommand, InputFields, Preset, SvgCanvas};
use std::io::Write;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// SVG document.
    Svg,
    /// One draw command per line.
    Ops,
}

/// Expand an L-system and draw it with a turtle.
#[derive(Parser, Debug)]
#[command(name = "lsystem-architect", version, about)]
struct Cli {
    /// Start from a preset (koch, dragon, plant); other flags override its fields.
    #[arg(long)]
    preset: Option<Preset>,

    /// Start string.
    #[arg(long)]
    axiom: Option<String>,

    /// Rule as SYMBOL:REPLACEMENT; repeat the flag or separate rules with newlines.
    #[arg(long)]
    rules: Vec<String>,

    /// Turn angle in degrees.
    #[arg(long)]
    angle: Option<String>,

    /// Number of rewrite passes.
    #[arg(long)]
    iterations: Option<String>,

    /// Step length.
    #[arg(long)]
    length: Option<String>,

    /// Maximum instruction string length.
    #[arg(long)]
    max_len: Option<usize>,

    #[arg(long, value_enum, default_value = "svg")]
    format: Format,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn fields(&self) -> InputFields {
        let mut fields = self.preset.map(Preset::fields).unwrap_or_default();
        if let Some(axiom) = &self.axiom {
            fields.axiom = axiom.clone();
        }
        if !self.rules.is_empty() {
            fields.rules = self.rules.join("\n");
        }
        for (value, slot) in [
            (&self.angle, &mut fields.angle),
            (&self.iterations, &mut fields.iterations),
            (&self.length, &mut fields.length),
        ] {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }
        fields
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut config = cli.fields().parse()?;
    if let Some(max) = cli.max_len {
        config.max_instruction_len = max;
    }
    let drawing = config.interpret()?;
    tracing::info!(segments = drawing.segments.len(), "rendering");

    let mut out = std::io::stdout().lock();
    match cli.format {
        Format::Svg => {
            let mut svg = SvgCanvas::new();
            drawing.render(&mut svg);
            out.write_all(svg.finish().as_bytes())
                .context("writing SVG to stdout")?;
        }
        Format::Ops => {
            for command in &drawing.commands {
                let written = match command {
                    DrawCommand::MoveTo(p) => writeln!(out, "move {:.3} {:.3}", p.x, p.y),
                    DrawCommand::LineTo { to, color } => {
                        writeln!(out, "line {:.3} {:.3} {color}", to.x, to.y)
                    }
                };
                written.context("writing draw commands to stdout")?;
            }
        }
    }
    Ok(())
}
