use clap::{Parser, ValueEnum};
use routinegen::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutCli {
    /// Step references plus a `stepDefinitions` lookup
    Indexed,
    /// Full step definitions inlined into the step list
    Inline,
}

impl From<LayoutCli> for RoutineLayout {
    fn from(layout: LayoutCli) -> Self {
        match layout {
            LayoutCli::Indexed => RoutineLayout::Indexed,
            LayoutCli::Inline => RoutineLayout::Inline,
        }
    }
}

/// Generates randomized robot routine fixtures (gripper actuation and arm motion steps)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to [default: depends on --layout]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The number of step groups (primary grip, secondary grip, arm move) to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_STEP_GROUPS)]
    groups: usize,

    /// The document layout to write
    #[arg(long, value_enum, default_value_t = LayoutCli::Indexed)]
    layout: LayoutCli,

    /// Seed for reproducible output; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Read the written file back and validate it
    #[arg(long)]
    check: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let layout = RoutineLayout::from(cli.layout);
    let config = GeneratorConfig::new(layout, cli.groups);
    let output = cli.output.unwrap_or_else(|| config.default_output());
    debug!(?config, seed = ?cli.seed, "resolved configuration");

    let mut generator = match cli.seed {
        Some(seed) => RoutineGenerator::seeded(seed, config)?,
        None => RoutineGenerator::from_entropy(config)?,
    };

    info!(groups = cli.groups, ?layout, "generating routine");
    let document = generator.generate();
    write_document(&document, &output)?;

    if cli.check {
        let reloaded = read_document(&output)?;
        reloaded.validate()?;
        if reloaded != document {
            return Err(format!(
                "'{}' does not read back as the routine that was written",
                output.display()
            )
            .into());
        }
        info!("-> Read-back check passed.");
    }

    let counts = document.kind_counts();
    for kind in StepKind::ALL {
        info!(
            "-> Generated {} '{}' step(s).",
            counts.get(&kind).copied().unwrap_or(0),
            kind
        );
    }
    info!(
        "Successfully generated and saved routine to '{}'",
        output.display()
    );

    Ok(())
}
