mod command;

use std::fmt::Write as FmtWrite;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use schemadraft::{
    BuilderOptions, DocumentFormat, EditIntent, Field, Forest, OutputDestination, SchemaBuilder,
    emit,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use command::{Command, HELP_TEXT};

#[derive(Debug, Parser)]
#[command(
    name = "schemadraft",
    version,
    about = "Compose a tree of typed fields and preview the JSON document it describes"
)]
struct Cli {
    /// Preview format (json, yaml, toml); defaults to the output file extension, then json
    #[arg(short = 'F', long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "compact")]
    compact: bool,

    /// Destinations for the final document ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Print the preview after every change
    #[arg(short = 'w', long = "watch")]
    watch: bool,

    /// Only print the final document (and errors)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();

    let plan = plan_output(&cli)?;
    let mut session = Session {
        builder: SchemaBuilder::new().with_options(plan.options),
        watch: cli.watch,
        quiet: cli.quiet,
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive && !cli.quiet {
        println!("schemadraft: type 'help' for commands, 'quit' or Ctrl+D to finish");
    }
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().wrap_err("failed to flush stdout")?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.wrap_err("failed to read command")?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => session.run(command)?,
            Err(err) => eprintln!("error: {err}"),
        }
    }

    let text = session.builder.preview().map_err(|err| eyre!("{err:#}"))?;
    emit(&text, &plan.destinations).map_err(|err| eyre!("{err:#}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

struct Session {
    builder: SchemaBuilder,
    watch: bool,
    quiet: bool,
}

impl Session {
    fn run(&mut self, command: Command) -> Result<()> {
        debug!(?command, "running command");
        match command {
            Command::Edit(intent) => self.edit(intent),
            Command::Tree => {
                print!("{}", render_outline(self.builder.forest()));
                Ok(())
            }
            Command::Show => self.print_preview(),
            Command::Help => {
                println!("{HELP_TEXT}");
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn edit(&mut self, intent: EditIntent) -> Result<()> {
        let target = intent.target();
        let adds_child = matches!(intent, EditIntent::AddChild { .. });
        let outcome = self.builder.apply(intent);
        if !outcome.changed {
            let forest = self.builder.forest();
            match target.map(|id| (id, forest.find(id))) {
                Some((id, None)) => eprintln!("no change: field #{id} does not exist"),
                Some((id, Some(field))) if adds_child && !field.can_hold_children() => eprintln!(
                    "no change: field #{id} is {} and cannot hold children",
                    field.shape.label()
                ),
                Some((id, Some(_))) => eprintln!("no change to field #{id}"),
                None => eprintln!("no change"),
            }
            return Ok(());
        }
        if !self.quiet {
            if let Some(created) = outcome.created {
                println!("created #{created}");
            }
        }
        if self.watch {
            self.print_preview()?;
        }
        Ok(())
    }

    fn print_preview(&self) -> Result<()> {
        let text = self.builder.preview().map_err(|err| eyre!("{err:#}"))?;
        emit(&text, &[OutputDestination::Stdout]).map_err(|err| eyre!("{err:#}"))
    }
}

/// Indented outline, two spaces per level, headed by the root count.
fn render_outline(forest: &Forest) -> String {
    let mut out = String::new();
    let count = forest.len();
    let _ = writeln!(out, "{count} field{}", if count == 1 { "" } else { "s" });
    for field in forest {
        write_outline(&mut out, field, 0);
    }
    out
}

fn write_outline(out: &mut String, field: &Field, depth: usize) {
    let _ = writeln!(
        out,
        "{:indent$}#{} {}: {}",
        "",
        field.id(),
        field.display_name(),
        field.shape.label(),
        indent = depth * 2
    );
    for child in field.children().unwrap_or_default() {
        write_outline(out, child, depth + 1);
    }
}

/// Preview settings and destinations resolved from the command line.
struct OutputPlan {
    options: BuilderOptions,
    destinations: Vec<OutputDestination>,
}

fn plan_output(cli: &Cli) -> Result<OutputPlan> {
    let mut destinations = Vec::with_capacity(cli.outputs.len().max(1));
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            return Err(eyre!("output destination cannot be empty"));
        }
        destinations.push(OutputDestination::parse(raw));
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    if !cli.force {
        if let Some(existing) = destinations
            .iter()
            .filter_map(OutputDestination::path)
            .find(|path| path.exists())
        {
            return Err(eyre!(
                "file {} already exists (pass --force to overwrite)",
                existing.display()
            ));
        }
    }

    let format = match cli.format {
        Some(format) => format,
        None => match destinations.iter().find_map(OutputDestination::path) {
            Some(path) => match probe_extension(path) {
                ExtensionFormat::Known(format) => format,
                ExtensionFormat::MissingFeature(feature) => {
                    return Err(eyre!(
                        "output file {} requires {feature} support, but this build lacks the '{feature}' feature",
                        path.display()
                    ));
                }
                ExtensionFormat::Unknown => DocumentFormat::default(),
            },
            None => DocumentFormat::default(),
        },
    };
    debug!(%format, destinations = destinations.len(), "resolved output");

    Ok(OutputPlan {
        options: BuilderOptions::default()
            .with_format(format)
            .with_pretty(!cli.compact),
        destinations,
    })
}

#[derive(Debug, PartialEq, Eq)]
enum ExtensionFormat {
    Known(DocumentFormat),
    #[allow(dead_code)]
    MissingFeature(&'static str),
    Unknown,
}

fn probe_extension(path: &Path) -> ExtensionFormat {
    let Some(ext) = path.extension() else {
        return ExtensionFormat::Unknown;
    };
    match ext.to_string_lossy().to_ascii_lowercase().as_str() {
        "json" => ExtensionFormat::Known(DocumentFormat::Json),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => ExtensionFormat::Known(DocumentFormat::Yaml),
        #[cfg(not(feature = "yaml"))]
        "yaml" | "yml" => ExtensionFormat::MissingFeature("yaml"),
        #[cfg(feature = "toml")]
        "toml" => ExtensionFormat::Known(DocumentFormat::Toml),
        #[cfg(not(feature = "toml"))]
        "toml" => ExtensionFormat::MissingFeature("toml"),
        _ => ExtensionFormat::Unknown,
    }
}
