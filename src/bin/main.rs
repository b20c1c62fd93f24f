use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use creational_patterns::{House, HouseBuilder, HousePlan, Result, Shape, ShapeFactory};

#[derive(Parser, Debug)]
#[command(name = "creational", version, about = "Build houses and draw shapes")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log builder and factory activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the sample houses and draw every shape
    Demo,
    /// Build a single house from arguments or a plan file
    House(HouseArgs),
    /// Draw shapes by name (case-insensitive)
    Shape {
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct HouseArgs {
    #[arg(required_unless_present = "plan")]
    walls: Option<String>,

    #[arg(required_unless_present = "plan")]
    roof: Option<String>,

    /// TOML or JSON plan; other flags override its values
    #[arg(long, conflicts_with_all = ["walls", "roof"])]
    plan: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    doors: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    windows: Option<i32>,

    #[arg(long)]
    floor_type: Option<String>,

    /// `--garden` alone means true; `--garden=false` clears a plan's garden
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    garden: Option<bool>,
}

impl HouseArgs {
    fn into_plan(self) -> Result<HousePlan> {
        let mut plan = match self.plan {
            Some(path) => HousePlan::from_file(&path)?,
            None => HousePlan {
                walls: self.walls.unwrap_or_default(),
                roof: self.roof.unwrap_or_default(),
                doors: None,
                windows: None,
                floor_type: None,
                garden: None,
            },
        };

        if self.doors.is_some() {
            plan.doors = self.doors;
        }
        if self.windows.is_some() {
            plan.windows = self.windows;
        }
        if self.floor_type.is_some() {
            plan.floor_type = self.floor_type;
        }
        if self.garden.is_some() {
            plan.garden = self.garden;
        }
        Ok(plan)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Demo => run_demo(cli.format, out),
        Command::House(args) => {
            let house = args.into_plan()?.into_house()?;
            print_house(&house, cli.format, out)
        }
        Command::Shape { labels } => {
            for label in &labels {
                let shape = ShapeFactory::get_shape(Some(label.as_str()));
                print_shape(label, shape, cli.format, out)?;
            }
            Ok(())
        }
    }
}

fn run_demo<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    info!("running demo");

    if format == OutputFormat::Text {
        writeln!(out, "{}", "=== Builder Pattern ===".bold())?;
    }
    let houses = [
        HouseBuilder::new("Brick", "Gable")?
            .doors(3)
            .windows(10)
            .floor_type("Wooden")
            .garden(true)
            .build(),
        HouseBuilder::new("Wood", "Flat")?.doors(2).windows(6).build(),
        HouseBuilder::new("Concrete", "Slanted")?.build(),
    ];
    for house in &houses {
        print_house(house, format, out)?;
    }

    if format == OutputFormat::Text {
        writeln!(out, "\n{}", "=== Factory Pattern ===".bold())?;
    }
    for label in ["CIRCLE", "RECTANGLE", "SQUARE"] {
        print_shape(label, ShapeFactory::get_shape(Some(label)), format, out)?;
    }
    Ok(())
}

fn print_house<W: Write>(house: &House, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{house}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, house).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_shape<W: Write>(
    label: &str,
    shape: Option<Shape>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match (format, shape) {
        (OutputFormat::Text, Some(shape)) => shape.render(out)?,
        (OutputFormat::Text, None) => {
            writeln!(out, "{} no shape named '{}'", "!".yellow().bold(), label)?
        }
        (OutputFormat::Json, shape) => writeln!(
            out,
            "{}",
            json!({ "label": label, "shape": shape.map(|s| s.name()) })
        )?,
    }
    Ok(())
}
