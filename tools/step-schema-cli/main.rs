use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde_json::Value;
use std::fs;
use step_schema::prelude::*;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FillCli {
    Blank,
    CopyFirst,
}

impl From<FillCli> for TemplateFill {
    fn from(fill: FillCli) -> Self {
        match fill {
            FillCli::Blank => TemplateFill::Blank,
            FillCli::CopyFirst => TemplateFill::CopyFirst,
        }
    }
}

/// Inspect and round-trip workflow step properties through their form schema
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// How new group instances fill their values
    #[arg(long, value_enum, default_value = "blank", global = true)]
    fill: FillCli,

    /// Treat the input file as a whole step rather than a bare property object
    #[arg(long, global = true)]
    step: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the form schema outline for a properties file
    Inspect {
        /// Path to the JSON file
        path: String,
    },
    /// Build the schema and convert it back, printing the resulting JSON
    Roundtrip {
        /// Path to the JSON file
        path: String,

        /// Exit with an error if the output differs from the supported input
        #[arg(short, long)]
        check: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let options = SchemaOptions {
        template_fill: cli.fill.into(),
        ..SchemaOptions::default()
    };

    match cli.command {
        Command::Inspect { path } => run_inspect(&path, cli.step, options),
        Command::Roundtrip { path, check } => run_roundtrip(&path, cli.step, check, options),
    }
}

fn run_inspect(path: &str, as_step: bool, options: SchemaOptions) {
    let (model, fixed) = load_input(path, as_step);
    let schema = FormSchema::builder(&model).with_options(options).build();

    print!("{}", SchemaFormatter::format_schema(&schema));
    if let Some(fixed) = fixed {
        print!("{}", SchemaFormatter::format_params(&parse_fixed_params(&fixed)));
    }

    let dropped: Vec<_> = model
        .iter()
        .filter(|(_, value)| !classify(value).is_supported())
        .map(|(key, _)| key.as_str())
        .collect();
    if !dropped.is_empty() {
        println!("\nDropped (unsupported shape): {}", dropped.join(", "));
    }
}

fn run_roundtrip(path: &str, as_step: bool, check: bool, options: SchemaOptions) {
    let (model, _) = load_input(path, as_step);
    let schema = FormSchema::builder(&model).with_options(options).build();
    let output = schema.to_property_object();

    let rendered = serde_json::to_string_pretty(&output)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));
    println!("{}", rendered);

    if check {
        let expected: PropertyObject = model
            .iter()
            .filter(|(_, value)| classify(value).is_supported())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let same_order = expected.key_list() == output.key_list();
        if expected != output || !same_order {
            exit_with_error("Round trip changed the supported properties");
        }
        info!("round trip preserved {} keys", output.len());
    }
}

/// Loads either a bare property object or a step, returning its model and fixed parameters.
fn load_input(path: &str, as_step: bool) -> (PropertyObject, Option<FixedParams>) {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));

    if as_step {
        let value: Value = serde_json::from_str(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse step JSON: {}", e)));
        let step: Step = serde_json::from_value(value)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid step: {}", e)));
        info!("loaded step '{}' ({})", step.name, step.id);
        (step.properties.model, Some(step.properties.fixed_model))
    } else {
        let model = PropertyObject::from_json_str(&json)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        (model, None)
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
