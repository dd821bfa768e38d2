//! longhand - Expand CSS shorthand declarations

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use longhand::Expander;
use longhand::block::{self, BlockDeclaration};
use longhand::value;

#[derive(Parser)]
#[command(name = "longhand")]
#[command(version, about = "Expand CSS shorthand declarations into longhands", long_about = None)]
#[command(after_help = "EXAMPLES:
    echo 'margin: 1px 2px' | longhand    Expand declarations read from stdin
    longhand rules.css --format json     Print longhands of a file as JSON
    longhand rules.css --warn-dropped    Report values that fail to parse")]
struct Cli {
    /// Declaration block to read (`-` or omitted for stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Report declarations dropped because their value does not parse
    #[arg(long)]
    warn_dropped: bool,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `property: value;` lines
    Css,
    /// Array of `{ "property", "value" }` objects
    Json,
}

#[derive(Serialize)]
struct Longhand<'a> {
    property: &'a str,
    value: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    important: bool,
}

impl<'a> From<&'a BlockDeclaration> for Longhand<'a> {
    fn from(declaration: &'a BlockDeclaration) -> Self {
        Self {
            property: &declaration.property,
            value: &declaration.value,
            important: declaration.important,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let css = read_input(cli.input.as_deref())?;
    let declarations = block::parse_declarations(&css);

    if cli.warn_dropped && !cli.quiet {
        for declaration in &declarations {
            if let Err(e) = value::parse(&declaration.value) {
                eprintln!("warning: dropping `{}`: {e}", declaration.property);
            }
        }
    }

    let longhands = block::expand_declarations(&Expander::new(), &declarations);
    match cli.format {
        Format::Css => {
            for longhand in &longhands {
                println!("{longhand}");
            }
        }
        Format::Json => {
            let records: Vec<Longhand> = longhands.iter().map(Longhand::from).collect();
            let json = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        None | Some("-") => {
            let mut css = String::new();
            std::io::stdin()
                .read_to_string(&mut css)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(css)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}")),
    }
}
