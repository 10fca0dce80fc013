use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use jsonpick::config::Config;
use jsonpick::document::node::JsonValue;
use jsonpick::dotpath::{Accessor, FailureMode};
use jsonpick::file::loader::{load_json_file, load_json_from_stdin};

/// JSONPick - read values out of JSON documents by dotted path
#[derive(Parser)]
#[command(name = "jsonpick")]
#[command(version)]
#[command(about = "Read values out of JSON documents by dotted path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a dotted path and print the value at that location
    Get {
        /// Dotted path to resolve, e.g. `localhost.dict.bar`
        path: String,

        /// JSON file to read (omit to read from stdin if piped)
        file: Option<String>,

        /// Failure reporting: "raise" exits with an error, "warn" logs a
        /// diagnostic and prints nothing
        #[arg(short, long)]
        failure_mode: Option<String>,
    },
    /// List every terminal value together with its dotted path
    Leaves {
        /// JSON file to read (omit to read from stdin if piped)
        file: Option<String>,

        /// Print paths without their values
        #[arg(long)]
        paths_only: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Command::Get {
            path,
            file,
            failure_mode,
        } => {
            let tree = load_document(file)?;
            let accessor = Accessor::new(&tree);

            // CLI flag overrides config
            let mode_name = failure_mode.unwrap_or(config.failure_mode);
            let mode = FailureMode::from_name(&mode_name);

            if let Some(value) = accessor.get_with(&path, mode)? {
                println!("{}", value);
            }
        }
        Command::Leaves { file, paths_only } => {
            let tree = load_document(file)?;
            let accessor = Accessor::new(&tree);

            if paths_only || !config.include_values {
                for path in accessor.leaf_paths() {
                    println!("{}", path);
                }
            } else {
                for (path, value) in accessor.leaves() {
                    println!("{} = {}", path, value);
                }
            }
        }
    }

    Ok(())
}

/// Loads the document from a file argument, or from stdin when piped.
fn load_document(file: Option<String>) -> Result<JsonValue> {
    if let Some(file_path) = file {
        load_json_file(&file_path)
    } else if !std::io::stdin().is_terminal() {
        load_json_from_stdin()
    } else {
        anyhow::bail!("No input: pass a JSON file or pipe a document on stdin");
    }
}
