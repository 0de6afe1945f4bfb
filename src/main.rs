use clap::Parser;
use env_logger::Env;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Config;
use crate::store::Store;

mod common;
mod config;
mod controller;
mod csv_reader;
mod entry;
mod normalize;
mod parser;
mod record;
mod report;
mod store;
mod util;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Sales data file path
    file: String,

    /// Entry form configuration
    config_file: Option<String>,
}

static COMMAND_HISTORY_FILE: &str = ".uriagedb_history";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let mut store = match Store::load(cli.file.as_str()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Unable to open {}: {}", cli.file, err);
            std::process::exit(1);
        }
    };

    let config = match &cli.config_file {
        Some(f) => Config::load_from_file(f.as_str()),
        None => Config::default_config(),
    };

    if store.is_empty() {
        println!("No sales data yet. Use ENTRY to record a month.");
    }

    let mut rl = DefaultEditor::new().unwrap();
    if rl.load_history(COMMAND_HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    let mut command_buffer: Vec<String> = vec![];
    loop {
        let readline = rl.readline("# ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                let is_last = line.ends_with(';');
                if !line.is_empty() {
                    command_buffer.push(line.to_string());
                }
                if is_last {
                    let command = command_buffer.join("\n");
                    let _ = rl.add_history_entry(command.trim());

                    let command = command.trim_end_matches(';');
                    let result = controller::parse_and_run_command(&mut store, &config, command);
                    if let Err(err) = result {
                        println!("{}", err);
                    }

                    command_buffer.clear();
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    let _ = rl.save_history(COMMAND_HISTORY_FILE);
}
