//! Convert a quantity from the command line
//!
//! Usage:
//!   convert_quantity <quantity text> <target unit> [ingredient]
//!   convert_quantity --units
//!   convert_quantity --version
//!
//! Example: convert_quantity "2.5 cups" ml

use std::process::ExitCode;

use huc::build_info::BuildInfo;
use huc::units::{convert_text, list_available_units};

const USAGE: &str = "Usage: convert_quantity <quantity text> <target unit> [ingredient]\n       convert_quantity --units\n       convert_quantity --version";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [flag] if flag == "--units" => {
            let catalog = list_available_units();
            println!("volume: {}", catalog.volume.join(", "));
            println!("weight: {}", catalog.weight.join(", "));
            println!("piece:  {}", catalog.piece.join(", "));
            ExitCode::SUCCESS
        }
        [flag] if flag == "--version" => {
            println!("{}", BuildInfo::current().version_line());
            ExitCode::SUCCESS
        }
        [text, target] => {
            println!("{}", convert_text(text, target, None));
            ExitCode::SUCCESS
        }
        [text, target, ingredient] => {
            println!("{}", convert_text(text, target, Some(ingredient)));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", USAGE);
            ExitCode::from(2)
        }
    }
}
