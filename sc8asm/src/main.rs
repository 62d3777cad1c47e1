//! Command-line front end for the assembler: reads a source file,
//! assembles it, and writes the resulting byte image to disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

/// Assemble a source file into a flat byte image the emulator can load.
#[derive(Parser)]
#[command(name = "sc8asm", version, about)]
struct Args {
    /// Path to the assembly source file.
    source: PathBuf,

    /// Path to write the assembled image to. Defaults to the source
    /// path with its extension replaced by `.bin`.
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match std::fs::read_to_string(&args.source) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: cannot read {}: {err}", "error".bold().red(), args.source.display());
            return ExitCode::FAILURE;
        }
    };

    let image = match sc8_core::asm::assemble(&source) {
        Ok(image) => image,
        Err(err) => {
            eprint!("{}", err.render());
            return ExitCode::FAILURE;
        }
    };

    let output_path = args.output.unwrap_or_else(|| args.source.with_extension("bin"));
    if let Err(err) = std::fs::write(&output_path, &image) {
        eprintln!("{}: cannot write {}: {err}", "error".bold().red(), output_path.display());
        return ExitCode::FAILURE;
    }

    println!("{} {} bytes -> {}", "assembled".green(), image.len(), output_path.display());
    ExitCode::SUCCESS
}
