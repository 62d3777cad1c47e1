//! Command-line front end for the emulator: loads an assembled image and
//! either runs it straight through or single-steps it interactively.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use sc8_core::machine::Machine;

/// Run a byte image produced by `sc8asm` on the machine.
#[derive(Parser)]
#[command(name = "sc8emu", version, about)]
struct Args {
    /// Path to the assembled byte image.
    image: PathBuf,

    /// Single-step: print machine state and wait for Enter before every
    /// instruction.
    #[arg(short, long)]
    debug: bool,

    /// Print a full hex/ASCII memory dump once the program halts.
    #[arg(short = 'm', long = "dump-memory")]
    dump_memory: bool,

    /// Override the program counter's starting address (hex, with or
    /// without a `0x` prefix).
    #[arg(short, long)]
    start: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let image = match std::fs::read(&args.image) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{}: cannot read {}: {err}", "error".bold().red(), args.image.display());
            return ExitCode::FAILURE;
        }
    };

    let start = match &args.start {
        Some(text) => match parse_hex_u16(text) {
            Ok(addr) => addr,
            Err(err) => {
                eprintln!("{}: invalid --start address: {err}", "error".bold().red());
                return ExitCode::FAILURE;
            }
        },
        None => sc8_core::memory::PROGRAM_ORIGIN,
    };

    let mut machine = Machine::new();
    if let Err(err) = machine.load_image(&image, start) {
        eprintln!("{}: {err}", "error".bold().red());
        return ExitCode::FAILURE;
    }

    let completed = if args.debug { run_debug(&mut machine) } else { machine.run() };

    if !completed {
        let err = machine.last_error().expect("a run that did not complete recorded an error");
        eprintln!("{}: {err}", "runtime error".bold().red());
        return ExitCode::FAILURE;
    }

    let output = machine.memory.console_output();
    if !output.is_empty() {
        print!("{}", String::from_utf8_lossy(output));
    }
    println!("{}", machine.cpu.state_line().dimmed());

    if args.dump_memory {
        print!("{}", machine.memory.dump(0x0000, 0xFFFF));
    }

    ExitCode::SUCCESS
}

fn run_debug(machine: &mut Machine) -> bool {
    let mut line = String::new();
    loop {
        println!("{}", machine.cpu.state_line());
        if machine.halted() {
            return machine.last_error().is_none();
        }
        print!("> ");
        let _ = std::io::stdout().flush();
        line.clear();
        if std::io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            return machine.last_error().is_none();
        }
        if !machine.step() {
            return machine.last_error().is_none();
        }
    }
}

fn parse_hex_u16(text: &str) -> Result<u16, String> {
    let trimmed = text.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(trimmed, 16).map_err(|e| e.to_string())
}
