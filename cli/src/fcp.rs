//! fcp - File Copy
//!
//! Copy a single file from SOURCE to DESTINATION.

use clap::Parser;
use std::path::PathBuf;
use std::process;

/// fcp - Copy one file
///
/// Copies the byte contents of SOURCE to DESTINATION, creating the
/// destination file or overwriting it in place.
///
/// Usage:
///   fcp SOURCE DESTINATION
#[derive(Parser, Debug)]
#[command(name = "fcp", version, about, long_about = None)]
struct Args {
    /// Source file
    source: PathBuf,

    /// Destination file
    destination: PathBuf,
}

fn main() {
    let args = parse_args();
    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

/// Parse arguments, mapping usage errors to exit code 1.
///
/// clap exits with code 2 on usage errors by default; every failure of
/// these commands reports 1, so the mapping is done by hand. Help and
/// version output still goes to stdout with exit code 0.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let is_usage_error = error.use_stderr();
            let _ = error.print();
            process::exit(if is_usage_error { 1 } else { 0 });
        }
    }
}

fn run(args: &Args) -> vcopy::Result<()> {
    vcopy::copy_file(&args.source, &args.destination)?;
    println!("File copied successfully.");
    Ok(())
}
