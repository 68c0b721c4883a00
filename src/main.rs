use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use glyphpack::emit::Syntax;

fn main() {
    // Standard output carries the table; every diagnostic goes to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        print_usage(&args);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = glyphpack::convert(Path::new(&args[1]), &mut out, &Syntax::C) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
    if let Err(err) = out.flush() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn print_usage(args: &[String]) {
    let program = args.first().map(String::as_str).unwrap_or("glyphpack");
    eprintln!("usage: {} <font-image>", program);
    eprintln!();
    eprintln!("Reads a 128x128 font sheet (a 16x16 grid of 8x8 pixel glyphs) and");
    eprintln!("prints the packed glyph table on standard output.");
}
