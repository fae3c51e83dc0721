//! textdraw CLI entry point (§6, C12): renders one of the crate's
//! built-in worked examples, or frames stdin as a single labelled box.
//!
//! Mirrors the corpus's own CLI shape — stdin-or-selector input, `-o`/
//! `--output` — without inventing a new diagram-description DSL.

mod demos;

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use textdraw::{render, CharSet, Object, Point, TextBox};

/// Render composable text diagrams with automatic orthogonal path routing.
#[derive(Parser, Debug)]
#[command(name = "textdraw", about = "Render composable text diagrams")]
struct Cli {
    /// Render a built-in worked example (`boxes`, `pixels`) instead of
    /// reading stdin.
    #[arg(long = "demo")]
    demo: Option<String>,

    /// Treat stdin as a literal multi-line label for a single framed box.
    #[arg(long = "stdin")]
    use_stdin: bool,

    /// Write output to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Fall back to a plain-ASCII box-drawing charset.
    #[arg(short = 'a', long = "ascii")]
    ascii: bool,
}

fn main() {
    tracing_subscriber::fmt::try_init().ok();

    let cli = Cli::parse();
    let charset = if cli.ascii { CharSet::Ascii } else { CharSet::Unicode };

    let rendered = if let Some(name) = cli.demo.as_deref() {
        match demos::render_demo(name, charset) {
            Some(s) => s,
            None => {
                eprintln!("error: no such demo '{name}' (try 'boxes' or 'pixels')");
                process::exit(1);
            }
        }
    } else if cli.use_stdin {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {e}");
            process::exit(1);
        }
        let label = buf.trim_end_matches('\n').to_string();
        let boxed = TextBox::new(label, Point::new(0, 0)).with_charset(charset);
        render(&[Object::from(boxed)])
    } else {
        eprintln!("error: specify --demo <name> or --stdin");
        process::exit(1);
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{path}': {e}");
            process::exit(1);
        }
    } else {
        print!("{rendered}");
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {e}");
            process::exit(1);
        }
    }
}
