//! Mini-Pager CLI
//! Paginates a text file for a fixed container using the grid renderer.
//! The main interface is through WASM bindings.

use clap::Parser;
use mini_pager::{GridRenderer, PaginationSession, PaginatorOptions, Style};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mini-pager", version, about = "Split text into container-sized pages")]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Container width in pixels
    #[arg(long, default_value_t = 640.0)]
    width: f32,

    /// Container height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f32,

    /// Font size in pixels
    #[arg(long, default_value_t = 16.0)]
    font_size: f32,

    /// Emit a blank page for trailing whitespace instead of merging it
    #[arg(long)]
    keep_trailing_whitespace: bool,

    /// Print page ranges as JSON instead of drawing pages
    #[arg(long)]
    json: bool,
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(cli.input.as_ref())?;

    let options = PaginatorOptions {
        merge_trailing_whitespace: !cli.keep_trailing_whitespace,
    };
    let renderer = GridRenderer::new(cli.width, cli.height);
    let mut session =
        PaginationSession::new(renderer, Style::with_font_size(cli.font_size), options);
    session.submit(text)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(session.pages())?);
        return Ok(());
    }

    for index in 0..session.page_count() {
        session.select_page(index)?;
        let page = session.pages()[index];
        println!("--- page {} ({}..{}) ---", index + 1, page.start, page.end);
        for line in session.renderer().drawn_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
