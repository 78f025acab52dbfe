//! Read one line of code and print it.

use anyhow::Result;
use clap::Parser;
use sprig::{
    backend::crossterm::CrosstermTerminal,
    style::{Style, StyledText},
};
use sprig_examples::lineedit::read_code;

/// CLI flags for the line editor.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The prompt to show.
    #[clap(short, long, default_value = "sprig> ")]
    prompt: String,

    /// Styling for the prompt, e.g. "bold fg-green" or "italic #ff8000".
    #[clap(short = 's', long, default_value = "bold green")]
    prompt_style: Style,
}

/// Run the line editor.
pub fn main() -> Result<()> {
    let args = Args::parse();
    let mut terminal = CrosstermTerminal::new();
    let prompt = StyledText::new(args.prompt, args.prompt_style);
    let code = read_code(&mut terminal, prompt)?;
    println!("{code}");
    Ok(())
}
