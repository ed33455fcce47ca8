use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use log::debug;
use std::io::{stdin, stdout, Write};

mod app;
use app::*;

mod command;
use command::*;

mod message_to_string;
use message_to_string::*;

const PROMPT: &str = "\n> ";

fn main() -> Result<()> {
    env_logger::init();

    let mut app = App::new();
    render_message(app.current_view())?;
    render_message(AppMessage::Help)?;

    let mut input_buf = String::new();
    loop {
        input_buf.clear();
        print!("{PROMPT}");
        stdout().flush()?;
        if stdin().read_line(&mut input_buf)? == 0 {
            debug!("Input closed");
            return Ok(());
        }
        debug!("Raw input: {input_buf:?}");
        let input = input_buf.trim();
        debug!("Trimmed input: {input:?}");

        if input.is_empty() {
            continue;
        }

        if input == "quit" {
            println!("ok bye");
            return Ok(());
        }

        let message = match parse_command(input) {
            Ok(command) => app.handle(command),
            Err(e) => AppMessage::Error(e.to_string()),
        };
        render_message(message)?;
        debug!("Active tab: {:?}", app.active_tab());
    }
}

/// Renders the provided `AppMessage` to the screen.
fn render_message(message: AppMessage) -> Result<()> {
    let output = message_to_string(message);

    stdout()
        .queue(Clear(ClearType::CurrentLine))?
        .queue(cursor::MoveToColumn(0))?
        .queue(Print(output))?
        .queue(Print("\n"))?
        .flush()?;

    Ok(())
}
