use std::fmt::Display;

use core_logic::{IrregularCategory, Root, ROOT_LENGTH};

use crate::app::Tab;

/// Something the user asked the front-end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a different tab
    SwitchTab(Tab),
    /// Replace or clear one letter of the active root tab
    SetLetter {
        position: usize,
        letter: Option<String>,
    },
    /// Conjugate the letters of the active root tab
    Conjugate,
    /// Fill in and conjugate a whole root written as text
    Root(String),
    /// Show an irregular verb category
    SelectCategory(IrregularCategory),
    /// List the commands
    Help,
    /// Text without a command word, handled by whichever tab is active
    Bare(String),
}

/// An error while parsing input into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// A command was missing its argument.
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    /// The named tab doesn't exist.
    UnknownTab(String),
    /// The letter position wasn't a number from 1 to 3.
    InvalidPosition(String),
    /// A root position was given something other than a single letter.
    NotOneLetter(String),
    /// The named irregular verb category doesn't exist.
    UnknownCategory(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::MissingArgument { command, expected } => {
                write!(f, "{command} needs {expected}")
            }
            CommandParseError::UnknownTab(tab) => write!(f, "there's no tab called {tab:?}"),
            CommandParseError::InvalidPosition(position) => write!(
                f,
                "{position:?} isn't a letter position, use a number from 1 to {ROOT_LENGTH}"
            ),
            CommandParseError::NotOneLetter(letter) => {
                write!(f, "{letter:?} isn't a single letter")
            }
            CommandParseError::UnknownCategory(category) => {
                write!(f, "there's no verb type called {category:?}")
            }
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parses a line of input into a `Command`.
///
/// The first word is matched case-insensitively against the command words. Anything that doesn't start with a
/// command word is returned as `Command::Bare`.
pub fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let input = input.trim();
    let (first_word, rest) = match input.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (input, ""),
    };
    let argument = if rest.is_empty() { None } else { Some(rest) };

    match first_word.to_lowercase().as_str() {
        "1" | "2" | "3" if argument.is_none() => {
            Tab::parse(first_word).map(Command::SwitchTab).ok_or_else(|| {
                CommandParseError::UnknownTab(first_word.to_string())
            })
        }
        "tab" => {
            let tab = argument.ok_or(CommandParseError::MissingArgument {
                command: "tab",
                expected: "a tab name or number",
            })?;
            Tab::parse(&tab.to_lowercase())
                .map(Command::SwitchTab)
                .ok_or_else(|| CommandParseError::UnknownTab(tab.to_string()))
        }
        "letter" | "l" => {
            let argument = argument.ok_or(CommandParseError::MissingArgument {
                command: "letter",
                expected: "a position",
            })?;
            parse_set_letter(argument)
        }
        "conjugate" | "c" if argument.is_none() => Ok(Command::Conjugate),
        "root" | "r" => argument
            .map(|root| Command::Root(root.to_string()))
            .ok_or(CommandParseError::MissingArgument {
                command: "root",
                expected: "three letters",
            }),
        "type" | "t" => {
            let slug = argument.ok_or(CommandParseError::MissingArgument {
                command: "type",
                expected: "a verb type",
            })?;
            IrregularCategory::from_slug(&slug.to_lowercase())
                .map(Command::SelectCategory)
                .ok_or_else(|| CommandParseError::UnknownCategory(slug.to_string()))
        }
        "help" | "?" if argument.is_none() => Ok(Command::Help),
        _ => Ok(Command::Bare(input.to_string())),
    }
}

/// Parses "<position> [letter]", where the position starts from 1. Vowel marks on the letter are dropped.
fn parse_set_letter(argument: &str) -> Result<Command, CommandParseError> {
    let (position, letter) = match argument.split_once(char::is_whitespace) {
        Some((position, letter)) => (position, Some(letter.trim())),
        None => (argument, None),
    };

    let position = match position.parse::<usize>() {
        Ok(p) if (1..=ROOT_LENGTH).contains(&p) => p - 1,
        _ => return Err(CommandParseError::InvalidPosition(position.to_string())),
    };

    let letter = match letter.filter(|l| !l.is_empty()) {
        Some(l) => Some(
            Root::parse_letter(l).ok_or_else(|| CommandParseError::NotOneLetter(l.to_string()))?,
        ),
        None => None,
    };

    Ok(Command::SetLetter { position, letter })
}
