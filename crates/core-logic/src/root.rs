use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

/// The number of letters in a root.
pub const ROOT_LENGTH: usize = 3;

lazy_static! {
    static ref SEPARATOR_PATTERN: Regex = Regex::new(r"[\s,،\-]+").unwrap();
    static ref MARK_PATTERN: Regex = Regex::new(r"\p{Mn}").unwrap();
}

/// The three-letter consonantal skeleton of a verb, like ك-ت-ب.
///
/// Every position is guaranteed to be non-empty. Nothing checks that the letters are actually Arabic consonants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    letters: [String; ROOT_LENGTH],
}

impl Root {
    /// Creates a root from its three letters, in order. Surrounding whitespace is ignored, so a position holding only
    /// whitespace counts as missing.
    pub fn new<S: AsRef<str>>(letters: &[S; ROOT_LENGTH]) -> Result<Root, InvalidRootError> {
        for (position, letter) in letters.iter().enumerate() {
            if letter.as_ref().trim().is_empty() {
                return Err(InvalidRootError::MissingLetter { position });
            }
        }

        Ok(Root {
            letters: [
                letters[0].as_ref().trim().to_string(),
                letters[1].as_ref().trim().to_string(),
                letters[2].as_ref().trim().to_string(),
            ],
        })
    }

    /// Parses a root out of free text.
    ///
    /// The letters can be written together ("كتب") or separated by whitespace, hyphens, or commas ("ك ت ب", "ك-ت-ب",
    /// "ك، ت، ب"). Vowel marks are dropped.
    pub fn parse(input: &str) -> Result<Root, InvalidRootError> {
        let without_separators = SEPARATOR_PATTERN.replace_all(input, "");
        let letters = bare_letters(&without_separators);

        match <[String; ROOT_LENGTH]>::try_from(letters) {
            Ok(letters) => Root::new(&letters),
            Err(letters) => Err(InvalidRootError::WrongLetterCount {
                found: letters.len(),
            }),
        }
    }

    /// Reads a single root letter, dropping any vowel marks on it. Returns `None` unless exactly one letter is left.
    pub fn parse_letter(input: &str) -> Option<String> {
        match bare_letters(input.trim()).as_slice() {
            [letter] => Some(letter.clone()),
            _ => None,
        }
    }

    /// Gets the letters of this root, in order.
    pub fn letters(&self) -> &[String; ROOT_LENGTH] {
        &self.letters
    }

    /// Gets the first letter (ف).
    pub fn first(&self) -> &str {
        &self.letters[0]
    }

    /// Gets the second letter (ع).
    pub fn second(&self) -> &str {
        &self.letters[1]
    }

    /// Gets the third letter (ل).
    pub fn third(&self) -> &str {
        &self.letters[2]
    }
}

fn bare_letters(input: &str) -> Vec<String> {
    MARK_PATTERN
        .replace_all(input, "")
        .chars()
        .map(|c| c.to_string())
        .collect()
}

impl Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.letters.join("-").fmt(f)
    }
}

/// An error for a root that can't be conjugated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRootError {
    /// The letter at the provided position (starting from 0) was empty.
    MissingLetter { position: usize },
    /// The input had the wrong number of letters.
    WrongLetterCount { found: usize },
}

impl Display for InvalidRootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRootError::MissingLetter { position } => {
                write!(f, "root letter {} is missing", position + 1)
            }
            InvalidRootError::WrongLetterCount { found } => {
                write!(f, "a root needs {ROOT_LENGTH} letters, but {found} were given")
            }
        }
    }
}

impl std::error::Error for InvalidRootError {}
