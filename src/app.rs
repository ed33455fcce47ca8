use std::fmt::Display;

use core_logic::exchange::{ConjugationRequest, ConjugationResponse};
use core_logic::*;
use log::{debug, warn};

use crate::command::Command;

/// The root each root tab starts out with.
pub const DEFAULT_ROOT: [&str; ROOT_LENGTH] = ["ك", "ت", "ب"];

/// Shown when a conjugation is attempted with a letter missing.
pub const MISSING_LETTERS_ALERT: &str = "Please enter all three root letters.";

/// The tabs of the front-end, one per learning phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Past,
    Present,
    Irregular,
}

impl Tab {
    /// Every tab, in the order they're displayed.
    pub const ALL: [Tab; 3] = [Tab::Past, Tab::Present, Tab::Irregular];

    /// Parses the provided string to a `Tab`. Returns `None` if the string doesn't map to any tab.
    pub fn parse(input: &str) -> Option<Tab> {
        match input {
            "1" | "past" => Some(Tab::Past),
            "2" | "present" => Some(Tab::Present),
            "3" | "irregular" => Some(Tab::Irregular),
            _ => None,
        }
    }

    /// The number shown next to this tab.
    pub fn number(&self) -> usize {
        match self {
            Tab::Past => 1,
            Tab::Present => 2,
            Tab::Irregular => 3,
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Tab::Past => "Past tense",
            Tab::Present => "Present tense",
            Tab::Irregular => "Irregular verbs",
        };

        string.fmt(f)
    }
}

/// The letters typed into a root tab and the last conjugation made from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootForm {
    /// The tense this form conjugates in
    pub tense: Tense,
    /// The letters as typed, possibly empty
    pub letters: [String; ROOT_LENGTH],
    /// The last successful conjugation, kept until the next one
    pub result: Option<ConjugationResult>,
    /// The response panel, cleared whenever a letter changes
    pub response: Option<ConjugationResponse>,
}

impl RootForm {
    fn new(tense: Tense) -> RootForm {
        RootForm {
            tense,
            letters: DEFAULT_ROOT.map(|letter| letter.to_string()),
            result: None,
            response: None,
        }
    }

    /// Builds the request panel from the letters as currently typed.
    pub fn request(&self) -> ConjugationRequest {
        ConjugationRequest::from_letters(&self.letters)
    }

    /// Replaces the letter at the provided position (starting from 0), or clears it if no letter is provided.
    fn set_letter(&mut self, position: usize, letter: Option<String>) {
        self.letters[position] = letter.unwrap_or_default();
        self.response = None;
    }

    /// Conjugates the current letters. Nothing changes if a letter is missing.
    fn conjugate(&mut self) -> Result<(), InvalidRootError> {
        let root = Root::new(&self.letters)?;
        self.show(conjugate(&root, self.tense));

        Ok(())
    }

    /// Fills in all the letters of the provided root and conjugates it.
    fn conjugate_root(&mut self, root: &Root) {
        self.letters = root.letters().clone();
        self.show(conjugate(root, self.tense));
    }

    fn show(&mut self, result: ConjugationResult) {
        self.response = Some(ConjugationResponse::from_result(&result));
        self.result = Some(result);
    }
}

/// Something for the front-end to display.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A root tab, with its letters, table, and panels
    RootTab(RootForm),
    /// The irregular verb tab, showing the provided category
    IrregularTab(IrregularCategory),
    /// The request panel after a letter changed
    RequestPreview(ConjugationRequest),
    /// A notice that stops the current action
    Alert(String),
    /// Input that couldn't be acted on
    Error(String),
    /// The list of commands
    Help,
}

/// The state of the whole front-end.
pub struct App {
    active_tab: Tab,
    past: RootForm,
    present: RootForm,
    irregular: IrregularCategory,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the front-end with the past tense tab open and conjugated for the default root.
    pub fn new() -> App {
        let mut past = RootForm::new(Tense::Past);
        if let Err(e) = past.conjugate() {
            warn!("Unable to conjugate the default root: {e}");
        }

        App {
            active_tab: Tab::Past,
            past,
            present: RootForm::new(Tense::Present),
            irregular: IrregularCategory::Hollow,
        }
    }

    /// The tab currently shown.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Describes the tab currently shown.
    pub fn current_view(&self) -> AppMessage {
        match self.active_tab {
            Tab::Past => AppMessage::RootTab(self.past.clone()),
            Tab::Present => AppMessage::RootTab(self.present.clone()),
            Tab::Irregular => AppMessage::IrregularTab(self.irregular),
        }
    }

    /// Applies the provided command and describes what should be displayed as a result.
    pub fn handle(&mut self, command: Command) -> AppMessage {
        debug!("Handling command {command:?} on tab {:?}", self.active_tab);
        match command {
            Command::SwitchTab(tab) => {
                self.active_tab = tab;
                self.current_view()
            }
            Command::SetLetter { position, letter } => match self.active_form() {
                Some(form) => {
                    form.set_letter(position, letter);
                    AppMessage::RequestPreview(form.request())
                }
                None => not_a_root_tab(),
            },
            Command::Conjugate => match self.active_form() {
                Some(form) => match form.conjugate() {
                    Ok(()) => AppMessage::RootTab(form.clone()),
                    Err(e) => {
                        debug!("Not conjugating: {e}");
                        AppMessage::Alert(MISSING_LETTERS_ALERT.to_string())
                    }
                },
                None => not_a_root_tab(),
            },
            Command::Root(text) => self.conjugate_text(&text),
            Command::SelectCategory(category) => self.select_category(category),
            Command::Help => AppMessage::Help,
            Command::Bare(text) => {
                if self.active_tab == Tab::Irregular {
                    match IrregularCategory::from_slug(&text.to_lowercase()) {
                        Some(category) => self.select_category(category),
                        None => AppMessage::Error(format!("there's no verb type called {text:?}")),
                    }
                } else {
                    self.conjugate_text(&text)
                }
            }
        }
    }

    fn active_form(&mut self) -> Option<&mut RootForm> {
        match self.active_tab {
            Tab::Past => Some(&mut self.past),
            Tab::Present => Some(&mut self.present),
            Tab::Irregular => None,
        }
    }

    fn conjugate_text(&mut self, text: &str) -> AppMessage {
        let root = match Root::parse(text) {
            Ok(r) => r,
            Err(e) => return AppMessage::Error(format!("can't read a root from {text:?}: {e}")),
        };

        match self.active_form() {
            Some(form) => {
                form.conjugate_root(&root);
                AppMessage::RootTab(form.clone())
            }
            None => not_a_root_tab(),
        }
    }

    fn select_category(&mut self, category: IrregularCategory) -> AppMessage {
        self.irregular = category;
        self.active_tab = Tab::Irregular;
        AppMessage::IrregularTab(category)
    }
}

fn not_a_root_tab() -> AppMessage {
    AppMessage::Error(
        "roots can only be entered on the past and present tense tabs (1 or 2)".to_string(),
    )
}
