use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use crossterm::{style::style, style::Stylize};
use itertools::Itertools;
use voca_rs::Voca;

use core_logic::exchange::ConjugationRequest;
use core_logic::*;

use crate::app::{AppMessage, RootForm, Tab};

const INDENT: &str = "  ";
const MAX_WIDTH: usize = 80;
const TABLE_WIDTH: u16 = 60;
const EMPTY_LETTER: &str = " ";

/// Transforms the provided message into a string for display.
pub fn message_to_string(message: AppMessage) -> String {
    match message {
        AppMessage::RootTab(form) => root_tab_to_string(&form),
        AppMessage::IrregularTab(category) => irregular_tab_to_string(category),
        AppMessage::RequestPreview(request) => {
            format!(
                "{}\n{}",
                request_to_string(&request),
                style("(response cleared, conjugate to refresh)").dark_grey()
            )
        }
        AppMessage::Alert(alert) => style(format!("! {alert}")).red().bold().to_string(),
        AppMessage::Error(e) => e._capitalize(false),
        AppMessage::Help => help_to_string(),
    }
}

/// Transforms the tab headers into a string, highlighting the active tab.
fn tab_bar_to_string(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            let label = format!("{} {tab}", tab.number());
            if *tab == active {
                style(format!("[{label}]")).bold().to_string()
            } else {
                style(format!(" {label} ")).dark_grey().to_string()
            }
        })
        .join(" ")
}

/// Transforms the provided root tab into a string for display.
fn root_tab_to_string(form: &RootForm) -> String {
    let tab = match form.tense {
        Tense::Past => Tab::Past,
        Tense::Present => Tab::Present,
    };
    let letters = form
        .letters
        .iter()
        .map(|letter| {
            let letter = if letter.is_empty() {
                EMPTY_LETTER
            } else {
                letter.as_str()
            };
            format!("[{letter}]")
        })
        .join(" ");
    let inputs = format!("Root letters: {}", style(letters).bold());

    let table = match &form.result {
        Some(result) => conjugation_table(result.labeled(LabelStyle::Display)),
        None => style("Enter a root and conjugate to see the table.")
            .dark_grey()
            .to_string(),
    };

    let response = match &form.response {
        Some(response) => format!(
            "Response:\n{}",
            indent(&response.to_pretty_json().unwrap_or_else(json_error))
        ),
        None => "Response:\n".to_string(),
    };

    [
        tab_bar_to_string(tab),
        inputs,
        table,
        request_to_string(&form.request()),
        response,
    ]
    .join("\n\n")
}

/// Transforms the provided irregular verb category into a string for display.
fn irregular_tab_to_string(category: IrregularCategory) -> String {
    let verb = category.verb();
    let categories = IrregularCategory::iter()
        .map(|c| {
            if c == category {
                style(c.slug()).bold().to_string()
            } else {
                style(c.slug()).dark_grey().to_string()
            }
        })
        .join(" | ");
    let heading = format!("{} verb\n{categories}", style(category).bold());
    let root = format!("Root: [ {} ]", verb.root.join(", "));
    let rule = verb.rule._word_wrap(MAX_WIDTH, "\n", "");
    let table = conjugation_table(
        verb.conjugations()
            .map(|(pronoun, form)| (pronoun.label, form)),
    );

    [
        tab_bar_to_string(Tab::Irregular),
        heading,
        root,
        rule,
        table,
    ]
    .join("\n\n")
}

/// Builds a two-column table of pronouns and the verb forms for them.
fn conjugation_table<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH)
        .set_header(vec![
            Cell::new("Pronoun").add_attribute(Attribute::Bold),
            Cell::new("Verb").add_attribute(Attribute::Bold),
        ]);

    for (pronoun, verb) in rows {
        table.add_row(vec![
            Cell::new(pronoun).set_alignment(CellAlignment::Center),
            Cell::new(verb)
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold)
                .fg(Color::DarkYellow),
        ]);
    }

    table.to_string()
}

/// Transforms the provided request into a string for display.
fn request_to_string(request: &ConjugationRequest) -> String {
    format!(
        "Request:\n{}",
        indent(&request.to_pretty_json().unwrap_or_else(json_error))
    )
}

fn json_error<E: Display>(e: E) -> String {
    format!("<unable to show JSON: {e}>")
}

/// Transforms the list of commands into a string for display.
fn help_to_string() -> String {
    let commands = [
        ("1 | 2 | 3", "switch to the past, present, or irregular tab"),
        ("tab <name>", "switch tabs by name"),
        ("letter <1-3> [letter]", "set or clear one root letter"),
        ("conjugate", "conjugate the root letters on this tab"),
        ("root <letters>", "fill in a whole root and conjugate it"),
        ("type <verb type>", "show an irregular verb type"),
        ("help", "show this list"),
        ("quit", "exit"),
    ];
    let width = commands.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
    let types = IrregularCategory::iter().map(|c| c.slug()).join(", ");

    format!(
        "Available commands:\n{}\n\nVerb types: {types}",
        commands
            .iter()
            .map(|(command, description)| format!(
                "{INDENT}{} {}",
                style(format!("{command:<width$}")).bold(),
                description
            ))
            .join("\n")
    )
}

/// Indents every line of the provided string.
fn indent(s: &str) -> String {
    s.lines().map(|line| format!("{INDENT}{line}")).join("\n")
}
