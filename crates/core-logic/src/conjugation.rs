use log::debug;
use serde::Serialize;
use strum::EnumIter;

use crate::{
    diacritic::{FATHA, SUKUN},
    pronoun::{LabelStyle, PronounEntry, PRONOUN_TABLE},
    root::Root,
};

/// The verb paradigms roots can be conjugated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Past,
    Present,
}

/// A single inflected form of a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    /// The pronoun the verb was inflected for
    pub pronoun: &'static PronounEntry,
    /// The inflected verb
    pub verb: String,
}

/// All the inflected forms of a root in one tense, in pronoun table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationResult {
    /// The root that was conjugated
    pub root: Root,
    /// The tense it was conjugated in
    pub tense: Tense,
    /// One form per pronoun
    pub conjugations: Vec<Conjugation>,
}

impl ConjugationResult {
    /// Pairs each form with its pronoun's label in the provided style.
    pub fn labeled(&self, style: LabelStyle) -> Vec<(&'static str, &str)> {
        self.conjugations
            .iter()
            .map(|c| (c.pronoun.label_for(style), c.verb.as_str()))
            .collect()
    }

    /// Finds the form for the pronoun with the provided English label.
    pub fn form_for(&self, label: &str) -> Option<&str> {
        self.conjugations
            .iter()
            .find(|c| c.pronoun.label == label)
            .map(|c| c.verb.as_str())
    }
}

/// Conjugates the provided root in the provided tense.
pub fn conjugate(root: &Root, tense: Tense) -> ConjugationResult {
    match tense {
        Tense::Past => conjugate_past(root),
        Tense::Present => conjugate_present(root),
    }
}

/// Conjugates the provided root in the past tense.
///
/// The first letter always takes a fatha. The middle letter takes a fatha for the pronouns that keep the stem open
/// (see `PronounEntry::takes_open_past_stem`) and a sukun for everyone else.
pub fn conjugate_past(root: &Root) -> ConjugationResult {
    debug!("Conjugating {root} in the past tense");
    build_result(root, Tense::Past, |pronoun| {
        let middle_mark = if pronoun.takes_open_past_stem() {
            FATHA
        } else {
            SUKUN
        };

        format!(
            "{}{FATHA}{}{middle_mark}{}{}",
            root.first(),
            root.second(),
            root.third(),
            pronoun.past_suffix
        )
    })
}

/// Conjugates the provided root in the present tense.
///
/// Every pronoun uses the same stem: sukun on the first letter, fatha on the second.
pub fn conjugate_present(root: &Root) -> ConjugationResult {
    debug!("Conjugating {root} in the present tense");
    build_result(root, Tense::Present, |pronoun| {
        format!(
            "{}{}{SUKUN}{}{FATHA}{}{}",
            pronoun.present_prefix,
            root.first(),
            root.second(),
            root.third(),
            pronoun.present_suffix
        )
    })
}

fn build_result<F>(root: &Root, tense: Tense, inflect: F) -> ConjugationResult
where
    F: Fn(&PronounEntry) -> String,
{
    let conjugations = PRONOUN_TABLE
        .iter()
        .map(|pronoun| Conjugation {
            pronoun,
            verb: inflect(pronoun),
        })
        .collect();

    ConjugationResult {
        root: root.clone(),
        tense,
        conjugations,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::pronoun::{Pronoun, PRONOUN_COUNT};

    fn ktb() -> Root {
        Root::new(&["ك", "ت", "ب"]).unwrap()
    }

    #[test]
    fn every_pronoun_in_table_order() {
        let expected_labels = PRONOUN_TABLE.iter().map(|p| p.label).collect::<Vec<_>>();

        for tense in Tense::iter() {
            let result = conjugate(&ktb(), tense);
            let labels = result
                .labeled(LabelStyle::Display)
                .into_iter()
                .map(|(label, _)| label)
                .collect::<Vec<_>>();

            assert_eq!(PRONOUN_COUNT, result.conjugations.len());
            assert_eq!(expected_labels, labels);
            assert_eq!(tense, result.tense);
        }
    }

    #[test]
    fn past_open_stem_for_he() {
        assert_eq!(Some("كَتَبَ"), conjugate_past(&ktb()).form_for("He"));
    }

    #[test]
    fn past_silenced_stem_for_i() {
        // middle letter carries a sukun, then the suffix's own sukun
        let expected = format!("ك{FATHA}ت{SUKUN}ب{SUKUN}تُ");

        assert_eq!(Some(expected.as_str()), conjugate_past(&ktb()).form_for("I"));
    }

    #[test]
    fn past_all_forms() {
        let result = conjugate_past(&ktb());

        assert_eq!(
            vec![
                "كَتَبَ",
                "كَتَبَا",
                "كَتَبُوا",
                "كَتَبَتْ",
                "كَتَبَتَا",
                "كَتْبْنَ",
                "كَتْبْتَ",
                "كَتْبْتُمَا",
                "كَتْبْتُمْ",
                "كَتْبْتِ",
                "كَتْبْتُمَا",
                "كَتْبْتُنَّ",
                "كَتْبْتُ",
                "كَتْبْنَا",
            ],
            result
                .conjugations
                .iter()
                .map(|c| c.verb.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn present_same_stem_for_every_pronoun() {
        let result = conjugate_present(&ktb());

        assert_eq!(Some("يَكْتَبُ"), result.form_for("He"));
        assert_eq!(Some("أَكْتَبُ"), result.form_for("I"));

        let stem = format!("ك{SUKUN}ت{FATHA}ب");
        for conjugation in &result.conjugations {
            let pronoun = conjugation.pronoun;
            assert_eq!(
                format!("{}{stem}{}", pronoun.present_prefix, pronoun.present_suffix),
                conjugation.verb
            );
        }
    }

    #[test]
    fn present_feminine_singular_second_person() {
        let result = conjugate_present(&ktb());

        assert_eq!(Some("تَكْتَبِينَ"), result.form_for("You (f)"));
    }

    fn table_snapshot() -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
        PRONOUN_TABLE
            .iter()
            .map(|p| (p.label, p.past_suffix, p.present_prefix, p.present_suffix))
            .collect()
    }

    #[test]
    fn same_input_same_output() {
        let root = Root::new(&["د", "ر", "س"]).unwrap();
        let table_before = table_snapshot();

        for tense in Tense::iter() {
            assert_eq!(conjugate(&root, tense), conjugate(&root, tense));
        }
        assert_eq!(table_before, table_snapshot());
    }

    #[test]
    fn native_labels() {
        let result = conjugate_past(&ktb());
        let labeled = result.labeled(LabelStyle::Native);

        assert_eq!(("هو", "كَتَبَ"), labeled[0]);
        assert_eq!(
            Pronoun::FirstPlural.entry().native_label,
            labeled[Pronoun::FirstPlural.index()].0
        );
    }

    #[test]
    fn non_arabic_letters_are_conjugated_anyway() {
        let root = Root::new(&["a", "b", "c"]).unwrap();

        assert_eq!(
            Some(format!("a{FATHA}b{FATHA}c{FATHA}").as_str()),
            conjugate_past(&root).form_for("He")
        );
    }
}
