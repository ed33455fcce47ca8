use std::fmt::Display;

use itertools::Itertools;
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    pronoun::{Pronoun, PronounEntry, PRONOUN_COUNT},
    root::ROOT_LENGTH,
};

/// The kinds of irregular verb with a fixed example paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum IrregularCategory {
    /// The middle root letter is weak (و or ي)
    Hollow,
    /// The last root letter is weak
    WeakFinal,
    /// The first root letter is weak
    WeakInitial,
    /// The last two root letters are the same
    Doubled,
}

impl IrregularCategory {
    /// Parses the provided slug to an `IrregularCategory`. Returns `None` if the slug doesn't map to any category.
    pub fn from_slug(slug: &str) -> Option<IrregularCategory> {
        IrregularCategory::iter().find(|category| category.slug() == slug)
    }

    /// The identifier used to select this category, e.g. "weak-final".
    pub fn slug(&self) -> &'static str {
        match self {
            IrregularCategory::Hollow => "hollow",
            IrregularCategory::WeakFinal => "weak-final",
            IrregularCategory::WeakInitial => "weak-initial",
            IrregularCategory::Doubled => "doubled",
        }
    }

    /// Gets the example verb for this category.
    pub fn verb(&self) -> &'static IrregularVerb {
        match self {
            IrregularCategory::Hollow => &HOLLOW,
            IrregularCategory::WeakFinal => &WEAK_FINAL,
            IrregularCategory::WeakInitial => &WEAK_INITIAL,
            IrregularCategory::Doubled => &DOUBLED,
        }
    }
}

impl Display for IrregularCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            IrregularCategory::Hollow => "Hollow",
            IrregularCategory::WeakFinal => "Weak-final",
            IrregularCategory::WeakInitial => "Weak-initial",
            IrregularCategory::Doubled => "Doubled",
        };

        string.fmt(f)
    }
}

/// An irregular verb with its past tense forms written out by hand.
#[derive(Debug)]
pub struct IrregularVerb {
    /// Which kind of irregularity this verb shows
    pub category: IrregularCategory,
    /// The letters of the verb's root
    pub root: [&'static str; ROOT_LENGTH],
    /// Explains how the irregularity changes the conjugation
    pub rule: &'static str,
    /// One past tense form per pronoun, in pronoun table order
    pub forms: [&'static str; PRONOUN_COUNT],
}

impl IrregularVerb {
    /// Pairs each form with its pronoun.
    pub fn conjugations(&self) -> impl Iterator<Item = (&'static PronounEntry, &'static str)> + '_ {
        Pronoun::iter()
            .map(|pronoun| pronoun.entry())
            .zip_eq(self.forms.iter().copied())
    }

    /// Gets the form for the provided pronoun.
    pub fn form_for(&self, pronoun: Pronoun) -> &'static str {
        self.forms[pronoun.index()]
    }
}

static HOLLOW: IrregularVerb = IrregularVerb {
    category: IrregularCategory::Hollow,
    root: ["ق", "و", "ل"],
    rule: "Hollow Verb (e.g. قال): The middle weak letter (و) is dropped when it connects to a \
        pronoun with a vowel (like the تاء of the subject) to prevent two silent letters from \
        meeting.",
    forms: [
        "قَالَ",
        "قَالَا",
        "قَالُوا",
        "قَالَتْ",
        "قَالَتَا",
        "قُلْنَ",
        "قُلْتَ",
        "قُلْتُمَا",
        "قُلْتُمْ",
        "قُلْتِ",
        "قُلْتُمَا",
        "قُلْتُنَّ",
        "قُلْتُ",
        "قُلْنَا",
    ],
};

static WEAK_FINAL: IrregularVerb = IrregularVerb {
    category: IrregularCategory::WeakFinal,
    root: ["د", "ع", "و"],
    rule: "Weak-Final Verb (e.g. دعا): The weak letter (و) returns to its origin when attached to the \
        plural 'waw' and is then dropped, with a fatha placed on the preceding letter.",
    forms: [
        "دَعَا",
        "دَعَوَا",
        "دَعَوْا",
        "دَعَتْ",
        "دَعَتَا",
        "دَعَوْنَ",
        "دَعَوْتَ",
        "دَعَوْتُمَا",
        "دَعَوْتُمْ",
        "دَعَوْتِ",
        "دَعَوْتُمَا",
        "دَعَوْتُنَّ",
        "دَعَوْتُ",
        "دَعَوْنَا",
    ],
};

static WEAK_INITIAL: IrregularVerb = IrregularVerb {
    category: IrregularCategory::WeakInitial,
    root: ["و", "ق", "ف"],
    rule: "Weak-Initial Verb (e.g. وقف): There is no significant change in the past tense \
        conjugation; it behaves like a regular, sound verb.",
    forms: [
        "وَقَفَ",
        "وَقَفَا",
        "وَقَفُوا",
        "وَقَفَتْ",
        "وَقَفَتَا",
        "وَقَفْنَ",
        "وَقَفْتَ",
        "وَقَفْتُمَا",
        "وَقَفْتُمْ",
        "وَقَفْتِ",
        "وَقَفْتُمَا",
        "وَقَفْتُنَّ",
        "وَقَفْتُ",
        "وَقَفْنَا",
    ],
};

static DOUBLED: IrregularVerb = IrregularVerb {
    category: IrregularCategory::Doubled,
    root: ["م", "د", "د"],
    rule: "Doubled Verb (e.g. مدّ): The doubled letter is separated when the verb is attached to \
        pronouns of a moving subject (like تاء الفاعل, نا الفاعلين, نون النسوة).",
    forms: [
        "مَدَّ",
        "مَدَّا",
        "مَدُّوا",
        "مَدَّتْ",
        "مَدَّتَا",
        "مَدَدْنَ",
        "مَدَدْتَ",
        "مَدَدْتُمَا",
        "مَدَدْتُمْ",
        "مَدَدْتِ",
        "مَدَدْتُمَا",
        "مَدَدْتُنَّ",
        "مَدَدْتُ",
        "مَدَدْنَا",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{conjugation::conjugate_past, pronoun::PRONOUN_TABLE, root::Root};

    #[test]
    fn four_categories() {
        let slugs = IrregularCategory::iter()
            .map(|c| c.slug())
            .collect::<Vec<_>>();

        assert_eq!(
            vec!["hollow", "weak-final", "weak-initial", "doubled"],
            slugs
        );
    }

    #[test]
    fn slugs_round_trip() {
        for category in IrregularCategory::iter() {
            assert_eq!(Some(category), IrregularCategory::from_slug(category.slug()));
            assert_eq!(category, category.verb().category);
        }
        assert_eq!(None, IrregularCategory::from_slug("sound"));
    }

    #[test]
    fn every_verb_has_fourteen_forms_and_a_rule() {
        for category in IrregularCategory::iter() {
            let verb = category.verb();

            assert_eq!(PRONOUN_TABLE.len(), verb.conjugations().count());
            assert!(!verb.rule.is_empty());
            assert!(verb.forms.iter().all(|form| !form.is_empty()));
        }
    }

    #[test]
    fn conjugations_follow_pronoun_table() {
        let labels = IrregularCategory::Doubled
            .verb()
            .conjugations()
            .map(|(pronoun, _)| pronoun.label)
            .collect::<Vec<_>>();

        assert_eq!(
            PRONOUN_TABLE.iter().map(|p| p.label).collect::<Vec<_>>(),
            labels
        );
    }

    #[test]
    fn hollow_drops_middle_letter_before_consonant_suffix() {
        let verb = IrregularCategory::Hollow.verb();

        assert_eq!(["ق", "و", "ل"], verb.root);
        assert_eq!("قَالَ", verb.form_for(Pronoun::ThirdMasculineSingular));
        assert_eq!("قُلْتُ", verb.form_for(Pronoun::FirstSingular));
    }

    #[test]
    fn doubled_separates_before_consonant_suffix() {
        let verb = IrregularCategory::Doubled.verb();

        assert_eq!("مَدَّ", verb.form_for(Pronoun::ThirdMasculineSingular));
        assert_eq!("مَدَدْنَا", verb.form_for(Pronoun::FirstPlural));
    }

    #[test]
    fn fixtures_unaffected_by_conjugating_roots() {
        let before = IrregularCategory::WeakFinal.verb().forms;
        let root = Root::new(&["د", "ع", "و"]).unwrap();

        conjugate_past(&root);

        assert_eq!(before, IrregularCategory::WeakFinal.verb().forms);
        assert_eq!("دَعَا", IrregularCategory::WeakFinal.verb().forms[0]);
    }
}
