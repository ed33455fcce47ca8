use strum::EnumIter;

/// The number of pronouns a verb is conjugated for.
pub const PRONOUN_COUNT: usize = 14;

/// The grammatical persons a verb can be conjugated for, in display order.
///
/// Third person comes before second, second before first. Within a person, masculine comes before feminine,
/// and each gender is grouped as singular, dual, plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Pronoun {
    /// He
    ThirdMasculineSingular,
    /// They (dual, m)
    ThirdMasculineDual,
    /// They (m. pl)
    ThirdMasculinePlural,
    /// She
    ThirdFeminineSingular,
    /// They (dual, f)
    ThirdFeminineDual,
    /// They (f. pl)
    ThirdFemininePlural,
    /// You (m)
    SecondMasculineSingular,
    /// You (dual, m)
    SecondMasculineDual,
    /// You (m. pl)
    SecondMasculinePlural,
    /// You (f)
    SecondFeminineSingular,
    /// You (dual, f)
    SecondFeminineDual,
    /// You (f. pl)
    SecondFemininePlural,
    /// I
    FirstSingular,
    /// We
    FirstPlural,
}

impl Pronoun {
    /// Gets the table entry for this pronoun.
    pub fn entry(&self) -> &'static PronounEntry {
        &PRONOUN_TABLE[self.index()]
    }

    /// The position of this pronoun in the table.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Which of a pronoun's labels to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// The English label, for learners (e.g. "He")
    Display,
    /// The Arabic label, for the API view (e.g. "هو")
    Native,
}

/// One row of the pronoun table: how a grammatical person is labeled and which affixes it attaches to a verb stem.
#[derive(Debug, PartialEq, Eq)]
pub struct PronounEntry {
    /// The pronoun this entry describes
    pub pronoun: Pronoun,
    /// The English label
    pub label: &'static str,
    /// The Arabic label
    pub native_label: &'static str,
    /// Attached to the stem in the past tense
    pub past_suffix: &'static str,
    /// Placed before the stem in the present tense
    pub present_prefix: &'static str,
    /// Attached to the stem in the present tense
    pub present_suffix: &'static str,
}

impl PronounEntry {
    /// Gets the label of this entry in the provided style.
    pub fn label_for(&self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Display => self.label,
            LabelStyle::Native => self.native_label,
        }
    }

    /// Determines whether the past tense stem keeps an open vowel on its middle letter for this entry.
    ///
    /// This holds for "He", "She", both duals starting with "They (dual", and "They (m. pl)". Every other entry
    /// (including "They (f. pl)") silences the middle letter instead.
    pub fn takes_open_past_stem(&self) -> bool {
        self.label == "He"
            || self.label == "She"
            || self.label.starts_with("They (dual")
            || self.label == "They (m. pl)"
    }
}

/// Every pronoun a verb is conjugated for, in display order.
pub static PRONOUN_TABLE: [PronounEntry; PRONOUN_COUNT] = [
    PronounEntry {
        pronoun: Pronoun::ThirdMasculineSingular,
        label: "He",
        native_label: "هو",
        past_suffix: "َ",
        present_prefix: "يَ",
        present_suffix: "ُ",
    },
    PronounEntry {
        pronoun: Pronoun::ThirdMasculineDual,
        label: "They (dual, m)",
        native_label: "هما (م)",
        past_suffix: "َا",
        present_prefix: "يَ",
        present_suffix: "َانِ",
    },
    PronounEntry {
        pronoun: Pronoun::ThirdMasculinePlural,
        label: "They (m. pl)",
        native_label: "هم",
        past_suffix: "ُوا",
        present_prefix: "يَ",
        present_suffix: "ُونَ",
    },
    PronounEntry {
        pronoun: Pronoun::ThirdFeminineSingular,
        label: "She",
        native_label: "هي",
        past_suffix: "َتْ",
        present_prefix: "تَ",
        present_suffix: "ُ",
    },
    PronounEntry {
        pronoun: Pronoun::ThirdFeminineDual,
        label: "They (dual, f)",
        native_label: "هما (مؤ)",
        past_suffix: "َتَا",
        present_prefix: "تَ",
        present_suffix: "َانِ",
    },
    PronounEntry {
        pronoun: Pronoun::ThirdFemininePlural,
        label: "They (f. pl)",
        native_label: "هنّ",
        past_suffix: "ْنَ",
        present_prefix: "يَ",
        present_suffix: "ْنَ",
    },
    PronounEntry {
        pronoun: Pronoun::SecondMasculineSingular,
        label: "You (m)",
        native_label: "أنتَ",
        past_suffix: "ْتَ",
        present_prefix: "تَ",
        present_suffix: "ُ",
    },
    PronounEntry {
        pronoun: Pronoun::SecondMasculineDual,
        label: "You (dual, m)",
        native_label: "أنتما",
        past_suffix: "ْتُمَا",
        present_prefix: "تَ",
        present_suffix: "َانِ",
    },
    PronounEntry {
        pronoun: Pronoun::SecondMasculinePlural,
        label: "You (m. pl)",
        native_label: "أنتم",
        past_suffix: "ْتُمْ",
        present_prefix: "تَ",
        present_suffix: "ُونَ",
    },
    PronounEntry {
        pronoun: Pronoun::SecondFeminineSingular,
        label: "You (f)",
        native_label: "أنتِ",
        past_suffix: "ْتِ",
        present_prefix: "تَ",
        present_suffix: "ِينَ",
    },
    PronounEntry {
        pronoun: Pronoun::SecondFeminineDual,
        label: "You (dual, f)",
        native_label: "أنتما",
        past_suffix: "ْتُمَا",
        present_prefix: "تَ",
        present_suffix: "َانِ",
    },
    PronounEntry {
        pronoun: Pronoun::SecondFemininePlural,
        label: "You (f. pl)",
        native_label: "أنتنّ",
        past_suffix: "ْتُنَّ",
        present_prefix: "تَ",
        present_suffix: "ْنَ",
    },
    PronounEntry {
        pronoun: Pronoun::FirstSingular,
        label: "I",
        native_label: "أنا",
        past_suffix: "ْتُ",
        present_prefix: "أَ",
        present_suffix: "ُ",
    },
    PronounEntry {
        pronoun: Pronoun::FirstPlural,
        label: "We",
        native_label: "نحن",
        past_suffix: "ْنَا",
        present_prefix: "نَ",
        present_suffix: "ُ",
    },
];

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn table_has_fourteen_entries() {
        assert_eq!(14, PRONOUN_COUNT);
        assert_eq!(PRONOUN_COUNT, Pronoun::iter().count());
    }

    #[test]
    fn entries_line_up_with_pronouns() {
        for (pronoun, entry) in Pronoun::iter().zip(PRONOUN_TABLE.iter()) {
            assert_eq!(pronoun, entry.pronoun);
            assert_eq!(entry, pronoun.entry());
        }
    }

    #[test]
    fn labels_in_display_order() {
        let labels = PRONOUN_TABLE.iter().map(|e| e.label).collect::<Vec<_>>();

        assert_eq!(
            vec![
                "He",
                "They (dual, m)",
                "They (m. pl)",
                "She",
                "They (dual, f)",
                "They (f. pl)",
                "You (m)",
                "You (dual, m)",
                "You (m. pl)",
                "You (f)",
                "You (dual, f)",
                "You (f. pl)",
                "I",
                "We",
            ],
            labels
        );
    }

    #[test]
    fn open_past_stem_for_third_person_except_feminine_plural() {
        let open = Pronoun::iter()
            .filter(|p| p.entry().takes_open_past_stem())
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                Pronoun::ThirdMasculineSingular,
                Pronoun::ThirdMasculineDual,
                Pronoun::ThirdMasculinePlural,
                Pronoun::ThirdFeminineSingular,
                Pronoun::ThirdFeminineDual,
            ],
            open
        );
    }

    #[test]
    fn feminine_plural_third_person_silences_stem() {
        assert!(!Pronoun::ThirdFemininePlural.entry().takes_open_past_stem());
    }

    #[test]
    fn label_styles() {
        let entry = Pronoun::FirstSingular.entry();

        assert_eq!("I", entry.label_for(LabelStyle::Display));
        assert_eq!("أنا", entry.label_for(LabelStyle::Native));
    }
}
