pub use strum::IntoEnumIterator;

mod conjugation;
pub use conjugation::conjugate;
pub use conjugation::conjugate_past;
pub use conjugation::conjugate_present;
pub use conjugation::Conjugation;
pub use conjugation::ConjugationResult;
pub use conjugation::Tense;

mod diacritic;
pub use diacritic::*;

pub mod exchange;

mod irregular;
pub use irregular::IrregularCategory;
pub use irregular::IrregularVerb;

mod pronoun;
pub use pronoun::LabelStyle;
pub use pronoun::Pronoun;
pub use pronoun::PronounEntry;
pub use pronoun::PRONOUN_COUNT;
pub use pronoun::PRONOUN_TABLE;

mod root;
pub use root::InvalidRootError;
pub use root::Root;
pub use root::ROOT_LENGTH;
