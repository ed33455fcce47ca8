/// Short "a" vowel mark.
pub const FATHA: char = '\u{064E}';

/// Marks a letter as carrying no vowel.
pub const SUKUN: char = '\u{0652}';
