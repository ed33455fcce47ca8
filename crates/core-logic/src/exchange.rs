//! Request and response shaped views of a conjugation, for showing what an API exchange for it would look like.
//!
//! Nothing is ever sent anywhere; these only exist to be printed.

use serde::Serialize;

use crate::{
    conjugation::{ConjugationResult, Tense},
    pronoun::LabelStyle,
    root::ROOT_LENGTH,
};

/// A request to conjugate a root, as typed so far. Letters may still be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationRequest {
    pub root: [String; ROOT_LENGTH],
}

impl ConjugationRequest {
    /// Creates a request from the letters entered so far.
    pub fn from_letters<S: AsRef<str>>(letters: &[S; ROOT_LENGTH]) -> ConjugationRequest {
        ConjugationRequest {
            root: [
                letters[0].as_ref().to_string(),
                letters[1].as_ref().to_string(),
                letters[2].as_ref().to_string(),
            ],
        }
    }

    /// Renders this request as indented JSON.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The response to a conjugation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationResponse {
    pub root: [String; ROOT_LENGTH],
    pub tense: Tense,
    pub conjugations: Vec<ConjugationEntry>,
}

/// A single row of a `ConjugationResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationEntry {
    /// The Arabic label of the pronoun
    pub pronoun: String,
    pub verb: String,
}

impl ConjugationResponse {
    /// Creates a response for the provided result, with pronouns labeled in Arabic.
    pub fn from_result(result: &ConjugationResult) -> ConjugationResponse {
        ConjugationResponse {
            root: result.root.letters().clone(),
            tense: result.tense,
            conjugations: result
                .labeled(LabelStyle::Native)
                .into_iter()
                .map(|(pronoun, verb)| ConjugationEntry {
                    pronoun: pronoun.to_string(),
                    verb: verb.to_string(),
                })
                .collect(),
        }
    }

    /// Renders this response as indented JSON.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{conjugation::conjugate_present, root::Root};

    #[test]
    fn request_with_missing_letter() {
        let request = ConjugationRequest::from_letters(&["ك", "", "ب"]);

        assert_eq!(
            "{\n  \"root\": [\n    \"ك\",\n    \"\",\n    \"ب\"\n  ]\n}",
            request.to_pretty_json().unwrap()
        );
    }

    #[test]
    fn response_keyed_by_native_label() {
        let root = Root::new(&["ك", "ت", "ب"]).unwrap();
        let response = ConjugationResponse::from_result(&conjugate_present(&root));

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(json!(["ك", "ت", "ب"]), value["root"]);
        assert_eq!(json!("present"), value["tense"]);
        assert_eq!(14, value["conjugations"].as_array().unwrap().len());
        assert_eq!(
            json!({ "pronoun": "هو", "verb": "يَكْتَبُ" }),
            value["conjugations"][0]
        );
    }

    #[test]
    fn response_json_field_order() {
        let root = Root::new(&["ك", "ت", "ب"]).unwrap();
        let json = ConjugationResponse::from_result(&conjugate_present(&root))
            .to_pretty_json()
            .unwrap();

        let root_at = json.find("\"root\"").unwrap();
        let tense_at = json.find("\"tense\"").unwrap();
        let conjugations_at = json.find("\"conjugations\"").unwrap();
        assert!(root_at < tense_at && tense_at < conjugations_at);
    }
}
