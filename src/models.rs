use std::path::Path;

use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;

use crate::names::OPTIONS_PER_QUESTION;

pub type Questions = Vec<NewQuestion>;

/// A question as entered by an administrator or listed in a seed file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidQuestion {
    EmptyText,
    EmptyOption,
    /// The answer matches none of the options.
    AnswerNotAnOption,
    /// The answer matches more than one option, so two options are identical.
    AmbiguousAnswer,
}

impl InvalidQuestion {
    pub fn message(self) -> &'static str {
        match self {
            InvalidQuestion::EmptyText => "question text must not be empty",
            InvalidQuestion::EmptyOption => "all four options must be filled in",
            InvalidQuestion::AnswerNotAnOption => "the answer must match one of the options",
            InvalidQuestion::AmbiguousAnswer => "the answer matches more than one option",
        }
    }
}

impl std::fmt::Display for InvalidQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl NewQuestion {
    /// Builds a question from raw form input, trimming surrounding whitespace.
    pub fn from_input(
        text: &str,
        options: [&str; OPTIONS_PER_QUESTION],
        answer: &str,
    ) -> Self {
        Self {
            text: text.trim().to_string(),
            options: options.map(|o| o.trim().to_string()),
            answer: answer.trim().to_string(),
        }
    }

    /// Storage does not tie the answer to the options, so this runs before every insert.
    pub fn validate(&self) -> Result<(), InvalidQuestion> {
        if self.text.trim().is_empty() {
            return Err(InvalidQuestion::EmptyText);
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(InvalidQuestion::EmptyOption);
        }
        match self.options.iter().filter(|o| **o == self.answer).count() {
            0 => Err(InvalidQuestion::AnswerNotAnOption),
            1 => Ok(()),
            _ => Err(InvalidQuestion::AmbiguousAnswer),
        }
    }
}

/// Reads a JSON array of questions, rejecting the whole file if any entry is invalid.
pub fn load_questions(path: &Path) -> Result<Questions> {
    let raw = std::fs::read_to_string(path)?;
    let questions: Questions = serde_json::from_str(&raw)?;

    for (i, q) in questions.iter().enumerate() {
        q.validate()
            .map_err(|e| eyre!("question #{} in {}: {e}", i + 1, path.display()))?;
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital() -> NewQuestion {
        NewQuestion::from_input(
            "Capital of France?",
            ["Paris", "Lyon", "Nice", "Lille"],
            "Paris",
        )
    }

    #[test]
    fn valid_question_passes() {
        assert_eq!(capital().validate(), Ok(()));
    }

    #[test]
    fn input_is_trimmed() {
        let q = NewQuestion::from_input("  Q  ", [" a", "b ", "c", "d"], " b ");
        assert_eq!(q.text, "Q");
        assert_eq!(q.options[0], "a");
        assert_eq!(q.answer, "b");
        assert_eq!(q.validate(), Ok(()));
    }

    #[test]
    fn answer_must_match_an_option() {
        let mut q = capital();
        q.answer = "Marseille".to_string();
        assert_eq!(q.validate(), Err(InvalidQuestion::AnswerNotAnOption));

        // exact match only
        q.answer = "paris".to_string();
        assert_eq!(q.validate(), Err(InvalidQuestion::AnswerNotAnOption));
    }

    #[test]
    fn duplicated_answer_option_is_ambiguous() {
        let q = NewQuestion::from_input("Q", ["x", "x", "y", "z"], "x");
        assert_eq!(q.validate(), Err(InvalidQuestion::AmbiguousAnswer));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let q = NewQuestion::from_input("   ", ["a", "b", "c", "d"], "a");
        assert_eq!(q.validate(), Err(InvalidQuestion::EmptyText));

        let q = NewQuestion::from_input("Q", ["a", "", "c", "d"], "a");
        assert_eq!(q.validate(), Err(InvalidQuestion::EmptyOption));
    }

    #[test]
    fn seed_file_is_parsed_and_validated() {
        let dir = std::env::temp_dir();
        let good = dir.join(format!("quiz_seed_good_{}.json", std::process::id()));
        std::fs::write(
            &good,
            r#"[{"text":"2+2?","options":["3","4","5","6"],"answer":"4"}]"#,
        )
        .unwrap();
        let questions = load_questions(&good).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "4");

        let bad = dir.join(format!("quiz_seed_bad_{}.json", std::process::id()));
        std::fs::write(
            &bad,
            r#"[{"text":"2+2?","options":["3","4","5","6"],"answer":"22"}]"#,
        )
        .unwrap();
        let err = load_questions(&bad).unwrap_err();
        assert!(err.to_string().contains("question #1"));

        let _ = std::fs::remove_file(good);
        let _ = std::fs::remove_file(bad);
    }
}
