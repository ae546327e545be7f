//! Question records as they are stored in the questions file.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use serde_with::rust::double_option;

/// Single exam question.
///
/// Fields the application does not know about are kept in [`Question::extra`],
/// so that a record is served exactly as it is stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,

    /// Question number within its exam.
    pub number: i64,

    pub year: Year,
    pub category: String,
    pub title: String,
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: CorrectAnswer,

    // `None` is an absent key, `Some(None)` is an explicit `null`.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub explanation: Option<Option<Explanation>>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub tip: Option<Option<String>>,

    /// Pre-rendered HTML of the question figure.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub image: Option<Option<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Resolves the correct answer into the choice text.
    pub fn correct_choice(&self) -> Option<&str> {
        match &self.correct_answer {
            CorrectAnswer::Number(number) => number
                .as_u64()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| self.choices.get(index))
                .map(String::as_str),
            CorrectAnswer::Choice(choice) => self
                .choices
                .iter()
                .find(|candidate| *candidate == choice)
                .map(String::as_str),
        }
    }
}

/// Exam year: the data contains both plain numbers and era labels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Label(String),
}

impl Display for Year {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(year) => write!(formatter, "{}", year),
            Self::Label(label) => formatter.write_str(label),
        }
    }
}

/// Reference to the correct choice.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum CorrectAnswer {
    /// 1-based choice number, the way the quiz pages count choices.
    ///
    /// Any JSON number is accepted, only positive integers resolve to a choice.
    Number(Number),

    /// Verbatim choice text.
    Choice(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub main: String,

    /// Per-choice explanations in the choice order.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub choices: Option<Option<Vec<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub detailed_diagram: Option<Option<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
