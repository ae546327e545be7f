//! Offline validation of the questions file.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::models::{CorrectAnswer, Question};
use crate::opts::CheckOpts;
use crate::prelude::*;
use crate::store::QuestionStore;

#[derive(Debug, PartialEq, Eq)]
pub enum Issue<'a> {
    DuplicateId(&'a str),
    NoChoices(&'a str),
    UnresolvedAnswer(&'a str, &'a CorrectAnswer),
}

impl Display for Issue<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(formatter, "`{}`: duplicate ID", id),
            Self::NoChoices(id) => write!(formatter, "`{}`: no choices", id),
            Self::UnresolvedAnswer(id, answer) => {
                write!(formatter, "`{}`: correct answer {:?} does not match any choice", id, answer)
            }
        }
    }
}

#[instrument(skip_all, fields(path = ?opts.store.questions))]
pub async fn run(opts: CheckOpts) -> Result {
    let store = QuestionStore::new(opts.store.questions);
    let questions = store
        .list_all()
        .await
        .with_context(|| format!("failed to load `{}`", store.path().display()))?;

    let issues = find_issues(&questions);
    for issue in &issues {
        warn!("{}", issue);
    }
    if !issues.is_empty() {
        return Err(anyhow!("found {} issue(s) in {} questions", issues.len(), questions.len()));
    }
    info!(n_questions = questions.len(), "all good");
    Ok(())
}

pub fn find_issues(questions: &[Question]) -> Vec<Issue<'_>> {
    let mut seen_ids = HashSet::new();
    let mut issues = Vec::new();
    for question in questions {
        let id = question.id.as_str();
        if !seen_ids.insert(id) {
            issues.push(Issue::DuplicateId(id));
        }
        if question.choices.is_empty() {
            issues.push(Issue::NoChoices(id));
        } else if question.correct_choice().is_none() {
            issues.push(Issue::UnresolvedAnswer(id, &question.correct_answer));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use serde_json::Number;

    use super::*;
    use crate::store::tests::QUESTIONS;

    #[test]
    fn find_issues_ok() -> Result {
        let questions: Vec<Question> = serde_json::from_str(QUESTIONS)?;
        assert_eq!(
            find_issues(&questions),
            [
                Issue::UnresolvedAnswer("q1", &CorrectAnswer::Number(Number::from(0))),
                Issue::DuplicateId("q2"),
            ],
        );
        Ok(())
    }

    #[test]
    fn no_choices_ok() -> Result {
        let questions: Vec<Question> = serde_json::from_str(
            // language=JSON
            r#"[{"id":"q1","number":1,"year":2023,"category":"A","title":"T","text":"...","choices":[],"correctAnswer":"a"}]"#,
        )?;
        assert_eq!(find_issues(&questions), [Issue::NoChoices("q1")]);
        Ok(())
    }

    #[test]
    fn issue_display_ok() {
        assert_eq!(Issue::DuplicateId("q2").to_string(), "`q2`: duplicate ID");
    }
}
