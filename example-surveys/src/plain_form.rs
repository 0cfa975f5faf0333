use xform_survey::{Question, QuestionKind, Survey};

use crate::fixed_created_at;

/// Two untranslated questions, no media.
pub fn plain_form() -> Survey {
    Survey::new("plain")
        .with_created_at(fixed_created_at())
        .with_child(Question::new("name", "What is your name?", QuestionKind::Text).required())
        .with_child(
            Question::new("age", "How old is ${name}?", QuestionKind::Integer)
                .with_constraint(". >= 0"),
        )
}
