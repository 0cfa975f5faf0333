use xform_survey::{Choice, Question, QuestionKind, Section, Survey};

use crate::fixed_created_at;

fn yes_no() -> Vec<Choice> {
    vec![Choice::new("yes", "Yes"), Choice::new("no", "No")]
}

/// Nested sections, cross references and skip logic.
pub fn household_census() -> Survey {
    let head = Section::new("head")
        .with_label("Head of household")
        .with_child(
            Question::new("head_name", "Name of the head of household", QuestionKind::Text)
                .required(),
        )
        .with_child(
            Question::new("head_age", "How old is ${head_name}?", QuestionKind::Integer)
                .with_constraint(". >= 15 and . < 120")
                .with_hint("Age in completed years"),
        );

    let dwelling = Section::new("dwelling")
        .with_label("Dwelling")
        .with_child(Question::new(
            "has_water",
            "Does the dwelling have piped water?",
            QuestionKind::SelectOne(yes_no()),
        ))
        .with_child(
            Question::new(
                "water_source",
                "Where does the water come from?",
                QuestionKind::SelectMany(vec![
                    Choice::new("well", "Well"),
                    Choice::new("river", "River"),
                    Choice::new("rain", "Rain collection"),
                ]),
            )
            .with_relevant("${has_water} = 'no'"),
        );

    Survey::new("household_census")
        .with_created_at(fixed_created_at())
        .with_title("Household Census")
        .with_child(Question::new(
            "intro",
            "Thank you for taking part.",
            QuestionKind::Note,
        ))
        .with_child(head)
        .with_child(
            Question::new("members", "How many people live here?", QuestionKind::Integer)
                .required()
                .with_default("1"),
        )
        .with_child(dwelling)
        .with_child(
            Section::new("children")
                .with_relevant("${members} > 1")
                .with_child(Question::new(
                    "children_count",
                    "How many are under 5?",
                    QuestionKind::Integer,
                ))
                .with_child(Question::new(
                    "visit_date",
                    "Date of last clinic visit",
                    QuestionKind::Date,
                )),
        )
}
