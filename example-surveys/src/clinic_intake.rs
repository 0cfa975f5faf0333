use xform_survey::{Choice, MediaValue, MultiLangText, Question, QuestionKind, Survey};

use crate::fixed_created_at;

fn en_fr(english: &str, french: &str) -> MultiLangText {
    MultiLangText::localized([("English", english), ("French", french)])
}

/// English and French labels, one untranslated question and one media asset.
pub fn clinic_intake() -> Survey {
    Survey::new("clinic_intake")
        .with_created_at(fixed_created_at())
        .with_title("Clinic Intake")
        .with_child(
            Question::new(
                "weight",
                en_fr("Weight in kg", "Poids en kg"),
                QuestionKind::Decimal,
            )
            .with_hint(en_fr("Use the clinic scale", "Utilisez la balance"))
            .required(),
        )
        .with_child(Question::new(
            "fever",
            en_fr("Has ${weight} been measured with fever?", "Mesuré avec fièvre ?"),
            QuestionKind::SelectOne(vec![
                Choice::new("yes", en_fr("Yes", "Oui")),
                Choice::new("no", en_fr("No", "Non")),
            ]),
        ))
        .with_child(
            Question::new("rash", "Photo of the rash", QuestionKind::Text)
                .with_media(MediaValue::by_kind([("image", "rash.jpg")])),
        )
        .with_child(Question::new("notes", "Notes", QuestionKind::Text))
}
