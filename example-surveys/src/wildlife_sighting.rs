use xform_survey::{MediaValue, Question, QuestionKind, Survey};

use crate::fixed_created_at;

/// Media on untranslated questions, so the text table is the media table.
pub fn wildlife_sighting() -> Survey {
    Survey::new("wildlife")
        .with_created_at(fixed_created_at())
        .with_title("Wildlife Sighting")
        .with_child(
            Question::new("bird", "Did you see this bird?", QuestionKind::Text)
                .with_media(MediaValue::by_kind([("image", "heron.png"), ("audio", "heron.mp3")])),
        )
        .with_child(
            Question::new("tracks", "Describe the tracks", QuestionKind::Text)
                .with_media(MediaValue::by_kind([("video", "tracks.mp4")])),
        )
        .with_child(Question::new("count", "How many animals?", QuestionKind::Integer))
}
