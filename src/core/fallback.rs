/// The fixed message shown when the poem endpoint can't be reached.
use crate::core::generator::SHORT_SIGNOFF;
use crate::schema::menu::Choice;

pub fn fallback_text(mood: &Choice, food: &Choice) -> String {
    [
        format!("Hey {}, today doesn’t need fixing.", mood.label),
        format!("{} {}.", mood.emoji, mood.label),
        format!("{} {}.", food.emoji, food.label),
        SHORT_SIGNOFF.to_string(),
    ]
    .join("\n")
}
