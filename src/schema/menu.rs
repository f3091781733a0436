use serde::Serialize;

/// One selectable card: a mood or a food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub emoji: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

const fn choice(emoji: &'static str, label: &'static str, hint: &'static str) -> Choice {
    Choice { emoji, label, hint }
}

pub static MOODS: [Choice; 10] = [
    choice("😑", "Flat", "numb, low reaction mode"),
    choice("😮‍💨", "Tired", "exhausted, low battery"),
    choice("🥶", "Cold", "emotionally frozen, needs warmth"),
    choice("🥱", "Sleepy", "needs rest, cozy energy"),
    choice("🥰", "Loved", "safe, held, emotionally warm"),
    choice("😊", "Okay", "soft smile, balanced mood"),
    choice("😡", "Angry", "frustrated energy, needs release"),
    choice("😢", "Sad", "heavy heart, needs comfort"),
    choice("🤢", "Unwell", "feels off, needs gentle care"),
    choice("🤪", "Silly", "chaotic joy, playful mood"),
];

pub static FOODS: [Choice; 10] = [
    choice("🍙", "Rice Ball", "simple comfort, steady bite"),
    choice("☕️", "Coffee", "warm focus, gentle boost"),
    choice("🍣", "Sushi", "clean taste, calm focus"),
    choice("🌮", "Taco", "fun mess, bold flavor"),
    choice("🍱", "Bento", "balanced meal, thoughtful care"),
    choice("🥗", "Salad", "fresh reset, light energy"),
    choice("🍔", "Burger", "solid comfort, grounding bite"),
    choice("🥘", "Stew", "warm pot, slow healing"),
    choice("🍕", "Pizza", "easy joy, shared happiness"),
    choice("🍜", "Noodles", "warm bowl, quiet relief"),
];

/// Case-insensitive lookup by label.
pub fn find_mood(label: &str) -> Option<&'static Choice> {
    find(&MOODS, label)
}

/// Case-insensitive lookup by label.
pub fn find_food(label: &str) -> Option<&'static Choice> {
    find(&FOODS, label)
}

fn find(choices: &'static [Choice], label: &str) -> Option<&'static Choice> {
    let label = label.trim();
    choices.iter().find(|c| c.label.eq_ignore_ascii_case(label))
}
