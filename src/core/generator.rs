/// The poem generator: mood + food + style → a few lines of text.
///
/// Selection is a handful of independent uniform draws from the phrase
/// pools; the only other logic is input defaulting and line layout.
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::core::category::FoodCategory;
use crate::core::pools::{PhrasePools, PoolError};
use crate::core::random::PhraseSource;
use crate::core::template::{Template, Vars};

pub const DEFAULT_MOOD: &str = "You";
pub const DEFAULT_FOOD: &str = "a treat";

/// Last line of every short poem.
pub const SHORT_SIGNOFF: &str = "Not quitting. Just resting.";

/// The two fixed lines in the middle of every full poem.
pub const POEM_REFRAIN: [&str; 2] = [
    "Slow is a speed, too.",
    "You can pause without disappearing.",
];

/// Output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Opener, closer, sign-off.
    Short,
    /// Opener, middle, refrain, closer, and maybe an ending.
    #[default]
    Poem,
}

impl Style {
    /// `"short"` selects the short form. Anything else, including no
    /// value at all, is a full poem.
    pub fn parse(value: Option<&str>) -> Style {
        match value {
            Some("short") => Style::Short,
            _ => Style::Poem,
        }
    }
}

/// Normalised generator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemRequest {
    pub mood: String,
    pub food: String,
    pub style: Style,
}

impl PoemRequest {
    /// Trim both labels; blank ones fall back to the defaults.
    pub fn new(mood: &str, food: &str, style: Style) -> Self {
        Self {
            mood: or_default(mood, DEFAULT_MOOD),
            food: or_default(food, DEFAULT_FOOD),
            style,
        }
    }

    pub fn category(&self) -> FoodCategory {
        FoodCategory::from_label(&self.food)
    }
}

fn or_default(label: &str, default: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// The fragments picked for one poem, before layout.
#[derive(Debug, Clone)]
pub struct Draft<'p> {
    pub opener: &'p Template,
    pub middle: &'p Template,
    pub closer: &'p Template,
    pub ending: Option<&'p Template>,
}

impl Draft<'_> {
    /// Lay out the drafted fragments for a style.
    ///
    /// The middle and ending are always drawn but the short form
    /// drops them. The ending is appended as written, without
    /// substitution.
    pub fn compose(&self, style: Style, vars: &Vars<'_>) -> String {
        let lines: Vec<String> = match style {
            Style::Short => vec![
                self.opener.fill(vars),
                self.closer.fill(vars),
                SHORT_SIGNOFF.to_string(),
            ],
            Style::Poem => {
                let mut lines = vec![
                    self.opener.fill(vars),
                    self.middle.fill(vars),
                    POEM_REFRAIN[0].to_string(),
                    POEM_REFRAIN[1].to_string(),
                    self.closer.fill(vars),
                ];
                if let Some(ending) = self.ending {
                    lines.push(ending.source().to_string());
                }
                lines
            }
        };
        lines.join("\n")
    }
}

/// Draws fragments from a shared, read-only set of pools.
#[derive(Debug, Clone)]
pub struct PoemGenerator {
    pools: Arc<PhrasePools>,
}

impl PoemGenerator {
    /// Fails unless every pool, every category's middles included, has
    /// at least one entry.
    pub fn new(pools: PhrasePools) -> Result<Self, PoolError> {
        pools.validate()?;
        Ok(Self {
            pools: Arc::new(pools),
        })
    }

    pub fn pools(&self) -> &PhrasePools {
        &self.pools
    }

    /// Pick fragments. Draw order is fixed: opener, middle, closer,
    /// coin, then the ending if the coin came up.
    pub fn draft<S: PhraseSource + ?Sized>(&self, req: &PoemRequest, src: &mut S) -> Draft<'_> {
        let category = req.category();
        let opener = pick(&self.pools.openers, src);
        let middle = pick(self.pools.middles_for(category), src);
        let closer = pick(&self.pools.closers, src);
        let ending = if src.coin() {
            Some(pick(&self.pools.endings, src))
        } else {
            None
        };

        debug!(
            category = category.key(),
            with_ending = ending.is_some(),
            "drafted poem"
        );

        Draft {
            opener,
            middle,
            closer,
            ending,
        }
    }

    /// Generate one text. Never fails.
    pub fn generate<S: PhraseSource + ?Sized>(&self, req: &PoemRequest, src: &mut S) -> String {
        let vars = Vars {
            mood: &req.mood,
            food: &req.food,
        };
        self.draft(req, src).compose(req.style, &vars)
    }

    /// Generate `count` texts, each from its own seeded stream.
    pub fn generate_variants(&self, req: &PoemRequest, count: usize, seed: u64) -> Vec<String> {
        (0..count)
            .map(|i| {
                // prime stride keeps neighbouring seeds apart
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64 * 7919));
                self.generate(req, &mut rng)
            })
            .collect()
    }
}

fn pick<'p, S: PhraseSource + ?Sized>(pool: &'p [Template], src: &mut S) -> &'p Template {
    &pool[src.pick_index(pool.len())]
}
