/// Phrase pools — the fixed fragment tables the generator draws from.
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::core::category::FoodCategory;
use crate::core::template::Template;

/// Built-in pools, compiled into the binary.
const BUILTIN_POOLS: &str = include_str!("../../phrase_data/pools.ron");

/// Pools with fewer entries than this get a lint warning.
pub const MIN_POOL_SIZE: usize = 3;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("pool '{0}' is empty")]
    EmptyPool(String),
    #[error("no middle pool for category '{0}'")]
    MissingCategory(&'static str),
}

/// The four fragment pools. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct PhrasePools {
    pub openers: Vec<Template>,
    pub middles: FxHashMap<FoodCategory, Vec<Template>>,
    pub closers: Vec<Template>,
    pub endings: Vec<Template>,
}

// On-disk shape: plain strings, parsed into templates on load.
#[derive(Debug, Deserialize)]
#[serde(rename = "Pools")]
struct RonPools {
    #[serde(default)]
    openers: Vec<String>,
    #[serde(default)]
    middles: FxHashMap<FoodCategory, Vec<String>>,
    #[serde(default)]
    closers: Vec<String>,
    #[serde(default)]
    endings: Vec<String>,
}

fn parse_all(texts: Vec<String>) -> Vec<Template> {
    texts.iter().map(|t| Template::parse(t)).collect()
}

impl PhrasePools {
    /// The pools shipped with the crate.
    pub fn builtin() -> Result<PhrasePools, PoolError> {
        Self::parse_ron(BUILTIN_POOLS)
    }

    /// Load and validate pools from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<PhrasePools, PoolError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Load a partial pools file without validating it.
    pub fn load_from_ron_unchecked(path: &Path) -> Result<PhrasePools, PoolError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron_unchecked(&contents)
    }

    /// Parse and validate pools from a RON string.
    pub fn parse_ron(input: &str) -> Result<PhrasePools, PoolError> {
        let pools = Self::parse_ron_unchecked(input)?;
        pools.validate()?;
        Ok(pools)
    }

    /// Parse without validation. Used for partial override files that
    /// only extend some pools before being merged.
    pub fn parse_ron_unchecked(input: &str) -> Result<PhrasePools, PoolError> {
        let raw: RonPools = ron::from_str(input)?;
        Ok(PhrasePools {
            openers: parse_all(raw.openers),
            middles: raw
                .middles
                .into_iter()
                .map(|(cat, texts)| (cat, parse_all(texts)))
                .collect(),
            closers: parse_all(raw.closers),
            endings: parse_all(raw.endings),
        })
    }

    /// Every pool non-empty, every category present.
    pub fn validate(&self) -> Result<(), PoolError> {
        for (name, pool) in [
            ("openers", &self.openers),
            ("closers", &self.closers),
            ("endings", &self.endings),
        ] {
            if pool.is_empty() {
                return Err(PoolError::EmptyPool(name.to_string()));
            }
        }

        for cat in FoodCategory::ALL {
            match self.middles.get(&cat) {
                None => return Err(PoolError::MissingCategory(cat.key())),
                Some(pool) if pool.is_empty() => {
                    return Err(PoolError::EmptyPool(format!("middles.{}", cat.key())));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Append every entry of `other` to the matching pool.
    pub fn merge(&mut self, other: PhrasePools) {
        self.openers.extend(other.openers);
        self.closers.extend(other.closers);
        self.endings.extend(other.endings);
        for (cat, templates) in other.middles {
            self.middles.entry(cat).or_default().extend(templates);
        }
    }

    /// The middle pool for a category. Empty slice if absent.
    pub fn middles_for(&self, category: FoodCategory) -> &[Template] {
        self.middles.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every pool with its display name, in a stable order.
    pub fn named_pools(&self) -> Vec<(String, &[Template])> {
        let mut pools: Vec<(String, &[Template])> =
            vec![("openers".to_string(), self.openers.as_slice())];
        for cat in FoodCategory::ALL {
            pools.push((format!("middles.{}", cat.key()), self.middles_for(cat)));
        }
        pools.push(("closers".to_string(), self.closers.as_slice()));
        pools.push(("endings".to_string(), self.endings.as_slice()));
        pools
    }

    /// Quality warnings: small pools, duplicates, unknown placeholders.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (name, pool) in self.named_pools() {
            if pool.len() < MIN_POOL_SIZE {
                warnings.push(format!(
                    "pool '{}' has only {} entries (minimum {} expected)",
                    name,
                    pool.len(),
                    MIN_POOL_SIZE
                ));
            }

            let mut seen = HashSet::new();
            for template in pool {
                if !seen.insert(template.source()) {
                    warnings.push(format!(
                        "pool '{}' contains duplicate entry '{}'",
                        name,
                        template.source()
                    ));
                }
                for unknown in template.unknown_placeholders() {
                    warnings.push(format!(
                        "pool '{}' entry '{}' uses unknown placeholder '{{{}}}'",
                        name,
                        template.source(),
                        unknown
                    ));
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"Pools(
        openers: ["Hi {mood}.", "Hello {mood}.", "Hey there."],
        middles: {
            coffee: ["{food} first.", "Sip slowly.", "Warm cup."],
            noodles: ["Slurp.", "Steam rises.", "{food} again."],
            fresh: ["Crisp.", "Cool.", "Clean."],
            comfort: ["Soft.", "Heavy.", "Good."],
        },
        closers: ["Bye, {mood}.", "Rest.", "Later."],
        endings: ["End.", "Fin.", "Done."],
    )"#;

    #[test]
    fn parse_small_pools() {
        let pools = PhrasePools::parse_ron(SMALL).unwrap();
        assert_eq!(pools.openers.len(), 3);
        assert_eq!(pools.middles.len(), 4);
        assert_eq!(pools.middles_for(FoodCategory::Noodles)[1].source(), "Steam rises.");
        assert!(pools.lint().is_empty());
    }

    #[test]
    fn missing_category_rejected() {
        let input = r#"Pools(
            openers: ["a"],
            middles: { coffee: ["b"], noodles: ["c"], fresh: ["d"] },
            closers: ["e"],
            endings: ["f"],
        )"#;
        let err = PhrasePools::parse_ron(input).unwrap_err();
        assert!(matches!(err, PoolError::MissingCategory("comfort")));
    }

    #[test]
    fn empty_pool_rejected() {
        let input = r#"Pools(
            openers: [],
            middles: { coffee: ["b"], noodles: ["c"], fresh: ["d"], comfort: ["e"] },
            closers: ["e"],
            endings: ["f"],
        )"#;
        let err = PhrasePools::parse_ron(input).unwrap_err();
        assert!(matches!(err, PoolError::EmptyPool(ref name) if name == "openers"));
    }

    #[test]
    fn unknown_category_is_a_ron_error() {
        let input = r#"Pools(middles: { dessert: ["cake"] })"#;
        assert!(matches!(
            PhrasePools::parse_ron_unchecked(input),
            Err(PoolError::Ron(_))
        ));
    }

    #[test]
    fn merge_appends() {
        let mut base = PhrasePools::parse_ron(SMALL).unwrap();
        let extra = PhrasePools::parse_ron_unchecked(
            r#"Pools(openers: ["Morning, {mood}."], middles: { fresh: ["Green."] })"#,
        )
        .unwrap();
        base.merge(extra);

        assert_eq!(base.openers.len(), 4);
        assert_eq!(base.openers[3].source(), "Morning, {mood}.");
        assert_eq!(base.middles_for(FoodCategory::Fresh).len(), 4);
        assert_eq!(base.closers.len(), 3);
        assert!(base.validate().is_ok());
    }

    #[test]
    fn lint_flags_small_duplicate_and_unknown() {
        let input = r#"Pools(
            openers: ["Hi {mood}.", "Hi {mood}.", "Yo {friend}."],
            middles: { coffee: ["b"], noodles: ["c", "d", "e"], fresh: ["f", "g", "h"], comfort: ["i", "j", "k"] },
            closers: ["x", "y", "z"],
            endings: ["p", "q", "r"],
        )"#;
        let pools = PhrasePools::parse_ron(input).unwrap();
        let warnings = pools.lint();

        assert_eq!(warnings.len(), 3, "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.contains("{friend}")));
        assert!(warnings.iter().any(|w| w.contains("middles.coffee")));
    }

    #[test]
    fn builtin_pools_load() {
        let pools = PhrasePools::builtin().unwrap();
        assert!(pools.validate().is_ok());
        assert!(pools.lint().is_empty(), "{:?}", pools.lint());
    }
}
