/// Random source used for fragment selection.
///
/// Every draw the generator makes goes through this trait so tests can
/// script the exact fragments chosen.
use rand::Rng;

pub trait PhraseSource {
    /// A uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// A fair coin flip.
    fn coin(&mut self) -> bool;
}

impl<R: Rng + ?Sized> PhraseSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Replays fixed answers, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    coins: Vec<bool>,
    next_index: usize,
    next_coin: usize,
}

impl ScriptedSource {
    pub fn new(indices: Vec<usize>, coins: Vec<bool>) -> Self {
        Self {
            indices,
            coins,
            next_index: 0,
            next_coin: 0,
        }
    }
}

impl PhraseSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let i = self
            .indices
            .get(self.next_index % self.indices.len().max(1))
            .copied()
            .unwrap_or(0);
        self.next_index += 1;
        i.checked_rem(len).unwrap_or(0)
    }

    fn coin(&mut self) -> bool {
        let c = self
            .coins
            .get(self.next_coin % self.coins.len().max(1))
            .copied()
            .unwrap_or(false);
        self.next_coin += 1;
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_indices_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn rng_coin_lands_both_ways() {
        let mut rng = StdRng::seed_from_u64(11);
        let heads = (0..1000).filter(|_| rng.coin()).count();
        assert!((350..650).contains(&heads), "heads = {heads}");
    }

    #[test]
    fn scripted_cycles_and_wraps() {
        let mut src = ScriptedSource::new(vec![1, 5], vec![true]);
        assert_eq!(src.pick_index(3), 1);
        assert_eq!(src.pick_index(3), 2); // 5 % 3
        assert_eq!(src.pick_index(3), 1);
        assert!(src.coin());
        assert!(src.coin());
    }

    #[test]
    fn scripted_empty_defaults() {
        let mut src = ScriptedSource::new(vec![], vec![]);
        assert_eq!(src.pick_index(4), 0);
        assert!(!src.coin());
    }
}
