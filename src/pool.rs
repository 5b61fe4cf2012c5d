use crate::error::{GameError, Result};
use std::str::FromStr;

/*
A pool is a fixed, ordered list of symbol slots. Placing a symbol never
touches the pool itself; a search path instead carries a `Remaining` bitset
of the slots it has not used yet. Bit i set means slot i is still free, so
iterating the set bits from the lowest up visits the free slots in pool
order:

slots:      S  A  T  G  C
remaining:  0  1  1  0  1   -> A, T, C are left, in that order
*/
pub type Slot = u8;
pub const MAX_POOL_SIZE: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    symbols: Vec<char>,
}

impl Pool {
    pub fn new(symbols: Vec<char>) -> Result<Pool> {
        if symbols.len() > MAX_POOL_SIZE {
            return Err(GameError::PoolTooLarge {
                size: symbols.len(),
                max: MAX_POOL_SIZE,
            });
        }
        Ok(Pool { symbols })
    }

    // every entry must be a single character, e.g. ["S", "A", "T"]
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Pool> {
        let symbols = entries
            .iter()
            .map(|e| single_char(e.as_ref()))
            .collect::<Result<Vec<char>>>()?;
        Pool::new(symbols)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline(always)]
    pub fn get(&self, slot: Slot) -> char {
        self.symbols[slot as usize]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    // drops every slot holding `symbol`; order of the rest is kept
    pub fn without(&self, symbol: char) -> Pool {
        Pool {
            symbols: self.symbols.iter().copied().filter(|&c| c != symbol).collect(),
        }
    }

    pub fn all_slots(&self) -> Remaining {
        Remaining::full(self.symbols.len())
    }
}

impl FromStr for Pool {
    type Err = GameError;

    // "SATGC" -> one slot per character
    fn from_str(s: &str) -> Result<Pool> {
        Pool::new(s.chars().collect())
    }
}

pub fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GameError::InvalidSymbol(s.to_string())),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Remaining {
    occupancy: u64,
}

impl Remaining {
    pub fn full(n: usize) -> Remaining {
        debug_assert!(n <= MAX_POOL_SIZE);
        let occupancy = if n >= 64 { u64::MAX } else { (1u64 << n) - 1 };
        Remaining { occupancy }
    }

    #[inline(always)]
    pub fn without(self, slot: Slot) -> Remaining {
        debug_assert!(self.occupancy & (1u64 << slot) != 0);
        Remaining {
            occupancy: self.occupancy & !(1u64 << slot),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    pub fn size(&self) -> u32 {
        self.occupancy.count_ones()
    }
}

impl Iterator for Remaining {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.occupancy == 0 {
            return None;
        }
        let i = self.occupancy.trailing_zeros() as Slot;
        self.occupancy &= !(1u64 << i);
        Some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_iterates_in_pool_order() {
        let rem = Remaining::full(5).without(0).without(3);
        assert_eq!(rem.size(), 3);
        assert_eq!(rem.collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn full_64_slots() {
        let rem = Remaining::full(64);
        assert_eq!(rem.size(), 64);
        assert_eq!(rem.last(), Some(63));
        assert!(Remaining::full(0).is_empty());
    }

    #[test]
    fn without_symbol_keeps_order() {
        let pool: Pool = "SATSGC".parse().unwrap();
        assert_eq!(pool.without('S').symbols(), &['A', 'T', 'G', 'C']);
        assert!(!pool.without('S').contains('S'));
    }

    #[test]
    fn entries_must_be_single_chars() {
        assert!(Pool::from_entries(&["A", "T"]).is_ok());
        assert!(matches!(
            Pool::from_entries(&["A", "TG"]),
            Err(GameError::InvalidSymbol(_))
        ));
        assert!(matches!(
            Pool::from_entries(&[""]),
            Err(GameError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn too_many_slots() {
        let symbols = vec!['A'; MAX_POOL_SIZE + 1];
        assert!(matches!(
            Pool::new(symbols),
            Err(GameError::PoolTooLarge { size: 65, max: 64 })
        ));
    }
}
