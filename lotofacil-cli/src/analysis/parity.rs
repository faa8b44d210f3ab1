use std::collections::BTreeMap;

use lotofacil_db::models::{Draw, DRAW_SIZE};

/// Divisão pares/ímpares de um concurso. `even + odd == 15` sempre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParitySplit {
    pub even: u8,
    pub odd: u8,
}

pub fn even_odd_distribution(draws: &[Draw]) -> BTreeMap<ParitySplit, u32> {
    let mut counts = BTreeMap::new();
    for draw in draws {
        let even = draw.numbers.iter().filter(|&&n| n % 2 == 0).count() as u8;
        let split = ParitySplit {
            even,
            odd: DRAW_SIZE as u8 - even,
        };
        *counts.entry(split).or_insert(0) += 1;
    }
    counts
}
