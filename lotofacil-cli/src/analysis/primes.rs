use std::collections::BTreeMap;

use lotofacil_db::models::Draw;

/// Primos do universo 1-25. Constante do domínio, não derivada em execução.
pub const PRIMES: [u8; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 23];

pub fn prime_count_distribution(draws: &[Draw]) -> BTreeMap<u8, u32> {
    let mut counts = BTreeMap::new();
    for draw in draws {
        let primes = draw.numbers.iter().filter(|n| PRIMES.contains(n)).count() as u8;
        *counts.entry(primes).or_insert(0) += 1;
    }
    counts
}
