use std::collections::BTreeMap;

use lotofacil_db::models::Draw;

/// Distribuição da soma das 15 dezenas. Tabela esparsa: somente as somas
/// observadas aparecem como chave (intervalo possível: 120 a 270).
pub fn sum_distribution(draws: &[Draw]) -> BTreeMap<u16, u32> {
    let mut counts = BTreeMap::new();
    for draw in draws {
        let total: u16 = draw.numbers.iter().map(|&n| n as u16).sum();
        *counts.entry(total).or_insert(0) += 1;
    }
    counts
}
