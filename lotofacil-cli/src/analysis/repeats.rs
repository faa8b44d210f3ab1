use std::collections::BTreeMap;

use lotofacil_db::models::Draw;

/// Distribuição da quantidade de dezenas repetidas em relação ao concurso
/// imediatamente anterior. O histórico é ordenado internamente por
/// `draw_id` crescente; a ordem de chegada não importa. Menos de dois
/// concursos produz uma tabela vazia.
pub fn repeated_numbers_distribution(draws: &[Draw]) -> BTreeMap<u8, u32> {
    let mut counts = BTreeMap::new();
    if draws.len() < 2 {
        return counts;
    }

    let mut ordered: Vec<&Draw> = draws.iter().collect();
    ordered.sort_by_key(|d| d.draw_id);

    for pair in ordered.windows(2) {
        let previous = &pair[0].numbers;
        let repeated = pair[1]
            .numbers
            .iter()
            .filter(|n| previous.contains(n))
            .count() as u8;
        *counts.entry(repeated).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_draw;

    #[test]
    fn test_fewer_than_two_draws() {
        assert!(repeated_numbers_distribution(&[]).is_empty());
        let one = vec![test_draw(1, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])];
        assert!(repeated_numbers_distribution(&one).is_empty());
    }

    #[test]
    fn test_fourteen_repeated() {
        let draws = vec![
            test_draw(1, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
            test_draw(2, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16]),
        ];
        let counts = repeated_numbers_distribution(&draws);
        assert_eq!(counts[&14], 1);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_sorts_by_draw_id_internally() {
        // Mesmo histórico, fornecido fora de ordem.
        let draws = vec![
            test_draw(3, [11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25]),
            test_draw(1, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
            test_draw(2, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16]),
        ];
        let counts = repeated_numbers_distribution(&draws);
        // 1 -> 2: 14 repetidas; 2 -> 3: dezenas 11..14 e 16, ou seja 5.
        assert_eq!(counts[&14], 1);
        assert_eq!(counts[&5], 1);
        let total: u32 = counts.values().sum();
        assert_eq!(total, draws.len() as u32 - 1);
    }

    #[test]
    fn test_input_not_mutated() {
        let draws = vec![
            test_draw(2, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16]),
            test_draw(1, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
        ];
        let before = draws.clone();
        let first = repeated_numbers_distribution(&draws);
        let second = repeated_numbers_distribution(&draws);
        assert_eq!(draws, before);
        assert_eq!(first, second);
    }
}
