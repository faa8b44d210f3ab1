use std::collections::BTreeMap;

use lotofacil_db::models::{Draw, POOL_SIZE};

/// Frequência de cada dezena no histórico. Todas as chaves 1-25 estão
/// presentes, mesmo com contagem zero.
pub fn number_frequency(draws: &[Draw]) -> BTreeMap<u8, u32> {
    let mut counts: BTreeMap<u8, u32> = (1..=POOL_SIZE).map(|n| (n, 0)).collect();
    for draw in draws {
        for &n in &draw.numbers {
            if let Some(count) = counts.get_mut(&n) {
                *count += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_draw;

    #[test]
    fn test_empty_history_all_zero() {
        let counts = number_frequency(&[]);
        assert_eq!(counts.len(), 25);
        assert!(counts.values().all(|&c| c == 0));
    }

    #[test]
    fn test_counts_sum_to_draws_times_15() {
        let draws = vec![
            test_draw(1, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
            test_draw(2, [11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25]),
        ];
        let counts = number_frequency(&draws);
        let total: u32 = counts.values().sum();
        assert_eq!(total, 2 * 15);
        assert_eq!(counts[&11], 2);
        assert_eq!(counts[&1], 1);
        assert_eq!(counts[&25], 1);
    }

    #[test]
    fn test_absent_numbers_keep_zero() {
        let draws = vec![test_draw(1, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])];
        let counts = number_frequency(&draws);
        for n in 16..=25u8 {
            assert_eq!(counts[&n], 0);
        }
    }
}
