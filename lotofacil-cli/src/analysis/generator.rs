use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use lotofacil_db::models::{DRAW_SIZE, POOL_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Não é possível fixar mais de 15 dezenas ({0} fixadas)")]
    TooManyFixed(usize),

    #[error("As dezenas {} não podem ser fixadas e excluídas ao mesmo tempo", join_numbers(.0))]
    FixedExcludedConflict(Vec<u8>),

    #[error("Dezenas disponíveis insuficientes: {available} disponíveis para completar {needed} dezenas")]
    InsufficientAvailableNumbers { available: usize, needed: usize },

    #[error("Erro interno: mais dezenas fixadas do que o permitido")]
    InternalInvariantViolation,
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Gera um jogo de 15 dezenas contendo todas as `fixed` e nenhuma das
/// `excluded`. Com `seed`, o resultado é reprodutível.
pub fn generate_game(
    fixed: &BTreeSet<u8>,
    excluded: &BTreeSet<u8>,
    seed: Option<u64>,
) -> Result<Vec<u8>, GenerationError> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    generate_game_with(fixed, excluded, &mut rng)
}

pub fn generate_game_with<R: Rng>(
    fixed: &BTreeSet<u8>,
    excluded: &BTreeSet<u8>,
    rng: &mut R,
) -> Result<Vec<u8>, GenerationError> {
    if fixed.len() > DRAW_SIZE {
        return Err(GenerationError::TooManyFixed(fixed.len()));
    }

    let conflicts: Vec<u8> = fixed.intersection(excluded).copied().collect();
    if !conflicts.is_empty() {
        return Err(GenerationError::FixedExcludedConflict(conflicts));
    }

    let mut available: Vec<u8> = (1..=POOL_SIZE)
        .filter(|n| !fixed.contains(n) && !excluded.contains(n))
        .collect();

    let needed = DRAW_SIZE
        .checked_sub(fixed.len())
        .ok_or(GenerationError::InternalInvariantViolation)?;
    if available.len() < needed {
        return Err(GenerationError::InsufficientAvailableNumbers {
            available: available.len(),
            needed,
        });
    }

    let mut game: Vec<u8> = fixed.iter().copied().collect();
    for _ in 0..needed {
        let idx = rng.random_range(0..available.len());
        game.push(available.swap_remove(idx));
    }
    game.sort();
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(numbers: &[u8]) -> BTreeSet<u8> {
        numbers.iter().copied().collect()
    }

    #[test]
    fn test_contains_fixed_and_is_valid() {
        let fixed = set(&[1, 2, 3]);
        let excluded = set(&[]);
        for seed in 0..20 {
            let game = generate_game(&fixed, &excluded, Some(seed)).unwrap();
            assert_eq!(game.len(), 15);
            assert!(game.windows(2).all(|w| w[0] < w[1]), "ordenado e sem duplicatas");
            assert!(game.iter().all(|&n| (1..=25).contains(&n)));
            assert!(fixed.iter().all(|n| game.contains(n)));
        }
    }

    #[test]
    fn test_excluded_never_drawn() {
        let fixed = set(&[]);
        let excluded = set(&[5, 10, 15, 20, 25]);
        for seed in 0..20 {
            let game = generate_game(&fixed, &excluded, Some(seed)).unwrap();
            assert!(excluded.iter().all(|n| !game.contains(n)));
        }
    }

    #[test]
    fn test_too_many_fixed() {
        let fixed = set(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        let err = generate_game(&fixed, &set(&[]), Some(0)).unwrap_err();
        assert_eq!(err, GenerationError::TooManyFixed(16));
    }

    #[test]
    fn test_fixed_excluded_conflict_names_numbers() {
        let err = generate_game(&set(&[1]), &set(&[1]), Some(0)).unwrap_err();
        assert_eq!(err, GenerationError::FixedExcludedConflict(vec![1]));
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_insufficient_available() {
        // 11 dezenas excluídas: restam 14 disponíveis para 15 necessárias.
        let excluded = set(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        let err = generate_game(&set(&[]), &excluded, Some(0)).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InsufficientAvailableNumbers {
                available: 14,
                needed: 15,
            }
        );
    }

    #[test]
    fn test_exactly_enough_available() {
        // 10 excluídas: sobram exatamente as 15 restantes.
        let excluded = set(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let game = generate_game(&set(&[]), &excluded, Some(0)).unwrap();
        assert_eq!(game, (11..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn test_fifteen_fixed_is_deterministic() {
        let fixed: BTreeSet<u8> = (1..=15).collect();
        let game = generate_game(&fixed, &set(&[]), None).unwrap();
        assert_eq!(game, (1..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let fixed = set(&[7, 14]);
        let excluded = set(&[1, 25]);
        let first = generate_game(&fixed, &excluded, Some(42)).unwrap();
        let second = generate_game(&fixed, &excluded, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_order_too_many_fixed_wins() {
        // 16 fixadas e conflito ao mesmo tempo: a primeira verificação ganha.
        let fixed = set(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        let err = generate_game(&fixed, &set(&[1]), Some(0)).unwrap_err();
        assert_eq!(err, GenerationError::TooManyFixed(16));
    }
}
