use std::collections::BTreeMap;

use lotofacil_db::models::{Draw, DRAW_SIZE};

/// Moldura do volante 5x5: a borda da cartela numerada de 1 a 25 por linha.
/// O miolo é o complemento de 9 dezenas {7, 8, 9, 12, 13, 14, 17, 18, 19}.
pub const FRAME: [u8; 16] = [1, 2, 3, 4, 5, 6, 10, 11, 15, 16, 20, 21, 22, 23, 24, 25];

/// Divisão moldura/miolo de um concurso. `frame + core == 15` sempre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameSplit {
    pub frame: u8,
    pub core: u8,
}

pub fn frame_core_distribution(draws: &[Draw]) -> BTreeMap<FrameSplit, u32> {
    let mut counts = BTreeMap::new();
    for draw in draws {
        let frame = draw.numbers.iter().filter(|n| FRAME.contains(n)).count() as u8;
        let split = FrameSplit {
            frame,
            core: DRAW_SIZE as u8 - frame,
        };
        *counts.entry(split).or_insert(0) += 1;
    }
    counts
}
