use anyhow::{bail, Result};

pub const DRAW_SIZE: usize = 15;
pub const POOL_SIZE: u8 = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub draw_id: u32,
    pub date: String,
    pub numbers: [u8; DRAW_SIZE],
}

pub fn validate_numbers(numbers: &[u8; DRAW_SIZE]) -> Result<()> {
    for &n in numbers {
        if n < 1 || n > POOL_SIZE {
            bail!("Dezena {} fora do intervalo (1-{})", n, POOL_SIZE);
        }
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Dezena em duplicata: {}", numbers[i]);
            }
        }
    }
    Ok(())
}
