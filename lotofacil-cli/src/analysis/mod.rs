pub mod frame;
pub mod frequency;
pub mod generator;
pub mod parity;
pub mod primes;
pub mod repeats;
pub mod sum;

#[cfg(test)]
pub(crate) fn test_draw(draw_id: u32, numbers: [u8; 15]) -> lotofacil_db::models::Draw {
    lotofacil_db::models::Draw {
        draw_id,
        date: format!("{:02}/01/2024", (draw_id % 28) + 1),
        numbers,
    }
}
