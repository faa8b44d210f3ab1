use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::models::{Draw, DRAW_SIZE};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS draws (
    draw_id   INTEGER PRIMARY KEY,
    date      TEXT NOT NULL,
    bola_1    INTEGER NOT NULL,
    bola_2    INTEGER NOT NULL,
    bola_3    INTEGER NOT NULL,
    bola_4    INTEGER NOT NULL,
    bola_5    INTEGER NOT NULL,
    bola_6    INTEGER NOT NULL,
    bola_7    INTEGER NOT NULL,
    bola_8    INTEGER NOT NULL,
    bola_9    INTEGER NOT NULL,
    bola_10   INTEGER NOT NULL,
    bola_11   INTEGER NOT NULL,
    bola_12   INTEGER NOT NULL,
    bola_13   INTEGER NOT NULL,
    bola_14   INTEGER NOT NULL,
    bola_15   INTEGER NOT NULL
);
";

pub fn db_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("lotofacil.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Não foi possível criar o diretório {:?}", parent))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Não foi possível abrir o banco {:?}", path))?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Falha na migração")?;
    Ok(())
}

pub fn insert_draw(conn: &Connection, draw: &Draw) -> Result<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO draws (draw_id, date, bola_1, bola_2, bola_3, bola_4, bola_5, bola_6, bola_7, bola_8, bola_9, bola_10, bola_11, bola_12, bola_13, bola_14, bola_15)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        rusqlite::params![
            draw.draw_id,
            draw.date,
            draw.numbers[0],
            draw.numbers[1],
            draw.numbers[2],
            draw.numbers[3],
            draw.numbers[4],
            draw.numbers[5],
            draw.numbers[6],
            draw.numbers[7],
            draw.numbers[8],
            draw.numbers[9],
            draw.numbers[10],
            draw.numbers[11],
            draw.numbers[12],
            draw.numbers[13],
            draw.numbers[14],
        ],
    ).context("Falha na inserção")?;
    Ok(changed > 0)
}

fn row_to_draw(row: &rusqlite::Row<'_>) -> rusqlite::Result<Draw> {
    let mut numbers = [0u8; DRAW_SIZE];
    for (i, n) in numbers.iter_mut().enumerate() {
        *n = row.get::<_, u8>(2 + i)?;
    }
    Ok(Draw {
        draw_id: row.get(0)?,
        date: row.get(1)?,
        numbers,
    })
}

pub fn fetch_last_draws(conn: &Connection, limit: u32) -> Result<Vec<Draw>> {
    let mut stmt = conn.prepare(
        "SELECT draw_id, date, bola_1, bola_2, bola_3, bola_4, bola_5, bola_6, bola_7, bola_8, bola_9, bola_10, bola_11, bola_12, bola_13, bola_14, bola_15
         FROM draws ORDER BY draw_id DESC LIMIT ?1"
    )?;
    let draws = stmt
        .query_map([limit], row_to_draw)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(draws)
}

pub fn count_draws(conn: &Connection) -> Result<u32> {
    let count: u32 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
    Ok(count)
}
