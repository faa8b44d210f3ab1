use anyhow::{bail, Context, Result};
use lotofacil_db::rusqlite::Connection;
use std::path::Path;

use lotofacil_db::db::insert_draw;
use lotofacil_db::models::{validate_numbers, Draw, DRAW_SIZE};

struct Columns {
    draw_id: usize,
    date: usize,
    balls: [usize; DRAW_SIZE],
}

fn locate_columns(headers: &csv::StringRecord) -> Result<Columns> {
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("Coluna '{}' não encontrada no cabeçalho", name))
    };

    let draw_id = find("Concurso")?;
    let date = find("Data Sorteio")?;
    let mut balls = [0usize; DRAW_SIZE];
    for (i, slot) in balls.iter_mut().enumerate() {
        *slot = find(&format!("Bola{}", i + 1))?;
    }
    Ok(Columns { draw_id, date, balls })
}

fn parse_record(record: &csv::StringRecord, columns: &Columns) -> Result<Draw> {
    let get = |idx: usize| -> Result<String> {
        record
            .get(idx)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("Campo ausente no índice {}", idx))
    };

    let raw_id = get(columns.draw_id)?;
    let draw_id: u32 = raw_id
        .parse()
        .with_context(|| format!("Concurso inválido: '{}'", raw_id))?;
    let date = get(columns.date)?;

    let mut numbers = [0u8; DRAW_SIZE];
    for (i, slot) in numbers.iter_mut().enumerate() {
        let raw = get(columns.balls[i])?;
        *slot = raw
            .parse::<u8>()
            .with_context(|| format!("Dezena inválida: '{}' (Bola{})", raw, i + 1))?;
    }
    numbers.sort();
    validate_numbers(&numbers)?;

    if date.is_empty() {
        bail!("Data do sorteio vazia (concurso {})", draw_id);
    }

    Ok(Draw { draw_id, date, numbers })
}

pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub errors: u32,
}

pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Não foi possível abrir {:?}", path))?;

    let columns = locate_columns(reader.headers().context("Cabeçalho ilegível")?)?;

    let tx = conn
        .unchecked_transaction()
        .context("Não foi possível iniciar a transação")?;

    let mut result = ImportResult {
        total_records: 0,
        inserted: 0,
        skipped: 0,
        errors: 0,
    };

    for record_result in reader.records() {
        result.total_records += 1;
        match record_result {
            Ok(record) => match parse_record(&record, &columns) {
                Ok(draw) => match insert_draw(&tx, &draw) {
                    Ok(true) => result.inserted += 1,
                    Ok(false) => result.skipped += 1,
                    Err(e) => {
                        eprintln!("Erro ao inserir a linha {}: {}", result.total_records, e);
                        result.errors += 1;
                    }
                },
                Err(e) => {
                    eprintln!("Erro ao processar a linha {}: {:#}", result.total_records, e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                eprintln!("Erro ao ler a linha {}: {}", result.total_records, e);
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Falha no commit")?;
    Ok(result)
}
