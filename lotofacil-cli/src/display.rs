use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::analysis::frame::FrameSplit;
use crate::analysis::parity::ParitySplit;
use crate::import::ImportResult;
use lotofacil_db::models::Draw;

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn numbers_str(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Nenhum concurso para exibir.");
        return;
    }

    let mut table = new_table(vec!["Concurso", "Data", "Dezenas"]);
    for draw in draws {
        table.add_row(vec![
            draw.draw_id.to_string(),
            draw.date.clone(),
            numbers_str(&draw.numbers),
        ]);
    }
    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Importação concluída:");
    println!("  Total de linhas lidas : {}", result.total_records);
    println!("  Inseridos             : {}", result.inserted);
    println!("  Duplicados ignorados  : {}", result.skipped);
    if result.errors > 0 {
        println!("  Erros                 : {}", result.errors);
    }
}

pub fn display_frequency(counts: &BTreeMap<u8, u32>, window: u32) {
    println!("\n📊 Frequência das dezenas ({} últimos concursos)\n", window);

    let mut table = new_table(vec!["Dezena", "Frequência"]);
    let mut sorted: Vec<(u8, u32)> = counts.iter().map(|(&n, &c)| (n, c)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (number, count) in &sorted {
        table.add_row(vec![format!("{:02}", number), count.to_string()]);
    }
    println!("{table}");
}

pub fn display_even_odd(counts: &BTreeMap<ParitySplit, u32>) {
    println!("\n── Distribuição Pares / Ímpares ──");

    let mut table = new_table(vec!["Pares", "Ímpares", "Concursos"]);
    for (split, count) in counts {
        table.add_row(vec![
            split.even.to_string(),
            split.odd.to_string(),
            count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_sum_distribution(counts: &BTreeMap<u16, u32>) {
    println!("\n── Distribuição da soma das dezenas ──");

    let mut table = new_table(vec!["Soma", "Ocorrências"]);
    for (sum, count) in counts {
        table.add_row(vec![sum.to_string(), count.to_string()]);
    }
    println!("{table}");
}

pub fn display_repeated(counts: &BTreeMap<u8, u32>) {
    println!("\n── Distribuição de dezenas repetidas do concurso anterior ──");

    if counts.is_empty() {
        println!("Histórico insuficiente (são necessários ao menos 2 concursos).");
        return;
    }

    let mut table = new_table(vec!["Repetidas", "Concursos"]);
    for (repeated, count) in counts {
        table.add_row(vec![repeated.to_string(), count.to_string()]);
    }
    println!("{table}");
}

pub fn display_primes(counts: &BTreeMap<u8, u32>) {
    println!("\n── Distribuição de números primos ──");

    let mut table = new_table(vec!["Primos", "Concursos"]);
    for (primes, count) in counts {
        table.add_row(vec![primes.to_string(), count.to_string()]);
    }
    println!("{table}");
}

pub fn display_frame_core(counts: &BTreeMap<FrameSplit, u32>) {
    println!("\n── Distribuição Moldura / Miolo ──");

    let mut table = new_table(vec!["Moldura", "Miolo", "Concursos"]);
    for (split, count) in counts {
        table.add_row(vec![
            split.frame.to_string(),
            split.core.to_string(),
            count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_games(games: &[Vec<u8>]) {
    println!("\n🎲 Jogos gerados\n");

    let mut table = new_table(vec!["#", "Dezenas"]);
    for (i, game) in games.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), numbers_str(game)]);
    }
    println!("{table}");
}
