mod analysis;
mod display;
mod import;

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::analysis::frame::frame_core_distribution;
use crate::analysis::frequency::number_frequency;
use crate::analysis::generator::generate_game;
use crate::analysis::parity::even_odd_distribution;
use crate::analysis::primes::prime_count_distribution;
use crate::analysis::repeats::repeated_numbers_distribution;
use crate::analysis::sum::sum_distribution;
use crate::display::{
    display_draws, display_even_odd, display_frame_core, display_frequency, display_games,
    display_import_summary, display_primes, display_repeated, display_sum_distribution,
};
use lotofacil_db::db::{count_draws, db_path, fetch_last_draws, insert_draw, migrate, open_db};
use lotofacil_db::models::{validate_numbers, Draw, DRAW_SIZE, POOL_SIZE};

#[derive(Parser)]
#[command(name = "lotofacil", about = "Análise de resultados da Lotofácil")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importar os concursos a partir de um arquivo CSV
    Import {
        /// Caminho do arquivo CSV
        #[arg(short, long, default_value = "assets/lotofacil.csv")]
        file: PathBuf,
    },

    /// Exibir o caminho do banco de dados
    DbPath,

    /// Listar os últimos concursos
    List {
        /// Quantidade de concursos a exibir
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Exibir as estatísticas do histórico
    Stats {
        /// Janela de análise (quantidade de concursos)
        #[arg(short, long, default_value = "1000")]
        window: u32,
    },

    /// Gerar jogos com dezenas fixas e excluídas
    Generate {
        /// Dezenas fixas (ex: 1,2,3)
        #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=25))]
        fixed: Vec<u8>,

        /// Dezenas excluídas (ex: 4,5)
        #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=25))]
        excluded: Vec<u8>,

        /// Quantidade de jogos a gerar
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed para reprodutibilidade
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Adicionar um concurso manualmente
    Add,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { window } => cmd_stats(&conn, window),
        Command::Generate {
            fixed,
            excluded,
            count,
            seed,
        } => cmd_generate(&fixed, &excluded, count, seed),
        Command::Add => cmd_add(&conn),
    }
}

fn cmd_import(conn: &lotofacil_db::rusqlite::Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &lotofacil_db::rusqlite::Connection, last: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Banco vazio. Execute primeiro: lotofacil import");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(conn: &lotofacil_db::rusqlite::Connection, window: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Banco vazio. Execute primeiro: lotofacil import");
        return Ok(());
    }
    let effective_window = window.min(n);
    let draws = fetch_last_draws(conn, effective_window)?;

    display_frequency(&number_frequency(&draws), effective_window);
    display_even_odd(&even_odd_distribution(&draws));
    display_sum_distribution(&sum_distribution(&draws));
    display_repeated(&repeated_numbers_distribution(&draws));
    display_primes(&prime_count_distribution(&draws));
    display_frame_core(&frame_core_distribution(&draws));
    Ok(())
}

fn cmd_generate(fixed: &[u8], excluded: &[u8], count: usize, seed: Option<u64>) -> Result<()> {
    let fixed: BTreeSet<u8> = fixed.iter().copied().collect();
    let excluded: BTreeSet<u8> = excluded.iter().copied().collect();

    let mut games = Vec::with_capacity(count);
    for i in 0..count {
        // Com seed, cada jogo usa uma seed derivada para não repetir o mesmo.
        let game_seed = seed.map(|s| s.wrapping_add(i as u64));
        games.push(generate_game(&fixed, &excluded, game_seed)?);
    }
    display_games(&games);
    Ok(())
}

fn cmd_add(conn: &lotofacil_db::rusqlite::Connection) -> Result<()> {
    println!("Adicionar um concurso manualmente\n");

    let raw_id = prompt("Número do concurso (ex: 3000) : ")?;
    let draw_id: u32 = raw_id
        .parse()
        .with_context(|| format!("Número de concurso inválido: '{}'", raw_id))?;

    let date = prompt("Data do sorteio (DD/MM/AAAA) : ")?;
    if date.split('/').count() != 3 {
        bail!("Formato de data inválido");
    }

    let numbers = prompt_numbers()?;

    let draw = Draw {
        draw_id,
        date,
        numbers,
    };

    println!("\nConcurso a inserir:");
    display_draws(&[draw.clone()]);

    let confirm = prompt("\nConfirmar a inserção? (s/n) : ")?;
    if confirm.trim().to_lowercase() == "s" {
        let inserted = insert_draw(conn, &draw)?;
        if inserted {
            println!("Concurso inserido com sucesso.");
        } else {
            println!("Esse concurso já existe (duplicado ignorado).");
        }
    } else {
        println!("Inserção cancelada.");
    }

    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erro de leitura")?;
    Ok(input.trim().to_string())
}

fn prompt_numbers() -> Result<[u8; DRAW_SIZE]> {
    loop {
        let input = prompt("15 dezenas (separadas por espaço, 1-25) : ")?;
        let nums: Result<Vec<u8>, _> = input.split_whitespace().map(|s| s.parse::<u8>()).collect();
        match nums {
            Ok(v) if v.len() == DRAW_SIZE => {
                let mut arr = [0u8; DRAW_SIZE];
                arr.copy_from_slice(&v);
                arr.sort();
                if validate_numbers(&arr).is_ok() {
                    return Ok(arr);
                }
                println!(
                    "Dezenas inválidas (1-{}, sem duplicatas). Tente novamente.",
                    POOL_SIZE
                );
            }
            _ => println!("Digite exatamente {} dezenas. Tente novamente.", DRAW_SIZE),
        }
    }
}
