#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use rosterly::{build_month_grid, ingest, io, model::ShiftCode, render, RotationConfig};
use std::collections::BTreeSet;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de roster mensuel (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Export de congés (CSV, double en-tête)
    #[arg(long)]
    csv: String,

    /// Année cible (ex: 2026)
    #[arg(long)]
    year: i32,

    /// Mois cible (1-12)
    #[arg(long)]
    month: u32,

    /// Noms en shift G fixe, "nom1,nom2,..."
    #[arg(long)]
    g_only: Option<String>,

    /// Noms en rotation B↔G, "nom1,nom2,..."
    #[arg(long)]
    bg_rotate: Option<String>,

    /// Côté de la première semaine pour le groupe B/G : B ou G
    #[arg(long, default_value = "B")]
    start_side: String,

    /// Ordre du cycle hebdomadaire par défaut
    #[arg(long, default_value = "A,B,C")]
    abc_order: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer la grille du mois et l'écrire (CSV, JSON en option)
    Build {
        #[command(flatten)]
        table: TableArgs,

        /// Grille CSV de sortie (défaut: Roster_<Mois><Année>.csv)
        #[arg(long)]
        out: Option<String>,

        /// Export JSON complet (associés + grille + diagnostics)
        #[arg(long)]
        out_json: Option<String>,

        /// Rapport de validation CSV (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Valider l'entrée et la configuration sans rien écrire
    Check {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Afficher la légende des codes connus
    Legend,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Build {
            table,
            out,
            out_json,
            report,
        } => {
            let (employees, roster, diagnostics) = run_pipeline(&table)?;

            let grid_csv = render::render_grid_csv(&employees, &roster)?;
            let out_path = out.unwrap_or_else(|| {
                format!("Roster_{}.csv", roster.days[0].format("%b%Y"))
            });
            let saved = io::save_with_fallback(&out_path, &grid_csv)?;

            if let Some(path) = out_json {
                let json = render::render_roster_json(&employees, &roster, &diagnostics)?;
                io::save_with_fallback(path, &json)?;
            }
            if let Some(path) = report {
                let rep = render::render_report_csv(&diagnostics)?;
                io::save_with_fallback(path, &rep)?;
            }

            for d in &diagnostics {
                eprintln!("{d}");
            }
            println!(
                "Created: {}  (Employees: {}, Days: {})",
                saved.display(),
                employees.len(),
                roster.days.len()
            );
            // Code 2 = sortie dégradée (diagnostic ERROR présent)
            if diagnostics.has_errors() {
                2
            } else {
                0
            }
        }
        Commands::Check { table } => {
            let (_, _, diagnostics) = run_pipeline(&table)?;
            if diagnostics.is_empty() {
                println!("OK: no findings");
                0
            } else {
                for d in &diagnostics {
                    eprintln!("{d}");
                }
                eprintln!("Found {} finding(s)", diagnostics.len());
                2
            }
        }
        Commands::Legend => {
            for (code, meaning) in render::legend() {
                println!("{code:8} | {meaning}");
            }
            0
        }
    };

    std::process::exit(code);
}

fn run_pipeline(
    table: &TableArgs,
) -> Result<(
    Vec<rosterly::Employee>,
    rosterly::MonthRoster,
    rosterly::Diagnostics,
)> {
    let rows = io::read_table_csv(&table.csv)?;
    let ingested = ingest(&rows, table.year, table.month)?;

    let cfg = RotationConfig {
        g_only: parse_name_list(table.g_only.as_deref()),
        bg_rotate: parse_name_list(table.bg_rotate.as_deref()),
        start_side: table.start_side.clone(),
        abc_order: parse_abc_order(&table.abc_order)?,
    };

    let (roster, engine_diags) = build_month_grid(&ingested.employees, table.year, table.month, &cfg)?;
    let mut diagnostics = ingested.diagnostics;
    diagnostics.extend(engine_diags);

    Ok((ingested.employees, roster, diagnostics))
}

fn parse_name_list(arg: Option<&str>) -> BTreeSet<String> {
    arg.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_abc_order(arg: &str) -> Result<[ShiftCode; 3]> {
    let codes: Vec<ShiftCode> = arg
        .split(',')
        .filter_map(ShiftCode::normalize)
        .collect();
    match <[ShiftCode; 3]>::try_from(codes) {
        Ok(order) => Ok(order),
        Err(got) => bail!(
            "--abc-order needs exactly 3 codes, got {} in '{}'",
            got.len(),
            arg
        ),
    }
}
