//! Ingestion du tableau « leave tracker » à double en-tête.
//!
//! Ligne 1 : libellés de dates (`01-Jan`, `02-Jan`, …) à partir de la 7e
//! colonne. Ligne 2 : en-têtes statiques (ignorés, la forme suffit).
//! Lignes suivantes : un associé par ligne, toute cellule non vide sous une
//! colonne datée est un code qui écrase le shift calculé.

use crate::diag::Diagnostics;
use crate::model::{DateColumns, Employee, ShiftCode};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use thiserror::Error;

/// Nombre de colonnes statiques en tête de ligne :
/// SL.No, Associate Name, Gender, Reporting to, Support, Location.
pub const STATIC_COLUMNS: usize = 6;

/// Entrée lisible mais qui n'est pas un tableau de congés valide.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("input table has {rows} row(s); need a title row, a header row and at least one data row")]
    MalformedInput { rows: usize },
}

/// Résultat d'ingestion : toujours best-effort, les problèmes récupérables
/// partent dans `diagnostics`.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub employees: Vec<Employee>,
    pub date_columns: DateColumns,
    pub diagnostics: Diagnostics,
}

/// Ingestion complète : résolution des colonnes datées puis admission des
/// lignes de données.
pub fn ingest(rows: &[Vec<String>], year: i32, month: u32) -> Result<Ingested, IngestError> {
    if rows.len() < 3 {
        return Err(IngestError::MalformedInput { rows: rows.len() });
    }

    let mut diagnostics = Diagnostics::new();
    let title_row = &rows[0];
    let data_rows = &rows[2..];

    let date_columns = resolve_date_columns(title_row, year, month);
    if date_columns.is_empty() {
        diagnostics.error(format!(
            "No date columns in title row matched {month:02}-{year}"
        ));
        // On continue : les champs statiques restent exploitables.
    }

    let mut employees = Vec::new();
    let mut seen_names: BTreeSet<String> = BTreeSet::new();

    for (offset, raw) in data_rows.iter().enumerate() {
        // Numéro de ligne 1-based dans le fichier complet.
        let rnum = offset + 3;

        if raw.iter().all(|cell| cell.trim().is_empty()) {
            continue; // ligne vide / séparateur
        }

        let row = pad_row(raw, &date_columns);

        let serial = row[0].trim().to_owned();
        let name = row[1].trim().to_owned();
        let gender = row[2].trim().to_owned();
        let reporting_to = row[3].trim().to_owned();
        let support = row[4].trim().to_owned();
        let location = row[5].trim().to_owned();

        if name.is_empty() {
            diagnostics.warning(format!("Row {rnum}: empty Associate Name -> skipped"));
            continue;
        }
        if !seen_names.insert(name.clone()) {
            diagnostics.warning(format!("Duplicate associate name '{name}' (row {rnum})"));
        }

        let mut leaves = std::collections::BTreeMap::new();
        for (&ci, &day) in &date_columns {
            if let Some(code) = ShiftCode::normalize(&row[ci]) {
                leaves.insert(day, code);
            }
        }

        employees.push(Employee {
            serial,
            name,
            gender,
            reporting_to,
            support,
            location,
            leaves,
        });
    }

    if employees.is_empty() {
        diagnostics.error("No employees parsed from input table");
    }

    Ok(Ingested {
        employees,
        date_columns,
        diagnostics,
    })
}

/// Associe les libellés `jj-MoisAbrégé` de la ligne de titre à l'année
/// cible ; seules les dates tombant dans le mois cible sont conservées.
/// Les libellés illisibles ou hors mois sont ignorés sans diagnostic.
fn resolve_date_columns(title_row: &[String], year: i32, month: u32) -> DateColumns {
    let mut out = DateColumns::new();
    for (i, lbl) in title_row.iter().enumerate().skip(STATIC_COLUMNS) {
        let lbl = lbl.trim();
        if lbl.is_empty() {
            continue;
        }
        // exemples : 01-Jan, 31-Jan
        let parsed = NaiveDate::parse_from_str(&format!("{lbl}-{year}"), "%d-%b-%Y");
        if let Ok(d) = parsed {
            if d.month() == month {
                out.insert(i, d);
            }
        }
    }
    out
}

/// Complète une ligne courte par des cellules vides jusqu'au dernier index
/// requis ; l'extraction de champ ne doit jamais sortir des bornes.
fn pad_row(raw: &[String], date_columns: &DateColumns) -> Vec<String> {
    let need = date_columns
        .keys()
        .next_back()
        .copied()
        .unwrap_or(STATIC_COLUMNS - 1);
    let mut row = raw.to_vec();
    if row.len() <= need {
        row.resize(need + 1, String::new());
    }
    row
}
