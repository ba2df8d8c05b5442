//! Rendu du roster calculé : CSV de grille (avec bloc de totaux), rapport de
//! validation, export JSON, légende. Pas de style ici — le cœur produit des
//! données, la mise en forme appartient au consommateur.

use crate::diag::Diagnostics;
use crate::model::{Employee, MonthRoster, ShiftCode};
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::collections::BTreeSet;

const STATIC_HEADERS: [&str; 6] = [
    "SL.No",
    "Associate Name",
    "Gender",
    "Reporting to",
    "Support",
    "Location",
];

/// Vocabulaire connu, dans l'ordre du bloc de totaux d'origine.
const TOTAL_CODES: [ShiftCode; 9] = [
    ShiftCode::G,
    ShiftCode::A,
    ShiftCode::B,
    ShiftCode::C,
    ShiftCode::WeekOff,
    ShiftCode::Leave,
    ShiftCode::Holiday,
    ShiftCode::CompOffHoliday,
    ShiftCode::AdLeave,
];

/// Grille mensuelle en CSV : en-têtes statiques + un jour par colonne, une
/// ligne par associé, puis un bloc « <code> Count » par jour.
pub fn render_grid_csv(employees: &[Employee], roster: &MonthRoster) -> Result<Vec<u8>> {
    let mut w = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    let width = STATIC_HEADERS.len() + roster.days.len();

    let mut header: Vec<String> = STATIC_HEADERS.iter().map(|h| h.to_string()).collect();
    header.extend(roster.days.iter().map(|d| d.format("%d/%m/%Y").to_string()));
    w.write_record(&header)?;

    for (emp, codes) in employees.iter().zip(&roster.grid) {
        let mut rec = vec![
            emp.serial.clone(),
            emp.name.clone(),
            emp.gender.clone(),
            emp.reporting_to.clone(),
            emp.support.clone(),
            emp.location.clone(),
        ];
        rec.extend(codes.iter().map(|c| c.as_str().to_owned()));
        w.write_record(&rec)?;
    }

    // Ligne vide entre la grille et les totaux, comme le classeur d'origine.
    w.write_record(vec![String::new(); width])?;
    for code in totals_vocabulary(roster) {
        let mut rec = vec![String::new(); width];
        rec[0] = format!("{code} Count");
        for (j, cell) in rec[STATIC_HEADERS.len()..].iter_mut().enumerate() {
            let count = roster.grid.iter().filter(|row| row[j] == code).count();
            *cell = count.to_string();
        }
        w.write_record(&rec)?;
    }

    w.flush()?;
    w.into_inner()
        .map_err(|e| anyhow::anyhow!("finishing grid csv: {e}"))
}

/// Codes à totaliser : le vocabulaire connu, puis tout code custom observé
/// dans la grille (ensemble ouvert, ordre trié stable).
fn totals_vocabulary(roster: &MonthRoster) -> Vec<ShiftCode> {
    let mut out: Vec<ShiftCode> = TOTAL_CODES.to_vec();
    let customs: BTreeSet<&ShiftCode> = roster
        .grid
        .iter()
        .flatten()
        .filter(|c| matches!(c, ShiftCode::Custom(_)))
        .collect();
    out.extend(customs.into_iter().cloned());
    out
}

/// Rapport de validation en CSV (`Level,Message`), dans l'ordre d'émission.
pub fn render_report_csv(diagnostics: &Diagnostics) -> Result<Vec<u8>> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(["Level", "Message"])?;
    for d in diagnostics {
        w.write_record([d.level.to_string().as_str(), d.message.as_str()])?;
    }
    w.flush()?;
    w.into_inner()
        .map_err(|e| anyhow::anyhow!("finishing report csv: {e}"))
}

#[derive(Serialize)]
struct RosterDocument<'a> {
    employees: &'a [Employee],
    days: &'a [chrono::NaiveDate],
    grid: &'a [Vec<ShiftCode>],
    diagnostics: &'a Diagnostics,
}

/// Export JSON complet (associés + grille + diagnostics), jolie mise en forme.
pub fn render_roster_json(
    employees: &[Employee],
    roster: &MonthRoster,
    diagnostics: &Diagnostics,
) -> Result<Vec<u8>> {
    let doc = RosterDocument {
        employees,
        days: &roster.days,
        grid: &roster.grid,
        diagnostics,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}

/// Légende des codes connus (code, signification).
pub fn legend() -> Vec<(String, String)> {
    TOTAL_CODES
        .iter()
        .map(|c| (c.as_str().to_owned(), c.meaning().to_owned()))
        .collect()
}
