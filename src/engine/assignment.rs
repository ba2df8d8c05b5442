use super::types::{RotationConfig, StartSide};
use super::util;
use crate::model::{Employee, ShiftCode};
use chrono::{Datelike, NaiveDate, Weekday};

/// Remplit la grille ligne par ligne, dans l'ordre des associés fournis.
pub(super) fn fill_grid(
    employees: &[Employee],
    days: &[NaiveDate],
    base_monday: NaiveDate,
    start_side: StartSide,
    cfg: &RotationConfig,
) -> Vec<Vec<ShiftCode>> {
    employees
        .iter()
        .map(|emp| {
            days.iter()
                .map(|&day| {
                    // L'override congé remplace le code calculé, sans condition.
                    if let Some(code) = emp.leaves.get(&day) {
                        return code.clone();
                    }
                    base_code(&emp.name, day, base_monday, start_side, cfg)
                })
                .collect()
        })
        .collect()
}

/// Code de base d'un jour : week-end, puis exactement une des trois règles
/// de groupe, testées dans cet ordre (G-only prime sur B/G-rotate).
fn base_code(
    name: &str,
    day: NaiveDate,
    base_monday: NaiveDate,
    start_side: StartSide,
    cfg: &RotationConfig,
) -> ShiftCode {
    if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        return ShiftCode::WeekOff;
    }

    if cfg.g_only.contains(name) {
        return ShiftCode::G;
    }

    let rel_week = util::relative_week(base_monday, day);

    if cfg.bg_rotate.contains(name) {
        let even = rel_week % 2 == 0;
        return match (start_side, even) {
            (StartSide::B, true) | (StartSide::G, false) => ShiftCode::B,
            (StartSide::B, false) | (StartSide::G, true) => ShiftCode::G,
        };
    }

    cfg.abc_order[(rel_week % 3) as usize].clone()
}
