//! Moteur d'assignation : calcule le code effectif de chaque associé pour
//! chaque jour du mois cible.
//!
//! Fonction pure de ses entrées : pas d'horloge, pas d'aléatoire, pas
//! d'itération non ordonnée — à entrées fixes, grille fixe.

mod assignment;
mod types;
mod util;

pub use types::{RosterError, RotationConfig, StartSide};

use crate::diag::Diagnostics;
use crate::model::{Employee, MonthRoster};
use std::collections::BTreeSet;

/// Construit la grille du mois.
///
/// Précédence par associé et par jour :
/// 1. samedi/dimanche -> `WO`, quel que soit le groupe ;
/// 2. sinon règle de groupe (G-only, rotation B/G, cycle ABC) clé sur la
///    semaine relative ancrée au lundi de la semaine du 1er du mois ;
/// 3. un congé enregistré pour la date exacte écrase tout.
///
/// Tolère zéro associé (grille vide, `days` complet quand même).
pub fn build_month_grid(
    employees: &[Employee],
    year: i32,
    month: u32,
    cfg: &RotationConfig,
) -> Result<(MonthRoster, Diagnostics), RosterError> {
    let mut diagnostics = Diagnostics::new();

    let days = util::month_days(year, month).ok_or(RosterError::InvalidMonth { year, month })?;
    let base_monday = util::monday_of(days[0]);

    let start_side = match StartSide::parse(&cfg.start_side) {
        Some(side) => side,
        None => {
            diagnostics.info(format!(
                "start side '{}' not in {{B,G}}; defaulted to B",
                cfg.start_side
            ));
            StartSide::B
        }
    };

    validate_membership(employees, cfg, &mut diagnostics);

    let grid = assignment::fill_grid(employees, &days, base_monday, start_side, cfg);

    Ok((MonthRoster { days, grid }, diagnostics))
}

/// Signale les noms configurés absents de la table, et les noms présents
/// dans les deux groupes (G-only prime, mais l'incohérence est visible).
/// Les BTreeSet garantissent un ordre d'émission trié et stable.
fn validate_membership(employees: &[Employee], cfg: &RotationConfig, diagnostics: &mut Diagnostics) {
    let emp_names: BTreeSet<&str> = employees.iter().map(|e| e.name.as_str()).collect();

    for name in cfg.g_only.iter().filter(|n| !emp_names.contains(n.as_str())) {
        diagnostics.warning(format!("G-only name not in input table: '{name}'"));
    }
    for name in cfg
        .bg_rotate
        .iter()
        .filter(|n| !emp_names.contains(n.as_str()))
    {
        diagnostics.warning(format!("B/G-rotate name not in input table: '{name}'"));
    }
    for name in cfg.g_only.intersection(&cfg.bg_rotate) {
        diagnostics.warning(format!(
            "'{name}' listed in both G-only and B/G-rotate; G-only rule applies"
        ));
    }
}
