#![forbid(unsafe_code)]
use rosterly::{build_month_grid, ingest, RotationConfig, ShiftCode};

fn cell(s: &str) -> String {
    s.to_owned()
}

/// Tableau minimal : ligne de titre avec `01-Jan` en 7e colonne, ligne
/// d'en-têtes, une ligne de données sans cellule de congé.
fn minimal_table() -> Vec<Vec<String>> {
    vec![
        vec![
            cell(""),
            cell(""),
            cell(""),
            cell(""),
            cell(""),
            cell(""),
            cell("01-Jan"),
        ],
        vec![
            cell("SL.No"),
            cell("Associate Name"),
            cell("Gender"),
            cell("Reporting to"),
            cell("Support"),
            cell("Location"),
            cell("Thu"),
        ],
        vec![
            cell("1"),
            cell("Asha"),
            cell("F"),
            cell("Priya"),
            cell("Payments"),
            cell("Chennai"),
            cell(""),
        ],
    ]
}

#[test]
fn ingest_then_assign_round_trip() {
    let ingested = ingest(&minimal_table(), 2026, 1).unwrap();
    assert_eq!(ingested.employees.len(), 1);
    assert_eq!(ingested.employees[0].name, "Asha");
    assert!(ingested.employees[0].leaves.is_empty());
    assert_eq!(ingested.date_columns.len(), 1);
    assert!(ingested.diagnostics.is_empty());

    let (roster, diags) =
        build_month_grid(&ingested.employees, 2026, 1, &RotationConfig::default()).unwrap();
    assert!(diags.is_empty());
    assert_eq!(roster.days.len(), 31);
    assert_eq!(roster.grid.len(), 1);
    assert_eq!(roster.grid[0].len(), 31);

    // Aucun override : chaque cellule est un code de rotation de base.
    for code in &roster.grid[0] {
        assert!(
            matches!(
                *code,
                ShiftCode::A | ShiftCode::B | ShiftCode::C | ShiftCode::WeekOff
            ),
            "unexpected code {code}"
        );
    }
}

#[test]
fn days_are_ascending_without_gaps() {
    let (roster, _) = build_month_grid(&[], 2026, 1, &RotationConfig::default()).unwrap();
    assert_eq!(roster.days.len(), 31);
    for pair in roster.days.windows(2) {
        assert_eq!(pair[1], pair[0].succ_opt().unwrap());
    }
    // Zéro associé toléré : grille vide, jours complets.
    assert!(roster.grid.is_empty());
}

#[test]
fn leap_february_has_29_days() {
    let (roster, _) = build_month_grid(&[], 2024, 2, &RotationConfig::default()).unwrap();
    assert_eq!(roster.days.len(), 29);
}

#[test]
fn invalid_month_is_fatal() {
    let err = build_month_grid(&[], 2026, 13, &RotationConfig::default());
    assert!(err.is_err());
}
