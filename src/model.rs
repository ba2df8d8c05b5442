use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Code de shift ou de congé d'une cellule du roster.
///
/// Le vocabulaire connu est fixe mais `Custom` laisse passer n'importe quel
/// code métier futur (SL, CL, PL…) : les consommateurs ne doivent jamais
/// échouer sur un code inconnu.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ShiftCode {
    A,
    B,
    C,
    G,
    WeekOff,
    Holiday,
    CompOffHoliday,
    Leave,
    AdLeave,
    Custom(String),
}

impl ShiftCode {
    /// Forme canonique affichée dans la grille.
    pub fn as_str(&self) -> &str {
        match self {
            ShiftCode::A => "A",
            ShiftCode::B => "B",
            ShiftCode::C => "C",
            ShiftCode::G => "G",
            ShiftCode::WeekOff => "WO",
            ShiftCode::Holiday => "HO",
            ShiftCode::CompOffHoliday => "CO-HO",
            ShiftCode::Leave => "Leave",
            ShiftCode::AdLeave => "AD-Leave",
            ShiftCode::Custom(s) => s,
        }
    }

    /// Normalise une cellule brute vers sa forme canonique.
    ///
    /// Totale et idempotente : `normalize(code.as_str())` redonne `code`.
    /// Une cellule vide (ou blanche) signifie « pas d'override » -> `None`.
    pub fn normalize(raw: &str) -> Option<ShiftCode> {
        let s: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if s.is_empty() {
            return None;
        }
        let code = match s.as_str() {
            "A" => ShiftCode::A,
            "B" => ShiftCode::B,
            "C" => ShiftCode::C,
            "G" => ShiftCode::G,
            "WO" | "WEEKOFF" | "WEEK-OFF" | "OFF" => ShiftCode::WeekOff,
            "HO" | "HOLIDAY" => ShiftCode::Holiday,
            "CO-HO" | "COHO" => ShiftCode::CompOffHoliday,
            "LEAVE" => ShiftCode::Leave,
            "AD-LEAVE" | "ADLEAVE" => ShiftCode::AdLeave,
            _ => ShiftCode::Custom(s),
        };
        Some(code)
    }

    /// Signification du code (contenu de la feuille légende d'origine).
    pub fn meaning(&self) -> &str {
        match self {
            ShiftCode::A => "Shift A (06:30-15:30 IST)",
            ShiftCode::B => "Shift B (14:00-23:00 IST)",
            ShiftCode::C => "Shift C (22:00-07:00 IST)",
            ShiftCode::G => "General (11:00-20:00 IST)",
            ShiftCode::WeekOff => "Weekly Off (Saturday, Sunday)",
            ShiftCode::Holiday => "Holiday",
            ShiftCode::CompOffHoliday => "Comp-Off on Holiday",
            ShiftCode::Leave => "Leave (generic, from the input table)",
            ShiftCode::AdLeave => "Additional/Admin Leave",
            ShiftCode::Custom(s) => s,
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ShiftCode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "A" => ShiftCode::A,
            "B" => ShiftCode::B,
            "C" => ShiftCode::C,
            "G" => ShiftCode::G,
            "WO" => ShiftCode::WeekOff,
            "HO" => ShiftCode::Holiday,
            "CO-HO" => ShiftCode::CompOffHoliday,
            "Leave" => ShiftCode::Leave,
            "AD-Leave" => ShiftCode::AdLeave,
            _ => ShiftCode::Custom(s),
        }
    }
}

impl From<ShiftCode> for String {
    fn from(code: ShiftCode) -> Self {
        code.as_str().to_owned()
    }
}

/// Colonnes datées du tableau d'entrée : index de colonne -> jour du mois
/// cible. Peut être vide (état dégradé : aucun override possible).
pub type DateColumns = BTreeMap<usize, NaiveDate>;

/// Un associé du roster, construit une fois à l'ingestion puis immuable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub serial: String,
    /// Clé d'identification dans un run ; doublons tolérés mais signalés.
    pub name: String,
    pub gender: String,
    pub reporting_to: String,
    pub support: String,
    pub location: String,
    /// Overrides congés/fériés : seuls les jours à cellule non vide figurent ici.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub leaves: BTreeMap<NaiveDate, ShiftCode>,
}

/// Grille calculée : une ligne par associé, une colonne par jour du mois.
///
/// Invariant : `grid` a une ligne par associé (même ordre) et chaque ligne a
/// `days.len()` cellules ; `days` couvre tout le mois en ordre croissant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRoster {
    pub days: Vec<NaiveDate>,
    pub grid: Vec<Vec<ShiftCode>>,
}

impl MonthRoster {
    pub fn code_at(&self, employee: usize, day: usize) -> Option<&ShiftCode> {
        self.grid.get(employee)?.get(day)
    }
}
