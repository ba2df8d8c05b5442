use crate::model::ShiftCode;
use std::collections::BTreeSet;
use thiserror::Error;

/// Côté de départ de la rotation hebdomadaire B↔G.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSide {
    B,
    G,
}

impl StartSide {
    /// Lecture insensible à la casse ; `None` pour tout le reste
    /// (le moteur retombe alors sur B avec un diagnostic INFO).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "B" => Some(StartSide::B),
            "G" => Some(StartSide::G),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StartSide::B => "B",
            StartSide::G => "G",
        }
    }
}

/// Configuration explicite du moteur d'assignation.
///
/// Pas de listes par défaut embarquées : l'appelant fournit tout, le moteur
/// reste une fonction pure de ses entrées.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Associés en shift G tous les jours ouvrés, sans rotation.
    pub g_only: BTreeSet<String>,
    /// Associés alternant B et G une semaine sur deux.
    pub bg_rotate: BTreeSet<String>,
    /// Côté de la première semaine pour le groupe B/G, brut (validé par le
    /// moteur : invalide -> B + diagnostic INFO).
    pub start_side: String,
    /// Ordre du cycle hebdomadaire par défaut.
    pub abc_order: [ShiftCode; 3],
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            g_only: BTreeSet::new(),
            bg_rotate: BTreeSet::new(),
            start_side: "B".to_owned(),
            abc_order: [ShiftCode::A, ShiftCode::B, ShiftCode::C],
        }
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("no calendar for {year}-{month:02}: month must be 1..=12")]
    InvalidMonth { year: i32, month: u32 },
}
