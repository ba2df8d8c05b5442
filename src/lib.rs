#![forbid(unsafe_code)]
//! Rosterly — génération d'un roster mensuel de shifts depuis un export de
//! congés tabulaire (sans BD).
//!
//! - Ingestion du tableau à double en-tête (libellés de dates + colonnes).
//! - Moteur d'assignation : week-ends, trois règles de rotation, overrides.
//! - Diagnostics accumulés en valeur, jamais bloquants.
//! - Rendu CSV/JSON délégué à `render`, le cœur reste pur.

pub mod diag;
pub mod engine;
pub mod ingest;
pub mod io;
pub mod model;
pub mod render;

pub use diag::{Diagnostic, Diagnostics, Level};
pub use engine::{build_month_grid, RosterError, RotationConfig, StartSide};
pub use ingest::{ingest, IngestError, Ingested};
pub use model::{DateColumns, Employee, MonthRoster, ShiftCode};
