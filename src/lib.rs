//! Calculatrice Glow — bibliothèque
//!
//! - noyau    : normalisation + évaluation (pur, sans état)
//! - reglages : config.toml (mode d’angle par défaut, taille d’historique, thème)

pub mod noyau;
pub mod reglages;

pub use noyau::{evaluate, format, normalize, AngleMode, EvalError, EvaluationResult};
