// src/noyau/erreur.rs
//
// Échecs d’évaluation.
// L’UI les affiche tous pareil ("Error"), mais on garde la distinction
// pour les journaux et les tests.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Expression impossible à lire (parenthèses, jeton inconnu, opérateurs collés…).
    #[error("syntaxe: {0}")]
    Syntax(String),

    /// Opération indéfinie pour ces entrées (racine d’un négatif, asin hors [-1,1], x/0…).
    #[error("domaine: {0}")]
    Domain(String),

    /// Résultat infini.
    #[error("dépassement: résultat non fini")]
    Overflow,
}

/// Nature d’un échec, sans le message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Domain,
    Overflow,
}

impl EvalError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Domain(_) => ErrorKind::Domain,
            Self::Overflow => ErrorKind::Overflow,
        }
    }
}
