//! Noyau — normalisation + évaluation
//!
//! Organisation interne :
//! - normalise.rs : texte utilisateur -> forme canonique (règles 1 à 6)
//! - trig.rs      : mode d’angle + réécriture trig (règle 7)
//! - jetons.rs    : tokenisation de la forme canonique
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : AST flottant + liste blanche fonctions/constantes
//! - eval.rs      : pipeline complet + nettoyage + factorielle
//! - format.rs    : affichage (entier ou 12 chiffres significatifs)
//! - erreur.rs    : EvalError

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErrorKind, EvalError};
pub use eval::{compute, evaluate, factorial, to_number_safe, EvaluationResult};
pub use format::format;
pub use jetons::tokenize;
pub use normalise::normalize;
pub use rpn::{from_rpn, to_rpn};
pub use trig::AngleMode;
