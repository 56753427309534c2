//! Noyau — évaluation (pipeline réel)
//!
//! normalize -> tokenize -> RPN -> Expr -> eval -> nettoyage (to_number_safe)
//!
//! Rien n’est exécuté hors de la liste blanche de `expr.rs` :
//! un nom inconnu est une erreur de syntaxe, pas un appel.

use tracing::{debug, trace};

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalize;
use super::rpn::{from_rpn, to_rpn};
use super::trig::AngleMode;

/// Seuil de bruit flottant : |x| < SEUIL_ZERO => 0.
pub const SEUIL_ZERO: f64 = 1e-12;

/// Issue d’une évaluation :
/// - Ok(None)    : entrée vide (pas une erreur, aucun effet)
/// - Ok(Some(x)) : valeur finie
/// - Err(e)      : échec (syntaxe, domaine, dépassement)
pub type EvaluationResult = Result<Option<f64>, EvalError>;

/// API publique : normalise puis calcule une expression utilisateur.
pub fn evaluate(raw: &str, mode: AngleMode) -> EvaluationResult {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let canon = normalize(raw, mode);
    debug!(entree = raw, ?mode, canon = %canon, "expression normalisée");

    match compute(&canon).and_then(to_number_safe) {
        Ok(v) => {
            debug!(valeur = v, "évaluation réussie");
            Ok(Some(v))
        }
        Err(e) => {
            debug!(kind = ?e.kind(), erreur = %e, "évaluation échouée");
            Err(e)
        }
    }
}

/// Calcule une expression déjà normalisée (forme canonique), sans nettoyage.
pub fn compute(canon: &str) -> Result<f64, EvalError> {
    // 1) Jetons
    let jetons = tokenize(canon)?;
    trace!(jetons = %format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn));

    // 3) AST puis valeur
    from_rpn(&rpn)?.eval()
}

/// Nettoyage final :
/// - infini => dépassement
/// - NaN => domaine
/// - |x| < 1e-12 => 0 (bruit flottant)
pub fn to_number_safe(x: f64) -> Result<f64, EvalError> {
    if x.is_infinite() {
        return Err(EvalError::Overflow);
    }
    if x.is_nan() {
        return Err(EvalError::domain("résultat indéfini (NaN)"));
    }
    if x.abs() < SEUIL_ZERO {
        return Ok(0.0);
    }
    Ok(x)
}

/// n! en flottant.
/// - n < 0 (ou NaN) => NaN (refusé en amont comme erreur de domaine)
/// - n non entier => plancher (2.5! = 2! = 2)
/// - s’arrête dès que le produit devient infini (temps borné même pour 1e12!)
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }

    let borne = n.floor();
    let mut res = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= borne {
        res *= i;
        if res.is_infinite() {
            break;
        }
        i += 1.0;
    }
    res
}
