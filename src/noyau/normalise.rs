// src/noyau/normalise.rs
//
// Normalisation : texte utilisateur -> forme canonique calculable.
//
// Ordre FIXE (une règle ne doit pas re-capturer le texte produit par une autre) :
//   1) symboles  × ÷ – −
//   2) pourcentage  50%   -> (50/100)
//   3) constantes   pi, π -> math.pi ; e -> math.e
//   4) puissance    ^     -> **
//   5) fonctions    sqrt( ln( log( exp( abs( floor( ceil(  -> math.*(
//   6) factorielle  5!    -> factorial(5)
//   7) trig selon le mode (trig.rs)
//
// Ne refuse jamais rien : une entrée mal formée passe telle quelle
// et échoue à l’évaluation.
// % et ! ne s’appliquent qu’à un littéral numérique : "(3+2)!" n’est pas réécrit.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::trig::{rewrite_trig, AngleMode};

struct Regles {
    pourcentage: Regex,
    pi: Regex,
    euler: Regex,
    fonctions: Regex,
    factorielle: Regex,
}

fn regles() -> &'static Regles {
    static REGLES: OnceLock<Regles> = OnceLock::new();
    REGLES.get_or_init(|| {
        let re = |motif: &str| Regex::new(motif).expect("regex de normalisation invalide");
        Regles {
            pourcentage: re(r"(\d+(?:\.\d+)?)%"),
            pi: re(r"(?i)\bpi\b|π"),
            euler: re(r"\be\b"),
            fonctions: re(r"(?i)\b(sqrt|ln|log|exp|abs|floor|ceil)\("),
            factorielle: re(r"(\d+(?:\.\d+)?)!"),
        }
    })
}

/// Nom canonique d’une fonction nommée (règle 5). `log` est le logarithme décimal.
fn cible_fonction(nom: &str) -> &'static str {
    match nom {
        "sqrt" => "math.sqrt",
        "ln" => "math.ln",
        "log" => "math.log10",
        "exp" => "math.exp",
        "abs" => "math.abs",
        "floor" => "math.floor",
        _ => "math.ceil",
    }
}

/// API publique : fonction pure de (texte, mode).
pub fn normalize(raw: &str, mode: AngleMode) -> String {
    let r = regles();

    // 1) symboles
    let s = raw
        .replace('×', "*")
        .replace('÷', "/")
        .replace(['–', '−'], "-");

    // 2) pourcentage
    let s = r.pourcentage.replace_all(&s, "(${1}/100)");

    // 3) constantes
    let s = r.pi.replace_all(&s, "math.pi");
    let s = r.euler.replace_all(&s, "math.e");

    // 4) puissance
    let s = s.replace('^', "**");

    // 5) fonctions nommées
    let s = r.fonctions.replace_all(&s, |caps: &Captures| {
        format!("{}(", cible_fonction(&caps[1].to_ascii_lowercase()))
    });

    // 6) factorielle
    let s = r.factorielle.replace_all(&s, "factorial(${1})");

    // 7) trig
    rewrite_trig(&s, mode)
}
