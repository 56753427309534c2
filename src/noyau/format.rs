// src/noyau/format.rs
//
// Affichage d’un résultat :
// - presque entier (|v - round(v)| < 1e-12) => l’entier
// - sinon 12 chiffres significatifs, zéros de fin retirés
//
// Entier de magnitude >= 1e21 : tous ses chiffres, en notation exponentielle.
//
// Mise en page des 12 chiffres : fixe si l’exposant est dans [-6, 11],
// sinon notation exponentielle "1.5e-7" / "1.2e+21".

const CHIFFRES: usize = 12;

/// Tolérance du raccourci entier.
const TOLERANCE_ENTIER: f64 = 1e-12;

/// Au-delà, un entier s’écrit en notation exponentielle.
const LIMITE_ENTIER_FIXE: f64 = 1e21;

/// API publique : valeur -> texte affichable.
pub fn format(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let r = value.round();
    if (value - r).abs() < TOLERANCE_ENTIER {
        if r == 0.0 {
            // pas de "-0"
            return "0".to_string();
        }
        if r.abs() < LIMITE_ENTIER_FIXE {
            return format!("{r:.0}");
        }
        return entier_exponentiel(r);
    }

    to_precision(value, CHIFFRES)
}

/// Grand entier : tous les chiffres utiles (représentation la plus courte
/// qui relit la même valeur), exposant signé : 1.234567890123456e+21.
fn entier_exponentiel(r: f64) -> String {
    let sci = format!("{r:e}");
    match sci.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => sci,
    }
}

/// `p` chiffres significatifs, zéros de fin retirés.
fn to_precision(v: f64, p: usize) -> String {
    // l’écriture exponentielle donne l’exposant APRÈS arrondi
    let sci = format!("{:.*e}", p - 1, v);
    let Some((mantisse, exp)) = sci.split_once('e') else {
        return format!("{v}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{v}");
    };

    if exp < -6 || exp >= p as i32 {
        let signe = if exp < 0 { '-' } else { '+' };
        return format!("{}e{signe}{}", trim_zeros(mantisse), exp.abs());
    }

    let decimales = (p as i32 - 1 - exp).max(0) as usize;
    trim_zeros(&format!("{v:.decimales$}")).to_string()
}

/// "0.500" -> "0.5", "2.000" -> "2" ; jamais de '.' pendant.
fn trim_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
