// src/noyau/trig.rs
//
// Trig selon le mode d’angle
// --------------------------
// - DEGRÉS  : sin/cos/tan convertissent l’argument (x*π/180),
//             asin/acos/atan convertissent le résultat (r*180/π)
// - RADIANS : passage direct vers math.*
//
// L’argument est délimité par appariement des parenthèses (pas de marqueurs
// intermédiaires) ; une pile de fermetures en attente gère l’imbrication
// sans récursion.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    #[serde(alias = "deg")]
    Degrees,
    #[serde(alias = "rad")]
    Radians,
}

impl AngleMode {
    pub fn bascule(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        }
    }
}

fn regex_trig() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(asin|acos|atan|sin|cos|tan)\(").expect("regex trig invalide")
    })
}

/// Préfixe + suffixe qui entourent l’argument (texte brut, déjà réécrit).
fn enveloppe(nom: &str, mode: AngleMode) -> (String, &'static str) {
    let inverse = nom.starts_with('a');
    match (mode, inverse) {
        (AngleMode::Radians, _) => (format!("math.{nom}("), ")"),
        (AngleMode::Degrees, false) => (format!("math.{nom}(("), ")*math.pi/180)"),
        (AngleMode::Degrees, true) => (format!("(math.{nom}("), ")*180/math.pi)"),
    }
}

/// Index de la ')' qui ferme la '(' située en `ouvrante`.
fn fermante(s: &str, ouvrante: usize) -> Option<usize> {
    let mut niveau: usize = 0;
    for (i, b) in s.bytes().enumerate().skip(ouvrante) {
        match b {
            b'(' => niveau += 1,
            b')' => {
                niveau -= 1;
                if niveau == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Réécrit `sin(`, `asin(`… (insensible à la casse) selon le mode.
/// Un appel sans ')' correspondante est seulement renommé : il échouera à l’évaluation.
pub fn rewrite_trig(s: &str, mode: AngleMode) -> String {
    let re = regex_trig();

    let mut out = String::with_capacity(s.len() + 32);
    let mut curseur: usize = 0;

    // (index de la ')' d’origine, suffixe à écrire à sa place) ; sommet = la plus proche
    let mut fermetures: Vec<(usize, &'static str)> = Vec::new();

    let mut prochain = re.captures_at(s, 0);

    loop {
        let debut_appel = prochain
            .as_ref()
            .and_then(|c| c.get(0))
            .map(|m| m.start());

        // 1) une fermeture en attente arrive avant le prochain appel
        if let Some(&(f, suffixe)) = fermetures.last() {
            if debut_appel.map_or(true, |d| f < d) {
                out.push_str(&s[curseur..f]);
                out.push_str(suffixe);
                curseur = f + 1;
                fermetures.pop();
                continue;
            }
        }

        // 2) prochain appel trig
        let Some(caps) = prochain.take() else { break };
        let (Some(m), Some(nom)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let nom = nom.as_str().to_ascii_lowercase();

        out.push_str(&s[curseur..m.start()]);
        match fermante(s, m.end() - 1) {
            Some(f) => {
                let (prefixe, suffixe) = enveloppe(&nom, mode);
                out.push_str(&prefixe);
                fermetures.push((f, suffixe));
            }
            None => {
                out.push_str("math.");
                out.push_str(&nom);
                out.push('(');
            }
        }
        curseur = m.end();
        prochain = re.captures_at(s, curseur);
    }

    out.push_str(&s[curseur..]);
    out
}
