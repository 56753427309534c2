// src/noyau/jetons.rs

use super::erreur::EvalError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes (math.sqrt, math.pi, factorial, ...)
    // NOTE: c’est la RPN qui décide si le nom est connu (liste blanche).
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // **

    // Moins unaire : jamais produit par tokenize, seulement par la RPN.
    Neg,

    LPar,
    RPar,
}

/// Tokenize la forme canonique (sortie de `normalize`).
/// Supporte:
/// - nombres décimaux: 12, 1.5, .5, 2e5, 1.5e-3
/// - opérateurs + - * / **
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* avec segments pointés (math.sqrt)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                // "**" = puissance, "*" = produit
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::Pow);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants (segments séparés par '.')
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            loop {
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                // segment suivant seulement si le '.' est suivi d’une lettre
                let suite = i + 1 < chars.len()
                    && chars[i] == '.'
                    && (chars[i + 1].is_ascii_alphabetic() || chars[i + 1] == '_');
                if !suite {
                    break;
                }
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        // Nombre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // exposant: seulement si au moins un chiffre suit (sinon "2e" reste "2" puis "e")
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    while j < chars.len() && chars[j].is_ascii_digit() {
                        j += 1;
                    }
                    i = j;
                }
            }

            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| EvalError::syntax(format!("nombre invalide: {txt:?}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(EvalError::syntax(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Pow => "**".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
