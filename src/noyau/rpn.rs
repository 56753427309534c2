// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - fonction de la liste blanche => opérateur unaire "collé" à sa parenthèse
//    - constante (math.pi, math.e) => valeur
//    - sinon => erreur (pas de variables)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur => Tok::Neg
//    - Neg lie plus fort que * / mais moins fort que ** : -2**2 = -4, 2**-1 = 1/2
// - Plus unaire: ignoré.
//
// NOTE:
// - Les fonctions sont sorties après la parenthèse fermante.

use super::erreur::EvalError;
use super::expr::{Constante, Expr, Fonction, Op};
use super::jetons::Tok;

/// Garde-fou : profondeur max de l’arbre (parenthèses, appels imbriqués).
/// Au-delà, on refuse plutôt que de risquer la pile.
pub const MAX_PROFONDEUR: usize = 1000;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Pow => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Pow)
}

fn is_fonction(t: &Tok) -> bool {
    matches!(t, Tok::Ident(name) if Fonction::depuis_nom(name).is_some())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("math.sqrt"), LPar, Num(2), Star, Num(8), RPar]
///   rpn:    [Num(2), Num(8), Star, Ident("math.sqrt")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::syntax("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les valeurs juxtaposées.
    let mut prev_was_value = false;
    let mut profondeur: usize = 0;

    for (idx, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(EvalError::syntax("deux valeurs sans opérateur"));
                }
                out.push(tok.clone());
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if prev_was_value {
                    return Err(EvalError::syntax("deux valeurs sans opérateur"));
                }
                if Fonction::depuis_nom(name).is_some() {
                    // fonction : doit être suivie de '(' ; elle sortira après son argument
                    if !matches!(tokens.get(idx + 1), Some(Tok::LPar)) {
                        return Err(EvalError::syntax(format!("{name} attend '('")));
                    }
                    ops.push(tok.clone());
                    prev_was_value = false;
                } else if Constante::depuis_nom(name).is_some() {
                    out.push(tok.clone());
                    prev_was_value = true;
                } else {
                    return Err(EvalError::syntax(format!("nom inconnu: {name}")));
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(EvalError::syntax("'(' après une valeur"));
                }
                profondeur += 1;
                if profondeur > MAX_PROFONDEUR {
                    return Err(EvalError::syntax("expression trop imbriquée"));
                }
                ops.push(Tok::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(EvalError::syntax("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(EvalError::syntax("')' sans '(' correspondante"));
                }
                profondeur -= 1;

                // si une fonction est au sommet, on la sort aussi
                if ops.last().is_some_and(is_fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire : '-' devient Neg (préfixe, ne dépile rien), '+' ne fait rien
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                if !prev_was_value {
                    return Err(EvalError::syntax(format!(
                        "opérateur '{}' sans opérande gauche",
                        symbole(tok)
                    )));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || is_fonction(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(tok);

                    let doit_pop = if is_right_associative(tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok.clone());
                prev_was_value = false;
            }

            Tok::Neg => return Err(EvalError::syntax("jeton Neg inattendu en entrée")),
        }
    }

    if !prev_was_value {
        return Err(EvalError::syntax("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(EvalError::syntax("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

fn symbole(t: &Tok) -> &'static str {
    match t {
        Tok::Plus => "+",
        Tok::Minus => "-",
        Tok::Star => "*",
        Tok::Slash => "/",
        Tok::Pow => "**",
        _ => "?",
    }
}

/// Construit une Expr à partir d’une RPN.
///
/// La pile garde la profondeur de chaque sous-arbre (garde-fou MAX_PROFONDEUR).
/// Chaînes gauche-associatives, tours de puissances et moins répétés sont
/// aplatis : seule l’imbrication réelle compte.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, EvalError> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    let invalide = || EvalError::syntax("expression invalide");

    for tok in rpn {
        let (e, prof) = match tok {
            Tok::Num(v) => (Expr::Num(*v), 1),

            Tok::Ident(name) => {
                if let Some(c) = Constante::depuis_nom(name) {
                    (Expr::Const(c), 1)
                } else if let Some(f) = Fonction::depuis_nom(name) {
                    let (x, p) = st
                        .pop()
                        .ok_or_else(|| EvalError::syntax(format!("{name} sans argument")))?;
                    (Expr::Appel(f, Box::new(x)), p + 1)
                } else {
                    return Err(EvalError::syntax(format!("nom inconnu: {name}")));
                }
            }

            Tok::Neg => {
                let (x, p) = st.pop().ok_or_else(invalide)?;
                match x {
                    // -(-y) = y : "----1" reste plat
                    Expr::Neg(y) => (*y, p - 1),
                    x => (Expr::Neg(Box::new(x)), p + 1),
                }
            }

            Tok::Pow => {
                let (b, pb) = st.pop().ok_or_else(invalide)?;
                let (a, pa) = st.pop().ok_or_else(invalide)?;
                match b {
                    // a ** (tour) : la tour grandit par la base
                    Expr::Puissance(mut tour) => {
                        tour.insert(0, a);
                        (Expr::Puissance(tour), pb.max(pa + 1))
                    }
                    b => (Expr::Puissance(vec![a, b]), pa.max(pb) + 1),
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let op = match tok {
                    Tok::Plus => Op::Add,
                    Tok::Minus => Op::Sub,
                    Tok::Star => Op::Mul,
                    _ => Op::Div,
                };
                let (b, pb) = st.pop().ok_or_else(invalide)?;
                let (a, pa) = st.pop().ok_or_else(invalide)?;
                match a {
                    // (chaîne) op b : on prolonge la chaîne au lieu d’empiler un niveau
                    Expr::Chaine(tete, mut suite) => {
                        suite.push((op, b));
                        (Expr::Chaine(tete, suite), pa.max(pb + 1))
                    }
                    a => (Expr::Chaine(Box::new(a), vec![(op, b)]), pa.max(pb) + 1),
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(EvalError::syntax("parenthèse inattendue en RPN"))
            }
        };

        if prof > MAX_PROFONDEUR {
            return Err(EvalError::syntax("expression trop imbriquée"));
        }
        st.push((e, prof));
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(invalide()),
    }
}
