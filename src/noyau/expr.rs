// src/noyau/expr.rs
//
// AST flottant + évaluation.
// Liste blanche fermée : aucune autre fonction, aucune variable.

use std::f64::consts::{E, PI};

use super::erreur::EvalError;

/// Constantes nommées de la forme canonique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "math.pi" => Some(Self::Pi),
            "math.e" => Some(Self::E),
            _ => None,
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
        }
    }
}

/// Fonctions unaires autorisées.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Ln,
    Log10,
    Exp,
    Abs,
    Floor,
    Ceil,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Factorial,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        use Fonction::*;
        let f = match nom {
            "math.sqrt" => Sqrt,
            "math.ln" => Ln,
            "math.log10" => Log10,
            "math.exp" => Exp,
            "math.abs" => Abs,
            "math.floor" => Floor,
            "math.ceil" => Ceil,
            "math.sin" => Sin,
            "math.cos" => Cos,
            "math.tan" => Tan,
            "math.asin" => Asin,
            "math.acos" => Acos,
            "math.atan" => Atan,
            "factorial" => Factorial,
            _ => return None,
        };
        Some(f)
    }

    pub fn nom(self) -> &'static str {
        use Fonction::*;
        match self {
            Sqrt => "math.sqrt",
            Ln => "math.ln",
            Log10 => "math.log10",
            Exp => "math.exp",
            Abs => "math.abs",
            Floor => "math.floor",
            Ceil => "math.ceil",
            Sin => "math.sin",
            Cos => "math.cos",
            Tan => "math.tan",
            Asin => "math.asin",
            Acos => "math.acos",
            Atan => "math.atan",
            Factorial => "factorial",
        }
    }

    /// Applique la fonction, avec contrôle du domaine.
    pub fn appliquer(self, x: f64) -> Result<f64, EvalError> {
        use Fonction::*;

        let dans_unite = |x: f64| (-1.0..=1.0).contains(&x);

        let v = match self {
            Sqrt if x < 0.0 => return Err(EvalError::domain("racine d’un nombre négatif")),
            Sqrt => x.sqrt(),
            Ln | Log10 if x < 0.0 => {
                return Err(EvalError::domain("logarithme d’un nombre négatif"))
            }
            Ln => x.ln(),
            Log10 => x.log10(),
            Exp => x.exp(),
            Abs => x.abs(),
            Floor => x.floor(),
            Ceil => x.ceil(),
            Sin => x.sin(),
            Cos => x.cos(),
            Tan => x.tan(),
            Asin | Acos if !dans_unite(x) => {
                return Err(EvalError::domain(format!(
                    "{} hors de [-1, 1]",
                    self.nom()
                )))
            }
            Asin => x.asin(),
            Acos => x.acos(),
            Atan => x.atan(),
            Factorial => super::eval::factorial(x),
        };

        if v.is_nan() {
            return Err(EvalError::domain(format!("{}({x}) indéfini", self.nom())));
        }
        Ok(v)
    }
}

/// Opérateur d’une chaîne gauche-associative (+ - * /).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn appliquer(self, a: f64, b: f64) -> Result<f64, EvalError> {
        Ok(match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => {
                if b == 0.0 {
                    return Err(EvalError::domain("division par zéro"));
                }
                a / b
            }
        })
    }
}

/// AST.
///
/// Les suites d’opérateurs sont stockées à plat : "1+1+…+1" ou "2**2**…**2"
/// ne creusent pas l’arbre, seule l’imbrication réelle (parenthèses, appels) le fait.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Const(Constante),

    Neg(Box<Expr>),

    /// ((tête op₁ x₁) op₂ x₂) … évaluée de gauche à droite.
    Chaine(Box<Expr>, Vec<(Op, Expr)>),

    /// a ** (b ** (c …)) ; au moins deux éléments.
    Puissance(Vec<Expr>),

    Appel(Fonction, Box<Expr>),
}

fn indefini() -> EvalError {
    EvalError::domain("résultat indéfini (NaN)")
}

impl Expr {
    /// Évalue l’arbre. Les infinis intermédiaires sont tolérés
    /// (1/10**400 = 0), c’est le nettoyage final qui les refuse.
    pub fn eval(&self) -> Result<f64, EvalError> {
        use Expr::*;

        let v = match self {
            Num(v) => *v,
            Const(c) => c.valeur(),

            Neg(x) => -x.eval()?,

            Chaine(tete, suite) => {
                let mut acc = tete.eval()?;
                for (op, x) in suite {
                    acc = op.appliquer(acc, x.eval()?)?;
                    if acc.is_nan() {
                        return Err(indefini());
                    }
                }
                acc
            }

            Puissance(tour) => {
                // opérandes de gauche à droite, repli de droite à gauche
                let valeurs = tour.iter().map(Expr::eval).collect::<Result<Vec<_>, _>>()?;
                let Some((&sommet, bases)) = valeurs.split_last() else {
                    return Err(EvalError::syntax("puissance sans opérande"));
                };
                let mut acc = sommet;
                for &base in bases.iter().rev() {
                    acc = base.powf(acc);
                    if acc.is_nan() {
                        return Err(indefini());
                    }
                }
                acc
            }

            Appel(f, x) => return f.appliquer(x.eval()?),
        };

        if v.is_nan() {
            return Err(indefini());
        }
        Ok(v)
    }
}
