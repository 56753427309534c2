//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! But : vérifier les contrats bout à bout (normalize -> evaluate -> format)
//! sans faire chauffer la machine.
//! - tolérance 1e-9 pour les comparaisons trig
//! - budget temps global sur les balayages
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - % et ! ne s’appliquent qu’à un littéral : "(3+2)!" échoue, c’est voulu.
//! - Factorielle non entière : plancher (2.5! = 2), conservé tel quel.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use super::{evaluate, factorial, format, normalize, AngleMode, ErrorKind};

fn eval_ok(expr: &str, mode: AngleMode) -> f64 {
    match evaluate(expr, mode) {
        Ok(Some(v)) => v,
        Ok(None) => panic!("expr={expr:?} : résultat vide"),
        Err(e) => panic!("expr={expr:?} err={e}"),
    }
}

fn affiche(expr: &str) -> String {
    format(eval_ok(expr, AngleMode::Radians))
}

fn assert_proche(a: f64, b: f64, ctx: &str) {
    assert!((a - b).abs() < 1e-9, "{ctx}: {a} != {b}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle_jusqu_a_20() {
    let mut attendu: u64 = 1;
    for n in 0..=20u64 {
        if n > 1 {
            attendu *= n;
        }
        assert_eq!(factorial(n as f64), attendu as f64, "n={n}");
        assert_eq!(eval_ok(&format!("{n}!"), AngleMode::Degrees), attendu as f64);
    }
}

#[test]
fn sci_factorielle_negative_echoue() {
    assert!(factorial(-1.0).is_nan());
    // "-1!" = -(1!) : le '!' ne voit que le littéral
    assert_eq!(eval_ok("-1!", AngleMode::Radians), -1.0);
    let e = evaluate("factorial(-1)", AngleMode::Radians).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Domain);
}

/* ------------------------ Trig et mode d’angle ------------------------ */

#[test]
fn sci_sin_degres_egale_sin_radians_converti() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for k in -72..=72 {
        budget(t0, max);
        let x = k as f64 * 5.0 + 0.25;
        let v = eval_ok(&format!("sin({x})"), AngleMode::Degrees);
        let attendu = (x * PI / 180.0).sin();
        let attendu = if attendu.abs() < 1e-12 { 0.0 } else { attendu };
        assert_proche(v, attendu, &format!("sin({x}°)"));
    }
}

#[test]
fn sci_cos_tan_degres() {
    assert_proche(eval_ok("cos(60)", AngleMode::Degrees), 0.5, "cos 60°");
    assert_proche(eval_ok("tan(45)", AngleMode::Degrees), 1.0, "tan 45°");
    assert_eq!(eval_ok("sin(180)", AngleMode::Degrees), 0.0);
}

#[test]
fn sci_asin_1_selon_mode() {
    assert_proche(eval_ok("asin(1)", AngleMode::Degrees), 90.0, "asin deg");
    assert_proche(eval_ok("asin(1)", AngleMode::Radians), PI / 2.0, "asin rad");
    assert_proche(eval_ok("acos(0)", AngleMode::Degrees), 90.0, "acos deg");
    assert_proche(eval_ok("atan(1)", AngleMode::Degrees), 45.0, "atan deg");
}

#[test]
fn sci_aller_retour_trig_degres() {
    assert_proche(eval_ok("sin(asin(0.5))", AngleMode::Degrees), 0.5, "sin∘asin");
    assert_proche(eval_ok("asin(sin(30))", AngleMode::Degrees), 30.0, "asin∘sin");
}

#[test]
fn sci_asin_hors_domaine() {
    for mode in [AngleMode::Degrees, AngleMode::Radians] {
        let e = evaluate("asin(2)", mode).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Domain);
    }
}

/* ------------------------ Postfixes ------------------------ */

#[test]
fn sci_pourcentage_aller_retour() {
    let canon = normalize("50%", AngleMode::Degrees);
    assert_eq!(canon, "(50/100)");
    assert_eq!(super::compute(&canon).unwrap(), 0.5);
}

#[test]
fn sci_factorielle_aller_retour() {
    let canon = normalize("5!", AngleMode::Degrees);
    assert_eq!(canon, "factorial(5)");
    assert_eq!(super::compute(&canon).unwrap(), 120.0);
}

#[test]
fn sci_postfixes_sur_parentheses_non_supportes() {
    assert!(evaluate("(3+2)!", AngleMode::Radians).is_err());
    assert!(evaluate("(50)%", AngleMode::Radians).is_err());
}

/* ------------------------ Entrée vide et échecs ------------------------ */

#[test]
fn sci_vide_n_est_pas_une_erreur() {
    assert_eq!(evaluate("", AngleMode::Degrees), Ok(None));
    assert_eq!(evaluate("  ", AngleMode::Degrees), Ok(None));
}

#[test]
fn sci_sqrt_negatif_echoue() {
    assert!(evaluate("sqrt(-1)", AngleMode::Degrees).is_err());
}

#[test]
fn sci_division_par_zero_echoue() {
    let e = evaluate("1/0", AngleMode::Degrees).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Domain);
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_format_puissance_entiere() {
    assert_eq!(affiche("2^10"), "1024");
}

#[test]
fn sci_format_un_tiers() {
    assert_eq!(affiche("1/3"), "0.333333333333");
}

#[test]
fn sci_proche_de_zero() {
    assert_eq!(eval_ok("1e-13", AngleMode::Radians), 0.0);
    assert_eq!(affiche("1e-13"), "0");
    assert_eq!(format(1e-13), "0");
}

#[test]
fn sci_format_bruit_flottant() {
    assert_eq!(affiche("0.1+0.2"), "0.3");
    assert_eq!(affiche("sqrt(2)^2"), "2");
}

#[test]
fn sci_expression_mixte() {
    // 2 * (10/100) + 3! - sqrt(16) = 0.2 + 6 - 4
    assert_eq!(affiche("2×10% + 3! – sqrt(16)"), "2.2");
}
