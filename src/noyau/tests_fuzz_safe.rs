//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique, quelle que soit l’entrée
//!   * un succès est toujours fini, et jamais dans ]-1e-12, 1e-12[ sauf 0
//!   * même entrée + même mode => même issue
//!   * seule l’imbrication réelle est bornée, pas la longueur

use std::time::{Duration, Instant};

use super::rpn::MAX_PROFONDEUR;
use super::{evaluate, format, normalize, AngleMode, EvaluationResult};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariant_succes(expr: &str, res: &EvaluationResult) {
    if let Ok(Some(v)) = res {
        assert!(v.is_finite(), "succès non fini: expr={expr:?} v={v}");
        assert!(
            *v == 0.0 || v.abs() >= 1e-12,
            "bruit non nettoyé: expr={expr:?} v={v}"
        );
        // l’affichage ne doit jamais finir par un '.'
        let txt = format(*v);
        assert!(!txt.ends_with('.'), "affichage invalide: {txt:?}");
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(13);
    match rng.pick(4) {
        0 => format!("{a}.{}", rng.pick(100)),
        1 => format!("{a}%"),
        2 => format!("{}!", rng.pick(8)),
        _ => format!("{a}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "π".to_string(),
        _ => "e".to_string(),
    }
}

const FONCTIONS: [&str; 13] = [
    "sqrt", "ln", "log", "exp", "abs", "floor", "ceil", "sin", "cos", "tan", "asin", "acos",
    "atan",
];

const OPERATEURS: [&str; 7] = ["+", "-", "*", "/", "^", "×", "÷"];

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(6) {
        0 => gen_atom(rng),
        1 | 2 => {
            let op = OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
        3 => format!("({})", gen_expr(rng, depth - 1)),
        4 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/// Bruit : caractères arbitraires du clavier de la calculatrice (et un peu plus).
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '1', '2', '0', '.', '+', '-', '*', '/', '^', '%', '!', '(', ')', 'p', 'i', 'e', 's', 'n',
        'π', '×', '÷', '–', ' ', ';', '_', 'x',
    ];
    let n = 1 + rng.pick(24) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.coin() {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        };

        let res = evaluate(&expr, mode);
        check_invariant_succes(&expr, &res);
        assert_eq!(res, evaluate(&expr, mode), "non déterministe: {expr:?}");

        match res {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let bruit = gen_bruit(&mut rng);
        for mode in [AngleMode::Degrees, AngleMode::Radians] {
            // normalize ne refuse jamais rien
            let _ = normalize(&bruit, mode);
            let res = evaluate(&bruit, mode);
            check_invariant_succes(&bruit, &res);
        }
    }
}

#[test]
fn fuzz_safe_imbrication_profonde_refusee_proprement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let n = MAX_PROFONDEUR * 4;
    let parens = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let appels = format!("{}1{}", "sqrt(".repeat(n), ")".repeat(n));

    // en degrés, chaque sin( ajoute deux niveaux de parenthèses
    let m = MAX_PROFONDEUR / 2 + 10;
    let trig = format!("{}0{}", "sin(".repeat(m), ")".repeat(m));

    for expr in [parens, appels, trig] {
        budget(t0, max);
        assert!(evaluate(&expr, AngleMode::Degrees).is_err());
    }
}

#[test]
fn fuzz_safe_suites_plates_sans_limite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let n = 5000;
    let cas = [
        (vec!["1"; n].join("+"), "5000"),
        (vec!["0.5"; n].join("+"), "2500"),
        (vec!["1"; n].join("*"), "1"),
        (vec!["1"; n].join("^"), "1"),
        (format!("{}7", "-".repeat(n)), "7"),
        (format!("10000{}", "-2".repeat(n)), "0"),
        (vec!["2×0.5"; n / 2].join("×"), "1"),
    ];

    for (expr, attendu) in cas {
        budget(t0, max);
        let v = evaluate(&expr, AngleMode::Radians)
            .unwrap_or_else(|e| panic!("err: {e} ({} car.)", expr.len()))
            .unwrap_or_else(|| panic!("vide"));
        let debut: String = expr.chars().take(20).collect();
        assert_eq!(format(v), attendu, "{debut}…");
    }
}
