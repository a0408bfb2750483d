//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la saisie et l’évaluation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants de saisie : jamais deux opérateurs collés,
//!   jamais deux points dans un même nombre
//! - invariant d’évaluation : Ok => fini ; jamais de panique

use std::time::{Duration, Instant};

use super::eval_expression;
use super::saisie::Saisie;

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

const OPS: &str = "+-*/×÷%^";

fn check_pas_operateurs_colles(expr: &str) {
    let chars: Vec<char> = expr.chars().collect();
    for w in chars.windows(2) {
        assert!(
            !(OPS.contains(w[0]) && OPS.contains(w[1])),
            "opérateurs collés dans {expr:?}"
        );
    }
}

fn check_un_point_par_nombre(expr: &str) {
    for morceau in expr.split(|c: char| "+-*/^".contains(c)) {
        assert!(
            morceau.matches('.').count() <= 1,
            "double point dans {morceau:?} (expr={expr:?})"
        );
    }
}

fn check_resultat(res: &Result<f64, super::ErreurEval>) {
    if let Ok(v) = res {
        assert!(v.is_finite(), "résultat non fini accepté: {v}");
    }
}

/* ------------------------ Génération ------------------------ */

const TOUCHES: [&str; 21] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "×", "÷", "%", "^",
    "(", ")",
];

#[derive(Clone, Copy, Debug)]
enum Action {
    Touche(&'static str),
    Effacer,
    Calculer,
    Clear,
}

fn gen_action(rng: &mut Rng) -> Action {
    match rng.pick(40) {
        0..=2 => Action::Effacer,
        3 | 4 => Action::Calculer,
        5 => Action::Clear,
        _ => Action::Touche(TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let n = rng.pick(1000).to_string();
    if depth == 0 {
        return n;
    }
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(8) {
        0 => n,
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("({a}*{b})"),
        4 => format!("({a}/{b})"),
        5 => format!("{a}%"),
        6 => format!("-{a}"),
        _ => format!("({a})^{}", rng.pick(4)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisie_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..60 {
        budget(t0, max);

        let mut s = Saisie::default();
        for _ in 0..40 {
            match gen_action(&mut rng) {
                Action::Touche(t) => s.ajouter(t),
                Action::Effacer => s.effacer_dernier(),
                Action::Clear => s.clear_entree(),
                Action::Calculer => {
                    let avant = s.expression().to_string();
                    if s.calculer().is_err() {
                        assert_eq!(s.expression(), avant, "l’échec doit conserver l’entrée");
                    }
                }
            }

            check_pas_operateurs_colles(s.expression());
            check_un_point_par_nombre(s.expression());
            check_resultat(s.resultat());

            if s.resultat().is_ok() {
                seen_ok += 1;
            } else {
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(eval_expression(&ea), eval_expression(&eb));
    }
}

#[test]
fn fuzz_safe_expressions_generees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let res = eval_expression(&expr);
        check_resultat(&res);
        if res.is_ok() {
            seen_ok += 1;
        }
    }
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_caracteres_arbitraires() {
    // Octets “hostiles” : la liste blanche doit tout refuser sans paniquer.
    for expr in [
        "process.exit()",
        "2;3",
        "2,3",
        "0x10",
        "1_000",
        "2**",
        "'1'+1",
        "\u{0}",
        "√4",
        "π",
    ] {
        assert!(eval_expression(expr).is_err(), "devrait échouer: {expr:?}");
    }
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    budget(t0, max);

    // shunting-yard itératif : pas de pile d’appels profonde
    assert_eq!(eval_expression(&expr), Ok(1.0));
}
