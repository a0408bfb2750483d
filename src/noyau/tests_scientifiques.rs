//! Tests scientifiques (campagne) : invariants + cohérence + limites contrôlées.
//!
//! Notes importantes (alignées avec l’état actuel du noyau) :
//! - '%' est une substitution textuelle ("*0.01"), PAS le pourcentage “de la somme” :
//!   50+10% = 50.1 (et non 55).
//! - + - * / restent exacts (rationnels), donc 0.1+0.2 = 0.3 exactement.
//! - Le signe unaire lie moins fort que la puissance : -2^2 = -4.

use std::time::{Duration, Instant};

use super::eval_expression;
use super::format::format_affichage;
use super::saisie::Saisie;

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_erreur(expr: &str) {
    let res = eval_expression(expr);
    assert!(res.is_err(), "attendu une erreur pour {expr:?}, obtenu {res:?}");
    assert_eq!(format_affichage(&res), "Error");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("2*3+4"), 10.0);
    assert_eq!(eval_ok("2+3^2*2"), 20.0);
    assert_eq!(eval_ok("(2+3)^2"), 25.0);
}

#[test]
fn sci_associativite_gauche() {
    assert_eq!(eval_ok("100/10/5"), 2.0);
    assert_eq!(eval_ok("10-3-2"), 5.0);
}

#[test]
fn sci_associativite_droite_puissance() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("(2^3)^2"), 64.0);
}

/* ------------------------ Cohérence algébrique (zéro) ------------------------ */

#[test]
fn sci_zero_exact() {
    assert_eq!(eval_ok("(1/3+1/6)-1/2"), 0.0);
    assert_eq!(eval_ok("0.1+0.2-0.3"), 0.0);
    assert_eq!(eval_ok("1/7*7-1"), 0.0);
}

/* ------------------------ Pourcentage (comportement reproduit) ------------------------ */

#[test]
fn sci_pourcentage_textuel() {
    assert_eq!(eval_ok("200%"), 2.0);
    assert_eq!(eval_ok("50+10%"), 50.1);
    assert_eq!(eval_ok("(50+10)%"), 0.6);
}

/* ------------------------ Erreurs (marqueur unique) ------------------------ */

#[test]
fn sci_erreurs() {
    assert_erreur("1/0");
    assert_erreur("2+*3");
    assert_erreur("abc");
    assert_erreur("(");
    assert_erreur(")");
    assert_erreur("2^0.5^(1/0)");
    assert_erreur("(-8)^(1/3)");
    assert_erreur("9^999");
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn sci_enchainement_stable() {
    // calculer() sur un résultat déjà calculé ne dérive pas
    let mut s = Saisie::default();
    s.remplacer("1/3");
    let v1 = s.calculer().unwrap();
    let v2 = s.calculer().unwrap();
    assert!((v1 - v2).abs() < 1e-15);

    s.remplacer("1234.5");
    assert_eq!(s.calculer(), Ok(1234.5));
    assert_eq!(s.expression(), "1234.5");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..500 {
        if k > 0 {
            expr.push('+');
        }
        expr.push_str("0.1");
        budget(t0, max);
    }

    // 500*0.1 = 50 (exact, sans dérive flottante)
    assert_eq!(eval_ok(&expr), 50.0);
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // gros numérateur contrôlé (100 chiffres)
    let big = "9".repeat(100);
    let expr = format!("{big}/{big}+1");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 2.0);
}

#[test]
fn sci_stress_puissance_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // exposant énorme : bascule f64 (pas de BigInt géant) => non fini => erreur
    assert_erreur("2^1000000");
    budget(t0, max);

    // petit exposant négatif énorme => 0
    assert_eq!(eval_ok("2^-1000000"), 0.0);
    budget(t0, max);
}
