//! Tests de propriétés : lois du moteur + stabilité de la lecture.
//!
//! But : balayer beaucoup de valeurs sans dépendance externe.
//! - RNG déterministe (seed fixe)
//! - commutativité de + et *
//! - diviser(multiplier(a, b), b) ≈ a pour b non nul
//! - diviser(_, 0) échoue toujours
//! - rendu puis relecture : même valeur
//! - insensibilité aux espaces

use super::erreurs::ErreurCalcul;
use super::eval::evaluer_expression;
use super::format::format_valeur;
use super::operations::{additionner, diviser, multiplier};

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

    /// Flottant fini centré sur 0, borné (~1e6), pas de subnormaux.
    fn next_f64(&mut self) -> f64 {
        let brut = self.next_u32() as i64 - (u32::MAX / 2) as i64;
        brut as f64 / 2048.0
    }
}

const NB_TIRAGES: usize = 1000;

/* ------------------------ Lois du moteur ------------------------ */

#[test]
fn addition_commutative() {
    let mut rng = Rng::new(0xC0FFEE);
    for _ in 0..NB_TIRAGES {
        let a = rng.next_f64();
        let b = rng.next_f64();
        assert_eq!(additionner(a, b), additionner(b, a), "a={a} b={b}");
    }
}

#[test]
fn multiplication_commutative() {
    let mut rng = Rng::new(0xBEEF);
    for _ in 0..NB_TIRAGES {
        let a = rng.next_f64();
        let b = rng.next_f64();
        assert_eq!(multiplier(a, b), multiplier(b, a), "a={a} b={b}");
    }
}

#[test]
fn division_inverse_de_multiplication() {
    let mut rng = Rng::new(42);
    for _ in 0..NB_TIRAGES {
        let a = rng.next_f64();
        let b = rng.next_f64();
        if b == 0.0 {
            continue;
        }

        let retrouve = diviser(multiplier(a, b), b).expect("diviseur non nul");

        // tolérance relative : l’aller-retour *, / perd au plus quelques ulps
        let tolerance = 1e-9 * a.abs().max(1.0);
        assert!(
            (retrouve - a).abs() <= tolerance,
            "a={a} b={b} retrouvé={retrouve}"
        );
    }
}

#[test]
fn division_par_zero_toujours_refusee() {
    let mut rng = Rng::new(7);
    for _ in 0..NB_TIRAGES {
        let a = rng.next_f64();
        assert_eq!(diviser(a, 0.0), Err(ErreurCalcul::DivisionParZero));
        assert_eq!(diviser(a, -0.0), Err(ErreurCalcul::DivisionParZero));
    }
}

/* ------------------------ Rendu et relecture ------------------------ */

#[test]
fn rendu_puis_relecture_stable() {
    let mut rng = Rng::new(2026);
    for _ in 0..NB_TIRAGES {
        // la grammaire ne lit pas de signe : on balaye des valeurs positives
        let v = rng.next_f64().abs();
        let texte = format_valeur(v);
        let relu: f64 = texte.parse().expect("rendu relisible");
        assert_eq!(relu, v, "texte={texte:?}");
    }
}

#[test]
fn resultat_reutilisable_comme_operande() {
    let valeur = evaluer_expression("10.5 * 2").expect("évaluation");
    let texte = format_valeur(valeur);
    let via_expression = evaluer_expression(&format!("{texte} + 0")).expect("relecture");
    assert_eq!(via_expression, 21.0);
}

/* ------------------------ Espaces ------------------------ */

#[test]
fn espaces_sans_effet() {
    let variantes = ["3+2", " 3   +   2 ", "3 +2", "3+ 2", "\t3 + 2\n"];
    for v in variantes {
        assert_eq!(
            evaluer_expression(v).expect("variante valide"),
            5.0,
            "entrée={v:?}"
        );
    }
}
