// src/noyau/operations.rs
//
// Moteur arithmétique : les quatre opérations binaires sur f64.
// - additionner / soustraire / multiplier : totales (IEEE-754 natif)
// - diviser : refuse un diviseur exactement nul
//
// Aucun état, aucun effet de bord ; chaque fonction est déterministe.

use num_traits::Zero;
use tracing::debug;

use super::erreurs::ErreurCalcul;

pub fn additionner(a: f64, b: f64) -> f64 {
    a + b
}

pub fn soustraire(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiplier(a: f64, b: f64) -> f64 {
    a * b
}

/// Division IEEE-754, sauf diviseur nul (+0.0 et -0.0 compris).
///
/// NaN / infinis en entrée : comportement flottant natif, sans cas spécial.
pub fn diviser(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if b.is_zero() {
        debug!(a, "division par zéro refusée");
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additionner_simple() {
        assert_eq!(additionner(1.0, 2.0), 3.0);
        assert_eq!(additionner(-5.0, 3.0), -2.0);
    }

    #[test]
    fn soustraire_simple() {
        assert_eq!(soustraire(10.0, 4.0), 6.0);
    }

    #[test]
    fn multiplier_decimal() {
        assert_eq!(multiplier(10.5, 2.0), 21.0);
    }

    #[test]
    fn diviser_ok() {
        assert_eq!(diviser(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn diviser_par_zero() {
        assert_eq!(diviser(5.0, 0.0), Err(ErreurCalcul::DivisionParZero));
        // -0.0 == 0.0 en IEEE : refusé aussi
        assert_eq!(diviser(5.0, -0.0), Err(ErreurCalcul::DivisionParZero));
        assert_eq!(diviser(0.0, 0.0), Err(ErreurCalcul::DivisionParZero));
    }

    #[test]
    fn infinis_propages() {
        // opérations totales : l’infini se propage, pas d’erreur
        assert_eq!(additionner(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(multiplier(f64::INFINITY, 2.0), f64::INFINITY);
    }

    #[test]
    fn nan_sans_cas_special() {
        assert!(additionner(f64::NAN, 1.0).is_nan());
        // NaN au numérateur : la division passe (seul le diviseur nul bloque)
        assert!(diviser(f64::NAN, 2.0).unwrap().is_nan());
    }

    #[test]
    fn zero_signe() {
        // 0.0 * -1.0 donne -0.0 (sémantique IEEE conservée)
        let z = multiplier(0.0, -1.0);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
    }
}
