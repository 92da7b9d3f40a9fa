//! Noyau — évaluation (pipeline complet)
//!
//! lecture (grammaire) -> littéraux -> dispatch opérateur -> calcul
//!
//! Un seul passage linéaire : pas d’état, pas de reprise ; chaque appel
//! est indépendant et sans effet de bord.

use tracing::debug;

use super::erreurs::ErreurCalcul;
use super::lecture::lire_expression;

/// API publique : évalue `<nombre> <opérateur> <nombre>` et retourne la
/// valeur calculée en f64.
///
/// Les erreurs sont terminales (voir erreurs.rs) ; DivisionParZero remonte
/// telle quelle depuis le moteur.
pub fn evaluer_expression(entree: &str) -> Result<f64, ErreurCalcul> {
    // 1) Lecture : grammaire + littéraux -> Expression figée
    let expression = lire_expression(entree)?;

    // 2) Calcul : dispatch direct vers le moteur arithmétique
    let valeur = expression.calculer()?;

    debug!(valeur, "évaluation terminée");
    Ok(valeur)
}
