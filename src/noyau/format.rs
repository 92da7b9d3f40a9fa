// src/noyau/format.rs

//! Rendu du résultat.
//!
//! Le Display de f64 donne la représentation la plus courte qui re-parse
//! à l’identique : le rendu relu comme opérande redonne donc la même
//! valeur. Pas de séparateurs, pas d’arrondi décoratif.

/// Rend une valeur calculée en texte (`3`, `21`, `0.3333333333333333`).
pub fn format_valeur(valeur: f64) -> String {
    format!("{valeur}")
}

/// Ligne complète de sortie du binaire.
pub fn format_resultat(valeur: f64) -> String {
    format!("Result: {}", format_valeur(valeur))
}
