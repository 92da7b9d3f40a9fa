// src/noyau/erreurs.rs

use thiserror::Error;

/// Erreurs du noyau (lecture + calcul).
///
/// Toutes terminales : pas de reprise, pas de résultat partiel.
/// Le binaire les affiche une fois puis sort avec un code non nul.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// L’entrée ne correspond pas à la grammaire `<nombre> <opérateur> <nombre>`.
    /// On conserve l’entrée d’origine (non trimée) pour le diagnostic.
    #[error("format invalide: {entree:?} (attendu: <nombre> <opérateur> <nombre>)")]
    FormatInvalide { entree: String },

    /// Littéral accepté par la grammaire mais illisible en f64.
    /// Ne devrait pas arriver ; on échoue proprement plutôt que paniquer.
    #[error("nombre invalide: {litteral:?}")]
    NombreInvalide { litteral: String },

    /// Caractère opérateur hors de {+, -, *, /}.
    /// Inatteignable via la grammaire ; gardé par défense en profondeur.
    #[error("opérateur inconnu: '{symbole}'")]
    OperateurInvalide { symbole: char },

    #[error("division par zéro")]
    DivisionParZero,
}
