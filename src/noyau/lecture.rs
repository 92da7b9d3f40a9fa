// src/noyau/lecture.rs
//
// Lecture d’une entrée texte vers Expression.
//
// Grammaire fixe (tout-ou-rien, ancrée début/fin) :
//   <littéral> [espaces] <opérateur> [espaces] <littéral>
// avec <littéral> = entier ou décimal, sans signe ni exposant,
// et <opérateur> ∈ {+, -, *, /}.
//
// Une correspondance partielle est rejetée : la grammaire doit consommer
// toute la chaîne trimée.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::erreurs::ErreurCalcul;
use super::expr::{Expression, Operateur};

const GRAMMAIRE: &str = r"^(\d+(?:\.\d+)?)\s*([+\-*/])\s*(\d+(?:\.\d+)?)$";

static REGEX_GRAMMAIRE: OnceLock<Regex> = OnceLock::new();

fn regex_grammaire() -> &'static Regex {
    REGEX_GRAMMAIRE.get_or_init(|| Regex::new(GRAMMAIRE).expect("grammaire fixe"))
}

/// Lit une expression `<nombre> <opérateur> <nombre>`.
///
/// - FormatInvalide : la grammaire ne correspond pas ; on renvoie
///   l’entrée d’origine (non trimée) pour le diagnostic.
/// - NombreInvalide : littéral illisible malgré la grammaire (ne devrait
///   pas arriver ; échec propre plutôt que panique).
pub fn lire_expression(entree: &str) -> Result<Expression, ErreurCalcul> {
    let trimee = entree.trim();

    let captures =
        regex_grammaire()
            .captures(trimee)
            .ok_or_else(|| ErreurCalcul::FormatInvalide {
                entree: entree.to_string(),
            })?;

    // captures 1 et 3 : littéraux ; capture 2 : symbole opérateur
    let gauche = lire_nombre(&captures[1])?;
    let droite = lire_nombre(&captures[3])?;

    // groupe vide impossible ; '\0' tomberait dans OperateurInvalide
    let symbole = captures[2].chars().next().unwrap_or('\0');
    let operateur = Operateur::depuis_symbole(symbole)?;

    let expression = Expression::nouvelle(gauche, operateur, droite);
    debug!(?expression, "lecture réussie");
    Ok(expression)
}

fn lire_nombre(litteral: &str) -> Result<f64, ErreurCalcul> {
    litteral
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::NombreInvalide {
            litteral: litteral.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> Expression {
        lire_expression(s).unwrap_or_else(|e| panic!("lire_expression({s:?}) erreur: {e}"))
    }

    fn refuse(s: &str) {
        assert!(
            matches!(lire_expression(s), Err(ErreurCalcul::FormatInvalide { .. })),
            "lire_expression({s:?}) aurait dû être refusée"
        );
    }

    #[test]
    fn lecture_entiers() {
        let e = ok("3 + 2");
        assert_eq!((e.gauche(), e.droite()), (3.0, 2.0));
        assert_eq!(e.operateur(), Operateur::Addition);
    }

    #[test]
    fn lecture_decimaux() {
        let e = ok("10.5 * 2");
        assert_eq!(e.gauche(), 10.5);
        assert_eq!(e.operateur(), Operateur::Multiplication);
    }

    #[test]
    fn espaces_optionnels() {
        assert_eq!(ok("3+2"), ok(" 3   +   2 "));
    }

    #[test]
    fn formats_refuses() {
        refuse("");
        refuse("abc + 2");
        refuse("1 +");
        refuse("+ 2");
        refuse("1 + 2 + 3"); // correspondance partielle interdite
        refuse("3 ++ 2");
        refuse("1 % 2"); // opérateur hors grammaire
        refuse("1e3 + 2"); // pas d’exposant
        refuse("-3 + 2"); // pas de signe sur les littéraux
        refuse("1. + 2"); // décimal incomplet
    }

    #[test]
    fn erreur_conserve_entree_non_trimee() {
        match lire_expression("  abc  ") {
            Err(ErreurCalcul::FormatInvalide { entree }) => assert_eq!(entree, "  abc  "),
            autre => panic!("attendu FormatInvalide, obtenu {autre:?}"),
        }
    }
}
