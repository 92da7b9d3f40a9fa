//! Calculette : moteur arithmétique quatre opérations + interprète d’une
//! expression `<nombre> <opérateur> <nombre>`.
//!
//! Tout le comportement vit ici, embarquable tel quel par un programme
//! hôte ; le binaire (main.rs) n’est qu’une enveloppe ligne de commande.

pub mod noyau;

pub use noyau::{evaluer_expression, ErreurCalcul};
