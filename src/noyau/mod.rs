//! Noyau quatre opérations
//!
//! Organisation interne :
//! - erreur.rs   : ErreurCalcul (thiserror) + libellé "Error"
//! - jetons.rs   : opérateurs, nettoyage de fin, découpe, lecture des nombres
//! - format.rs   : affichage d’un f64 (façon navigateur)
//! - eval.rs     : pliage gauche → droite

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::LIBELLE_ERREUR;
pub use eval::evaluer;
pub use jetons::Operateur;
