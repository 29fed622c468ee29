// src/noyau/erreur.rs

use thiserror::Error;

/// Libellé unique affiché pour toute erreur d’évaluation.
pub const LIBELLE_ERREUR: &str = "Error";

/// Erreurs internes du noyau.
///
/// Elles ne sortent jamais du noyau : `evaluer` les normalise toutes en
/// [`LIBELLE_ERREUR`]. Le détail ne sert qu’au journal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande invalide: '{0}'")]
    OperandeInvalide(String),

    #[error("opérateur inconnu: '{0}'")]
    OperateurInconnu(String),
}
