//! src/app/touches.rs
//!
//! Pavé : une touche = une action sur l’état.
//! Sert aux boutons (libellés) et au clavier (caractères tapés).

use crate::noyau::Operateur;

/// Disposition du pavé 4×4 (le bouton Clear est au-dessus, pleine largeur).
pub const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

pub const LIBELLE_EFFACER: &str = "Clear";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Op(Operateur),
    Egal,
    Effacer,
}

impl Touche {
    /// Caractère tapé au clavier -> touche (Escape/Enter sont gérés à part).
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_char(c).map(Touche::Op),
        }
    }

    pub fn depuis_libelle(libelle: &str) -> Option<Self> {
        if libelle == LIBELLE_EFFACER {
            return Some(Touche::Effacer);
        }
        let mut it = libelle.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Self::depuis_char(c),
            _ => None,
        }
    }
}
