//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : accumuler la saisie (nombre courant + expression complète) et
//! déléguer au noyau sur "=".
//!
//! Contrats :
//! - Aucune logique d’affichage ici.
//! - Chaque touche est traitée jusqu’au bout, sans effet de bord caché.
//! - Le nombre courant ne contient jamais deux points décimaux.

use tracing::debug;

use super::touches::Touche;
use crate::noyau::{evaluer, Operateur};

const COURANT_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppCalc {
    // nombre en cours de saisie, ou dernier résultat
    courant: String,
    // expression complète : "12 + 3", "12 + ", "-", ...
    expression: String,
    // vrai juste après "=" : le prochain chiffre repart de zéro
    a_resultat: bool,
    // vrai juste après un opérateur : nouveau nombre, ou remplacement d’opérateur
    op_en_attente: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            courant: COURANT_INITIAL.to_string(),
            expression: String::new(),
            a_resultat: false,
            op_en_attente: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Lecture ------------------------ */

    pub fn courant(&self) -> &str {
        &self.courant
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn a_resultat(&self) -> bool {
        self.a_resultat
    }

    pub fn op_en_attente(&self) -> bool {
        self.op_en_attente
    }

    /// Ligne du haut : l’expression, ou "0" si vide.
    pub fn affichage_expression(&self) -> &str {
        if self.expression.is_empty() {
            COURANT_INITIAL
        } else {
            &self.expression
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Point => self.saisir_chiffre('.'),
            Touche::Op(op) => self.saisir_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
        }
    }

    /// Chiffre (0-9) ou point décimal.
    pub fn saisir_chiffre(&mut self, c: char) {
        if self.a_resultat {
            // nouveau calcul
            self.courant = c.to_string();
            self.expression = c.to_string();
            self.a_resultat = false;
            self.op_en_attente = false;
        } else if self.op_en_attente {
            // nouveau nombre après l’opérateur
            self.courant = c.to_string();
            self.expression.push(c);
            self.op_en_attente = false;
        } else if self.courant == "0" && c != '.' {
            // le zéro de tête est remplacé dans le nombre ; l’expression garde la frappe
            self.courant = c.to_string();
            self.expression.push(c);
        } else if c == '.' && self.courant.contains('.') {
            return;
        } else {
            self.courant.push(c);
            if self.expression.is_empty() {
                self.expression = self.courant.clone();
            } else {
                self.expression.push(c);
            }
        }

        debug!(touche = %c, courant = %self.courant, expression = %self.expression, "saisie");
    }

    pub fn saisir_operateur(&mut self, op: Operateur) {
        if self.expression.is_empty() {
            // seul "-" est accepté en tête : signe négatif en attente
            if op == Operateur::Moins {
                self.courant = "-".to_string();
                self.expression = "-".to_string();
                debug!("signe négatif en attente");
            }
            return;
        }

        if self.expression == "-" {
            return;
        }

        if self.op_en_attente {
            // "1 + " -> "1 - "
            let base = self.expression.trim_end().len().saturating_sub(1);
            self.expression.truncate(base);
            self.expression.push(op.symbole());
            self.expression.push(' ');
        } else {
            self.expression.push(' ');
            self.expression.push(op.symbole());
            self.expression.push(' ');
        }

        self.op_en_attente = true;
        self.a_resultat = false;
        debug!(operateur = %op, expression = %self.expression, "opérateur");
    }

    /// "=" : évalue l’expression (sans priorité), le résultat remplace l’affichage.
    pub fn egal(&mut self) {
        if self.expression.is_empty() || self.expression == "-" {
            return;
        }

        let Some(resultat) = evaluer(&self.expression) else {
            return;
        };

        debug!(expression = %self.expression, resultat = %resultat, "égal");
        self.courant.clone_from(&resultat);
        self.expression = resultat;
        self.a_resultat = true;
        self.op_en_attente = false;
    }

    /// Clear : remise à zéro totale.
    pub fn effacer(&mut self) {
        *self = Self::default();
        debug!("effacer");
    }
}
