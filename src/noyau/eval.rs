//! Noyau — évaluation gauche → droite (sans priorité)
//!
//! nettoyer_fin -> découpe -> pliage (opérateur, opérande) -> format
//!
//! "2 + 3 * 4" vaut 20 : on ne réordonne jamais les jetons.

use tracing::{debug, warn};

use super::erreur::{ErreurCalcul, LIBELLE_ERREUR};
use super::format::format_nombre;
use super::jetons::{decouper, lire_nombre, nettoyer_fin, Operateur};

/// API publique : évalue une expression et retourne le texte à afficher.
///
/// - `None` si l’expression est vide une fois nettoyée (l’appelant abandonne)
/// - moins de 3 jetons : le premier jeton, tel quel
/// - toute erreur : `"Error"`
pub fn evaluer(expr_str: &str) -> Option<String> {
    let s = nettoyer_fin(expr_str);
    if s.is_empty() {
        return None;
    }

    let jetons = decouper(s);
    if jetons.len() < 3 {
        return jetons.first().map(|j| (*j).to_string());
    }

    let sortie = match plier(&jetons) {
        Ok(v) => format_nombre(v),
        Err(e) => {
            warn!(expression = s, erreur = %e, "évaluation refusée");
            LIBELLE_ERREUR.to_string()
        }
    };
    debug!(expression = s, resultat = %sortie, "évaluation");
    Some(sortie)
}

/// Pliage gauche → droite sur des jetons déjà découpés.
/// Une paire incomplète en fin de liste est ignorée.
fn plier(jetons: &[&str]) -> Result<f64, ErreurCalcul> {
    let (premier, reste) = match jetons.split_first() {
        Some(x) => x,
        None => return Err(ErreurCalcul::OperandeInvalide(String::new())),
    };

    let mut acc = lire_nombre(premier)?;
    for paire in reste.chunks_exact(2) {
        let op = Operateur::depuis_jeton(paire[0])?;
        let droite = lire_nombre(paire[1])?;
        acc = op.appliquer(acc, droite)?;
    }
    Ok(acc)
}
