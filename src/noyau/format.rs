// src/noyau/format.rs
//
// Affichage d’un résultat f64 tel qu’un navigateur l’écrirait :
// - entier sans ".0", -0 => "0"
// - chiffres minimaux (aller-retour exact)
// - notation exponentielle hors de [1e-6, 1e21) : "1e+21", "1.5e-7"
// - non finis : "Infinity", "-Infinity", "NaN"
//
// Contrat : toute sortie finie relue par `lire_nombre` redonne la même valeur.

const SEUIL_EXP_HAUT: f64 = 1e21;
const SEUIL_EXP_BAS: f64 = 1e-6;

pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // couvre -0
        return "0".to_string();
    }

    let a = v.abs();
    if (SEUIL_EXP_BAS..SEUIL_EXP_HAUT).contains(&a) {
        return format!("{v}");
    }

    // `{:e}` donne déjà la mantisse minimale ; on ajoute le signe "+" de l’exposant.
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
