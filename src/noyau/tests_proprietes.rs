//! Tests de propriétés du noyau : robustesse + déterminisme.
//!
//! - entrées arbitraires : `evaluer` ne panique jamais
//! - pliage gauche → droite vérifié contre un calcul direct
//! - "Error" si et seulement si un diviseur est nul

use proptest::prelude::*;

use super::evaluer;
use super::format::format_nombre;
use super::jetons::{lire_nombre, Operateur};

fn operateur() -> impl Strategy<Value = Operateur> {
    prop::sample::select(Operateur::TOUS.to_vec())
}

/// Expression bien formée : n0 (op ni)*
fn expression() -> impl Strategy<Value = (i32, Vec<(Operateur, i32)>)> {
    (
        -1000i32..1000,
        prop::collection::vec((operateur(), -20i32..20), 1..8),
    )
}

fn texte(premier: i32, suite: &[(Operateur, i32)]) -> String {
    let mut s = premier.to_string();
    for (op, n) in suite {
        s.push_str(&format!(" {op} {n}"));
    }
    s
}

proptest! {
    #[test]
    fn prop_jamais_de_panique(s in "[0-9 .+*/eE-]{0,24}") {
        let _ = evaluer(&s);
    }

    #[test]
    fn prop_gauche_a_droite((premier, suite) in expression()) {
        let s = texte(premier, &suite);
        let sortie = evaluer(&s).unwrap();

        let mut acc = f64::from(premier);
        let mut erreur = false;
        for (op, n) in &suite {
            let d = f64::from(*n);
            match op {
                Operateur::Plus => acc += d,
                Operateur::Moins => acc -= d,
                Operateur::Fois => acc *= d,
                Operateur::Divise => {
                    if d == 0.0 {
                        erreur = true;
                        break;
                    }
                    acc /= d;
                }
            }
        }

        if erreur {
            prop_assert_eq!(sortie, "Error");
        } else {
            prop_assert_eq!(sortie, format_nombre(acc));
        }
    }

    #[test]
    fn prop_operateur_final_sans_effet((premier, suite) in expression(), op in operateur()) {
        let s = texte(premier, &suite);
        let avec_reliquat = format!("{s} {op} ");
        prop_assert_eq!(evaluer(&s), evaluer(&avec_reliquat));
    }

    #[test]
    fn prop_format_relu(v in any::<f64>().prop_filter("fini", |v| v.is_finite())) {
        let s = format_nombre(v);
        let relu = lire_nombre(&s).unwrap();
        // -0 s’affiche "0"
        prop_assert!(relu == v);
    }
}
