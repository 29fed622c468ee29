// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalcul;

/// Les quatre opérateurs du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Un jeton opérateur fait exactement un caractère.
    pub fn depuis_jeton(jeton: &str) -> Result<Self, ErreurCalcul> {
        let mut it = jeton.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => {
                Self::depuis_char(c).ok_or_else(|| ErreurCalcul::OperateurInconnu(jeton.into()))
            }
            _ => Err(ErreurCalcul::OperateurInconnu(jeton.into())),
        }
    }

    /// Applique l’opérateur (gauche ∘ droite). Division par zéro refusée.
    pub fn appliquer(self, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Operateur::Plus => Ok(gauche + droite),
            Operateur::Moins => Ok(gauche - droite),
            Operateur::Fois => Ok(gauche * droite),
            Operateur::Divise => {
                if droite == 0.0 {
                    Err(ErreurCalcul::DivisionParZero)
                } else {
                    Ok(gauche / droite)
                }
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Retire les espaces puis tout reliquat d’opérateurs / espaces en fin d’expression.
///
/// "12 + 3 * " -> "12 + 3"
pub fn nettoyer_fin(expr: &str) -> &str {
    expr.trim()
        .trim_end_matches(|c: char| c.is_whitespace() || Operateur::depuis_char(c).is_some())
}

/// Découpe sur les espaces (espaces multiples tolérés).
pub fn decouper(expr: &str) -> Vec<&str> {
    expr.split_whitespace().collect()
}

/// Lit un jeton nombre. NaN est refusé comme un jeton illisible.
pub fn lire_nombre(jeton: &str) -> Result<f64, ErreurCalcul> {
    match jeton.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(ErreurCalcul::OperandeInvalide(jeton.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nettoyer_fin_retire_operateur_en_attente() {
        assert_eq!(nettoyer_fin("12 + 3 * "), "12 + 3");
        assert_eq!(nettoyer_fin("  7  "), "7");
        assert_eq!(nettoyer_fin("- "), "");
        assert_eq!(nettoyer_fin("-5 + "), "-5");
    }

    #[test]
    fn nettoyer_fin_garde_le_point_final() {
        assert_eq!(nettoyer_fin("1 + 2."), "1 + 2.");
    }

    #[test]
    fn decouper_espaces_multiples() {
        assert_eq!(decouper(" 1  +   2 "), vec!["1", "+", "2"]);
        assert!(decouper("   ").is_empty());
    }

    #[test]
    fn operateur_depuis_jeton() {
        for op in Operateur::TOUS {
            let s = op.to_string();
            assert_eq!(Operateur::depuis_jeton(&s), Ok(op));
        }
        assert!(matches!(
            Operateur::depuis_jeton("%"),
            Err(ErreurCalcul::OperateurInconnu(_))
        ));
        assert!(matches!(
            Operateur::depuis_jeton("++"),
            Err(ErreurCalcul::OperateurInconnu(_))
        ));
    }

    #[test]
    fn lire_nombre_formes_acceptees() {
        assert_eq!(lire_nombre("12"), Ok(12.0));
        assert_eq!(lire_nombre("-3.5"), Ok(-3.5));
        assert_eq!(lire_nombre("0."), Ok(0.0));
        assert_eq!(lire_nombre(".5"), Ok(0.5));
        assert_eq!(lire_nombre("1e+21"), Ok(1e21));
        assert_eq!(lire_nombre("Infinity"), Ok(f64::INFINITY));
    }

    #[test]
    fn lire_nombre_refuse() {
        for s in ["-", ".", "Error", "NaN", "1.2.3", "abc"] {
            assert!(lire_nombre(s).is_err(), "{s:?} devrait être refusé");
        }
    }

    #[test]
    fn division_par_zero_refusee() {
        assert_eq!(
            Operateur::Divise.appliquer(1.0, 0.0),
            Err(ErreurCalcul::DivisionParZero)
        );
        assert_eq!(
            Operateur::Divise.appliquer(1.0, -0.0),
            Err(ErreurCalcul::DivisionParZero)
        );
        assert_eq!(Operateur::Divise.appliquer(9.0, 3.0), Ok(3.0));
    }
}
