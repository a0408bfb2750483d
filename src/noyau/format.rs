// src/noyau/format.rs

use super::erreur::{ErreurEval, MARQUEUR_ERREUR};

/// Texte brut d’un résultat, réutilisable comme nouvelle expression (enchaînement).
/// Jamais de notation exponentielle : le texte reste dans la liste blanche.
pub fn nombre_en_texte(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Séparateurs de milliers sur la partie entière : 1234567.5 -> "1,234,567.5".
pub fn format_nombre(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }

    let brut = nombre_en_texte(v);
    let (signe, abs) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut.as_str()),
    };
    let (ent, frac) = match abs.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (abs, None),
    };

    let mut groupe = String::with_capacity(ent.len() + ent.len() / 3);
    for (i, c) in ent.chars().enumerate() {
        if i > 0 && (ent.len() - i) % 3 == 0 {
            groupe.push(',');
        }
        groupe.push(c);
    }

    match frac {
        Some(f) => format!("{signe}{groupe}.{f}"),
        None => format!("{signe}{groupe}"),
    }
}

/// Affichage d’un résultat : nombre groupé, ou le marqueur d’erreur tel quel.
pub fn format_affichage(res: &Result<f64, ErreurEval>) -> String {
    match res {
        Ok(v) => format_nombre(*v),
        Err(_) => MARQUEUR_ERREUR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliers() {
        assert_eq!(format_nombre(1234567.0), "1,234,567");
        assert_eq!(format_nombre(1000.0), "1,000");
        assert_eq!(format_nombre(999.0), "999");
        assert_eq!(format_nombre(0.0), "0");
    }

    #[test]
    fn partie_decimale_intacte() {
        assert_eq!(format_nombre(1234.5678), "1,234.5678");
        assert_eq!(format_nombre(0.001), "0.001");
    }

    #[test]
    fn negatifs() {
        assert_eq!(format_nombre(-1234567.0), "-1,234,567");
        assert_eq!(format_nombre(-12.5), "-12.5");
    }

    #[test]
    fn grands_nombres_sans_exposant() {
        assert_eq!(nombre_en_texte(1e21), "1000000000000000000000");
        assert_eq!(format_nombre(1e21), "1,000,000,000,000,000,000,000");
        assert_eq!(nombre_en_texte(1e-7), "0.0000001");
    }

    #[test]
    fn moins_zero() {
        assert_eq!(nombre_en_texte(-0.0), "0");
    }

    #[test]
    fn affichage_erreur() {
        assert_eq!(format_affichage(&Ok(1234567.0)), "1,234,567");
        assert_eq!(
            format_affichage(&Err(ErreurEval::DivisionParZero)),
            MARQUEUR_ERREUR
        );
        assert_eq!(format_affichage(&Err(ErreurEval::NonFini)), "Error");
    }
}
