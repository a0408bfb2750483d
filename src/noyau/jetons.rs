// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // ** (le ^ affiché est normalisé en ** avant tokenisation)

    // Signe unaire : jamais produit par tokenize(), seulement par to_rpn().
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne normalisée en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 3.) -> rationnel exact
/// - opérateurs + - * / et ** (puissance)
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                // "**" collé = puissance ; "* *" reste deux multiplications (=> erreur au parse)
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::Pow);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : chiffres* ('.' chiffres*)? avec au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let ent: String = chars[start..i].iter().collect();

            let mut frac = String::new();
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let start_f = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                frac = chars[start_f..i].iter().collect();
            }

            let brut: String = chars[start..i].iter().collect();
            out.push(Tok::Num(decimal_exact(&ent, &frac, &brut)?));
            continue;
        }

        return Err(ErreurEval::CaractereInterdit(c));
    }

    Ok(out)
}

/// "12" + "34" -> 1234/100 (sans passer par f64).
fn decimal_exact(ent: &str, frac: &str, brut: &str) -> Result<BigRational, ErreurEval> {
    if ent.is_empty() && frac.is_empty() {
        return Err(ErreurEval::NombreInvalide(brut.to_string()));
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::NombreInvalide(brut.to_string()))?;

    let d = if frac.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(frac.len() as u32)
    };

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Pow => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
