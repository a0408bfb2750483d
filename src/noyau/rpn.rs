// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> Valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis évaluer la RPN sur une pile de Valeur
//
// Règles:
// - Précédence : + - (1) < * / (2) < signe unaire (3) < ** (4)
// - ** associatif à droite : 2**3**2 = 2**(3**2)
// - Signe unaire: '-' ou '+' quand on attend une valeur.
//    - '-' devient Tok::Neg (préfixe), '+' est ignoré
//    - donc -2**2 = -(2**2) et 2**-1 = 2**(-1)
// - Pas de multiplication implicite : "2(3)" est refusé.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, Tok};
use super::valeur::Valeur;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Pow => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Pow)
}

fn inattendu(t: &Tok) -> ErreurEval {
    ErreurEval::JetonInattendu(format_tokens(std::slice::from_ref(t)))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le signe unaire et les jetons mal placés.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(inattendu(&tok));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(inattendu(&tok));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // "()" ou "(2+)" : rien à fermer
                if !prev_was_value {
                    return Err(inattendu(&tok));
                }

                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurEval::ParentheseOrpheline);
                }
            }

            Tok::Minus if !prev_was_value => ops.push(Tok::Neg),
            Tok::Plus if !prev_was_value => {}

            Tok::Star | Tok::Slash | Tok::Pow | Tok::Neg if !prev_was_value => {
                return Err(inattendu(&tok));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow | Tok::Neg => {
                // dépile tant que la précédence/associativité l’exige,
                // sans traverser une '('
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    out.extend(ops.pop());
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // "5+" ou "(" : il manque une valeur
    if !prev_was_value {
        return Err(ErreurEval::FinInattendue);
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN produite par to_rpn().
pub fn eval_rpn(rpn: &[Tok]) -> Result<Valeur, ErreurEval> {
    let mut st: Vec<Valeur> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(Valeur::Exact(r)),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::FinInattendue)?;
                st.push(x.neg());
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                let b = st.pop().ok_or(ErreurEval::FinInattendue)?;
                let a = st.pop().ok_or(ErreurEval::FinInattendue)?;

                let v = match tok {
                    Tok::Plus => a.add(b),
                    Tok::Minus => a.sub(b),
                    Tok::Star => a.mul(b),
                    Tok::Slash => a.div(b)?,
                    _ => a.pow(b)?,
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(inattendu(&tok)),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::FinInattendue),
    }
}
