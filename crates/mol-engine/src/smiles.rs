use std::collections::HashMap;

use crate::{EngineError, Mol};

/// Parsea una cadena SMILES al esqueleto de átomos pesados.
///
/// Se soporta el subconjunto orgánico (B, C, N, O, P, S, F, Cl, Br, I),
/// átomos entre corchetes, aromáticos en minúscula, ramas, cierres de anillo
/// (incluido `%nn`) y el separador de fragmentos `.`. Los símbolos de enlace
/// se aceptan pero el orden de enlace no se conserva: el matching posterior
/// trabaja sobre el esqueleto etiquetado por elemento.
pub fn parse_smiles(input: &str) -> Result<Mol, EngineError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidSmiles("cadena vacía".to_string()));
    }
    let chars: Vec<char> = trimmed.chars().collect();
    let mut mol = Mol::new();
    let mut prev: Option<usize> = None;
    let mut branches: Vec<Option<usize>> = Vec::new();
    let mut open_rings: HashMap<u32, usize> = HashMap::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '(' => {
                branches.push(prev);
                i += 1;
            }
            ')' => {
                prev = branches.pop().ok_or_else(|| {
                    EngineError::InvalidSmiles(format!("paréntesis sin abrir en '{}'", trimmed))
                })?;
                i += 1;
            }
            '-' | '=' | '#' | ':' | '/' | '\\' => {
                i += 1;
            }
            '.' => {
                prev = None;
                i += 1;
            }
            '[' => {
                let close = chars[i..].iter().position(|&x| x == ']').ok_or_else(|| {
                    EngineError::InvalidSmiles(format!("corchete sin cerrar en '{}'", trimmed))
                })?;
                let body: String = chars[i + 1..i + close].iter().collect();
                let symbol = bracket_symbol(&body).ok_or_else(|| {
                    EngineError::InvalidSmiles(format!("átomo ilegible '[{}]'", body))
                })?;
                let idx = mol.add_atom(symbol);
                if let Some(p) = prev {
                    mol.add_bond(p, idx);
                }
                prev = Some(idx);
                i += close + 1;
            }
            '%' => {
                if i + 2 >= chars.len()
                    || !chars[i + 1].is_ascii_digit()
                    || !chars[i + 2].is_ascii_digit()
                {
                    return Err(EngineError::InvalidSmiles(format!(
                        "cierre de anillo '%' incompleto en '{}'",
                        trimmed
                    )));
                }
                let n = chars[i + 1].to_digit(10).unwrap_or(0) * 10
                    + chars[i + 2].to_digit(10).unwrap_or(0);
                toggle_ring(&mut mol, &mut open_rings, prev, n)?;
                i += 3;
            }
            d if d.is_ascii_digit() => {
                let n = d.to_digit(10).unwrap_or(0);
                toggle_ring(&mut mol, &mut open_rings, prev, n)?;
                i += 1;
            }
            _ => {
                let (symbol, len) = organic_symbol(&chars[i..]).ok_or_else(|| {
                    EngineError::InvalidSmiles(format!(
                        "símbolo no reconocido '{}' en '{}'",
                        c, trimmed
                    ))
                })?;
                let idx = mol.add_atom(symbol);
                if let Some(p) = prev {
                    mol.add_bond(p, idx);
                }
                prev = Some(idx);
                i += len;
            }
        }
    }
    if !branches.is_empty() {
        return Err(EngineError::InvalidSmiles(format!(
            "paréntesis sin cerrar en '{}'",
            trimmed
        )));
    }
    if !open_rings.is_empty() {
        return Err(EngineError::InvalidSmiles(format!(
            "cierre de anillo pendiente en '{}'",
            trimmed
        )));
    }
    Ok(mol)
}

/// Abre o cierra el anillo `n` sobre el átomo actual.
fn toggle_ring(
    mol: &mut Mol,
    open_rings: &mut HashMap<u32, usize>,
    prev: Option<usize>,
    n: u32,
) -> Result<(), EngineError> {
    let current = prev.ok_or_else(|| {
        EngineError::InvalidSmiles("cierre de anillo sin átomo previo".to_string())
    })?;
    match open_rings.remove(&n) {
        Some(other) => mol.add_bond(current, other),
        None => {
            open_rings.insert(n, current);
        }
    }
    Ok(())
}

/// Símbolo de un átomo del subconjunto orgánico en la posición actual, junto
/// con los caracteres consumidos.
fn organic_symbol(rest: &[char]) -> Option<(String, usize)> {
    let c = *rest.first()?;
    match c {
        'C' if rest.get(1) == Some(&'l') => Some(("Cl".to_string(), 2)),
        'B' if rest.get(1) == Some(&'r') => Some(("Br".to_string(), 2)),
        'B' | 'C' | 'N' | 'O' | 'P' | 'S' | 'F' | 'I' => Some((c.to_string(), 1)),
        'b' | 'c' | 'n' | 'o' | 'p' | 's' => Some((c.to_ascii_uppercase().to_string(), 1)),
        _ => None,
    }
}

/// Símbolo del elemento dentro de un átomo `[...]`. El isótopo inicial se
/// descarta y el resto del cuerpo (hidrógenos, carga, quiralidad, mapa) se
/// ignora.
fn bracket_symbol(body: &str) -> Option<String> {
    let rest = body.trim_start_matches(|c: char| c.is_ascii_digit());
    let mut chars = rest.chars();
    let first = chars.next()?;
    if first.is_ascii_uppercase() {
        let mut symbol = first.to_string();
        if let Some(second) = chars.next() {
            if second.is_ascii_lowercase() {
                symbol.push(second);
            }
        }
        Some(symbol)
    } else if first.is_ascii_lowercase() {
        Some(first.to_ascii_uppercase().to_string())
    } else {
        None
    }
}
