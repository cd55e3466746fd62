use crate::{EngineError, Mol};

/// Prefijo que distingue un InChI canónico de una notación corta (SMILES).
pub const INCHI_PREFIX: &str = "InChI=";

/// Parsea un InChI estándar al esqueleto de átomos pesados.
///
/// Se usan la capa de fórmula (orden de Hill; los hidrógenos no entran en la
/// numeración) y la capa de conexiones `/c`. El resto de capas se ignora:
/// este grafo alimenta el test de subestructura, no una reconstrucción
/// completa de la molécula.
pub fn parse_inchi(input: &str) -> Result<Mol, EngineError> {
    let trimmed = input.trim();
    let rest = trimmed.strip_prefix(INCHI_PREFIX).ok_or_else(|| {
        EngineError::InvalidInchi(format!("falta el prefijo '{}'", INCHI_PREFIX))
    })?;
    let mut layers = rest.split('/');
    let version = layers.next().unwrap_or("");
    if version.is_empty() || !version.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(EngineError::InvalidInchi(format!(
            "versión ilegible en '{}'",
            trimmed
        )));
    }
    let formula = layers.next().ok_or_else(|| {
        EngineError::InvalidInchi(format!("sin capa de fórmula en '{}'", trimmed))
    })?;
    let components = parse_formula(formula)?;

    let mut mol = Mol::new();
    let mut bases = Vec::with_capacity(components.len());
    for atoms in &components {
        bases.push(mol.atom_count());
        for symbol in atoms {
            mol.add_atom(symbol.clone());
        }
    }
    for layer in layers {
        // La capa de conexiones es la única con prefijo 'c'; h/q/p/b/t/m/s/i
        // no aportan conectividad de esqueleto.
        if let Some(connections) = layer.strip_prefix('c') {
            apply_connections(&mut mol, &bases, &components, connections)?;
            break;
        }
    }
    Ok(mol)
}

/// Átomos pesados por componente de la fórmula, en orden de numeración.
fn parse_formula(formula: &str) -> Result<Vec<Vec<String>>, EngineError> {
    if formula.is_empty() {
        return Err(EngineError::InvalidInchi("fórmula vacía".to_string()));
    }
    let mut out = Vec::new();
    for part in formula.split('.') {
        let (count, body) = split_leading_count(part);
        if body.is_empty() {
            return Err(EngineError::InvalidInchi(format!(
                "componente vacío en la fórmula '{}'",
                formula
            )));
        }
        let atoms = component_atoms(body)?;
        for _ in 0..count {
            out.push(atoms.clone());
        }
    }
    Ok(out)
}

fn split_leading_count(part: &str) -> (usize, &str) {
    let digits = part.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        (1, part)
    } else {
        (part[..digits].parse().unwrap_or(1), &part[digits..])
    }
}

/// Expande un componente ("C2H6O") a su lista de átomos pesados en el orden
/// de numeración InChI: carbonos primero y el resto de elementos en orden
/// alfabético, excluyendo el hidrógeno.
fn component_atoms(body: &str) -> Result<Vec<String>, EngineError> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let chars: Vec<char> = body.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_uppercase() {
            return Err(EngineError::InvalidInchi(format!(
                "fórmula ilegible '{}'",
                body
            )));
        }
        let mut symbol = chars[i].to_string();
        i += 1;
        while i < chars.len() && chars[i].is_ascii_lowercase() {
            symbol.push(chars[i]);
            i += 1;
        }
        let mut digits = String::new();
        while i < chars.len() && chars[i].is_ascii_digit() {
            digits.push(chars[i]);
            i += 1;
        }
        let n = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| {
                EngineError::InvalidInchi(format!("recuento ilegible en '{}'", body))
            })?
        };
        counts.push((symbol, n));
    }
    let mut atoms = Vec::new();
    for (symbol, n) in counts.iter().filter(|(s, _)| s.as_str() == "C") {
        for _ in 0..*n {
            atoms.push(symbol.clone());
        }
    }
    let mut rest: Vec<&(String, usize)> = counts
        .iter()
        .filter(|(s, _)| s.as_str() != "C" && s.as_str() != "H")
        .collect();
    rest.sort_by(|x, y| x.0.cmp(&y.0));
    for (symbol, n) in rest {
        for _ in 0..*n {
            atoms.push(symbol.clone());
        }
    }
    Ok(atoms)
}

/// Aplica la capa `/c` completa. Los componentes van separados por `;` y un
/// prefijo `n*` repite el mismo patrón sobre `n` componentes consecutivos.
fn apply_connections(
    mol: &mut Mol,
    bases: &[usize],
    components: &[Vec<String>],
    text: &str,
) -> Result<(), EngineError> {
    let mut comp = 0usize;
    for chunk in text.split(';') {
        let (repeat, pattern) = match chunk.split_once('*') {
            Some((n, p)) => {
                let n = n.parse::<usize>().map_err(|_| {
                    EngineError::InvalidInchi(format!("multiplicador ilegible '{}'", chunk))
                })?;
                (n, p)
            }
            None => (1, chunk),
        };
        for _ in 0..repeat {
            if comp >= bases.len() {
                return Err(EngineError::InvalidInchi(format!(
                    "capa /c con más componentes que la fórmula: '{}'",
                    text
                )));
            }
            if !pattern.is_empty() {
                apply_component(mol, bases[comp], components[comp].len(), pattern)?;
            }
            comp += 1;
        }
    }
    Ok(())
}

/// Conexiones de un componente: cadenas `1-2-3`, ramas `(...)` y alternativas
/// `,` dentro de una rama. Un número repetido cierra un anillo.
fn apply_component(
    mol: &mut Mol,
    base: usize,
    natoms: usize,
    pattern: &str,
) -> Result<(), EngineError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut current: Option<usize> = None;
    let mut branches: Vec<usize> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while i < chars.len() && chars[i].is_ascii_digit() {
                digits.push(chars[i]);
                i += 1;
            }
            let n: usize = digits.parse().map_err(|_| {
                EngineError::InvalidInchi(format!("número ilegible en '/c{}'", pattern))
            })?;
            if n == 0 || n > natoms {
                return Err(EngineError::InvalidInchi(format!(
                    "átomo {} fuera de rango en '/c{}'",
                    n, pattern
                )));
            }
            let idx = base + n - 1;
            if let Some(cur) = current {
                mol.add_bond(cur, idx);
            }
            current = Some(idx);
        } else {
            match c {
                '-' => {}
                '(' => {
                    let cur = current.ok_or_else(|| {
                        EngineError::InvalidInchi(format!(
                            "rama sin átomo previo en '/c{}'",
                            pattern
                        ))
                    })?;
                    branches.push(cur);
                }
                ')' => {
                    current = Some(branches.pop().ok_or_else(|| {
                        EngineError::InvalidInchi(format!(
                            "paréntesis sin abrir en '/c{}'",
                            pattern
                        ))
                    })?);
                }
                ',' => {
                    current = Some(*branches.last().ok_or_else(|| {
                        EngineError::InvalidInchi(format!(
                            "',' fuera de una rama en '/c{}'",
                            pattern
                        ))
                    })?);
                }
                _ => {
                    return Err(EngineError::InvalidInchi(format!(
                        "carácter '{}' inesperado en '/c{}'",
                        c, pattern
                    )));
                }
            }
            i += 1;
        }
    }
    Ok(())
}
