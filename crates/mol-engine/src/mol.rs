use serde::{Deserialize, Serialize};

/// Átomo pesado del esqueleto estructural. Solo conserva el símbolo del
/// elemento; los hidrógenos no se materializan como nodos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    symbol: String,
}

impl Atom {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Enlace no dirigido entre dos átomos, por índice dentro del `Mol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
}

/// Grafo molecular de átomos pesados.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mol {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Mol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, symbol: impl Into<String>) -> usize {
        self.atoms.push(Atom::new(symbol));
        self.atoms.len() - 1
    }

    /// Añade un enlace entre `a` y `b`. Lazos, índices fuera de rango y
    /// duplicados se ignoran.
    pub fn add_bond(&mut self, a: usize, b: usize) {
        if a == b || a >= self.atoms.len() || b >= self.atoms.len() {
            return;
        }
        if !self.has_bond(a, b) {
            self.bonds.push(Bond { a, b });
        }
    }

    pub fn has_bond(&self, a: usize, b: usize) -> bool {
        self.bonds
            .iter()
            .any(|x| (x.a == a && x.b == b) || (x.a == b && x.b == a))
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Símbolo del elemento del átomo `i`, si existe.
    pub fn element(&self, i: usize) -> Option<&str> {
        self.atoms.get(i).map(|a| a.symbol())
    }

    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        let mut out = Vec::new();
        for bond in &self.bonds {
            if bond.a == i {
                out.push(bond.b);
            } else if bond.b == i {
                out.push(bond.a);
            }
        }
        out
    }

    pub fn degree(&self, i: usize) -> usize {
        self.bonds.iter().filter(|b| b.a == i || b.b == i).count()
    }
}
