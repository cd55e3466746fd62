use std::collections::VecDeque;

use crate::Mol;

/// Devuelve `true` si `target` contiene a `query` como subestructura.
///
/// Busca un monomorfismo de subgrafo: una asignación inyectiva de los átomos
/// de la consulta sobre los del objetivo que preserve elemento y enlaces.
/// Una consulta sin átomos está contenida en cualquier estructura; el
/// tratamiento "fail-closed" de la consulta vacía corresponde a
/// [`crate::SubstructureQuery`], no a esta función.
pub fn has_substruct_match(target: &Mol, query: &Mol) -> bool {
    if query.is_empty() {
        return true;
    }
    if query.atom_count() > target.atom_count() || query.bond_count() > target.bond_count() {
        return false;
    }
    let order = search_order(query);
    let mut mapping = vec![usize::MAX; query.atom_count()];
    let mut used = vec![false; target.atom_count()];
    extend(target, query, &order, 0, &mut mapping, &mut used)
}

/// Orden de búsqueda por anchura: cada átomo (salvo el primero de cada
/// fragmento) entra con algún vecino ya colocado, lo que permite podar pronto.
fn search_order(query: &Mol) -> Vec<usize> {
    let n = query.atom_count();
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for w in query.neighbors(v) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
    }
    order
}

fn extend(
    target: &Mol,
    query: &Mol,
    order: &[usize],
    pos: usize,
    mapping: &mut [usize],
    used: &mut [bool],
) -> bool {
    if pos == order.len() {
        return true;
    }
    let q = order[pos];
    for t in 0..target.atom_count() {
        if used[t] {
            continue;
        }
        if target.element(t) != query.element(q) {
            continue;
        }
        if target.degree(t) < query.degree(q) {
            continue;
        }
        // Los vecinos ya asignados de `q` deben seguir siendo vecinos de `t`.
        let compatible = query.neighbors(q).into_iter().all(|w| {
            let m = mapping[w];
            m == usize::MAX || target.has_bond(t, m)
        });
        if !compatible {
            continue;
        }
        mapping[q] = t;
        used[t] = true;
        if extend(target, query, order, pos + 1, mapping, used) {
            return true;
        }
        mapping[q] = usize::MAX;
        used[t] = false;
    }
    false
}
