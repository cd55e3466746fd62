use mol_engine::{has_substruct_match, parse_inchi, parse_smiles, Mol, SubstructureQuery};

fn ethanol() -> Mol {
    parse_inchi("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3").expect("ethanol")
}

fn methane() -> Mol {
    parse_inchi("InChI=1S/CH4/h1H4").expect("methane")
}

fn benzene() -> Mol {
    parse_inchi("InChI=1S/C6H6/c1-2-4-6-5-3-1/h1-6H").expect("benzene")
}

#[test]
fn single_atom_query() {
    let oxygen = parse_smiles("O").expect("oxygen");
    assert!(has_substruct_match(&ethanol(), &oxygen));
    assert!(!has_substruct_match(&methane(), &oxygen));
}

#[test]
fn chain_query_matches_independent_of_notation() {
    let forward = parse_smiles("CCO").expect("CCO");
    let reversed = parse_smiles("OCC").expect("OCC");
    assert!(has_substruct_match(&ethanol(), &forward));
    assert!(has_substruct_match(&ethanol(), &reversed));
    assert!(!has_substruct_match(&methane(), &forward));
}

#[test]
fn query_larger_than_target_never_matches() {
    let butane = parse_smiles("CCCC").expect("butane");
    assert!(!has_substruct_match(&ethanol(), &butane));
}

#[test]
fn ring_query_against_ring_and_chain() {
    let aromatic_ring = parse_smiles("c1ccccc1").expect("aromatic ring");
    let chain6 = parse_smiles("CCCCCC").expect("hexane");
    // La cadena de seis carbonos cabe en el anillo, el anillo no cabe en la
    // cadena (le falta el enlace de cierre).
    assert!(has_substruct_match(&benzene(), &aromatic_ring));
    assert!(has_substruct_match(&benzene(), &chain6));
    assert!(!has_substruct_match(&chain6, &aromatic_ring));
}

#[test]
fn fragment_query_maps_to_disjoint_atoms() {
    let fragments = parse_smiles("CC.O").expect("fragments");
    assert!(has_substruct_match(&ethanol(), &fragments));
    assert!(!has_substruct_match(&methane(), &fragments));
}

#[test]
fn empty_query_semantics() {
    // La función de matching es vacuamente verdadera...
    assert!(has_substruct_match(&ethanol(), &Mol::new()));
    // ...pero la consulta compilada vacía es fail-closed.
    let empty = SubstructureQuery::new(Mol::new());
    assert!(empty.is_empty());
    assert!(!empty.matches(&ethanol()));
    assert!(!SubstructureQuery::empty().matches(&benzene()));
}

#[test]
fn compiled_query_matches() {
    let query = SubstructureQuery::new(parse_smiles("CO").expect("CO"));
    assert!(!query.is_empty());
    assert!(query.matches(&ethanol()));
    assert!(!query.matches(&methane()));
}
