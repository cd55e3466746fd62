use mol_engine::{parse_inchi, parse_smiles, EngineError};

#[test]
fn smiles_linear_chain() {
    let mol = parse_smiles("CCO").expect("ethanol");
    assert_eq!(mol.atom_count(), 3);
    assert_eq!(mol.bond_count(), 2);
    assert_eq!(mol.element(0), Some("C"));
    assert_eq!(mol.element(1), Some("C"));
    assert_eq!(mol.element(2), Some("O"));
    assert!(mol.has_bond(0, 1));
    assert!(mol.has_bond(1, 2));
    assert!(!mol.has_bond(0, 2));
}

#[test]
fn smiles_branch() {
    let mol = parse_smiles("CC(C)O").expect("isopropanol skeleton");
    assert_eq!(mol.atom_count(), 4);
    assert_eq!(mol.bond_count(), 3);
    // Todos los enlaces salen del carbono central
    assert!(mol.has_bond(0, 1));
    assert!(mol.has_bond(1, 2));
    assert!(mol.has_bond(1, 3));
    assert_eq!(mol.degree(1), 3);
}

#[test]
fn smiles_ring_closure() {
    let mol = parse_smiles("C1CCCCC1").expect("cyclohexane");
    assert_eq!(mol.atom_count(), 6);
    assert_eq!(mol.bond_count(), 6);
    for i in 0..6 {
        assert_eq!(mol.degree(i), 2);
    }
}

#[test]
fn smiles_percent_ring_closure() {
    let mol = parse_smiles("C%10CCCC%10").expect("cyclopentane via %nn");
    assert_eq!(mol.atom_count(), 5);
    assert_eq!(mol.bond_count(), 5);
}

#[test]
fn smiles_aromatic_lowercase() {
    let mol = parse_smiles("c1ccccc1").expect("benzene");
    assert_eq!(mol.atom_count(), 6);
    assert_eq!(mol.bond_count(), 6);
    for i in 0..6 {
        assert_eq!(mol.element(i), Some("C"));
    }
}

#[test]
fn smiles_two_letter_and_brackets() {
    let mol = parse_smiles("CCl").expect("chloromethane");
    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.element(1), Some("Cl"));

    let salt = parse_smiles("[Na+].[Cl-]").expect("salt");
    assert_eq!(salt.atom_count(), 2);
    assert_eq!(salt.bond_count(), 0);
    assert_eq!(salt.element(0), Some("Na"));
    assert_eq!(salt.element(1), Some("Cl"));
}

#[test]
fn smiles_bond_symbols_are_accepted() {
    let mol = parse_smiles("C=C").expect("ethene");
    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
}

#[test]
fn smiles_rejects_malformed_input() {
    assert!(matches!(parse_smiles(""), Err(EngineError::InvalidSmiles(_))));
    assert!(matches!(parse_smiles("C("), Err(EngineError::InvalidSmiles(_))));
    assert!(matches!(parse_smiles("C1CC"), Err(EngineError::InvalidSmiles(_))));
    assert!(matches!(parse_smiles("Cq"), Err(EngineError::InvalidSmiles(_))));
    assert!(matches!(parse_smiles("C[N"), Err(EngineError::InvalidSmiles(_))));
}

#[test]
fn inchi_single_heavy_atom() {
    let methane = parse_inchi("InChI=1S/CH4/h1H4").expect("methane");
    assert_eq!(methane.atom_count(), 1);
    assert_eq!(methane.bond_count(), 0);
    assert_eq!(methane.element(0), Some("C"));

    let water = parse_inchi("InChI=1S/H2O/h1H2").expect("water");
    assert_eq!(water.atom_count(), 1);
    assert_eq!(water.element(0), Some("O"));
}

#[test]
fn inchi_connection_layer() {
    let ethanol = parse_inchi("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3").expect("ethanol");
    assert_eq!(ethanol.atom_count(), 3);
    assert_eq!(ethanol.bond_count(), 2);
    // Numeración InChI: carbonos 1 y 2, oxígeno 3
    assert_eq!(ethanol.element(0), Some("C"));
    assert_eq!(ethanol.element(2), Some("O"));
    assert!(ethanol.has_bond(0, 1));
    assert!(ethanol.has_bond(1, 2));
}

#[test]
fn inchi_ring_closure() {
    let benzene = parse_inchi("InChI=1S/C6H6/c1-2-4-6-5-3-1/h1-6H").expect("benzene");
    assert_eq!(benzene.atom_count(), 6);
    assert_eq!(benzene.bond_count(), 6);
    for i in 0..6 {
        assert_eq!(benzene.degree(i), 2);
    }
}

#[test]
fn inchi_branched_connections() {
    let isobutane = parse_inchi("InChI=1S/C4H10/c1-4(2)3/h4H,1-3H3").expect("isobutane");
    assert_eq!(isobutane.atom_count(), 4);
    assert_eq!(isobutane.bond_count(), 3);
    // El átomo 4 (índice 3) es el carbono central
    assert_eq!(isobutane.degree(3), 3);
}

#[test]
fn inchi_multi_component() {
    let hydrate =
        parse_inchi("InChI=1S/C2H6O.H2O/c1-2-3;/h3H,2H2,1H3;1H2").expect("ethanol hydrate");
    assert_eq!(hydrate.atom_count(), 4);
    assert_eq!(hydrate.bond_count(), 2);
    assert_eq!(hydrate.element(3), Some("O"));
    assert_eq!(hydrate.degree(3), 0);
}

#[test]
fn inchi_rejects_malformed_input() {
    assert!(matches!(
        parse_inchi("C2H6O"),
        Err(EngineError::InvalidInchi(_))
    ));
    assert!(matches!(
        parse_inchi("InChI="),
        Err(EngineError::InvalidInchi(_))
    ));
    assert!(matches!(
        parse_inchi("InChI=1S/xy"),
        Err(EngineError::InvalidInchi(_))
    ));
    // Conexión a un átomo que la fórmula no declara
    assert!(matches!(
        parse_inchi("InChI=1S/CH4/c1-2"),
        Err(EngineError::InvalidInchi(_))
    ));
}
