use mol_domain::Molecule;
use mol_filter::SubstructureFilter;

const ETHANOL: &str = "InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3";
const METHANE: &str = "InChI=1S/CH4/h1H4";
const WATER: &str = "InChI=1S/H2O/h1H2";
const BENZENE: &str = "InChI=1S/C6H6/c1-2-4-6-5-3-1/h1-6H";

fn rows() -> Vec<Molecule> {
    [ETHANOL, METHANE, WATER, BENZENE]
        .iter()
        .map(|inchi| Molecule::from_inchi(inchi).expect("fila de prueba"))
        .collect()
}

fn accepted(filter: &SubstructureFilter, rows: &[Molecule]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, m)| filter.accepts_row(m))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn unset_identifier_accepts_no_rows() {
    let filter = SubstructureFilter::new();
    assert_eq!(filter.identifier(), "");
    assert!(accepted(&filter, &rows()).is_empty());
}

#[test]
fn smiles_query_filters_rows() {
    let rows = rows();
    let mut filter = SubstructureFilter::new();
    filter.set_identifier("O");
    assert_eq!(filter.identifier(), "O");
    // Etanol y agua contienen oxígeno; metano y benceno no
    assert_eq!(accepted(&filter, &rows), vec![0, 2]);
}

#[test]
fn equivalent_notations_filter_identically() {
    let rows = rows();
    let mut a = SubstructureFilter::new();
    let mut b = SubstructureFilter::new();
    let mut c = SubstructureFilter::new();
    a.set_identifier("CCO");
    b.set_identifier("OCC");
    c.set_identifier(ETHANOL);
    let expected = vec![0];
    assert_eq!(accepted(&a, &rows), expected);
    assert_eq!(accepted(&b, &rows), expected);
    assert_eq!(accepted(&c, &rows), expected);
}

#[test]
fn inchi_prefix_switches_interpretation() {
    let rows = rows();
    let mut filter = SubstructureFilter::new();
    filter.set_identifier(METHANE);
    assert_eq!(filter.identifier(), METHANE);
    // Un solo carbono: casa con etanol, metano y benceno, no con agua
    assert_eq!(accepted(&filter, &rows), vec![0, 1, 3]);
}

#[test]
fn changing_identifier_back_reproduces_accepted_set() {
    let rows = rows();
    let mut filter = SubstructureFilter::new();
    filter.set_identifier("CCO");
    let first = accepted(&filter, &rows);

    filter.set_identifier("c1ccccc1");
    assert_eq!(accepted(&filter, &rows), vec![3]);

    filter.set_identifier("CCO");
    assert_eq!(accepted(&filter, &rows), first);
    assert_eq!(filter.identifier(), "CCO");
}

#[test]
fn unparsable_identifier_fails_closed() {
    let rows = rows();
    let mut filter = SubstructureFilter::new();
    filter.set_identifier("InChI=bogus");
    assert_eq!(filter.identifier(), "InChI=bogus");
    assert!(accepted(&filter, &rows).is_empty());

    filter.set_identifier("not a smiles !!");
    assert!(accepted(&filter, &rows).is_empty());
}

#[test]
fn columns_are_never_filtered() {
    let mut filter = SubstructureFilter::new();
    for column in 0..8 {
        assert!(filter.accepts_column(column));
    }
    filter.set_identifier("CCO");
    for column in 0..8 {
        assert!(filter.accepts_column(column));
    }
}
