use std::error::Error;
use std::io::{self, Write};

use mol_domain::{validate_inchikey, MoleculeRef};
use mol_filter::SubstructureFilter;
use mol_store::NewMoleculeRecord;

/// Pequeño menú interactivo sobre el núcleo de acceso a datos del visor.
///
/// Las refs encontradas o importadas se acumulan en la sesión y hacen de
/// conjunto tabular sobre el que se aplica el filtro de subestructura.
///
/// Opciones soportadas:
/// 1) Buscar molécula por InChIKey
/// 2) Buscar molécula por InChI
/// 3) Ver registro de una ref de la sesión
/// 4) Importar un documento de molécula
/// 5) Filtrar la sesión por subestructura
/// 6) Salir
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let client = mol_store::instance();
    let mut session: Vec<MoleculeRef> = Vec::new();
    let mut filter = SubstructureFilter::new();

    loop {
        println!("\n== MolView ==");
        println!("1) Buscar por InChIKey");
        println!("2) Buscar por InChI");
        println!("3) Ver registro (índice de la sesión)");
        println!("4) Importar molécula");
        println!("5) Filtrar por subestructura");
        println!("6) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        match choice.trim() {
            "1" => {
                let key = prompt("InChIKey: ")?;
                if let Err(e) = validate_inchikey(key.trim()) {
                    eprintln!("{}", e);
                    continue;
                }
                let mut db = client.lock().map_err(|_| "cliente global envenenado")?;
                match db.find_molecule_from_inchikey(key.trim()) {
                    Some(r) => {
                        println!("Encontrada: {} (índice {})", r, session.len());
                        session.push(r);
                    }
                    None => println!("Sin resultado (o sin conexión con el almacén)"),
                }
            }
            "2" => {
                let inchi = prompt("InChI: ")?;
                let mut db = client.lock().map_err(|_| "cliente global envenenado")?;
                match db.find_molecule_from_inchi(inchi.trim()) {
                    Some(r) => {
                        println!("Encontrada: {} (índice {})", r, session.len());
                        session.push(r);
                    }
                    None => println!("Sin resultado (o sin conexión con el almacén)"),
                }
            }
            "3" => {
                let idx_s = prompt("Índice de la sesión: ")?;
                let idx: usize = match idx_s.trim().parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Índice inválido");
                        continue;
                    }
                };
                let Some(r) = session.get(idx).copied() else {
                    eprintln!("Índice fuera de rango (sesión con {} refs)", session.len());
                    continue;
                };
                let mut db = client.lock().map_err(|_| "cliente global envenenado")?;
                match db.fetch_molecule(&r) {
                    Some(record) => {
                        println!("id:       {}", record.id);
                        println!("inchi:    {}", record.inchi.as_deref().unwrap_or("-"));
                        println!("inchikey: {}", record.inchikey.as_deref().unwrap_or("-"));
                        println!("name:     {}", record.name.as_deref().unwrap_or("-"));
                    }
                    None => println!("Sin registro (o sin conexión con el almacén)"),
                }
            }
            "4" => {
                let inchi = prompt("InChI (enter para omitir): ")?;
                let inchikey = prompt("InChIKey (enter para omitir): ")?;
                let name = prompt("Nombre (enter para omitir): ")?;
                let record = NewMoleculeRecord {
                    inchi: non_empty(inchi),
                    inchikey: non_empty(inchikey),
                    name: non_empty(name),
                };
                if let Some(key) = record.inchikey.as_deref() {
                    if let Err(e) = validate_inchikey(key) {
                        eprintln!("{}", e);
                        continue;
                    }
                }
                let mut db = client.lock().map_err(|_| "cliente global envenenado")?;
                match db.insert_molecule(&record) {
                    Some(r) => {
                        println!("Importada: {} (índice {})", r, session.len());
                        session.push(r);
                    }
                    None => eprintln!("No se pudo importar (¿sin conexión con el almacén?)"),
                }
            }
            "5" => {
                let identifier = prompt("Identificador de consulta (InChI o SMILES): ")?;
                filter.set_identifier(identifier.trim());
                let mut db = client.lock().map_err(|_| "cliente global envenenado")?;
                let mut shown = 0usize;
                for (i, r) in session.iter().enumerate() {
                    let Some(molecule) = db.create_molecule(r) else {
                        continue;
                    };
                    if filter.accepts_row(&molecule) {
                        println!("{}: {} | {}", i, molecule.name().unwrap_or("<sin nombre>"), r);
                        shown += 1;
                    }
                }
                println!("{} de {} filas aceptadas", shown, session.len());
            }
            "6" => break,
            _ => println!("Opción no reconocida"),
        }
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String, Box<dyn Error>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
