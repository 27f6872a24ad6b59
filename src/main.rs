use anyhow::{Context, Result};
use env_logger::Env;
use latcut::arguments::{Args, ClapApp, Operation};
use latcut::atoms::Atoms;
use latcut::distances::distance_matrix;
use latcut::errors::ArgumentError;
use latcut::io::FileType;
use latcut::partition::{axis_cut, partition};
use latcut::periodic::{self, distance};
use latcut::plane::Plane;
use latcut::progress::Bar;
use latcut::scale::{expand_structure, strain_structure};
use std::io::{self, Write};

/// Formats the distance matrix as a table with the atom indices as headers.
fn distance_table(matrix: &[Vec<f64>]) -> String {
    let mut table = format!("{:>6}", "");
    for j in 0..matrix.len() {
        table.push_str(&format!(" {:>10}", j));
    }
    table.push('\n');
    for (i, row) in matrix.iter().enumerate() {
        table.push_str(&format!("{:>6}", i));
        for d in row.iter() {
            table.push_str(&format!(" {:>10.6}", d));
        }
        table.push('\n');
    }
    table
}

/// Checks an atom index against the structure.
fn atom_index(index: usize, atoms: &Atoms) -> Result<usize, ArgumentError> {
    if index < atoms.len() {
        Ok(index)
    } else {
        Err(ArgumentError::IndexOutOfRange(index, atoms.len()))
    }
}

fn main() -> Result<()> {
    let matches = ClapApp::get().get_matches();
    let args = Args::new(matches)?;

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let file_type = match args.file_type {
        Some(t) => t,
        None => match args.file.as_deref().and_then(FileType::infer) {
            Some(t) => t,
            None => {
                log::warn!("File-type cannot be infered, attempting to read as VASP.");
                FileType::Vasp
            }
        },
    };
    let atoms = file_type.format().read(args.file.as_deref())?;
    log::info!("Read {} atoms, cell volume {:.4}",
               atoms.len(),
               atoms.lattice.volume());
    log::debug!("Operation: {:?}", args.operation);

    let structure = match args.operation {
        Operation::Cut { normal,
                         point,
                         above, } => {
            let (a, b) = partition(&atoms, &Plane::new(normal, point))
                .context("Cannot cut the structure")?;
            log::info!("{} atoms above the plane, {} below", a.len(), b.len());
            if above {
                a
            } else {
                b
            }
        }
        Operation::ZCut { z, top } => {
            let (t, b) = axis_cut(&atoms, z).context("Cannot cut the structure")?;
            log::info!("{} atoms in the top cell, {} in the bottom", t.len(), b.len());
            if top {
                t
            } else {
                b
            }
        }
        Operation::Expand { factor } => {
            expand_structure(&atoms, factor).context("Cannot expand the structure")?
        }
        Operation::Stretch { factor, direction } => {
            strain_structure(&atoms, factor, direction)
                .context("Cannot stretch the structure")?
        }
        Operation::Translate { shift } => {
            periodic::translate(&atoms, shift).context("Cannot translate the structure")?
        }
        Operation::Wrap => periodic::wrap(&atoms).context("Cannot wrap the structure")?,
        Operation::Distance { first, second } => {
            let i = atom_index(first, &atoms)?;
            let j = atom_index(second, &atoms)?;
            let d = distance(atoms.positions[i], atoms.positions[j], &atoms.lattice)
                .context("Cannot calculate the distance")?;
            println!("{:.10}", d);
            return Ok(());
        }
        Operation::Distances { threads } => {
            let pbar = Bar::visible(atoms.len() as u64,
                                    100,
                                    String::from("Distances: "));
            let matrix = distance_matrix(&atoms, threads, pbar)
                .context("Cannot calculate the distances")?;
            print!("{}", distance_table(&matrix));
            return Ok(());
        }
    };

    log::info!("Writing {} atoms", structure.len());
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    args.output_type.format().write(&structure, &mut handle)?;
    handle.flush().context("Failed to write structure")
}
