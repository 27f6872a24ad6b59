use crate::errors::ArgumentError;
use crate::io::FileType;
use crate::utils;
use clap::{crate_authors, value_parser, Arg, ArgAction, ArgMatches, Command};

/// The operation picked by the subcommand and its parameters
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    /// Cut along a plane, keep the atoms above it when `above`.
    Cut {
        normal: [f64; 3],
        point: [f64; 3],
        above: bool,
    },
    /// Cut perpendicular to the last axis, keep the top cell when `top`.
    ZCut { z: f64, top: bool },
    Expand { factor: f64 },
    Stretch {
        factor: f64,
        direction: Option<[f64; 3]>,
    },
    Translate { shift: [f64; 3] },
    Wrap,
    Distance { first: usize, second: usize },
    Distances { threads: usize },
}

/// Container for building the clap Command so that argument parsing can be
/// tested
pub struct ClapApp {}

impl ClapApp {
    /// The optional positional structure file, shared by every subcommand
    fn file_arg() -> Arg<'static> {
        Arg::new("file").index(1)
                        .value_parser(value_parser!(String))
                        .help("The structure file, read from stdin if not supplied.")
    }

    /// A required 3-vector option
    fn vector_arg(name: &'static str, short: char, long: &'static str) -> Arg<'static> {
        Arg::new(name).short(short)
                      .long(long)
                      .takes_value(true)
                      .number_of_values(3)
                      .value_names(&["X", "Y", "Z"])
                      .allow_hyphen_values(true)
                      .value_parser(value_parser!(f64))
    }

    fn factor_arg() -> Arg<'static> {
        Arg::new("factor").short('f')
                          .long("factor")
                          .takes_value(true)
                          .required(true)
                          .allow_hyphen_values(true)
                          .value_parser(value_parser!(f64))
    }

    /// Create and return the clap::Command
    pub fn get() -> Command<'static> {
        Command::new("latcut")
            .author(crate_authors!())
            .version(env!("CARGO_PKG_VERSION"))
            .about("Periodic geometry and plane cutting for crystal structures.")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(Arg::new("file type")
                .short('t')
                .long("type")
                .takes_value(true)
                .global(true)
                .value_parser(["vasp", "xyz"])
                .help("The file type of the input structure.")
                .long_help(
"The file type of the input structure. If this is not supplied the type will
attempt to be infered from the filename, falling back to VASP."))
            .arg(Arg::new("format")
                .long("format")
                .takes_value(true)
                .global(true)
                .value_parser(["vasp", "xyz"])
                .default_value("vasp")
                .help("The file type of the output structure."))
            .arg(Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Show debug information."))
            .subcommand(Command::new("cut")
                .about("Keep the atoms below (or above) a plane.")
                .arg(Self::file_arg())
                .arg(Self::vector_arg("normal", 'n', "norm")
                    .required(true)
                    .help("Normal to the plane."))
                .arg(Self::vector_arg("point", 'p', "point")
                    .required(true)
                    .help("A point the plane passes through."))
                .arg(Arg::new("above")
                    .short('a')
                    .action(ArgAction::SetTrue)
                    .help("Keep the atoms above rather than below the plane.")))
            .subcommand(Command::new("zcut")
                .about("Split the cell at a height along the last axis.")
                .arg(Self::file_arg())
                .arg(Arg::new("z")
                    .short('z')
                    .takes_value(true)
                    .required(true)
                    .allow_hyphen_values(true)
                    .value_parser(value_parser!(f64))
                    .help("Height of the cut."))
                .arg(Arg::new("top")
                    .long("top")
                    .action(ArgAction::SetTrue)
                    .help("Keep the top cell rather than the bottom one."))
                .long_about(
"Split the structure at a height along the last axis into two cells. The bottom
cell ends at the cut, the top cell starts at the origin and spans from the cut
to the top of the original cell."))
            .subcommand(Command::new("expand")
                .about("Expand the cell keeping the fractional coordinates.")
                .arg(Self::file_arg())
                .arg(Self::factor_arg().help("Expansion factor of every lattice vector.")))
            .subcommand(Command::new("stretch")
                .about("Stretch cell and atoms, optionally along a direction.")
                .arg(Self::file_arg())
                .arg(Self::factor_arg().help("The stretch factor."))
                .arg(Self::vector_arg("direction", 'd', "dir")
                    .help("Only stretch along this direction.")))
            .subcommand(Command::new("translate")
                .about("Translate the atoms and map them back into the cell.")
                .arg(Self::file_arg())
                .arg(Self::vector_arg("shift", 'd', "displacement")
                    .required(true)
                    .help("The displacement vector.")))
            .subcommand(Command::new("wrap")
                .about("Map every atom back into the cell.")
                .arg(Self::file_arg()))
            .subcommand(Command::new("distance")
                .about("Minimum image distance between two atoms.")
                .arg(Self::file_arg())
                .arg(Arg::new("pair")
                    .short('i')
                    .long("pair")
                    .takes_value(true)
                    .number_of_values(2)
                    .value_names(&["I", "J"])
                    .required(true)
                    .value_parser(value_parser!(usize))
                    .help("The indices of the two atoms, counting from 0.")))
            .subcommand(Command::new("distances")
                .about("Minimum image distances between every pair of atoms.")
                .arg(Self::file_arg())
                .arg(Arg::new("threads")
                    .short('J')
                    .long("threads")
                    .takes_value(true)
                    .default_value("0")
                    .value_parser(value_parser!(usize))
                    .help("Number of threads to distribute the calculation over.")
                    .long_help(
"The number of threads to be used by the program. A default value of 0 is used
to allow the program to best decide how to use the available hardware.")))
    }
}

/// Holds the arguments passed to the program from the command-line
#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    pub file: Option<String>,
    /// None when the type has to be infered from the file name
    pub file_type: Option<FileType>,
    pub output_type: FileType,
    pub debug: bool,
    pub operation: Operation,
}

/// Reads a 3-vector option
fn vector(matches: &ArgMatches, name: &str) -> Option<[f64; 3]> {
    let values = matches.get_many::<f64>(name)?.copied().collect::<Vec<f64>>();
    // clap enforces exactly three values
    Some([values[0], values[1], values[2]])
}

fn flag(matches: &ArgMatches, name: &str) -> bool {
    matches.get_one::<bool>(name).copied().unwrap_or(false)
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Result<Self, ArgumentError> {
        let debug = flag(&arguments, "debug");
        let file_type = match arguments.get_one::<String>("file type") {
            Some(t) => Some(FileType::from_name(t)?),
            None => None,
        };
        let output_type = match arguments.get_one::<String>("format") {
            Some(t) => FileType::from_name(t)?,
            None => FileType::Vasp,
        };
        let (name, sub) = match arguments.subcommand() {
            Some(s) => s,
            None => {
                return Err(ArgumentError::NotValidValue(String::from("subcommand"),
                                                        String::new()))
            }
        };
        let file = sub.get_one::<String>("file").cloned();
        // clap guarantees the required arguments are present
        let required = |arg: &str| {
            ArgumentError::NotValidValue(String::from(arg), String::new())
        };
        let operation = match name {
            "cut" => {
                let normal = vector(sub, "normal").ok_or_else(|| required("norm"))?;
                let length = utils::norm(normal);
                if length == 0. {
                    return Err(ArgumentError::ZeroVector(String::from("norm")));
                }
                Operation::Cut { normal: utils::scale(normal, length.recip()),
                                 point: vector(sub, "point").ok_or_else(|| required("point"))?,
                                 above: flag(sub, "above") }
            }
            "zcut" => Operation::ZCut { z: *sub.get_one::<f64>("z")
                                               .ok_or_else(|| required("z"))?,
                                        top: flag(sub, "top") },
            "expand" => Operation::Expand { factor: *sub.get_one::<f64>("factor")
                                                        .ok_or_else(|| required("factor"))? },
            "stretch" => {
                Operation::Stretch { factor: *sub.get_one::<f64>("factor")
                                                 .ok_or_else(|| required("factor"))?,
                                     direction: vector(sub, "direction") }
            }
            "translate" => {
                Operation::Translate { shift: vector(sub, "shift").ok_or_else(|| {
                                                                      required("displacement")
                                                                  })? }
            }
            "wrap" => Operation::Wrap,
            "distance" => {
                let pair = sub.get_many::<usize>("pair")
                              .ok_or_else(|| required("pair"))?
                              .copied()
                              .collect::<Vec<usize>>();
                Operation::Distance { first: pair[0],
                                      second: pair[1] }
            }
            "distances" => Operation::Distances { threads: *sub.get_one::<usize>("threads")
                                                               .unwrap_or(&0) },
            other => {
                return Err(ArgumentError::NotValidValue(String::from("subcommand"),
                                                        String::from(other)))
            }
        };
        Ok(Self { file,
                  file_type,
                  output_type,
                  debug,
                  operation })
    }
}
