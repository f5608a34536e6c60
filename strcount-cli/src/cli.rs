use clap::{Arg, Command};

use crate::consts;

pub const DENOVO_ARG: &str = "denovo";
pub const CHILD_ARG: &str = "child";
pub const FATHER_ARG: &str = "father";
pub const MOTHER_ARG: &str = "mother";

pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Filter de novo tandem-repeat candidates of a trio and count inherited, duplicated and contracted repeat units per unit length.")
        .arg(
            Arg::new(DENOVO_ARG)
                .required(true)
                .help("De novo candidate file (tab-separated, one header line)"),
        )
        .arg(
            Arg::new(CHILD_ARG)
                .required(true)
                .help("Child repeat-genotype VCF"),
        )
        .arg(
            Arg::new(FATHER_ARG)
                .required(true)
                .help("Father repeat-genotype VCF"),
        )
        .arg(
            Arg::new(MOTHER_ARG)
                .required(true)
                .help("Mother repeat-genotype VCF"),
        )
}
