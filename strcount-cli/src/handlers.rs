use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;
use log::info;

use strcount_denovo::{FilterParams, TrioPaths, run_trio_pipeline};

use crate::cli::{CHILD_ARG, DENOVO_ARG, FATHER_ARG, MOTHER_ARG};

pub fn run_count(matches: &ArgMatches) -> Result<()> {
    let path_of = |name: &str| -> PathBuf {
        PathBuf::from(
            matches
                .get_one::<String>(name)
                .expect("A path to each input file is required."),
        )
    };

    let paths = TrioPaths {
        candidates: path_of(DENOVO_ARG),
        child: path_of(CHILD_ARG),
        father: path_of(FATHER_ARG),
        mother: path_of(MOTHER_ARG),
    };

    let report = run_trio_pipeline(&paths, &FilterParams::default())?;
    report.write(Path::new("."))?;

    info!("Done!");

    Ok(())
}
