mod cli;
mod handlers;

use anyhow::Result;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "strcount";
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli::build_parser().get_matches();
    handlers::run_count(&matches)?;

    Ok(())
}
