mod coi;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "pedcoi";
    pub const BIN_NAME: &str = "pedcoi";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Inbreeding-coefficient tools for cat pedigrees: cross-reference two 5-generation ancestries and report Wright's COI with a risk band.")
        .subcommand_required(true)
        .subcommand(coi::cli::create_coi_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // COI
        //
        Some((coi::cli::COI_CMD, matches)) => {
            coi::handlers::run_coi(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
