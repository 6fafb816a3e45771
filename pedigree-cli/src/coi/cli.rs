use clap::{arg, Command};

pub const COI_CMD: &str = "coi";

pub fn create_coi_cli() -> Command {
    Command::new(COI_CMD)
        .about("Compute Wright's coefficient of inbreeding for a prospective mating")
        .arg_required_else_help(true)
        .arg(arg!(-s --sire <sire> "Pedigree JSON for the prospective sire").required(true))
        .arg(arg!(-d --dam <dam> "Pedigree JSON for the prospective dam").required(true))
        .arg(arg!(--json "Emit the result as JSON instead of a report"))
        .arg(arg!(--trace "Print the per-pair match decisions before the report"))
}
