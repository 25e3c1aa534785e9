use clap::Parser;
use soundex::cli::{Cli, run};

fn main() {
    match run(Cli::parse()) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
