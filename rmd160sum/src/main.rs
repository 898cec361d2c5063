use std::fs::{self, File};
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rmd160sum",
    about = "Prints the RIPEMD-160 checksum of a file as 40 lowercase hex characters."
)]
struct Cli {
    /// Path to the file to checksum.
    #[structopt(parse(from_os_str))]
    file: PathBuf,
}

fn main() {
    let cli = Cli::from_args();

    let is_file = fs::metadata(&cli.file)
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        eprintln!("rmd160sum: {}: not a regular file", cli.file.display());
        process::exit(2);
    }

    let file = match File::open(&cli.file) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("rmd160sum: {}: {}", cli.file.display(), err);
            process::exit(3);
        }
    };

    match ripemd160::hash_reader(file) {
        Ok(digest) => println!("{}", hex::encode(digest)),
        Err(err) => {
            eprintln!("rmd160sum: {}: {}", cli.file.display(), err);
            process::exit(4);
        }
    }
}
