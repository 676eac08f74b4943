mod cli;

use cli::{Configuration, Error, Logger};
use std::{
    io::{self, Read, Write},
    process,
};

fn main() {
    if let Err(error) = try_main() {
        eprintln!("{}", error.message());
        process::exit(1);
    }
}

fn try_main() -> Result<(), Error> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(configuration.verbose());

    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    logger.log(format!("Read {} bytes", input.len()));

    let output = cli::run(&configuration, &input, &logger)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    logger.log(format!("Wrote {} bytes", output.len()));
    Ok(())
}
