use clap::Parser;
use exprderive::cli::{self, args::Options};
use exprderive::Engine;
use std::io::Write;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if options.verbose { "debug" } else { "warn" }),
    )
    .init();

    let engine = Engine::new();

    if let Some(expression) = &options.expression {
        match cli::respond(&engine, &options, expression) {
            Ok(output) => {
                print!("{output}");
                return Ok(());
            }
            Err(e) => {
                eprintln!("ERROR: {e}");
                std::process::exit(1);
            }
        }
    }

    println!("Enter expressions such as 'a+b*c' or '(x-1)/y'.");
    println!("Type 'quit' to exit.");

    loop {
        let mut line = String::new();

        print!("=> ");
        std::io::stdout().flush()?;

        if std::io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let line = line.trim();
        if line.to_lowercase() == "quit" {
            break;
        }

        // A failed request is reported and the loop carries on with the next
        match cli::respond(&engine, &options, line) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                println!("ERROR: {e}");
            }
        }
    }

    Ok(())
}
