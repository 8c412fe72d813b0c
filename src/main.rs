// minicheck: command-line front end for the mini-language syntax checker

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::{Arg, ArgAction, Command};

use minicheck::parser::lexer::{render, tokenize};
use minicheck::parser::parse::Parser;

fn main() {
    env_logger::init();

    let matches = Command::new("minicheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks source text against the mini-language grammar")
        .arg(
            Arg::new("file")
                .help("Source file to check; reads stdin when absent or '-'")
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .short('t')
                .help("Print the classified token stream before the verdict")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let source = match matches.get_one::<String>("file") {
        Some(path) if path != "-" => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Error reading '{}': {}", path, err);
                process::exit(2);
            }
        },
        _ => {
            let mut source = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut source) {
                eprintln!("Error reading stdin: {}", err);
                process::exit(2);
            }
            source
        }
    };

    let tokens = tokenize(&source);

    if matches.get_flag("tokens") {
        for token in &tokens {
            println!("{}", token);
        }
        println!("canonical: {}", render(&tokens));
    }

    let mut parser = Parser::new(tokens);
    if parser.parse() {
        println!("accepted");
    } else {
        println!("rejected");
        process::exit(1);
    }
}
