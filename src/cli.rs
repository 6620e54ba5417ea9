// src/cli.rs
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    config::options::Options,
    core::net::Credentials,
    progress::Progress,
    runner::{self, CredentialSource},
    specs::months,
};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli()?;

    let mut prompt = StdinCredentials { preseed: opts.email.clone() };
    let mut progress = CliProgress;

    if opts.list_months {
        let (_session, _creds, urls) = runner::discover(&mut prompt, Some(&mut progress))?;
        for url in &urls {
            println!("{}", months::month_of(url));
        }
        return Ok(());
    }

    let summary = runner::run(&opts, &mut prompt, Some(&mut progress))?;
    println!(
        "Transaction summary written to {}",
        summary.out_path.display()
    );
    Ok(())
}

fn parse_cli() -> Result<Options, Box<dyn std::error::Error>> {
    let mut opts = Options::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                opts.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--email" => {
                opts.email = Some(args.next().ok_or("Missing value for --email")?);
            }
            "--list-months" => opts.list_months = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(opts)
}

/* ---------------- Frontend plumbing ---------------- */

/// Interactive credentials: email preseeded from --email on the first ask,
/// everything else read from stdin. Password input is echoed, not masked.
struct StdinCredentials {
    preseed: Option<String>,
}

impl CredentialSource for StdinCredentials {
    fn credentials(&mut self) -> Result<Credentials, Box<dyn std::error::Error>> {
        let email = match self.preseed.take() {
            Some(e) => e,
            None => prompt_line("Email address: ")?,
        };
        let password = prompt_line("Password: ")?;
        Ok(Credentials { email, password })
    }
}

fn prompt_line(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = s!();
    io::stdin().read_line(&mut line)?;
    Ok(s!(line.trim_end_matches(['\r', '\n'])))
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, month: &str, transactions: usize) {
        println!("    Adding {transactions} transactions from {month}");
    }
}
