//! CLI command implementations
//!
//! Both commands load the configuration, set the log level, and fill a
//! directory with generated sample contacts before doing their own work.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::contact::Contact;
use crate::directory::Directory;
use crate::observability::{Logger, ObservationScope};

use super::args::{Cli, Command};
use super::config::{Config, SAMPLE_SUFFIX_BASE};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_line, write_response};
use super::request::Request;

/// Distinct names and cities cycled through by the sample data
const SAMPLE_NAME_CYCLE: u64 = 10_000;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Demo { config } => demo(config.as_deref()),
        Command::Serve { config } => serve(config.as_deref()),
    }
}

/// Load sample contacts and print a summary line per sample query
pub fn demo(config_path: Option<&Path>) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut directory = Directory::new();
    load_sample_contacts(&mut directory, &config)?;

    let prefix = &config.number_prefix;
    let number = format!("{}{}", prefix, SAMPLE_SUFFIX_BASE);
    let number_prefix = format!("{}10000", prefix);
    let generic_number = format!("{}10020", prefix);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let found = directory.get(&number).cloned();
    write_line(&mut out, &json!({"query": "get", "term": number, "contact": found}))?;

    let summaries = [
        ("find_by_prefix", number_prefix.as_str(), directory.find_by_prefix(&number_prefix)),
        ("find_by_name", "firstname2000", directory.find_by_name("firstname2000", "")),
        ("find_by_city", "city3000", directory.find_by_city("city3000")),
        ("find", "lastname3000", directory.find("lastname3000")),
        ("find", generic_number.as_str(), directory.find(&generic_number)),
    ];
    for (query, term, contacts) in summaries {
        write_line(
            &mut out,
            &json!({"query": query, "term": term, "matches": contacts.len()}),
        )?;
    }

    write_line(
        &mut out,
        &json!({"metrics": directory.metrics(), "indexes": directory.index_stats()}),
    )?;
    Ok(())
}

/// Load sample contacts, then answer requests from stdin until EOF
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut directory = Directory::new();
    load_sample_contacts(&mut directory, &config)?;

    Logger::info("SERVE_READY", &[("contacts", directory.len().to_string().as_str())]);

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve_requests(&mut directory, stdin.lock(), &mut stdout.lock())
}

/// Answer one JSON request per input line.
///
/// Blank lines are skipped. A line that does not decode gets an error
/// response and does not stop the loop.
pub fn serve_requests<R: BufRead, W: Write>(
    directory: &mut Directory,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<Request>(&line) {
            Ok(request) => request,
            Err(e) => {
                let err = CliError::InvalidRequest(e.to_string());
                write_error(output, err.code(), &err.to_string())?;
                continue;
            }
        };

        match request.execute(directory) {
            Ok(data) => write_response(output, data)?,
            Err(e) => write_error(output, e.code(), &e.to_string())?,
        }
    }
    Ok(())
}

/// Fill `directory` with `config.contact_count` generated contacts.
pub fn load_sample_contacts(directory: &mut Directory, config: &Config) -> CliResult<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let count = config.contact_count.to_string();
    let scope = ObservationScope::new("SAMPLE_LOAD");
    for i in 0..config.contact_count {
        let with_address = rng.gen_bool(config.address_probability);
        let contact = sample_contact(&config.number_prefix, i, with_address);
        if let Err(e) = directory.add(contact) {
            let reason = e.to_string();
            scope.fail(&reason);
            return Err(CliError::LoadFailed(reason));
        }
    }
    scope.complete_with_fields(&[("contacts", count.as_str())]);

    Ok(())
}

/// Build the `i`-th sample contact.
///
/// Names and cities repeat every 10000 contacts so name and city searches
/// have many matches.
pub fn sample_contact(prefix: &str, i: u64, with_address: bool) -> Contact {
    let n = i % SAMPLE_NAME_CYCLE;
    let contact = Contact::new(
        format!("{}{}", prefix, SAMPLE_SUFFIX_BASE + i),
        format!("firstname{}", n),
        format!("lastname{}", n),
    );
    if with_address {
        contact.with_address(format!(
            "1 foo st, city{}, foo state, 1111, foo country",
            n
        ))
    } else {
        contact
    }
}

fn boot(config_path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.severity()?);
    Logger::info(
        "CONFIG_LOADED",
        &[
            ("contact_count", config.contact_count.to_string().as_str()),
            ("number_prefix", config.number_prefix.as_str()),
        ],
    );
    Ok(config)
}
