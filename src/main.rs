mod report;

use clearaddress::{Address, FormattedPremise, format_premise, premise_rule};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let input = match parse_input(&config.input) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.json {
        print_json(&input);
    } else {
        for address in &input.records {
            report::print_premise(address, premise_rule(address), &format_premise(address), config.color);
        }
    }
}

struct CliConfig {
    input: String,
    json: bool,
    color: bool,
}

struct ParsedInput {
    records: Vec<Address>,
    /// Whether the input was a JSON array; the output mirrors the shape.
    many: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("clearaddress {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_input(input: &str) -> Result<ParsedInput, String> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|err| format!("error: invalid JSON input: {err}"))?;

    let (items, many) = match value {
        serde_json::Value::Array(items) => (items, true),
        other => (vec![other], false),
    };

    let records = items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<Address>(item)
                .map_err(|err| format!("error: invalid address record: {err}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedInput { records, many })
}

fn print_json(input: &ParsedInput) {
    let formatted: Vec<FormattedPremise> = input.records.iter().map(format_premise).collect();
    let out = if input.many {
        serde_json::to_string_pretty(&formatted)
    } else {
        serde_json::to_string_pretty(&formatted[0])
    };
    match out {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize output: {err}");
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "clearaddress {version}

Formats UK PAF address records into premise lines.

Usage:
  clearaddress [OPTIONS] [--] <record...>
  clearaddress [OPTIONS] --input <record>

The record is a JSON object of PAF fields, or an array of such objects.
If omitted, it is read from stdin.

Options:
  -i, --input <record>       Address record JSON. If omitted, reads remaining
                             args or stdin when no args are provided.
  --json                     Print the formatted premise as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
