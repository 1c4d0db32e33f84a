//! Simple command that prints one or '-n count' UUID strings
//!
//! Usage: `uuidgen [-v 1|3|4|5] [-n count] [--ns dns|url|oid|x500] [--name NAME]`. Versions 3 and
//! 5 require `--name` and default to the DNS namespace. Set `RUST_LOG=debug` to see how the node
//! identifier was chosen.

use std::{env, io, io::Write, process::ExitCode};

use uuid_rfc4122::{Uuid, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

#[derive(Debug, Default)]
struct Options {
    version: Option<u8>,
    count: Option<usize>,
    namespace: Option<Uuid>,
    name: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-v 1|3|4|5] [-n count] [--ns dns|url|oid|x500] [--name NAME]",
                    program.as_deref().unwrap_or("uuidgen")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let namespace = opts.namespace.unwrap_or(NAMESPACE_DNS);
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let uuid = match (opts.version.unwrap_or(4), opts.name.as_deref()) {
            (1, _) => uuid_rfc4122::new_v1(),
            (3, Some(name)) => uuid_rfc4122::new_v3(&namespace, name),
            (5, Some(name)) => uuid_rfc4122::new_v5(&namespace, name),
            _ => uuid_rfc4122::new_v4(),
        };
        writeln!(buf, "{}", uuid)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", arg));
        };
        match arg.as_str() {
            "-v" => {
                let v = match value.parse() {
                    Ok(v @ (1 | 3 | 4 | 5)) => v,
                    _ => return Err(format!("unsupported version: '{}'", value)),
                };
                if opts.version.replace(v).is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
            }
            "-n" => {
                let Ok(c) = value.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", value));
                };
                if opts.count.replace(c).is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
            }
            "--ns" => {
                let ns = match value.as_str() {
                    "dns" => NAMESPACE_DNS,
                    "url" => NAMESPACE_URL,
                    "oid" => NAMESPACE_OID,
                    "x500" => NAMESPACE_X500,
                    other => other
                        .parse()
                        .map_err(|err| format!("invalid namespace '{}': {}", other, err))?,
                };
                opts.namespace.replace(ns);
            }
            "--name" => {
                opts.name.replace(value);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    let name_based = matches!(opts.version, Some(3 | 5));
    if name_based && opts.name.is_none() {
        return Err("versions 3 and 5 require '--name'".to_owned());
    }
    if !name_based && (opts.name.is_some() || opts.namespace.is_some()) {
        return Err("'--name' and '--ns' require '-v 3' or '-v 5'".to_owned());
    }
    Ok(opts)
}
