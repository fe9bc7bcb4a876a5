use std::{
    fs::OpenOptions,
    io::{stdin, stdout, Read, Write},
    path::Path,
};

use clap::{value_parser, Arg, ArgAction, Command};

use lessen::{from_path, from_string, Options};

fn cli() -> Command {
    Command::new("lessen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A Less compiler written purely in Rust")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true)
        )
        .arg(
            Arg::new("STDIN")
                .action(ArgAction::SetTrue)
                .long("stdin")
                .help("Read the stylesheet from stdin"),
        )
        .arg(
            Arg::new("LOAD_PATH")
                .short('I')
                .long("load-path")
                .help("A path to use when resolving imports. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("BASE_PATH")
                .long("base-path")
                .help("The directory `@import <...>` is resolved against.")
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("VERBOSE")
                .action(ArgAction::SetTrue)
                .long("verbose")
                .help("Trace what the parser recognizes.")
        )
        .arg(
            Arg::new("NO_UNICODE")
                .action(ArgAction::SetTrue)
                .long("no-unicode")
                .help("Whether to use Unicode characters for messages.")
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
        .arg(
            Arg::new("INPUT")
                .value_parser(value_parser!(String))
                .required_unless_present("STDIN")
                .help("Less files"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Output CSS file")
        )
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let load_paths = matches
        .get_many::<String>("LOAD_PATH")
        .map_or_else(Vec::new, |vals| vals.map(Path::new).collect());

    let mut options = Options::default()
        .load_paths(&load_paths)
        .quiet(matches.get_flag("QUIET"))
        .verbose(matches.get_flag("VERBOSE"))
        .unicode_error_messages(!matches.get_flag("NO_UNICODE"));

    if let Some(base_path) = matches.get_one::<String>("BASE_PATH") {
        options = options.base_path(base_path);
    }

    let options = &options;

    let (mut stdout_write, mut file_write);
    let buf_out: &mut dyn Write = if let Some(path) = matches.get_one::<String>("OUTPUT") {
        file_write = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        &mut file_write
    } else {
        stdout_write = stdout();
        &mut stdout_write
    };

    buf_out.write_all(
        if let Some(name) = matches.get_one::<String>("INPUT") {
            from_path(name, options)
        } else if matches.get_flag("STDIN") {
            from_string(
                {
                    let mut buffer = String::new();
                    stdin().read_to_string(&mut buffer)?;
                    buffer
                },
                options,
            )
        } else {
            unreachable!()
        }
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1)
        })
        .as_bytes(),
    )?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::cli;

    #[test]
    fn verify() {
        cli().debug_assert();
    }
}
