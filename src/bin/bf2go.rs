use std::fs::{self, File};
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{App, Arg};

use bf2go::codegen_go::DEFAULT_TAPE_SIZE;
use bf2go::Config;

enum Action {
    Translate,
    DumpIr,
}

struct Options {
    action: Action,
    output: String,
    input: String,
    config: Config,
}

impl Options {
    fn match_options() -> Result<Self> {
        let default_tape_size = DEFAULT_TAPE_SIZE.to_string();
        let matches = App::new("bf2go")
            .version("0.0.1")
            .author("Ian D. Scott <ian@iandouglasscott.com>")
            .about("Brainfuck to Go translator")
            .arg(
                Arg::with_name("file")
                    .short("f")
                    .long("file")
                    .help("Path to program file")
                    .takes_value(true)
                    .empty_values(false)
                    .required(true)
                    .value_name("path"),
            )
            .arg(
                Arg::with_name("out")
                    .short("o")
                    .long("out")
                    .help("Path to output file, - for stdout")
                    .takes_value(true)
                    .empty_values(false)
                    .default_value("-")
                    .value_name("path"),
            )
            .arg(
                Arg::with_name("dump_ir")
                    .long("dump-ir")
                    .help("Dump intermediate representation; for debugging"),
            )
            .arg(
                Arg::with_name("tape_size")
                    .long("tape-size")
                    .help("Cells in the generated program's tape")
                    .takes_value(true)
                    .empty_values(false)
                    .default_value(&default_tape_size)
                    .value_name("cells"),
            )
            .arg(
                Arg::with_name("level")
                    .short("O")
                    .help("Optimization level")
                    .takes_value(true)
                    .default_value("1"),
            )
            .arg(
                Arg::with_name("allow_unbalanced")
                    .long("allow-unbalanced")
                    .help("Translate even if loop brackets do not match"),
            )
            .get_matches();

        let action = if matches.is_present("dump_ir") {
            Action::DumpIr
        } else {
            Action::Translate
        };

        // clap fills in defaults and enforces `required`
        let value = |name: &str| matches.value_of(name).unwrap_or_default().to_string();

        Ok(Options {
            action,
            output: value("out"),
            input: value("file"),
            config: Config {
                tape_size: value("tape_size")
                    .parse()
                    .context("--tape-size must be a number of cells")?,
                level: value("level")
                    .parse()
                    .context("-O must be a non-negative integer")?,
                check_brackets: !matches.is_present("allow_unbalanced"),
            },
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let options = Options::match_options()?;
    options.config.validate()?;

    let code = fs::read(&options.input)
        .with_context(|| format!("failed to read {}", options.input))?;

    let output = match options.action {
        Action::DumpIr => {
            let ir = if options.config.check_brackets {
                bf2go::parse(&code).map_err(bf2go::Error::from)?
            } else {
                bf2go::scan(&code)
            };
            ir.optimize(options.config.level).dump()
        }
        Action::Translate => {
            log::info!("Translating {}...", options.input);
            bf2go::translate(&code, &options.config)?
        }
    };

    let mut file = open_output_file(&options.output)
        .with_context(|| format!("failed to create {}", options.output))?;
    file.write_all(output.as_bytes())
        .with_context(|| format!("failed to write {}", options.output))?;
    file.flush()
        .with_context(|| format!("failed to write {}", options.output))?;

    Ok(())
}

fn open_output_file(name: &str) -> io::Result<Box<dyn Write>> {
    if name == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(File::create(&name)?))
    }
}

