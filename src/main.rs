// std imports
use std::{
    io::{BufWriter, Write, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use fastwild::{App, Filter, Options, Suite, cli, config, error::*, settings::Settings};

const FASTWILD_DEBUG_LOG: &str = "FASTWILD_DEBUG_LOG";
const FASTWILD_DEBUG_LOG_STYLE: &str = "FASTWILD_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    if std::env::var(FASTWILD_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(FASTWILD_DEBUG_LOG)
                .write_style(FASTWILD_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let (configs, no_default_configs) = opt.config_files();
    config::at(configs).no_default(no_default_configs).load()
}

fn run() -> Result<()> {
    let opt = cli::Opt::parse();
    let settings = bootstrap(&opt)?;
    log::debug!("settings: {:?}", settings);

    let mut output = BufWriter::new(stdout().lock());

    let result = if let Some(pattern) = &opt.pattern {
        let filter = Filter::new(pattern.as_str(), opt.unit(&settings).into());
        if opt.texts.is_empty() {
            filter.run_reader(stdin().lock(), &mut output)
        } else {
            filter.run_texts(&opt.texts, &mut output)
        }
        .map(|_| ())
    } else {
        let suite = Suite::new(opt.groups(&settings), opt.engines(&settings)).repetitions(opt.repetitions(&settings));
        let app = App::new(Options {
            suite,
            timing: opt.timing(&settings),
            verbose: opt.verbose,
        });
        app.run(&mut output).map(|report| {
            if !report.passed() {
                log::debug!("{} failed cases", report.failures().count());
            }
        })
    };

    let result = result.and_then(|_| Ok(output.flush()?));

    match result {
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        _ => result,
    }
}

fn main() {
    if let Err(err) = run() {
        log::error!("{}", err);
        process::exit(1);
    }
}
