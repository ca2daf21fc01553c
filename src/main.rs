use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

use subnet_calculator::cli::CommandLine;
use subnet_calculator::output::print_subnet_info;
use subnet_calculator::{compute_subnet_with, CalcOptions};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = CommandLine::parse_args();
    init_logging();
    log::info!("#Start main()");

    let options = CalcOptions {
        detect_class: !args.no_class,
    };
    let info = compute_subnet_with(&args.network_address, args.cidr, options).map_err(|e| {
        log::error!("{e}");
        e
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_subnet_info(&info);
    }

    Ok(())
}

/// Initialize log4rs from log4rs.yml, falling back to a stderr console
/// logger when no config file is present so the binary runs from anywhere.
fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("default logging config");
    log4rs::init_config(config).expect("logging already initialized");
}
