use std::process;

use colored::*;

use crate::app::App;
use crate::footprint::EmissionCoefficients;

mod app;
mod cli;
mod footprint;
mod input;
mod pie_chart;
mod report;
mod utils;

fn main() {
    let args = cli::get_args();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .unwrap();

    let input = match input::collect() {
        Ok(input) => input,
        Err(err) => exit_without_results(&err.to_string()),
    };
    log::debug!("collected activity input: {:?}", input);

    let coefficients = EmissionCoefficients::default();
    let result = match footprint::calculate(&input, &coefficients) {
        Ok(result) => result,
        Err(err) => exit_without_results(&err.to_string()),
    };
    log::debug!("emission result: {:?}", result);

    report::print_total(&result);

    if args.text {
        report::print_breakdown(&result);
    } else {
        App::run(result);
    }
}

fn exit_without_results(message: &str) -> ! {
    eprintln!("{}", message.red());
    report::print_no_results();
    process::exit(1);
}
