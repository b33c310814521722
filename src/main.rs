#![allow(non_snake_case)]
use RustedCurveArea::Examples::area_examples::{area_examples, report};
use RustedCurveArea::Utils::logger::init_logger;
use RustedCurveArea::calculator::session::CalculatorSession;
use RustedCurveArea::calculator::task::SessionTask;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.get(1) {
        // run a task document
        Some(path) => {
            let task = match SessionTask::from_file(path) {
                Ok(task) => task,
                Err(err) => {
                    eprintln!("cannot load task '{}': {}", path, err);
                    return ExitCode::FAILURE;
                }
            };
            if let Err(err) = init_logger(task.loglevel.as_deref(), false) {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
            let session = CalculatorSession::from_task(&task);
            report(&session);
        }
        None => {
            if let Err(err) = init_logger(Some("info"), false) {
                eprintln!("{}", err);
            }
            let example = 0;
            let session = area_examples(example);
            report(&session);
        }
    }
    ExitCode::SUCCESS
}
