use std::process::ExitCode;

use clap::Parser;

use self::arg::Args;
use self::arg::Command;

mod arg;
mod describe_request;
mod fold_headers;
mod io;
mod logging;
mod parse_response;

pub fn run() -> ExitCode {
    match run_impl() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            tracing::error!(?error);
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_impl() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    self::logging::set_up_logging(args.log_level, args.log_file.as_deref(), args.log_json)?;

    match args.command {
        Command::ParseResponse(args) => self::parse_response::parse_response(&args)?,
        Command::FoldHeaders(args) => self::fold_headers::fold_headers(&args)?,
        Command::DescribeRequest(args) => self::describe_request::describe_request(&args)?,
    }

    Ok(ExitCode::SUCCESS)
}
