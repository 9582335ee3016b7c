use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, default_value = "warn")]
    pub log_level: super::logging::Level,

    #[clap(long)]
    pub log_file: Option<PathBuf>,

    #[clap(long)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a raw HTTP response into status line, header lines and body.
    ParseResponse(ParseResponseCommand),
    /// Fold `Name: Value` lines, one per input line, into a JSON object.
    FoldHeaders(FoldHeadersCommand),
    /// Render the raw request text used to describe a request.
    DescribeRequest(DescribeRequestCommand),
}

#[derive(Parser, Debug)]
pub struct ParseResponseCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,

    /// Fold the header lines into an object.
    #[clap(long)]
    pub fold: bool,

    /// Return a leading interim (1xx) response instead of skipping it.
    #[clap(long)]
    pub keep_interim: bool,

    #[clap(long)]
    pub max_header_len: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct FoldHeadersCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct DescribeRequestCommand {
    #[clap(long, default_value = "GET")]
    pub method: String,

    #[clap(long)]
    pub url: String,

    /// Header as `Name: Value`. May be repeated.
    #[clap(long = "header", short = 'H')]
    pub headers: Vec<String>,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,
}
