use std::io::Write;

use crate::request::Request;

use super::{arg::DescribeRequestCommand, io::ProgramOutput};

pub fn describe_request(args: &DescribeRequestCommand) -> anyhow::Result<()> {
    let headers = crate::header::parse_headers(&args.headers)?;
    let request = Request::new(args.method.as_str(), args.url.as_str(), headers)?;

    let description = crate::request::format_request_description(&request)?;

    let mut output = ProgramOutput::open(&args.output)?;
    output.write_all(description.as_bytes())?;
    output.flush()?;

    Ok(())
}
