use std::io::Write;

use serde::Serialize;

use crate::{
    fields::HeaderMap,
    response::{Hstring, ResponseParser, ResponseParserConfig},
};

use super::{
    arg::ParseResponseCommand,
    io::{ProgramInput, ProgramOutput},
};

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Headers {
    Lines(Vec<String>),
    Folded(HeaderMap),
}

#[derive(Debug, Serialize)]
struct Output {
    status: String,
    headers: Headers,
    body: Option<Hstring>,
}

pub fn parse_response(args: &ParseResponseCommand) -> anyhow::Result<()> {
    let span = tracing::info_span!("parse_response", path = ?args.input);
    let _span_guard = span.enter();

    let input = ProgramInput::open(&args.input)?.read_all()?;

    tracing::info!(len = input.len(), "read input");

    let mut config = ResponseParserConfig::default();
    config.skip_interim_responses = !args.keep_interim;
    config.max_header_len = args.max_header_len;

    let (status, headers, body) = ResponseParser::new(config).parse(&input)?.into_parts();
    let headers = if args.fold {
        Headers::Folded(crate::header::parse_headers(&headers)?)
    } else {
        Headers::Lines(headers)
    };

    let mut output = ProgramOutput::open(&args.output)?;
    serde_json::to_writer(
        &mut output,
        &Output {
            status,
            headers,
            body,
        },
    )?;
    output.write_all(b"\n")?;
    output.flush()?;

    Ok(())
}
