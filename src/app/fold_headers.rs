use std::io::Write;

use super::{
    arg::FoldHeadersCommand,
    io::{ProgramInput, ProgramOutput},
};

pub fn fold_headers(args: &FoldHeadersCommand) -> anyhow::Result<()> {
    let span = tracing::info_span!("fold_headers", path = ?args.input);
    let _span_guard = span.enter();

    let input = ProgramInput::open(&args.input)?.read_all()?;
    let input = String::from_utf8(input)?;
    let lines = input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty());

    let headers = crate::header::parse_headers(lines)?;

    tracing::info!(count = headers.len(), "folded headers");

    let mut output = ProgramOutput::open(&args.output)?;
    serde_json::to_writer(&mut output, &headers)?;
    output.write_all(b"\n")?;
    output.flush()?;

    Ok(())
}
