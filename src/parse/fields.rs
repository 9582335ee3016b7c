use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till},
    combinator::{map, opt, rest},
};

#[derive(Debug)]
pub struct FieldPairRef<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Splits a header line on its first colon.
///
/// The name is trimmed of surrounding whitespace. Exactly one space is
/// removed from the front of the value; everything else in the value,
/// including further colons, is kept.
pub fn field_pair(input: &str) -> IResult<&str, FieldPairRef<'_>> {
    let parts = (take_till(|c: char| c == ':'), tag(":"), opt(tag(" ")), rest);

    map(parts, |output: (&str, &str, Option<&str>, &str)| FieldPairRef {
        name: output.0.trim(),
        value: output.3,
    })
    .parse(input)
}

pub fn is_obs_text(b: u8) -> bool {
    b >= 0x80
}
