use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until},
    sequence::terminated,
};

/// Recognizes everything up to the first empty line and consumes the empty line.
pub fn header_block(input: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_until("\r\n\r\n"), tag("\r\n\r\n")).parse(input)
}
