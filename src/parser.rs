//! Delimited-text numeric token parser
//!
//! Converts text like `"3 -- 6"` or `"1 2 4"` into a typed sequence. This is
//! an input-construction convenience for the CLI and the test fixtures; the
//! component search itself never goes through it.

use std::any::type_name;
use std::str::FromStr;

use miette::NamedSource;

use crate::error::ParseError;

/// Split `text` on `separator` and convert every token to `T`.
///
/// Tokens are trimmed of surrounding whitespace before conversion, and
/// tokens that are empty after trimming are skipped — so `"3 -- 6"` parses
/// with separator `"--"`, repeated separators collapse, and an empty input
/// yields an empty sequence.
///
/// Fails with [`ParseError`] on the first token `T::from_str` rejects,
/// pointing at its position in the input.
pub fn parse_sequence<T: FromStr>(text: &str, separator: &str) -> Result<Vec<T>, ParseError> {
    let mut values = Vec::new();
    let mut offset = 0;

    for raw in text.split(separator) {
        let token = raw.trim();
        if !token.is_empty() {
            let value = token.parse::<T>().map_err(|_| {
                let start = offset + (raw.len() - raw.trim_start().len());
                ParseError {
                    token: token.to_string(),
                    type_name: type_name::<T>(),
                    source_code: NamedSource::new("<input>", text.to_string()),
                    span: Some((start, token.len()).into()),
                }
            })?;
            values.push(value);
        }
        offset += raw.len() + separator.len();
    }

    Ok(values)
}
