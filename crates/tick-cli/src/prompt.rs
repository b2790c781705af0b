//! Blocking terminal prompts.

use std::io::{self, BufRead, Write};

/// Shows `label` and waits for one line of input, which is discarded.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<()> {
    ask(input, output, label).map(|_| ())
}

/// Shows `label` and returns the next line without its line ending.
///
/// End of input is an [`io::ErrorKind::UnexpectedEof`] error.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_strips_line_ending() {
        let mut input = "fix flaky test\r\nignored\n".as_bytes();
        let mut output = Vec::new();

        let answer = ask(&mut input, &mut output, "Note: ").unwrap();

        assert_eq!(answer, "fix flaky test");
        assert_eq!(String::from_utf8(output).unwrap(), "Note: ");
    }

    #[test]
    fn ask_at_end_of_input_fails() {
        let mut input = "".as_bytes();
        let err = ask(&mut input, &mut Vec::new(), "Note: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn empty_line_is_an_answer() {
        let mut input = "\n".as_bytes();
        let answer = ask(&mut input, &mut Vec::new(), "Note: ").unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn confirm_at_end_of_input_fails() {
        let err = confirm(&mut "".as_bytes(), &mut Vec::new(), "Press Enter: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn confirm_consumes_exactly_one_line() {
        let mut input = "\nnext\n".as_bytes();
        confirm(&mut input, &mut Vec::new(), "Press Enter: ").unwrap();

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "next\n");
    }
}
