use crate::core::LineValidator;
use crate::utils::error::{CinemaError, Result};
use std::io::{BufRead, Write};

/// Line-oriented console over any reader/writer pair.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Reads one line without its terminator. `None` at end of input.
    ///
    /// Invalid UTF-8 is decoded lossily and left for the validators to reject.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Prompts until `validator` accepts a line, printing every rejection.
    ///
    /// There is no attempt limit; only end of input or an I/O error stops the loop.
    pub fn prompt_until_valid<T, V>(&mut self, prompt: &str, validator: V) -> Result<T>
    where
        V: LineValidator<T>,
    {
        let mut attempts: u32 = 0;
        loop {
            self.print(prompt)?;
            let line = self.read_line()?.ok_or(CinemaError::InputClosed)?;
            attempts += 1;

            match validator.validate_line(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected input {:?} (attempt {}): {}", line, attempts, e);
                    self.println(&format!("Error: {}", e))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validators::{validate_non_negative_int, validate_sentence};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_returns_first_valid_value() {
        let mut console = console("42\n");
        let age = console
            .prompt_until_valid("Age: ", validate_non_negative_int)
            .unwrap();
        assert_eq!(age, 42);
        assert_eq!(output(console), "Age: ");
    }

    #[test]
    fn test_reprompts_after_each_failure() {
        let mut console = console("\nabc\n-5\n5 6\n12\n");
        let age = console
            .prompt_until_valid("Age: ", validate_non_negative_int)
            .unwrap();
        assert_eq!(age, 12);
        assert_eq!(
            output(console),
            "Age: Error: null or empty input\n\
             Age: Error: cannot parse integer\n\
             Age: Error: cannot have negative number\n\
             Age: Error: too many inputs\n\
             Age: "
        );
    }

    #[test]
    fn test_end_of_input_closes_loop() {
        let mut console = console("abc\n");
        let result = console.prompt_until_valid("Age: ", validate_non_negative_int);
        assert!(matches!(result, Err(CinemaError::InputClosed)));
    }

    #[test]
    fn test_accepts_closures_and_crlf() {
        let mut console = console("one two\r\none two three\r\n");
        let words = console
            .prompt_until_valid("Sentence: ", |line: &str| validate_sentence(line))
            .unwrap();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_reprompted() {
        let input = vec![0xff, 0xfe, b'\n', b'1', b'0', b'\n'];
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let age = console
            .prompt_until_valid("Age: ", validate_non_negative_int)
            .unwrap();
        assert_eq!(age, 10);

        let out = output(console);
        assert_eq!(out.matches("Error: cannot parse integer").count(), 1);
        assert_eq!(out, "Age: Error: cannot parse integer\nAge: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("7");
        assert_eq!(console.read_line().unwrap(), Some("7".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }
}
