use std::io::{BufRead, Write};
use crate::core::library::LibraryResult;

// Console wraps the line oriented input and output of a session so the same
// dispatcher runs against a terminal or against scripted input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    // None once the input is exhausted; bytes that are not UTF-8 become U+FFFD
    pub fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn println(&mut self, line: &str) -> LibraryResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::console::io::Console;

    #[test]
    fn test_should_read_lines_without_terminators() {
        let mut console = Console::new(Cursor::new("first\r\n  second \n\nlast"), Vec::new());
        assert_eq!(Some("first".to_string()), console.read_line().expect("should read"));
        assert_eq!(Some("  second ".to_string()), console.read_line().expect("should read"));
        assert_eq!(Some("".to_string()), console.read_line().expect("should read"));
        assert_eq!(Some("last".to_string()), console.read_line().expect("should read"));
        assert_eq!(None, console.read_line().expect("should read"));
    }

    #[test]
    fn test_should_prompt_without_newline() {
        let mut console = Console::new(Cursor::new("B1\n"), Vec::new());
        let answer = console.prompt("Enter Book ID: ").expect("should prompt");
        console.println("done").expect("should write");
        assert_eq!(Some("B1".to_string()), answer);
        assert_eq!("Enter Book ID: done\n", String::from_utf8(console.into_output()).expect("utf8"));
    }

    #[test]
    fn test_should_replace_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"\xC9mile\r\n\xff\xfe\nok\n".to_vec()), Vec::new());
        assert_eq!(Some("\u{FFFD}mile".to_string()), console.read_line().expect("should read"));
        assert_eq!(Some("\u{FFFD}\u{FFFD}".to_string()), console.read_line().expect("should read"));
        assert_eq!(Some("ok".to_string()), console.read_line().expect("should read"));
        assert_eq!(None, console.read_line().expect("should read"));
    }
}
