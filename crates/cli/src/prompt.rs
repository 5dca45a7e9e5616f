// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated line input for the menu.
//!
//! Every reader loops until the answer is acceptable, printing the reason
//! for each rejection. Running out of input is an error, so a scripted
//! session that ends early cannot spin forever.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use club_roster_domain::validate_date;

/// Reads answers from `input` and writes prompts to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output, for menu text.
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns the output writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `prompt` and returns the next line with its line ending removed.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended while waiting for an answer",
            ));
        }
        let trimmed_len: usize = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Reads a line that is not blank, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_non_empty(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let line: String = self.read_line(prompt)?;
            let trimmed: &str = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            self.say("[ERROR] Input must not be empty.")?;
        }
    }

    /// Reads a line verbatim, allowing an empty answer.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_optional(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Reads a number within `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_int_in_range<T>(&mut self, prompt: &str, min: T, max: T) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        let full_prompt: String = format!("{prompt} ({min}-{max}): ");
        loop {
            let value: T = self.read_parsed(&full_prompt, "a whole number")?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            writeln!(
                self.output,
                "[ERROR] Value out of range. Must be between {min} and {max}."
            )?;
        }
    }

    /// Reads a signed whole number.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<i32> {
        self.read_parsed(prompt, "a whole number")
    }

    /// Reads a finite number.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_f64(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            let value: f64 = self.read_parsed(prompt, "a number")?;
            if value.is_finite() {
                return Ok(value);
            }
            self.say("[ERROR] Please enter a finite number.")?;
        }
    }

    /// Reads `y`/`yes` or `n`/`no`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let full_prompt: String = format!("{prompt} (y/n): ");
        loop {
            let answer: String = self.read_line(&full_prompt)?.trim().to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("[ERROR] Please answer 'y' or 'n'.")?,
            }
        }
    }

    /// Reads a calendar date in `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_date(&mut self, prompt: &str) -> io::Result<String> {
        let full_prompt: String = format!("{prompt} (YYYY-MM-DD): ");
        loop {
            let answer: String = self.read_non_empty(&full_prompt)?;
            match validate_date("date", &answer) {
                Ok(()) => return Ok(answer),
                Err(err) => writeln!(self.output, "[ERROR] {err}")?,
            }
        }
    }

    /// Reads any value that parses as `T`; `expected` names it in the
    /// error shown for input that does not.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when the input is exhausted.
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str, expected: &str) -> io::Result<T> {
        loop {
            let line: String = self.read_line(prompt)?;
            if let Ok(value) = line.trim().parse::<T>() {
                return Ok(value);
            }
            writeln!(
                self.output,
                "[ERROR] Invalid input type. Please enter {expected}."
            )?;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::{self, Cursor};

    use super::Prompter;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_read_int_in_range_reprompts_until_valid() {
        let mut p = prompter("abc\n42\n7\n");
        assert_eq!(p.read_int_in_range("Choice", 1, 9).unwrap(), 7);

        let out: String = transcript(p);
        assert!(out.contains("Invalid input type"));
        assert!(out.contains("Must be between 1 and 9"));
        assert_eq!(out.matches("Choice (1-9): ").count(), 3);
    }

    #[test]
    fn test_read_f64_rejects_non_finite() {
        let mut p = prompter("inf\nNaN\n12.5\n");
        assert!((p.read_f64("Value: ").unwrap() - 12.5).abs() < f64::EPSILON);
        assert_eq!(transcript(p).matches("finite").count(), 2);
    }

    #[test]
    fn test_read_non_empty_trims_and_skips_blank_lines() {
        let mut p = prompter("\n   \n  Rui Costa \n");
        assert_eq!(p.read_non_empty("Name: ").unwrap(), "Rui Costa");
    }

    #[test]
    fn test_read_yes_no_accepts_words_in_any_case() {
        let mut p = prompter("maybe\nYES\nn\n");
        assert!(p.read_yes_no("Save").unwrap());
        assert!(!p.read_yes_no("Save").unwrap());
    }

    #[test]
    fn test_read_date_requires_canonical_form() {
        let mut p = prompter("30/06/2028\n2028-02-30\n2028-06-30\n");
        assert_eq!(p.read_date("Until").unwrap(), "2028-06-30");
        assert_eq!(transcript(p).matches("[ERROR]").count(), 2);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut p = prompter("");
        let err: io::Error = p.read_non_empty("Name: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let mut p = prompter("5\r\n");
        assert_eq!(p.read_int("Number: ").unwrap(), 5);
    }
}
