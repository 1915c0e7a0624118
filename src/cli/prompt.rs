use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};

/// Operator's decision for one unresolved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    Skip,
    Edit,
    Close,
}

/// Present the four-way prompt for an unresolved word, re-prompting until the
/// input parses. The numeral, the first letter, and the full word are all
/// accepted, case-insensitively. EOF on the input stream is treated as Close.
pub fn prompt_choice(
    word: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    colored: bool,
) -> Result<Choice> {
    loop {
        write_menu(word, output, colored)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Choice::Close);
        }

        match parse_choice(line.trim()) {
            Some(choice) => return Ok(choice),
            None => {
                if colored {
                    writeln!(output, "{}", "Invalid response, please try again!".yellow())?;
                } else {
                    writeln!(output, "Invalid response, please try again!")?;
                }
            }
        }
    }
}

fn write_menu(word: &str, output: &mut dyn Write, colored: bool) -> Result<()> {
    let shown = if colored {
        word.red().bold().to_string()
    } else {
        word.to_string()
    };
    writeln!(output, "\nHow would you like to handle the bad word {}?", shown)?;
    writeln!(output, "  1. Add as valid word to the custom dictionary (1/a/add)")?;
    writeln!(output, "  2. Skip this occurrence (2/s/skip)")?;
    writeln!(output, "  3. Edit the file to fix the word (3/e/edit)")?;
    writeln!(output, "  4. Close the spell checker (4/c/close)")?;
    write!(output, ">> ")?;
    Ok(())
}

pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.to_lowercase().as_str() {
        "1" | "a" | "add" => Some(Choice::Add),
        "2" | "s" | "skip" => Some(Choice::Skip),
        "3" | "e" | "edit" => Some(Choice::Edit),
        "4" | "c" | "close" => Some(Choice::Close),
        _ => None,
    }
}
