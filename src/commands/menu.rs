//! Interactive round menu.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use super::{
    common::CommandContext,
    score_round::{process_round, report},
};
use crate::{cli::types::PlayoffRound, scoring::PlayerDirectory, Result};

const MENU: &str = "\nFantasy Football Playoff Calculator
==================================
1: First Round
2: Second Round
3: Third Round
4: Championship
5: Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Round(PlayoffRound),
    Exit,
}

/// Why a menu entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChoice {
    NotANumber,
    OutOfRange,
}

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidChoice::NotANumber => f.write_str("Please enter a valid number"),
            InvalidChoice::OutOfRange => f.write_str("Please enter a valid round number (1-4)"),
        }
    }
}

pub fn parse_choice(input: &str) -> std::result::Result<MenuChoice, InvalidChoice> {
    let n: i64 = input.trim().parse().map_err(|_| InvalidChoice::NotANumber)?;
    if n == 5 {
        return Ok(MenuChoice::Exit);
    }
    u16::try_from(n)
        .ok()
        .and_then(|n| PlayoffRound::new(n).ok())
        .map(MenuChoice::Round)
        .ok_or(InvalidChoice::OutOfRange)
}

/// Show the menu until a valid choice is entered. End of input exits.
pub fn prompt_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<MenuChoice> {
    loop {
        write!(output, "{}\nEnter playoff round (1-5): ", MENU)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Exit);
        }
        match parse_choice(&line) {
            Ok(choice) => return Ok(choice),
            Err(invalid) => writeln!(output, "{}", invalid)?,
        }
    }
}

/// Handle the menu command
///
/// A failed round is reported and the menu shown again.
pub async fn handle_menu(ctx: &CommandContext) -> Result<()> {
    let sheets = ctx.workbook().await?;
    let resolver = ctx.resolver();
    let mut directory: Option<PlayerDirectory> = None;

    loop {
        let choice = prompt_choice(&mut io::stdin().lock(), &mut io::stdout())?;
        let round = match choice {
            MenuChoice::Exit => {
                println!("Exiting program...");
                return Ok(());
            }
            MenuChoice::Round(round) => round,
        };

        if directory.is_none() {
            match ctx.load_directory().await {
                Ok(loaded) => directory = Some(loaded),
                Err(e) => {
                    println!("\nAn error occurred: {}", e);
                    continue;
                }
            }
        }
        let Some(players) = directory.as_ref() else {
            continue;
        };

        match process_round(&ctx.stats, sheets.as_ref(), players, &resolver, &ctx.settings, round).await {
            Ok(outcome) => {
                report(&outcome);
                println!("\nProcessing complete!");
            }
            Err(e) => println!("\nAn error occurred: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("5\n"), Ok(MenuChoice::Exit));
        assert_eq!(
            parse_choice(" 4 "),
            Ok(MenuChoice::Round(PlayoffRound::new(4).unwrap()))
        );
        assert_eq!(parse_choice("0"), Err(InvalidChoice::OutOfRange));
        assert_eq!(parse_choice("6"), Err(InvalidChoice::OutOfRange));
        assert_eq!(parse_choice("-1"), Err(InvalidChoice::OutOfRange));
        assert_eq!(parse_choice("two"), Err(InvalidChoice::NotANumber));
        assert_eq!(parse_choice("2.5"), Err(InvalidChoice::NotANumber));
        assert_eq!(parse_choice(""), Err(InvalidChoice::NotANumber));
    }

    #[test]
    fn test_prompt_reprompts_on_invalid_input() {
        let mut input = Cursor::new("abc\n9\n2\n");
        let mut output = Vec::new();

        let choice = prompt_choice(&mut input, &mut output).unwrap();
        assert_eq!(choice, MenuChoice::Round(PlayoffRound::new(2).unwrap()));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter playoff round (1-5): ").count(), 3);
        assert_eq!(text.matches("Please enter a valid number\n").count(), 1);
        assert_eq!(text.matches("Please enter a valid round number (1-4)").count(), 1);
    }

    #[test]
    fn test_prompt_exits_on_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_choice(&mut input, &mut output).unwrap(), MenuChoice::Exit);
    }
}
