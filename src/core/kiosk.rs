use crate::core::demos::{repeat_line, third_word};
use crate::core::pricing::PriceTable;
use crate::core::prompt::Console;
use crate::core::validators::{validate_non_negative_int, validate_party_size, validate_sentence};
use crate::core::MenuChoice;
use crate::utils::error::{CinemaError, Result};
use std::io::{BufRead, Write};

const SEPARATOR: &str = "-----------------------";

/// Menu loop tying the console to the price table and the text demos.
pub struct Kiosk<'a, R: BufRead, W: Write> {
    console: Console<R, W>,
    prices: &'a PriceTable,
}

impl<'a, R: BufRead, W: Write> Kiosk<'a, R, W> {
    pub fn new(console: Console<R, W>, prices: &'a PriceTable) -> Self {
        Self { console, prices }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Kiosk session started with {} price bands", self.prices.bands().len());

        loop {
            self.print_menu()?;
            let Some(line) = self.console.read_line()? else {
                tracing::warn!("Input closed at the main menu, ending session");
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::debug!("{}", e);
                    self.console.println("Incorrect input")?;
                    continue;
                }
            };

            tracing::debug!("Menu selection: {:?}", choice);
            if choice == MenuChoice::Exit {
                self.console.println("Exiting...")?;
                tracing::info!("Kiosk session ended");
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(CinemaError::InputClosed) => {
                    tracing::warn!("Input closed during {:?}, ending session", choice);
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Recovered from: {}", e);
                    self.console.println(&e.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.println("")?;
        self.console.println("Main menu (select with number + enter): ")?;
        self.console.println(SEPARATOR)?;
        for choice in MenuChoice::ALL {
            self.console
                .println(&format!("{}. {}", choice.number(), choice.label()))?;
        }
        self.console.println(SEPARATOR)?;
        self.console.print("Selection: ")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::SinglePrice => self.single_price(),
            MenuChoice::GroupPrice => self.group_price(),
            MenuChoice::Repeat => self.repeat(),
            MenuChoice::ThirdWord => self.echo_third_word(),
        }
    }

    fn single_price(&mut self) -> Result<()> {
        let age = self
            .console
            .prompt_until_valid("Age: ", validate_non_negative_int)?;
        let quote = self.prices.quote(age)?;
        self.console.println(&quote.to_string())
    }

    fn group_price(&mut self) -> Result<()> {
        let size = self
            .console
            .prompt_until_valid("Number of people: ", validate_party_size)?;

        let mut ages = Vec::new();
        for person in 1..=size {
            let age = self.console.prompt_until_valid(
                &format!("Age of person {}: ", person),
                validate_non_negative_int,
            )?;
            ages.push(age);
        }

        let group = self.prices.quote_group(&ages)?;
        tracing::debug!("Group of {} priced at {}kr", group.head_count(), group.total);

        for (i, (age, quote)) in group.members.iter().enumerate() {
            self.console
                .println(&format!("  {}. {} years, {}", i + 1, age, quote))?;
        }
        self.console
            .println(&format!("People in group: {}", group.head_count()))?;
        self.console
            .println(&format!("Total price: {}kr", group.total))
    }

    fn repeat(&mut self) -> Result<()> {
        self.console.print("Text to repeat: ")?;
        let line = self.console.read_line()?.ok_or(CinemaError::InputClosed)?;
        self.console.println(&repeat_line(&line))
    }

    fn echo_third_word(&mut self) -> Result<()> {
        let words = self
            .console
            .prompt_until_valid("Sentence (at least three words): ", validate_sentence)?;
        match third_word(&words) {
            Some(word) => self.console.println(word),
            None => Err(CinemaError::ProcessingError {
                message: "validated sentence had fewer than three words".to_string(),
            }),
        }
    }
}
