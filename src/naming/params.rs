//! Parameters of a tagging batch.

use crate::error::{RenameError, Result};
use crate::verify::rules::{validate_counter_width, validate_letter, validate_three_digit};

/// Number of digits used for the running counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterWidth {
    Two,
    Three,
}

impl CounterWidth {
    pub fn digits(self) -> usize {
        match self {
            CounterWidth::Two => 2,
            CounterWidth::Three => 3,
        }
    }
}

impl TryFrom<u8> for CounterWidth {
    type Error = RenameError;

    fn try_from(value: u8) -> Result<Self> {
        validate_counter_width(value)?;
        Ok(if value == 2 {
            CounterWidth::Two
        } else {
            CounterWidth::Three
        })
    }
}

/// Validated inputs for one batch: `letter-number-counter`.
///
/// Only constructible through [`RenameParameters::new`], so every instance
/// satisfies the range rules in [`crate::verify::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameParameters {
    letter: char,
    number: u32,
    start_counter: u32,
    counter_width: CounterWidth,
}

impl RenameParameters {
    /// Validates and builds a parameter set.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the letter is not `A`–`Z`, or if `number` or
    /// `start_counter` is above 999.
    pub fn new(
        letter: char,
        number: u32,
        start_counter: u32,
        counter_width: CounterWidth,
    ) -> Result<Self> {
        validate_letter(letter.encode_utf8(&mut [0; 4]))?;
        validate_three_digit("number", number)?;
        validate_three_digit("start", start_counter)?;

        Ok(Self {
            letter,
            number,
            start_counter,
            counter_width,
        })
    }

    /// Parses raw command-line values.
    pub fn parse(letter: &str, number: u32, start_counter: u32, digits: u8) -> Result<Self> {
        let letter = validate_letter(letter)?;
        let width = CounterWidth::try_from(digits)?;
        Self::new(letter, number, start_counter, width)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn start_counter(&self) -> u32 {
        self.start_counter
    }

    pub fn counter_width(&self) -> CounterWidth {
        self.counter_width
    }
}
