use std::io::{BufRead, Write};

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use super::execution::config::{check_range, ConfigError, SimulationConfig};
use super::types::CustomerProfile;

const FIRST_NAMES: [&str; 20] = [
    "Alex", "Ben", "Cara", "Dina", "Eve", "Fred", "Gina", "Hank", "Isha", "Jack", "Kyle", "Lina",
    "Mona", "Ned", "Omar", "Pam", "Quin", "Rita", "Sam", "Tina",
];

/// Supplies the identity of each arriving customer
pub trait CustomerSource {
    /// `ordinal` is the 1-based number of this arrival
    fn next_profile(&mut self, ordinal: u64) -> CustomerProfile;
}

/// How arrivals get their name and cash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Manual,
    Automatic,
}

impl InputMode {
    /// Interpret a menu answer. `2` selects automatic, anything else manual.
    pub fn from_selection(input: &str) -> Self {
        match leading_int(input) {
            Some(2) => InputMode::Automatic,
            _ => InputMode::Manual,
        }
    }
}

/// Prompts for every arrival on an interactive console
pub struct ManualSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ManualSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, text: &str) -> String {
        if let Err(e) = write!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            warn!("Failed to write prompt: {}", e);
        }
        read_trimmed_line(&mut self.input)
    }
}

impl<R: BufRead, W: Write> CustomerSource for ManualSource<R, W> {
    fn next_profile(&mut self, ordinal: u64) -> CustomerProfile {
        let mut name = self.prompt("\n--- New arrival ---\nEnter name: ");
        if name.is_empty() {
            name = format!("Guest{}", ordinal);
        }
        let cash = parse_cash(&self.prompt("Enter cash amount: "));
        CustomerProfile::new(name, cash)
    }
}

/// Invents customers from a seeded RNG
#[derive(Debug)]
pub struct AutomaticSource {
    rng: StdRng,
    cash: Uniform<u64>,
}

impl AutomaticSource {
    pub fn new(cash_range: (u64, u64), seed: Option<u64>) -> Result<Self, ConfigError> {
        check_range("cash", cash_range)?;
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            rng,
            cash: Uniform::new_inclusive(cash_range.0, cash_range.1),
        })
    }

    /// Uses a seed distinct from the timing RNG so the two streams don't correlate
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::new(config.cash_range, config.random_seed.map(|s| s.wrapping_add(1)))
    }
}

impl CustomerSource for AutomaticSource {
    fn next_profile(&mut self, _ordinal: u64) -> CustomerProfile {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let name = format!("{}{}", first, self.rng.gen_range(0..1000));
        let cash = self.cash.sample(&mut self.rng) as f64;
        CustomerProfile::new(name, cash)
    }
}

/// Read one line without its terminator. EOF and read errors yield an empty string.
pub fn read_trimmed_line<R: BufRead>(input: &mut R) -> String {
    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        warn!("Failed to read input: {}", e);
        return String::new();
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Parse the leading decimal number as a cash amount; anything unparsable is 0
pub fn parse_cash(input: &str) -> f64 {
    let s = input.trim();
    s[..numeric_prefix_len(s.as_bytes())].parse().unwrap_or(0.0)
}

// Length of `[+-]digits[.digits][(e|E)[+-]digits]` at the start of `bytes`
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    end
}

fn leading_int(input: &str) -> Option<i64> {
    let s = input.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
