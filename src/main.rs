use std::{
    io,
    time::{Duration, Instant},
};

use ccalc::{AngleUnit, Config, evaluate, format_value};
use clap::Parser;

/// Exit status for an invalid expression or configuration.
const EXIT_EXPRESSION: i32 = 1;
/// Exit status for failures outside the expression, such as reading stdin.
const EXIT_SYSTEM: i32 = 2;

/// ccalc evaluates a C-style arithmetic or logical expression and prints the
/// result.
///
/// The expression is taken from the command line, or read as one line from
/// standard input when no expression is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print integer results in binary.
    #[arg(short, long, conflicts_with_all = ["octal", "hexadecimal", "radix"])]
    binary: bool,

    /// Print integer results in octal.
    #[arg(short, long, conflicts_with_all = ["hexadecimal", "radix"])]
    octal: bool,

    /// Print integer results in hexadecimal.
    #[arg(short = 'x', long, conflicts_with = "radix")]
    hexadecimal: bool,

    /// Print integer results in the given radix.
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    radix: Option<i32>,

    /// Digits after the decimal point for float results.
    #[arg(short, long, value_name = "N", default_value_t = 6, allow_negative_numbers = true)]
    precision: i32,

    /// Always print float results in scientific notation.
    #[arg(short, long)]
    scientific: bool,

    /// Group digits by N, overriding the radix default. 0 disables grouping.
    #[arg(short, long, value_name = "N")]
    group: Option<usize>,

    /// Trigonometric functions take and return degrees.
    #[arg(short, long)]
    degrees: bool,

    /// Treat `^` as exponentiation instead of bitwise XOR.
    #[arg(short = 'e', long)]
    caret: bool,

    /// Print the result as true or false.
    #[arg(long = "bool")]
    boolean: bool,

    /// Print digits above 9 and boolean words in upper case.
    #[arg(short, long)]
    uppercase: bool,

    /// Append the evaluation time to the result.
    #[arg(short, long)]
    time: bool,

    /// The expression. Words are concatenated without separators.
    #[arg(allow_negative_numbers = true)]
    expression: Vec<String>,
}

impl Args {
    fn config(&self) -> Config {
        let radix = if self.binary {
            2
        } else if self.octal {
            8
        } else if self.hexadecimal {
            16
        } else {
            self.radix.unwrap_or(10)
        };

        Config { radix,
                 precision: self.precision,
                 grouping: self.group,
                 angle_unit: if self.degrees { AngleUnit::Degrees } else { AngleUnit::Radians },
                 caret_exp: self.caret,
                 boolean: self.boolean,
                 uppercase: self.uppercase,
                 scientific: self.scientific }
    }

    /// Returns the expression words concatenated, or one line of standard
    /// input when no words were given.
    fn expression_text(&self) -> io::Result<String> {
        if self.expression.is_empty() {
            read_line()
        } else {
            Ok(self.expression.concat())
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(code) = run(&args) {
        std::process::exit(code);
    }
}

/// Evaluates the requested expression and prints the result.
///
/// Errors are reported on stderr; the returned `Err` holds the exit status.
fn run(args: &Args) -> Result<(), i32> {
    let config = args.config();

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return Err(EXIT_EXPRESSION);
    }

    let expression = args.expression_text().map_err(|e| {
                                               eprintln!("Error: failed to read expression: {e}");
                                               EXIT_SYSTEM
                                           })?;

    if expression.trim().is_empty() {
        eprintln!("Error: no expression given");
        return Err(EXIT_EXPRESSION);
    }

    let start = Instant::now();
    let result = evaluate(&expression, &config);
    let elapsed = start.elapsed();

    let text = result.and_then(|value| Ok(format_value(value, &config)?))
                     .map_err(|e| {
                         eprintln!("Error: {e}");
                         EXIT_EXPRESSION
                     })?;

    if args.time {
        println!("{text}{}", format_time(elapsed));
    } else {
        println!("{text}");
    }

    Ok(())
}

/// Reads one line from standard input without its line terminator.
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Renders the elapsed time suffix printed by `--time`.
fn format_time(elapsed: Duration) -> String {
    format!(" (time: {}.{:06} seconds)", elapsed.as_secs(), elapsed.subsec_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ccalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn expression_words_are_concatenated() {
        assert_eq!(parse(&["1", "2"]).expression_text().unwrap(), "12");
        assert_eq!(parse(&["2", "*", "*", "3"]).expression_text().unwrap(), "2**3");
        assert_eq!(parse(&["-5", "+3"]).expression_text().unwrap(), "-5+3");
    }

    #[test]
    fn caret_flag_is_e() {
        let args = parse(&["-e", "2^3"]);
        assert!(args.config().caret_exp);
        assert_eq!(args.expression_text().unwrap(), "2^3");
        assert!(!parse(&["2^3"]).config().caret_exp);
    }

    #[test]
    fn radix_flags_select_output_base() {
        assert_eq!(parse(&["-x", "1"]).config().radix, 16);
        assert_eq!(parse(&["-b", "1"]).config().radix, 2);
        assert_eq!(parse(&["-r", "36", "1"]).config().radix, 36);
        assert!(Args::try_parse_from(["ccalc", "-b", "-x", "1"]).is_err());
    }

    #[test]
    fn elapsed_time_suffix() {
        assert_eq!(format_time(Duration::from_micros(1_500_042)), " (time: 1.500042 seconds)");
    }
}
