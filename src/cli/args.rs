use clap::Parser;

use numerus::{Direction, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "numerus",
    version,
    about = "Convert Roman numerals to Arabic numbers and back (1 to 3899)"
)]
pub struct CliArgs {
    /// Kind of numeral given: roman (convert to Arabic) or arabic (convert to Roman)
    #[arg(value_enum)]
    pub direction: Direction,

    /// The Roman numeral or Arabic number to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
