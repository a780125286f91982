use tracing::info;
use tracing_subscriber::EnvFilter;

use numerus::{Conversion, OutputFormat, convert};

use super::args::CliArgs;
use super::errors::AppError;

fn render(conversion: &Conversion, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(conversion.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(conversion)?),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    info!("Converting {} input: {:?}", args.direction, args.value);

    let conversion = convert(args.direction, &args.value).map_err(AppError::from)?;
    println!("{}", render(&conversion, args.format)?);

    info!("Conversion complete");
    Ok(())
}
