use crate::cli::Cli;
use crate::cli::colors::ColorSupport;
use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub colors: ColorSupport,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        // Machine-readable formats never carry ANSI codes.
        let colors = match cli.output_format() {
            OutputFormat::Human => ColorSupport::detect(),
            OutputFormat::Json | OutputFormat::Jsonl => ColorSupport::None,
        };

        Ok(Self {
            config,
            output_format: cli.output_format(),
            colors,
            verbosity: cli.verbose,
        })
    }
}
