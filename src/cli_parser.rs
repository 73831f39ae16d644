//! CLI argument parsing and help text for sealed-model.

use sealed_model::{ConfigError, LoaderConfig, Padding};
use std::path::PathBuf;

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "sealed-model v{}

USAGE:
    sealed-model [COMMAND] [OPTIONS]

COMMANDS:
    load         Decrypt a sealed model and hand it to the sink (default)
    seal         Encrypt a plaintext model into a sealed model file
    version      Show version information
    help         Show this help message

EXAMPLES:
    sealed-model                                   # load model.enc with key.pem
    sealed-model load --model m.enc --key m.key --output m.bin
    sealed-model seal --input m.bin --model m.enc --key m.key

ENVIRONMENT:
    RUST_LOG     Log level (debug, info, warn, error)

EXIT CODES:
    0  Success
    1  Failure
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "load" => eprintln!(
            "sealed-model load - Decrypt a sealed model

USAGE:
    sealed-model load [OPTIONS]

OPTIONS:
    --config FILE         Load options from a TOML file (flags override it)
    --model PATH          Sealed model file (default: model.enc)
    --key PATH            Key file (default: key.pem)
    --output PATH         Write the decrypted model to PATH
    --padding MODE        none (default) or pkcs7
"
        ),
        "seal" => eprintln!(
            "sealed-model seal - Encrypt a model

USAGE:
    sealed-model seal --input PATH [OPTIONS]

OPTIONS:
    --input PATH          Plaintext model to encrypt
    --model PATH          Sealed output file (default: model.enc)
    --key PATH            Key file (default: key.pem)
    --padding MODE        none (default) or pkcs7
"
        ),
        _ => eprintln!(
            "No detailed help available for '{}'. Use 'sealed-model help' for general usage.",
            command
        ),
    }
}

/// Options shared by `load` and `seal`.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub padding: Option<Padding>,
}

impl CliOptions {
    /// Parse `--flag value` pairs.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut opts = Self::default();
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("Missing value for {flag}"))?;
            match flag {
                "--config" => opts.config = Some(PathBuf::from(value)),
                "--model" => opts.model = Some(PathBuf::from(value)),
                "--key" => opts.key = Some(PathBuf::from(value)),
                "--output" => opts.output = Some(PathBuf::from(value)),
                "--input" => opts.input = Some(PathBuf::from(value)),
                "--padding" => opts.padding = Some(value.parse()?),
                _ => return Err(format!("Unknown argument: {flag}")),
            }
            i += 2;
        }
        Ok(opts)
    }

    /// Base config (file or defaults) with flag overrides applied.
    pub fn into_config(self) -> Result<LoaderConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => LoaderConfig::load_file(path)?,
            None => LoaderConfig::default(),
        };
        if let Some(model) = self.model {
            config.model_path = model;
        }
        if let Some(key) = self.key {
            config.key_path = key;
        }
        if let Some(output) = self.output {
            config.output_path = Some(output);
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        config.validate()?;
        Ok(config)
    }
}
