//! sealed-model entry point.
//!
//! `load` (the default) decrypts a sealed model and hands it to a sink; `seal` produces
//! sealed model files. Exit code 0 on success, 1 on any failure.

mod cli_parser;

use std::process::ExitCode;

use cli_parser::CliOptions;
use sealed_model::{DiscardSink, FileSink, ModelSink, SecureModelLoader};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (command, rest) = match args.get(1).map(|s| s.as_str()) {
        None => ("load", &args[1..]),
        Some(flag) if flag.starts_with("--") && flag != "--help" && flag != "--version" => {
            ("load", &args[1..])
        }
        Some(cmd) => (cmd, &args[2..]),
    };

    match command {
        "load" => run_load(rest),
        "seal" => run_seal(rest),
        "help" | "--help" | "-h" => {
            if let Some(sub) = rest.first() {
                cli_parser::print_command_help(sub);
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("sealed-model {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_load(args: &[String]) -> ExitCode {
    let config = match CliOptions::parse(args)
        .map_err(|e| e.to_string())
        .and_then(|opts| opts.into_config().map_err(|e| e.to_string()))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            cli_parser::print_command_help("load");
            return ExitCode::FAILURE;
        }
    };

    let loader = SecureModelLoader::new(config);
    let mut sink: Box<dyn ModelSink> = match &loader.config().output_path {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(DiscardSink),
    };

    match loader.load(sink.as_mut()) {
        Ok(report) => {
            println!(
                "Model loaded successfully ({} bytes, sha256 {})",
                report.plaintext_bytes, report.sha256
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to load model: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_seal(args: &[String]) -> ExitCode {
    let opts = match CliOptions::parse(args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{}", e);
            cli_parser::print_command_help("seal");
            return ExitCode::FAILURE;
        }
    };
    let Some(input) = opts.input.clone() else {
        eprintln!("Missing --input");
        cli_parser::print_command_help("seal");
        return ExitCode::FAILURE;
    };
    let config = match opts.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match seal(&input, &config) {
        Ok(written) => {
            println!(
                "Model sealed successfully ({} bytes written to {})",
                written,
                config.model_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to seal model: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "rand")]
fn seal(
    input: &std::path::Path,
    config: &sealed_model::LoaderConfig,
) -> Result<u64, Box<dyn std::error::Error>> {
    use secure_gate::Zeroize;
    use std::fs::File;
    use std::io::{BufReader, BufWriter, Write};

    if same_file(input, &config.model_path) {
        return Err(format!(
            "input and output are the same file: {}",
            input.display()
        )
        .into());
    }

    let source = BufReader::new(File::open(input)?);
    let mut key = sealed_model::load_key(&config.key_path)?;
    let mut destination = match File::create(&config.model_path) {
        Ok(file) => BufWriter::new(file),
        Err(e) => {
            key.expose_secret_mut().zeroize();
            return Err(e.into());
        }
    };

    let result = sealed_model::encrypt_with_random_iv(
        source,
        &mut destination,
        key.expose_secret(),
        config.padding,
    );
    key.expose_secret_mut().zeroize();

    let result = result
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|written| {
            destination.flush()?;
            Ok(written)
        });

    if result.is_err() {
        drop(destination);
        let _ = std::fs::remove_file(&config.model_path);
    }
    result
}

#[cfg(not(feature = "rand"))]
fn seal(
    _input: &std::path::Path,
    _config: &sealed_model::LoaderConfig,
) -> Result<u64, Box<dyn std::error::Error>> {
    Err("sealing needs fresh IVs: rebuild with the `rand` feature".into())
}

/// Whether both paths name one existing file. Creating the output would truncate the input.
#[cfg(feature = "rand")]
fn same_file(input: &std::path::Path, output: &std::path::Path) -> bool {
    match (std::fs::canonicalize(input), std::fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
