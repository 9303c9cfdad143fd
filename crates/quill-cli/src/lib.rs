//! CLI logic for the Quill renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{fs, io::Write};

use log::info;

use quill::{QuillError, SceneBuilder, config::OutputFormat};

/// Output path that means "write to stdout".
const STDOUT_PATH: &str = "-";

/// Default output file for SVG output.
const DEFAULT_SVG_OUTPUT: &str = "out.svg";

/// Run the Quill CLI application
///
/// Reads the scene file, renders it in the requested format and writes the
/// result to the output path or stdout.
///
/// # Errors
///
/// Returns `QuillError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene syntax and shape validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), QuillError> {
    info!(input_path = args.input; "Processing scene");

    let app_config = config::load_config(args.config.as_ref())?;
    let format = args.format.unwrap_or(app_config.render().format());

    let source = fs::read_to_string(&args.input)?;

    let builder = SceneBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let output = builder.render(&diagram, format)?;

    match output_path(args.output.as_deref(), format) {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path, format = format.to_string(); "Scene exported successfully");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Resolves where output goes; `None` means stdout.
fn output_path(output: Option<&str>, format: OutputFormat) -> Option<&str> {
    match (output, format) {
        (Some(STDOUT_PATH), _) => None,
        (Some(path), _) => Some(path),
        (None, OutputFormat::Svg) => Some(DEFAULT_SVG_OUTPUT),
        (None, OutputFormat::Text) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_defaults() {
        assert_eq!(output_path(None, OutputFormat::Svg), Some("out.svg"));
        assert_eq!(output_path(None, OutputFormat::Text), None);
    }

    #[test]
    fn test_output_path_explicit() {
        assert_eq!(output_path(Some("a.svg"), OutputFormat::Text), Some("a.svg"));
        assert_eq!(output_path(Some("-"), OutputFormat::Svg), None);
    }
}
