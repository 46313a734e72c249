// src/main.rs
mod utils;
mod extractors;
mod output;

use clap::Parser;
use std::path::PathBuf;
use utils::AppError;
use extractors::PdfTextExtractor;
use output::OutputFormat;

/// Command Line Interface for PDF text extraction
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the PDF file to read
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// String inserted between pages (none by default). Accepts \n, \t and \\ escapes
    #[arg(short, long, default_value = "")]
    separator: String,
}

/// Expands the escape sequences a shell user can't easily type into a separator
fn unescape_separator(raw: &str) -> Result<String, AppError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(AppError::Config(format!("Unsupported escape sequence '\\{}' in separator", other)));
            }
            None => return Err(AppError::Config("Separator ends with a lone backslash".to_string())),
        }
    }
    Ok(out)
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var, writes to stderr)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting extraction for args: {:?}", args);

    let separator = unescape_separator(&args.separator)?;

    // 3. Extract; nothing reaches stdout unless every page succeeded
    let extractor = PdfTextExtractor::new().with_separator(separator);
    let document = extractor.extract_document(&args.path)?;

    // 4. Emit
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_document(&mut handle, &document, args.format)?;

    tracing::info!("Processing finished. Pages: {}", document.page_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["pdf_text", "report.pdf"]).unwrap();
        assert_eq!(args.path, PathBuf::from("report.pdf"));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.separator, "");
    }

    #[test]
    fn test_args_json_format_and_separator() {
        let args = Args::try_parse_from(["pdf_text", "--format", "json", "--separator", "\\n", "in.pdf"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(unescape_separator(&args.separator).unwrap(), "\n");
    }

    #[test]
    fn test_args_require_path() {
        assert!(Args::try_parse_from(["pdf_text"]).is_err());
    }

    #[test]
    fn test_unescape_separator() {
        assert_eq!(unescape_separator("").unwrap(), "");
        assert_eq!(unescape_separator("---").unwrap(), "---");
        assert_eq!(unescape_separator("\\n\\n").unwrap(), "\n\n");
        assert_eq!(unescape_separator("\\t|\\\\").unwrap(), "\t|\\");
    }

    #[test]
    fn test_unescape_separator_rejects_bad_escapes() {
        assert!(matches!(unescape_separator("\\x"), Err(AppError::Config(_))));
        assert!(matches!(unescape_separator("tail\\"), Err(AppError::Config(_))));
    }
}
