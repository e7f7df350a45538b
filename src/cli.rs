use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

use crate::commands;
use crate::error::Result;

/// imgutil - image file utility
///
/// Reports file size and JPEG dimensions, prints base64 of a file, and
/// copies images around. Nothing is decoded or resized.
#[derive(Debug, Parser)]
#[command(name = "imgutil")]
#[command(version)]
#[command(about = "Image file utility (size, dimensions, base64, copies)", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Warnings only unless asked for more; `--debug` wins over `--verbose`.
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show image file info (size, dimensions)
    Info {
        /// Path to the image file
        path: PathBuf,

        #[arg(hide = true, trailing_var_arg = true)]
        extra: Vec<OsString>,
    },

    /// Output base64-encoded image
    Base64 {
        /// Path to the image file
        path: PathBuf,

        #[arg(hide = true, trailing_var_arg = true)]
        extra: Vec<OsString>,
    },

    /// Copy an image to a destination (no resizing is performed)
    Thumbnail {
        /// Source image
        src: PathBuf,

        /// Destination file or directory
        dst: PathBuf,

        #[arg(hide = true, trailing_var_arg = true)]
        extra: Vec<OsString>,
    },
}

impl Commands {
    /// Arguments past the ones a command needs; accepted and ignored.
    pub fn extra(&self) -> &[OsString] {
        match self {
            Commands::Info { extra, .. }
            | Commands::Base64 { extra, .. }
            | Commands::Thumbnail { extra, .. } => extra,
        }
    }
}

/// Runs one command, writing its report to `out`.
pub fn run<W: Write>(command: &Commands, out: &mut W) -> Result<()> {
    if !command.extra().is_empty() {
        debug!(extra = ?command.extra(), "ignoring extra arguments");
    }

    match command {
        Commands::Info { path, .. } => run_info(path, out),
        Commands::Base64 { path, .. } => run_base64(path, out),
        Commands::Thumbnail { src, dst, .. } => run_thumbnail(src, dst, out),
    }
}

fn run_info<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let info = commands::info(path)?;
    writeln!(out, "{}", info)?;
    Ok(())
}

fn run_base64<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let encoded = commands::encode_base64(path)?;
    writeln!(out, "{}", encoded)?;
    Ok(())
}

fn run_thumbnail<W: Write>(src: &Path, dst: &Path, out: &mut W) -> Result<()> {
    commands::thumbnail(src, dst)?;
    writeln!(out, "Copied {} -> {}", src.display(), dst.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_thumbnail() {
        let cli = Cli::try_parse_from(["imgutil", "thumbnail", "a.jpg", "b.jpg"]).unwrap();
        match cli.command {
            Commands::Thumbnail { src, dst, extra } => {
                assert_eq!(src, PathBuf::from("a.jpg"));
                assert_eq!(dst, PathBuf::from("b.jpg"));
                assert!(extra.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_thumbnail_requires_destination() {
        let err = Cli::try_parse_from(["imgutil", "thumbnail", "a.jpg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_trailing_arguments_are_collected() {
        let cli = Cli::try_parse_from(["imgutil", "info", "a.jpg", "extra", "more"]).unwrap();
        assert_eq!(
            cli.command.extra(),
            &[OsString::from("extra"), OsString::from("more")]
        );
    }

    #[test]
    fn test_unknown_subcommand() {
        let err = Cli::try_parse_from(["imgutil", "resize", "a.jpg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["imgutil", "info", "a.jpg"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);
        let cli = Cli::try_parse_from(["imgutil", "-v", "info", "a.jpg"]).unwrap();
        assert_eq!(cli.log_level(), Level::INFO);
        let cli = Cli::try_parse_from(["imgutil", "info", "a.jpg", "-v", "--debug"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
    }
}
