//! Compiler configuration
//!
//! An explicit value built by the startup routine from the parsed arguments
//! and handed to downstream stages by the caller. There is no process-wide
//! configuration singleton.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::args::ArgRegistry;
use crate::errors::{NvmcError, Result};

/// Build mode selected with `-r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

/// Resolved compiler configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input source file (`-i`)
    pub target_path: PathBuf,
    /// Output module path (`-o`)
    pub output_path: PathBuf,
    /// Include search directories (`-I`), absolute
    pub include_paths: Vec<PathBuf>,
    /// Debug or release build (`-r`)
    pub build_type: BuildType,
}

impl Config {
    /// Build a configuration from parsed arguments, checking every path
    /// against the filesystem.
    ///
    /// Expects `parse` and `validate_required` to have succeeded already.
    pub fn resolve(args: &ArgRegistry) -> Result<Self> {
        let release = args.get::<bool>("-r")?.unwrap_or(false);
        let build_type = if release {
            debug!("building in release mode");
            BuildType::Release
        } else {
            BuildType::Debug
        };

        let input: String = args
            .get("-i")?
            .ok_or_else(|| NvmcError::Config("no input file given".to_string()))?;
        let target_path = PathBuf::from(&input);
        if !target_path.exists() {
            return Err(NvmcError::Config(format!(
                "input file does not exist: {input}"
            )));
        }
        if !target_path.is_file() {
            return Err(NvmcError::Config(format!(
                "input file is not a regular file: {input}"
            )));
        }
        debug!(path = %target_path.display(), "input file");

        let output: String = args.get("-o")?.unwrap_or_else(|| "out.nvm".to_string());
        let output_path = PathBuf::from(&output);
        if output_path.is_dir() {
            return Err(NvmcError::Config(format!(
                "output path already exists, and it is a directory: {output}"
            )));
        }
        debug!(path = %output_path.display(), "output file");

        let include_list: String = args.get("-I")?.unwrap_or_default();
        let include_paths = resolve_include_dirs(&include_list)?;

        Ok(Self {
            target_path,
            output_path,
            include_paths,
            build_type,
        })
    }
}

/// Split a `;`-delimited directory list and absolutize each entry.
/// Empty segments are skipped.
fn resolve_include_dirs(list: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in list.split(';').filter(|s| !s.is_empty()) {
        let dir = Path::new(entry);
        if !dir.is_dir() {
            return Err(NvmcError::Config(format!(
                "include directory is not a directory: {entry}"
            )));
        }
        let dir = std::path::absolute(dir)?;
        debug!(path = %dir.display(), "include directory");
        paths.push(dir);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parsed(tokens: &[&str]) -> ArgRegistry {
        let mut args = ArgRegistry::new();
        args.flag("-h", "print help", false, false).unwrap();
        args.option("-i", "input file", "", true).unwrap();
        args.option("-I", "include directories (';' delim)", "", true).unwrap();
        args.option("-o", "output file name", "out.nvm", false).unwrap();
        args.flag("-r", "build in release mode", false, false).unwrap();
        let argv: Vec<String> = std::iter::once("nvmc")
            .chain(tokens.iter().copied())
            .map(String::from)
            .collect();
        args.parse(&argv).unwrap();
        args
    }

    #[test]
    fn test_resolve_valid_invocation() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("main.nv");
        fs::write(&input, "fn main() {}").unwrap();
        let include = TempDir::new().unwrap();

        let args = parsed(&[
            "-i",
            input.to_str().unwrap(),
            "-I",
            include.path().to_str().unwrap(),
            "-r",
        ]);
        let config = Config::resolve(&args).unwrap();

        assert_eq!(config.target_path, input);
        assert_eq!(config.output_path, PathBuf::from("out.nvm"));
        assert_eq!(config.build_type, BuildType::Release);
        assert_eq!(config.include_paths.len(), 1);
        assert!(config.include_paths[0].is_absolute());
    }

    #[test]
    fn test_default_build_type_is_debug() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("main.nv");
        fs::write(&input, "").unwrap();

        let args = parsed(&["-i", input.to_str().unwrap()]);
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_missing_input_file_rejected() {
        let args = parsed(&["-i", "/no/such/file.nv"]);
        let err = Config::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("input file does not exist"));
    }

    #[test]
    fn test_directory_as_input_rejected() {
        let dir = TempDir::new().unwrap();
        let args = parsed(&["-i", dir.path().to_str().unwrap()]);
        let err = Config::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_directory_as_output_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("main.nv");
        fs::write(&input, "").unwrap();
        let out_dir = TempDir::new().unwrap();

        let args = parsed(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.path().to_str().unwrap(),
        ]);
        let err = Config::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("it is a directory"));
    }

    #[test]
    fn test_include_entry_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("main.nv");
        fs::write(&input, "").unwrap();

        let args = parsed(&[
            "-i",
            input.to_str().unwrap(),
            "-I",
            input.to_str().unwrap(),
        ]);
        let err = Config::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("include directory is not a directory"));
    }

    #[test]
    fn test_include_list_splits_on_semicolon() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("main.nv");
        fs::write(&input, "").unwrap();
        let inc_a = TempDir::new().unwrap();
        let inc_b = TempDir::new().unwrap();

        let list = format!(
            "{};{}",
            inc_a.path().display(),
            inc_b.path().display()
        );
        let args = parsed(&["-i", input.to_str().unwrap(), "-I", &list]);
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.include_paths.len(), 2);
    }
}
