//! Output targets for rendered views.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }

    /// Check if output is to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Determine if color should be used based on flags, environment and target
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err() && target.is_terminal()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            tracing::info!("Output written to {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_target_from_option() {
        assert!(matches!(OutputTarget::from_option(None), OutputTarget::Stdout));
        let path = PathBuf::from("/tmp/view.json");
        match OutputTarget::from_option(Some(path.clone())) {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("Expected File variant"),
        }
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_file_target_never_colored() {
        let target = OutputTarget::File(PathBuf::from("/tmp/view.txt"));
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("view.txt");
        write_output("desktop", &OutputTarget::File(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "desktop");
    }
}
