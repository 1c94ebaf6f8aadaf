//! Test harness for twig integration tests

use std::path::Path;
use std::process::Command;

pub use twig::test_utils::TestDir;

/// Run the twig binary in `dir` with `args`, returning (stdout, stderr, success).
pub fn run_twig(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_twig");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("TWIG_LOG")
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run twig");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.txt");
        assert!(file_path.exists());
    }
}
