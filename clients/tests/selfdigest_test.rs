//! Integration tests for the `selfdigest` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use selfdigest::compute::compute;
use selfdigest::table::{FACT_COUNT, OBFUSCATION};
use tempfile::TempDir;

/// Where the binary looks for its own source, relative to the working directory.
const SELF_SOURCE: &str = "clients/src/bin/selfdigest.rs";

/// Get the `selfdigest` command for testing.
fn selfdigest_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_selfdigest"))
}

/// A working directory with `content` placed at the self-source path.
fn workdir_with(content: &[u8]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join(SELF_SOURCE);
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, content).unwrap();
    dir
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn line(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out.push(b'\n');
    out
}

mod output {
    use super::*;

    #[test]
    fn all_ones_prints_table_plus_one() {
        let dir = workdir_with(&[1u8; FACT_COUNT]);
        let expected: Vec<u8> = OBFUSCATION.iter().map(|x| x.wrapping_add(1)).collect();
        selfdigest_cmd()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(line(&expected));
    }

    #[test]
    fn short_source_prints_table_up_to_zero() {
        let dir = workdir_with(b"fn main() {}");
        selfdigest_cmd()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(line(&OBFUSCATION[..6]));
    }

    #[test]
    fn leading_zero_prints_empty_line() {
        let mut content = [0u8; FACT_COUNT];
        content[0] = 0u8.wrapping_sub(OBFUSCATION[0]);
        let dir = workdir_with(&content);
        selfdigest_cmd()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(line(&[]));
    }

    #[test]
    fn own_source_matches_library_digest() {
        let root = workspace_root();
        let bytes = fs::read(root.join(SELF_SOURCE)).unwrap();
        let fact = compute(&bytes).unwrap();
        selfdigest_cmd()
            .current_dir(&root)
            .assert()
            .success()
            .stdout(line(fact.as_c_bytes()));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let content: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 256) as u8).collect();
        let dir = workdir_with(&content);
        let first = selfdigest_cmd()
            .current_dir(dir.path())
            .output()
            .unwrap();
        let second = selfdigest_cmd()
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }
}

mod arguments {
    use super::*;

    #[test]
    fn arguments_are_ignored() {
        let dir = workdir_with(&[1u8; FACT_COUNT * 3]);
        let baseline = selfdigest_cmd()
            .current_dir(dir.path())
            .output()
            .unwrap();

        for args in [
            vec!["extra"],
            vec!["--help"],
            vec!["--version"],
            vec!["-x", "--unknown=1", "positional"],
        ] {
            selfdigest_cmd()
                .current_dir(dir.path())
                .args(&args)
                .assert()
                .success()
                .stdout(baseline.stdout.clone());
        }
    }
}

mod failure {
    use super::*;

    #[test]
    fn missing_source_exits_one_without_output() {
        let dir = TempDir::new().unwrap();
        selfdigest_cmd()
            .current_dir(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(SELF_SOURCE));
    }
}
