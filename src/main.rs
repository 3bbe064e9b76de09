use clap::Parser;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

mod diagnostics;
mod driver;
mod error;
mod render;
mod spec;
mod styled;
mod tree;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "argspec-svg")]
#[command(about = "Render an Ansible role's argument_specs.yml as an SVG tree", long_about = None)]
struct Cli {
    /// Path to the role's meta/argument_specs.yml.
    #[arg(long = "file", value_name = "PATH", value_parser = readable_file)]
    file_path: PathBuf,

    /// Directory the generated SVG is written to.
    #[arg(long, value_name = "DIR", value_parser = writable_dir)]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    diagnostics::init_logging();
    let cli = Cli::parse();

    match driver::run(&cli.file_path, &cli.output_dir) {
        Ok(out) => {
            println!("Wrote {}", out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diagnostics::error_message(format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

/// `--file` must exist and be readable; checked before anything runs.
fn readable_file(arg: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    let meta = fs::metadata(&path).map_err(|e| format!("file {arg:?} does not exist: {e}"))?;
    if !meta.is_file() {
        return Err(format!("{arg:?} is not a file"));
    }
    File::open(&path).map_err(|e| format!("file {arg:?} is not readable: {e}"))?;
    Ok(path)
}

/// `--output-dir` must exist and be writable.
fn writable_dir(arg: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    let meta =
        fs::metadata(&path).map_err(|e| format!("directory {arg:?} does not exist: {e}"))?;
    if !meta.is_dir() {
        return Err(format!("{arg:?} is not a directory"));
    }
    // Mode bits alone miss ownership and ACLs; create a real file to find out.
    tempfile::Builder::new()
        .prefix(".argspec-svg-")
        .tempfile_in(&path)
        .map_err(|e| format!("directory {arg:?} is not writable: {e}"))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn both_options_are_required() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        assert!(Cli::try_parse_from(["argspec-svg", "--output-dir", dir]).is_err());
    }

    #[test]
    fn accepts_existing_file_and_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("argument_specs.yml");
        fs::write(&file, "argument_specs: {}\n").unwrap();

        let cli = Cli::try_parse_from([
            "argspec-svg",
            "--file",
            file.to_str().unwrap(),
            "--output-dir",
            tmp.path().to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(cli.file_path, file);
        assert_eq!(cli.output_dir, tmp.path());
    }

    #[test]
    fn rejects_missing_file_and_swapped_kinds() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let missing = tmp.path().join("missing.yml");

        assert!(readable_file(missing.to_str().unwrap()).is_err());
        assert!(readable_file(dir).unwrap_err().contains("is not a file"));
        assert!(writable_dir(missing.to_str().unwrap()).is_err());

        let file = tmp.path().join("f.yml");
        fs::write(&file, "").unwrap();
        assert!(writable_dir(file.to_str().unwrap()).unwrap_err().contains("is not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_read_only_output_dir() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // root ignores mode bits; nothing to check there.
        let privileged = fs::write(locked.join("x"), "").is_ok();
        if !privileged {
            let err = writable_dir(locked.to_str().unwrap()).unwrap_err();
            assert!(err.contains("is not writable"), "{err}");
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(writable_dir(locked.to_str().unwrap()).is_ok());
        // The writability check cleans up after itself.
        assert_eq!(fs::read_dir(&locked).unwrap().count(), 0);
    }
}
