mod cli;

use cli::{Args, Command, SetCommand};
use kustedit::config::{discover_config, load_config_from_path, ConfigFile};
use kustedit::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let Command::Set {
        target: SetCommand::HelmVersion { chart_versions },
    } = args.command;

    // Bad arguments are reported before any file is looked up
    ChartVersionMap::parse(&chart_versions)?;

    let dir = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_directory(&dir)?;

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&dir)?.unwrap_or_default(),
    };

    let store = resolve_store(args.file.as_deref(), &config, &dir)?;
    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = SetHelmVersionUseCase::new(store, reporter);
    let request =
        SetHelmVersionRequest::new(chart_versions).with_warn_unmatched(config.warn_unmatched());
    use_case.execute(request)?;

    Ok(())
}

/// Picks the kustomization file: `--file`, then the config's
/// `kustomization_file`, then lookup of the well-known names in `dir`.
fn resolve_store(file: Option<&str>, config: &ConfigFile, dir: &Path) -> Result<KustomizationFile> {
    if let Some(file) = file {
        return Ok(KustomizationFile::new(PathBuf::from(file)));
    }
    if let Some(name) = config.kustomization_file.as_deref() {
        return Ok(KustomizationFile::new(dir.join(name)));
    }
    KustomizationFile::discover(dir)
}

fn validate_directory(path: &Path) -> Result<()> {
    let invalid = |reason: String| KustomizationError::InvalidDirectory {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if !metadata.is_dir() && !path.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
