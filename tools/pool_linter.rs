/// Pool Linter — validates phrase pool files.
///
/// Usage: pool_linter <pools.ron | dir> [--extend-builtin]
///
/// With `--extend-builtin` each file is merged into the built-in pools
/// before checking, the way the server treats `--pools`.

use poem_engine::core::pools::PhrasePools;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: pool_linter <pools.ron | dir> [--extend-builtin]");
        process::exit(0);
    }

    let target = Path::new(&args[1]);
    let extend_builtin = args[2..].iter().any(|a| a == "--extend-builtin");

    let files = if target.is_file() {
        vec![target.to_path_buf()]
    } else if target.is_dir() {
        let mut files = Vec::new();
        collect_ron_files(target, &mut files);
        files.sort();
        files
    } else {
        eprintln!("ERROR: Path '{}' does not exist", target.display());
        process::exit(1);
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for path in &files {
        match lint_file(path, extend_builtin) {
            Ok(file_warnings) => {
                println!("  Checked: {}", path.display());
                warnings.extend(
                    file_warnings
                        .into_iter()
                        .map(|w| format!("{}: {}", path.display(), w)),
                );
            }
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    println!("\n=== Pool Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} files, {} errors, {} warnings",
        files.len(),
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn lint_file(
    path: &Path,
    extend_builtin: bool,
) -> Result<Vec<String>, poem_engine::core::pools::PoolError> {
    let pools = if extend_builtin {
        let mut pools = PhrasePools::builtin()?;
        pools.merge(PhrasePools::load_from_ron_unchecked(path)?);
        pools.validate()?;
        pools
    } else {
        PhrasePools::load_from_ron(path)?
    };
    Ok(pools.lint())
}

fn collect_ron_files(dir: &Path, files: &mut Vec<std::path::PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
}
