use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolve CLI inputs into recording files.
///
/// Glob patterns are expanded when any input contains `*`, directories are
/// walked for files ending in `extension`, plain files pass through.
pub fn expand_inputs(inputs: &[String], extension: &str) -> Result<Vec<PathBuf>> {
    let contains_glob = inputs.iter().any(|input| input.contains('*'));

    let mut candidates = Vec::new();
    for input in inputs {
        if contains_glob {
            let paths = glob::glob(input)
                .with_context(|| format!("Invalid glob pattern: {}", input))?;
            for entry in paths {
                match entry {
                    Ok(path) => candidates.push(path),
                    Err(e) => log::warn!("Skipping unreadable path: {}", e),
                }
            }
        } else {
            candidates.push(PathBuf::from(input));
        }
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for path in candidates {
        let expanded = if path.is_dir() {
            collect_dir(&path, extension)
        } else {
            vec![path]
        };
        for file in expanded {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    Ok(files)
}

fn collect_dir(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().map_or(false, |ext| ext == extension))
        .collect();
    files.sort();
    files
}

/// Name of the generated test: the file name without its `.json` extension
pub fn test_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.strip_suffix(".json").unwrap_or(file_name);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumi-replay-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        dir
    }

    #[test]
    fn test_test_name() {
        assert_eq!(
            test_name(Path::new("recordings/login.json")),
            Some("login".to_string())
        );
        assert_eq!(
            test_name(Path::new("checkout.flow.json")),
            Some("checkout.flow".to_string())
        );
        assert_eq!(test_name(Path::new("/")), None);
    }

    #[test]
    fn test_plain_inputs_pass_through() {
        let inputs = vec!["a.json".to_string(), "b.json".to_string(), "a.json".to_string()];
        let files = expand_inputs(&inputs, "json").unwrap();
        assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }

    #[test]
    fn test_directory_and_glob_expansion() {
        let dir = scratch_dir();
        std::fs::write(dir.join("one.json"), "{}").unwrap();
        std::fs::write(dir.join("nested/two.json"), "{}").unwrap();
        std::fs::write(dir.join("notes.txt"), "").unwrap();

        let files = expand_inputs(&[dir.display().to_string()], "json").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "json"));

        let pattern = format!("{}/*.json", dir.display());
        let files = expand_inputs(&[pattern], "json").unwrap();
        assert_eq!(files, vec![dir.join("one.json")]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
