use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write a generated script to `<dir>/<test_name>.<extension>`.
///
/// The output directory is created first when it does not exist yet.
pub async fn export_script(
    dir: &Path,
    test_name: &str,
    extension: &str,
    content: &str,
) -> Result<PathBuf> {
    if !tokio::fs::try_exists(dir).await.unwrap_or(false) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Something went wrong while creating {}", dir.display()))?;
    }

    let path = dir.join(format!("{}.{}", test_name, extension));
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Something went wrong exporting {}", path.display()))?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_creates_missing_directory() {
        let dir = std::env::temp_dir()
            .join(format!("lumi-replay-{}", uuid::Uuid::new_v4()))
            .join("e2e");

        let path = export_script(&dir, "login", "js", "describe()\n")
            .await
            .unwrap();

        assert_eq!(path, dir.join("login.js"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "describe()\n");

        // second export into the now existing directory overwrites
        export_script(&dir, "login", "js", "it()\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "it()\n");

        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
