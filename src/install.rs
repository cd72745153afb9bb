//! Install/uninstall/list orchestration.
//!
//! Sequences precondition checks before any network or filesystem mutation
//! and hands the terminal outcome back to the caller; nothing here retries or
//! remaps a failure into a different kind.

use crate::config::{InstallConfig, Mode, Variant};
use crate::download::download_to_file;
use crate::error::InstallerError;
use crate::release::fetch_releases;
use crate::resolve::{list_tags, resolve};
use std::fs;
use std::io::{self, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Terminal result of one run, reported by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed(PathBuf),
    Removed(PathBuf),
    Listed(Vec<String>),
}

/// Run the full workflow for one configuration.
///
/// Uninstall dispatches straight to the uninstaller, bypassing the prefix
/// check. List fetches the catalog and reports tags without touching the
/// filesystem; the prefix need not exist. Install checks the prefix, then
/// fetches, resolves and materializes the asset.
pub async fn run(config: &InstallConfig) -> Result<Outcome, InstallerError> {
    match config.mode {
        Mode::Uninstall => {
            tracing::info!("Uninstalling HyperTremolo: {}", config.dest_path.display());
            uninstall(config).map(Outcome::Removed)
        }
        Mode::List => {
            let releases = fetch_releases(&config.release_endpoint).await?;
            Ok(Outcome::Listed(
                list_tags(&releases).map(String::from).collect(),
            ))
        }
        Mode::Install => {
            if !config.prefix.is_dir() {
                return Err(InstallerError::Config(format!(
                    "Installation prefix does not exist: '{}'. Please, check that \
                     the path is correct and, eventually, create it",
                    config.prefix.display()
                )));
            }
            tracing::info!("Installing HyperTremolo: {}", config.dest_path.display());

            let releases = fetch_releases(&config.release_endpoint).await?;
            let (release, asset) = resolve(&releases, config.variant, config.version.as_deref())?;
            tracing::info!("Installing HyperTremolo {}", release.tag_name);

            install(config, &asset.browser_download_url).await?;
            Ok(Outcome::Installed(config.dest_path.clone()))
        }
    }
}

/// Download the asset into a scoped temporary file, unpack it into the prefix
/// and fix executable permissions where the variant needs them.
///
/// Existing files at the same relative paths are overwritten so a re-install
/// over a previous installation succeeds. A failure mid-extraction leaves a
/// partially-extracted tree behind.
pub async fn install(config: &InstallConfig, url: &str) -> Result<(), InstallerError> {
    // Anonymous temp file: released on every exit path when dropped.
    let mut archive_file = tempfile::tempfile()?;
    download_to_file(&mut archive_file, url).await?;

    archive_file.seek(SeekFrom::Start(0))?;
    extract_zip(archive_file, &config.prefix)?;

    if config.variant == Variant::Standalone {
        set_executable(&config.dest_path)?;
    }
    Ok(())
}

fn extract_zip(file: fs::File, prefix: &Path) -> Result<(), InstallerError> {
    let mut archive = zip::ZipArchive::new(file).map_err(io::Error::from)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(io::Error::from)?;
        let outpath = prefix.join(entry.name());

        if !outpath.starts_with(prefix) {
            tracing::warn!("Skipping malicious path in zip: {}", entry.name());
            continue;
        }

        if entry.name().ends_with('/') {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&outpath)?;
            io::copy(&mut entry, &mut outfile)?;
        }
    }

    Ok(())
}

/// Add execute permission for owner, group and others, keeping every other
/// mode bit as-is.
fn set_executable(path: &Path) -> Result<(), InstallerError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tracing::debug!("Setting executable permissions");
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o111);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// Remove a previously installed artifact: a single file for the standalone
/// variant, the whole bundle tree for VST3. No prompt, no backup.
pub fn uninstall(config: &InstallConfig) -> Result<PathBuf, InstallerError> {
    match config.variant {
        Variant::Standalone => {
            if !config.dest_path.is_file() {
                return Err(missing_target(&config.dest_path));
            }
            fs::remove_file(&config.dest_path)?;
        }
        Variant::Vst3 => {
            if !config.dest_path.is_dir() {
                return Err(missing_target(&config.dest_path));
            }
            fs::remove_dir_all(&config.dest_path)?;
        }
    }
    Ok(config.dest_path.clone())
}

fn missing_target(path: &Path) -> InstallerError {
    InstallerError::Filesystem(io::Error::new(
        io::ErrorKind::NotFound,
        format!("File not found: {}", path.display()),
    ))
}
