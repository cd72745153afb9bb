use crate::cli::Cli;
use crate::error::InstallerError;
use std::path::PathBuf;

pub const PRODUCT_NAME: &str = "HyperTremolo";
pub const BUNDLE_NAME: &str = "HyperTremolo.vst3";
pub const DEFAULT_RELEASE_ENDPOINT: &str =
    "https://api.github.com/repos/ChromaticIsobar/HyperTremolo/releases";

/// Which artifact gets installed: the standalone executable or the VST3
/// plugin bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Standalone,
    Vst3,
}

impl Variant {
    /// Leaf name of the installed artifact under the prefix.
    pub fn dest_name(self) -> &'static str {
        match self {
            Variant::Standalone => PRODUCT_NAME,
            Variant::Vst3 => BUNDLE_NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Uninstall,
    Install,
}

/// Immutable per-invocation configuration. Built once from CLI arguments and
/// read-only afterward; `dest_path` is always derived from prefix + variant.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    pub variant: Variant,
    pub scope: Scope,
    pub prefix: PathBuf,
    pub dest_path: PathBuf,
    pub release_endpoint: String,
    pub version: Option<String>,
    pub mode: Mode,
}

impl InstallConfig {
    /// Build the run configuration from CLI arguments.
    ///
    /// Fails before any I/O when no installation prefix can be derived:
    /// system-wide VST3 installs have no platform default.
    pub fn from_cli(cli: &Cli) -> Result<Self, InstallerError> {
        let variant = if cli.standalone {
            Variant::Standalone
        } else {
            Variant::Vst3
        };
        let scope = if cli.global { Scope::Global } else { Scope::User };
        let mode = if cli.uninstall {
            Mode::Uninstall
        } else if cli.list {
            Mode::List
        } else {
            Mode::Install
        };

        let prefix = match &cli.prefix {
            Some(path) => path.clone(),
            None => default_prefix(variant, scope)?,
        };
        let dest_path = prefix.join(variant.dest_name());

        Ok(InstallConfig {
            variant,
            scope,
            prefix,
            dest_path,
            release_endpoint: cli.release_endpoint.clone(),
            version: cli.version.clone(),
            mode,
        })
    }
}

fn default_prefix(variant: Variant, scope: Scope) -> Result<PathBuf, InstallerError> {
    let home = || {
        dirs::home_dir()
            .ok_or_else(|| InstallerError::Config("Could not determine home directory".to_string()))
    };

    match (variant, scope) {
        (Variant::Standalone, Scope::User) => Ok(home()?.join(".local").join("bin")),
        (Variant::Standalone, Scope::Global) => Ok(PathBuf::from("/usr/bin")),
        (Variant::Vst3, Scope::User) => Ok(home()?.join(".vst3")),
        (Variant::Vst3, Scope::Global) => Err(InstallerError::Config(
            "No default system-wide path defined for VST3 plugins. \
             Please, specify an installation prefix"
                .to_string(),
        )),
    }
}
