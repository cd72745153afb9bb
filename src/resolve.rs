use crate::config::Variant;
use crate::error::InstallerError;
use crate::naming::asset_name;
use crate::release::{Release, ReleaseAsset};

/// Release tags in catalog order with the leading version marker stripped.
pub fn list_tags(releases: &[Release]) -> impl Iterator<Item = &str> {
    releases
        .iter()
        .map(|r| r.tag_name.strip_prefix('v').unwrap_or(&r.tag_name))
}

/// Select the release asset to install.
///
/// Releases are scanned in catalog order; a release is skipped when a version
/// constraint is set and its tag is not exactly `v<constraint>`, otherwise its
/// assets are scanned in order for an exact name match. The first release
/// satisfying both wins. Ties break by catalog order, never by comparing
/// versions.
pub fn resolve<'a>(
    releases: &'a [Release],
    variant: Variant,
    version: Option<&str>,
) -> Result<(&'a Release, &'a ReleaseAsset), InstallerError> {
    for release in releases {
        tracing::debug!("Reading release {}", release.name);
        if let Some(version) = version {
            if release.tag_name != format!("v{}", version) {
                tracing::debug!("Skip for version constraint");
                continue;
            }
        }
        let name = asset_name(variant, &release.tag_name);
        match release.assets.iter().find(|a| a.name == name) {
            Some(asset) => return Ok((release, asset)),
            None => tracing::debug!("Asset '{}' not found", name),
        }
    }
    Err(InstallerError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag: &str, asset_names: &[&str]) -> Release {
        Release {
            tag_name: tag.to_string(),
            name: format!("HyperTremolo {}", tag),
            assets: asset_names
                .iter()
                .map(|name| ReleaseAsset {
                    name: name.to_string(),
                    browser_download_url: format!("https://example.com/{}", name),
                })
                .collect(),
        }
    }

    #[test]
    fn tags_are_listed_in_catalog_order_without_the_v() {
        let releases = vec![release("v2.0.0", &[]), release("v1.0.0", &[])];
        let tags: Vec<&str> = list_tags(&releases).collect();
        assert_eq!(tags, ["2.0.0", "1.0.0"]);
    }

    #[test]
    fn first_release_with_a_matching_asset_wins() {
        let releases = vec![
            release("v2.0.0", &["HyperTremolo_linux_vst3_v2.0.0.zip"]),
            release("v1.0.0", &["HyperTremolo_linux_vst3_v1.0.0.zip"]),
        ];
        let (r, a) = resolve(&releases, Variant::Vst3, None).unwrap();
        assert_eq!(r.tag_name, "v2.0.0");
        assert_eq!(a.name, "HyperTremolo_linux_vst3_v2.0.0.zip");
    }

    #[test]
    fn releases_without_the_asset_are_skipped_in_order() {
        // Only the second release carries the standalone asset: first-match in
        // catalog order, not newest-version.
        let releases = vec![
            release("v2.0.0", &["HyperTremolo_linux_vst3_v2.0.0.zip"]),
            release("v1.0.0", &["HyperTremolo_linux_standalone_v1.0.0.zip"]),
        ];
        let (r, _) = resolve(&releases, Variant::Standalone, None).unwrap();
        assert_eq!(r.tag_name, "v1.0.0");
    }

    #[test]
    fn version_constraint_must_match_the_tag_exactly() {
        let releases = vec![
            release("v2.0.0", &["HyperTremolo_linux_vst3_v2.0.0.zip"]),
            release("v1.0.0", &["HyperTremolo_linux_vst3_v1.0.0.zip"]),
        ];
        let (r, _) = resolve(&releases, Variant::Vst3, Some("1.0.0")).unwrap();
        assert_eq!(r.tag_name, "v1.0.0");
    }

    #[test]
    fn unmatched_constraint_fails_regardless_of_assets() {
        let releases = vec![release("v1.2.0", &["HyperTremolo_linux_vst3_v1.2.0.zip"])];
        let err = resolve(&releases, Variant::Vst3, Some("9.9.9")).unwrap_err();
        assert!(matches!(err, InstallerError::NotFound));
    }

    #[test]
    fn asset_names_must_match_exactly() {
        let releases = vec![release("v1.2.0", &["HyperTremolo_linux_vst3_v1.2.0.zip.sha256"])];
        assert!(resolve(&releases, Variant::Vst3, None).is_err());
    }

    #[test]
    fn empty_catalog_resolves_to_nothing_but_lists_nothing() {
        let releases: Vec<Release> = vec![];
        assert!(resolve(&releases, Variant::Standalone, None).is_err());
        assert_eq!(list_tags(&releases).count(), 0);
    }
}
