use crate::config::Variant;

/// Expected release asset name for a variant and release tag.
///
/// Pure and deterministic; the tag is embedded exactly as the catalog reports
/// it, leading `v` included.
pub fn asset_name(variant: Variant, tag: &str) -> String {
    let variant_id = match variant {
        Variant::Standalone => "standalone",
        Variant::Vst3 => "vst3",
    };
    format!("HyperTremolo_linux_{}_{}.zip", variant_id, tag)
}
