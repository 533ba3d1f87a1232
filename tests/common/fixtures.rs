//! Test fixtures and constants.

/// Color tokens covering every grammar
pub mod tokens {
    /// Catalog name in an unusual case
    pub const NAME: &str = "dodgerblue";

    /// Six-digit hex with leading `#`, URL-encoded
    pub const HEX_HASH: &str = "%23FF0000";

    /// Three-digit shorthand without `#`
    pub const SHORTHAND: &str = "F00";

    /// All-digit token, read as decimal
    pub const DECIMAL: &str = "16711680";

    /// Hex color that is not a catalog entry, URL-encoded
    pub const OFF_CATALOG: &str = "%23123457";

    /// Matches no grammar
    pub const INVALID: &str = "GGGGGG";
}

/// Three-entry catalog in the external `{name, hex}` format
pub const SMALL_CATALOG: &str = r##"
- name: Ink
  hex: "#101010"
- name: Slate
  hex: "#404850"
- name: Paper
  hex: "#FAFAF0"
"##;

/// Write a YAML file into a temp dir and return both
pub fn yaml_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("colors.yaml");
    std::fs::write(&path, content).expect("Failed to write file");
    (dir, path)
}
