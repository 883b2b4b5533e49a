use std::path::PathBuf;

use iconforge_engine::icon::Design;

/// What to generate and where.
///
/// Passed explicitly into [`crate::writer::write_icon_set`]; nothing in the
/// pipeline reads global state.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSetConfig {
    pub sizes: Vec<u32>,
    pub design: Design,
    pub out_dir: PathBuf,
    /// Files are named `{file_prefix}{size}.png`.
    pub file_prefix: String,
}

impl IconSetConfig {
    pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

    pub fn file_name(&self, size: u32) -> String {
        format!("{}{}.png", self.file_prefix, size)
    }

    pub fn path_for(&self, size: u32) -> PathBuf {
        self.out_dir.join(self.file_name(size))
    }
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            sizes: Self::DEFAULT_SIZES.to_vec(),
            design: Design::Document,
            out_dir: PathBuf::from("."),
            file_prefix: "icon".to_string(),
        }
    }
}
