//! Output filename patterns per asset class.

use serde::Serialize;

/// Class of emitted asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Entry bundle
    App,
    /// Async chunk
    Chunk,
    Css,
    Img,
    Font,
    Video,
}

impl AssetClass {
    pub const ALL: [AssetClass; 6] = [
        AssetClass::App,
        AssetClass::Chunk,
        AssetClass::Css,
        AssetClass::Img,
        AssetClass::Font,
        AssetClass::Video,
    ];

    /// Script classes end up in user-facing `<script>` tags
    pub fn is_script(&self) -> bool {
        matches!(self, AssetClass::App | AssetClass::Chunk)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::App => "app",
            AssetClass::Chunk => "chunk",
            AssetClass::Css => "css",
            AssetClass::Img => "img",
            AssetClass::Font => "font",
            AssetClass::Video => "video",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved filename pattern for every asset class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNames {
    pub app: String,
    pub chunk: String,
    pub css: String,
    pub img: String,
    pub font: String,
    pub video: String,
}

impl FileNames {
    /// Build the table by asking `name` for each class
    pub fn from_fn(mut name: impl FnMut(AssetClass) -> String) -> Self {
        Self {
            app: name(AssetClass::App),
            chunk: name(AssetClass::Chunk),
            css: name(AssetClass::Css),
            img: name(AssetClass::Img),
            font: name(AssetClass::Font),
            video: name(AssetClass::Video),
        }
    }

    pub fn get(&self, class: AssetClass) -> &str {
        match class {
            AssetClass::App => &self.app,
            AssetClass::Chunk => &self.chunk,
            AssetClass::Css => &self.css,
            AssetClass::Img => &self.img,
            AssetClass::Font => &self.font,
            AssetClass::Video => &self.video,
        }
    }
}
