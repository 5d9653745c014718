#![forbid(unsafe_code)]

use std::path::Path;

/// Presentation capability seam.
///
/// The platform viewer decides whether a local file can actually be
/// displayed; this crate only routes the answer into its success/`Unsupported`
/// classification. Consulted on every successful resolution, cache hit or
/// fresh fetch.
pub trait Renderability: Send + Sync {
    fn can_render(&self, path: &Path) -> bool;
}

/// Extension allow-list implementation, the shipped default.
///
/// Matches the formats a typical 3D preview surface accepts. Platforms with a
/// real capability query should inject their own [`Renderability`] instead.
#[derive(Clone, Debug)]
pub struct ExtensionRenderability {
    extensions: Vec<String>,
}

impl Default for ExtensionRenderability {
    fn default() -> Self {
        Self::with_extensions(["usdz", "usd", "usdc", "usda", "reality", "glb", "gltf"])
    }
}

impl ExtensionRenderability {
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl Renderability for ExtensionRenderability {
    fn can_render(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            })
    }
}
