use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One icon shown in the sandbox. Only `id` matters to physics; the rest is
/// for the page (image source, accessible label).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAsset {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub path: String,
}

impl IconAsset {
    pub fn new(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Ordered icon list with unique, non-empty ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetManifest {
    assets: Vec<IconAsset>,
}

impl AssetManifest {
    /// Parse either a bare JSON array of assets or `{ "icons": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let assets = match bundle {
            BundleRoot::List(assets) => assets,
            BundleRoot::Bundle { icons } => icons,
        };
        Self::from_assets(assets)
    }

    pub fn from_assets(assets: Vec<IconAsset>) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(assets.len());
        for (idx, asset) in assets.iter().enumerate() {
            if asset.id.is_empty() {
                return Err(format!("icon at index {} has an empty id", idx));
            }
            if !seen.insert(asset.id.as_str()) {
                return Err(format!("duplicate icon id '{}' at index {}", asset.id, idx));
            }
        }
        Ok(Self { assets })
    }

    /// The six icons that ship with the sandbox.
    pub fn builtin() -> Self {
        let assets = BUILTIN_ICONS
            .iter()
            .map(|(id, label)| {
                IconAsset::new(*id, *label, format!("/assets/generated/icon-{}.dim_256x256.png", id))
            })
            .collect();
        Self { assets }
    }

    pub fn assets(&self) -> &[IconAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&IconAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.assets).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_ICONS: [(&str, &str); 6] = [
    ("camera", "Camera"),
    ("music", "Music"),
    ("chat", "Chat"),
    ("map", "Map"),
    ("game", "Game"),
    ("settings", "Settings"),
];

#[derive(Deserialize)]
#[serde(untagged)]
enum BundleRoot {
    List(Vec<IconAsset>),
    Bundle { icons: Vec<IconAsset> },
}
