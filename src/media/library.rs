use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use super::asset::{AnimationAsset, StillAsset};
use crate::config::{AnimationSpec, AssetCatalog};
use crate::dice::controller::Reaction;
use crate::error::MediaError;

/// Every asset the application plays, decoded once at start-up.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    pub celebrations: Vec<AnimationAsset>,
    pub commiserations: Vec<AnimationAsset>,
    pub still: Option<Arc<StillAsset>>,
}

impl AssetLibrary {
    /// Decode everything in `catalog` from `dir`. Any missing or corrupt
    /// animation is an error naming that file. A missing still only leaves the
    /// canvas blank between animations.
    pub fn load(dir: &Path, catalog: &AssetCatalog) -> Result<Self> {
        let load_set = |specs: &[AnimationSpec]| -> Result<Vec<AnimationAsset>> {
            specs
                .iter()
                .map(|spec| -> Result<AnimationAsset> {
                    let path = dir.join(&spec.file);
                    let asset = AnimationAsset::open_gif(&path, catalog.speed_of(spec))
                        .with_context(|| format!("loading animation {}", path.display()))?;
                    log::info!(
                        "Loaded {} ({} frames, {:?}/frame, aspect {:.2})",
                        path.display(),
                        asset.len(),
                        asset.speed(),
                        asset.aspect_ratio()
                    );
                    Ok(asset)
                })
                .collect()
        };

        let celebrations = load_set(&catalog.celebrations)?;
        let commiserations = load_set(&catalog.commiserations)?;

        let still = match &catalog.still {
            Some(file) => {
                let path = dir.join(file);
                match StillAsset::open(&path) {
                    Ok(still) => {
                        log::info!(
                            "Loaded {} (aspect {:.2})",
                            path.display(),
                            still.aspect_ratio()
                        );
                        Some(Arc::new(still))
                    }
                    Err(MediaError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                        log::warn!("No still image at {}, canvas stays blank", path.display());
                        None
                    }
                    Err(e) => {
                        return Err(e)
                            .with_context(|| format!("loading still image {}", path.display()))
                    }
                }
            }
            None => None,
        };

        Ok(Self {
            celebrations,
            commiserations,
            still,
        })
    }

    pub fn animation(&self, reaction: Reaction) -> Option<&AnimationAsset> {
        match reaction {
            Reaction::Celebrate(i) => self.celebrations.get(i),
            Reaction::Commiserate(i) => self.commiserations.get(i),
        }
    }
}
