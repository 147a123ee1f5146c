use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the asset directory.
pub const ASSET_DIR_ENV: &str = "DICE_ASSET_DIR";

/// Optional file inside the asset directory that replaces the built-in catalog.
pub const MANIFEST_FILE: &str = "manifest.json";

const DEFAULT_ASSET_DIR: &str = "gifs";
const DEFAULT_SPEED_MS: u64 = 75;

// ---------------------------------------------------------------------------
// Asset catalog
// ---------------------------------------------------------------------------

/// One animation file and its playback speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub file: String,
    /// Milliseconds per frame; falls back to the catalog default.
    #[serde(default)]
    pub speed_ms: Option<u64>,
}

impl AnimationSpec {
    fn new(file: &str, speed_ms: Option<u64>) -> Self {
        Self {
            file: file.to_string(),
            speed_ms,
        }
    }
}

/// Which files play on a natural 20, a natural 1, and between animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCatalog {
    #[serde(default = "default_speed_ms")]
    pub default_speed_ms: u64,
    pub celebrations: Vec<AnimationSpec>,
    pub commiserations: Vec<AnimationSpec>,
    #[serde(default)]
    pub still: Option<String>,
}

fn default_speed_ms() -> u64 {
    DEFAULT_SPEED_MS
}

impl AssetCatalog {
    pub fn speed_of(&self, spec: &AnimationSpec) -> Duration {
        Duration::from_millis(spec.speed_ms.unwrap_or(self.default_speed_ms))
    }

    /// Every file the catalog refers to.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.celebrations
            .iter()
            .chain(&self.commiserations)
            .map(|spec| spec.file.as_str())
            .chain(self.still.as_deref())
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            default_speed_ms: DEFAULT_SPEED_MS,
            celebrations: vec![
                AnimationSpec::new("vin_diesel_critical.gif", None),
                AnimationSpec::new("tony_stark_explosion.gif", None),
                AnimationSpec::new("interesting_man_clap.gif", None),
                AnimationSpec::new("drake_dancing.gif", Some(100)),
                AnimationSpec::new("shaq_shimmy.gif", Some(25)),
            ],
            commiserations: vec![
                AnimationSpec::new("kevin_heart_blink.gif", Some(100)),
                AnimationSpec::new("simon_cowell_facepalm.gif", None),
                AnimationSpec::new("batman_facepalm.gif", None),
                AnimationSpec::new("oh_no_panda.gif", None),
            ],
            still: Some("d20.png".to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub asset_dir: PathBuf,
    pub catalog: AssetCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Dungeons & Dragons Dice Simulator with Gifs".to_string(),
            window_size: [900.0, 600.0],
            min_window_size: [480.0, 320.0],
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            catalog: AssetCatalog::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the asset directory taken from the environment and the
    /// catalog from the directory's manifest when one exists.
    pub fn load() -> Result<Self> {
        let asset_dir = std::env::var_os(ASSET_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
        Self::for_asset_dir(asset_dir)
    }

    pub fn for_asset_dir(asset_dir: PathBuf) -> Result<Self> {
        let manifest = asset_dir.join(MANIFEST_FILE);
        let catalog = if manifest.is_file() {
            let catalog = read_manifest(&manifest)?;
            log::info!("Using asset manifest {}", manifest.display());
            catalog
        } else {
            AssetCatalog::default()
        };

        Ok(Self {
            asset_dir,
            catalog,
            ..Self::default()
        })
    }
}

fn read_manifest(path: &Path) -> Result<AssetCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
