use std::fs;
use std::path::{Path, PathBuf};

use bevy::log::{info, warn};
use tr_core::MotionTuning;

/// Default directory for configuration files.
pub const CONFIG_DIR: &str = "assets/config";

/// File name of the tuning config inside [`CONFIG_DIR`].
pub const TUNING_FILE: &str = "tuning.ron";

/// Failure reading or writing the tuning file.
#[derive(Debug)]
pub enum TuningIoError {
    /// The file or its directory could not be read or written.
    Io(std::io::Error),
    /// The tuning could not be encoded.
    Ron(ron::Error),
    /// The file is not valid tuning RON; carries the failing position.
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for TuningIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for TuningIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for TuningIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for TuningIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "tuning file access failed: {}", e),
            Self::Ron(e) => write!(f, "could not encode tuning: {}", e),
            Self::RonSpanned(e) => write!(f, "invalid tuning file at {}", e),
        }
    }
}

impl std::error::Error for TuningIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Ron(e) => Some(e),
            Self::RonSpanned(e) => Some(e),
        }
    }
}

/// Write `tuning` as pretty RON, creating missing parent directories.
pub fn save_tuning(path: &Path, tuning: &MotionTuning) -> Result<(), TuningIoError> {
    let ron_string = ron::ser::to_string_pretty(tuning, ron::ser::PrettyConfig::new().depth_limit(2))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, ron_string)?;
    info!("Saved tuning to {}", path.display());
    Ok(())
}

/// Load tuning from a RON file. Missing fields take their defaults.
pub fn load_tuning(path: &Path) -> Result<MotionTuning, TuningIoError> {
    let contents = fs::read_to_string(path)?;
    let tuning: MotionTuning = ron::from_str(&contents)?;
    Ok(tuning)
}

/// Load tuning, falling back to defaults when the file is missing or broken.
pub fn load_or_default(path: &Path) -> MotionTuning {
    if !path.exists() {
        info!("No tuning file at {}, using defaults", path.display());
        return MotionTuning::default();
    }

    match load_tuning(path) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            warn!("Failed to load {}: {}; using defaults", path.display(), e);
            MotionTuning::default()
        }
    }
}

/// Full path of the default tuning file.
pub fn tuning_path() -> PathBuf {
    Path::new(CONFIG_DIR).join(TUNING_FILE)
}
