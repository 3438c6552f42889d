//! RON storage for the movement tuning.

pub mod tuning_io;

pub use tuning_io::{
    load_or_default, load_tuning, save_tuning, tuning_path, TuningIoError, CONFIG_DIR,
    TUNING_FILE,
};
