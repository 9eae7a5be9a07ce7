use std::path::PathBuf;

use crate::data::prepare::{Comparison, load_comparison};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which side of the comparison a file operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The prepared comparison (None only after a failed reload).
    pub comparison: Option<Comparison>,

    /// Current source paths, kept so either side can be swapped at runtime.
    pub left_path: PathBuf,
    pub right_path: PathBuf,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(left_path: PathBuf, right_path: PathBuf, comparison: Comparison) -> Self {
        Self {
            comparison: Some(comparison),
            left_path,
            right_path,
            status_message: None,
        }
    }

    /// Swap one side's CSV and re-run the whole pipeline.  A failure keeps
    /// the previous comparison on screen and surfaces the error message.
    pub fn replace_file(&mut self, side: Side, path: PathBuf) {
        let (left, right) = match side {
            Side::Left => (path.clone(), self.right_path.clone()),
            Side::Right => (self.left_path.clone(), path.clone()),
        };

        match load_comparison(&left, &right) {
            Ok(comparison) => {
                log::info!("reloaded comparison from {:?} and {:?}", left, right);
                self.comparison = Some(comparison);
                self.left_path = left;
                self.right_path = right;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to reload: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
