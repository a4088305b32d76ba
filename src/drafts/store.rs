use std::path::{Path, PathBuf};

pub const DRAFT_SLOT: &str = "storyFrameData";

/// Location of the single draft slot on disk.
#[derive(Debug, Clone)]
pub struct DraftStore {
    pub dir: PathBuf,
}

impl DraftStore {
    pub fn new(dir: impl AsRef<Path>) -> DraftStore {
        DraftStore {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn slot_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", DRAFT_SLOT))
    }
}
