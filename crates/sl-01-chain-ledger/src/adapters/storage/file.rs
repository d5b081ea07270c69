use super::check_extends;
use crate::domain::Block;
use crate::error::StoreError;
use crate::ports::outbound::ChainStore;
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File name used by [`FileChainStore::open_in_dir`].
pub const BLOCKS_FILE: &str = "blocks.jsonl";

/// File-backed chain store.
///
/// One JSON object per line, appended and fsynced per block. The whole chain
/// is cached in memory and reloaded in order on open. A torn trailing line
/// (a crash mid-append) is dropped with a warning and truncated away.
pub struct FileChainStore {
    path: PathBuf,
    state: RwLock<FileState>,
}

struct FileState {
    blocks: Vec<Block>,
    file: File,
    /// Byte length of the durable, well-formed prefix of the file
    committed_len: u64,
}

impl FileChainStore {
    /// Open or create the store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let (blocks, committed_len) = Self::decode(&bytes, &path)?;
        if committed_len < bytes.len() as u64 {
            file.set_len(committed_len)?;
            file.sync_all()?;
        }

        if blocks.is_empty() {
            tracing::info!("[sl-01] No existing chain at {}", path.display());
        } else {
            tracing::info!(
                "[sl-01] Loaded {} blocks from {}",
                blocks.len(),
                path.display()
            );
        }

        Ok(Self {
            path,
            state: RwLock::new(FileState {
                blocks,
                file,
                committed_len,
            }),
        })
    }

    /// Open or create `blocks.jsonl` inside `dir`.
    pub fn open_in_dir<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        Self::open(dir.as_ref().join(BLOCKS_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse JSON lines, returning the blocks and the length of the valid prefix.
    fn decode(bytes: &[u8], path: &Path) -> Result<(Vec<Block>, u64), StoreError> {
        let mut blocks = Vec::new();
        let mut offset = 0usize;

        while offset < bytes.len() {
            let rest = &bytes[offset..];
            let (line, consumed, terminated) = match rest.iter().position(|&b| b == b'\n') {
                Some(pos) => (&rest[..pos], pos + 1, true),
                None => (rest, rest.len(), false),
            };

            if line.iter().all(u8::is_ascii_whitespace) {
                if !terminated {
                    break;
                }
                offset += consumed;
                continue;
            }

            let is_last = offset + consumed >= bytes.len();
            match serde_json::from_slice::<Block>(line) {
                Ok(block) if terminated => blocks.push(block),
                Err(e) if !is_last => return Err(StoreError::Serialization(e)),
                _ => {
                    tracing::warn!(
                        "[sl-01] Ignoring torn trailing line ({} bytes) in {}",
                        line.len(),
                        path.display()
                    );
                    break;
                }
            }
            offset += consumed;
        }

        // `offset` stops at the start of a torn line, or at end of file.
        Ok((blocks, offset as u64))
    }
}

impl ChainStore for FileChainStore {
    fn len(&self) -> Result<u64, StoreError> {
        Ok(self.state.read().blocks.len() as u64)
    }

    fn latest(&self) -> Result<Option<Block>, StoreError> {
        Ok(self.state.read().blocks.last().cloned())
    }

    fn get(&self, index: u64) -> Result<Option<Block>, StoreError> {
        Ok(self.state.read().blocks.get(index as usize).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<Block>, StoreError> {
        Ok(self
            .state
            .read()
            .blocks
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    fn all_ascending(&self) -> Result<Vec<Block>, StoreError> {
        Ok(self.state.read().blocks.clone())
    }

    fn append(&self, block: &Block) -> Result<(), StoreError> {
        let mut guard = self.state.write();
        let state = &mut *guard;
        check_extends(state.blocks.last(), block)?;

        let mut line = serde_json::to_vec(block)?;
        line.push(b'\n');

        let written = state
            .file
            .write_all(&line)
            .and_then(|()| state.file.sync_data());

        if let Err(e) = written {
            // Drop whatever part of the line reached the file
            if let Err(rollback) = state.file.set_len(state.committed_len) {
                tracing::error!(
                    "[sl-01] Failed to roll back partial write in {}: {}",
                    self.path.display(),
                    rollback
                );
            }
            return Err(StoreError::Io(e));
        }

        state.committed_len += line.len() as u64;
        state.blocks.push(block.clone());
        Ok(())
    }
}
