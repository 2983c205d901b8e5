use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub trait Output: Debug {
    fn writer_for_result_key(&self, result_key: &str) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

/// An output writing each result key to `<file_stem>_<key>.csv` in a
/// directory.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_stem: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_stem: String) -> Self {
        Self {
            directory_path,
            file_stem,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_result_key(&self, result_key: &str) -> anyhow::Result<impl Write> {
        Ok(BufWriter::new(File::create(self.directory_path.join(
            format!("{}_{result_key}.csv", self.file_stem),
        ))?))
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_result_key(&self, _result_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}
