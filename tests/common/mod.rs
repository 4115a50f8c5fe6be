#![allow(dead_code)]

use incendios_fetch::core::Storage;
use incendios_fetch::utils::error::{FetchError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory storage that records every write, optionally failing them.
#[derive(Default)]
pub struct RecordingStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
    writes: Mutex<Vec<String>>,
    fail_writes: bool,
}

impl RecordingStorage {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }
}

impl Storage for RecordingStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                FetchError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.writes.lock().unwrap().push(path.to_string());
        if self.fail_writes {
            return Err(FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

/// An address nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/incendios.csv";

pub const SAMPLE_CSV: &str = "\
data,municipio,focos
2020-08-01,Cabo Frio,3
2020-08-02,Arraial do Cabo,1
2020-08-03,Búzios,2
";
