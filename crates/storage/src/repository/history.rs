use std::fs;

use crate::HistoryStore;
use crate::error::{Result, StorageError};
use crate::models::MeasurementRecord;

pub struct HistoryRepository<'a> {
    store: &'a HistoryStore,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(store: &'a HistoryStore) -> Self {
        Self { store }
    }

    /// Load every persisted record, in insertion order.
    ///
    /// A missing file is an empty history, not an error. Unparseable rows
    /// abort the load with `StorageError::Corrupt`; callers treat that like
    /// any other storage failure.
    pub fn load(&self) -> Result<Vec<MeasurementRecord>> {
        let path = self.store.path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for (idx, row) in reader.deserialize().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(StorageError::Csv(e));
                }
                Err(e) => {
                    return Err(StorageError::Corrupt {
                        row: idx + 1,
                        source: e,
                    });
                }
            }
        }

        Ok(records)
    }

    /// Append one record and return the updated full history.
    ///
    /// Load-modify-write of the whole file: the history is small and a
    /// single-user tool does not need an incremental log. The rewrite goes
    /// through a sibling temp file and a rename, so a failed write surfaces
    /// as an error while the previous file stays intact. Appends within this
    /// process serialize through the store's lock.
    pub fn append(&self, record: MeasurementRecord) -> Result<Vec<MeasurementRecord>> {
        let _guard = self.store.append_guard();

        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)?;

        Ok(records)
    }

    fn write_all(&self, records: &[MeasurementRecord]) -> Result<()> {
        let path = self.store.path();
        let tmp = path.with_extension("tmp");

        let mut writer = csv::Writer::from_path(&tmp)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp, path)?;
        Ok(())
    }
}
