//! Survey file readers
//!
//! The survey table ships as CSV; a Parquet copy is read the same way.
//! Both are decoded into Arrow record batches, then every consumed column
//! is cast to Float64 and spread into raw rows. Cells that fail the cast
//! become nulls and are left out of the row, so the normalizer rejects them.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::csv::reader::{Format, ReaderBuilder};
use arrow::datatypes::{DataType, Field, Float64Type, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::util::safe_open_file;
use crate::error::{Result, RiskEngineError};
use crate::survey::{RawRow, SurveyField};
use crate::utils::{log_operation_complete, log_operation_start};

/// Read a survey file into Arrow record batches, dispatching on extension
///
/// # Errors
/// `UnsupportedFormat` for extensions other than `csv` and `parquet`, or
/// any IO / decoding error from the underlying reader.
pub fn read_survey_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => read_csv_batches(path),
        Some("parquet") => read_parquet_batches(path),
        _ => Err(RiskEngineError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn read_csv_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let mut file = safe_open_file(path, "reading survey csv")?;

    // Only the header is needed; every column is read as text so a bad
    // cell anywhere in the file becomes a null on cast instead of a
    // decode error for the whole file.
    let format = Format::default().with_header(true);
    let (inferred, _) = format.infer_schema(&mut file, Some(0))?;
    file.rewind()?;
    let schema = Schema::new(
        inferred
            .fields()
            .iter()
            .map(|field| Field::new(field.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(batches)
}

fn read_parquet_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading survey parquet")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
    Ok(batches)
}

/// Spread a record batch into raw rows
///
/// # Errors
/// Returns an Arrow error if a consumed column cannot be cast to Float64.
pub fn rows_from_batch(batch: &RecordBatch) -> Result<Vec<RawRow>> {
    let schema = batch.schema();
    let mut rows = vec![RawRow::new(); batch.num_rows()];

    for (index, column) in schema.fields().iter().enumerate() {
        let Some(field) = SurveyField::from_column(column.name()) else {
            continue;
        };

        let values = cast(batch.column(index), &DataType::Float64)?;
        let values = values.as_primitive_opt::<Float64Type>().ok_or_else(|| {
            ArrowError::CastError(format!("column {} did not cast to Float64", column.name()))
        })?;

        for (row, slot) in rows.iter_mut().enumerate() {
            if values.is_valid(row) {
                slot.insert(field, values.value(row));
            }
        }
    }

    Ok(rows)
}

/// Read every raw row of a survey file
///
/// # Errors
/// See [`read_survey_batches`].
pub fn read_survey_file(path: &Path) -> Result<Vec<RawRow>> {
    log_operation_start("Reading survey data from", path);
    let start = Instant::now();

    let batches = read_survey_batches(path)?;
    let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in &batches {
        rows.extend(rows_from_batch(batch)?);
    }

    log_operation_complete("read", path, rows.len(), Some(start.elapsed()));
    Ok(rows)
}
