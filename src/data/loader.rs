use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::{DataLoadError, Result};
use super::model::{Dataset, Record};

/// Columns every source file must provide, in source naming.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_YEAR,
    COL_SENIORITY,
    COL_CONTRACT,
    COL_COMPANY,
    COL_JOB_TITLE,
    COL_SALARY_USD,
    COL_WORK_MODE,
    COL_COUNTRY_ISO3,
];

const COL_YEAR: &str = "ano";
const COL_SENIORITY: &str = "senioridade";
const COL_CONTRACT: &str = "contrato";
const COL_COMPANY: &str = "empresa";
const COL_JOB_TITLE: &str = "cargo";
const COL_SALARY_USD: &str = "usd";
const COL_WORK_MODE: &str = "remoto";
const COL_COUNTRY_ISO3: &str = "residencia_iso3";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the columns in [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "ano": 2024, "senioridade": "senior", ... }, ...]`
/// * `.parquet` – flat columns with the same names
///
/// Extra columns are ignored. The file handle lives only for the duration of
/// this call.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        _ => {
            return Err(DataLoadError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: ext,
            })
        }
    };

    log::info!("Loaded {} salary records from {}", records.len(), path.display());
    Ok(Dataset::from_records(records))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataLoadError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let csv_error = |source| DataLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers = reader.headers().map_err(csv_error)?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(DataLoadError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    reader
        .deserialize::<Record>()
        .map(|row| row.map_err(csv_error))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<Record>> {
    let reader = BufReader::new(open(path)?);
    serde_json::from_reader(reader).map_err(|source| DataLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by Pandas (`df.to_parquet()`), Polars
/// (`df.write_parquet()`) and the `generate-sample` binary.
fn load_parquet(path: &Path) -> Result<Vec<Record>> {
    let parquet_error = |source| DataLoadError::Parquet {
        path: path.to_path_buf(),
        source,
    };

    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?).map_err(parquet_error)?;
    let reader = builder.build().map_err(parquet_error)?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.map_err(|source| DataLoadError::Arrow {
            path: path.to_path_buf(),
            source,
        })?;
        let cols = BatchColumns {
            batch: &batch,
            path,
            row_offset: records.len(),
        };

        let years = cols.integers(COL_YEAR)?;
        let seniority = cols.strings(COL_SENIORITY)?;
        let contract = cols.strings(COL_CONTRACT)?;
        let company = cols.strings(COL_COMPANY)?;
        let job_title = cols.strings(COL_JOB_TITLE)?;
        let salary = cols.floats(COL_SALARY_USD)?;
        let work_mode = cols.strings(COL_WORK_MODE)?;
        let country = cols.strings(COL_COUNTRY_ISO3)?;

        let rows = years
            .into_iter()
            .zip(seniority)
            .zip(contract)
            .zip(company)
            .zip(job_title)
            .zip(salary)
            .zip(work_mode)
            .zip(country);

        for (
            ((((((year, seniority), contract), company), job_title), salary_usd), work_mode),
            country_iso3,
        ) in rows
        {
            records.push(Record {
                year,
                seniority,
                contract,
                company,
                job_title,
                salary_usd,
                work_mode,
                country_iso3,
            });
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

/// Typed, null-checked column access for one record batch.
struct BatchColumns<'a> {
    batch: &'a RecordBatch,
    path: &'a Path,
    /// Rows already read from earlier batches, for error positions.
    row_offset: usize,
}

impl BatchColumns<'_> {
    fn column(&self, name: &str) -> Result<&ArrayRef> {
        let idx = self
            .batch
            .schema()
            .index_of(name)
            .map_err(|_| DataLoadError::MissingColumn {
                column: name.to_string(),
                path: self.path.to_path_buf(),
            })?;
        let col = self.batch.column(idx);

        if col.null_count() > 0 {
            let row = (0..col.len()).find(|&i| col.is_null(i)).unwrap_or(0);
            return Err(DataLoadError::NullValue {
                column: name.to_string(),
                row: self.row_offset + row,
                path: self.path.to_path_buf(),
            });
        }
        Ok(col)
    }

    fn type_error(&self, name: &str, expected: &'static str, found: String) -> DataLoadError {
        DataLoadError::ColumnType {
            column: name.to_string(),
            path: self.path.to_path_buf(),
            expected,
            found,
        }
    }

    fn integers(&self, name: &str) -> Result<Vec<i32>> {
        let col = self.column(name)?;
        match col.data_type() {
            DataType::Int16 => Ok(col
                .as_primitive::<Int16Type>()
                .values()
                .iter()
                .map(|&v| i32::from(v))
                .collect()),
            DataType::Int32 => Ok(col.as_primitive::<Int32Type>().values().to_vec()),
            DataType::Int64 => col
                .as_primitive::<Int64Type>()
                .values()
                .iter()
                .map(|&v| {
                    i32::try_from(v)
                        .map_err(|_| self.type_error(name, "32-bit integer", format!("Int64 value {v}")))
                })
                .collect(),
            other => Err(self.type_error(name, "integer", format!("{other:?}"))),
        }
    }

    fn floats(&self, name: &str) -> Result<Vec<f64>> {
        let col = self.column(name)?;
        match col.data_type() {
            DataType::Float64 => Ok(col.as_primitive::<Float64Type>().values().to_vec()),
            DataType::Float32 => Ok(col
                .as_primitive::<Float32Type>()
                .values()
                .iter()
                .map(|&v| f64::from(v))
                .collect()),
            DataType::Int64 => Ok(col
                .as_primitive::<Int64Type>()
                .values()
                .iter()
                .map(|&v| v as f64)
                .collect()),
            DataType::Int32 => Ok(col
                .as_primitive::<Int32Type>()
                .values()
                .iter()
                .map(|&v| f64::from(v))
                .collect()),
            other => Err(self.type_error(name, "number", format!("{other:?}"))),
        }
    }

    fn strings(&self, name: &str) -> Result<Vec<String>> {
        let col = self.column(name)?;
        let owned = |v: Option<&str>| v.unwrap_or_default().to_string();
        match col.data_type() {
            DataType::Utf8 => Ok(col.as_string::<i32>().iter().map(owned).collect()),
            DataType::LargeUtf8 => Ok(col.as_string::<i64>().iter().map(owned).collect()),
            DataType::Utf8View => Ok(col.as_string_view().iter().map(owned).collect()),
            other => Err(self.type_error(name, "string", format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;
    use crate::data::model::fixtures::sample_records;

    const SAMPLE_CSV: &str = "\
ano,senioridade,contrato,empresa,cargo,salario,usd,remoto,residencia_iso3
2023,Junior,Integral,Empresa A,Data Analyst,250000,50000,remoto,BRA
2024,Senior,Integral,Empresa B,Data Scientist,100000,100000,hibrido,USA
2025,Senior,PJ,Empresa A,Data Scientist,120000,120000,remoto,USA
2025,Lead,Integral,Empresa C,Data Engineer,150000,150000,presencial,GBR
";

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_ignoring_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "salaries.csv", SAMPLE_CSV);

        let dataset = load_file(&path).unwrap();
        assert_eq!(dataset.records(), sample_records().as_slice());
    }

    #[test]
    fn csv_missing_column_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "salaries.csv",
            "ano,senioridade,contrato,empresa,cargo,remoto,residencia_iso3\n\
             2023,Junior,Integral,Empresa A,Data Analyst,remoto,BRA\n",
        );

        let err = load_file(&path).unwrap_err();
        assert!(
            matches!(err, DataLoadError::MissingColumn { ref column, .. } if column == "usd"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn csv_bad_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let csv = SAMPLE_CSV.replace("2024,Senior", "last year,Senior");
        let path = write_file(&dir, "salaries.csv", &csv);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv { .. }), "unexpected error: {err}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound { .. }));
    }

    #[test]
    fn unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "salaries.xlsx", "");
        let err = load_file(&path).unwrap_err();
        assert!(
            matches!(err, DataLoadError::UnsupportedExtension { ref extension, .. } if extension == "xlsx")
        );
    }

    #[test]
    fn loads_records_oriented_json() {
        let dir = TempDir::new().unwrap();
        let json = serde_json::to_string(&sample_records()).unwrap();
        let path = write_file(&dir, "salaries.json", &json);

        let dataset = load_file(&path).unwrap();
        assert_eq!(dataset.records(), sample_records().as_slice());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "salaries.json", r#"[{"ano": 2024}]"#);
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Json { .. }));
    }

    fn string_column(records: &[Record], field: impl Fn(&Record) -> &String) -> ArrayRef {
        Arc::new(StringArray::from_iter_values(records.iter().map(field)))
    }

    fn write_parquet(dir: &TempDir, usd: Float64Array) -> std::path::PathBuf {
        let records = sample_records();

        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_YEAR, DataType::Int64, false),
            Field::new(COL_SENIORITY, DataType::Utf8, false),
            Field::new(COL_CONTRACT, DataType::Utf8, false),
            Field::new(COL_COMPANY, DataType::Utf8, false),
            Field::new(COL_JOB_TITLE, DataType::Utf8, false),
            Field::new(COL_SALARY_USD, DataType::Float64, true),
            Field::new(COL_WORK_MODE, DataType::Utf8, false),
            Field::new(COL_COUNTRY_ISO3, DataType::Utf8, false),
        ]));

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(
                    records.iter().map(|r| i64::from(r.year)).collect::<Vec<_>>(),
                )),
                string_column(&records, |r| &r.seniority),
                string_column(&records, |r| &r.contract),
                string_column(&records, |r| &r.company),
                string_column(&records, |r| &r.job_title),
                Arc::new(usd),
                string_column(&records, |r| &r.work_mode),
                string_column(&records, |r| &r.country_iso3),
            ],
        )
        .unwrap();

        let path = dir.path().join("salaries.parquet");
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        path
    }

    #[test]
    fn loads_parquet() {
        let dir = TempDir::new().unwrap();
        let usd = Float64Array::from(
            sample_records().iter().map(|r| r.salary_usd).collect::<Vec<_>>(),
        );
        let path = write_parquet(&dir, usd);

        let dataset = load_file(&path).unwrap();
        assert_eq!(dataset.records(), sample_records().as_slice());
    }

    #[test]
    fn parquet_null_is_rejected() {
        let dir = TempDir::new().unwrap();
        let usd = Float64Array::from(vec![Some(50_000.0), None, Some(1.0), Some(2.0)]);
        let path = write_parquet(&dir, usd);

        let err = load_file(&path).unwrap_err();
        assert!(
            matches!(err, DataLoadError::NullValue { ref column, row: 1, .. } if column == "usd"),
            "unexpected error: {err}"
        );
    }
}
