use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use salary_dashboard::data::Record;

const YEARS: [i32; 6] = [2020, 2021, 2022, 2023, 2024, 2025];
const SENIORITY: [(&str, f64); 4] = [
    ("junior", 0.55),
    ("pleno", 0.8),
    ("senior", 1.0),
    ("executivo", 1.4),
];
const CONTRACTS: [&str; 4] = ["integral", "parcial", "contrato", "freelancer"];
const COMPANIES: [&str; 3] = ["pequena", "media", "grande"];
const WORK_MODES: [&str; 3] = ["remoto", "hibrido", "presencial"];
const TITLES: [(&str, f64); 8] = [
    ("Data Scientist", 140_000.0),
    ("Data Engineer", 145_000.0),
    ("Data Analyst", 105_000.0),
    ("Machine Learning Engineer", 160_000.0),
    ("Research Scientist", 175_000.0),
    ("Analytics Engineer", 150_000.0),
    ("Data Architect", 165_000.0),
    ("BI Developer", 95_000.0),
];
const COUNTRIES: [(&str, f64); 8] = [
    ("USA", 1.0),
    ("CAN", 0.85),
    ("GBR", 0.8),
    ("DEU", 0.78),
    ("ESP", 0.55),
    ("BRA", 0.4),
    ("IND", 0.3),
    ("AUS", 0.82),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn generate(rng: &mut SimpleRng, n: usize) -> Vec<Record> {
    (0..n)
        .map(|_| {
            let year = *rng.pick(&YEARS);
            let &(seniority, seniority_factor) = rng.pick(&SENIORITY);
            let &(title, base) = rng.pick(&TITLES);
            let &(country, country_factor) = rng.pick(&COUNTRIES);
            // Salaries drift up a little every year.
            let year_factor = 1.0 + 0.04 * f64::from(year - YEARS[0]);
            let mean = base * seniority_factor * country_factor * year_factor;
            let salary = rng.gauss(mean, mean * 0.15).max(5_000.0).round();

            Record {
                year,
                seniority: seniority.to_string(),
                contract: rng.pick(&CONTRACTS).to_string(),
                company: rng.pick(&COMPANIES).to_string(),
                job_title: title.to_string(),
                salary_usd: salary,
                work_mode: rng.pick(&WORK_MODES).to_string(),
                country_iso3: country.to_string(),
            }
        })
        .collect()
}

fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for record in records {
        writer.serialize(record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn string_column(records: &[Record], field: impl Fn(&Record) -> &String) -> ArrayRef {
    Arc::new(StringArray::from_iter_values(records.iter().map(field)))
}

fn write_parquet(path: &Path, records: &[Record]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ano", DataType::Int64, false),
        Field::new("senioridade", DataType::Utf8, false),
        Field::new("contrato", DataType::Utf8, false),
        Field::new("empresa", DataType::Utf8, false),
        Field::new("cargo", DataType::Utf8, false),
        Field::new("usd", DataType::Float64, false),
        Field::new("remoto", DataType::Utf8, false),
        Field::new("residencia_iso3", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(
                records.iter().map(|r| i64::from(r.year)).collect::<Vec<_>>(),
            )),
            string_column(records, |r| &r.seniority),
            string_column(records, |r| &r.contract),
            string_column(records, |r| &r.company),
            string_column(records, |r| &r.job_title),
            Arc::new(Float64Array::from(
                records.iter().map(|r| r.salary_usd).collect::<Vec<_>>(),
            )),
            string_column(records, |r| &r.work_mode),
            string_column(records, |r| &r.country_iso3),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let records = generate(&mut rng, 2_000);

    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir).context("creating data directory")?;

    let csv_path = out_dir.join("dados-final.csv");
    let parquet_path = out_dir.join("dados-final.parquet");
    write_csv(&csv_path, &records)?;
    write_parquet(&parquet_path, &records)?;

    println!(
        "Wrote {} salary records to {} and {}",
        records.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
