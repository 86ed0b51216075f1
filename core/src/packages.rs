// core/src/packages.rs
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::dispatch::build_calculator;
use crate::error::{Result, WorkoutError};
use crate::models::WorkoutMetrics;
use crate::report::compute_metrics;

/// Rå pakke fra sensorene: type-kode + posisjonelle verdier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self { code: code.into(), values: values.into() }
    }
}

// Tolerant inngang: tuppel ["RUN", [..]] eller objekt {"type": "RUN", "data": [..]}
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageIn {
    Tuple(String, Vec<f64>),
    Object {
        #[serde(rename = "type", alias = "code")]
        code: String,
        #[serde(alias = "values")]
        data: Vec<f64>,
    },
}

impl From<PackageIn> for Package {
    fn from(p: PackageIn) -> Self {
        match p {
            PackageIn::Tuple(code, values) => Package { code, values },
            PackageIn::Object { code, data } => Package { code, values: data },
        }
    }
}

/// Standard-settet som binæren kjører når ingen pakker er gitt.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser en JSON-liste med pakker. Feil får med JSON-stien (f.eks. `[1]`).
pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    let mut de = serde_json::Deserializer::from_str(json);
    let raw: Vec<PackageIn> =
        spte::deserialize(&mut de).map_err(|e| WorkoutError::MalformedPackages {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })?;
    // ingen søppel etter lista
    de.end().map_err(|e| WorkoutError::MalformedPackages {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    Ok(raw.into_iter().map(Package::from).collect())
}

/// Én pakke -> metrikk (bygg + beregn).
pub fn report_package(package: &Package) -> Result<WorkoutMetrics> {
    let calc = build_calculator(&package.code, &package.values)?;
    compute_metrics(&calc)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Hopp over ugyldige pakker og fortsett.
    #[default]
    SkipInvalid,
    /// Stopp ved første ugyldige pakke.
    FailFast,
}

#[derive(Debug)]
pub struct Rejected {
    pub index: usize,
    pub code: String,
    pub error: WorkoutError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Vellykkede økter, i input-rekkefølge.
    pub metrics: Vec<WorkoutMetrics>,
    pub rejected: Vec<Rejected>,
    /// `true` hvis FailFast avbrøt før alle pakker var behandlet.
    pub stopped_early: bool,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Behandler pakkene i rekkefølge. En pakke gir enten én metrikk eller én avvisning.
pub fn process_batch(packages: &[Package], policy: BatchPolicy) -> BatchReport {
    let mut out = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        match report_package(package) {
            Ok(m) => out.metrics.push(m),
            Err(error) => {
                warn!("package #{index} ({}) rejected: {error}", package.code);
                out.rejected.push(Rejected { index, code: package.code.clone(), error });
                if policy == BatchPolicy::FailFast {
                    out.stopped_early = index + 1 < packages.len();
                    break;
                }
            }
        }
    }

    info!(
        "batch done: {} ok, {} rejected, {} total",
        out.metrics.len(),
        out.rejected.len(),
        packages.len()
    );
    out
}
