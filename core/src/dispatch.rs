use log::debug;

use crate::error::{Result, WorkoutError};
use crate::models::ActivityKind;
use crate::training::{ActivityCalculator, Running, SportsWalking, Swimming};

type Constructor = fn(&[f64]) -> Result<ActivityCalculator>;

fn build_running(values: &[f64]) -> Result<ActivityCalculator> {
    Running::from_values(values).map(Into::into)
}

fn build_walking(values: &[f64]) -> Result<ActivityCalculator> {
    SportsWalking::from_values(values).map(Into::into)
}

fn build_swimming(values: &[f64]) -> Result<ActivityCalculator> {
    Swimming::from_values(values).map(Into::into)
}

/// Type-kode -> konstruktør. Bom i tabellen = ukjent type.
const ACTIVITY_TABLE: &[(ActivityKind, Constructor)] = &[
    (ActivityKind::Swimming, build_swimming),
    (ActivityKind::Walking, build_walking),
    (ActivityKind::Running, build_running),
];

/// Velger variant ut fra `type_code` og bygger den fra posisjonelle verdier.
///
/// Feil:
/// - `UnknownActivityType` hvis koden ikke finnes (eksakt, case-sensitiv match)
/// - `InvalidSample` ved feil antall verdier, varighet <= 0, høyde <= 0 (gange),
///   ikke-finitte tall eller tellere som ikke er hele tall
pub fn build_calculator(type_code: &str, values: &[f64]) -> Result<ActivityCalculator> {
    let (kind, ctor) = ACTIVITY_TABLE
        .iter()
        .find(|(kind, _)| kind.code() == type_code)
        .ok_or_else(|| WorkoutError::UnknownActivityType { code: type_code.to_string() })?;

    let calc = ctor(values)?;
    debug!("built {} calculator from {} values", kind.code(), values.len());
    Ok(calc)
}
