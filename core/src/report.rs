use std::fmt;

use log::debug;

use crate::error::{Result, SampleDefect, WorkoutError};
use crate::models::WorkoutMetrics;
use crate::training::ActivityCalculator;

/// Beregner distanse, snittfart og kcal for en ferdig bygget økt.
///
/// Alle fire tallene sjekkes for NaN/inf; feiler med `InvalidSample` i stedet
/// for å slippe `inf` ut i rapporten.
pub fn compute_metrics(calculator: &ActivityCalculator) -> Result<WorkoutMetrics> {
    let kind = calculator.kind();
    let duration_hours = calculator.workout().duration_hours;
    let distance_km = calculator.distance_km();
    let mean_speed_kmh = calculator.mean_speed_kmh();
    let calories_kcal = calculator.calories_kcal();

    for (field, v) in [
        ("duration_hours", duration_hours),
        ("distance_km", distance_km),
        ("mean_speed_kmh", mean_speed_kmh),
        ("calories_kcal", calories_kcal),
    ] {
        if !v.is_finite() {
            return Err(WorkoutError::invalid(kind.code(), SampleDefect::NonFinite { field }));
        }
    }

    debug!(
        "{}: distance={distance_km} km speed={mean_speed_kmh} km/h kcal={calories_kcal}",
        kind.code()
    );

    Ok(WorkoutMetrics {
        activity_label: kind.label().to_string(),
        duration_hours,
        distance_km,
        mean_speed_kmh,
        calories_kcal,
    })
}

/// Rapportlinje med tre desimaler (fast komma) på alle tall.
///
/// Avrunding skjer på den eksakte binære verdien (Rusts `{:.3}`), så 1.0005
/// blir "1.000" og 2.0005 blir "2.001".
pub fn format_report(metrics: &WorkoutMetrics) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
        metrics.activity_label,
        metrics.duration_hours,
        metrics.distance_km,
        metrics.mean_speed_kmh,
        metrics.calories_kcal,
    )
}

impl fmt::Display for WorkoutMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_report(self))
    }
}
