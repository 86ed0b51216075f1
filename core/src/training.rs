// core/src/training.rs
use crate::error::{Result, SampleDefect, WorkoutError};
use crate::models::{ActivityKind, Workout};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;

/// Formelsett for én aktivitetstype.
///
/// Standard: distanse = antall * skrittlengde, snittfart = distanse / varighet.
/// Varianter overstyrer det de trenger; kcal må alltid leveres.
pub trait Training {
    /// Skrittlengde (m) per skritt/tak.
    const STEP_LENGTH_M: f64 = 0.65;

    fn workout(&self) -> &Workout;

    fn kind(&self) -> ActivityKind;

    /// Distanse i km.
    fn distance_km(&self) -> f64 {
        self.workout().action_count as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// Snittfart i km/t.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.workout().duration_hours
    }

    /// Forbrukte kilokalorier.
    fn calories_kcal(&self) -> f64;
}

// ----- validering av rå verdier -----

fn finite(code: &'static str, field: &'static str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WorkoutError::invalid(code, SampleDefect::NonFinite { field }))
    }
}

fn count(code: &'static str, field: &'static str, v: f64) -> Result<u64> {
    let v = finite(code, field, v)?;
    if v < 0.0 || v.fract() != 0.0 || v >= u64::MAX as f64 {
        return Err(WorkoutError::invalid(code, SampleDefect::NotACount { field, value: v }));
    }
    Ok(v as u64)
}

fn non_negative(code: &'static str, field: &'static str, v: f64) -> Result<f64> {
    let v = finite(code, field, v)?;
    if v < 0.0 {
        return Err(WorkoutError::invalid(code, SampleDefect::Negative { field, value: v }));
    }
    Ok(v)
}

fn check_arity(kind: ActivityKind, values: &[f64]) -> Result<()> {
    if values.len() != kind.arity() {
        return Err(WorkoutError::invalid(
            kind.code(),
            SampleDefect::WrongArity { expected: kind.arity(), got: values.len() },
        ));
    }
    Ok(())
}

impl Workout {
    /// Leser de tre felles feltene `[action, duration, weight]`.
    fn from_head(code: &'static str, values: &[f64]) -> Result<Self> {
        let action_count = count(code, "action_count", values[0])?;
        let duration_hours = finite(code, "duration_hours", values[1])?;
        if duration_hours <= 0.0 {
            return Err(WorkoutError::invalid(code, SampleDefect::NonPositiveDuration(duration_hours)));
        }
        let weight_kg = non_negative(code, "weight_kg", values[2])?;
        Ok(Workout { action_count, duration_hours, weight_kg })
    }
}

// ----- løping -----

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub workout: Workout,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    /// `[action_count, duration_hours, weight_kg]`
    pub fn from_values(values: &[f64]) -> Result<Self> {
        check_arity(ActivityKind::Running, values)?;
        let workout = Workout::from_head(ActivityKind::Running.code(), values)?;
        Ok(Running { workout })
    }
}

impl Training for Running {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn calories_kcal(&self) -> f64 {
        let w = &self.workout;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * w.weight_kg
            / M_IN_KM
            * w.duration_hours
            * MIN_IN_H
    }
}

// ----- sportsgange -----

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub workout: Workout,
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;

    /// `[action_count, duration_hours, weight_kg, height_cm]`
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let code = ActivityKind::Walking.code();
        check_arity(ActivityKind::Walking, values)?;
        let workout = Workout::from_head(code, values)?;
        let height_cm = finite(code, "height_cm", values[3])?;
        if height_cm <= 0.0 {
            return Err(WorkoutError::invalid(code, SampleDefect::NonPositiveHeight(height_cm)));
        }
        Ok(SportsWalking { workout, height_cm })
    }
}

impl Training for SportsWalking {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    // km/t-varianten; floor-divisjon i m/s er ikke med.
    fn calories_kcal(&self) -> f64 {
        let w = &self.workout;
        (Self::CALORIES_WEIGHT_MULTIPLIER * w.weight_kg
            + (self.mean_speed_kmh() * Self::KMH_IN_MSEC).powi(2) / (self.height_cm / CM_IN_M)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * w.weight_kg)
            * w.duration_hours
            * MIN_IN_H
    }
}

// ----- svømming -----

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub workout: Workout,
    pub pool_length_m: f64,
    pub pool_lengths_count: u64,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// `[action_count, duration_hours, weight_kg, pool_length_m, pool_lengths_count]`
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let code = ActivityKind::Swimming.code();
        check_arity(ActivityKind::Swimming, values)?;
        let workout = Workout::from_head(code, values)?;
        let pool_length_m = non_negative(code, "pool_length_m", values[3])?;
        let pool_lengths_count = count(code, "pool_lengths_count", values[4])?;
        Ok(Swimming { workout, pool_length_m, pool_lengths_count })
    }
}

impl Training for Swimming {
    const STEP_LENGTH_M: f64 = 1.38;

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    // Fart fra bassenggeometri, ikke fra antall tak.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lengths_count as f64 / M_IN_KM / self.workout.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        let w = &self.workout;
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * w.weight_kg
            * w.duration_hours
    }
}

/// Én ferdig konstruert økt, klar for beregning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityCalculator {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_variant {
    ($self:ident, $t:ident => $body:expr) => {
        match $self {
            ActivityCalculator::Running($t) => $body,
            ActivityCalculator::Walking($t) => $body,
            ActivityCalculator::Swimming($t) => $body,
        }
    };
}

impl ActivityCalculator {
    pub fn kind(&self) -> ActivityKind {
        each_variant!(self, t => t.kind())
    }

    pub fn workout(&self) -> &Workout {
        each_variant!(self, t => t.workout())
    }

    pub fn distance_km(&self) -> f64 {
        each_variant!(self, t => t.distance_km())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        each_variant!(self, t => t.mean_speed_kmh())
    }

    pub fn calories_kcal(&self) -> f64 {
        each_variant!(self, t => t.calories_kcal())
    }
}

impl From<Running> for ActivityCalculator {
    fn from(t: Running) -> Self {
        ActivityCalculator::Running(t)
    }
}

impl From<SportsWalking> for ActivityCalculator {
    fn from(t: SportsWalking) -> Self {
        ActivityCalculator::Walking(t)
    }
}

impl From<Swimming> for ActivityCalculator {
    fn from(t: Swimming) -> Self {
        ActivityCalculator::Swimming(t)
    }
}
