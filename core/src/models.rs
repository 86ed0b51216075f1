use serde::{Deserialize, Serialize};

/// Aktivitetstype, valgt via tre-bokstavs type-kode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] =
        [ActivityKind::Running, ActivityKind::Walking, ActivityKind::Swimming];

    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Navnet som havner i rapportlinjen ("Training type: ...").
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Antall posisjonelle verdier konstruktøren forventer.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Eksakt (case-sensitiv) oppslag på type-kode.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

/// Felles felt for alle økter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    pub action_count: u64,   // skritt eller svømmetak
    pub duration_hours: f64, // timer, > 0
    pub weight_kg: f64,      // kg
}

/// Avledet resultat for én økt. Lever nøyaktig én rapportlinje.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    pub activity_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
