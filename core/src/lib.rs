//! Treningsstatistikk for løping (RUN), sportsgange (WLK) og svømming (SWM).
//!
//! Flyt: type-kode + rå verdier -> [`build_calculator`] -> [`compute_metrics`]
//! -> [`format_report`].

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod packages;
pub mod report;
pub mod training;

pub use dispatch::build_calculator;
pub use error::{Result, SampleDefect, WorkoutError};
pub use models::{ActivityKind, Workout, WorkoutMetrics};
pub use packages::{
    parse_packages, process_batch, report_package, sample_packages, BatchPolicy, BatchReport,
    Package, Rejected,
};
pub use report::{compute_metrics, format_report};
pub use training::{ActivityCalculator, Running, SportsWalking, Swimming, Training};
