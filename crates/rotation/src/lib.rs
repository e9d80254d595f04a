//! # rota-rotation
//!
//! Pure date arithmetic for a two-crew rotational duty schedule.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["RotationConfig (cycle, anchor, starting crew)"] --> B["RotationEngine"]
//!     B -->|".crew_status()"| C["DayStatus"]
//!     B -->|".schedule_range()"| D["Vec of ScheduleEntry"]
//!     B -->|".next_crew_change()"| E["NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use rota_rotation::{Crew, RotationConfig, RotationEngine, Status, DEFAULT_CYCLE_LENGTH};
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let config = RotationConfig::new(anchor, Crew::Blue, DEFAULT_CYCLE_LENGTH).unwrap();
//! let engine = RotationEngine::new(config);
//!
//! // Who works on a given date?
//! let day = engine.crew_status(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
//! assert_eq!(day.working_crew(), Crew::Blue);
//!
//! // When does the next crew change happen?
//! let next = engine.next_crew_change(anchor);
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `crew` | Crew and duty-status enums |
//! | `config` | Immutable rotation parameters |
//! | `day` | Per-date crew-to-status assignment |
//! | `entry` | Schedule entry record |
//! | `engine` | The rotation engine |
//! | `error` | Error types |

mod config;
mod crew;
mod day;
mod engine;
mod entry;
mod error;

pub use config::{RotationConfig, DEFAULT_CYCLE_LENGTH};
pub use crew::{Crew, Status};
pub use day::DayStatus;
pub use engine::RotationEngine;
pub use entry::ScheduleEntry;
pub use error::RotationError;
