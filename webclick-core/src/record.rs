//! Types and traits for recording values emitted by environments.
//!
//! Every call of [`Env::step`](crate::Env::step) returns a [`Record`] besides the
//! [`Step`](crate::Step) object. The record holds diagnostic values of the step,
//! like the distance between the click and the target.
//!
//! # Basic Usage
//!
//! ```rust
//! use webclick_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("reward", RecordValue::Scalar(-0.5));
//! record.insert("goal", RecordValue::String("Weather Alert".to_string()));
//! assert_eq!(record.get_scalar("reward").unwrap(), -0.5);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
