#![allow(clippy::cast_precision_loss)]

mod common;
pub use common::*;

mod config;
pub use config::*;

mod harmonic;
pub use harmonic::*;

mod frequency;
pub use frequency::*;

mod least_squares;
pub use least_squares::*;

mod decompose;
pub use decompose::*;

mod engine;
pub use engine::*;

pub use series_window::SampleWindow;
