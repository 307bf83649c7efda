//! # elec_core - Electrical Engineering Calculation Engine
//!
//! `elec_core` is the computational heart of Ohmbox, a toolbox of electrical
//! calculators. All inputs and outputs are JSON-serializable so the same
//! records can drive a CLI, a mobile front end or a batch file.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over `f64` in base SI units
//! - **Total formulas**: A division by zero yields `0.0`, never a panic or error
//! - **JSON-First**: Records, results and errors implement Serialize/Deserialize
//! - **Static data**: Gauge, colour-band and conversion tables are `const`
//!
//! ## Quick Start
//!
//! ```rust
//! use elec_core::equations::{current, impedance, parallel_resistance};
//!
//! assert_eq!(current(12.0, 4.0), 3.0);
//! assert_eq!(current(12.0, 0.0), 0.0);
//! assert_eq!(parallel_resistance(&[100.0, 100.0]), 50.0);
//! assert_eq!(impedance(3.0, 0.0, 4.0), 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Ohm's law, reactance, combinations, power factor, safety
//! - [`wire`] - AWG table, wire sizing and voltage drop
//! - [`color_code`] - Resistor colour band decode/encode
//! - [`conversions`] - Unit conversion table
//! - [`calculations`] - Calculation records for each calculator screen
//! - [`materials`] - Conductor materials
//! - [`units`] - Prefix scaling and display formatting
//! - [`settings`] - Calculator defaults
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings file load and atomic save

pub mod calculations;
pub mod color_code;
pub mod conversions;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod settings;
pub mod units;
pub mod wire;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use color_code::{decode as decode_resistor, encode as encode_resistor, DecodedResistor};
pub use conversions::convert_unit;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_settings, load_settings_or_default, save_settings};
pub use materials::ConductorMaterial;
pub use settings::CalculatorSettings;
pub use wire::{calculate_voltage_drop, calculate_wire_size};
