//! # Electrical Engineering Equations
//!
//! Every fundamental formula used by the calculators lives here as a pure,
//! stateless function taking base SI values (volts, amperes, ohms, farads,
//! henries, hertz). Having them in one place enables:
//! - Easy verification against textbook references
//! - Documentation of sign conventions and guarded divisions
//! - Consistent behaviour across calculation types
//!
//! ## Modules
//!
//! - [`ohms_law`] - V, I, R and P relations
//! - [`reactance`] - Reactance, impedance, phase angle, stored energy, resonance
//! - [`combination`] - Series/parallel rules for R, C and L
//! - [`power_factor`] - Power triangle
//! - [`safety`] - Shock, GFCI, arc-flash and heating heuristics, dividers
//!
//! ## Division by zero
//!
//! Functions whose formula divides by an input return `0.0` when that input
//! is zero rather than `inf`/`NaN`. `checked_*` variants return `None`.
//!
//! ## References
//!
//! - Hayt, Kemmerly & Durbin, *Engineering Circuit Analysis*
//! - NFPA 70E (arc-flash PPE categories, simplified)
//! - IEC 60479-1 (effects of current on the human body, simplified)

pub mod combination;
pub mod ohms_law;
pub mod power_factor;
pub mod reactance;
pub mod safety;

// Re-export commonly used items
pub use ohms_law::{checked_current, checked_resistance, current, power, resistance, voltage};

pub use reactance::{
    bandwidth,
    capacitive_reactance,
    capacitor_energy,
    impedance,
    impedance_at_frequency,
    inductive_reactance,
    inductor_energy,
    phase_angle,
    resonant_frequency,
};

pub use combination::{
    parallel_capacitance,
    parallel_inductance,
    parallel_resistance,
    series_capacitance,
    series_inductance,
    series_resistance,
};

pub use power_factor::{
    apparent_power,
    checked_apparent_power,
    checked_power_factor,
    power_factor,
    reactive_power,
};

pub use safety::{
    arc_flash,
    current_divider,
    gfci_trip_time,
    joule_heating,
    safe_disconnection_time,
    shock_risk,
    touch_current,
    voltage_divider,
    ArcFlashCategory,
    ArcFlashResult,
    GfciTripTime,
    PhysiologicalEffect,
    ShockRisk,
};
