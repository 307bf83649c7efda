//! # Electrical Safety Heuristics
//!
//! Simplified, educational approximations: compute a quantity directly, then
//! bucket it against a fixed threshold table. None of these replace an
//! IEEE 1584 / NFPA 70E study or IEC 60479 body-current analysis.
//!
//! Every classifier here is a pure single-pass function. Bands are checked
//! in ascending order and the first matching upper bound wins.

use serde::{Deserialize, Serialize};

/// Fixed arc duration used by [`arc_flash`] (seconds)
pub const ARC_DURATION_S: f64 = 0.2;

/// Linear energy-to-temperature factor used by [`joule_heating`] (°C per J)
pub const JOULE_TEMPERATURE_FACTOR: f64 = 0.005;

/// Reference voltage and body weight for [`safe_disconnection_time`]
const DISCONNECTION_REFERENCE_V: f64 = 116.0;
const DISCONNECTION_REFERENCE_KG: f64 = 70.0;

// =============================================================================
// SHOCK RISK
// =============================================================================

/// Shock-risk band for a given exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShockRisk {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
    Extreme,
}

impl ShockRisk {
    /// Display label (e.g., "Very Low")
    pub fn label(&self) -> &'static str {
        match self {
            ShockRisk::VeryLow => "Very Low",
            ShockRisk::Low => "Low",
            ShockRisk::Moderate => "Moderate",
            ShockRisk::High => "High",
            ShockRisk::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for ShockRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper voltage bounds (exclusive) for VeryLow, Low, Moderate, High.
/// Anything at or above the last bound is Extreme.
const AC_WET_BOUNDS: [f64; 4] = [5.0, 30.0, 50.0, 100.0];
const AC_DRY_BOUNDS: [f64; 4] = [25.0, 50.0, 120.0, 240.0];
const DC_WET_BOUNDS: [f64; 4] = [10.0, 40.0, 60.0, 120.0];
const DC_DRY_BOUNDS: [f64; 4] = [40.0, 60.0, 120.0, 300.0];

/// Classify shock risk from voltage, circuit type and exposure
///
/// # Example
/// ```rust
/// use elec_core::equations::safety::{shock_risk, ShockRisk};
///
/// assert_eq!(shock_risk(30.0, true, false), ShockRisk::Low);
/// assert_eq!(shock_risk(30.0, true, true), ShockRisk::Moderate);
/// ```
pub fn shock_risk(voltage: f64, is_ac: bool, is_wet: bool) -> ShockRisk {
    let bounds = match (is_ac, is_wet) {
        (true, true) => &AC_WET_BOUNDS,
        (true, false) => &AC_DRY_BOUNDS,
        (false, true) => &DC_WET_BOUNDS,
        (false, false) => &DC_DRY_BOUNDS,
    };

    const BANDS: [ShockRisk; 4] = [
        ShockRisk::VeryLow,
        ShockRisk::Low,
        ShockRisk::Moderate,
        ShockRisk::High,
    ];

    bounds
        .iter()
        .zip(BANDS)
        .find(|&(&bound, _)| voltage < bound)
        .map(|(_, band)| band)
        .unwrap_or(ShockRisk::Extreme)
}

// =============================================================================
// GFCI TRIP TIME
// =============================================================================

/// Expected GFCI trip-time band for a ground-fault current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GfciTripTime {
    /// Fault at or below 5 mA: may not trip quickly (≥ 25 ms)
    AtLeast25Ms,
    /// Up to 15 mA: ≤ 10 ms
    Within10Ms,
    /// Up to 30 mA: ≤ 5 ms
    Within5Ms,
    /// Above 30 mA: ≤ 3 ms
    Within3Ms,
}

impl GfciTripTime {
    pub fn label(&self) -> &'static str {
        match self {
            GfciTripTime::AtLeast25Ms => "≥ 25 ms",
            GfciTripTime::Within10Ms => "≤ 10 ms",
            GfciTripTime::Within5Ms => "≤ 5 ms",
            GfciTripTime::Within3Ms => "≤ 3 ms",
        }
    }
}

impl std::fmt::Display for GfciTripTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify GFCI trip time from fault current in milliamps
pub fn gfci_trip_time(fault_current_ma: f64) -> GfciTripTime {
    if fault_current_ma <= 5.0 {
        GfciTripTime::AtLeast25Ms
    } else if fault_current_ma <= 15.0 {
        GfciTripTime::Within10Ms
    } else if fault_current_ma <= 30.0 {
        GfciTripTime::Within5Ms
    } else {
        GfciTripTime::Within3Ms
    }
}

// =============================================================================
// ARC FLASH
// =============================================================================

/// PPE hazard category for arc-flash incident energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArcFlashCategory {
    Category1,
    Category2,
    Category3,
    Category4,
    /// Above 40 cal/cm²
    Dangerous,
}

impl ArcFlashCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ArcFlashCategory::Category1 => "Category 1",
            ArcFlashCategory::Category2 => "Category 2",
            ArcFlashCategory::Category3 => "Category 3",
            ArcFlashCategory::Category4 => "Category 4",
            ArcFlashCategory::Dangerous => "Dangerous - No Standard PPE Available",
        }
    }

    fn from_energy(energy_cal_cm2: f64) -> Self {
        if energy_cal_cm2 < 4.0 {
            ArcFlashCategory::Category1
        } else if energy_cal_cm2 < 8.0 {
            ArcFlashCategory::Category2
        } else if energy_cal_cm2 < 25.0 {
            ArcFlashCategory::Category3
        } else if energy_cal_cm2 < 40.0 {
            ArcFlashCategory::Category4
        } else {
            ArcFlashCategory::Dangerous
        }
    }
}

/// Incident energy estimate and its hazard category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcFlashResult {
    /// Incident energy (cal/cm²)
    pub energy_cal_cm2: f64,
    pub category: ArcFlashCategory,
}

impl std::fmt::Display for ArcFlashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} cal/cm² - {}", self.energy_cal_cm2, self.category.label())
    }
}

/// Simplified arc-flash incident energy
///
/// # Formula
/// E = V × I × t / (2π × D²), with t fixed at [`ARC_DURATION_S`]
///
/// A working distance of zero yields infinite energy and therefore the
/// `Dangerous` category.
pub fn arc_flash(voltage: f64, current: f64, distance: f64) -> ArcFlashResult {
    let energy_cal_cm2 =
        (voltage * current * ARC_DURATION_S) / (2.0 * std::f64::consts::PI * distance.powi(2));
    ArcFlashResult {
        energy_cal_cm2,
        category: ArcFlashCategory::from_energy(energy_cal_cm2),
    }
}

// =============================================================================
// TOUCH CURRENT
// =============================================================================

/// Physiological effect band for current through the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhysiologicalEffect {
    NotPerceptible,
    SlightTingling,
    Paresthesia,
    MuscularContraction,
    PainStrongContraction,
    FibrillationPossible,
    FibrillationLikely,
    SevereBurns,
}

impl PhysiologicalEffect {
    pub fn label(&self) -> &'static str {
        match self {
            PhysiologicalEffect::NotPerceptible => "Generally not perceptible",
            PhysiologicalEffect::SlightTingling => "Slight tingling sensation",
            PhysiologicalEffect::Paresthesia => "Paresthesia (tingling)",
            PhysiologicalEffect::MuscularContraction => "Muscular contraction possible",
            PhysiologicalEffect::PainStrongContraction => "Pain, strong muscular contraction",
            PhysiologicalEffect::FibrillationPossible => "Ventricular fibrillation possible",
            PhysiologicalEffect::FibrillationLikely => "Ventricular fibrillation likely",
            PhysiologicalEffect::SevereBurns => "Severe burns and cardiac arrest",
        }
    }

    fn from_milliamps(current_ma: f64) -> Self {
        const BANDS: [(f64, PhysiologicalEffect); 7] = [
            (1.0, PhysiologicalEffect::NotPerceptible),
            (5.0, PhysiologicalEffect::SlightTingling),
            (10.0, PhysiologicalEffect::Paresthesia),
            (30.0, PhysiologicalEffect::MuscularContraction),
            (50.0, PhysiologicalEffect::PainStrongContraction),
            (100.0, PhysiologicalEffect::FibrillationPossible),
            (200.0, PhysiologicalEffect::FibrillationLikely),
        ];
        BANDS
            .iter()
            .find(|(bound, _)| current_ma < *bound)
            .map(|(_, effect)| *effect)
            .unwrap_or(PhysiologicalEffect::SevereBurns)
    }
}

/// Body current and its expected effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchCurrentResult {
    pub current_ma: f64,
    pub effect: PhysiologicalEffect,
}

impl std::fmt::Display for TouchCurrentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} mA - {}", self.current_ma, self.effect.label())
    }
}

/// Touch current through the body via Ohm's law
///
/// # Formula
/// I (mA) = V / R_body × 1000
pub fn touch_current(touch_voltage: f64, body_resistance: f64) -> TouchCurrentResult {
    let current_ma = touch_voltage / body_resistance * 1000.0;
    TouchCurrentResult {
        current_ma,
        effect: PhysiologicalEffect::from_milliamps(current_ma),
    }
}

// =============================================================================
// SAFE DISCONNECTION TIME
// =============================================================================

/// Protection recommendation for a safe disconnection time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisconnectionRecommendation {
    Immediate,
    Fast,
    Standard,
    Basic,
}

impl DisconnectionRecommendation {
    pub fn label(&self) -> &'static str {
        match self {
            DisconnectionRecommendation::Immediate => "Immediate disconnection required",
            DisconnectionRecommendation::Fast => "Fast disconnection recommended",
            DisconnectionRecommendation::Standard => "Standard protection sufficient",
            DisconnectionRecommendation::Basic => "Basic protection acceptable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisconnectionResult {
    pub time_s: f64,
    pub recommendation: DisconnectionRecommendation,
}

impl std::fmt::Display for DisconnectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} seconds - {}", self.time_s, self.recommendation.label())
    }
}

/// Simplified maximum disconnection time
///
/// # Formula
/// t = (116 / V) × (W / 70)^0.75
///
/// A 0 V system gives an infinite time and lands in
/// [`DisconnectionRecommendation::Basic`]: with no voltage there is no shock
/// hazard to clear.
pub fn safe_disconnection_time(system_voltage: f64, body_weight_kg: f64) -> DisconnectionResult {
    let time_s = (DISCONNECTION_REFERENCE_V / system_voltage)
        * (body_weight_kg / DISCONNECTION_REFERENCE_KG).powf(0.75);

    let recommendation = if time_s < 0.05 {
        DisconnectionRecommendation::Immediate
    } else if time_s < 0.2 {
        DisconnectionRecommendation::Fast
    } else if time_s < 0.5 {
        DisconnectionRecommendation::Standard
    } else {
        DisconnectionRecommendation::Basic
    };

    DisconnectionResult {
        time_s,
        recommendation,
    }
}

// =============================================================================
// JOULE HEATING AND DIVIDERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JouleHeating {
    /// Dissipated energy (J)
    pub energy_j: f64,
    /// Approximate temperature rise (°C)
    pub temperature_rise_c: f64,
}

/// Joule heating with a fixed linear temperature factor
///
/// # Formula
/// E = I²Rt, ΔT = E × [`JOULE_TEMPERATURE_FACTOR`]
pub fn joule_heating(current: f64, resistance: f64, time_s: f64) -> JouleHeating {
    let energy_j = current.powi(2) * resistance * time_s;
    JouleHeating {
        energy_j,
        temperature_rise_c: energy_j * JOULE_TEMPERATURE_FACTOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageDivider {
    pub output_voltage: f64,
    /// Current through the divider chain (A)
    pub current: f64,
}

/// Two-resistor voltage divider
///
/// # Formula
/// Vout = Vin × R2 / (R1 + R2), I = Vin / (R1 + R2)
///
/// Both outputs are 0 when R1 + R2 = 0.
///
/// # Example
/// ```rust
/// use elec_core::equations::safety::voltage_divider;
///
/// let d = voltage_divider(12.0, 1000.0, 1000.0);
/// assert_eq!(d.output_voltage, 6.0);
/// assert_eq!(d.current, 0.006);
/// ```
pub fn voltage_divider(input_voltage: f64, r1: f64, r2: f64) -> VoltageDivider {
    let total = r1 + r2;
    if total == 0.0 {
        return VoltageDivider {
            output_voltage: 0.0,
            current: 0.0,
        };
    }
    VoltageDivider {
        output_voltage: input_voltage * (r2 / total),
        current: input_voltage / total,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentDivider {
    /// Current through resistor A
    pub current_a: f64,
    /// Current through resistor B
    pub current_b: f64,
}

/// Two-branch current divider
///
/// # Formula
/// Ia = I × Rb / (Ra + Rb), Ib = I × Ra / (Ra + Rb)
///
/// Both branch currents are 0 when Ra + Rb = 0.
pub fn current_divider(total_current: f64, ra: f64, rb: f64) -> CurrentDivider {
    let total = ra + rb;
    if total == 0.0 {
        return CurrentDivider {
            current_a: 0.0,
            current_b: 0.0,
        };
    }
    CurrentDivider {
        current_a: total_current * (rb / total),
        current_b: total_current * (ra / total),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
