//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use elec_core::calculations::{OhmsLawTarget, PowerTriangleTarget};
use elec_core::materials::ConductorMaterial;
use elec_core::units::{CapacitanceUnit, InductanceUnit};

#[derive(Parser, Debug)]
#[command(name = "ohmbox")]
#[command(author, version, about = "Electrical engineering calculators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Settings file (defaults are used when it does not exist)
    #[arg(long, short = 's', global = true, env = "OHMBOX_SETTINGS", default_value = "ohmbox.json")]
    pub settings: PathBuf,

    /// Print only the JSON result
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve Ohm's law for one quantity
    Ohms(OhmsArgs),

    /// Resistors in series across a source
    Series(NetworkArgs),

    /// Resistors in parallel across a source
    Parallel(NetworkArgs),

    /// Series RLC reactance, impedance and phase
    Ac(AcArgs),

    /// Complete the power triangle
    PowerFactor(PowerFactorArgs),

    /// LC resonant frequency and bandwidth
    Resonance(ResonanceArgs),

    /// Select an AWG conductor for a load
    WireSize(WireSizeArgs),

    /// Voltage drop along a run
    VoltageDrop(VoltageDropArgs),

    /// Resistor colour codes
    #[command(subcommand)]
    Color(ColorCommands),

    /// Convert between unit prefixes
    Convert(ConvertArgs),

    /// Shock, GFCI, arc flash and other safety checks
    #[command(subcommand)]
    Safety(SafetyCommands),

    /// Run a JSON array of calculation records
    Batch(BatchArgs),

    /// Show or write the settings file
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SolveFor {
    Voltage,
    Current,
    Resistance,
    Power,
}

impl From<SolveFor> for OhmsLawTarget {
    fn from(value: SolveFor) -> Self {
        match value {
            SolveFor::Voltage => OhmsLawTarget::Voltage,
            SolveFor::Current => OhmsLawTarget::Current,
            SolveFor::Resistance => OhmsLawTarget::Resistance,
            SolveFor::Power => OhmsLawTarget::Power,
        }
    }
}

#[derive(Args, Debug)]
pub struct OhmsArgs {
    /// Quantity to solve for
    #[arg(long, short = 'f', value_enum)]
    pub solve_for: SolveFor,

    /// Voltage (V)
    #[arg(long, short = 'V')]
    pub voltage: Option<f64>,

    /// Current (A)
    #[arg(long, short = 'I')]
    pub current: Option<f64>,

    /// Resistance (Ω)
    #[arg(long, short = 'R')]
    pub resistance: Option<f64>,
}

#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Source voltage (V)
    #[arg(long, short = 'V')]
    pub voltage: f64,

    /// Resistor values (Ω)
    #[arg(required = true, num_args = 1..)]
    pub resistors: Vec<f64>,
}

#[derive(Args, Debug)]
pub struct AcArgs {
    /// Resistance (Ω)
    #[arg(long, short = 'R', default_value_t = 0.0)]
    pub resistance: f64,

    /// Capacitance, 0 for none
    #[arg(long, short = 'C', default_value_t = 0.0)]
    pub capacitance: f64,

    /// Capacitance unit (pF, nF, uF, mF, F)
    #[arg(long, default_value = "uF", value_parser = parse_capacitance_unit)]
    pub capacitance_unit: CapacitanceUnit,

    /// Inductance, 0 for none
    #[arg(long, short = 'L', default_value_t = 0.0)]
    pub inductance: f64,

    /// Inductance unit (uH, mH, H)
    #[arg(long, default_value = "mH", value_parser = parse_inductance_unit)]
    pub inductance_unit: InductanceUnit,

    /// Frequency (Hz)
    #[arg(long, short = 'F')]
    pub frequency: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PowerSolveFor {
    PowerFactor,
    ReactivePower,
    ApparentPower,
}

impl From<PowerSolveFor> for PowerTriangleTarget {
    fn from(value: PowerSolveFor) -> Self {
        match value {
            PowerSolveFor::PowerFactor => PowerTriangleTarget::PowerFactor,
            PowerSolveFor::ReactivePower => PowerTriangleTarget::ReactivePower,
            PowerSolveFor::ApparentPower => PowerTriangleTarget::ApparentPower,
        }
    }
}

#[derive(Args, Debug)]
pub struct PowerFactorArgs {
    /// Quantity to solve for
    #[arg(long, short = 'f', value_enum, default_value = "power-factor")]
    pub solve_for: PowerSolveFor,

    /// Real power P (W)
    #[arg(long, short = 'P')]
    pub real_power: f64,

    /// Apparent power S (VA)
    #[arg(long, short = 'S')]
    pub apparent_power: Option<f64>,

    /// Power factor (0 to 1)
    #[arg(long)]
    pub pf: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ResonanceArgs {
    /// Inductance
    #[arg(long, short = 'L')]
    pub inductance: f64,

    /// Inductance unit (uH, mH, H)
    #[arg(long, default_value = "mH", value_parser = parse_inductance_unit)]
    pub inductance_unit: InductanceUnit,

    /// Capacitance
    #[arg(long, short = 'C')]
    pub capacitance: f64,

    /// Capacitance unit (pF, nF, uF, mF, F)
    #[arg(long, default_value = "uF", value_parser = parse_capacitance_unit)]
    pub capacitance_unit: CapacitanceUnit,

    /// Series resistance (Ω)
    #[arg(long, short = 'R', default_value_t = 0.0)]
    pub resistance: f64,

    /// Quality factor
    #[arg(long, short = 'Q', default_value_t = 10.0)]
    pub quality_factor: f64,

    /// Also report impedance at this frequency (Hz)
    #[arg(long)]
    pub at: Option<f64>,
}

#[derive(Args, Debug)]
pub struct WireSizeArgs {
    /// Load current (A)
    #[arg(long, short = 'I')]
    pub current: f64,

    /// One-way run length (ft)
    #[arg(long, short = 'l')]
    pub length: f64,

    /// Conductor material (copper, aluminum); defaults to the settings value
    #[arg(long, short = 'm', value_parser = parse_material)]
    pub material: Option<ConductorMaterial>,
}

#[derive(Args, Debug)]
pub struct VoltageDropArgs {
    /// Load current (A)
    #[arg(long, short = 'I')]
    pub current: f64,

    /// One-way run length (ft)
    #[arg(long, short = 'l')]
    pub length: f64,

    /// AWG size, e.g. 12 or 1/0
    #[arg(long, short = 'w')]
    pub wire_size: String,

    /// System voltage (V)
    #[arg(long, short = 'V', default_value_t = 120.0)]
    pub system_voltage: f64,

    /// Conductor material (copper, aluminum); defaults to the settings value
    #[arg(long, short = 'm', value_parser = parse_material)]
    pub material: Option<ConductorMaterial>,

    /// Allowed drop (%); defaults to the settings value
    #[arg(long)]
    pub limit: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum ColorCommands {
    /// Read a value from 3 to 6 colour bands
    Decode {
        /// Band colours in order
        #[arg(required = true, num_args = 1..)]
        bands: Vec<String>,
    },

    /// Produce a 4-band marking for a value
    Encode {
        /// Resistance (Ω)
        value: f64,

        /// Tolerance (%); defaults to the settings value
        #[arg(long, short = 't')]
        tolerance: Option<f64>,
    },
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    pub value: f64,

    /// Source unit symbol (e.g. kV)
    pub from: String,

    /// Target unit symbol (e.g. V)
    pub to: String,

    /// Quantity (voltage, current, power, resistance, capacitance, inductance, frequency)
    #[arg(long, short = 'c')]
    pub category: String,
}

#[derive(Subcommand, Debug)]
pub enum SafetyCommands {
    /// Shock risk band for a contact voltage
    Shock {
        #[arg(long, short = 'V')]
        voltage: f64,

        /// DC source (AC by default)
        #[arg(long)]
        dc: bool,

        /// Wet conditions
        #[arg(long)]
        wet: bool,
    },

    /// GFCI trip time for a fault current
    Gfci {
        /// Fault current (mA)
        #[arg(long)]
        fault_ma: f64,
    },

    /// Arc-flash incident energy and PPE category
    ArcFlash {
        #[arg(long, short = 'V')]
        voltage: f64,

        /// Available fault current (A)
        #[arg(long, short = 'I')]
        current: f64,

        /// Working distance (m)
        #[arg(long, short = 'd')]
        distance: f64,
    },

    /// Current through the body at a touch voltage
    Touch {
        #[arg(long, short = 'V')]
        voltage: f64,

        /// Body resistance (Ω); defaults to the settings value
        #[arg(long)]
        body_resistance: Option<f64>,
    },

    /// Maximum safe disconnection time
    Disconnect {
        #[arg(long, short = 'V')]
        voltage: f64,

        /// Body weight (kg)
        #[arg(long, default_value_t = 70.0)]
        weight: f64,
    },

    /// Heat dissipated in a resistance
    Joule {
        #[arg(long, short = 'I')]
        current: f64,

        #[arg(long, short = 'R')]
        resistance: f64,

        /// Duration (s)
        #[arg(long, short = 't')]
        time: f64,
    },

    /// Two-resistor voltage divider
    VoltageDivider {
        #[arg(long, short = 'V')]
        input: f64,

        #[arg(long)]
        r1: f64,

        #[arg(long)]
        r2: f64,
    },

    /// Two-branch current divider
    CurrentDivider {
        #[arg(long, short = 'I')]
        total: f64,

        #[arg(long)]
        ra: f64,

        #[arg(long)]
        rb: f64,
    },
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of calculation records
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show,

    /// Write the default settings to the settings path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_material(s: &str) -> Result<ConductorMaterial, String> {
    ConductorMaterial::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_capacitance_unit(s: &str) -> Result<CapacitanceUnit, String> {
    Ok(CapacitanceUnit::from_symbol(s))
}

fn parse_inductance_unit(s: &str) -> Result<InductanceUnit, String> {
    Ok(InductanceUnit::from_symbol(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ohms() {
        let cli = Cli::try_parse_from(["ohmbox", "ohms", "--solve-for", "current", "-V", "12", "-R", "4"]).unwrap();
        match cli.command {
            Commands::Ohms(args) => {
                assert!(matches!(args.solve_for, SolveFor::Current));
                assert_eq!(args.voltage, Some(12.0));
                assert_eq!(args.current, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_material_aliases() {
        let cli = Cli::try_parse_from(["ohmbox", "wire-size", "-I", "20", "-l", "100", "-m", "al"]).unwrap();
        match cli.command {
            Commands::WireSize(args) => assert_eq!(args.material, Some(ConductorMaterial::Aluminum)),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["ohmbox", "wire-size", "-I", "20", "-l", "100", "-m", "gold"]).is_err());
    }

    #[test]
    fn test_parse_units() {
        let cli = Cli::try_parse_from(["ohmbox", "ac", "-F", "60", "-C", "100", "--capacitance-unit", "nF"]).unwrap();
        match cli.command {
            Commands::Ac(args) => {
                assert_eq!(args.capacitance_unit, CapacitanceUnit::Nanofarad);
                assert_eq!(args.inductance_unit, InductanceUnit::Millihenry);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_color_decode() {
        let cli = Cli::try_parse_from(["ohmbox", "color", "decode", "brown", "black", "red", "gold"]).unwrap();
        match cli.command {
            Commands::Color(ColorCommands::Decode { bands }) => assert_eq!(bands.len(), 4),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
