//! # Ohmbox CLI Application
//!
//! Every calculator screen is a subcommand. Each run prints a short human
//! summary followed by the JSON result (or only the JSON with `--json`).
//!
//! ```text
//! ohmbox ohms --solve-for current -V 12 -R 4
//! ohmbox voltage-drop -I 20 -l 100 -w 12 -V 120
//! ohmbox color decode brown black red gold
//! ohmbox safety touch -V 50
//! ```

mod args;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use elec_core::calculations::{
    ac_circuit, dc_circuit, ohms_law, power_factor, resonance, voltage_drop, wire_size, AcCircuitInput,
    CalculationItem, OhmsLawInput, ParallelCircuitInput, PowerTriangleInput, ResonanceInput, SeriesCircuitInput,
    VoltageDropInput, WireSizeInput,
};
use elec_core::equations::safety;
use elec_core::units::{format_energy, format_resistance};
use elec_core::{color_code, conversions, file_io, CalcError, CalcResult, CalculatorSettings};

use args::{
    AcArgs, BatchArgs, Cli, ColorCommands, Commands, ConvertArgs, GlobalOpts, NetworkArgs, OhmsArgs,
    PowerFactorArgs, ResonanceArgs, SafetyCommands, SettingsCommands, VoltageDropArgs, WireSizeArgs,
};

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match run(cli.command, &cli.global) {
        Ok(report) => {
            report.print(cli.global.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Human summary plus the serialized result of one command
struct Report {
    title: String,
    lines: Vec<(String, String)>,
    json: serde_json::Value,
}

impl Report {
    fn new(title: impl Into<String>, result: &impl Serialize) -> CalcResult<Self> {
        Ok(Report {
            title: title.into(),
            lines: Vec::new(),
            json: serde_json::to_value(result)?,
        })
    }

    fn line(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push((name.into(), value.into()));
        self
    }

    fn print(&self, json_only: bool) {
        if !json_only {
            println!("═══════════════════════════════════════");
            println!("  {}", self.title.to_uppercase());
            println!("═══════════════════════════════════════");
            let width = self.lines.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
            for (name, value) in &self.lines {
                println!("  {:<width$}  {}", name, value, width = width);
            }
            println!();
            println!("JSON Output:");
        }
        match serde_json::to_string_pretty(&self.json) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

// ============================================================================
// Commands
// ============================================================================

fn run(command: Commands, global: &GlobalOpts) -> CalcResult<Report> {
    // Writing defaults must work even when the existing file is unreadable
    if let Commands::Settings(SettingsCommands::Init { force }) = command {
        return init_settings(&global.settings, force);
    }

    let settings = file_io::load_settings_or_default(&global.settings)?;
    debug!(path = %global.settings.display(), ?settings, "effective settings");

    match command {
        Commands::Ohms(args) => run_ohms(args, &settings),
        Commands::Series(args) => run_series(args, &settings),
        Commands::Parallel(args) => run_parallel(args, &settings),
        Commands::Ac(args) => run_ac(args, &settings),
        Commands::PowerFactor(args) => run_power_factor(args, &settings),
        Commands::Resonance(args) => run_resonance(args, &settings),
        Commands::WireSize(args) => run_wire_size(args, &settings),
        Commands::VoltageDrop(args) => run_voltage_drop(args, &settings),
        Commands::Color(cmd) => run_color(cmd, &settings),
        Commands::Convert(args) => run_convert(args, &settings),
        Commands::Safety(cmd) => run_safety(cmd, &settings),
        Commands::Batch(args) => run_batch(args),
        Commands::Settings(cmd) => run_settings(cmd, &global.settings, settings),
    }
}

fn optional(settings: &CalculatorSettings, value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", settings.format_value(v), unit),
        None => "-".to_string(),
    }
}

fn run_ohms(args: OhmsArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = OhmsLawInput {
        label: String::new(),
        solve_for: args.solve_for.into(),
        voltage: args.voltage,
        current: args.current,
        resistance: args.resistance,
    };
    let result = ohms_law::calculate(&input)?;

    Ok(Report::new("Ohm's Law", &result)?
        .line("Voltage", optional(settings, result.voltage, "V"))
        .line("Current", optional(settings, result.current, "A"))
        .line("Resistance", optional(settings, result.resistance, "Ω"))
        .line("Power", optional(settings, Some(result.power), "W")))
}

fn run_series(args: NetworkArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = SeriesCircuitInput {
        label: String::new(),
        voltage: args.voltage,
        resistors: args.resistors,
    };
    let result = dc_circuit::calculate_series(&input)?;

    let mut report = Report::new("Series Circuit", &result)?
        .line("Total resistance", format_resistance(result.total_resistance))
        .line("Current", format!("{} A", settings.format_value(result.current)));
    for (i, (r, drop)) in input.resistors.iter().zip(&result.voltage_drops).enumerate() {
        report = report.line(
            format!("R{} ({})", i + 1, format_resistance(*r)),
            format!("{} V", settings.format_value(*drop)),
        );
    }
    Ok(report.line("Power", format!("{} W", settings.format_value(result.power))))
}

fn run_parallel(args: NetworkArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = ParallelCircuitInput {
        label: String::new(),
        voltage: args.voltage,
        resistors: args.resistors,
    };
    let result = dc_circuit::calculate_parallel(&input)?;

    let mut report = Report::new("Parallel Circuit", &result)?
        .line("Total resistance", format_resistance(result.total_resistance))
        .line("Total current", format!("{} A", settings.format_value(result.total_current)));
    for (i, (r, current)) in input.resistors.iter().zip(&result.branch_currents).enumerate() {
        report = report.line(
            format!("R{} ({})", i + 1, format_resistance(*r)),
            format!("{} A", settings.format_value(*current)),
        );
    }
    Ok(report.line("Power", format!("{} W", settings.format_value(result.power))))
}

fn run_ac(args: AcArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = AcCircuitInput {
        label: String::new(),
        resistance: args.resistance,
        capacitance: args.capacitance,
        capacitance_unit: args.capacitance_unit,
        inductance: args.inductance,
        inductance_unit: args.inductance_unit,
        frequency: args.frequency,
    };
    let result = ac_circuit::calculate(&input)?;

    Ok(Report::new("AC Circuit", &result)?
        .line("Xc", format!("{} Ω", settings.format_value(result.capacitive_reactance)))
        .line("Xl", format!("{} Ω", settings.format_value(result.inductive_reactance)))
        .line("Net reactance", format!("{} Ω", settings.format_value(result.net_reactance)))
        .line("Impedance", format!("{} Ω", settings.format_value(result.impedance)))
        .line("Phase angle", format!("{}°", settings.format_value(result.phase_angle_deg))))
}

fn run_power_factor(args: PowerFactorArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = PowerTriangleInput {
        label: String::new(),
        solve_for: args.solve_for.into(),
        real_power: args.real_power,
        apparent_power: args.apparent_power,
        power_factor: args.pf,
    };
    let result = power_factor::calculate(&input)?;

    Ok(Report::new("Power Factor", &result)?
        .line("Real power", format!("{} W", settings.format_value(result.real_power)))
        .line("Reactive power", format!("{} VAR", settings.format_value(result.reactive_power)))
        .line("Apparent power", format!("{} VA", settings.format_value(result.apparent_power)))
        .line("Power factor", settings.format_value(result.power_factor)))
}

fn run_resonance(args: ResonanceArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = ResonanceInput {
        label: String::new(),
        inductance: args.inductance,
        inductance_unit: args.inductance_unit,
        capacitance: args.capacitance,
        capacitance_unit: args.capacitance_unit,
        resistance: args.resistance,
        quality_factor: args.quality_factor,
    };
    let result = resonance::calculate(&input)?;

    let mut report = Report::new("Resonance", &result)?
        .line("Resonant frequency", result.formatted_frequency.clone())
        .line("Bandwidth", format!("{} Hz", settings.format_value(result.bandwidth)))
        .line("Impedance at f0", format_resistance(result.impedance_at_resonance));

    if let Some(frequency) = args.at {
        let z = input.impedance_at(frequency);
        report.json["impedance_at"] = json!({ "frequency": frequency, "impedance": z });
        report = report.line(
            format!("Impedance at {} Hz", settings.format_value(frequency)),
            format_resistance(z),
        );
    }
    Ok(report)
}

fn run_wire_size(args: WireSizeArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = WireSizeInput {
        label: String::new(),
        current: args.current,
        length_ft: args.length,
        material: args.material.unwrap_or(settings.default_material),
    };
    let result = wire_size::calculate(&input)?;

    Ok(Report::new("Wire Size", &result)?
        .line("Material", input.material.display_name())
        .line("Wire size", result.wire_size.clone())
        .line("Ampacity", optional(settings, result.max_amps, "A"))
        .line("Area", optional(settings, result.area_mm2, "mm²")))
}

fn run_voltage_drop(args: VoltageDropArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let input = VoltageDropInput {
        label: String::new(),
        current: args.current,
        length_ft: args.length,
        wire_size: args.wire_size,
        material: args.material.unwrap_or(settings.default_material),
        system_voltage: args.system_voltage,
        limit_percent: args.limit.unwrap_or(settings.voltage_drop_limit_percent),
    };
    let result = voltage_drop::calculate(&input)?;

    Ok(Report::new("Voltage Drop", &result)?
        .line("Wire size", result.wire_size.clone())
        .line("Material", input.material.display_name())
        .line("Voltage drop", format!("{} V", settings.format_value(result.voltage_drop)))
        .line(
            "Drop",
            format!(
                "{}% (limit {}%) {}",
                settings.format_value(result.drop_percent),
                settings.format_value(input.limit_percent),
                status_icon(result.within_limit)
            ),
        )
        .line("Load voltage", format!("{} V", settings.format_value(result.load_voltage))))
}

fn run_color(cmd: ColorCommands, settings: &CalculatorSettings) -> CalcResult<Report> {
    match cmd {
        ColorCommands::Decode { bands } => {
            let decoded = color_code::decode(bands.as_slice())?;
            let mut report = Report::new("Resistor Colour Code", &decoded)?
                .line("Bands", bands.join(" "))
                .line("Value", decoded.formatted.clone());
            if let Some(ppm) = decoded.temp_coefficient_ppm {
                report = report.line("Temperature coefficient", format!("{} ppm/°C", ppm));
            }
            Ok(report)
        }
        ColorCommands::Encode { value, tolerance } => {
            let tolerance = tolerance.unwrap_or(settings.default_tolerance_percent);
            let bands = color_code::encode(value, tolerance);
            let result = json!({ "value_ohms": value, "tolerance_percent": tolerance, "bands": bands });
            Ok(Report::new("Resistor Colour Code", &result)?
                .line("Value", format!("{} ±{}%", format_resistance(value), tolerance))
                .line("Bands", bands.join(" ")))
        }
    }
}

fn run_convert(args: ConvertArgs, settings: &CalculatorSettings) -> CalcResult<Report> {
    let converted = conversions::convert_unit(args.value, &args.from, &args.to, &args.category);
    let listed = args.from == args.to || conversions::find_conversion(&args.from, &args.to, &args.category).is_some();

    let result = json!({
        "value": args.value,
        "from": args.from,
        "to": args.to,
        "category": args.category,
        "result": converted,
        "converted": listed,
    });
    let mut report = Report::new("Unit Conversion", &result)?.line(
        "Result",
        format!(
            "{} {} = {} {}",
            settings.format_value(args.value),
            args.from,
            settings.format_value(converted),
            args.to
        ),
    );
    if !listed {
        let units = conversions::units_for(&args.category);
        let known = if units.is_empty() { "none".to_string() } else { units.join(", ") };
        report = report
            .line("Note", "no direct conversion listed, value unchanged")
            .line(format!("Units ({})", args.category), known);
    }
    Ok(report)
}

fn run_safety(cmd: SafetyCommands, settings: &CalculatorSettings) -> CalcResult<Report> {
    match cmd {
        SafetyCommands::Shock { voltage, dc, wet } => {
            let risk = safety::shock_risk(voltage, !dc, wet);
            let result = json!({ "voltage": voltage, "is_ac": !dc, "is_wet": wet, "risk": risk });
            Ok(Report::new("Shock Risk", &result)?
                .line("Exposure", format!(
                    "{} V {} {}",
                    settings.format_value(voltage),
                    if dc { "DC" } else { "AC" },
                    if wet { "wet" } else { "dry" }
                ))
                .line("Risk", risk.label()))
        }
        SafetyCommands::Gfci { fault_ma } => {
            let trip = safety::gfci_trip_time(fault_ma);
            let result = json!({ "fault_current_ma": fault_ma, "trip_time": trip, "label": trip.label() });
            Ok(Report::new("GFCI Trip Time", &result)?
                .line("Fault current", format!("{} mA", settings.format_value(fault_ma)))
                .line("Trip time", trip.label()))
        }
        SafetyCommands::ArcFlash { voltage, current, distance } => {
            let result = safety::arc_flash(voltage, current, distance);
            Ok(Report::new("Arc Flash", &result)?
                .line("Incident energy", format!("{} cal/cm²", settings.format_value(result.energy_cal_cm2)))
                .line("Category", result.category.label()))
        }
        SafetyCommands::Touch { voltage, body_resistance } => {
            let body_resistance = body_resistance.unwrap_or(settings.body_resistance_ohms);
            let result = safety::touch_current(voltage, body_resistance);
            Ok(Report::new("Touch Current", &result)?
                .line("Body resistance", format_resistance(body_resistance))
                .line("Current", format!("{} mA", settings.format_value(result.current_ma)))
                .line("Effect", result.effect.label()))
        }
        SafetyCommands::Disconnect { voltage, weight } => {
            let result = safety::safe_disconnection_time(voltage, weight);
            Ok(Report::new("Safe Disconnection Time", &result)?
                .line("Time", format!("{:.3} s", result.time_s))
                .line("Recommendation", result.recommendation.label()))
        }
        SafetyCommands::Joule { current, resistance, time } => {
            let result = safety::joule_heating(current, resistance, time);
            Ok(Report::new("Joule Heating", &result)?
                .line("Energy", format_energy(result.energy_j))
                .line("Temperature rise", format!("{} °C", settings.format_value(result.temperature_rise_c))))
        }
        SafetyCommands::VoltageDivider { input, r1, r2 } => {
            let result = safety::voltage_divider(input, r1, r2);
            Ok(Report::new("Voltage Divider", &result)?
                .line("Output voltage", format!("{} V", settings.format_value(result.output_voltage)))
                .line("Current", format!("{} A", settings.format_value(result.current))))
        }
        SafetyCommands::CurrentDivider { total, ra, rb } => {
            let result = safety::current_divider(total, ra, rb);
            Ok(Report::new("Current Divider", &result)?
                .line("Branch A", format!("{} A", settings.format_value(result.current_a)))
                .line("Branch B", format!("{} A", settings.format_value(result.current_b))))
        }
    }
}

fn run_batch(args: BatchArgs) -> CalcResult<Report> {
    let contents = fs::read_to_string(&args.file).map_err(|e| {
        CalcError::file_error("read", args.file.display().to_string(), e.to_string())
    })?;
    let items: Vec<CalculationItem> = serde_json::from_str(&contents)?;
    info!(count = items.len(), file = %args.file.display(), "running batch");

    let mut entries = Vec::with_capacity(items.len());
    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let name = if item.label().is_empty() {
            format!("#{} {}", index + 1, item.calc_type())
        } else {
            format!("#{} {} ({})", index + 1, item.label(), item.calc_type())
        };
        match item.calculate() {
            Ok(output) => {
                entries.push(json!({ "label": item.label(), "output": output }));
                lines.push((name, status_icon(true).to_string()));
            }
            Err(e) => {
                lines.push((name, format!("{} {}", status_icon(false), e)));
                entries.push(json!({ "label": item.label(), "error": e }));
            }
        }
    }

    let mut report = Report::new("Batch", &entries)?;
    report.lines = lines;
    Ok(report)
}

fn run_settings(cmd: SettingsCommands, path: &Path, settings: CalculatorSettings) -> CalcResult<Report> {
    match cmd {
        SettingsCommands::Show => Ok(Report::new("Settings", &settings)?
            .line("File", path.display().to_string())
            .line("Decimal places", settings.decimal_places.to_string())
            .line("Default material", settings.default_material.display_name())
            .line("Body resistance", format_resistance(settings.body_resistance_ohms))
            .line("Default tolerance", format!("{}%", settings.default_tolerance_percent))
            .line("Voltage drop limit", format!("{}%", settings.voltage_drop_limit_percent))),
        SettingsCommands::Init { force } => init_settings(path, force),
    }
}

fn init_settings(path: &Path, force: bool) -> CalcResult<Report> {
    if path.exists() && !force {
        return Err(CalcError::file_error(
            "init",
            path.display().to_string(),
            "file already exists (use --force to overwrite)",
        ));
    }
    let defaults = CalculatorSettings::default();
    file_io::save_settings(&defaults, path)?;
    Ok(Report::new("Settings", &defaults)?.line("Written", path.display().to_string()))
}
