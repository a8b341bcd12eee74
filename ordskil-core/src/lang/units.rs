//! Measurement units and their conversion to SI base units.

use std::sync::LazyLock;

/// Conversion from a surface unit to its base unit. Temperatures need an
/// affine conversion; everything else is a plain factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitConv {
    Factor(f64),
    Celsius,
    Fahrenheit,
}

impl UnitConv {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            UnitConv::Factor(f) => value * f,
            UnitConv::Celsius => value + 273.15,
            UnitConv::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        }
    }
}

/// Surface unit, SI base unit, conversion.
pub const SI_UNITS: &[(&str, &str, UnitConv)] = &[
    // Distance
    ("m", "m", UnitConv::Factor(1.0)),
    ("mm", "m", UnitConv::Factor(1.0e-3)),
    ("μm", "m", UnitConv::Factor(1.0e-6)),
    ("cm", "m", UnitConv::Factor(1.0e-2)),
    ("sm", "m", UnitConv::Factor(1.0e-2)),
    ("km", "m", UnitConv::Factor(1.0e3)),
    ("ft", "m", UnitConv::Factor(0.3048)),
    ("mi", "m", UnitConv::Factor(1609.34)),
    // Area
    ("m²", "m²", UnitConv::Factor(1.0)),
    ("fm", "m²", UnitConv::Factor(1.0)),
    ("km²", "m²", UnitConv::Factor(1.0e6)),
    ("cm²", "m²", UnitConv::Factor(1.0e-2)),
    ("ha", "m²", UnitConv::Factor(1.0e4)),
    // Volume
    ("m³", "m³", UnitConv::Factor(1.0)),
    ("cm³", "m³", UnitConv::Factor(1.0e-6)),
    ("km³", "m³", UnitConv::Factor(1.0e9)),
    ("l", "m³", UnitConv::Factor(1.0e-3)),
    ("ltr", "m³", UnitConv::Factor(1.0e-3)),
    ("dl", "m³", UnitConv::Factor(1.0e-4)),
    ("cl", "m³", UnitConv::Factor(1.0e-5)),
    ("ml", "m³", UnitConv::Factor(1.0e-6)),
    ("gal", "m³", UnitConv::Factor(3.78541e-3)),
    ("bbl", "m³", UnitConv::Factor(158.987294928e-3)),
    // Temperature
    ("K", "K", UnitConv::Factor(1.0)),
    ("°K", "K", UnitConv::Factor(1.0)),
    ("°C", "K", UnitConv::Celsius),
    ("°F", "K", UnitConv::Fahrenheit),
    // Mass
    ("g", "kg", UnitConv::Factor(1.0e-3)),
    ("gr", "kg", UnitConv::Factor(1.0e-3)),
    ("kg", "kg", UnitConv::Factor(1.0)),
    ("t", "kg", UnitConv::Factor(1.0e3)),
    ("mg", "kg", UnitConv::Factor(1.0e-6)),
    ("μg", "kg", UnitConv::Factor(1.0e-9)),
    ("tn", "kg", UnitConv::Factor(1.0e3)),
    ("lb", "kg", UnitConv::Factor(0.453592)),
    // Duration
    ("s", "s", UnitConv::Factor(1.0)),
    ("ms", "s", UnitConv::Factor(1.0e-3)),
    ("μs", "s", UnitConv::Factor(1.0e-6)),
    ("klst", "s", UnitConv::Factor(3600.0)),
    ("mín", "s", UnitConv::Factor(60.0)),
    // Force
    ("N", "N", UnitConv::Factor(1.0)),
    ("kN", "N", UnitConv::Factor(1.0e3)),
    // Energy
    ("Nm", "J", UnitConv::Factor(1.0)),
    ("J", "J", UnitConv::Factor(1.0)),
    ("kJ", "J", UnitConv::Factor(1.0e3)),
    ("MJ", "J", UnitConv::Factor(1.0e6)),
    ("GJ", "J", UnitConv::Factor(1.0e9)),
    ("TJ", "J", UnitConv::Factor(1.0e12)),
    ("kWh", "J", UnitConv::Factor(3.6e6)),
    ("MWh", "J", UnitConv::Factor(3.6e9)),
    ("kWst", "J", UnitConv::Factor(3.6e6)),
    ("MWst", "J", UnitConv::Factor(3.6e9)),
    ("kcal", "J", UnitConv::Factor(4184.0)),
    ("cal", "J", UnitConv::Factor(4.184)),
    // Power
    ("W", "W", UnitConv::Factor(1.0)),
    ("mW", "W", UnitConv::Factor(1.0e-3)),
    ("kW", "W", UnitConv::Factor(1.0e3)),
    ("MW", "W", UnitConv::Factor(1.0e6)),
    ("GW", "W", UnitConv::Factor(1.0e9)),
    ("TW", "W", UnitConv::Factor(1.0e12)),
    // Electric potential
    ("V", "V", UnitConv::Factor(1.0)),
    ("mV", "V", UnitConv::Factor(1.0e-3)),
    ("kV", "V", UnitConv::Factor(1.0e3)),
    // Electric current
    ("A", "A", UnitConv::Factor(1.0)),
    ("mA", "A", UnitConv::Factor(1.0e-3)),
    // Frequency
    ("Hz", "Hz", UnitConv::Factor(1.0)),
    ("kHz", "Hz", UnitConv::Factor(1.0e3)),
    ("MHz", "Hz", UnitConv::Factor(1.0e6)),
    ("GHz", "Hz", UnitConv::Factor(1.0e9)),
    // Pressure
    ("Pa", "Pa", UnitConv::Factor(1.0)),
    ("hPa", "Pa", UnitConv::Factor(1.0e2)),
    ("kPa", "Pa", UnitConv::Factor(1.0e3)),
    // Angle
    ("°", "°", UnitConv::Factor(1.0)),
    // Percentage and promille
    ("%", "%", UnitConv::Factor(1.0)),
    ("‰", "‰", UnitConv::Factor(0.1)),
    // Velocity
    ("m/s", "m/s", UnitConv::Factor(1.0)),
    ("km/klst", "m/s", UnitConv::Factor(1000.0 / 3600.0)),
];

static BY_SURFACE: LazyLock<std::collections::HashMap<&'static str, (&'static str, UnitConv)>> =
    LazyLock::new(|| {
        SI_UNITS
            .iter()
            .map(|&(surface, base, conv)| (surface, (base, conv)))
            .collect()
    });

/// Surfaces sorted by descending length, so that longest-prefix matching
/// tries "km²" before "km" before "k".
static BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut v: Vec<&str> = SI_UNITS.iter().map(|&(s, _, _)| s).collect();
    v.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    v
});

pub fn is_unit(surface: &str) -> bool {
    BY_SURFACE.contains_key(surface)
}

/// Convert `value` given in `surface` units to the base unit.
pub fn convert(surface: &str, value: f64) -> Option<(&'static str, f64)> {
    BY_SURFACE
        .get(surface)
        .map(|&(base, conv)| (base, conv.apply(value)))
}

/// Longest unit that is a prefix of `s`. A unit ending in a letter must not
/// be followed by another word character ("220Volts" is not "220V").
pub fn unit_prefix(s: &str) -> Option<&'static str> {
    for &u in BY_LENGTH.iter() {
        if let Some(rest) = s.strip_prefix(u) {
            let ends_alpha = u.chars().last().is_some_and(|c| c.is_alphabetic());
            if ends_alpha {
                let blocked = rest
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_');
                if blocked {
                    continue;
                }
            }
            return Some(u);
        }
    }
    None
}
