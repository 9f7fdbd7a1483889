//! Reference DGA samples, one per Duval fault family.
//!
//! The label in each name is the fault the sample is meant to illustrate, not
//! necessarily the Triangle 1 zone it lands in.

use serde::Serialize;

use crate::types::GasSample;

/// Shared background gases of every preset.
const CO: f64 = 500.0;
const CO2: f64 = 3000.0;
const O2: f64 = 1500.0;
const N2: f64 = 50000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub sample: GasSample,
}

const fn preset(name: &'static str, h2: f64, ch4: f64, c2h6: f64, c2h4: f64, c2h2: f64) -> Preset {
    Preset {
        name,
        sample: GasSample {
            h2,
            ch4,
            c2h6,
            c2h4,
            c2h2,
            co: CO,
            co2: CO2,
            o2: O2,
            n2: N2,
        },
    }
}

const PRESETS: [Preset; 8] = [
    preset("Ex 1 (DT)", 152.0, 254.0, 908.0, 2250.0, 4830.0),
    preset("Ex 2 (D2)", 277.0, 142.0, 59.0, 802.0, 3840.0),
    preset("Ex 3 (D1)", 921.0, 42.0, 3.0, 75.0, 713.0),
    preset("Ex 4 (T3)", 36.0, 101.0, 35.0, 193.0, 0.0),
    preset("Ex 5 (T2)", 122.0, 50.0, 31.0, 69.0, 0.0),
    preset("Ex 6 (T1)", 104.0, 37.0, 11.0, 11.0, 0.0),
    preset("Ex 7 (PD)", 7907.0, 467.0, 249.0, 2.0, 0.0),
    preset("Ex 8 (N)", 8.0, 14.0, 22.0, 6.0, 0.0),
];

pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by name, case-insensitively. `"Ex 3"` and `"ex 3 (d1)"`
/// both match the third preset.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim().to_ascii_lowercase();
    PRESETS.iter().find(|p| {
        let full = p.name.to_ascii_lowercase();
        full == wanted || full.split(" (").next() == Some(wanted.as_str())
    })
}

impl Preset {
    /// Fault label carried in the name, e.g. `"DT"` for `"Ex 1 (DT)"`.
    pub fn label(&self) -> &'static str {
        self.name
            .rsplit_once('(')
            .map_or("", |(_, rest)| rest.trim_end_matches(')'))
    }
}
