//! HUC Status Tool
//!
//! Runtime status of the service and the usage guide for assistants.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::units::registry::{
    INGREDIENT_DENSITIES, PIECE_UNITS, UNIT_ALIASES, VOLUME_UNITS, WEIGHT_UNITS,
};

/// Unit conversion instructions for AI assistants
pub const UNIT_INSTRUCTIONS: &str = r#"
# HUC Unit Conversion Instructions

The Household Unit Converter reconciles the units found in recipes,
pantry inventory and imported shopping lists.

## Unit Categories

| Category | Base unit | Examples |
|----------|-----------|----------|
| **volume** | ml | ml, cl, dl, l, tsp, tbsp, cup, fl oz, pint, quart, gallon, cuillère à café (cac), cuillère à soupe (cas), tasse, verre, bol, louche, pincée |
| **weight** | g | mg, g, kg, oz, lb, livre (500 g) |
| **piece** | none | pièce, tranche, gousse, sachet, boîte, botte, œuf... |

Plurals, abbreviations and accent-less spellings are accepted
("cuillères à soupe", "c.à.s.", "cups", "grammes", "oeufs").
Call `normalize_unit` to see how a spelling is understood and
`list_available_units` for the full catalog.

## Converting

- **Same category** (cup -> ml, g -> lb): exact. Use `convert_quantity`.
- **Volume <-> weight** (cup -> g): pass `ingredient`. The engine looks up
  the ingredient's density and the result is marked `approximation: true`.
  Show it with "≈".
- **Pieces never convert.** "2 gousses" cannot become grams; keep the
  original text.

All results are rounded to 2 decimals.

## Quantity Text

`convert_text` takes strings like "2.5 cups", "1,5 kg" or "1 1/2 tasses"
and returns "591.47 ml" style output. When the text cannot be parsed or
converted it comes back unchanged with `converted: false`. Display the
original value in that case.

## Failure Reasons

`convert_quantity` reports why a conversion was refused:
- `unknown_unit` - a unit is not in the registry
- `incompatible_category` - e.g. piece to weight, or volume to weight without ingredient
- `density_unavailable` - ingredient given but no density known
- `invalid_value` - the amount is not a finite number, or the result overflows

`convert_text` reports the same reasons, plus `unparsable_quantity` when no
amount can be read from the text.
"#;

/// Service status information
#[derive(Debug, Serialize)]
pub struct HucStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub registry: RegistrySizes,
    pub conversions_succeeded: u64,
    pub conversions_failed: u64,
}

/// Entry counts for the static tables
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RegistrySizes {
    pub volume_units: usize,
    pub weight_units: usize,
    pub piece_units: usize,
    pub aliases: usize,
    pub densities: usize,
}

impl RegistrySizes {
    pub fn current() -> Self {
        Self {
            volume_units: VOLUME_UNITS.len(),
            weight_units: WEIGHT_UNITS.len(),
            piece_units: PIECE_UNITS.len(),
            aliases: UNIT_ALIASES.len(),
            densities: INGREDIENT_DENSITIES.len(),
        }
    }
}

/// Tracks runtime state for the status tool
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    conversions_succeeded: u64,
    conversions_failed: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            conversions_succeeded: 0,
            conversions_failed: 0,
        }
    }

    /// Count a conversion request
    pub fn record_conversion(&mut self, converted: bool) {
        if converted {
            self.conversions_succeeded += 1;
        } else {
            self.conversions_failed += 1;
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> HucStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        HucStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            registry: RegistrySizes::current(),
            conversions_succeeded: self.conversions_succeeded,
            conversions_failed: self.conversions_failed,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
