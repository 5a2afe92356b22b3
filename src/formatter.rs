//! Locale-aware distance, time and maneuver text.

use serde_json::{Map, Value};

use crate::config::{FormatterOptions, UnitNames, UnitSystem};
use crate::response::{DirectionStep, Maneuver};
use crate::traits::RouteFormatter;

const METERS_PER_YARD: f64 = 0.9144;
const METERS_PER_MILE: f64 = 1609.344;

/// Default [`RouteFormatter`].
#[derive(Debug, Clone)]
pub struct Formatter {
    options: FormatterOptions,
    unit_names: UnitNames,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatterOptions::default())
    }
}

impl Formatter {
    pub fn new(options: FormatterOptions) -> Self {
        let unit_names = options.resolved_unit_names();
        Self {
            options,
            unit_names,
        }
    }

    /// Rounds coarser the larger the value is: a value whose leading digit
    /// is above 5 snaps to its leading power of ten, otherwise to half of it.
    pub fn round(&self, value: f64, sensitivity: f64) -> f64 {
        let sensitivity = if sensitivity > 0.0 {
            sensitivity
        } else if self.options.rounding_sensitivity > 0.0 {
            self.options.rounding_sensitivity
        } else {
            1.0
        };

        let magnitude = digit_count((value / sensitivity).floor());
        let pow10 = 10f64.powi(magnitude - 1);
        let leading = (value / pow10).floor();
        let step = if leading > 5.0 { pow10 } else { pow10 / 2.0 };

        (value / step).round() * step
    }
}

impl RouteFormatter for Formatter {
    fn format_distance(&self, meters: f64, sensitivity: Option<f64>) -> String {
        let sensitivity = sensitivity.unwrap_or(self.options.rounding_sensitivity);
        let names = &self.unit_names;

        let (mut value, unit) = match self.options.units {
            UnitSystem::Imperial => {
                let yards = meters / METERS_PER_YARD;
                if yards >= 1000.0 {
                    (self.round(meters / METERS_PER_MILE, sensitivity), &names.miles)
                } else {
                    (self.round(yards, sensitivity), &names.yards)
                }
            }
            UnitSystem::Metric => {
                let rounded = self.round(meters, sensitivity);
                if rounded >= 1000.0 {
                    (rounded / 1000.0, &names.kilometers)
                } else {
                    (rounded, &names.meters)
                }
            }
        };

        // Non-positive sensitivity: fixed point with -sensitivity decimals.
        if sensitivity <= 0.0 {
            let factor = 10f64.powi((-sensitivity).trunc() as i32);
            value = (value * factor).round() / factor;
        }

        let mut data = Map::new();
        data.insert("value".to_string(), Value::from(number(value)));
        data.insert("unit".to_string(), Value::from(unit.as_str()));
        self.template(&self.options.distance_template, &data)
    }

    fn format_time(&self, seconds: f64) -> String {
        let names = &self.unit_names;
        // Sub-minute durations keep whole seconds, longer ones snap to 30 s.
        let t = if seconds > 60.0 {
            (seconds / 30.0).round() * 30.0
        } else {
            seconds.round()
        };

        if t > 86400.0 {
            format!("{} {}", number((t / 3600.0).round()), names.hours)
        } else if t > 3600.0 {
            format!(
                "{} {} {} {}",
                number((t / 3600.0).floor()),
                names.hours,
                number(((t % 3600.0) / 60.0).floor()),
                names.minutes
            )
        } else if t > 300.0 {
            format!("{} {}", number((t / 60.0).round()), names.minutes)
        } else if t > 60.0 {
            let minutes = format!("{} {}", number((t / 60.0).floor()), names.minutes);
            let rest = t % 60.0;
            if rest != 0.0 {
                format!("{} {} {}", minutes, number(rest), names.seconds)
            } else {
                minutes
            }
        } else {
            format!("{} {}", number(t), names.seconds)
        }
    }

    fn icon_name(&self, step: &DirectionStep, index: usize, total_steps: usize) -> String {
        let icon = match step.maneuver() {
            Some(Maneuver::Depart) if index == 0 => "depart",
            Some(Maneuver::WaypointReached) => "via",
            Some(Maneuver::Roundabout) => "enter-roundabout",
            Some(Maneuver::Stop) if index + 1 >= total_steps => "arrive",
            Some(Maneuver::Stop) => "via",
            Some(Maneuver::Straight) => "continue",
            Some(Maneuver::BearRight) => "bear-right",
            Some(Maneuver::TurnRight) => "turn-right",
            Some(Maneuver::SharpRight) => "sharp-right",
            Some(Maneuver::UTurn) => "u-turn",
            Some(Maneuver::SharpLeft) => "sharp-left",
            Some(Maneuver::TurnLeft) => "turn-left",
            Some(Maneuver::BearLeft) => "bear-left",
            _ => "",
        };
        icon.to_string()
    }

    fn format_step(&self, step: &DirectionStep, overrides: &Map<String, Value>) -> String {
        let mut data = step.attributes.clone();
        data.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.template(step.text(), &data)
    }

    fn template(&self, template: &str, data: &Map<String, Value>) -> String {
        render_template(template, data)
    }
}

/// Substitutes `{key}` placeholders from `data`.
///
/// Keys are applied in insertion order and only the first occurrence of
/// each is replaced; repeated placeholders for the same key stay in the
/// output. Placeholders without a matching key are left as they are.
pub fn render_template(template: &str, data: &Map<String, Value>) -> String {
    let mut out = template.to_string();
    for (key, value) in data {
        let placeholder = format!("{{{}}}", key);
        out = out.replacen(&placeholder, &display_value(value), 1);
    }
    out
}

/// Plain text form of a template value: strings unquoted, whole numbers
/// without a fractional part.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => number(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn number(value: f64) -> String {
    // Avoid printing "-0".
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

fn digit_count(value: f64) -> i32 {
    format!("{:.0}", value.abs()).len() as i32
}
