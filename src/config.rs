//! Configuration values and localization tables.
//!
//! Every struct carries the defaults of the routing widget and deserializes
//! with `#[serde(default)]`, so a partial JSON document only overrides the
//! keys it names. Keys are camelCase; unknown keys are rejected.

use serde::Deserialize;

use crate::error::RouteError;

pub const DEFAULT_SOLVE_URL: &str = "https://www.geoportal.lt/map/proxy/routing/Route/solve";

/// EPSG:4326, the spatial reference stops are sent and geometry is returned in.
pub const WGS84_WKID: u32 = 4326;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Lt,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Lt => "lt",
        }
    }

    /// Localized unit abbreviations.
    pub fn unit_names(self) -> UnitNames {
        let english = UnitNames {
            meters: "m".to_string(),
            kilometers: "km".to_string(),
            yards: "yd".to_string(),
            miles: "mi".to_string(),
            hours: "h".to_string(),
            minutes: "min".to_string(),
            seconds: "s".to_string(),
        };

        match self {
            Language::En => english,
            Language::Lt => UnitNames {
                miles: "my".to_string(),
                ..english
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct UnitNames {
    pub meters: String,
    pub kilometers: String,
    pub yards: String,
    pub miles: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Default for UnitNames {
    fn default() -> Self {
        Language::En.unit_names()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatterOptions {
    pub units: UnitSystem,
    pub language: Language,
    /// Explicit unit names. Falls back to the language's table when absent.
    pub unit_names: Option<UnitNames>,
    pub rounding_sensitivity: f64,
    pub distance_template: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            language: Language::En,
            unit_names: None,
            rounding_sensitivity: 1.0,
            distance_template: "{value} {unit}".to_string(),
        }
    }
}

impl FormatterOptions {
    pub fn resolved_unit_names(&self) -> UnitNames {
        self.unit_names
            .clone()
            .unwrap_or_else(|| self.language.unit_names())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BuilderOptions {
    pub summary_template: String,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            summary_template: "<h2>{name}</h2><h3>{distance}, {time}</h3>".to_string(),
        }
    }
}

/// Option flags sent with every solve request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SolverOptions {
    pub return_directions: bool,
    pub return_routes: bool,
    pub return_z: bool,
    pub return_stops: bool,
    pub return_barriers: bool,
    pub return_polygon_barriers: bool,
    pub return_polyline_barriers: bool,
    #[serde(rename = "outSR")]
    pub out_sr: u32,
    pub output_lines: String,
    pub impedance_attribute_name: String,
    pub directions_language: Language,
    pub travel_mode: Option<String>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            return_directions: true,
            return_routes: true,
            return_z: true,
            return_stops: true,
            return_barriers: false,
            return_polygon_barriers: false,
            return_polyline_barriers: false,
            out_sr: WGS84_WKID,
            output_lines: "esriNAOutputLineTrueShape".to_string(),
            impedance_attribute_name: "minutes".to_string(),
            directions_language: Language::En,
            travel_mode: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            color: "#ea4106".to_string(),
            fill_color: "white".to_string(),
            opacity: 1.0,
            fill_opacity: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DrawerOptions {
    pub point_zoom: u8,
    pub direction_marker_style: MarkerStyle,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            point_zoom: 16,
            direction_marker_style: MarkerStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RouterConfig {
    /// Propagated to the solver's directions language and the formatter.
    pub language: Language,
    pub url: String,
    pub timeout_secs: u64,
    pub solver: SolverOptions,
    pub formatter: FormatterOptions,
    pub builder: BuilderOptions,
    pub drawer: DrawerOptions,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            url: DEFAULT_SOLVE_URL.to_string(),
            timeout_secs: 15,
            solver: SolverOptions::default(),
            formatter: FormatterOptions::default(),
            builder: BuilderOptions::default(),
            drawer: DrawerOptions::default(),
        }
    }
}

impl RouterConfig {
    /// Parses a partial JSON configuration, merged over the defaults.
    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copies the top-level language into the nested option sets.
    pub fn localized(mut self) -> Self {
        self.solver.directions_language = self.language;
        self.formatter.language = self.language;
        self
    }
}
