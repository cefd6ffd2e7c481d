use crate::utils::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nominal cooling capacity of the unit being installed.
///
/// Only the residential range covered by the advisory table is representable;
/// anything else must be rejected at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capacity {
    #[serde(rename = "1")]
    OneTon,
    #[serde(rename = "1.5")]
    OneAndHalfTon,
    #[serde(rename = "2")]
    TwoTon,
    #[serde(rename = "3")]
    ThreeTon,
}

impl Capacity {
    pub const ALL: [Capacity; 4] = [
        Capacity::OneTon,
        Capacity::OneAndHalfTon,
        Capacity::TwoTon,
        Capacity::ThreeTon,
    ];

    /// Maps a commercial tonnage rung onto the advisory range. Rungs above
    /// 3 Ton have no single-circuit answer and return `None`; 0.75 Ton is
    /// wired like a 1 Ton unit.
    pub fn from_tonnage(tonnage: Tonnage) -> Option<Capacity> {
        match tonnage {
            Tonnage::ThreeQuarter | Tonnage::One => Some(Capacity::OneTon),
            Tonnage::OneAndHalf => Some(Capacity::OneAndHalfTon),
            Tonnage::Two => Some(Capacity::TwoTon),
            Tonnage::Three => Some(Capacity::ThreeTon),
            Tonnage::Four | Tonnage::FivePlus => None,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Capacity::OneTon => "1 Ton",
            Capacity::OneAndHalfTon => "1.5 Ton",
            Capacity::TwoTon => "2 Ton",
            Capacity::ThreeTon => "3 Ton",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Capacity {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Capacity::OneTon),
            "1.5" => Ok(Capacity::OneAndHalfTon),
            "2" => Ok(Capacity::TwoTon),
            "3" => Ok(Capacity::ThreeTon),
            other => Err(AdvisorError::InvalidInputError {
                field: "capacity".to_string(),
                value: other.to_string(),
                reason: "expected one of: 1, 1.5, 2, 3 (tons)".to_string(),
            }),
        }
    }
}

/// Supply voltage of the branch circuit. 110 V circuits take a single-pole
/// breaker, 220 V circuits a double-pole one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voltage {
    #[serde(rename = "110")]
    V110,
    #[serde(rename = "220")]
    V220,
}

impl Voltage {
    pub const ALL: [Voltage; 2] = [Voltage::V110, Voltage::V220];
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Voltage::V110 => write!(f, "110V"),
            Voltage::V220 => write!(f, "220V"),
        }
    }
}

impl FromStr for Voltage {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches(['v', 'V']) {
            "110" => Ok(Voltage::V110),
            "220" => Ok(Voltage::V220),
            other => Err(AdvisorError::InvalidInputError {
                field: "voltage".to_string(),
                value: other.to_string(),
                reason: "expected 110 or 220".to_string(),
            }),
        }
    }
}

/// Compressor technology of the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    Standard,
    Inverter,
}

impl Technology {
    pub const ALL: [Technology; 2] = [Technology::Standard, Technology::Inverter];
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Technology::Standard => write!(f, "Standard (On/Off)"),
            Technology::Inverter => write!(f, "Inverter"),
        }
    }
}

impl FromStr for Technology {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" => Ok(Technology::Standard),
            "inverter" => Ok(Technology::Inverter),
            other => Err(AdvisorError::InvalidInputError {
                field: "technology".to_string(),
                value: other.to_string(),
                reason: "expected standard or inverter".to_string(),
            }),
        }
    }
}

/// Electrical run length between the panel and the unit.
/// Short runs are under 20 m, long runs 20-50 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Short,
    Long,
}

impl Distance {
    pub const ALL: [Distance; 2] = [Distance::Short, Distance::Long];
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Short => write!(f, "Short (< 20 m)"),
            Distance::Long => write!(f, "Long (20-50 m)"),
        }
    }
}

impl FromStr for Distance {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Distance::Short),
            "long" => Ok(Distance::Long),
            other => Err(AdvisorError::InvalidInputError {
                field: "distance".to_string(),
                value: other.to_string(),
                reason: "expected short (< 20 m) or long (20-50 m)".to_string(),
            }),
        }
    }
}

/// One lookup into the supply-circuit advisory table.
/// Constructed fresh per lookup; the table is total over this domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizingInput {
    pub capacity: Capacity,
    pub voltage: Voltage,
    pub technology: Technology,
    pub distance: Distance,
}

impl SizingInput {
    /// Enumerates every tuple in the input domain, in table order.
    /// Used by the matrix export and the exhaustive coverage tests.
    pub fn all() -> impl Iterator<Item = SizingInput> {
        Capacity::ALL.iter().flat_map(|&capacity| {
            Voltage::ALL.iter().flat_map(move |&voltage| {
                Technology::ALL.iter().flat_map(move |&technology| {
                    Distance::ALL.iter().map(move |&distance| SizingInput {
                        capacity,
                        voltage,
                        technology,
                        distance,
                    })
                })
            })
        })
    }
}

/// Recommended conductor size, by AWG label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WireGauge {
    #[serde(rename = "14 AWG")]
    Awg14,
    #[serde(rename = "12 AWG")]
    Awg12,
    #[serde(rename = "10 AWG")]
    Awg10,
    #[serde(rename = "8 AWG")]
    Awg8,
}

impl WireGauge {
    pub fn label(&self) -> &'static str {
        match self {
            WireGauge::Awg14 => "14 AWG",
            WireGauge::Awg12 => "12 AWG",
            WireGauge::Awg10 => "10 AWG",
            WireGauge::Awg8 => "8 AWG",
        }
    }
}

impl fmt::Display for WireGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Breaker protecting the branch circuit: pole count plus current rating,
/// rendered in the installer-facing "2 x 20A" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerRating {
    pub poles: u8,
    pub amps: u16,
}

impl BreakerRating {
    pub const fn single(amps: u16) -> Self {
        Self { poles: 1, amps }
    }

    pub const fn double(amps: u16) -> Self {
        Self { poles: 2, amps }
    }
}

impl fmt::Display for BreakerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}A", self.poles, self.amps)
    }
}

impl Serialize for BreakerRating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result of a supply-circuit lookup. The note is informational, never a
/// failure signal: out-of-norm combinations still get a conservative answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingResult {
    pub wire_gauge: WireGauge,
    pub breaker: BreakerRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Average ambient conditions of the install site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Temperate,
    Warm,
    VeryWarm,
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClimateZone::Temperate => write!(f, "Temperate (15-25 \u{b0}C)"),
            ClimateZone::Warm => write!(f, "Warm (25-35 \u{b0}C)"),
            ClimateZone::VeryWarm => write!(f, "Very warm (> 35 \u{b0}C)"),
        }
    }
}

impl FromStr for ClimateZone {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperate" => Ok(ClimateZone::Temperate),
            "warm" => Ok(ClimateZone::Warm),
            "very_warm" | "very-warm" => Ok(ClimateZone::VeryWarm),
            other => Err(AdvisorError::InvalidInputError {
                field: "zone".to_string(),
                value: other.to_string(),
                reason: "expected temperate, warm or very_warm".to_string(),
            }),
        }
    }
}

/// Compass orientation of a wall or window, from the install site's point
/// of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Orientation::North => "N",
            Orientation::NorthEast => "NE",
            Orientation::East => "E",
            Orientation::SouthEast => "SE",
            Orientation::South => "S",
            Orientation::SouthWest => "SW",
            Orientation::West => "W",
            Orientation::NorthWest => "NW",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMaterial {
    Brick,
    Concrete,
    Drywall,
    Insulated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunExposure {
    DirectSun,
    Shade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingType {
    ConcreteSlab,
    Attic,
    MetalSheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingColor {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassType {
    Single,
    Double,
    Thermal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowProtection {
    None,
    Curtains,
    Blinds,
    Awning,
}

/// One exterior wall section of the surveyed room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSection {
    pub orientation: Orientation,
    pub area_m2: f64,
    pub material: WallMaterial,
    #[serde(default = "WallSection::default_exposure")]
    pub exposure: SunExposure,
}

impl WallSection {
    fn default_exposure() -> SunExposure {
        SunExposure::DirectSun
    }
}

/// One window of the surveyed room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSection {
    pub orientation: Orientation,
    pub area_m2: f64,
    #[serde(default = "WindowSection::default_glass")]
    pub glass: GlassType,
    #[serde(default = "WindowSection::default_protection")]
    pub protection: WindowProtection,
}

impl WindowSection {
    fn default_glass() -> GlassType {
        GlassType::Single
    }

    fn default_protection() -> WindowProtection {
        WindowProtection::None
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CeilingSection {
    pub kind: CeilingType,
    #[serde(default = "CeilingSection::default_color")]
    pub color: CeilingColor,
}

impl CeilingSection {
    fn default_color() -> CeilingColor {
        CeilingColor::Light
    }
}

impl Default for CeilingSection {
    fn default() -> Self {
        Self {
            kind: CeilingType::ConcreteSlab,
            color: CeilingColor::Light,
        }
    }
}

/// Heat sources inside the room.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InternalLoads {
    #[serde(default)]
    pub occupants: u32,
    #[serde(default)]
    pub stove: bool,
    #[serde(default)]
    pub equipment_watts: f64,
    #[serde(default)]
    pub lighting_watts: f64,
}

/// Full description of a surveyed room, as filled in on site.
/// Ceiling and floor areas are derived from the footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSurvey {
    pub length_m: f64,
    pub width_m: f64,
    #[serde(default = "RoomSurvey::default_height")]
    pub height_m: f64,
    pub climate: ClimateZone,
    #[serde(default)]
    pub walls: Vec<WallSection>,
    #[serde(default)]
    pub windows: Vec<WindowSection>,
    #[serde(default)]
    pub ceiling: CeilingSection,
    #[serde(default)]
    pub loads: InternalLoads,
}

impl RoomSurvey {
    fn default_height() -> f64 {
        2.5
    }

    pub fn floor_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    pub fn volume_m3(&self) -> f64 {
        self.floor_area_m2() * self.height_m
    }
}

/// Commercial equipment rungs the market actually sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tonnage {
    #[serde(rename = "0.75")]
    ThreeQuarter,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "1.5")]
    OneAndHalf,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5+")]
    FivePlus,
}

impl fmt::Display for Tonnage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tonnage::ThreeQuarter => "0.75 Ton",
            Tonnage::One => "1 Ton",
            Tonnage::OneAndHalf => "1.5 Ton",
            Tonnage::Two => "2 Ton",
            Tonnage::Three => "3 Ton",
            Tonnage::Four => "4 Ton",
            Tonnage::FivePlus => "5+ Ton",
        };
        write!(f, "{}", label)
    }
}

/// Equipment recommendation derived from an estimated load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonnageAdvice {
    pub tonnage: Tonnage,
    pub commercial_btu: u32,
}

/// Per-term heat-gain breakdown of a detailed estimate, in BTU/h.
/// Terms are rounded to whole BTU at computation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LoadBreakdown {
    pub conduction: f64,
    pub solar: f64,
    pub occupants: f64,
    pub equipment: f64,
    pub stove: f64,
    pub lighting: f64,
    pub infiltration: f64,
}

impl LoadBreakdown {
    pub fn subtotal(&self) -> f64 {
        self.conduction
            + self.solar
            + self.occupants
            + self.equipment
            + self.stove
            + self.lighting
            + self.infiltration
    }
}

/// Result of the quick area-based estimate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickEstimate {
    pub area_m2: f64,
    pub load_btu: f64,
    pub recommendation: TonnageAdvice,
}

/// Result of the detailed survey estimate, safety factor applied.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyEstimate {
    pub area_m2: f64,
    pub volume_m3: f64,
    pub breakdown: LoadBreakdown,
    pub subtotal_btu: f64,
    pub total_btu: f64,
    pub recommendation: TonnageAdvice,
}

/// Refrigerant gases covered by the suction-pressure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Refrigerant {
    #[serde(rename = "R-410A")]
    R410A,
    #[serde(rename = "R-32")]
    R32,
    #[serde(rename = "R-22")]
    R22,
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refrigerant::R410A => write!(f, "R-410A"),
            Refrigerant::R32 => write!(f, "R-32"),
            Refrigerant::R22 => write!(f, "R-22"),
        }
    }
}

impl FromStr for Refrigerant {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "r410a" | "410a" => Ok(Refrigerant::R410A),
            "r32" | "32" => Ok(Refrigerant::R32),
            "r22" | "22" => Ok(Refrigerant::R22),
            other => Err(AdvisorError::InvalidInputError {
                field: "gas".to_string(),
                value: other.to_string(),
                reason: "expected r410a, r32 or r22".to_string(),
            }),
        }
    }
}

/// Expected suction pressure range at a given ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureBand {
    pub min_psi: f64,
    pub max_psi: f64,
    pub min_bar: f64,
    pub max_bar: f64,
}

/// Electrical supply parameters of the install site, used to chain the
/// circuit advisory onto a survey estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SupplyParams {
    pub voltage: Voltage,
    pub technology: Technology,
    pub run: Distance,
}

/// Circuit advice attached to a survey report: the lookup that was made
/// plus its result.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitAdvice {
    pub input: SizingInput,
    pub result: SizingResult,
}

/// Output formats a survey job can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Everything the advisor produced for one survey job.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub job: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub estimate: SurveyEstimate,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit: Option<CircuitAdvice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_parse_round_trip() {
        assert_eq!("1.5".parse::<Capacity>().unwrap(), Capacity::OneAndHalfTon);
        assert_eq!("3".parse::<Capacity>().unwrap(), Capacity::ThreeTon);
        assert!("2.5".parse::<Capacity>().is_err());
        assert!("".parse::<Capacity>().is_err());
    }

    #[test]
    fn test_voltage_parse_accepts_unit_suffix() {
        assert_eq!("220".parse::<Voltage>().unwrap(), Voltage::V220);
        assert_eq!("110V".parse::<Voltage>().unwrap(), Voltage::V110);
        assert!("127".parse::<Voltage>().is_err());
    }

    #[test]
    fn test_refrigerant_parse_is_lenient_about_dashes() {
        assert_eq!("R-410A".parse::<Refrigerant>().unwrap(), Refrigerant::R410A);
        assert_eq!("r32".parse::<Refrigerant>().unwrap(), Refrigerant::R32);
        assert!("r134a".parse::<Refrigerant>().is_err());
    }

    #[test]
    fn test_sizing_input_enumerates_full_domain() {
        let all: Vec<_> = SizingInput::all().collect();
        assert_eq!(all.len(), 32);
        // No duplicates.
        let unique: std::collections::HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn test_breaker_rating_display() {
        assert_eq!(BreakerRating::single(15).to_string(), "1 x 15A");
        assert_eq!(BreakerRating::double(20).to_string(), "2 x 20A");
    }

    #[test]
    fn test_tonnage_to_capacity_mapping() {
        assert_eq!(
            Capacity::from_tonnage(Tonnage::ThreeQuarter),
            Some(Capacity::OneTon)
        );
        assert_eq!(
            Capacity::from_tonnage(Tonnage::Three),
            Some(Capacity::ThreeTon)
        );
        assert_eq!(Capacity::from_tonnage(Tonnage::Four), None);
    }
}
