//! Thermal-load estimation.
//!
//! Two tiers: a quick area-times-climate-factor estimate, and a detailed
//! survey estimate that sums conduction, solar, internal and infiltration
//! heat gains and applies a fixed safety factor. Both end in the same
//! commercial tonnage recommendation ladder.

use crate::domain::model::{
    Capacity, CeilingColor, CeilingType, ClimateZone, GlassType, LoadBreakdown, Orientation,
    QuickEstimate, RoomSurvey, SunExposure, SurveyEstimate, Tonnage, TonnageAdvice, WallMaterial,
    WindowProtection,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative_measure, validate_positive_measure};

/// Margin applied on top of the summed heat gains.
pub const SAFETY_FACTOR: f64 = 1.10;

/// Conversion for electrical loads.
pub const BTU_PER_WATT: f64 = 3.412;

/// Sensible plus latent gain per occupant at rest.
pub const BTU_PER_OCCUPANT: f64 = 600.0;

/// Flat allowance for a kitchen stove in the conditioned space.
pub const STOVE_BTU: f64 = 8_000.0;

/// Air-leakage gain per cubic meter of room volume, before the climate
/// multiplier.
const INFILTRATION_BTU_PER_M3: f64 = 10.0;

/// BTU/h per m2 of floor area for the quick estimate.
fn zone_area_factor(zone: ClimateZone) -> f64 {
    match zone {
        ClimateZone::Temperate => 500.0,
        ClimateZone::Warm => 600.0,
        ClimateZone::VeryWarm => 700.0,
    }
}

/// Scales the envelope terms (conduction, infiltration) of the detailed
/// estimate by outdoor severity.
fn zone_envelope_factor(zone: ClimateZone) -> f64 {
    match zone {
        ClimateZone::Temperate => 1.0,
        ClimateZone::Warm => 1.15,
        ClimateZone::VeryWarm => 1.3,
    }
}

/// Conduction gain per m2 of exposed wall, by construction.
fn wall_factor(material: WallMaterial) -> f64 {
    match material {
        WallMaterial::Brick => 15.0,
        WallMaterial::Concrete => 18.0,
        WallMaterial::Drywall => 22.0,
        WallMaterial::Insulated => 8.0,
    }
}

fn exposure_factor(exposure: SunExposure) -> f64 {
    match exposure {
        SunExposure::DirectSun => 1.3,
        SunExposure::Shade => 1.0,
    }
}

/// Conduction gain per m2 of ceiling, by roof construction.
fn ceiling_factor(kind: CeilingType) -> f64 {
    match kind {
        CeilingType::ConcreteSlab => 20.0,
        CeilingType::Attic => 12.0,
        CeilingType::MetalSheet => 35.0,
    }
}

fn ceiling_color_factor(color: CeilingColor) -> f64 {
    match color {
        CeilingColor::Light => 1.0,
        CeilingColor::Dark => 1.2,
    }
}

/// Solar gain per m2 of glazing by orientation (northern hemisphere).
fn solar_gain(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::North => 95.0,
        Orientation::NorthEast => 140.0,
        Orientation::East => 220.0,
        Orientation::SouthEast => 230.0,
        Orientation::South => 250.0,
        Orientation::SouthWest => 285.0,
        Orientation::West => 275.0,
        Orientation::NorthWest => 150.0,
    }
}

fn glass_factor(glass: GlassType) -> f64 {
    match glass {
        GlassType::Single => 1.0,
        GlassType::Double => 0.75,
        GlassType::Thermal => 0.55,
    }
}

fn protection_factor(protection: WindowProtection) -> f64 {
    match protection {
        WindowProtection::None => 1.0,
        WindowProtection::Curtains => 0.8,
        WindowProtection::Blinds => 0.65,
        WindowProtection::Awning => 0.5,
    }
}

/// Commercial equipment ladder: smallest unit whose rating covers the load.
pub fn recommend_equipment(load_btu: f64) -> TonnageAdvice {
    let (tonnage, commercial_btu) = if load_btu <= 9_000.0 {
        (Tonnage::ThreeQuarter, 9_000)
    } else if load_btu <= 12_000.0 {
        (Tonnage::One, 12_000)
    } else if load_btu <= 18_000.0 {
        (Tonnage::OneAndHalf, 18_000)
    } else if load_btu <= 24_000.0 {
        (Tonnage::Two, 24_000)
    } else if load_btu <= 36_000.0 {
        (Tonnage::Three, 36_000)
    } else if load_btu <= 48_000.0 {
        (Tonnage::Four, 48_000)
    } else {
        (Tonnage::FivePlus, 60_000)
    };
    TonnageAdvice {
        tonnage,
        commercial_btu,
    }
}

/// Quick estimate from footprint and climate zone alone.
pub fn quick_estimate(length_m: f64, width_m: f64, zone: ClimateZone) -> Result<QuickEstimate> {
    validate_positive_measure("length", length_m)?;
    validate_positive_measure("width", width_m)?;

    let area_m2 = length_m * width_m;
    let load_btu = (area_m2 * zone_area_factor(zone)).round();
    Ok(QuickEstimate {
        area_m2,
        load_btu,
        recommendation: recommend_equipment(load_btu),
    })
}

/// Detailed estimate from a full room survey.
///
/// Each breakdown term is rounded to whole BTU; the safety factor is applied
/// to the subtotal, rounded again.
pub fn estimate_survey(survey: &RoomSurvey) -> Result<SurveyEstimate> {
    validate_positive_measure("room.length_m", survey.length_m)?;
    validate_positive_measure("room.width_m", survey.width_m)?;
    validate_positive_measure("room.height_m", survey.height_m)?;
    validate_non_negative_measure("room.loads.equipment_watts", survey.loads.equipment_watts)?;
    validate_non_negative_measure("room.loads.lighting_watts", survey.loads.lighting_watts)?;
    for (i, wall) in survey.walls.iter().enumerate() {
        validate_positive_measure(&format!("room.walls[{}].area_m2", i), wall.area_m2)?;
    }
    for (i, window) in survey.windows.iter().enumerate() {
        validate_positive_measure(&format!("room.windows[{}].area_m2", i), window.area_m2)?;
    }

    let area_m2 = survey.floor_area_m2();
    let volume_m3 = survey.volume_m3();
    let envelope = zone_envelope_factor(survey.climate);

    let wall_conduction: f64 = survey
        .walls
        .iter()
        .map(|w| w.area_m2 * wall_factor(w.material) * exposure_factor(w.exposure))
        .sum();
    let ceiling_conduction = area_m2
        * ceiling_factor(survey.ceiling.kind)
        * ceiling_color_factor(survey.ceiling.color);

    let solar: f64 = survey
        .windows
        .iter()
        .map(|w| {
            w.area_m2 * solar_gain(w.orientation) * glass_factor(w.glass)
                * protection_factor(w.protection)
        })
        .sum();

    let loads = &survey.loads;
    let breakdown = LoadBreakdown {
        conduction: ((wall_conduction + ceiling_conduction) * envelope).round(),
        solar: solar.round(),
        occupants: (f64::from(loads.occupants) * BTU_PER_OCCUPANT).round(),
        equipment: (loads.equipment_watts * BTU_PER_WATT).round(),
        stove: if loads.stove { STOVE_BTU } else { 0.0 },
        lighting: (loads.lighting_watts * BTU_PER_WATT).round(),
        infiltration: (volume_m3 * INFILTRATION_BTU_PER_M3 * envelope).round(),
    };

    let subtotal_btu = breakdown.subtotal();
    let total_btu = (subtotal_btu * SAFETY_FACTOR).round();

    Ok(SurveyEstimate {
        area_m2,
        volume_m3,
        breakdown,
        subtotal_btu,
        total_btu,
        recommendation: recommend_equipment(total_btu),
    })
}

/// Threshold rules over the breakdown, turned into installer-facing advice.
/// Informational only; an empty list is a perfectly fine outcome.
pub fn recommendations(estimate: &SurveyEstimate) -> Vec<String> {
    let mut advice = Vec::new();
    let subtotal = estimate.subtotal_btu;
    if subtotal <= 0.0 {
        return advice;
    }
    let breakdown = &estimate.breakdown;

    let solar_share = breakdown.solar / subtotal;
    if solar_share > 0.30 {
        advice.push(format!(
            "Solar gain through glazing is {:.0}% of the load. Awnings, blinds or \
             reflective film on the exposed windows would let a smaller unit cope.",
            solar_share * 100.0
        ));
    }

    let conduction_share = breakdown.conduction / subtotal;
    if conduction_share > 0.45 {
        advice.push(format!(
            "Envelope conduction is {:.0}% of the load. Roof or wall insulation \
             would pay for itself faster than extra cooling capacity.",
            conduction_share * 100.0
        ));
    }

    let infiltration_share = breakdown.infiltration / subtotal;
    if infiltration_share > 0.15 {
        advice.push(
            "Air leakage is a significant share of the load; seal door and window \
             gaps before sizing up the equipment."
                .to_string(),
        );
    }

    if breakdown.stove > 0.0 {
        advice.push(
            "A stove in the conditioned space adds a large fixed load; a range \
             hood vented outdoors reduces it considerably."
                .to_string(),
        );
    }

    if Capacity::from_tonnage(estimate.recommendation.tonnage).is_none() {
        advice.push(format!(
            "The estimated load calls for {} of capacity; consider splitting the \
             space across two or more units instead of one oversized system.",
            estimate.recommendation.tonnage
        ));
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        CeilingSection, InternalLoads, WallSection, WindowSection,
    };

    #[test]
    fn test_quick_estimate_matches_area_factor() {
        let estimate = quick_estimate(5.0, 4.0, ClimateZone::Warm).unwrap();
        assert_eq!(estimate.area_m2, 20.0);
        assert_eq!(estimate.load_btu, 12_000.0);
        assert_eq!(estimate.recommendation.tonnage, Tonnage::One);
        assert_eq!(estimate.recommendation.commercial_btu, 12_000);
    }

    #[test]
    fn test_quick_estimate_rejects_bad_dimensions() {
        assert!(quick_estimate(0.0, 4.0, ClimateZone::Warm).is_err());
        assert!(quick_estimate(5.0, -1.0, ClimateZone::Temperate).is_err());
    }

    #[test]
    fn test_equipment_ladder_boundaries() {
        assert_eq!(recommend_equipment(9_000.0).tonnage, Tonnage::ThreeQuarter);
        assert_eq!(recommend_equipment(9_001.0).tonnage, Tonnage::One);
        assert_eq!(recommend_equipment(18_000.0).tonnage, Tonnage::OneAndHalf);
        assert_eq!(recommend_equipment(36_000.0).tonnage, Tonnage::Three);
        assert_eq!(recommend_equipment(50_000.0).tonnage, Tonnage::FivePlus);
        assert_eq!(recommend_equipment(50_000.0).commercial_btu, 60_000);
    }

    fn bare_survey() -> RoomSurvey {
        RoomSurvey {
            length_m: 5.0,
            width_m: 4.0,
            height_m: 2.5,
            climate: ClimateZone::Temperate,
            walls: vec![],
            windows: vec![],
            ceiling: CeilingSection::default(),
            loads: InternalLoads::default(),
        }
    }

    #[test]
    fn test_survey_internal_loads_are_additive() {
        let mut survey = bare_survey();
        survey.loads = InternalLoads {
            occupants: 2,
            stove: true,
            equipment_watts: 500.0,
            lighting_watts: 200.0,
        };
        let estimate = estimate_survey(&survey).unwrap();
        assert_eq!(estimate.breakdown.occupants, 1_200.0);
        assert_eq!(estimate.breakdown.stove, 8_000.0);
        assert_eq!(estimate.breakdown.equipment, (500.0_f64 * 3.412).round());
        assert_eq!(estimate.breakdown.lighting, (200.0_f64 * 3.412).round());
    }

    #[test]
    fn test_survey_conduction_uses_exposure_and_color() {
        let mut shaded = bare_survey();
        shaded.walls = vec![WallSection {
            orientation: Orientation::West,
            area_m2: 10.0,
            material: WallMaterial::Brick,
            exposure: SunExposure::Shade,
        }];
        let mut sunny = shaded.clone();
        sunny.walls[0].exposure = SunExposure::DirectSun;

        let shaded_estimate = estimate_survey(&shaded).unwrap();
        let sunny_estimate = estimate_survey(&sunny).unwrap();
        assert!(sunny_estimate.breakdown.conduction > shaded_estimate.breakdown.conduction);
    }

    #[test]
    fn test_survey_total_applies_safety_factor() {
        let mut survey = bare_survey();
        survey.loads.occupants = 4;
        let estimate = estimate_survey(&survey).unwrap();
        assert_eq!(
            estimate.total_btu,
            (estimate.subtotal_btu * SAFETY_FACTOR).round()
        );
        assert!(estimate.total_btu > estimate.subtotal_btu);
    }

    #[test]
    fn test_survey_rejects_nonpositive_wall_area() {
        let mut survey = bare_survey();
        survey.walls = vec![WallSection {
            orientation: Orientation::North,
            area_m2: 0.0,
            material: WallMaterial::Concrete,
            exposure: SunExposure::Shade,
        }];
        assert!(estimate_survey(&survey).is_err());
    }

    #[test]
    fn test_recommendations_flag_dominant_solar() {
        let mut survey = bare_survey();
        survey.windows = vec![WindowSection {
            orientation: Orientation::West,
            area_m2: 30.0,
            glass: GlassType::Single,
            protection: WindowProtection::None,
        }];
        let estimate = estimate_survey(&survey).unwrap();
        let advice = recommendations(&estimate);
        assert!(advice.iter().any(|a| a.contains("Solar gain")));
    }

    #[test]
    fn test_recommendations_flag_loads_beyond_three_tons() {
        let mut survey = bare_survey();
        survey.length_m = 20.0;
        survey.width_m = 15.0;
        survey.climate = ClimateZone::VeryWarm;
        survey.loads.occupants = 30;
        let estimate = estimate_survey(&survey).unwrap();
        assert!(estimate.total_btu > 36_000.0);
        let advice = recommendations(&estimate);
        assert!(advice.iter().any(|a| a.contains("splitting")));
    }
}
