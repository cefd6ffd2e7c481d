use clima_tools::core::thermal::{self, SAFETY_FACTOR};
use clima_tools::domain::model::{
    CeilingColor, CeilingSection, CeilingType, ClimateZone, GlassType, InternalLoads, Orientation,
    RoomSurvey, SunExposure, Tonnage, WallMaterial, WallSection, WindowProtection, WindowSection,
};

fn office_survey() -> RoomSurvey {
    RoomSurvey {
        length_m: 6.0,
        width_m: 5.0,
        height_m: 2.7,
        climate: ClimateZone::Warm,
        walls: vec![
            WallSection {
                orientation: Orientation::West,
                area_m2: 16.2,
                material: WallMaterial::Brick,
                exposure: SunExposure::DirectSun,
            },
            WallSection {
                orientation: Orientation::South,
                area_m2: 13.5,
                material: WallMaterial::Concrete,
                exposure: SunExposure::Shade,
            },
        ],
        windows: vec![WindowSection {
            orientation: Orientation::West,
            area_m2: 3.0,
            glass: GlassType::Double,
            protection: WindowProtection::Blinds,
        }],
        ceiling: CeilingSection {
            kind: CeilingType::ConcreteSlab,
            color: CeilingColor::Dark,
        },
        loads: InternalLoads {
            occupants: 4,
            stove: false,
            equipment_watts: 800.0,
            lighting_watts: 300.0,
        },
    }
}

#[test]
fn test_quick_estimate_vectors() {
    let temperate = thermal::quick_estimate(5.0, 4.0, ClimateZone::Temperate).unwrap();
    assert_eq!(temperate.load_btu, 10_000.0);
    assert_eq!(temperate.recommendation.tonnage, Tonnage::One);

    let very_warm = thermal::quick_estimate(5.0, 4.0, ClimateZone::VeryWarm).unwrap();
    assert_eq!(very_warm.load_btu, 14_000.0);
    assert_eq!(very_warm.recommendation.tonnage, Tonnage::OneAndHalf);
    assert_eq!(very_warm.recommendation.commercial_btu, 18_000);
}

#[test]
fn test_quick_estimate_is_idempotent() {
    let first = thermal::quick_estimate(7.5, 3.2, ClimateZone::Warm).unwrap();
    let second = thermal::quick_estimate(7.5, 3.2, ClimateZone::Warm).unwrap();
    assert_eq!(first.load_btu, second.load_btu);
    assert_eq!(first.recommendation, second.recommendation);
}

#[test]
fn test_survey_breakdown_terms_are_all_positive_for_a_real_room() {
    let estimate = thermal::estimate_survey(&office_survey()).unwrap();
    let b = &estimate.breakdown;

    assert!(b.conduction > 0.0);
    assert!(b.solar > 0.0);
    assert_eq!(b.occupants, 2_400.0);
    assert!(b.equipment > 0.0);
    assert_eq!(b.stove, 0.0);
    assert!(b.lighting > 0.0);
    assert!(b.infiltration > 0.0);

    assert_eq!(estimate.area_m2, 30.0);
    assert_eq!(estimate.subtotal_btu, b.subtotal());
    assert_eq!(estimate.total_btu, (estimate.subtotal_btu * SAFETY_FACTOR).round());
}

#[test]
fn test_climate_zone_scales_the_envelope() {
    let warm = thermal::estimate_survey(&office_survey()).unwrap();

    let mut cooler = office_survey();
    cooler.climate = ClimateZone::Temperate;
    let temperate = thermal::estimate_survey(&cooler).unwrap();

    assert!(warm.breakdown.conduction > temperate.breakdown.conduction);
    assert!(warm.breakdown.infiltration > temperate.breakdown.infiltration);
    // Internal loads do not depend on the climate.
    assert_eq!(warm.breakdown.occupants, temperate.breakdown.occupants);
    assert_eq!(warm.breakdown.equipment, temperate.breakdown.equipment);
}

#[test]
fn test_window_protection_reduces_solar_gain() {
    let protected = thermal::estimate_survey(&office_survey()).unwrap();

    let mut bare = office_survey();
    bare.windows[0].glass = GlassType::Single;
    bare.windows[0].protection = WindowProtection::None;
    let unprotected = thermal::estimate_survey(&bare).unwrap();

    assert!(unprotected.breakdown.solar > protected.breakdown.solar);
}

#[test]
fn test_survey_rejects_nonsense_dimensions() {
    let mut survey = office_survey();
    survey.height_m = 0.0;
    assert!(thermal::estimate_survey(&survey).is_err());

    let mut survey = office_survey();
    survey.loads.equipment_watts = -50.0;
    assert!(thermal::estimate_survey(&survey).is_err());
}

#[test]
fn test_stove_adds_its_flat_allowance() {
    let without = thermal::estimate_survey(&office_survey()).unwrap();

    let mut kitchen = office_survey();
    kitchen.loads.stove = true;
    let with = thermal::estimate_survey(&kitchen).unwrap();

    assert_eq!(with.breakdown.stove, 8_000.0);
    assert_eq!(
        with.subtotal_btu - without.subtotal_btu,
        8_000.0
    );
}
