use clima_tools::core::refrigerant::{anchor_table, suction_pressure};
use clima_tools::domain::model::Refrigerant;

#[test]
fn test_every_anchor_row_round_trips() {
    for gas in [Refrigerant::R410A, Refrigerant::R32, Refrigerant::R22] {
        for row in anchor_table(gas) {
            let band = suction_pressure(gas, row.ambient_c);
            assert_eq!(band.min_psi, row.min_psi, "{} at {}", gas, row.ambient_c);
            assert_eq!(band.max_psi, row.max_psi, "{} at {}", gas, row.ambient_c);
            assert_eq!(band.min_bar, row.min_bar, "{} at {}", gas, row.ambient_c);
            assert_eq!(band.max_bar, row.max_bar, "{} at {}", gas, row.ambient_c);
        }
    }
}

#[test]
fn test_interpolated_values_sit_between_anchors() {
    let band = suction_pressure(Refrigerant::R32, 37.0);
    // Between the 35 and 40 degC rows.
    assert!(band.min_psi >= 115.0 && band.min_psi <= 120.0);
    assert!(band.max_psi >= 140.0 && band.max_psi <= 150.0);
    assert!(band.min_bar >= 7.9 && band.min_bar <= 8.3);
    assert!(band.max_bar >= 9.6 && band.max_bar <= 10.3);
}

#[test]
fn test_r22_runs_much_lower_than_the_modern_gases() {
    let r22 = suction_pressure(Refrigerant::R22, 35.0);
    let r410a = suction_pressure(Refrigerant::R410A, 35.0);
    assert!(r22.max_psi < r410a.min_psi);
}

#[test]
fn test_out_of_range_temperatures_clamp() {
    let freezing = suction_pressure(Refrigerant::R410A, -5.0);
    let first = &anchor_table(Refrigerant::R410A)[0];
    assert_eq!(freezing.min_psi, first.min_psi);

    let scorching = suction_pressure(Refrigerant::R410A, 55.0);
    let last = anchor_table(Refrigerant::R410A).last().unwrap();
    assert_eq!(scorching.max_psi, last.max_psi);
}
