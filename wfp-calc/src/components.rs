use crate::config::GREY_WATER_FACTOR;
use crate::input::FootprintInput;
use serde::{Deserialize, Serialize};

/// Green, blue and grey water derived from a [`FootprintInput`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterComponents {
    pub green_water: f64,
    pub blue_water: f64,
    pub grey_water: f64,
    pub total_water_footprint: f64,
    pub land_area: f64,
}

impl WaterComponents {
    /// Green, blue, grey, in that order. This is the series every chart plots.
    pub fn series(&self) -> [f64; 3] {
        [self.green_water, self.blue_water, self.grey_water]
    }
}

/// Derive the water components from validated input.
///
/// - green = max(0, precipitation - runoff)
/// - blue = irrigation
/// - grey = fertilizer * 0.65
/// - total = (green + blue + grey) * land area
///
/// The caller is responsible for validating the input first.
pub fn compute_components(input: &FootprintInput) -> WaterComponents {
    let green_water = (input.precipitation - input.runoff).max(0.0);
    let blue_water = input.irrigation;
    let grey_water = input.fertilizer * GREY_WATER_FACTOR;
    let total_water_footprint = (green_water + blue_water + grey_water) * input.land_area;

    log::debug!(
        "components: green={green_water} blue={blue_water} grey={grey_water} total={total_water_footprint}"
    );

    WaterComponents {
        green_water,
        blue_water,
        grey_water,
        total_water_footprint,
        land_area: input.land_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        land_area: f64,
        precipitation: f64,
        runoff: f64,
        irrigation: f64,
        fertilizer: f64,
    ) -> FootprintInput {
        FootprintInput {
            land_area,
            precipitation,
            runoff,
            irrigation,
            fertilizer,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let c = compute_components(&input(10.0, 800.0, 200.0, 300.0, 100.0));
        assert_eq!(c.green_water, 600.0);
        assert_eq!(c.blue_water, 300.0);
        assert_eq!(c.grey_water, 65.0);
        assert_eq!(c.total_water_footprint, 9650.0);
        assert_eq!(c.land_area, 10.0);
    }

    #[test]
    fn test_green_water_clamped_when_runoff_exceeds_precipitation() {
        let c = compute_components(&input(1.0, 100.0, 500.0, 0.0, 0.0));
        assert_eq!(c.green_water, 0.0);
        assert_eq!(c.blue_water, 0.0);
        assert_eq!(c.grey_water, 0.0);
        assert_eq!(c.total_water_footprint, 0.0);
    }

    #[test]
    fn test_green_water_is_difference_or_zero() {
        let cases = [(0.0, 0.0), (10.0, 3.0), (3.0, 10.0), (250.5, 250.5), (1e6, 1.0)];
        for (p, r) in cases {
            let c = compute_components(&input(1.0, p, r, 0.0, 0.0));
            assert!(c.green_water >= 0.0);
            if p >= r {
                assert_eq!(c.green_water, p - r);
            } else {
                assert_eq!(c.green_water, 0.0);
            }
        }
    }

    #[test]
    fn test_total_matches_formula() {
        let cases = [
            input(2.5, 640.0, 120.0, 75.0, 33.0),
            input(0.0, 10.0, 1.0, 1.0, 1.0),
            input(123.4, 0.0, 0.0, 999.9, 0.1),
        ];
        for i in cases {
            let c = compute_components(&i);
            assert_eq!(
                c.total_water_footprint,
                (c.green_water + c.blue_water + c.grey_water) * i.land_area
            );
        }
    }

    #[test]
    fn test_series_order() {
        let c = compute_components(&input(10.0, 800.0, 200.0, 300.0, 100.0));
        assert_eq!(c.series(), [600.0, 300.0, 65.0]);
    }
}
