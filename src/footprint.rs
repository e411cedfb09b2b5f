use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diet {
    Meat,
    Vegetarian,
    Vegan,
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Diet::Meat => "meat",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
        };
        write!(f, "{}", name)
    }
}

/// One day of self-reported activity quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityInput {
    pub car_km: f64,
    pub bus_km: f64,
    pub train_km: f64,
    pub plane_km: f64,
    pub electricity_kwh: f64,
    pub gas_m3: f64,
    pub diet: Diet,
}

/// Per-unit emission factors, in kg CO2 per unit of activity.
///
/// Diet factors are kg CO2 per day, looked up by category and not scaled
/// by any quantity.
#[derive(Debug, Clone)]
pub struct EmissionCoefficients {
    pub car_per_km: f64,
    pub bus_per_km: f64,
    pub train_per_km: f64,
    pub plane_per_km: f64,
    pub electricity_per_kwh: f64,
    pub gas_per_m3: f64,
    pub diet_per_day: HashMap<Diet, f64>,
}

impl Default for EmissionCoefficients {
    fn default() -> Self {
        EmissionCoefficients {
            car_per_km: 0.25,
            bus_per_km: 0.05,
            train_per_km: 0.04,
            plane_per_km: 0.15,
            electricity_per_kwh: 0.233,
            gas_per_m3: 2.0,
            diet_per_day: HashMap::from([
                (Diet::Meat, 7.2),
                (Diet::Vegetarian, 3.8),
                (Diet::Vegan, 2.9),
            ]),
        }
    }
}

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("no emission coefficient for diet category '{0}'")]
    MissingCoefficient(Diet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmissionResult {
    pub travel_total: f64,
    pub energy_total: f64,
    pub diet_total: f64,
    pub grand_total: f64,
}

impl EmissionResult {
    pub fn categories(&self) -> [(&'static str, f64); 3] {
        [
            ("Travel", self.travel_total),
            ("Energy", self.energy_total),
            ("Diet", self.diet_total),
        ]
    }
}

/// Applies the coefficient table to one day of activity.
pub fn calculate(
    input: &ActivityInput,
    coefficients: &EmissionCoefficients,
) -> Result<EmissionResult, CalculationError> {
    let travel_total = input.car_km * coefficients.car_per_km
        + input.bus_km * coefficients.bus_per_km
        + input.train_km * coefficients.train_per_km
        + input.plane_km * coefficients.plane_per_km;

    let energy_total = input.electricity_kwh * coefficients.electricity_per_kwh
        + input.gas_m3 * coefficients.gas_per_m3;

    let diet_total = coefficients
        .diet_per_day
        .get(&input.diet)
        .copied()
        .ok_or(CalculationError::MissingCoefficient(input.diet))?;

    Ok(EmissionResult {
        travel_total,
        energy_total,
        diet_total,
        grand_total: travel_total + energy_total + diet_total,
    })
}
