use dialoguer::Input;
use thiserror::Error;

use crate::footprint::{ActivityInput, Diet};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{0}' is not a number; enter numeric values for distances and consumption")]
    NonNumericValue(String),
    #[error("'{0}' is negative; activity quantities cannot be less than zero")]
    NegativeValue(String),
    #[error("'{0}' is not a diet option; choose 1, 2 or 3")]
    InvalidChoice(String),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompts for one day of activity quantities and a diet choice.
///
/// The first entry that fails to parse aborts the remaining prompts; the
/// caller has to start the whole sequence over.
pub fn collect() -> Result<ActivityInput, InputError> {
    let car_km = prompt_quantity("Kilometers traveled by car")?;
    let bus_km = prompt_quantity("Kilometers traveled by bus")?;
    let train_km = prompt_quantity("Kilometers traveled by train")?;
    let plane_km = prompt_quantity("Kilometers traveled by plane")?;
    let electricity_kwh = prompt_quantity("Daily electricity consumption (kWh)")?;
    let gas_m3 = prompt_quantity("Daily gas consumption (cubic meters)")?;
    let diet = prompt_diet()?;

    Ok(ActivityInput {
        car_km,
        bus_km,
        train_km,
        plane_km,
        electricity_kwh,
        gas_m3,
        diet,
    })
}

fn prompt_quantity(prompt: &str) -> Result<f64, InputError> {
    let raw: String = Input::new().with_prompt(prompt).interact_text()?;
    parse_quantity(&raw)
}

fn prompt_diet() -> Result<Diet, InputError> {
    println!("Select your diet type:");
    println!("1. Meat-based");
    println!("2. Vegetarian");
    println!("3. Vegan");
    let raw: String = Input::new().with_prompt("Diet choice").interact_text()?;
    parse_diet_choice(&raw)
}

fn parse_quantity(raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| InputError::NonNumericValue(raw.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NonNumericValue(raw.to_string()));
    }
    if value < 0.0 {
        return Err(InputError::NegativeValue(raw.to_string()));
    }
    Ok(value)
}

// Out-of-range entries are rejected, not defaulted to a diet category.
fn parse_diet_choice(raw: &str) -> Result<Diet, InputError> {
    match raw.trim() {
        "1" => Ok(Diet::Meat),
        "2" => Ok(Diet::Vegetarian),
        "3" => Ok(Diet::Vegan),
        other => Err(InputError::InvalidChoice(other.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(parse_quantity("42").unwrap(), 42.0);
        assert_eq!(parse_quantity("3.5").unwrap(), 3.5);
        assert_eq!(parse_quantity(" 7 ").unwrap(), 7.0);
        assert_eq!(parse_quantity("0").unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_numeric_entries() {
        for raw in ["abc", "", "12,5", "ten"] {
            let err = parse_quantity(raw).unwrap_err();
            assert!(matches!(err, InputError::NonNumericValue(_)), "{}", raw);
        }
    }

    #[test]
    fn rejects_non_finite_entries() {
        for raw in ["NaN", "inf", "-inf"] {
            let err = parse_quantity(raw).unwrap_err();
            assert!(matches!(err, InputError::NonNumericValue(_)), "{}", raw);
        }
    }

    #[test]
    fn rejects_negative_quantities() {
        let err = parse_quantity("-1").unwrap_err();
        assert!(matches!(err, InputError::NegativeValue(_)));
    }

    #[test]
    fn recognizes_menu_choices() {
        assert_eq!(parse_diet_choice("1").unwrap(), Diet::Meat);
        assert_eq!(parse_diet_choice("2").unwrap(), Diet::Vegetarian);
        assert_eq!(parse_diet_choice("3").unwrap(), Diet::Vegan);
        assert_eq!(parse_diet_choice(" 3 ").unwrap(), Diet::Vegan);
    }

    #[test]
    fn rejects_out_of_range_choices() {
        for raw in ["0", "4", "banana", ""] {
            let err = parse_diet_choice(raw).unwrap_err();
            assert!(matches!(err, InputError::InvalidChoice(_)), "{}", raw);
        }
    }
}
