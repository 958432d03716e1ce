use super::super::domain::{AnswerSet, CarType, Diet, HouseSize, RecyclingHabit, ShoppingHabit};
use super::{FootprintTerm, ScoreComponent};

const CAR_TONNES_PER_WEEKLY_KM: f64 = 0.2;
const TONNES_PER_FLIGHT: f64 = 0.5;
const TONNES_PER_MONTHLY_KWH: f64 = 0.0005;
const HOUSE_SIZE_WEIGHT: f64 = 2.0;

/// Reads a leading base-10 integer the way the questionnaire form always has.
///
/// Leading whitespace and an optional sign are accepted, digits are consumed up
/// to the first non-digit, and anything after is ignored. Text without a
/// leading digit reads as zero. Out-of-range values saturate.
pub(crate) fn parse_int_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

pub(crate) fn car_multiplier(car_type: CarType) -> f64 {
    match car_type {
        CarType::Electric => 0.5,
        CarType::Hybrid => 0.7,
        CarType::Gasoline | CarType::Unspecified => 1.0,
    }
}

pub(crate) fn house_size_factor(house_size: HouseSize) -> f64 {
    match house_size {
        HouseSize::Large => 1.5,
        HouseSize::Medium => 1.0,
        HouseSize::Small | HouseSize::Unspecified => 0.7,
    }
}

pub(crate) fn diet_tonnes(diet: Diet) -> f64 {
    match diet {
        Diet::Meat => 2.5,
        Diet::Vegetarian => 1.5,
        Diet::Vegan | Diet::Unspecified => 1.0,
    }
}

pub(crate) fn shopping_tonnes(shopping: ShoppingHabit) -> f64 {
    match shopping {
        ShoppingHabit::High => 2.0,
        ShoppingHabit::Medium => 1.2,
        ShoppingHabit::Low | ShoppingHabit::Unspecified => 0.8,
    }
}

pub(crate) fn recycling_adjustment(recycling: RecyclingHabit) -> f64 {
    match recycling {
        RecyclingHabit::Always => -0.5,
        RecyclingHabit::Sometimes => -0.2,
        RecyclingHabit::Never | RecyclingHabit::Unspecified => 0.0,
    }
}

/// Computes the seven footprint terms in order and their unclamped sum.
pub(crate) fn score_terms(answers: &AnswerSet) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::with_capacity(7);
    let mut total = 0.0;

    let weekly_km = parse_int_or_zero(&answers.transport.car_usage);
    let multiplier = car_multiplier(answers.transport.car_type);
    let car = weekly_km as f64 * multiplier * CAR_TONNES_PER_WEEKLY_KM;
    components.push(ScoreComponent {
        term: FootprintTerm::Car,
        tonnes: car,
        notes: format!("{weekly_km} km/week at vehicle multiplier {multiplier:.1}"),
    });
    total += car;

    let flights_per_year = parse_int_or_zero(&answers.transport.flights);
    let flights = flights_per_year as f64 * TONNES_PER_FLIGHT;
    components.push(ScoreComponent {
        term: FootprintTerm::Flights,
        tonnes: flights,
        notes: format!("{flights_per_year} flight(s) per year"),
    });
    total += flights;

    let monthly_kwh = parse_int_or_zero(&answers.home.electricity);
    let electricity = monthly_kwh as f64 * TONNES_PER_MONTHLY_KWH;
    components.push(ScoreComponent {
        term: FootprintTerm::Electricity,
        tonnes: electricity,
        notes: format!("{monthly_kwh} kWh per month"),
    });
    total += electricity;

    let factor = house_size_factor(answers.home.house_size);
    let house = factor * HOUSE_SIZE_WEIGHT;
    components.push(ScoreComponent {
        term: FootprintTerm::HouseSize,
        tonnes: house,
        notes: format!("house size factor {factor:.1}"),
    });
    total += house;

    let diet = diet_tonnes(answers.food.diet);
    components.push(ScoreComponent {
        term: FootprintTerm::Diet,
        tonnes: diet,
        notes: choice_note("diet", answers.food.diet.as_str()),
    });
    total += diet;

    let shopping = shopping_tonnes(answers.consumption.shopping);
    components.push(ScoreComponent {
        term: FootprintTerm::Shopping,
        tonnes: shopping,
        notes: choice_note("shopping", answers.consumption.shopping.as_str()),
    });
    total += shopping;

    let recycling = recycling_adjustment(answers.waste.recycling);
    components.push(ScoreComponent {
        term: FootprintTerm::Recycling,
        tonnes: recycling,
        notes: choice_note("recycling", answers.waste.recycling.as_str()),
    });
    total += recycling;

    (components, total)
}

fn choice_note(topic: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{topic} not answered")
    } else {
        format!("{topic}: {value}")
    }
}
