use footprint::questionnaire::{
    score, AnswerField, AnswerSet, FootprintTerm, FootprintTier, MINIMUM_TONNES_PER_YEAR,
};

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

fn answers(pairs: &[(AnswerField, &str)]) -> AnswerSet {
    pairs
        .iter()
        .fold(AnswerSet::default(), |answers, (field, value)| {
            answers.with_field(*field, *value)
        })
}

#[test]
fn empty_answers_score_the_default_branches() {
    let result = score(&AnswerSet::default());

    assert!(approx(result.tonnes_per_year, 3.2), "{}", result.tonnes_per_year);
    assert_eq!(result.tier, FootprintTier::VeryGood);

    let house = result
        .components
        .iter()
        .find(|component| component.term == FootprintTerm::HouseSize)
        .expect("house term present");
    assert!(approx(house.tonnes, 1.4));
}

#[test]
fn heavy_commute_lands_in_needs_attention() {
    let answers = answers(&[
        (AnswerField::CarUsage, "100"),
        (AnswerField::CarType, "electric"),
        (AnswerField::Flights, "2"),
        (AnswerField::Electricity, "300"),
        (AnswerField::HouseSize, "large"),
        (AnswerField::People, "4"),
        (AnswerField::Diet, "vegan"),
        (AnswerField::Shopping, "low"),
        (AnswerField::Recycling, "always"),
    ]);

    let result = score(&answers);

    assert!(approx(result.tonnes_per_year, 15.45), "{}", result.tonnes_per_year);
    assert_eq!(result.tier, FootprintTier::NeedsAttention);
    assert_eq!(result.message, FootprintTier::NeedsAttention.message());
}

#[test]
fn frugal_household_is_excellent_without_hitting_the_floor() {
    let answers = answers(&[
        (AnswerField::CarUsage, "0"),
        (AnswerField::Flights, "0"),
        (AnswerField::Electricity, "0"),
        (AnswerField::HouseSize, "small"),
        (AnswerField::Diet, "vegan"),
        (AnswerField::Shopping, "low"),
        (AnswerField::Recycling, "always"),
    ]);

    let result = score(&answers);

    assert!(approx(result.tonnes_per_year, 2.7), "{}", result.tonnes_per_year);
    assert!(approx(result.raw_total, result.tonnes_per_year));
    assert_eq!(result.tier, FootprintTier::Excellent);
}

#[test]
fn unscored_fields_do_not_move_the_result() {
    let baseline = score(&AnswerSet::default());
    let noisy = answers(&[
        (AnswerField::PublicTransport, "daily"),
        (AnswerField::Heating, "gas"),
        (AnswerField::People, "6"),
        (AnswerField::LocalFood, "always"),
        (AnswerField::FoodWaste, "lots"),
        (AnswerField::Electronics, "often"),
        (AnswerField::Clothing, "weekly"),
        (AnswerField::Composting, "yes"),
    ]);

    assert_eq!(score(&noisy), baseline);
}

#[test]
fn non_numeric_text_reads_as_zero() {
    let answers = answers(&[
        (AnswerField::CarUsage, "lots"),
        (AnswerField::Flights, "a few"),
        (AnswerField::Electricity, ""),
    ]);

    assert_eq!(score(&answers), score(&AnswerSet::default()));
}

#[test]
fn fractional_text_truncates() {
    let truncated = score(&answers(&[(AnswerField::Flights, "3.9")]));
    let whole = score(&answers(&[(AnswerField::Flights, "3")]));
    assert_eq!(truncated.tonnes_per_year, whole.tonnes_per_year);
}

#[test]
fn scoring_is_repeatable_and_never_below_floor() {
    let cases = [
        answers(&[]),
        answers(&[(AnswerField::CarUsage, "-10000")]),
        answers(&[(AnswerField::Flights, "-3"), (AnswerField::Recycling, "always")]),
        answers(&[
            (AnswerField::CarUsage, "400"),
            (AnswerField::CarType, "gasoline"),
            (AnswerField::Diet, "meat"),
            (AnswerField::Shopping, "high"),
        ]),
    ];

    for answers in &cases {
        let first = score(answers);
        let second = score(answers);
        assert_eq!(first, second);
        assert!(first.tonnes_per_year >= MINIMUM_TONNES_PER_YEAR);
    }
}

#[test]
fn car_default_is_worst_case_while_house_default_is_best_case() {
    let unset_car = score(&answers(&[(AnswerField::CarUsage, "50")]));
    let gasoline = score(&answers(&[
        (AnswerField::CarUsage, "50"),
        (AnswerField::CarType, "gasoline"),
    ]));
    assert_eq!(unset_car.tonnes_per_year, gasoline.tonnes_per_year);

    let unset_house = score(&AnswerSet::default());
    let small_house = score(&answers(&[(AnswerField::HouseSize, "small")]));
    assert_eq!(unset_house.tonnes_per_year, small_house.tonnes_per_year);
}
