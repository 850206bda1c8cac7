use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use healthbot_advisor::{form, Advisor};
use healthbot_artifacts::{Artifact, ModelArtifacts};
use healthbot_model::{
    bmi::BmiCategory,
    profile::{ActivityLevel, DietType, UserProfile},
    Error,
};
use strum::IntoEnumIterator;

fn sample_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../artifacts")
}

fn sample_advisor() -> Advisor {
    Advisor::new(ModelArtifacts::load(&sample_dir()).unwrap()).unwrap()
}

fn run_session(advisor: &Advisor, input: &str) -> String {
    let mut output = Vec::new();
    form::run(advisor, Cursor::new(input.to_owned()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn advises_on_sample_profiles() {
    let advisor = sample_advisor();
    let test_data = [
        (
            (25, 170, 65, ActivityLevel::Low, DietType::Vegetarian, 7),
            22.49,
            BmiCategory::NormalWeight,
            "Balanced Diet",
            "Moderate Cardio",
        ),
        (
            (25, 150, 100, ActivityLevel::Low, DietType::Mixed, 6),
            44.44,
            BmiCategory::Obese,
            "Low-Carb Diet",
            "Weight-Loss Cardio",
        ),
        (
            (19, 180, 50, ActivityLevel::High, DietType::Vegan, 9),
            15.43,
            BmiCategory::Underweight,
            "Calorie Surplus Diet",
            "Strength Training",
        ),
        (
            (60, 170, 80, ActivityLevel::High, DietType::NonVegetarian, 8),
            27.68,
            BmiCategory::Overweight,
            "Balanced Diet",
            "Light Walking & Yoga",
        ),
    ];

    for (i, ((age, height, weight, activity, diet, sleep), bmi, category, diet_plan, activity_plan)) in
        test_data.into_iter().enumerate()
    {
        let profile = UserProfile::new(age, height, weight, activity, diet, sleep).unwrap();
        let advice = advisor.advise(&profile).unwrap();
        assert_eq!(advice.bmi.value(), bmi, "Test case #{}", i);
        assert_eq!(advice.bmi.category(), category, "Test case #{}", i);
        assert_eq!(advice.recommendation.diet, diet_plan, "Test case #{}", i);
        assert_eq!(
            advice.recommendation.activity, activity_plan,
            "Test case #{}",
            i
        );
    }
}

#[test]
fn advice_is_repeatable() {
    let advisor = sample_advisor();
    let profile = UserProfile::default();
    let first = advisor.advise(&profile).unwrap();
    for _ in 0..5 {
        assert_eq!(advisor.advise(&profile).unwrap(), first);
    }
}

#[test]
fn session_serves_several_interactions() {
    let output = run_session(
        &sample_advisor(),
        "25\n170\n65\nLow\nVegetarian\n7\ny\n25\n150\n100\n1\n4\n6\nn\n",
    );

    assert!(output.contains("Your BMI: 22.49 (Normal weight)"));
    assert!(output.contains("Diet Plan:     Balanced Diet"));
    assert!(output.contains("Activity Plan: Moderate Cardio"));
    assert!(output.contains("Your BMI: 44.44 (Obese)"));
    assert!(output.contains("Low-Carb Diet"));
    assert!(output.contains("Developed as a college AI project"));
}

#[test]
fn session_reports_invalid_input_and_continues() {
    let output = run_session(&sample_advisor(), "250\n40\n\n\nLazy\n2\n\n\n\n");

    assert!(output.contains("age must be between 10 and 100, got 250"));
    assert!(output.contains("\"Lazy\" is not one of Low, Moderate, High"));
    assert!(output.contains("Your BMI: 22.49 (Normal weight)"));
}

#[test]
fn session_reports_vocabulary_drift_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    for artifact in Artifact::iter() {
        fs::copy(
            sample_dir().join(artifact.file_name()),
            dir.path().join(artifact.file_name()),
        )
        .unwrap();
    }
    fs::write(
        dir.path().join("le_diet.ron"),
        r#"(classes: ["Non-Vegetarian", "Vegan", "Vegetarian"])"#,
    )
    .unwrap();
    let advisor = Advisor::new(ModelArtifacts::load(dir.path()).unwrap()).unwrap();

    let mixed = UserProfile::new(30, 175, 70, ActivityLevel::Moderate, DietType::Mixed, 7).unwrap();
    assert!(matches!(
        advisor.advise(&mixed),
        Err(Error::UnknownCategory { .. })
    ));

    let output = run_session(&advisor, "\n\n\n\nMixed\n\ny\n\n\n\n\nVegan\n\nn\n");
    assert!(output.contains("\"Mixed\" is not a known category of le_diet"));
    assert!(output.contains("Your BMI: 22.49 (Normal weight)"));
}
