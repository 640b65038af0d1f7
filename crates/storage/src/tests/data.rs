use chrono::NaiveDate;
use gymlog_domain as domain;

pub static WORKOUTS: std::sync::LazyLock<Vec<domain::Workout>> =
    std::sync::LazyLock::new(|| vec![WORKOUT.clone(), WORKOUT_2.clone()]);

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 1.into(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        name: Some(domain::Name::new("Push Day").unwrap()),
        exercises: vec![domain::Exercise {
            name: domain::Name::new("Bench Press").unwrap(),
            sets: vec![*SET, *SET_2],
        }],
        notes: Some("Felt strong".to_string()),
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 2.into(),
        date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        name: None,
        exercises: vec![domain::Exercise {
            name: domain::Name::new("Squat").unwrap(),
            sets: vec![*SET_3],
        }],
        notes: None,
    });

pub static NEW_WORKOUT: std::sync::LazyLock<domain::NewWorkout> =
    std::sync::LazyLock::new(|| domain::NewWorkout {
        id: None,
        date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        name: Some(domain::Name::new("Pull Day").unwrap()),
        exercises: vec![domain::Exercise {
            name: domain::Name::new("Row").unwrap(),
            sets: vec![*SET_3],
        }],
        notes: None,
    });

pub static SET: std::sync::LazyLock<domain::Set> = std::sync::LazyLock::new(|| domain::Set {
    set_number: Some(domain::SetNumber::new(1).unwrap()),
    weight: domain::Weight::new(80.0).unwrap(),
    reps: domain::Reps::new(5).unwrap(),
});

pub static SET_2: std::sync::LazyLock<domain::Set> = std::sync::LazyLock::new(|| domain::Set {
    set_number: Some(domain::SetNumber::new(2).unwrap()),
    weight: domain::Weight::new(85.0).unwrap(),
    reps: domain::Reps::new(3).unwrap(),
});

pub static SET_3: std::sync::LazyLock<domain::Set> = std::sync::LazyLock::new(|| domain::Set {
    set_number: None,
    weight: domain::Weight::new(100.0).unwrap(),
    reps: domain::Reps::new(5).unwrap(),
});
