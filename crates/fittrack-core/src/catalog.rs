//! Built-in exercise catalog and the weekday workout rotation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseMode {
    Strength,
    Burn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lower,
    Upper,
    Core,
    Cardio,
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            "core" => Ok(Self::Core),
            "cardio" => Ok(Self::Cardio),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub target_area: String,
    pub mode: ExerciseMode,
    #[serde(default)]
    pub description: String,
    pub category: Category,
}

impl Exercise {
    fn builtin(
        id: &str,
        name: &str,
        target_area: &str,
        mode: ExerciseMode,
        description: &str,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_area: target_area.into(),
            mode,
            description: description.into(),
            category,
        }
    }
}

/// The full exercise catalog, in display order.
pub fn exercises() -> Vec<Exercise> {
    use Category::*;
    use ExerciseMode::*;

    vec![
        Exercise::builtin(
            "1",
            "Air Squat",
            "Thighs",
            Strength,
            "Keep your chest up, push your knees out, and sit back into your heels.",
            Lower,
        ),
        Exercise::builtin(
            "2",
            "Bicycle Crunch",
            "Waist/Core",
            Strength,
            "Touch elbow to opposite knee while extending the other leg. Keep your lower back pressed to the floor.",
            Core,
        ),
        Exercise::builtin(
            "3",
            "Lateral Lunge",
            "Thighs",
            Strength,
            "Step wide to the side, sit back into one hip while keeping the other leg straight.",
            Lower,
        ),
        Exercise::builtin(
            "4",
            "Plank",
            "Core",
            Strength,
            "Keep your body in a straight line from head to heels. Engage your core and don't let your hips sag.",
            Core,
        ),
        Exercise::builtin(
            "5",
            "Mountain Climbers",
            "Cardio/Core",
            Burn,
            "Drive your knees toward your chest in a running motion while maintaining a plank position.",
            Cardio,
        ),
        Exercise::builtin(
            "6",
            "Incline Push-ups",
            "Upper Body",
            Burn,
            "Place hands on an elevated surface. Lower your chest toward it, then push back up.",
            Upper,
        ),
        Exercise::builtin(
            "7",
            "Glute Bridge",
            "Glutes/Thighs",
            Strength,
            "Lie on your back, push through your heels to lift your hips. Squeeze at the top.",
            Lower,
        ),
        Exercise::builtin(
            "8",
            "Dead Bug",
            "Core",
            Strength,
            "Lie on your back, extend opposite arm and leg while keeping your lower back flat.",
            Core,
        ),
        Exercise::builtin(
            "9",
            "Jumping Jacks",
            "Full Body",
            Burn,
            "Jump feet out while raising arms overhead, then return to starting position.",
            Cardio,
        ),
        Exercise::builtin(
            "10",
            "Wall Sit",
            "Thighs",
            Strength,
            "Slide down a wall until your thighs are parallel to the floor. Hold the position.",
            Lower,
        ),
    ]
}

/// Catalog entries in one category, catalog order preserved.
pub fn by_category(category: Category) -> Vec<Exercise> {
    exercises()
        .into_iter()
        .filter(|e| e.category == category)
        .collect()
}

/// What a given weekday calls for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub exercises: Vec<Exercise>,
}

impl DayPlan {
    /// Sunday carries no timed workout; the plan is a walk.
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

pub fn workout_for_day(day: Weekday) -> DayPlan {
    let (workout_type, exercises) = match day {
        Weekday::Sun => ("Active Recovery", Vec::new()),
        Weekday::Mon | Weekday::Wed | Weekday::Fri => (
            "Lower Body & Waist Focus",
            exercises()
                .into_iter()
                .filter(|e| matches!(e.category, Category::Lower | Category::Core))
                .collect(),
        ),
        Weekday::Tue | Weekday::Thu | Weekday::Sat => ("Full Body Burn", exercises()),
    };

    DayPlan {
        day: day_name(day).to_string(),
        workout_type: workout_type.to_string(),
        exercises,
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_unique_ids() {
        let all = exercises();
        assert_eq!(all.len(), 10);
        let ids: HashSet<_> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn sunday_is_active_recovery() {
        let plan = workout_for_day(Weekday::Sun);
        assert_eq!(plan.workout_type, "Active Recovery");
        assert!(plan.is_rest_day());
    }

    #[test]
    fn lower_body_days_keep_lower_and_core_only() {
        for day in [Weekday::Mon, Weekday::Wed, Weekday::Fri] {
            let plan = workout_for_day(day);
            assert_eq!(plan.workout_type, "Lower Body & Waist Focus");
            assert_eq!(plan.exercises.len(), 7);
            assert!(plan
                .exercises
                .iter()
                .all(|e| matches!(e.category, Category::Lower | Category::Core)));
        }
        let names: Vec<_> = workout_for_day(Weekday::Mon)
            .exercises
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("Air Squat"));
        assert_eq!(names.last().map(String::as_str), Some("Wall Sit"));
    }

    #[test]
    fn full_body_days_use_whole_catalog() {
        for day in [Weekday::Tue, Weekday::Thu, Weekday::Sat] {
            let plan = workout_for_day(day);
            assert_eq!(plan.workout_type, "Full Body Burn");
            assert_eq!(plan.exercises, exercises());
        }
    }

    #[test]
    fn category_parsing_and_filtering() {
        let cardio: Category = "Cardio".parse().unwrap();
        let names: Vec<_> = by_category(cardio).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Mountain Climbers", "Jumping Jacks"]);
        assert!("legs".parse::<Category>().is_err());
    }

    #[test]
    fn plan_serializes_type_field() {
        let json = serde_json::to_value(workout_for_day(Weekday::Tue)).unwrap();
        assert_eq!(json["type"], "Full Body Burn");
        assert_eq!(json["day"], "Tuesday");
        assert_eq!(json["exercises"][0]["category"], "lower");
        assert_eq!(json["exercises"][0]["mode"], "Strength");
    }
}
