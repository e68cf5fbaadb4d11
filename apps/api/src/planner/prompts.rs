//! Prompt templates for workout and diet plans.
//!
//! Rendering is deterministic: the same profile always yields the same prompt.

use crate::llm_client::prompts::MARKDOWN_ONLY_INSTRUCTION;
use crate::planner::profile::{DietProfile, WorkoutProfile};

/// Used when the goal is not in `goal_focus`'s table.
pub const GENERIC_GOAL_FOCUS: &str =
    "Build a balanced plan that improves overall fitness, with steady progressive overload.";

/// Goal-specific training instruction.
pub fn goal_focus(goal: &str) -> &'static str {
    match goal {
        "Fat Loss" => {
            "Prioritise calorie burn: compound lifts in circuits, short rest (30-60s), \
            and 2-3 cardio or HIIT finishers per week."
        }
        "Muscle Gain" => {
            "Prioritise hypertrophy: 8-12 rep ranges, 60-90s rest, \
            enough weekly volume per muscle group and progressive overload."
        }
        "Recomposition" => {
            "Balance strength and conditioning: heavy compounds early in each session, \
            moderate-rep accessories after, and light cardio on off days."
        }
        "Strength" => {
            "Prioritise the main lifts (squat, bench, deadlift, overhead press) \
            in 3-6 rep ranges with 2-3 minutes rest and planned weekly progression."
        }
        _ => GENERIC_GOAL_FOCUS,
    }
}

pub fn build_workout_request(profile: &WorkoutProfile) -> String {
    format!(
        "You are an Indian certified gym trainer.\n\
        Create a 7-day workout plan for:\n\
        Age: {age}, Sex: {sex}, Height: {height} cm, Weight: {weight} kg\n\
        Experience: {experience}, Days: {days}, Equipment: {equipment}, Goal: {goal}\n\
        \n\
        Rules:\n\
        - Day-wise exercises aligned with goal.\n\
        - Include sets, reps, and rest.\n\
        - {focus}\n\
        {markdown_only}\n",
        age = profile.age,
        sex = profile.sex,
        height = profile.height_cm,
        weight = profile.weight_kg,
        experience = profile.experience,
        days = profile.days_per_week,
        equipment = profile.equipment,
        goal = profile.goal,
        focus = goal_focus(&profile.goal),
        markdown_only = MARKDOWN_ONLY_INSTRUCTION,
    )
}

pub fn build_diet_request(profile: &DietProfile) -> String {
    format!(
        "You are an Indian nutritionist.\n\
        Create a detailed 7-day Indian student-friendly diet plan for a {diet_type} who wants {goal}.\n\
        Age: {age}, Weight: {weight} kg.\n\
        Include: Breakfast, Lunch, Snacks, and Dinner.\n\
        Provide daily calorie total and protein estimation.\n\
        {markdown_only}\n",
        diet_type = profile.diet_type,
        goal = profile.goal,
        age = profile.age,
        weight = profile.weight_kg,
        markdown_only = MARKDOWN_ONLY_INSTRUCTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::profile::fixtures::{diet, workout};

    #[test]
    fn test_workout_request_embeds_every_field() {
        let prompt = build_workout_request(&workout("Fat Loss"));
        for expected in [
            "Age: 22",
            "Sex: Male",
            "Height: 175 cm",
            "Weight: 70 kg",
            "Experience: Beginner",
            "Days: 4",
            "Equipment: Full Gym",
            "Goal: Fat Loss",
        ] {
            assert!(prompt.contains(expected), "missing `{expected}` in:\n{prompt}");
        }
    }

    #[test]
    fn test_workout_request_is_deterministic() {
        let profile = workout("Strength");
        assert_eq!(build_workout_request(&profile), build_workout_request(&profile));
    }

    #[test]
    fn test_each_known_goal_gets_its_own_focus() {
        let goals = ["Fat Loss", "Muscle Gain", "Recomposition", "Strength"];
        for goal in goals {
            let focus = goal_focus(goal);
            assert_ne!(focus, GENERIC_GOAL_FOCUS, "{goal} should have a dedicated focus");
            assert!(build_workout_request(&workout(goal)).contains(focus));
        }
        let distinct: std::collections::HashSet<_> = goals.iter().map(|g| goal_focus(g)).collect();
        assert_eq!(distinct.len(), goals.len());
    }

    #[test]
    fn test_unknown_goal_falls_back_to_generic_focus() {
        assert_eq!(goal_focus("Marathon Prep"), GENERIC_GOAL_FOCUS);
        assert_eq!(goal_focus("fat loss"), GENERIC_GOAL_FOCUS);
        let prompt = build_workout_request(&workout("Marathon Prep"));
        assert!(prompt.contains(GENERIC_GOAL_FOCUS));
        assert!(prompt.contains("Goal: Marathon Prep"));
    }

    #[test]
    fn test_diet_request_embeds_every_field() {
        let prompt = build_diet_request(&diet("Muscle Gain"));
        assert!(prompt.contains("for a Vegetarian who wants Muscle Gain"));
        assert!(prompt.contains("Age: 22, Weight: 70 kg."));
        assert!(prompt.contains("Breakfast, Lunch, Snacks, and Dinner"));
        assert!(prompt.ends_with(&format!("{MARKDOWN_ONLY_INSTRUCTION}\n")));
    }
}
