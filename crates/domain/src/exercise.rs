use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::{strip_html, trim_text};

/// Language id the exercise API assigns to French, the language of the UI.
pub const TARGET_LANGUAGE_ID: u32 = 12;

/// Upper bound on the number of API results processed per muscle.
pub const MAX_EXERCISES: usize = 50;

const DESCRIPTION_LIMIT: usize = 220;

/// Exercise record as returned by the external API. Read-only view, not owned.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RemoteExercise {
    pub id: u32,
    #[serde(default)]
    pub equipment: Vec<Value>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub images: Vec<RemoteExerciseImage>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Translation {
    #[serde(default)]
    pub language: Option<u32>,
    #[serde(default)]
    pub language_id: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Translation {
    /// The API emits either `language` or `language_id` depending on the
    /// deployment. `language` wins when both are present.
    #[must_use]
    pub fn language_tag(&self) -> Option<u32> {
        self.language.or(self.language_id)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteExerciseImage {
    #[serde(default)]
    pub image: String,
}

/// Difficulty bucket derived from the number of required equipment items.
/// Not provided by the external API.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn from_equipment_count(count: usize) -> Self {
        match count {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Difficulty::Easy => "Facile",
                Difficulty::Medium => "Moyen",
                Difficulty::Hard => "Difficile",
            }
        )
    }
}

/// Render-ready projection of one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePreview {
    pub name: String,
    pub difficulty: Difficulty,
    pub description: String,
}

impl ExercisePreview {
    fn from_remote(exercise: &RemoteExercise) -> Option<Self> {
        let translation = exercise
            .translations
            .iter()
            .find(|translation| translation.language_tag() == Some(TARGET_LANGUAGE_ID))?;
        let name = translation.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            difficulty: Difficulty::from_equipment_count(exercise.equipment.len()),
            description: trim_text(&strip_html(&translation.description), DESCRIPTION_LIMIT),
        })
    }
}

/// Projects API results onto the previews shown in an exercise panel.
///
/// At most [`MAX_EXERCISES`] results are considered. Exercises without a
/// translation in the target language are skipped, there is no fallback
/// language. Exercises whose translated name is empty after trimming are
/// skipped as well.
#[must_use]
pub fn previews(exercises: &[RemoteExercise]) -> Vec<ExercisePreview> {
    exercises
        .iter()
        .take(MAX_EXERCISES)
        .filter_map(ExercisePreview::from_remote)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn translation(language: u32, name: &str, description: &str) -> Translation {
        Translation {
            language: Some(language),
            language_id: None,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn exercise(id: u32, equipment: usize, translations: Vec<Translation>) -> RemoteExercise {
        RemoteExercise {
            id,
            equipment: (0..equipment).map(|i| json!(i)).collect(),
            translations,
            images: vec![],
        }
    }

    #[rstest]
    #[case(0, Difficulty::Easy)]
    #[case(1, Difficulty::Medium)]
    #[case(2, Difficulty::Hard)]
    #[case(5, Difficulty::Hard)]
    fn test_difficulty_from_equipment_count(#[case] count: usize, #[case] expected: Difficulty) {
        assert_eq!(Difficulty::from_equipment_count(count), expected);
    }

    #[rstest]
    #[case(Difficulty::Easy, "Facile")]
    #[case(Difficulty::Medium, "Moyen")]
    #[case(Difficulty::Hard, "Difficile")]
    fn test_difficulty_display(#[case] difficulty: Difficulty, #[case] label: &str) {
        assert_eq!(difficulty.to_string(), label);
    }

    #[test]
    fn test_previews() {
        let exercises = vec![
            exercise(
                1,
                0,
                vec![translation(TARGET_LANGUAGE_ID, "Pompes", "<p>Au sol.</p>")],
            ),
            exercise(2, 1, vec![translation(2, "Push-ups", "English only")]),
            exercise(3, 2, vec![translation(TARGET_LANGUAGE_ID, "   ", "x")]),
            exercise(
                4,
                3,
                vec![
                    translation(2, "Dips", ""),
                    translation(TARGET_LANGUAGE_ID, " Dips ", ""),
                ],
            ),
        ];
        assert_eq!(
            previews(&exercises),
            vec![
                ExercisePreview {
                    name: "Pompes".to_string(),
                    difficulty: Difficulty::Easy,
                    description: "Au sol.".to_string(),
                },
                ExercisePreview {
                    name: "Dips".to_string(),
                    difficulty: Difficulty::Hard,
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_previews_bounded() {
        // 60 results, the first 5 without a usable translation. Only the first
        // 50 results are considered at all.
        let mut exercises = (0..5).map(|i| exercise(i, 0, vec![])).collect::<Vec<_>>();
        exercises.extend((5..60).map(|i| {
            exercise(
                i,
                0,
                vec![translation(TARGET_LANGUAGE_ID, &format!("Exercice {i}"), "")],
            )
        }));
        let previews = previews(&exercises);
        assert_eq!(previews.len(), 45);
        assert_eq!(previews[0].name, "Exercice 5");
        assert_eq!(previews.last().unwrap().name, "Exercice 49");
    }

    #[test]
    fn test_previews_description_truncated() {
        let description = format!("<p>{}</p>", "mot ".repeat(100));
        let exercises = vec![exercise(
            1,
            0,
            vec![translation(TARGET_LANGUAGE_ID, "Rowing", &description)],
        )];
        let previews = previews(&exercises);
        assert!(previews[0].description.chars().count() <= 223);
        assert!(previews[0].description.ends_with("..."));
        assert!(!previews[0].description.contains('<'));
    }

    #[test]
    fn test_translation_language_tag() {
        let mut translation = translation(2, "x", "");
        assert_eq!(translation.language_tag(), Some(2));
        translation.language = None;
        translation.language_id = Some(12);
        assert_eq!(translation.language_tag(), Some(12));
        translation.language_id = None;
        assert_eq!(translation.language_tag(), None);
    }

    #[test]
    fn test_remote_exercise_deserialization_defaults() {
        let exercise: RemoteExercise = serde_json::from_value(json!({ "id": 9 })).unwrap();
        assert_eq!(
            exercise,
            RemoteExercise {
                id: 9,
                equipment: vec![],
                translations: vec![],
                images: vec![],
            }
        );
    }
}
