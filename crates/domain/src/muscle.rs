use std::{fmt, slice::Iter};

use serde::Deserialize;

/// Base URL of the external image host. The muscle API returns relative paths.
const IMAGE_BASE_URL: &str = "https://wger.de";

/// Fixed set of muscle groups shown on the catalog page.
///
/// Each group is mapped onto the records of the external muscle API by keyword
/// matching, see [`find_muscle`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleGroup {
    Biceps,
    Triceps,
    Back,
    Abs,
    Shoulders,
    Chest,
}

impl MuscleGroup {
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 6] = [
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Back,
            MuscleGroup::Abs,
            MuscleGroup::Shoulders,
            MuscleGroup::Chest,
        ];
        MUSCLE_GROUPS.iter()
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Back => "dos",
            MuscleGroup::Abs => "abdos",
            MuscleGroup::Shoulders => "epaules",
            MuscleGroup::Chest => "pectoraux",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Back => "Dos",
            MuscleGroup::Abs => "Abdos",
            MuscleGroup::Shoulders => "Epaules",
            MuscleGroup::Chest => "Pectoraux",
        }
    }

    /// Keywords matched against muscle names, in declared order.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            MuscleGroup::Biceps => &["biceps"],
            MuscleGroup::Triceps => &["triceps"],
            MuscleGroup::Back => &["back", "latissimus", "lats"],
            MuscleGroup::Abs => &["abdominals", "obliques", "rectus"],
            MuscleGroup::Shoulders => &["deltoid", "shoulder"],
            MuscleGroup::Chest => &["pectoralis", "chest"],
        }
    }

    /// Orientation of the muscle illustration.
    #[must_use]
    pub fn side(self) -> Side {
        match self {
            MuscleGroup::Triceps | MuscleGroup::Back => Side::Back,
            MuscleGroup::Biceps
            | MuscleGroup::Abs
            | MuscleGroup::Shoulders
            | MuscleGroup::Chest => Side::Front,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Front,
    Back,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::Front => "front",
                Side::Back => "back",
            }
        )
    }
}

/// Muscle record as returned by the external API. Read-only view, not owned.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteMuscle {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub image_url_main: String,
}

impl RemoteMuscle {
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        if self.image_url_main.is_empty() {
            None
        } else {
            Some(format!("{IMAGE_BASE_URL}{}", self.image_url_main))
        }
    }
}

/// Outcome of matching one muscle group against the fetched muscle list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMuscle {
    pub id: u32,
    pub image_url: Option<String>,
}

impl From<&RemoteMuscle> for ResolvedMuscle {
    fn from(muscle: &RemoteMuscle) -> Self {
        Self {
            id: muscle.id,
            image_url: muscle.image_url(),
        }
    }
}

/// Returns the first muscle whose native or English name contains any of the
/// given keywords, case-insensitively.
///
/// Candidate order is decisive: the first matching muscle wins regardless of
/// which keyword matched it.
#[must_use]
pub fn find_muscle<'a>(muscles: &'a [RemoteMuscle], keywords: &[&str]) -> Option<&'a RemoteMuscle> {
    let keywords = keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .collect::<Vec<_>>();
    muscles.iter().find(|muscle| {
        let name = muscle.name.to_lowercase();
        let name_en = muscle.name_en.to_lowercase();
        keywords
            .iter()
            .any(|keyword| name.contains(keyword) || name_en.contains(keyword))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn muscle(id: u32, name: &str, name_en: &str) -> RemoteMuscle {
        RemoteMuscle {
            id,
            name: name.to_string(),
            name_en: name_en.to_string(),
            image_url_main: String::new(),
        }
    }

    #[test]
    fn test_muscle_group_iter() {
        assert_eq!(
            MuscleGroup::iter().copied().collect::<Vec<_>>(),
            vec![
                MuscleGroup::Biceps,
                MuscleGroup::Triceps,
                MuscleGroup::Back,
                MuscleGroup::Abs,
                MuscleGroup::Shoulders,
                MuscleGroup::Chest,
            ]
        );
    }

    #[test]
    fn test_muscle_group_keywords_not_empty() {
        for group in MuscleGroup::iter() {
            assert!(!group.keywords().is_empty(), "{}", group.key());
        }
    }

    #[rstest]
    #[case(MuscleGroup::Biceps, Side::Front)]
    #[case(MuscleGroup::Triceps, Side::Back)]
    #[case(MuscleGroup::Back, Side::Back)]
    #[case(MuscleGroup::Abs, Side::Front)]
    #[case(MuscleGroup::Shoulders, Side::Front)]
    #[case(MuscleGroup::Chest, Side::Front)]
    fn test_muscle_group_side(#[case] group: MuscleGroup, #[case] side: Side) {
        assert_eq!(group.side(), side);
    }

    #[rstest]
    #[case(&["biceps"], Some(1))]
    #[case(&["BICEPS"], Some(1))]
    #[case(&["brachii"], Some(1))]
    #[case(&["shoulder"], Some(2))]
    #[case(&["deltoid", "shoulder"], Some(2))]
    #[case(&["pectoralis", "chest"], None)]
    fn test_find_muscle(#[case] keywords: &[&str], #[case] expected: Option<u32>) {
        let muscles = vec![
            muscle(1, "Biceps brachii", "Biceps"),
            muscle(2, "Deltoideus", "Shoulders"),
        ];
        assert_eq!(find_muscle(&muscles, keywords).map(|m| m.id), expected);
    }

    #[test]
    fn test_find_muscle_first_candidate_wins() {
        let muscles = vec![
            muscle(7, "Latissimus dorsi", "Lats"),
            muscle(8, "Erector spinae", "Lower back"),
        ];
        // Both candidates match a keyword of the back group. The keyword order
        // is irrelevant, the candidate order decides.
        assert_eq!(
            find_muscle(&muscles, &["back", "latissimus", "lats"]).map(|m| m.id),
            Some(7)
        );
    }

    #[test]
    fn test_find_muscle_single_candidate() {
        let muscles = vec![muscle(1, "Biceps brachii", "biceps")];
        assert_eq!(
            find_muscle(&muscles, MuscleGroup::Biceps.keywords()).map(|m| m.id),
            Some(1)
        );
        for group in MuscleGroup::iter().filter(|g| **g != MuscleGroup::Biceps) {
            assert_eq!(find_muscle(&muscles, group.keywords()), None);
        }
    }

    #[test]
    fn test_find_muscle_empty() {
        assert_eq!(find_muscle(&[], &["biceps"]), None);
    }

    #[rstest]
    #[case("", None)]
    #[case("/static/images/muscles/main/muscle-1.svg", Some("https://wger.de/static/images/muscles/main/muscle-1.svg"))]
    fn test_remote_muscle_image_url(#[case] path: &str, #[case] expected: Option<&str>) {
        let muscle = RemoteMuscle {
            id: 1,
            name: String::new(),
            name_en: String::new(),
            image_url_main: path.to_string(),
        };
        assert_eq!(muscle.image_url().as_deref(), expected);
    }
}
