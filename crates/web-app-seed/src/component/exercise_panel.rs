use log::warn;
use seed::{prelude::*, *};

use lacertus_domain as domain;

use crate::{common, data};

const VISIBLE_EXERCISES: usize = 5;

// ------ ------
//     Model
// ------ ------

/// Collapsible exercise list of one muscle-group card.
///
/// The exercises are fetched once, on the first expansion. A settled fetch is
/// never repeated, even when it failed. A panel without a resolved muscle is
/// permanently expanded and never fetches.
pub struct Model {
    muscle_id: Option<u32>,
    expanded: bool,
    show_all: bool,
    content: Content,
}

enum Content {
    NotLoaded,
    Loading,
    Loaded(Vec<domain::ExercisePreview>),
    Empty,
    Failed,
}

impl Model {
    #[must_use]
    pub fn new(muscle_id: Option<u32>) -> Self {
        Self {
            muscle_id,
            expanded: muscle_id.is_none(),
            show_all: false,
            content: Content::NotLoaded,
        }
    }

    #[must_use]
    pub fn available(&self) -> bool {
        self.muscle_id.is_some()
    }

    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the panel and returns the muscle id when a fetch has to be
    /// issued. At most one fetch is ever issued per panel.
    fn toggle(&mut self) -> Option<u32> {
        let muscle_id = self.muscle_id?;
        self.expanded = !self.expanded;
        if self.expanded && matches!(self.content, Content::NotLoaded) {
            self.content = Content::Loading;
            return Some(muscle_id);
        }
        None
    }
}

// ------ ------
//    Update
// ------ ------

pub enum Msg {
    Toggled,
    ExercisesRead(Result<Vec<domain::RemoteExercise>, String>),
    ShowAllToggled,
}

pub fn update(msg: Msg, model: &mut Model, data_model: &data::Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Toggled => {
            if let Some(muscle_id) = model.toggle() {
                let storage = data_model.storage.clone();
                orders.perform_cmd(async move {
                    Msg::ExercisesRead(
                        storage
                            .read_exercises(muscle_id)
                            .await
                            .map_err(|err| err.to_string()),
                    )
                });
            }
        }
        Msg::ExercisesRead(Ok(exercises)) => {
            let previews = domain::previews(&exercises);
            model.content = if previews.is_empty() {
                Content::Empty
            } else {
                Content::Loaded(previews)
            };
        }
        Msg::ExercisesRead(Err(message)) => {
            warn!("Failed to read exercises: {message}");
            model.content = Content::Failed;
        }
        Msg::ShowAllToggled => {
            model.show_all = !model.show_all;
        }
    }
}

// ------ ------
//     View
// ------ ------

pub fn view(model: &Model, illustration: Option<&str>, side: domain::Side) -> Node<Msg> {
    if !model.available() {
        return common::view_placeholder("Muscle indisponible dans l'API");
    }
    if !model.expanded {
        return empty![];
    }
    match &model.content {
        Content::NotLoaded | Content::Loading => div![
            common::view_loading(),
            p![
                C!["has-text-centered"],
                C!["is-size-7"],
                "Chargement des exercices..."
            ],
        ],
        Content::Empty => common::view_placeholder("Aucun exercice trouve"),
        Content::Failed => common::view_placeholder("Erreur lors du chargement des exercices"),
        Content::Loaded(previews) => view_previews(previews, model.show_all, illustration, side),
    }
}

fn view_previews(
    previews: &[domain::ExercisePreview],
    show_all: bool,
    illustration: Option<&str>,
    side: domain::Side,
) -> Node<Msg> {
    div![
        ul![
            previews.iter().enumerate().map(|(index, preview)| {
                let hidden = index >= VISIBLE_EXERCISES && !show_all;
                view_preview(preview, hidden, illustration, side)
            })
        ],
        IF![
            previews.len() > VISIBLE_EXERCISES =>
            button![
                C!["button"],
                C!["is-small"],
                C!["is-fullwidth"],
                C!["mt-2"],
                ev(Ev::Click, |_| Msg::ShowAllToggled),
                if show_all { "Voir moins" } else { "Voir plus" },
            ]
        ],
    ]
}

fn view_preview(
    preview: &domain::ExercisePreview,
    hidden: bool,
    illustration: Option<&str>,
    side: domain::Side,
) -> Node<Msg> {
    li![
        C!["block"],
        C![IF![hidden => "is-hidden"]],
        div![
            C!["is-flex"],
            C!["is-justify-content-space-between"],
            C!["is-align-items-center"],
            span![C!["is-size-6"], C!["has-text-weight-bold"], &preview.name],
            span![C!["tag"], preview.difficulty.to_string()],
        ],
        match illustration {
            Some(image_url) => img![
                C![format!("is-{side}")],
                attrs! {
                    At::Src => image_url,
                    At::Alt => preview.name,
                }
            ],
            None => p![
                C!["is-size-7"],
                C!["has-text-grey-light"],
                "Illustration indisponible"
            ],
        },
        p![
            C!["is-size-7"],
            if preview.description.is_empty() {
                "Description indisponible."
            } else {
                preview.description.as_str()
            }
        ],
    ]
}

// ------ ------
//     Tests
// ------ ------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toggle_fetches_once() {
        let mut model = Model::new(Some(1));
        assert!(!model.expanded());

        assert_eq!(model.toggle(), Some(1));
        assert!(model.expanded());
        assert!(matches!(model.content, Content::Loading));

        assert_eq!(model.toggle(), None);
        assert!(!model.expanded());

        assert_eq!(model.toggle(), None);
        assert!(model.expanded());
    }

    #[test]
    fn test_toggle_after_loading() {
        let mut model = Model::new(Some(1));
        assert_eq!(model.toggle(), Some(1));
        model.content = Content::Loaded(vec![]);

        assert_eq!(model.toggle(), None);
        assert_eq!(model.toggle(), None);
    }

    #[test]
    fn test_failed_fetch_is_not_repeated() {
        let mut model = Model::new(Some(1));
        assert_eq!(model.toggle(), Some(1));
        model.content = Content::Failed;

        assert_eq!(model.toggle(), None);
        assert_eq!(model.toggle(), None);
        assert!(matches!(model.content, Content::Failed));
    }

    #[test]
    fn test_unavailable_panel() {
        let mut model = Model::new(None);
        assert!(!model.available());
        assert!(model.expanded());

        assert_eq!(model.toggle(), None);
        assert!(model.expanded());
        assert!(matches!(model.content, Content::NotLoaded));
    }
}
