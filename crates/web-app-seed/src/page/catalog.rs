use log::warn;
use seed::{prelude::*, *};

use lacertus_domain as domain;

use crate::{common, component::exercise_panel, data};

// ------ ------
//     Init
// ------ ------

pub fn init(orders: &mut impl Orders<Msg>, data_model: &data::Model) -> Model {
    let storage = data_model.storage.clone();
    orders.perform_cmd(async move {
        Msg::MusclesRead(storage.read_muscles().await.map_err(|err| err.to_string()))
    });

    Model {
        catalog: Catalog::Loading,
    }
}

// ------ ------
//     Model
// ------ ------

pub struct Model {
    catalog: Catalog,
}

enum Catalog {
    Loading,
    Loaded(Vec<Card>),
    Empty,
    Failed,
}

struct Card {
    group: domain::MuscleGroup,
    muscle: Option<domain::ResolvedMuscle>,
    panel: exercise_panel::Model,
}

impl Card {
    fn new(group: domain::MuscleGroup, muscles: &[domain::RemoteMuscle]) -> Self {
        let muscle =
            domain::find_muscle(muscles, group.keywords()).map(domain::ResolvedMuscle::from);
        let panel = exercise_panel::Model::new(muscle.as_ref().map(|muscle| muscle.id));
        Self {
            group,
            muscle,
            panel,
        }
    }
}

// ------ ------
//    Update
// ------ ------

pub enum Msg {
    MusclesRead(Result<Vec<domain::RemoteMuscle>, String>),
    ExercisePanel(usize, exercise_panel::Msg),
}

pub fn update(msg: Msg, model: &mut Model, data_model: &data::Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::MusclesRead(Ok(muscles)) => {
            model.catalog = if muscles.is_empty() {
                Catalog::Empty
            } else {
                Catalog::Loaded(
                    domain::MuscleGroup::iter()
                        .map(|group| Card::new(*group, &muscles))
                        .collect(),
                )
            };
        }
        Msg::MusclesRead(Err(message)) => {
            warn!("Failed to read muscles: {message}");
            model.catalog = Catalog::Failed;
        }
        Msg::ExercisePanel(index, msg) => {
            if let Catalog::Loaded(cards) = &mut model.catalog {
                if let Some(card) = cards.get_mut(index) {
                    exercise_panel::update(
                        msg,
                        &mut card.panel,
                        data_model,
                        &mut orders.proxy(move |msg| Msg::ExercisePanel(index, msg)),
                    );
                }
            }
        }
    }
}

// ------ ------
//     View
// ------ ------

pub fn view(model: &Model) -> Node<Msg> {
    match &model.catalog {
        Catalog::Loading => common::view_page_loading(),
        Catalog::Empty => common::view_placeholder("Aucun muscle trouvé"),
        Catalog::Failed => common::view_placeholder("Erreur lors du chargement des muscles"),
        Catalog::Loaded(cards) => div![
            cards
                .iter()
                .enumerate()
                .map(|(index, card)| view_card(index, card))
                .collect::<Vec<_>>()
        ],
    }
}

fn view_card(index: usize, card: &Card) -> Node<Msg> {
    let side = card.group.side();
    div![
        C!["box"],
        C!["mx-2"],
        C!["my-4"],
        div![
            C!["is-flex"],
            C!["is-justify-content-space-between"],
            C!["is-align-items-center"],
            h1![C!["title"], C!["is-5"], C!["mb-0"], card.group.label()],
            view_toggle(index, &card.panel),
        ],
        match card.muscle.as_ref().and_then(|muscle| muscle.image_url.as_ref()) {
            Some(image_url) => div![
                C!["has-text-centered"],
                C!["my-3"],
                img![
                    C![format!("is-{side}")],
                    attrs! {
                        At::Src => image_url,
                        At::Alt => card.group.label(),
                    }
                ]
            ],
            None => empty![],
        },
        exercise_panel::view(
            &card.panel,
            card.muscle
                .as_ref()
                .and_then(|muscle| muscle.image_url.as_deref()),
            side,
        )
        .map_msg(move |msg| Msg::ExercisePanel(index, msg)),
    ]
}

fn view_toggle(index: usize, panel: &exercise_panel::Model) -> Node<Msg> {
    button![
        C!["button"],
        C!["is-small"],
        C!["is-link"],
        attrs! {
            At::Disabled => (!panel.available()).as_at_value(),
        },
        ev(Ev::Click, move |_| Msg::ExercisePanel(
            index,
            exercise_panel::Msg::Toggled
        )),
        if panel.available() && panel.expanded() {
            "Masquer"
        } else {
            "Voir exercices"
        },
    ]
}
