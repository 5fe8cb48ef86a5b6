#![warn(clippy::pedantic)]

use std::sync::{Arc, Mutex};

use seed::{prelude::*, *};

use lacertus_storage as storage;
use lacertus_web_app as web_app;

mod common;
mod component;
mod data;
mod page;

// ------ ------
//     Init
// ------ ------

fn init(url: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders
        .subscribe(Msg::UrlChanged)
        .subscribe(Msg::Data)
        .subscribe(Msg::DataEvent);

    let data = data::init(&mut orders.proxy(Msg::Data));
    let page = Page::init(url, orders, &data);

    Model {
        page,
        auth_dialog: None,
        notification: None,
        data,
    }
}

// ------ ------
//     Model
// ------ ------

struct Model {
    page: Page,
    auth_dialog: Option<component::auth_dialog::Model>,
    notification: Option<String>,
    data: data::Model,
}

enum Page {
    Catalog(page::catalog::Model),
    NotFound,
}

impl Page {
    fn init(mut url: Url, orders: &mut impl Orders<Msg>, data_model: &data::Model) -> Self {
        match url.remaining_path_parts().as_slice() {
            [] => Self::Catalog(page::catalog::init(
                &mut orders.proxy(Msg::Catalog),
                data_model,
            )),
            _ => Self::NotFound,
        }
    }
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    UrlChanged(subs::UrlChanged),

    ShowAuthDialog,
    AuthDialog(component::auth_dialog::Msg),
    LogOut,
    CloseNotification,

    Data(data::Msg),
    DataEvent(data::Event),

    Catalog(page::catalog::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::UrlChanged(subs::UrlChanged(url)) => {
            model.page = Page::init(url, orders, &model.data);
        }

        Msg::ShowAuthDialog => {
            model.auth_dialog = Some(component::auth_dialog::Model::default());
        }
        Msg::AuthDialog(msg) => {
            if let Some(auth_dialog) = &mut model.auth_dialog {
                match component::auth_dialog::update(
                    msg,
                    auth_dialog,
                    &mut orders.proxy(Msg::AuthDialog),
                ) {
                    component::auth_dialog::OutMsg::None => {}
                    component::auth_dialog::OutMsg::Close => model.auth_dialog = None,
                }
            }
        }
        Msg::LogOut => {
            orders.send_msg(Msg::Data(data::Msg::DeleteSession));
        }
        Msg::CloseNotification => {
            model.notification = None;
        }

        Msg::Data(msg) => data::update(msg, &mut model.data, &mut orders.proxy(Msg::Data)),
        Msg::DataEvent(event) => match event {
            data::Event::LoggedIn(mode) => {
                model.auth_dialog = None;
                if mode == data::AuthMode::Signup {
                    model.notification = Some(String::from(
                        "Inscription réussie ! Vous êtes maintenant connecté.",
                    ));
                }
            }
            data::Event::AuthFailed(message) => {
                orders.send_msg(Msg::AuthDialog(component::auth_dialog::Msg::Failed(
                    message,
                )));
            }
        },

        Msg::Catalog(msg) => {
            if let Page::Catalog(page_model) = &mut model.page {
                page::catalog::update(msg, page_model, &model.data, &mut orders.proxy(Msg::Catalog));
            }
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![
        view_navbar(model.data.session.as_ref()),
        view_notification(model.notification.as_ref()),
        match &model.auth_dialog {
            Some(auth_dialog) =>
                component::auth_dialog::view(auth_dialog).map_msg(Msg::AuthDialog),
            None => empty![],
        },
        view_page(&model.page),
    ]
}

fn view_navbar(session: Option<&lacertus_domain::Session>) -> Node<Msg> {
    nav![
        C!["navbar"],
        C!["is-fixed-top"],
        C!["is-success"],
        div![
            C!["container"],
            div![
                C!["navbar-brand"],
                div![
                    C!["navbar-item"],
                    C!["has-text-light"],
                    C!["has-text-weight-bold"],
                    C!["is-size-5"],
                    "Lacertus",
                ],
            ],
            div![
                C!["navbar-menu"],
                C!["is-active"],
                div![
                    C!["navbar-end"],
                    match session {
                        Some(session) => div![
                            C!["navbar-item"],
                            span![
                                C!["tag"],
                                C!["is-medium"],
                                C!["has-text-light"],
                                C!["has-background-grey"],
                                C!["has-text-weight-bold"],
                                if session.user.email.is_empty() {
                                    "Utilisateur"
                                } else {
                                    session.user.email.as_str()
                                }
                            ],
                            a![
                                C!["icon"],
                                C!["is-size-5"],
                                C!["has-text-light"],
                                C!["px-5"],
                                attrs! {
                                    At::AriaLabel => "logout",
                                },
                                ev(Ev::Click, |_| Msg::LogOut),
                                i![C!["fas fa-sign-out-alt"]],
                            ]
                        ],
                        None => div![
                            C!["navbar-item"],
                            button![
                                C!["button"],
                                C!["is-light"],
                                ev(Ev::Click, |_| Msg::ShowAuthDialog),
                                "Connexion",
                            ]
                        ],
                    }
                ],
            ]
        ]
    ]
}

fn view_notification(notification: Option<&String>) -> Node<Msg> {
    match notification {
        Some(message) => div![
            C!["notification"],
            C!["is-success"],
            C!["mx-2"],
            C!["my-4"],
            button![
                C!["delete"],
                ev(Ev::Click, |_| Msg::CloseNotification),
            ],
            message,
        ],
        None => empty![],
    }
}

fn view_page(page: &Page) -> Node<Msg> {
    div![
        C!["container"],
        C!["is-max-desktop"],
        C!["py-4"],
        match page {
            Page::Catalog(model) => page::catalog::view(model).map_msg(Msg::Catalog),
            Page::NotFound => page::not_found::view(),
        }
    ]
}

// ------ ------
//     Start
// ------ ------

fn main() {
    web_app::log::init(Arc::new(Mutex::new(storage::local_storage::Log)))
        .expect("failed to initialize logger");
    App::start("app", init, update, view);
}
