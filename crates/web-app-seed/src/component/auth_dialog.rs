use seed::{prelude::*, *};

use lacertus_domain as domain;

use crate::{common, data};

// ------ ------
//     Model
// ------ ------

pub struct Model {
    mode: data::AuthMode,
    email: String,
    password: String,
    show_password: bool,
    error: Option<String>,
    loading: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            mode: data::AuthMode::Login,
            email: String::new(),
            password: String::new(),
            show_password: false,
            error: None,
            loading: false,
        }
    }
}

// ------ ------
//    Update
// ------ ------

pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    SwitchMode,
    Submit,
    Failed(String),
    Close,
}

pub enum OutMsg {
    None,
    Close,
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) -> OutMsg {
    match msg {
        Msg::EmailChanged(email) => {
            model.email = email;
            OutMsg::None
        }
        Msg::PasswordChanged(password) => {
            model.password = password;
            OutMsg::None
        }
        Msg::TogglePasswordVisibility => {
            model.show_password = !model.show_password;
            OutMsg::None
        }
        Msg::SwitchMode => {
            model.mode = match model.mode {
                data::AuthMode::Login => data::AuthMode::Signup,
                data::AuthMode::Signup => data::AuthMode::Login,
            };
            model.error = None;
            OutMsg::None
        }
        Msg::Submit => {
            if !model.loading {
                model.loading = true;
                model.error = None;
                let credentials = domain::Credentials {
                    email: model.email.clone(),
                    password: model.password.clone(),
                };
                orders.notify(match model.mode {
                    data::AuthMode::Login => data::Msg::LogIn(credentials),
                    data::AuthMode::Signup => data::Msg::SignUp(credentials),
                });
            }
            OutMsg::None
        }
        Msg::Failed(message) => {
            model.error = Some(message);
            model.loading = false;
            OutMsg::None
        }
        Msg::Close => OutMsg::Close,
    }
}

// ------ ------
//     View
// ------ ------

pub fn view(model: &Model) -> Node<Msg> {
    let (title, submit_label, switch_text, switch_label) = match model.mode {
        data::AuthMode::Login => ("Connexion", "Se connecter", "Pas de compte ?", "S'inscrire"),
        data::AuthMode::Signup => (
            "Inscription",
            "S'inscrire",
            "Déjà un compte ?",
            "Se connecter",
        ),
    };
    div![
        C!["modal"],
        C!["is-active"],
        div![C!["modal-background"], ev(Ev::Click, |_| Msg::Close)],
        div![
            C!["modal-content"],
            div![
                C!["box"],
                C!["mx-2"],
                h1![C!["title"], C!["is-5"], title],
                match &model.error {
                    Some(message) => div![
                        C!["notification"],
                        C!["is-danger"],
                        C!["is-light"],
                        message,
                    ],
                    None => empty![],
                },
                div![
                    C!["field"],
                    div![
                        C!["control"],
                        input![
                            C!["input"],
                            attrs! {
                                At::Type => "email",
                                At::Placeholder => "Email",
                                At::Value => model.email,
                            },
                            input_ev(Ev::Input, Msg::EmailChanged),
                        ],
                    ]
                ],
                div![
                    C!["field"],
                    C!["has-addons"],
                    div![
                        C!["control"],
                        C!["is-expanded"],
                        input![
                            C!["input"],
                            attrs! {
                                At::Type => if model.show_password { "text" } else { "password" },
                                At::Placeholder => "Mot de passe",
                                At::Value => model.password,
                            },
                            input_ev(Ev::Input, Msg::PasswordChanged),
                            keyboard_ev(Ev::KeyDown, |keyboard_event| {
                                IF!(keyboard_event.key_code() == common::ENTER_KEY => Msg::Submit)
                            }),
                        ],
                    ],
                    div![
                        C!["control"],
                        button![
                            C!["button"],
                            ev(Ev::Click, |_| Msg::TogglePasswordVisibility),
                            if model.show_password { "🙈" } else { "👁️" },
                        ]
                    ],
                ],
                div![
                    C!["field"],
                    div![
                        C!["control"],
                        button![
                            C!["button"],
                            C!["is-link"],
                            C!["is-fullwidth"],
                            C![IF![model.loading => "is-loading"]],
                            attrs! {
                                At::Disabled => model.loading.as_at_value(),
                            },
                            ev(Ev::Click, |_| Msg::Submit),
                            submit_label,
                        ]
                    ]
                ],
                p![
                    C!["has-text-centered"],
                    span![switch_text, " "],
                    a![ev(Ev::Click, |_| Msg::SwitchMode), switch_label],
                ],
            ]
        ],
        button![
            C!["modal-close"],
            attrs! {
                At::AriaLabel => "close",
            },
            ev(Ev::Click, |_| Msg::Close),
        ]
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
    fn test_default_model() {
        let model = Model::default();
        assert_eq!(model.mode, data::AuthMode::Login);
        assert_eq!(model.email, "");
        assert_eq!(model.password, "");
        assert!(model.error.is_none());
        assert!(!model.loading);
    }
}
