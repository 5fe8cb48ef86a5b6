use seed::{prelude::*, *};

pub const ENTER_KEY: u32 = 13;

pub fn view_loading<Ms>() -> Node<Ms> {
    div![
        C!["is-size-4"],
        C!["has-text-centered"],
        i![C!["fas fa-spinner fa-pulse"]]
    ]
}

pub fn view_page_loading<Ms>() -> Node<Ms> {
    div![
        C!["is-size-2"],
        C!["has-text-centered"],
        C!["m-6"],
        i![C!["fas fa-spinner fa-pulse"]]
    ]
}

pub fn view_placeholder<Ms>(message: &str) -> Node<Ms> {
    div![
        C!["block"],
        C!["is-size-6"],
        C!["has-text-centered"],
        C!["has-text-grey-light"],
        C!["my-6"],
        message.to_string(),
    ]
}
