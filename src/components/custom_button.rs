use web_sys::MouseEvent;
use yew::prelude::*;

use crate::theme;

#[derive(Properties, PartialEq)]
pub struct CustomButtonProps {
    pub text: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

/// Image-backed clickable label used by the floating nav. Stateless; the
/// hover and tap pulses live in the nav stylesheet.
#[function_component(CustomButton)]
pub fn custom_button(props: &CustomButtonProps) -> Html {
    html! {
        <div
            class="custom-button"
            onclick={props.onclick.clone()}
            style={format!("background-image: url('{}');", theme::BUTTON_TEXTURE)}
        >
            { props.text.clone() }
        </div>
    }
}
