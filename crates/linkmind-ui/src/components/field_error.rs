use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FieldErrorTextProps {
  pub message: Option<String>
}

#[function_component(FieldErrorText)]
pub fn field_error_text(
  props: &FieldErrorTextProps
) -> Html {
  match props.message.clone() {
    | Some(message) => html! {
        <p class="field-error">{ message }</p>
    },
    | None => html! {}
  }
}
