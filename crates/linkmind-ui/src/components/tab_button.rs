use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TabButtonProps {
  pub label:     String,
  pub is_active: bool,
  pub class:     String,
  pub onclick:   Callback<MouseEvent>
}

#[function_component(TabButton)]
pub fn tab_button(
  props: &TabButtonProps
) -> Html {
  let class = if props.is_active {
    format!("{} active", props.class)
  } else {
    props.class.clone()
  };

  html! {
      <button type="button" class={class} onclick={props.onclick.clone()}>
          { props.label.clone() }
      </button>
  }
}
