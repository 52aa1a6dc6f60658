use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DashboardHeaderProps {
  pub title:           String,
  pub theme_label:     String,
  pub on_toggle_theme: Callback<MouseEvent>
}

#[function_component(DashboardHeader)]
pub fn dashboard_header(
  props: &DashboardHeaderProps
) -> Html {
  let initial = props
    .title
    .chars()
    .next()
    .map(|c| c.to_ascii_uppercase())
    .unwrap_or('L');

  html! {
      <header class="topbar">
          <div class="brand">
              <div class="brand-mark">{ initial.to_string() }</div>
              <h1>{ props.title.clone() }</h1>
          </div>
          <button
              type="button"
              class="btn"
              aria-label="Toggle dark mode"
              onclick={props.on_toggle_theme.clone()}
          >
              { props.theme_label.clone() }
          </button>
      </header>
  }
}
