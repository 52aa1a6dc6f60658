use yew::{
  Html,
  Properties,
  function_component,
  html
};

/// Tinted badge: the category color at
/// low alpha behind text in the full
/// color.
pub fn category_badge_style(
  color: &str
) -> String {
  format!(
    "background-color:{color}20;\
     color:{color};"
  )
}

#[derive(Properties, PartialEq)]
pub struct CategoryBadgeProps {
  pub name:  Option<String>,
  pub color: Option<String>
}

#[function_component(CategoryBadge)]
pub fn category_badge(
  props: &CategoryBadgeProps
) -> Html {
  let Some(name) = props.name.clone()
  else {
    return html! {};
  };
  let style = props
    .color
    .as_deref()
    .map(category_badge_style)
    .unwrap_or_default();

  html! {
      <span class="badge" style={style}>{ name }</span>
  }
}
