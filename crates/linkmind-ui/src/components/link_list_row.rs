use linkmind_core::Link;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::CategoryBadge;

#[derive(Properties, PartialEq)]
pub struct LinkListRowProps {
  pub link:      Link,
  pub on_delete: Callback<String>
}

#[function_component(LinkListRow)]
pub fn link_list_row(
  props: &LinkListRowProps
) -> Html {
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = props.link.id.clone();
    move |_: yew::MouseEvent| {
      on_delete.emit(id.clone())
    }
  };

  html! {
      <div class="row link-row">
          <div class="row-head">
              <a
                  class="item-title link-title"
                  href={props.link.url.clone()}
                  target="_blank"
                  rel="noopener noreferrer"
              >
                  { &props.link.title }
              </a>
              <button type="button" class="row-delete" onclick={on_delete}>{ "Delete" }</button>
          </div>
          <p class="link-url">{ &props.link.url }</p>
          <CategoryBadge
              name={props.link.category.clone()}
              color={props.link.category_color.clone()}
          />
      </div>
  }
}
