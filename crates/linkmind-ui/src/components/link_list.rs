use linkmind_core::Link;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::LinkListRow;

#[derive(Properties, PartialEq)]
pub struct LinkListProps {
  pub links:         Vec<Link>,
  pub empty_message: String,
  pub on_delete:     Callback<String>
}

#[function_component(LinkList)]
pub fn link_list(
  props: &LinkListProps
) -> Html {
  if props.links.is_empty() {
    return html! {
        <div class="empty-list">
            <p>{ props.empty_message.clone() }</p>
        </div>
    };
  }

  html! {
      <div class="item-list">
          {
              for props.links.iter().cloned().map(|link| html! {
                  <LinkListRow
                      key={link.id.clone()}
                      link={link.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </div>
  }
}
