use linkmind_core::Category;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CategoryOverviewProps {
  pub categories: Vec<Category>,
  pub on_add:     Callback<MouseEvent>
}

#[function_component(CategoryOverview)]
pub fn category_overview(
  props: &CategoryOverviewProps
) -> Html {
  html! {
      <div class="card category-overview">
          <h3>{ "Categories" }</h3>
          <div class="category-grid">
              {
                  for props.categories.iter().map(|category| html! {
                      <div
                          key={category.name.clone()}
                          class="category-tile"
                          style={format!("border-left-color:{};", category.color)}
                      >
                          <span class="swatch-dot" style={format!("background-color:{};", category.color)}></span>
                          <span class="category-name">{ category.name.clone() }</span>
                      </div>
                  })
              }
              <button type="button" class="category-tile add" onclick={props.on_add.clone()}>
                  { "+ Add New" }
              </button>
          </div>
      </div>
  }
}
