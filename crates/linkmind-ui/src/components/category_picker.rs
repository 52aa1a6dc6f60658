use linkmind_core::Category;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

const NEW_CATEGORY_OPTION: &str =
  "__new_category__";

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
  pub id:              String,
  pub categories:      Vec<Category>,
  pub selected:        String,
  pub on_select:       Callback<String>,
  pub on_new_category: Callback<()>
}

/// Optional category dropdown. The last
/// entry opens the category modal instead
/// of selecting anything.
#[function_component(CategoryPicker)]
pub fn category_picker(
  props: &CategoryPickerProps
) -> Html {
  let onchange = {
    let on_select =
      props.on_select.clone();
    let on_new_category =
      props.on_new_category.clone();
    let selected = props.selected.clone();
    Callback::from(move |e: Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      let value = select.value();
      if value == NEW_CATEGORY_OPTION {
        select.set_value(&selected);
        on_new_category.emit(());
      } else {
        on_select.emit(value);
      }
    })
  };

  let swatch = props
    .categories
    .iter()
    .find(|category| {
      category.name == props.selected
    })
    .map(|category| {
      format!(
        "background-color:{};",
        category.color
      )
    });

  html! {
      <div class="field category-picker">
          <label for={props.id.clone()}>{ "Category (Optional)" }</label>
          <div class="picker-row">
              {
                  match swatch {
                      Some(style) => html! { <span class="swatch-dot" style={style}></span> },
                      None => html! {}
                  }
              }
              <select id={props.id.clone()} class="input" onchange={onchange}>
                  <option value="" selected={props.selected.is_empty()}>{ "Select a category" }</option>
                  {
                      for props.categories.iter().map(|category| html! {
                          <option
                              key={category.name.clone()}
                              value={category.name.clone()}
                              selected={category.name == props.selected}
                          >
                              { category.name.clone() }
                          </option>
                      })
                  }
                  <option value={NEW_CATEGORY_OPTION}>{ "+ Add New Category" }</option>
              </select>
          </div>
      </div>
  }
}
