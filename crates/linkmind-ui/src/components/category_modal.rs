use linkmind_core::{
  Category,
  CategoryDraft,
  Field,
  FormErrors
};
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use super::FieldErrorText;

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
  pub categories:    Vec<Category>,
  pub palette:       Vec<String>,
  pub default_color: String,
  pub on_close:      Callback<MouseEvent>,
  pub on_create:     Callback<Category>
}

/// Rendered only while open, so the draft
/// starts fresh each time.
#[function_component(CategoryModal)]
pub fn category_modal(
  props: &CategoryModalProps
) -> Html {
  let draft = {
    let default_color =
      props.default_color.clone();
    use_state(move || {
      CategoryDraft::with_color(
        &default_color
      )
    })
  };
  let errors =
    use_state(FormErrors::default);

  let on_name_input = {
    let draft = draft.clone();
    let errors = errors.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let value = input.value();
      let mut next_errors =
        (*errors).clone();
      next_errors
        .clear_if_filled(Field::Name, &value);
      errors.set(next_errors);
      draft.set(CategoryDraft {
        name: value,
        ..(*draft).clone()
      });
    })
  };

  let set_color = {
    let draft = draft.clone();
    let errors = errors.clone();
    Callback::from(move |color: String| {
      let mut next_errors =
        (*errors).clone();
      next_errors.clear(Field::Color);
      errors.set(next_errors);
      draft.set(CategoryDraft {
        color,
        ..(*draft).clone()
      });
    })
  };

  let on_color_input = {
    let set_color = set_color.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      set_color.emit(input.value());
    })
  };

  let onsubmit = {
    let draft = draft.clone();
    let errors = errors.clone();
    let categories =
      props.categories.clone();
    let on_create = props.on_create.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      match draft.submit(&categories) {
        | Ok(category) => {
          on_create.emit(category)
        }
        | Err(next_errors) => {
          errors.set(next_errors)
        }
      }
    })
  };

  let name_error =
    errors.message(Field::Name);
  let name_class = if name_error.is_some() {
    "input invalid"
  } else {
    "input"
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">
                  <span>{ "Add New Category" }</span>
                  <button type="button" class="icon-btn" onclick={props.on_close.clone()}>{ "×" }</button>
              </div>
              <form class="content" onsubmit={onsubmit}>
                  <div class="field">
                      <label for="newCategoryName">{ "Category Name" }</label>
                      <input
                          id="newCategoryName"
                          type="text"
                          class={name_class}
                          placeholder="Enter category name"
                          value={draft.name.clone()}
                          oninput={on_name_input}
                      />
                      <FieldErrorText message={name_error} />
                  </div>
                  <div class="field">
                      <label for="newCategoryColor">{ "Category Color" }</label>
                      <div class="color-row">
                          <input
                              id="newCategoryColor"
                              type="color"
                              class="color-input"
                              value={draft.color.clone()}
                              oninput={on_color_input}
                          />
                          <div class="swatches">
                              {
                                  for props.palette.iter().cloned().map(|color| {
                                      let set_color = set_color.clone();
                                      let chosen = color.clone();
                                      let is_active = draft.color == color;
                                      html! {
                                          <button
                                              type="button"
                                              key={color.clone()}
                                              class={if is_active { "swatch active" } else { "swatch" }}
                                              style={format!("background-color:{color};")}
                                              title={color.clone()}
                                              onclick={Callback::from(move |_: MouseEvent| set_color.emit(chosen.clone()))}
                                          />
                                      }
                                  })
                              }
                          </div>
                      </div>
                      <FieldErrorText message={errors.message(Field::Color)} />
                  </div>
                  <div class="footer">
                      <button type="button" class="btn btn-outline" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                      <button type="submit" class="btn btn-primary">{ "Add Category" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
