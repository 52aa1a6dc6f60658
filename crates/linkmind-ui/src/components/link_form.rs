use chrono::Utc;
use linkmind_core::{
  Category,
  Field,
  FormErrors,
  Link,
  LinkDraft
};
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use super::{
  CategoryPicker,
  FieldErrorText
};

#[derive(Properties, PartialEq)]
pub struct LinkFormProps {
  pub categories:      Vec<Category>,
  pub on_add:          Callback<Link>,
  pub on_new_category: Callback<()>
}

fn input_class(
  errors: &FormErrors,
  field: Field,
  base: &'static str
) -> String {
  if errors.get(field).is_some() {
    format!("{base} invalid")
  } else {
    base.to_string()
  }
}

#[function_component(LinkForm)]
pub fn link_form(
  props: &LinkFormProps
) -> Html {
  let draft = use_state(LinkDraft::default);
  let errors =
    use_state(FormErrors::default);

  let on_title_input = {
    let draft = draft.clone();
    let errors = errors.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let value = input.value();
      let mut next_errors =
        (*errors).clone();
      next_errors.clear_if_filled(
        Field::Title,
        &value
      );
      errors.set(next_errors);
      draft.set(LinkDraft {
        title: value,
        ..(*draft).clone()
      });
    })
  };

  let on_url_input = {
    let draft = draft.clone();
    let errors = errors.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let value = input.value();
      let mut next_errors =
        (*errors).clone();
      next_errors
        .clear_if_filled(Field::Url, &value);
      errors.set(next_errors);
      draft.set(LinkDraft {
        url: value,
        ..(*draft).clone()
      });
    })
  };

  let on_category_select = {
    let draft = draft.clone();
    let errors = errors.clone();
    Callback::from(move |name: String| {
      let mut next_errors =
        (*errors).clone();
      next_errors.clear(Field::Category);
      errors.set(next_errors);
      draft.set(LinkDraft {
        category: name,
        ..(*draft).clone()
      });
    })
  };

  let onsubmit = {
    let draft = draft.clone();
    let errors = errors.clone();
    let categories =
      props.categories.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      match draft
        .submit(&categories, Utc::now())
      {
        | Ok(link) => {
          draft.set(LinkDraft::default());
          errors.set(FormErrors::default());
          on_add.emit(link);
        }
        | Err(next_errors) => {
          errors.set(next_errors);
        }
      }
    })
  };

  html! {
      <form class="item-form" onsubmit={onsubmit}>
          <div class="field">
              <label for="linkTitle">{ "Link Title" }</label>
              <input
                  id="linkTitle"
                  type="text"
                  class={input_class(&errors, Field::Title, "input")}
                  placeholder="Enter link title"
                  value={draft.title.clone()}
                  oninput={on_title_input}
              />
              <FieldErrorText message={errors.message(Field::Title)} />
          </div>
          <div class="field">
              <label for="linkUrl">{ "URL" }</label>
              <input
                  id="linkUrl"
                  type="text"
                  class={input_class(&errors, Field::Url, "input url-input")}
                  placeholder="https://example.com"
                  value={draft.url.clone()}
                  oninput={on_url_input}
              />
              <FieldErrorText message={errors.message(Field::Url)} />
          </div>
          <CategoryPicker
              id="linkCategory"
              categories={props.categories.clone()}
              selected={draft.category.clone()}
              on_select={on_category_select}
              on_new_category={props.on_new_category.clone()}
          />
          <FieldErrorText message={errors.message(Field::Category)} />
          <button type="submit" class="btn btn-primary wide">{ "+ Add Link" }</button>
      </form>
  }
}
