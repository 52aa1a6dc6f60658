use chrono::Utc;
use linkmind_core::{
  Category,
  Field,
  FormErrors,
  Task,
  TaskDraft
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
pub struct TaskFormProps {
  pub categories:      Vec<Category>,
  pub on_add:          Callback<Task>,
  pub on_new_category: Callback<()>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = use_state(TaskDraft::default);
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
      draft.set(TaskDraft {
        title: value,
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
      draft.set(TaskDraft {
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
        | Ok(task) => {
          draft.set(TaskDraft::default());
          errors.set(FormErrors::default());
          on_add.emit(task);
        }
        | Err(next_errors) => {
          errors.set(next_errors);
        }
      }
    })
  };

  let title_error =
    errors.message(Field::Title);
  let title_class = if title_error.is_some()
  {
    "input invalid"
  } else {
    "input"
  };

  html! {
      <form class="item-form" onsubmit={onsubmit}>
          <div class="field">
              <label for="taskTitle">{ "Task Title" }</label>
              <input
                  id="taskTitle"
                  type="text"
                  class={title_class}
                  placeholder="Enter task title"
                  value={draft.title.clone()}
                  oninput={on_title_input}
              />
              <FieldErrorText message={title_error} />
          </div>
          <CategoryPicker
              id="taskCategory"
              categories={props.categories.clone()}
              selected={draft.category.clone()}
              on_select={on_category_select}
              on_new_category={props.on_new_category.clone()}
          />
          <FieldErrorText message={errors.message(Field::Category)} />
          <button type="submit" class="btn btn-primary wide">{ "+ Add Task" }</button>
      </form>
  }
}
