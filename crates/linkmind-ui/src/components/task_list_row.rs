use linkmind_core::Task;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::CategoryBadge;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub on_toggle: Callback<String>,
  pub on_delete: Callback<String>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = props.task.id.clone();
    move |_: yew::Event| {
      on_toggle.emit(id.clone())
    }
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = props.task.id.clone();
    move |_: yew::MouseEvent| {
      on_delete.emit(id.clone())
    }
  };
  let title_class = if props.task.completed
  {
    "item-title done"
  } else {
    "item-title"
  };

  html! {
      <div class="row task-row">
          <input
              type="checkbox"
              class="task-check"
              checked={props.task.completed}
              onchange={on_toggle}
          />
          <div class="row-body">
              <p class={title_class}>{ &props.task.title }</p>
              <CategoryBadge
                  name={props.task.category.clone()}
                  color={props.task.category_color.clone()}
              />
          </div>
          <button type="button" class="row-delete" onclick={on_delete}>{ "Delete" }</button>
      </div>
  }
}
