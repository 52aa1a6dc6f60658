mod storage;
mod types;

use chrono::{
  Datelike,
  Utc
};
use gloo::console::log;
use linkmind_core::{
  Category,
  DashboardConfig,
  ItemKind,
  Link,
  NoticeKind,
  Snapshot,
  Task
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer,
  use_state
};

use self::storage::{
  DashboardStorage,
  load_dashboard,
  load_theme_mode,
  save_dashboard,
  save_theme_mode
};
use self::types::{
  DashboardTab,
  FormKind,
  NoticeAction,
  NoticeState
};
use crate::components::{
  CategoryModal,
  CategoryOverview,
  DashboardHeader,
  LinkForm,
  LinkList,
  SuccessToast,
  TabButton,
  TaskForm,
  TaskList
};

const APP_TITLE: &str = "linkmindpro";

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    DashboardConfig::embedded()
  });
  let storage = use_memo((), |_| {
    DashboardStorage::open()
  });
  let snapshot = {
    let storage = storage.clone();
    let config = config.clone();
    use_state(move || {
      load_dashboard(&storage, &config)
    })
  };
  let theme = {
    let storage = storage.clone();
    let config = config.clone();
    use_state(move || {
      load_theme_mode(&storage, &config)
    })
  };
  let active_tab =
    use_state(|| DashboardTab::Tasks);
  let form_kind =
    use_state(|| FormKind::Task);
  let category_modal_open =
    use_state(|| false);
  let notices =
    use_reducer(NoticeState::default);

  {
    let snapshot = snapshot.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        &format!(
          "tasks={} links={} \
           categories={}",
          snapshot.tasks.len(),
          snapshot.links.len(),
          snapshot.categories.len()
        )
      );
      || ()
    });
  }

  let commit = {
    let snapshot = snapshot.clone();
    let storage = storage.clone();
    let config = config.clone();
    Callback::from(move |next: Snapshot| {
      save_dashboard(
        &storage, &config, &next
      );
      snapshot.set(next);
    })
  };

  let on_add_task = {
    let snapshot = snapshot.clone();
    let commit = commit.clone();
    let notices = notices.clone();
    Callback::from(move |task: Task| {
      ui_debug(
        "action.task.add",
        &task.title
      );
      commit.emit(snapshot.add_item(task));
      notices.dispatch(NoticeAction::Show(
        NoticeKind::TaskAdded
      ));
    })
  };

  let on_add_link = {
    let snapshot = snapshot.clone();
    let commit = commit.clone();
    let notices = notices.clone();
    Callback::from(move |link: Link| {
      ui_debug(
        "action.link.add",
        &link.url
      );
      commit.emit(snapshot.add_item(link));
      notices.dispatch(NoticeAction::Show(
        NoticeKind::LinkAdded
      ));
    })
  };

  let on_toggle_task = {
    let snapshot = snapshot.clone();
    let commit = commit.clone();
    Callback::from(move |id: String| {
      commit.emit(
        snapshot.toggle_task_completion(&id)
      );
    })
  };

  let on_delete_task = {
    let snapshot = snapshot.clone();
    let commit = commit.clone();
    Callback::from(move |id: String| {
      commit.emit(
        snapshot
          .delete_item(ItemKind::Tasks, &id)
      );
    })
  };

  let on_delete_link = {
    let snapshot = snapshot.clone();
    let commit = commit.clone();
    Callback::from(move |id: String| {
      commit.emit(
        snapshot
          .delete_item(ItemKind::Links, &id)
      );
    })
  };

  let on_open_category_modal = {
    let category_modal_open =
      category_modal_open.clone();
    Callback::from(move |()| {
      ui_debug(
        "action.category.open",
        "opened category modal"
      );
      category_modal_open.set(true);
    })
  };

  let on_close_category_modal = {
    let category_modal_open =
      category_modal_open.clone();
    Callback::from(move |_: MouseEvent| {
      category_modal_open.set(false);
    })
  };

  let on_create_category = {
    let snapshot = snapshot.clone();
    let commit = commit.clone();
    let notices = notices.clone();
    let category_modal_open =
      category_modal_open.clone();
    Callback::from(
      move |category: Category| {
        commit.emit(
          snapshot.add_category(category)
        );
        category_modal_open.set(false);
        notices.dispatch(
          NoticeAction::Show(
            NoticeKind::CategoryAdded
          )
        );
      }
    )
  };

  let on_dismiss_notice = {
    let notices = notices.clone();
    Callback::from(move |seq: u64| {
      notices.dispatch(
        NoticeAction::Dismiss(seq)
      );
    })
  };

  let on_toggle_theme = {
    let theme = theme.clone();
    let storage = storage.clone();
    let config = config.clone();
    Callback::from(move |_: MouseEvent| {
      let next = (*theme).next();
      save_theme_mode(
        &storage, &config, next
      );
      tracing::debug!(
        dark = next.is_dark(),
        "toggled theme"
      );
      theme.set(next);
    })
  };

  let dashboard_tabs = DashboardTab::all()
    .into_iter()
    .map(|tab| {
      let active_tab = active_tab.clone();
      html! {
          <TabButton
              label={tab.label()}
              class="dashboard-tab"
              is_active={*active_tab == tab}
              onclick={Callback::from(move |_: MouseEvent| active_tab.set(tab))}
          />
      }
    })
    .collect::<Html>();

  let form_tabs = FormKind::all()
    .into_iter()
    .map(|kind| {
      let form_kind = form_kind.clone();
      html! {
          <TabButton
              label={kind.label()}
              class="form-tab"
              is_active={*form_kind == kind}
              onclick={Callback::from(move |_: MouseEvent| form_kind.set(kind))}
          />
      }
    })
    .collect::<Html>();

  let item_list = match *active_tab {
    | DashboardTab::Tasks => html! {
        <TaskList
            tasks={snapshot.tasks.clone()}
            empty_message={DashboardTab::Tasks.empty_message()}
            on_toggle={on_toggle_task}
            on_delete={on_delete_task}
        />
    },
    | DashboardTab::Links => html! {
        <LinkList
            links={snapshot.links.clone()}
            empty_message={DashboardTab::Links.empty_message()}
            on_delete={on_delete_link}
        />
    }
  };

  let item_form = match *form_kind {
    | FormKind::Task => html! {
        <TaskForm
            categories={snapshot.categories.clone()}
            on_add={on_add_task}
            on_new_category={on_open_category_modal.clone()}
        />
    },
    | FormKind::Link => html! {
        <LinkForm
            categories={snapshot.categories.clone()}
            on_add={on_add_link}
            on_new_category={on_open_category_modal.clone()}
        />
    }
  };

  let category_modal =
    if *category_modal_open {
      html! {
          <CategoryModal
              categories={snapshot.categories.clone()}
              palette={config.categories.palette.clone()}
              default_color={config.categories.default_color.clone()}
              on_close={on_close_category_modal}
              on_create={on_create_category}
          />
      }
    } else {
      html! {}
    };

  let year = Utc::now().year();

  html! {
      <div class={classes!("app", (*theme).as_class())}>
          <DashboardHeader
              title={APP_TITLE}
              theme_label={(*theme).toggle_label()}
              on_toggle_theme={on_toggle_theme}
          />

          <main class="main">
              <section class="card dashboard">
                  <div class="dashboard-head">
                      <h2>{ "Your Dashboard" }</h2>
                      <div class="dashboard-tabs">{ dashboard_tabs }</div>
                  </div>
                  { item_list }
              </section>

              <aside class="side-column">
                  <div class="card add-card">
                      <div class="form-tabs">{ form_tabs }</div>
                      <div class="form-body">{ item_form }</div>
                  </div>
                  <CategoryOverview
                      categories={snapshot.categories.clone()}
                      on_add={on_open_category_modal.reform(|_: MouseEvent| ())}
                  />
              </aside>
          </main>

          <SuccessToast
              notice={notices.board.current()}
              dismiss_ms={config.notifications.dismiss_ms}
              on_dismiss={on_dismiss_notice}
          />
          { category_modal }

          <footer class="page-footer">
              { format!("© {year} {APP_TITLE}. All rights reserved.") }
          </footer>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
