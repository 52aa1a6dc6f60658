use std::rc::Rc;

use linkmind_core::{
  NoticeBoard,
  NoticeKind
};
use yew::Reducible;

#[derive(
  Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum DashboardTab {
  Tasks,
  Links
}

impl DashboardTab {
  pub fn all() -> [Self; 2] {
    [Self::Tasks, Self::Links]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Tasks => "Tasks",
      | Self::Links => "Links"
    }
  }

  pub fn empty_message(
    self
  ) -> &'static str {
    match self {
      | Self::Tasks => {
        "No tasks yet. Add your first task!"
      }
      | Self::Links => {
        "No links saved yet. Add your \
         first link!"
      }
    }
  }
}

#[derive(
  Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum FormKind {
  Task,
  Link
}

impl FormKind {
  pub fn all() -> [Self; 2] {
    [Self::Task, Self::Link]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Task => "Add Task",
      | Self::Link => "Add Link"
    }
  }
}

#[derive(
  Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum ThemeMode {
  Light,
  Dark
}

impl ThemeMode {
  pub fn from_dark_flag(
    dark: bool
  ) -> Self {
    if dark { Self::Dark } else { Self::Light }
  }

  pub fn is_dark(self) -> bool {
    self == Self::Dark
  }

  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Dark",
      | Self::Dark => "Light"
    }
  }
}

pub enum NoticeAction {
  Show(NoticeKind),
  Dismiss(u64)
}

#[derive(Default, PartialEq)]
pub struct NoticeState {
  pub board: NoticeBoard
}

impl Reducible for NoticeState {
  type Action = NoticeAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let board = match action {
      | NoticeAction::Show(kind) => {
        self.board.show(kind)
      }
      | NoticeAction::Dismiss(seq) => {
        self.board.dismiss(seq)
      }
    };
    Rc::new(Self { board })
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use linkmind_core::NoticeKind;
  use yew::Reducible;

  use super::{
    NoticeAction,
    NoticeState,
    ThemeMode
  };

  #[test]
  fn theme_toggles_between_modes() {
    let theme =
      ThemeMode::from_dark_flag(false);
    assert_eq!(theme, ThemeMode::Light);
    assert!(theme.next().is_dark());
    assert_eq!(
      theme.next().next(),
      ThemeMode::Light
    );
  }

  #[test]
  fn notice_reducer_ignores_stale_dismiss() {
    let state = Rc::new(
      NoticeState::default()
    )
    .reduce(NoticeAction::Show(
      NoticeKind::TaskAdded
    ))
    .reduce(NoticeAction::Show(
      NoticeKind::CategoryAdded
    ))
    .reduce(NoticeAction::Dismiss(1));
    assert_eq!(
      state
        .board
        .current()
        .map(|notice| notice.kind),
      Some(NoticeKind::CategoryAdded)
    );

    let cleared =
      state.reduce(NoticeAction::Dismiss(2));
    assert!(
      cleared.board.current().is_none()
    );
  }
}
