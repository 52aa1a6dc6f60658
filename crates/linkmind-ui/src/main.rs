mod app;
mod components;

const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    mount = MOUNT_ID,
    "starting linkmind dashboard"
  );

  let mount = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.get_element_by_id(MOUNT_ID)
    });

  match mount {
    | Some(root) => {
      yew::Renderer::<app::App>::with_root(
        root
      )
      .render();
    }
    | None => {
      tracing::warn!(
        mount = MOUNT_ID,
        "dashboard root not found; \
         rendering into <body>"
      );
      yew::Renderer::<app::App>::new()
        .render();
    }
  }
}
