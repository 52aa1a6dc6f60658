use gloo::timers::future::TimeoutFuture;
use linkmind_core::Notice;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with
};

#[derive(Properties, PartialEq)]
pub struct SuccessToastProps {
  pub notice:     Option<Notice>,
  pub dismiss_ms: u32,
  pub on_dismiss: Callback<u64>
}

#[function_component(SuccessToast)]
pub fn success_toast(
  props: &SuccessToastProps
) -> Html {
  {
    let on_dismiss =
      props.on_dismiss.clone();
    let dismiss_ms = props.dismiss_ms;
    use_effect_with(
      props.notice.map(|notice| notice.seq),
      move |seq| {
        if let Some(seq) = *seq {
          wasm_bindgen_futures::spawn_local(
            async move {
              TimeoutFuture::new(dismiss_ms)
                .await;
              on_dismiss.emit(seq);
            }
          );
        }
        || ()
      }
    );
  }

  let Some(notice) = props.notice else {
    return html! {};
  };

  html! {
      <div class="toast success" role="status">
          <span class="toast-icon">{ "✓" }</span>
          <p>{ notice.kind.message() }</p>
      </div>
  }
}
