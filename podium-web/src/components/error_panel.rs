use yew::prelude::*;

/// Single page-level error surface with a retry button. Pages render
/// this instead of partial content when their fetch fails.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &Props) -> Html {
    let retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="error-panel" role="alert">
            <p class="error-message">{ props.message.clone() }</p>
            <button type="button" class="retry-button" onclick={retry}>
                { "Retry" }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn error_panel_shows_message_and_retry() {
        let props = Props {
            message: AttrValue::from("Failed to load tournament statistics"),
            on_retry: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ErrorPanel>::with_props(props).render());
        assert!(
            html.contains("Failed to load tournament statistics") && html.contains("Retry"),
            "panel should surface the message with a retry action: {html}"
        );
    }
}
