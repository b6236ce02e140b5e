use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub on_close: Callback<()>,
}

/// Overlay embedding the demo video. Rendered only while the landing page's
/// modal flag is set, so closing it unmounts the player along with the iframe.
#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="demo-overlay" onclick={close.clone()}>
            <style>
                {r#"
                    .demo-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .demo-modal {
                        position: relative;
                        width: 100%;
                        max-width: 900px;
                        background: #1a1a1a;
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .demo-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 10;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.5rem;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }
                    .demo-close:hover {
                        color: #fff;
                    }
                    .demo-frame {
                        aspect-ratio: 16 / 9;
                    }
                    .demo-frame iframe {
                        width: 100%;
                        height: 100%;
                        border: none;
                    }
                "#}
            </style>
            <div class="demo-modal" onclick={keep_open}>
                <button class="demo-close" onclick={close} aria-label="Close demo video">
                    {"✕"}
                </button>
                <div class="demo-frame">
                    <iframe
                        src={config::get_demo_video_url()}
                        title="Marketing Demo Video"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen={true}
                    />
                </div>
            </div>
        </div>
    }
}
