use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod components {
    pub mod contact;
    pub mod demo_modal;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use content::NAV_ITEMS;
use pages::landing::Landing;

/// True once the page is scrolled far enough that the fixed nav bar needs
/// its solid, blurred background instead of the transparent one.
fn nav_is_solid(scroll_offset: i32) -> bool {
    scroll_offset > config::NAV_SOLID_THRESHOLD
}

/// Smooth-scrolls the viewport so the section's top lands just below the
/// fixed nav bar.
pub fn scroll_to_section(section_id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.get_element_by_id(section_id) {
                let rect = element.get_bounding_client_rect();
                let page_offset = window.page_y_offset().unwrap_or(0.0);
                let options = web_sys::ScrollToOptions::new();
                options.set_top(rect.top() + page_offset - config::NAV_SCROLL_MARGIN);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll_offset = use_state(|| 0);

    {
        let scroll_offset = scroll_offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(root) = document.document_element() {
                        scroll_offset.set(root.scroll_top());
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", nav_is_solid(*scroll_offset).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(16px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.3rem;
                        font-weight: 700;
                        color: #fff;
                        cursor: pointer;
                    }
                    .nav-logo .logo-mark {
                        color: #7EB2FF;
                        font-size: 1.6rem;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #ccc;
                        font-size: 1rem;
                        cursor: pointer;
                        padding: 0;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-cta {
                        background: linear-gradient(45deg, #1E90FF, #7E5FFF);
                        color: #fff;
                        border: none;
                        border-radius: 50px;
                        padding: 0.6rem 1.5rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .nav-cta:hover {
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 6px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem 0;
                    }
                    .burger-menu span {
                        display: block;
                        width: 28px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            align-items: flex-start;
                            gap: 0;
                            background: rgba(0, 0, 0, 0.9);
                            backdrop-filter: blur(16px);
                            max-height: 0;
                            overflow: hidden;
                            transition: max-height 0.3s ease;
                        }
                        .nav-right.mobile-menu-open {
                            max-height: 24rem;
                        }
                        .nav-right .nav-link,
                        .nav-right .nav-cta {
                            width: 100%;
                            text-align: left;
                            padding: 1rem 2rem;
                            box-sizing: border-box;
                        }
                        .nav-right .nav-cta {
                            background: none;
                            border-radius: 0;
                            font-weight: 600;
                            color: #7EB2FF;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="logo-mark">{"⚡"}</span>
                    <span>{"FutureForward"}</span>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { NAV_ITEMS.iter().map(|item| {
                        let onclick = {
                            let menu_open = menu_open.clone();
                            let section_id = item.section_id;
                            Callback::from(move |_: MouseEvent| {
                                scroll_to_section(section_id);
                                menu_open.set(false);
                            })
                        };
                        html! {
                            <button class="nav-link" {onclick}>
                                {item.label}
                            </button>
                        }
                    }).collect::<Html>() }
                    <button
                        class="nav-cta"
                        onclick={
                            let menu_open = menu_open.clone();
                            Callback::from(move |_: MouseEvent| {
                                scroll_to_section("contact");
                                menu_open.set(false);
                            })
                        }
                    >
                        {"Get Started"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_stays_transparent_up_to_the_threshold() {
        assert!(!nav_is_solid(0));
        assert!(!nav_is_solid(config::NAV_SOLID_THRESHOLD));
    }

    #[test]
    fn nav_turns_solid_past_the_threshold() {
        assert!(nav_is_solid(config::NAV_SOLID_THRESHOLD + 1));
        assert!(nav_is_solid(120));
    }
}
