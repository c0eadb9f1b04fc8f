use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod pages {
    pub mod landing;
}
mod onboarding {
    pub mod form;
    pub mod onboarding;
}

use pages::landing::{go_to_onboarding, scroll_to_section, Landing};
use onboarding::onboarding::Onboarding;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/onboarding")]
    Onboarding,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Onboarding => {
            info!("Rendering Onboarding page");
            html! { <Onboarding /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
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

    // Nav anchors scroll within the landing page; on any other route the
    // target is simply absent and the scroll helper logs and ignores it.
    let section_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let nav_get_started = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            go_to_onboarding();
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"CurateX"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={section_link("features")}>
                        {"Features"}
                    </a>
                    <a href="#how-it-works" class="nav-link" onclick={section_link("how-it-works")}>
                        {"How It Works"}
                    </a>
                    <button class="nav-cta" onclick={nav_get_started}>
                        {"Get Started"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(20, 18, 24, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: bold;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #A88BFF;
                }

                .nav-cta {
                    background: linear-gradient(45deg, #7C5CFF, #A88BFF);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.4rem;
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(20, 18, 24, 0.98);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
