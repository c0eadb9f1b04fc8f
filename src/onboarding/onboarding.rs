use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;
use gloo_console::log;
use chrono::NaiveTime;

use crate::config;
use crate::onboarding::form::{OnboardingForm, SummaryStyle};

#[derive(Properties, PartialEq)]
pub struct OnboardingProps {
    /// How long the curating screen shows before redirecting home.
    #[prop_or(crate::config::CURATING_REDIRECT_MS)]
    pub curating_delay_ms: u32,
}

#[function_component(Onboarding)]
pub fn onboarding(props: &OnboardingProps) -> Html {
    let form = use_state(OnboardingForm::new);
    let curating = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.phone = input.value();
            form.set(next);
        })
    };

    let on_time = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.notification_time = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let curating = curating.clone();
        let delay_ms = props.curating_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !form.is_complete() {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(
                        "Please fill in all required fields and make your selections.",
                    );
                }
                return;
            }

            log!("onboarding complete, preparing first digest");
            curating.set(true);

            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(config::main_page_path());
                }
            });
        })
    };

    let content = if *curating {
        let topic_count = form.selected_category_count();
        let style = form
            .summary
            .map(|s| s.label())
            .unwrap_or("Standard Digest");
        let delivery = NaiveTime::parse_from_str(&form.notification_time, "%H:%M")
            .map(|t| t.format("%-I:%M %p").to_string())
            .unwrap_or_else(|_| form.notification_time.clone());

        html! {
            <div class="curating-panel">
                <span class="curating-spinner"></span>
                <h2>{"Curating your feed..."}</h2>
                <p>
                    {format!(
                        "{} {} as a {}, delivered daily at {}.",
                        topic_count,
                        if topic_count == 1 { "topic" } else { "topics" },
                        style,
                        delivery,
                    )}
                </p>
                <p class="curating-note">{"Taking you back to the start in a moment."}</p>
            </div>
        }
    } else {
        html! {
            <form class="onboarding-form" onsubmit={onsubmit}>
                <h1>{"Set Up Your Digest"}</h1>
                <p class="form-intro">
                    {"A few choices and your personalised news feed is ready."}
                </p>

                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    value={form.name.clone()}
                    onchange={on_name}
                />

                <label for="phone">{"Telegram phone number"}</label>
                <input
                    id="phone"
                    type="tel"
                    placeholder="+1 555 0100"
                    value={form.phone.clone()}
                    onchange={on_phone}
                />

                <h3>{"Which topics do you follow?"}</h3>
                <div class="option-grid">
                    { for form.categories.iter().map(|option| {
                        let id = option.id;
                        let onclick = {
                            let form = form.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                let mut next = (*form).clone();
                                next.toggle_category(id);
                                form.set(next);
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("option-chip", option.selected.then(|| "selected"))}
                                onclick={onclick}
                            >
                                {option.label}
                            </button>
                        }
                    })}
                </div>

                <h3>{"How should we write it up?"}</h3>
                <div class="summary-options">
                    { for SummaryStyle::ALL.iter().map(|style| {
                        let style = *style;
                        let onclick = {
                            let form = form.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                let mut next = (*form).clone();
                                next.choose_summary(style);
                                form.set(next);
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("summary-option", (form.summary == Some(style)).then(|| "selected"))}
                                onclick={onclick}
                            >
                                <span class="summary-label">{style.label()}</span>
                                <span class="summary-description">{style.description()}</span>
                            </button>
                        }
                    })}
                </div>

                <label for="notification-time">{"Daily delivery time"}</label>
                <input
                    id="notification-time"
                    type="time"
                    value={form.notification_time.clone()}
                    onchange={on_time}
                />

                <button type="submit" class="submit-button">{"Create My Feed"}</button>
            </form>
        }
    };

    html! {
        <div class="onboarding-page">
            <div class="onboarding-container">
                {content}
            </div>

            <style>
                {r#"
                .onboarding-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 2rem 3rem;
                    color: #fff;
                    background: #141218;
                }

                .onboarding-container {
                    background: rgba(32, 28, 42, 0.85);
                    border: 1px solid rgba(124, 92, 255, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    width: 100%;
                    max-width: 560px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }

                .onboarding-form h1 {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                    text-align: center;
                    background: linear-gradient(45deg, #fff, #A88BFF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .form-intro {
                    text-align: center;
                    color: #999;
                    margin-bottom: 2rem;
                }

                .onboarding-form label {
                    display: block;
                    color: #ccc;
                    margin: 1rem 0 0.4rem;
                }

                .onboarding-form input {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(124, 92, 255, 0.25);
                    background: rgba(20, 18, 24, 0.8);
                    color: #fff;
                    font-size: 1rem;
                }

                .onboarding-form input:focus {
                    outline: none;
                    border-color: #7C5CFF;
                }

                .onboarding-form h3 {
                    margin: 1.5rem 0 0.8rem;
                    color: #A88BFF;
                    font-size: 1.1rem;
                }

                .option-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.6rem;
                }

                .option-chip {
                    padding: 0.7rem;
                    border-radius: 8px;
                    border: 1px solid rgba(124, 92, 255, 0.25);
                    background: none;
                    color: #ccc;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .option-chip:hover {
                    border-color: rgba(124, 92, 255, 0.6);
                }

                .option-chip.selected {
                    background: rgba(124, 92, 255, 0.25);
                    border-color: #7C5CFF;
                    color: #fff;
                }

                .summary-options {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }

                .summary-option {
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                    text-align: left;
                    padding: 0.9rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(124, 92, 255, 0.25);
                    background: none;
                    color: #ccc;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .summary-option:hover {
                    border-color: rgba(124, 92, 255, 0.6);
                }

                .summary-option.selected {
                    background: rgba(124, 92, 255, 0.25);
                    border-color: #7C5CFF;
                    color: #fff;
                }

                .summary-label {
                    font-weight: bold;
                }

                .summary-description {
                    font-size: 0.85rem;
                    color: #999;
                }

                .submit-button {
                    width: 100%;
                    margin-top: 2rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #7C5CFF, #A88BFF);
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .submit-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(124, 92, 255, 0.4);
                }

                .curating-panel {
                    text-align: center;
                    padding: 2rem 0;
                }

                .curating-spinner {
                    display: inline-block;
                    width: 40px;
                    height: 40px;
                    border: 4px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    border-top-color: #A88BFF;
                    animation: spin 1s ease-in-out infinite;
                    margin-bottom: 1.5rem;
                }

                @keyframes spin { to { transform: rotate(360deg); } }

                .curating-panel h2 {
                    margin-bottom: 1rem;
                }

                .curating-panel p {
                    color: #999;
                    line-height: 1.6;
                }

                .curating-note {
                    font-size: 0.9rem;
                    margin-top: 1rem;
                }

                @media (max-width: 768px) {
                    .onboarding-container {
                        padding: 2rem 1.5rem;
                    }

                    .option-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
