use yew::prelude::*;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use log::warn;
use crate::config;

/// Smoothly scrolls the viewport to the section with the given id.
/// A fragment with no matching element is logged and ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("no element with id '{}' to scroll to", id),
    }
}

/// Full page navigation to the onboarding flow, used by every
/// Get Started button on the page.
pub fn go_to_onboarding() {
    if let Some(window) = window() {
        let _ = window.location().set_href(config::onboarding_path());
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
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

    let scroll_link = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        })
    };

    let get_started = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        go_to_onboarding();
    });

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Your news, curated by AI"}</h1>
                    <p class="hero-subtitle">
                        {"CurateX reads the firehose so you don't have to. Pick your topics once and get one personalised digest on Telegram, every day, at the time you choose."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={get_started.clone()}>{"Get Started"}</button>
                        <a href="#how-it-works" class="hero-link" onclick={scroll_link("how-it-works")}>
                            {"See how it works ↓"}
                        </a>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <div class="feature-block">
                    <div class="feature-content">
                        <h2>{"Only the Topics You Care About"}</h2>
                        <p>{"Follow as many or as few topics as you like. CurateX searches, ranks and de-duplicates the day's stories for each one."}</p>
                        <ul class="feature-list">
                            <li>{"📰 Eight topic feeds, from technology to world news"}</li>
                            <li>{"🧠 AI ranking keeps the signal, drops the noise"}</li>
                            <li>{"🔁 Change your mix any time, no account settings maze"}</li>
                        </ul>
                    </div>
                </div>

                <div class="feature-block">
                    <div class="feature-content">
                        <h2>{"Summaries in Your Style"}</h2>
                        <p>{"The same news reads differently depending on how much time you have. Choose the depth once and every digest follows it."}</p>
                        <ul class="feature-list">
                            <li>{"⚡ Quick Bullets for a one-minute scan"}</li>
                            <li>{"📋 Standard Digest with the key context"}</li>
                            <li>{"🔍 Deep Dive with background and further reading"}</li>
                        </ul>
                    </div>
                </div>

                <div class="feature-block">
                    <div class="feature-content">
                        <h2>{"Delivered When You Want It"}</h2>
                        <p>{"No app to open, no feed to refresh. Your digest lands in Telegram at the same time every day, and you can ask follow-up questions right in the chat."}</p>
                        <ul class="feature-list">
                            <li>{"⏰ You pick the delivery time"}</li>
                            <li>{"💬 Reply to any story to dig deeper"}</li>
                            <li>{"📵 Nothing else pings you, ever"}</li>
                        </ul>
                    </div>
                </div>
                <div class="section-cta">
                    <button class="hero-cta" onclick={get_started.clone()}>{"Get Started"}</button>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>{"Three Steps to a Calmer Morning"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"Pick Your Topics"}</h3>
                        <p>{"Select the news categories you actually want to follow. Everything else stops existing."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Choose Your Style"}</h3>
                        <p>{"Quick bullets, a standard digest or a deep dive. Your call, applied to every story."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Read One Digest"}</h3>
                        <p>{"One Telegram message a day at your chosen time. That's the whole product."}</p>
                    </div>
                </div>
            </section>

            <footer class="footer-cta">
                <div class="footer-content">
                    <h2>{"Ready to Stop Doomscrolling?"}</h2>
                    <p class="subtitle">{"Tell us what you read and when, and your first curated digest is on its way."}</p>
                    <button class="hero-cta" onclick={get_started}>{"Get Started"}</button>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #141218;
                }

                .hero {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 80vh;
                    text-align: center;
                    padding: 4rem 2rem;
                    background: radial-gradient(circle at 50% 20%, rgba(124, 92, 255, 0.25), transparent 60%);
                }

                .hero-content h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #A88BFF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    line-height: 1.6;
                }

                .hero-cta-group {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .hero-cta {
                    background: linear-gradient(45deg, #7C5CFF, #A88BFF);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2.5rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(124, 92, 255, 0.4);
                }

                .hero-link {
                    color: #A88BFF;
                    text-decoration: none;
                    font-size: 1rem;
                    transition: color 0.3s ease;
                }

                .hero-link:hover {
                    color: #fff;
                }

                .features {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .feature-block {
                    background: rgba(32, 28, 42, 0.85);
                    border: 1px solid rgba(124, 92, 255, 0.15);
                    border-radius: 12px;
                    padding: 2.5rem;
                    transition: border-color 0.3s ease;
                }

                .feature-block:hover {
                    border-color: rgba(124, 92, 255, 0.4);
                }

                .feature-content h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #A88BFF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .feature-content p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .feature-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .feature-list li {
                    color: #ccc;
                    padding: 0.5rem 0;
                }

                .section-cta {
                    text-align: center;
                }

                .how-it-works {
                    text-align: center;
                    padding: 4rem 2rem;
                    background: rgba(124, 92, 255, 0.05);
                }

                .how-it-works h2 {
                    font-size: 2.5rem;
                    margin-bottom: 3rem;
                    background: linear-gradient(45deg, #fff, #A88BFF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .steps-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .step {
                    background: rgba(32, 28, 42, 0.85);
                    border: 1px solid rgba(124, 92, 255, 0.15);
                    border-radius: 12px;
                    padding: 2rem;
                }

                .step h3 {
                    color: #A88BFF;
                    font-size: 1.3rem;
                    margin-bottom: 1rem;
                }

                .step p {
                    color: #999;
                    line-height: 1.6;
                }

                .footer-cta {
                    text-align: center;
                    padding: 6rem 2rem;
                }

                .footer-content h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .footer-content .subtitle {
                    color: #999;
                    margin-bottom: 2rem;
                }

                @media (min-width: 768px) {
                    .steps-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .hero-content h1 {
                        font-size: 2.5rem;
                    }

                    .feature-block {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
