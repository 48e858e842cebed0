/// Popup UI for the Haloscope extension

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;

use crate::analysis::AnalysisResult;
use crate::api::{self, is_analyzable_url};
use crate::report::{credibility_line, language_line, score_percent, score_tier, visible_claims};
use crate::ui::components::{ScoreBar, TierBadge};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = getActiveTabUrl)]
    async fn get_active_tab_url() -> Result<JsValue, JsValue>;
}

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading,
    Results(AnalysisResult),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Idle);

    // Best-effort backend probe on mount; failures are logged, never shown
    use_effect_with((), move |_| {
        spawn_local(async move {
            if let Err(e) = api::probe_health().await {
                log::warn!("Backend not accessible: {}", e);
            }
        });
        || ()
    });

    // Analyze button handler
    let on_analyze = {
        let state = state.clone();

        Callback::from(move |_| {
            let state = state.clone();

            spawn_local(async move {
                let url = match resolve_tab_url().await {
                    Ok(url) => url,
                    Err(message) => {
                        state.set(AppState::Error(message));
                        return;
                    }
                };

                state.set(AppState::Loading);

                match api::analyze(&url).await {
                    Ok(result) => {
                        if let (Some(url), Some(len)) = (&result.url, result.text_length) {
                            log::debug!("Analyzed {} ({} chars of text)", url, len);
                        }
                        state.set(AppState::Results(result));
                    }
                    Err(e) => {
                        state.set(AppState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    let is_busy = matches!(*state, AppState::Loading);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Haloscope"}</h1>
            <p class="popup-subtitle">{"Check how trustworthy this page is"}</p>

            <Button onclick={on_analyze} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                {"🔍 Analyze This Page"}
            </Button>

            // Status display
            {match &*state {
                AppState::Idle => html! {},
                AppState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Analyzing page..."}</p>
                    </div>
                },
                AppState::Error(message) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {message.clone()}
                        </Alert>
                    </div>
                },
                AppState::Results(result) => render_results(result),
            }}

            <p class="footer-popup">
                {"Haloscope v0.1.0"}
            </p>
        </div>
    }
}

fn render_results(result: &AnalysisResult) -> Html {
    let trust = result.source_score();
    let trust_tier = score_tier(trust);
    let trust_percent = score_percent(trust);

    let cred = result.credibility_score();
    let cred_tier = score_tier(cred);

    let claims = result.claims();

    html! {
        <div class="results">
            <div class="result-section">
                <div class="result-row">
                    <span class="result-label">{"Trust Score"}</span>
                    <span class={classes!("score-value", trust_tier.score_class())}>
                        {format!("{}%", trust_percent)}
                    </span>
                </div>
                <ScoreBar percent={trust_percent} tier={trust_tier} />
            </div>

            <div class="result-section">
                <div class="result-row">
                    <span class="result-label">{"Domain"}</span>
                    <span class="result-value">{result.domain().to_string()}</span>
                </div>
            </div>

            <div class="result-section">
                <div class="result-row">
                    <span class="result-label">{"Credibility"}</span>
                    <span class="result-value">
                        {credibility_line(cred, result.factual_reporting())}
                    </span>
                </div>
                <TierBadge tier={cred_tier} />
            </div>

            <div class="result-section">
                <div class="result-row">
                    <span class="result-label">{"Language"}</span>
                    <span class="result-value">
                        {language_line(result.language(), result.language_confidence())}
                    </span>
                </div>
            </div>

            <div class="result-section">
                <div class="result-row">
                    <span class="result-label">{"Claims Found"}</span>
                    <span class="result-value">{claims.len()}</span>
                </div>
                if !claims.is_empty() {
                    <div class="claims-list">
                        {for visible_claims(claims).into_iter().map(|line| html! {
                            <div class="claim">{line}</div>
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

// Helper functions

/// Resolve the active tab's URL, rejecting pages the backend cannot fetch
/// (browser-internal schemes). No request is issued when this fails.
async fn resolve_tab_url() -> Result<String, String> {
    const UNANALYZABLE: &str = "Cannot analyze this page";

    let url_js = get_active_tab_url().await.map_err(|e| {
        log::warn!("Tab query failed: {:?}", e);
        UNANALYZABLE.to_string()
    })?;

    let url = url_js
        .as_string()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| UNANALYZABLE.to_string())?;

    if !is_analyzable_url(&url) {
        return Err(UNANALYZABLE.to_string());
    }

    Ok(url)
}
