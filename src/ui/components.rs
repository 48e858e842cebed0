/// Reusable UI components for the results view

use yew::prelude::*;

use crate::report::Tier;

#[derive(Properties, PartialEq)]
pub struct ScoreBarProps {
    pub percent: u32, // 0-100
    pub tier: Tier,
}

/// Horizontal trust-score bar, colored by tier
#[function_component(ScoreBar)]
pub fn score_bar(props: &ScoreBarProps) -> Html {
    let percent = props.percent.min(100);
    let fill_class = match props.tier {
        Tier::Good => "score-fill",
        Tier::Medium => "score-fill medium",
        Tier::Low => "score-fill low",
    };

    html! {
        <div class="score-bar">
            <div class={fill_class} style={format!("width: {}%", percent)}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TierBadgeProps {
    pub tier: Tier,
}

/// "High/Medium/Low Trust" credibility badge
#[function_component(TierBadge)]
pub fn tier_badge(props: &TierBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.tier.badge_class())}>
            {props.tier.badge_label()}
        </span>
    }
}
