//! Result cards: one per water component plus the tier-colored total.

use crate::state::AppState;
use crate::surface::{CardKind, ResultCard};
use dioxus::prelude::*;

fn card_background(card: &ResultCard) -> &'static str {
    match (card.background, card.kind) {
        (Some(color), _) => color,
        (None, CardKind::Green) => "#e8f8f0",
        (None, CardKind::Blue) => "#eaf3fb",
        (None, CardKind::Grey) => "#fdf3e6",
        (None, CardKind::Total) => "#f5f5f5",
    }
}

/// Renders the cards from the last successful calculation, if any.
#[component]
pub fn ResultsPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(view) = state.results.read().clone() else {
        return rsx! {};
    };
    let cards: Vec<(ResultCard, &'static str, &'static str)> = view
        .cards
        .into_iter()
        .map(|card| {
            let class = card.kind.css_class();
            let background = card_background(&card);
            (card, class, background)
        })
        .collect();

    rsx! {
        div {
            class: "result-grid",
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; margin: 12px 0;",
            for (card, class, background) in cards.iter() {
                div {
                    key: "{card.title}",
                    class: "{class}",
                    style: "padding: 12px; border-radius: 6px; background: {background};",
                    h3 { style: "margin: 0 0 6px 0; font-size: 14px;", "{card.title}" }
                    p { style: "margin: 0 0 6px 0; font-size: 20px; font-weight: bold;", "{card.value}" }
                    small { "{card.caption}" }
                }
            }
        }
    }
}
