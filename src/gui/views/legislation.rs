use super::{badge, card, empty_state, facet_combo, page_header, search_box};
use crate::filter;
use crate::gui::state::AppState;
use crate::models::legislation::{LegislationItem, LegislationStatus};
use crate::models::Facet;
use std::collections::HashSet;

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let data = state.data;
    let page = &mut state.legislation;

    page_header(
        ui,
        "Legislation Tracker",
        "Follow local laws and policies in plain language",
    );

    ui.horizontal(|ui| {
        search_box(ui, &mut page.criteria.query, "Search legislation...");
        facet_combo(ui, "legislation-status", "All Statuses", &mut page.criteria.statuses);
    });

    let legislation = data.legislation();
    let counts = filter::status_counts(&legislation, &page.criteria);
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for status in LegislationStatus::ALL {
            let count = counts.get(status).copied().unwrap_or(0);
            badge(ui, &format!("{}: {count}", status.label()));
        }
    });
    ui.separator();

    let visible = filter::apply(&legislation, &page.criteria);
    if visible.is_empty() {
        empty_state(ui, "No legislation matches your current filters");
    }
    for item in visible {
        legislation_card(ui, item, &mut page.expanded);
    }
}

fn legislation_card(ui: &mut egui::Ui, item: &LegislationItem, expanded: &mut HashSet<String>) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(&item.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, item.status.label());
            });
        });
        ui.weak(format!("Introduced {}", item.date));
        ui.add_space(4.0);

        ui.label(egui::RichText::new("In plain language").small().strong());
        ui.label(&item.plain_language_summary);

        let is_expanded = expanded.contains(&item.id);
        let toggle = if is_expanded {
            "Hide official summary"
        } else {
            "Show official summary"
        };
        if ui.link(toggle).clicked() {
            if is_expanded {
                expanded.remove(&item.id);
            } else {
                expanded.insert(item.id.clone());
            }
        }
        if is_expanded {
            ui.label(egui::RichText::new(&item.summary).italics());
        }

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.weak("Impact areas:");
            for area in &item.impact_areas {
                badge(ui, area);
            }
        });
        // council tally is informational; residents cannot vote on bills here
        ui.horizontal(|ui| {
            ui.label(format!("👍 Support {}", item.votes.yes));
            ui.label(format!("👎 Oppose {}", item.votes.no));
        });
    });
}
