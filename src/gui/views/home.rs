use super::{card, empty_state};
use crate::filter;
use crate::gui::state::{Action, AppState};
use crate::route::Route;

const RECENT_ISSUES: usize = 3;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, pending: &mut Vec<Action>) {
    let data = state.data;
    let neighborhoods = data.neighborhoods();
    let neighborhood = state
        .home
        .neighborhood_id
        .as_deref()
        .and_then(|id| data.neighborhood_by_id(id))
        .map(|n| n.name.clone());
    let place = neighborhood.as_deref().unwrap_or("All Neighborhoods");

    ui.add_space(12.0);
    ui.heading(format!("Your voice matters in {place}"));
    ui.label(
        "Stay informed, provide feedback, and shape the future of your community \
         with real-time updates and direct channels to your representatives.",
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("home-neighborhood")
            .selected_text(place)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.home.neighborhood_id, None, "All Neighborhoods");
                for n in &neighborhoods {
                    ui.selectable_value(
                        &mut state.home.neighborhood_id,
                        Some(n.id.clone()),
                        &n.name,
                    );
                }
            });
        if ui.button("Report an Issue").clicked() {
            pending.push(Action::Navigate(Route::Issues));
        }
    });

    ui.add_space(12.0);
    ui.strong("Recent Issues");
    let issues = data.issues();
    let recent = filter::first_in_neighborhood(&issues, neighborhood.as_deref(), RECENT_ISSUES);
    if recent.is_empty() {
        empty_state(ui, "No recent issues in this neighborhood");
    }
    for issue in recent {
        card(ui, |ui| {
            ui.strong(&issue.title);
            ui.label(&issue.description);
            ui.weak(format!("{} · {} votes · {}", issue.neighborhood, issue.votes, issue.date));
        });
    }
    if ui.link("View all issues").clicked() {
        pending.push(Action::Navigate(Route::Issues));
    }

    ui.add_space(12.0);
    ui.strong("Community at a glance");
    ui.horizontal_wrapped(|ui| {
        for metric in data.impact_metrics() {
            card(ui, |ui| {
                ui.set_width(160.0);
                ui.weak(&metric.name);
                ui.heading(metric.value.to_string());
            });
        }
    });

    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        for route in [
            Route::Legislation,
            Route::Representatives,
            Route::Initiatives,
            Route::Polls,
        ] {
            if ui.button(route.title()).clicked() {
                pending.push(Action::Navigate(route));
            }
        }
    });
}
