use super::{card, name_combo, page_header};
use crate::gui::state::{AppState, Timeframe};

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let data = state.data;
    let names = data.neighborhood_names();
    let page = &mut state.impact;

    page_header(
        ui,
        "Impact Dashboard",
        "Visualize how community engagement and policies affect your neighborhood",
    );

    ui.horizontal(|ui| {
        name_combo(ui, "impact-neighborhood", "All Neighborhoods", &mut page.neighborhood, &names);
        egui::ComboBox::from_id_salt("impact-timeframe")
            .selected_text(page.timeframe.label())
            .show_ui(ui, |ui| {
                for timeframe in Timeframe::ALL {
                    ui.selectable_value(&mut page.timeframe, timeframe, timeframe.label());
                }
            });
    });
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for metric in data.impact_metrics() {
            card(ui, |ui| {
                ui.set_width(200.0);
                ui.weak(&metric.name);
                ui.heading(metric.value.to_string());
                let (arrow, color) = if metric.change >= 0 {
                    ("▲", egui::Color32::from_rgb(22, 163, 74))
                } else {
                    ("▼", ui.visuals().error_fg_color)
                };
                ui.colored_label(color, format!("{arrow} {}%", metric.change.abs()));
                ui.small(&metric.description);
            });
        }
    });

    ui.add_space(8.0);
    ui.strong("Monthly trend");
    egui::Grid::new("monthly-trend")
        .num_columns(5)
        .striped(true)
        .show(ui, |ui| {
            ui.weak("Month");
            ui.weak("Reported");
            ui.weak("Resolved");
            ui.weak("Participation");
            ui.weak("Resolution rate");
            ui.end_row();
            for point in data.monthly_trend() {
                ui.label(&point.month);
                ui.label(point.issues.to_string());
                ui.label(point.resolved.to_string());
                ui.label(point.participation.to_string());
                let rate = point.resolution_rate();
                ui.add(
                    egui::ProgressBar::new(rate as f32 / 100.0)
                        .desired_width(140.0)
                        .text(format!("{rate}%")),
                );
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.strong("Policy impact (resident sentiment)");
    egui::Grid::new("policy-impact")
        .num_columns(4)
        .striped(true)
        .show(ui, |ui| {
            ui.weak("Policy");
            ui.weak("Positive");
            ui.weak("Negative");
            ui.weak("Neutral");
            ui.end_row();
            for policy in data.policy_impact() {
                ui.label(&policy.policy);
                ui.label(format!("{}%", policy.positive));
                ui.label(format!("{}%", policy.negative));
                ui.label(format!("{}%", policy.neutral));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.strong("Participation by neighborhood");
    for entry in data.neighborhood_participation() {
        if page.neighborhood.as_ref().is_some_and(|name| *name != entry.name) {
            continue;
        }
        ui.horizontal(|ui| {
            ui.add_sized([100.0, 18.0], egui::Label::new(&entry.name));
            ui.add(
                egui::ProgressBar::new(entry.participation as f32 / 100.0)
                    .desired_width(240.0)
                    .text(format!("{}%", entry.participation)),
            );
        });
    }
}
