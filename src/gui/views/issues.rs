use super::{
    badge, card, empty_state, facet_checkboxes, name_checkboxes, page_header, search_box,
};
use crate::filter;
use crate::gui::state::{Action, AppState};
use crate::models::issue::{Issue, IssueCategory, IssueStatus};
use crate::models::Facet;

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let data = state.data;
    let names = data.neighborhood_names();
    let page = &mut state.issues;

    page_header(
        ui,
        "Neighborhood Issues",
        "Report, track, and resolve local problems affecting your neighborhood",
    );

    ui.horizontal(|ui| {
        search_box(ui, &mut page.criteria.query, "Search issues...");
        if ui.button("➕ Report Issue").clicked() {
            page.report_open = true;
        }
    });

    egui::CollapsingHeader::new("Filter")
        .id_salt("issue-filters")
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.strong("Status");
                    facet_checkboxes(ui, &mut page.criteria.statuses);
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.strong("Neighborhood");
                    name_checkboxes(ui, &mut page.criteria.neighborhoods, &names);
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.strong("Category");
                    facet_checkboxes(ui, &mut page.criteria.categories);
                });
            });
        });

    let issues = data.issues();
    let all = filter::apply(&issues, &page.criteria);
    let counts = filter::status_counts(&issues, &page.criteria);

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let label = format!("All Issues ({})", all.len());
        if ui.selectable_label(page.tab.is_none(), label).clicked() {
            page.tab = None;
        }
        for status in IssueStatus::ALL {
            let count = counts.get(status).copied().unwrap_or(0);
            let label = format!("{} ({count})", status.label());
            if ui.selectable_label(page.tab == Some(*status), label).clicked() {
                page.tab = Some(*status);
            }
        }
    });
    ui.separator();

    let visible = match page.tab {
        None => all,
        Some(status) => filter::apply_in_status(&issues, &page.criteria, status),
    };

    if visible.is_empty() {
        let text = match page.tab {
            None => "No issues match your current filters".to_owned(),
            Some(status) => format!(
                "No {} issues match your current filters",
                status.label().to_lowercase()
            ),
        };
        empty_state(ui, &text);
    }
    for issue in visible {
        issue_card(ui, issue);
    }
}

fn issue_card(ui: &mut egui::Ui, issue: &Issue) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(&issue.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, issue.status.label());
            });
        });
        ui.label(&issue.description);
        ui.horizontal(|ui| {
            ui.weak(format!("📍 {}", issue.neighborhood));
            ui.weak(format!("Category: {}", issue.category.label()));
            ui.weak(format!("Reported: {}", issue.date));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("💬 {}", issue.comments));
                ui.label(format!("👍 {}", issue.votes));
            });
        });
    });
}

pub fn report_window(ctx: &egui::Context, state: &mut AppState, pending: &mut Vec<Action>) {
    if !state.issues.report_open {
        return;
    }
    let names = state.data.neighborhood_names();
    let page = &mut state.issues;
    let mut open = page.report_open;

    egui::Window::new("Report an Issue")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let draft = &mut page.draft;
            ui.label("Title");
            ui.text_edit_singleline(&mut draft.title);
            ui.label("Description");
            ui.text_edit_multiline(&mut draft.description);

            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("report-neighborhood")
                    .selected_text(
                        draft
                            .neighborhood
                            .clone()
                            .unwrap_or_else(|| "Neighborhood".to_owned()),
                    )
                    .show_ui(ui, |ui| {
                        for name in &names {
                            ui.selectable_value(&mut draft.neighborhood, Some(name.clone()), name);
                        }
                    });
                egui::ComboBox::from_id_salt("report-category")
                    .selected_text(draft.category.map(|c| c.label()).unwrap_or("Category"))
                    .show_ui(ui, |ui| {
                        for category in IssueCategory::ALL {
                            ui.selectable_value(
                                &mut draft.category,
                                Some(*category),
                                category.label(),
                            );
                        }
                    });
            });

            ui.add_space(8.0);
            if ui.button("Submit Report").clicked() {
                pending.push(Action::ReportIssue);
            }
        });

    // the window's close button; a successful report closes it in dispatch
    page.report_open &= open;
}
