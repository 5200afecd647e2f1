use super::{badge, card, empty_state, facet_combo, name_combo, page_header, search_box};
use crate::filter::{self, Allowed};
use crate::gui::state::{Action, AppState};
use crate::models::initiative::{Initiative, InitiativeCategory};
use crate::models::Facet;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, pending: &mut Vec<Action>) {
    let data = state.data;
    let names = data.neighborhood_names();
    let page = &mut state.initiatives;

    page_header(
        ui,
        "Community Initiatives",
        "Join or start local projects that make your neighborhood better",
    );

    ui.horizontal(|ui| {
        search_box(ui, &mut page.criteria.query, "Search initiatives...");
        facet_combo(ui, "initiative-category", "All Categories", &mut page.criteria.categories);

        let mut neighborhood = page.criteria.neighborhoods.selected().cloned();
        name_combo(ui, "initiative-neighborhood", "All Neighborhoods", &mut neighborhood, &names);
        page.criteria.neighborhoods = match neighborhood {
            Some(name) => Allowed::single(name),
            None => Allowed::Any,
        };

        if ui.button("➕ Start an Initiative").clicked() {
            page.create_open = true;
        }
    });
    ui.separator();

    let initiatives = data.initiatives();
    let visible = filter::apply(&initiatives, &page.criteria);
    if visible.is_empty() {
        empty_state(ui, "No initiatives match your current filters");
    }
    for initiative in visible {
        if initiative_card(ui, initiative) {
            pending.push(Action::JoinInitiative {
                initiative_id: initiative.id.clone(),
            });
        }
    }
}

/// Returns true when "Join Initiative" was clicked.
fn initiative_card(ui: &mut egui::Ui, initiative: &Initiative) -> bool {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(&initiative.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, initiative.category.label());
            });
        });
        ui.label(&initiative.description);
        ui.horizontal(|ui| {
            ui.weak(format!("📍 {}", initiative.neighborhood));
            ui.weak(format!("📅 {}", initiative.date));
            ui.weak(format!("👥 {} participants", initiative.participants));
        });
        ui.weak(format!("Organized by {}", initiative.organizer));
        ui.button("Join Initiative").clicked()
    })
}

pub fn create_window(ctx: &egui::Context, state: &mut AppState, pending: &mut Vec<Action>) {
    if !state.initiatives.create_open {
        return;
    }
    let names = state.data.neighborhood_names();
    let page = &mut state.initiatives;
    let mut open = page.create_open;

    egui::Window::new("Start a Community Initiative")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let draft = &mut page.draft;
            ui.label("Title");
            ui.text_edit_singleline(&mut draft.title);
            ui.label("Description");
            ui.text_edit_multiline(&mut draft.description);
            ui.label("Date");
            ui.add(egui::TextEdit::singleline(&mut draft.date).hint_text("YYYY-MM-DD"));

            ui.horizontal(|ui| {
                name_combo(ui, "create-neighborhood", "Neighborhood", &mut draft.neighborhood, &names);
                egui::ComboBox::from_id_salt("create-category")
                    .selected_text(draft.category.map(|c| c.label()).unwrap_or("Category"))
                    .show_ui(ui, |ui| {
                        for category in InitiativeCategory::ALL {
                            ui.selectable_value(
                                &mut draft.category,
                                Some(*category),
                                category.label(),
                            );
                        }
                    });
            });

            ui.add_space(8.0);
            if ui.button("Create Initiative").clicked() {
                pending.push(Action::CreateInitiative);
            }
        });

    page.create_open &= open;
}
