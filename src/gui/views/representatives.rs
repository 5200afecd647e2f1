use super::{card, empty_state, page_header, search_box};
use crate::filter::{self, Criteria, CriteriaFor};
use crate::gui::state::{Action, AppState};
use crate::models::representative::Representative;

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let data = state.data;
    let page = &mut state.representatives;

    page_header(
        ui,
        "Your Representatives",
        "Connect directly with the officials who represent your neighborhood",
    );
    search_box(ui, &mut page.query, "Search by name, position, or district...");
    ui.separator();

    let representatives = data.representatives();
    let criteria: CriteriaFor<Representative> = Criteria {
        query: page.query.clone(),
        ..Default::default()
    };
    let visible = filter::apply(&representatives, &criteria);
    if visible.is_empty() {
        empty_state(ui, "No representatives match your search");
    }
    for representative in visible {
        if representative_card(ui, representative) {
            page.dialog_for = Some(representative.id.clone());
        }
    }
}

/// Returns true when "Send Message" was clicked.
fn representative_card(ui: &mut egui::Ui, representative: &Representative) -> bool {
    card(ui, |ui| {
        ui.strong(&representative.name);
        ui.label(format!("{} · {}", representative.position, representative.district));
        ui.weak(format!("Party: {}", representative.party));
        ui.add_space(4.0);

        ui.label(format!("✉ {}", representative.contact.email));
        ui.label(format!("☎ {}", representative.contact.phone));
        ui.label(format!("🏛 {}", representative.contact.office));

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.weak("Response rate");
            ui.add(
                egui::ProgressBar::new(f32::from(representative.response_rate) / 100.0)
                    .desired_width(160.0)
                    .text(format!("{}%", representative.response_rate)),
            );
        });

        if !representative.upcoming_events.is_empty() {
            ui.add_space(4.0);
            ui.weak("Upcoming events");
            for event in &representative.upcoming_events {
                ui.label(format!("• {event}"));
            }
        }

        ui.add_space(4.0);
        ui.button("Send Message").clicked()
    })
}

pub fn message_window(ctx: &egui::Context, state: &mut AppState, pending: &mut Vec<Action>) {
    let Some(id) = state.representatives.dialog_for.clone() else {
        return;
    };
    let representatives = state.data.representatives();
    let Some(representative) = representatives.iter().find(|r| r.id == id) else {
        state.representatives.dialog_for = None;
        return;
    };

    let mut open = true;
    let mut cancelled = false;
    let draft = state.representatives.drafts.entry(id.clone()).or_default();
    egui::Window::new(format!("Message {}", representative.name))
        .id(egui::Id::new("message-window"))
        .open(&mut open)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.weak(format!(
                "Your message goes to {} ({}).",
                representative.position, representative.district
            ));
            ui.add(
                egui::TextEdit::multiline(draft)
                    .hint_text("Type your message here...")
                    .desired_rows(5),
            );
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
                if ui.button("Send Message").clicked() {
                    pending.push(Action::SendMessage {
                        representative_id: id.clone(),
                    });
                }
            });
        });

    if !open || cancelled {
        state.representatives.dialog_for = None;
    }
}
