//! One module per route. Views read from `AppState`, edit form fields in
//! place, and queue everything else as an `Action`.

pub mod home;
pub mod impact;
pub mod initiatives;
pub mod issues;
pub mod legislation;
pub mod login;
pub mod not_found;
pub mod polls;
pub mod representatives;

use crate::filter::Allowed;
use crate::models::Facet;

pub(super) fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.heading(title);
    ui.weak(subtitle);
    ui.add_space(8.0);
}

pub(super) fn search_box(ui: &mut egui::Ui, query: &mut String, hint: &str) {
    ui.add(
        egui::TextEdit::singleline(query)
            .hint_text(hint)
            .desired_width(280.0),
    );
}

pub(super) fn empty_state(ui: &mut egui::Ui, text: &str) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.weak(text);
    });
    ui.add_space(16.0);
}

pub(super) fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.small(text);
        });
}

pub(super) fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        });
    ui.add_space(6.0);
    response.inner
}

/// One checkbox per value; unticking every box empties the family.
pub(super) fn facet_checkboxes<T: Facet>(ui: &mut egui::Ui, allowed: &mut Allowed<T>) {
    for value in T::ALL {
        let mut checked = allowed.permits(value);
        if ui.checkbox(&mut checked, value.label()).changed() {
            allowed.toggle(*value, T::ALL.iter().copied());
        }
    }
}

pub(super) fn name_checkboxes(ui: &mut egui::Ui, allowed: &mut Allowed<String>, names: &[String]) {
    for name in names {
        let mut checked = allowed.permits(name.as_str());
        if ui.checkbox(&mut checked, name).changed() {
            allowed.toggle(name.clone(), names.iter().cloned());
        }
    }
}

/// Dropdown with "All" followed by every value.
pub(super) fn facet_combo<T: Facet>(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    allowed: &mut Allowed<T>,
) {
    let selected_text = allowed
        .selected()
        .map(|value| value.label())
        .unwrap_or(all_label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            if ui.selectable_label(allowed.is_any(), all_label).clicked() {
                *allowed = Allowed::Any;
            }
            for value in T::ALL {
                let is_selected = allowed.selected() == Some(value);
                if ui.selectable_label(is_selected, value.label()).clicked() {
                    *allowed = Allowed::single(*value);
                }
            }
        });
}

pub(super) fn name_combo(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    selected: &mut Option<String>,
    names: &[String],
) {
    let selected_text = selected.clone().unwrap_or_else(|| all_label.to_owned());
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, all_label);
            for name in names {
                ui.selectable_value(selected, Some(name.clone()), name);
            }
        });
}
