use crate::gui::state::Action;
use crate::route::Route;

pub fn show(ui: &mut egui::Ui, pending: &mut Vec<Action>) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("404");
        ui.label("Oops! Page not found");
        ui.add_space(8.0);
        if ui.link("Return to Home").clicked() {
            pending.push(Action::Navigate(Route::Home));
        }
    });
}
