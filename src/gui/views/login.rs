use crate::gui::state::{Action, AppState};
use crate::models::auth::LoginRequest;
use crate::route::Route;

pub fn page(ui: &mut egui::Ui, state: &mut AppState, pending: &mut Vec<Action>) {
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(360.0);
        ui.heading("Sign in to TownSquare");
        ui.weak("Enter your email and password to access your account");
        ui.add_space(12.0);
        if form(ui, &mut state.login_page) {
            pending.push(Action::SubmitLogin { popup: false });
        }
        ui.add_space(8.0);
        ui.weak("Don't have an account? Contact your city office to register.");
    });
}

pub fn popup(ctx: &egui::Context, state: &mut AppState, pending: &mut Vec<Action>) {
    if !state.login_popup_open {
        return;
    }
    let mut open = true;
    egui::Window::new("Sign in")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            if form(ui, &mut state.login_popup) {
                pending.push(Action::SubmitLogin { popup: true });
            }
            if ui.link("Open the full sign-in page").clicked() {
                pending.push(Action::Navigate(Route::Login));
            }
        });
    state.login_popup_open &= open;
}

/// Shared credential form. Returns true when "Sign in" was pressed or
/// Enter was hit in the password field.
fn form(ui: &mut egui::Ui, request: &mut LoginRequest) -> bool {
    ui.label("Email");
    ui.add(egui::TextEdit::singleline(&mut request.email).hint_text("name@example.com"));
    ui.label("Password");
    let password = ui.add(egui::TextEdit::singleline(&mut request.password).password(true));
    ui.checkbox(&mut request.remember_me, "Remember me");
    ui.add_space(6.0);

    let entered = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    ui.button("Sign in").clicked() || entered
}
