use crate::config::{Config, Theme};
use crate::data::ReferenceData;
use crate::route::Route;
use state::{Action, AppState};

pub mod state;
pub mod toast;
mod views;

pub struct TownSquareApp {
    state: AppState,
}

impl TownSquareApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        data: &'static ReferenceData,
        config: &Config,
    ) -> Self {
        apply_theme(&cc.egui_ctx, config.theme);
        Self {
            state: AppState::new(data, config),
        }
    }
}

impl eframe::App for TownSquareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui_main(ctx, &mut self.state);
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
        Theme::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
        Theme::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
        Theme::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
    }
}

pub fn ui_main(ctx: &egui::Context, state: &mut AppState) {
    let mut pending = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        let brand =
                            egui::Label::new(egui::RichText::new("TownSquare").heading().strong())
                                .sense(egui::Sense::click());
                        if ui.add(brand).clicked() {
                            pending.push(Action::Navigate(Route::Home));
                        }
                        ui.add_space(12.0);
                        for route in Route::NAVIGATION {
                            if ui.selectable_label(state.route == route, route.title()).clicked() {
                                pending.push(Action::Navigate(route));
                            }
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match &state.signed_in_as {
                            Some(email) => {
                                if ui.button("Sign out").clicked() {
                                    pending.push(Action::SignOut);
                                }
                                ui.label(email);
                            }
                            None => {
                                if ui.button("Log in").clicked() {
                                    pending.push(Action::OpenLoginPopup);
                                }
                            }
                        }
                        if ui.button("🔔").on_hover_text("Notifications").clicked() {
                            pending.push(Action::ShowNotifications);
                        }
                    });
                });
            });
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("TownSquare · Connecting residents with their local government");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(state.route.path());
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match state.route {
                Route::Home => views::home::show(ui, state, &mut pending),
                Route::Issues => views::issues::show(ui, state),
                Route::Legislation => views::legislation::show(ui, state),
                Route::Representatives => views::representatives::show(ui, state),
                Route::Initiatives => views::initiatives::show(ui, state, &mut pending),
                Route::Impact => views::impact::show(ui, state),
                Route::Polls => views::polls::show(ui, state, &mut pending),
                Route::Login => views::login::page(ui, state, &mut pending),
                Route::NotFound => views::not_found::show(ui, &mut pending),
            });
    });

    views::login::popup(ctx, state, &mut pending);
    views::issues::report_window(ctx, state, &mut pending);
    views::initiatives::create_window(ctx, state, &mut pending);
    views::representatives::message_window(ctx, state, &mut pending);

    for action in pending {
        state.dispatch(action);
    }

    state.toasts.show(ctx);
}
