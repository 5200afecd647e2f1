use crate::models::events::Notification;
use std::time::{Duration, Instant};

/// Notifications waiting to be drawn, oldest first.
pub struct Toasts {
    lifetime: Duration,
    items: Vec<(Notification, Instant)>,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push((notification, Instant::now()));
    }

    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items
            .retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < lifetime);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last().map(|(notification, _)| notification)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -40.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (notification, _) in &self.items {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        let color = if notification.is_destructive() {
                            ui.visuals().error_fg_color
                        } else {
                            ui.visuals().strong_text_color()
                        };
                        ui.label(egui::RichText::new(&notification.title).strong().color(color));
                        ui.label(&notification.description);
                    });
                    ui.add_space(6.0);
                }
            });

        // keep repainting so expired toasts disappear without input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_toasts_are_pruned() {
        let mut toasts = Toasts::new(Duration::from_secs(4));
        toasts.push(Notification::info("Vote recorded", "You upvoted this item."));
        toasts.push(Notification::warning("Login failed", "Please enter your email and password"));

        toasts.prune(Instant::now());
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.latest().map(|n| n.title.as_str()), Some("Login failed"));

        toasts.prune(Instant::now() + Duration::from_secs(5));
        assert!(toasts.is_empty());
    }
}
