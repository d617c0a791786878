use eframe::egui::{Color32, Context, CornerRadius, Stroke};

/// Black buttons with square corners.
pub fn apply_theme(ctx: &Context) {
    ctx.style_mut(|style| {
        let widgets = &mut style.visuals.widgets;
        for visuals in [
            &mut widgets.noninteractive,
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
            &mut widgets.open,
        ] {
            visuals.corner_radius = CornerRadius::ZERO;
        }

        widgets.inactive.weak_bg_fill = Color32::BLACK;
        widgets.inactive.bg_fill = Color32::BLACK;
        widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        widgets.hovered.weak_bg_fill = Color32::from_gray(40);
        widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        widgets.active.weak_bg_fill = Color32::from_gray(70);
        widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    });
}
