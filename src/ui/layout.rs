use eframe::egui::{pos2, Rect, Vec2};

/// Number of columns when every cell must be at least `min_cell` wide.
pub fn adaptive_columns(available_width: f32, min_cell: f32, spacing: f32) -> usize {
    if available_width <= min_cell {
        return 1;
    }
    (((available_width + spacing) / (min_cell + spacing)).floor() as usize).max(1)
}

/// Width of each of `count` equal cells sharing `available_width`.
pub fn cell_width(available_width: f32, count: usize, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let gaps = spacing * (count - 1) as f32;
    ((available_width - gaps) / count as f32).max(0.0)
}

/// UV rectangle that center-crops an image of `image_size` to the aspect
/// ratio of `target`.
pub fn crop_uv(image_size: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let image_aspect = image_size.x / image_size.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let visible = target_aspect / image_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(inset, 0.0), pos2(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / target_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, inset), pos2(1.0, 1.0 - inset))
    }
}
