use eframe::egui::{self, vec2, Frame, Image, Margin, ScrollArea, Ui, WidgetInfo, WidgetType};

use crate::app::state::BirdsUiState;
use crate::ui::layout::{adaptive_columns, cell_width, crop_uv};
use crate::ui::tiles::{alt_text, image_url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub url: String,
    pub alt_text: String,
}

/// What the home screen shows for one snapshot. `grid` is `None` when
/// there is nothing to show; the region is then left out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub categories: Vec<String>,
    pub grid: Option<Vec<Tile>>,
}

impl PageModel {
    pub fn from_state(state: &BirdsUiState, base_url: &str) -> Self {
        let grid = if state.selected_images.is_empty() {
            None
        } else {
            Some(
                state
                    .selected_images
                    .iter()
                    .map(|image| Tile {
                        url: image_url(base_url, image),
                        alt_text: alt_text(image),
                    })
                    .collect(),
            )
        };

        Self {
            categories: state.categories.clone(),
            grid,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GridMetrics {
    pub min_tile_width: f32,
    pub spacing: f32,
}

pub fn birds_page(
    ui: &mut Ui,
    page: &PageModel,
    metrics: GridMetrics,
    mut on_select_category: impl FnMut(&str),
) {
    ui.spacing_mut().item_spacing = vec2(metrics.spacing, metrics.spacing);

    if !page.categories.is_empty() {
        Frame::NONE.inner_margin(metrics.spacing).show(ui, |ui| {
            let side = cell_width(
                ui.available_width(),
                page.categories.len(),
                metrics.spacing,
            );
            ui.horizontal(|ui| {
                for category in &page.categories {
                    if ui
                        .add_sized([side, side], egui::Button::new(category.as_str()))
                        .clicked()
                    {
                        on_select_category(category.as_str());
                    }
                }
            });
        });
    }

    let Some(tiles) = &page.grid else {
        return;
    };

    Frame::NONE
        .inner_margin(Margin::from(vec2(metrics.spacing, 0.0)))
        .show(ui, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width();
                    let columns =
                        adaptive_columns(width, metrics.min_tile_width, metrics.spacing);
                    let side = cell_width(width, columns, metrics.spacing);
                    for row in tiles.chunks(columns) {
                        ui.horizontal(|ui| {
                            for tile in row {
                                tile_cell(ui, tile, side);
                            }
                        });
                    }
                });
        });
}

fn tile_cell(ui: &mut Ui, tile: &Tile, side: f32) {
    let size = vec2(side, side);
    let image = Image::from_uri(tile.url.clone())
        .show_loading_spinner(false)
        .maintain_aspect_ratio(false)
        .fit_to_exact_size(size);

    let uv = image
        .load_for_size(ui.ctx(), size)
        .ok()
        .and_then(|poll| poll.size())
        .map(|texture_size| crop_uv(texture_size, size));
    let image = match uv {
        Some(uv) => image.uv(uv),
        None => image,
    };

    let response = ui.add_sized(size, image);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Image, true, &tile.alt_text));
    response.on_hover_text(tile.alt_text.as_str());
}
