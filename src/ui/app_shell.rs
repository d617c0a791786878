use std::sync::Arc;

use eframe::egui;

use crate::app::controller::BirdsViewModel;
use crate::app::events::AppEvent;
use crate::app::observable::Subscriber;
use crate::app::state::BirdsUiState;
use crate::catalog::source::BirdSource;
use crate::error::AppError;
use crate::infra::config::AppConfig;
use crate::ui::birds_page::{birds_page, GridMetrics, PageModel};
use crate::ui::theme::apply_theme;

/// The `home` route: owns its view-model for as long as it is on screen.
struct HomeScreen {
    view_model: BirdsViewModel,
    subscriber: Subscriber<BirdsUiState>,
    snapshot: Arc<BirdsUiState>,
    base_url: String,
    metrics: GridMetrics,
}

impl HomeScreen {
    fn new(ctx: &egui::Context, config: &AppConfig, source: Arc<dyn BirdSource>) -> Self {
        let view_model = BirdsViewModel::new(source, config.selection_policy);
        let repaint = ctx.clone();
        view_model.set_notifier(Arc::new(move || repaint.request_repaint()));
        let subscriber = view_model.subscribe();
        let snapshot = view_model.state();
        view_model.dispatch(AppEvent::RefreshCategories);

        Self {
            view_model,
            subscriber,
            snapshot,
            base_url: config.api_base_url.clone(),
            metrics: GridMetrics {
                min_tile_width: config.min_tile_width,
                spacing: config.spacing,
            },
        }
    }

    fn show(&mut self, ctx: &egui::Context) {
        if let Some(snapshot) = self.subscriber.changed() {
            self.snapshot = snapshot;
        }
        let page = PageModel::from_state(&self.snapshot, &self.base_url);

        let mut selected = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            birds_page(ui, &page, self.metrics, |category| {
                selected = Some(category.to_string());
            });
        });

        if let Some(category) = selected {
            self.view_model.dispatch(AppEvent::SelectCategory(category));
        }
    }
}

pub struct BirdsApp {
    home: HomeScreen,
}

impl eframe::App for BirdsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.home.show(ctx);
    }
}

pub fn launch_window(config: &AppConfig, source: Arc<dyn BirdSource>) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        "Birds",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            apply_theme(&cc.egui_ctx);
            Ok(Box::new(BirdsApp {
                home: HomeScreen::new(&cc.egui_ctx, &config, source),
            }))
        }),
    )?;
    Ok(())
}
