use crossbeam_channel::{bounded, Receiver};
use eframe::egui;
use navigation::{
    CoordinatorFullScreenCover, CoordinatorScreen, CoordinatorSheet, NavigationCommand,
    NavigationEvent, Subscription,
};
use shared::{routes::root_page, AppCommand, AppCoordinator, AppCover, AppRoute, AppSheet};

use crate::controller::{events::UiEvent, orchestration::apply_ui_events};
use crate::ui::page::render_page_body;

type AppEvent = NavigationEvent<AppRoute, AppSheet, AppCover>;

const NAV_EVENT_QUEUE: usize = 256;

pub struct NavigatorApp {
    coordinator: AppCoordinator,
    nav_rx: Receiver<AppEvent>,
    _nav_subscription: Subscription,
    pending: Vec<UiEvent>,
    history: Vec<String>,
    status: String,
}

impl NavigatorApp {
    pub fn new(startup_commands: Vec<AppCommand>) -> Self {
        let mut coordinator = AppCoordinator::new();
        let (nav_tx, nav_rx) = bounded(NAV_EVENT_QUEUE);
        let nav_subscription = coordinator.subscribe_channel(nav_tx);

        let mut app = Self {
            coordinator,
            nav_rx,
            _nav_subscription: nav_subscription,
            pending: Vec::new(),
            history: Vec::new(),
            status: "Ready".to_string(),
        };
        // Drain per command: the queue is bounded and drops the newest events.
        for command in startup_commands {
            apply_ui_events(
                &mut app.coordinator,
                [UiEvent::Navigate(command)],
                &mut app.history,
            );
            app.process_navigation_events();
        }
        app
    }

    fn process_navigation_events(&mut self) {
        while let Ok(event) = self.nav_rx.try_recv() {
            self.status = match &event {
                NavigationEvent::Pushed { route, depth } => {
                    format!("Pushed {} (depth {depth})", route.build().title)
                }
                NavigationEvent::Popped { route, depth } => {
                    format!("Popped {} (depth {depth})", route.build().title)
                }
                NavigationEvent::PoppedToRoot { removed } => {
                    format!("Returned to start, removed {} screen(s)", removed.len())
                }
                NavigationEvent::SheetChanged { current, .. } => match current {
                    Some(sheet) => format!("Presented sheet {}", sheet.id()),
                    None => "Sheet dismissed".to_string(),
                },
                NavigationEvent::FullScreenCoverChanged { current, .. } => match current {
                    Some(cover) => format!("Presented cover {}", cover.id()),
                    None => "Cover dismissed".to_string(),
                },
            };
        }
    }

    /// Applies the events collected while drawing. Returns whether any were pending.
    fn flush_pending(&mut self) -> bool {
        let events = std::mem::take(&mut self.pending);
        let had_events = !events.is_empty();
        if had_events {
            apply_ui_events(&mut self.coordinator, events, &mut self.history);
        }
        self.process_navigation_events();
        had_events
    }

    /// Escape closes the topmost modal: the sheet window floats above the cover.
    fn handle_escape(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return;
        }
        if self.coordinator.active_sheet().is_some() {
            self.pending.push(UiEvent::SheetClosedByUser);
        } else if self.coordinator.active_full_screen_cover().is_some() {
            self.pending.push(UiEvent::CoverClosedByUser);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let at_root = self.coordinator.is_at_root();
                if ui.add_enabled(!at_root, egui::Button::new("< Back")).clicked() {
                    self.pending
                        .push(UiEvent::Navigate(NavigationCommand::Pop));
                }
                if ui.add_enabled(!at_root, egui::Button::new("Start")).clicked() {
                    self.pending
                        .push(UiEvent::Navigate(NavigationCommand::PopToRoot));
                }
                ui.separator();

                let mut crumbs = vec![root_page().title];
                crumbs.extend(self.coordinator.path().iter().map(|route| route.build().title));
                ui.label(crumbs.join(" / "));
            });
        });
    }

    fn show_history_panel(&self, ctx: &egui::Context) {
        egui::SidePanel::right("history_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.strong("Actions");
                ui.separator();
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.history {
                            ui.monospace(line.as_str());
                        }
                    });
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("v{}", self.coordinator.version()));
                });
            });
        });
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        let mut close_cover = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(cover) = self.coordinator.active_full_screen_cover() {
                let page = cover.build();
                ui.horizontal(|ui| {
                    ui.heading(page.title.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Close").clicked() {
                            close_cover = true;
                        }
                    });
                });
                ui.separator();
                clicked = render_page_body(ui, &page);
                return;
            }

            let page = match self.coordinator.current() {
                Some(route) => route.build(),
                None => root_page(),
            };
            ui.heading(page.title.as_str());
            ui.separator();
            clicked = render_page_body(ui, &page);
        });

        if let Some(command) = clicked {
            self.pending.push(UiEvent::Navigate(command));
        }
        if close_cover {
            self.pending.push(UiEvent::CoverClosedByUser);
        }
    }

    fn show_sheet_window(&mut self, ctx: &egui::Context) {
        let Some(sheet) = self.coordinator.active_sheet() else {
            return;
        };
        let page = sheet.build();
        let mut keep_open = true;
        let mut clicked = None;

        // Keyed by identity: a different sheet gets a fresh window.
        egui::Window::new(page.title.clone())
            .id(egui::Id::new(("sheet", sheet.id())))
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                clicked = render_page_body(ui, &page);
            });

        if let Some(command) = clicked {
            self.pending.push(UiEvent::Navigate(command));
        }
        if !keep_open {
            self.pending.push(UiEvent::SheetClosedByUser);
        }
    }
}

impl eframe::App for NavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_escape(ctx);

        if self.coordinator.active_full_screen_cover().is_none() {
            self.show_top_bar(ctx);
            self.show_history_panel(ctx);
        }
        self.show_status_bar(ctx);
        self.show_main_content(ctx);
        self.show_sheet_window(ctx);

        if self.flush_pending() {
            ctx.request_repaint();
        }
    }
}
