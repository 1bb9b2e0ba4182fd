use members_business::{ApplyFetchedMembersCommand, FetchMembersCommand};

use crate::{state::State, widgets};

pub struct MembersApp {
    pub state: State,
}

impl MembersApp {
    /// Called once before the first frame. Fires the one member list fetch.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch::<FetchMembersCommand>();
        Self { state }
    }

    /// Like [`MembersApp::new`], but asks `egui_ctx` for a repaint whenever a
    /// background result arrives so the table shows up without user input.
    pub fn with_repaint(mut state: State, egui_ctx: egui::Context) -> Self {
        state
            .ctx
            .runtime_mut()
            .set_notify(move || egui_ctx.request_repaint());
        Self::new(state)
    }
}

impl eframe::App for MembersApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull in background results before rendering
        self.state.ctx.sync_updates();
        self.state.ctx.dispatch::<ApplyFetchedMembersCommand>();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Admin Dashboard");
            ui.separator();
            widgets::members_panel(&mut self.state.ctx, ui);
        });
    }
}
