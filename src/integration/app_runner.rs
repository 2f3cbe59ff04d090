use color_eyre::eyre::Result;
use ratatui::prelude::Rect;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::catalog::Catalog,
    infrastructure::{
        config::Config,
        tui::{self, TuiLike},
    },
    presentation::components::Components,
};

/// Drives the Elm loop: terminal events in, `update`, commands out, render.
pub struct AppRunner<T: TuiLike> {
    state: AppState,
    tui: T,
    components: Components,
    needs_render: bool,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(config: Config, catalog: Catalog, tui: T) -> Self {
        Self {
            state: AppState::new_with_config(catalog, config),
            tui,
            components: Components::new(),
            needs_render: true,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn tui_mut(&mut self) -> &mut T {
        &mut self.tui
    }

    /// Run the main loop until quit is requested or the event source runs dry.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.render()?;

        while let Some(event) = self.tui.next().await {
            if let Some(raw) = self.translate_event(event) {
                self.dispatch(raw)?;
            }

            if self.state.system.should_suspend {
                self.tui.suspend()?;
                self.dispatch(RawMsg::Resume)?;
                self.tui.enter()?;
                // The terminal comes back blank, so every cell has to be redrawn
                self.tui.clear()?;
                self.needs_render = true;
            }

            if self.needs_render {
                self.render()?;
            }

            if self.state.system.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Feed one raw message through translate → update → command execution.
    pub fn dispatch(&mut self, raw: RawMsg) -> Result<()> {
        if !raw.is_periodic() {
            log::debug!("raw message: {raw:?}");
        }

        for msg in translate_raw_to_domain(raw, &self.state) {
            log::debug!("message: {msg:?}");
            let (state, cmds) = update(msg, self.state.clone());
            self.state = state;
            for cmd in cmds {
                self.execute(cmd)?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                self.tui.resize(Rect::new(0, 0, width, height))?;
                self.needs_render = true;
            }
            Cmd::RequestRender => self.needs_render = true,
        }
        Ok(())
    }

    fn translate_event(&mut self, event: tui::Event) -> Option<RawMsg> {
        match event {
            tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
            tui::Event::Tick => Some(RawMsg::Tick),
            tui::Event::Render => {
                self.needs_render = true;
                Some(RawMsg::Render)
            }
            tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => Some(RawMsg::Key(key)),
            tui::Event::Error => Some(RawMsg::Error("failed to read terminal input".to_string())),
            tui::Event::Init => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        let state = &self.state;
        let components = &self.components;
        self.tui
            .draw(&mut |f: &mut tui::Frame<'_>| components.render(f, state))?;
        self.needs_render = false;
        Ok(())
    }
}
