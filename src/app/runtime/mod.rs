use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};

use crate::{
    form::{FormReport, FormState},
    presentation::{self, UiContext},
};

use super::{
    input::{HELP_TEXT, KeyCommand, classify},
    options::FormOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    form_state: FormState,
    options: FormOptions,
    status: StatusLine,
    exit_armed: bool,
    submit_armed: bool,
    should_quit: bool,
    submitted: bool,
}

impl App {
    pub fn new(form_state: FormState, options: FormOptions) -> Self {
        Self {
            form_state,
            options,
            status: StatusLine::new(),
            exit_armed: false,
            submit_armed: false,
            should_quit: false,
            submitted: false,
        }
    }

    pub fn run(&mut self) -> Result<FormReport> {
        let mut terminal = TerminalGuard::enter(self.form_state.title.as_deref())?;
        self.form_state.step_focus(1, Instant::now());
        while !self.should_quit {
            let now = Instant::now();
            self.form_state.settle(now);
            terminal.draw(|frame| self.draw(frame, now))?;
            let timeout = self
                .options
                .poll_timeout(self.form_state.is_animating(now));
            if !event::poll(timeout)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key, Instant::now()),
                Event::Paste(text) => self.handle_paste(&text, Instant::now()),
                Event::Resize(width, height) => {
                    terminal.resize(width, height)?;
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost => {}
            }
        }
        Ok(self.form_state.report(self.submitted))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>, now: Instant) {
        presentation::draw(
            frame,
            UiContext {
                form_state: &self.form_state,
                status_message: self.status.message(),
                help: self.options.show_help.then_some(HELP_TEXT),
                now,
            },
        );
    }

    fn disarm(&mut self) {
        self.exit_armed = false;
        self.submit_armed = false;
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match classify(&key) {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextField => self.step_focus(1, now),
            KeyCommand::PrevField => self.step_focus(-1, now),
            KeyCommand::Blur => {
                self.disarm();
                self.form_state.blur(now);
                self.status.ready();
            }
            KeyCommand::Edit(key) => {
                if let Some(change) = self.form_state.handle_key(&key, now) {
                    self.disarm();
                    self.status.value_updated(change.valid);
                }
            }
            KeyCommand::None => {}
        }
    }

    fn handle_paste(&mut self, text: &str, now: Instant) {
        if let Some(change) = self.form_state.handle_paste(text, now) {
            self.disarm();
            self.status.value_updated(change.valid);
        }
    }

    fn step_focus(&mut self, delta: i32, now: Instant) {
        self.disarm();
        self.form_state.step_focus(delta, now);
        if let Some(field) = self.form_state.focused_field() {
            self.status.editing(field.placeholder());
        }
    }

    fn on_submit(&mut self) {
        self.exit_armed = false;
        let invalid = self.form_state.invalid_count();
        if invalid > 0 && self.options.confirm_invalid_submit && !self.submit_armed {
            self.submit_armed = true;
            self.status.pending_invalid_submit(invalid);
            return;
        }
        self.submitted = true;
        self.should_quit = true;
        self.form_state.mark_clean();
    }

    fn on_exit(&mut self) {
        self.submit_armed = false;
        if self.options.confirm_exit && self.form_state.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
