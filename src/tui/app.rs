use std::path::{Path, PathBuf};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tracing::{info, warn};

use crate::config::Config;
use crate::model::{StatusRecord, WidgetId};
use crate::report::{ReportStore, default_export_path, export_report};

use super::action::Action;
use super::error::AppError;
use super::screens::help::help_viewport;
use super::screens::input_test::DEFAULT_AREA;
use super::screens::report::{ExportStatus, report_lines, report_viewport};
use super::screens::{
    HelpState, InputTestState, ReportState, draw_help, draw_input_test, draw_report,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The form of widgets under test.
    InputTest,
    /// Summary of the last submitted test.
    Report,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    config: Config,
    input_test: InputTestState,
    report: ReportState,
    help: HelpState,
    store: ReportStore,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::InputTest`] screen.
    pub fn new(config: Config) -> Self {
        let input_test = InputTestState::new(config.drag_mode, config.show_keyboard);
        Self {
            screen: Screen::InputTest,
            config,
            input_test,
            report: ReportState::new(),
            help: HelpState::new(),
            store: ReportStore::new(),
            area: DEFAULT_AREA,
            should_quit: false,
        }
    }

    /// Records the terminal area, resizing the form and the scroll ranges of
    /// the report and help screens.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.input_test.set_area(area);
        self.help.set_viewport(help_viewport(area));
        self.refresh_report_bounds();
    }

    fn refresh_report_bounds(&mut self) {
        if let Some(record) = self.store.read() {
            self.report
                .set_bounds(report_lines(record).len(), report_viewport(self.area));
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            let size = terminal.size()?;
            self.set_area(Rect::new(0, 0, size.width, size.height));
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::InputTest => draw_input_test(&self.input_test, frame, area),
            Screen::Report => draw_report(&self.report, self.store.read(), frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match (key.code, self.screen) {
            (KeyCode::F(1), screen) if screen != Screen::Help => Action::Navigate(Screen::Help),
            (KeyCode::F(2), Screen::InputTest) => Action::Navigate(Screen::Report),
            (_, Screen::InputTest) => self.input_test.handle_key(key),
            (_, Screen::Report) => self.report.handle_key(key),
            (_, Screen::Help) => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    /// Handles a mouse event. Only the form reacts to the pointer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::InputTest {
            return;
        }
        let action = self.input_test.handle_mouse(mouse);
        self.apply_action(action);
    }

    /// Applies an action returned by a screen handler.
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Submit(record) => {
                info!(
                    tested = record.tested_count(),
                    total = WidgetId::COUNT,
                    "report stored"
                );
                self.store.write(record);
                self.report.reset();
                self.refresh_report_bounds();
                self.navigate(Screen::Report);
            }
            Action::StartNewTest => {
                info!("starting new test");
                self.input_test.reset();
                self.navigate(Screen::InputTest);
            }
            Action::ExportReport => self.export(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Switches screens. Leaving the form drops any drag gesture; the report
    /// view with nothing stored redirects to the form.
    fn navigate(&mut self, screen: Screen) {
        let target = if screen == Screen::Report && self.store.is_empty() {
            info!("no report stored; redirecting to form");
            Screen::InputTest
        } else {
            screen
        };
        if self.screen == Screen::InputTest && target != Screen::InputTest {
            self.input_test.cancel_gesture();
        }
        if target == Screen::Help {
            self.help.set_origin(self.screen);
            self.help.reset();
        }
        if target != self.screen {
            info!(from = ?self.screen, to = ?target, "navigate");
        }
        self.screen = target;
    }

    /// Writes the stored report to a timestamped JSON file.
    fn export(&mut self) {
        let Some(record) = self.store.read() else {
            return;
        };
        let status = match write_export(record, self.config.report_dir.as_deref()) {
            Ok(path) => {
                info!(path = %path.display(), "report exported");
                ExportStatus::Saved(path.display().to_string())
            }
            Err(e) => {
                warn!(error = %e, "report export failed");
                ExportStatus::Failed(e.to_string())
            }
        };
        self.report.set_export_status(status);
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the report store.
    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Returns the form state.
    pub fn input_test(&self) -> &InputTestState {
        &self.input_test
    }

    /// Returns the report screen state.
    pub fn report(&self) -> &ReportState {
        &self.report
    }

    /// Returns the help screen state.
    pub fn help(&self) -> &HelpState {
        &self.help
    }
}

fn write_export(record: &StatusRecord, dir: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = default_export_path(dir, Local::now())?;
    export_report(record, &path)?;
    Ok(path)
}
