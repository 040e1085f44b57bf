use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Document, FieldSchema, Space, StackSummary};
use crate::nav::NavState;
use crate::remote::{RemoteClient, SyncError};
use crate::sync::{NameIndex, Slot};

use super::{Input, Modal, ModalKind};

mod event_loop;
mod forms;
mod key_dispatch;
mod refresh;
mod render;

/// How long a transient banner stays up unless superseded first.
const BANNER_TTL: Duration = Duration::from_secs(5);

pub(super) fn run(api_url: String) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let client = RemoteClient::new(api_url)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(client);
    app.fetch_spaces();
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Sidebar,
    Main,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Severity {
    Info,
    Warning,
    Error,
    /// Server-side (5xx) failures get the most prominent framing.
    Critical,
}

pub(super) struct Banner {
    pub(super) text: String,
    pub(super) severity: Severity,
    pub(super) raised_at: Instant,
}

pub(super) struct App {
    pub(super) client: RemoteClient,

    pub(super) nav: NavState,
    pub(super) focus: Focus,
    pub(super) sidebar_selected: usize,

    pub(super) spaces: Slot<Vec<Space>>,

    // Stacks of the active Space; `stacks_for` keys the slot so a Space
    // switch never shows another Space's list under a fetch error.
    pub(super) stacks: Slot<Vec<StackSummary>>,
    pub(super) stacks_for: Option<String>,

    pub(super) stack_names: NameIndex,

    pub(super) schema: Slot<Option<FieldSchema>>,
    pub(super) documents: Slot<Vec<Document>>,
    pub(super) detail_for: Option<String>,

    pub(super) grid_selected: usize,
    pub(super) doc_selected: usize,

    pub(super) banner: Option<Banner>,
    pub(super) log: Vec<String>,

    pub(super) modal: Option<Modal>,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(client: RemoteClient) -> Self {
        Self {
            client,
            nav: NavState::Queue,
            focus: Focus::Sidebar,
            sidebar_selected: 0,
            spaces: Slot::default(),
            stacks: Slot::default(),
            stacks_for: None,
            stack_names: NameIndex::default(),
            schema: Slot::default(),
            documents: Slot::default(),
            detail_for: None,
            grid_selected: 0,
            doc_selected: 0,
            banner: None,
            log: Vec::new(),
            modal: None,
            quit: false,
        }
    }

    pub(super) fn push_banner(&mut self, severity: Severity, text: impl Into<String>) {
        self.banner = Some(Banner {
            text: text.into(),
            severity,
            raised_at: Instant::now(),
        });
    }

    pub(super) fn banner_for(&mut self, err: &SyncError) {
        let severity = if err.is_server_error() {
            Severity::Critical
        } else {
            Severity::Error
        };
        self.push_banner(severity, err.to_string());
    }

    pub(super) fn expire_banner(&mut self) {
        if let Some(b) = &self.banner
            && b.raised_at.elapsed() >= BANNER_TTL
        {
            self.banner = None;
        }
    }

    pub(super) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(format!("{}  {}", crate::sync::now_ts(), line.into()));
    }

    pub(super) fn open_log_modal(&mut self) {
        let scroll = self.log.len().saturating_sub(1);
        self.modal = Some(Modal {
            kind: ModalKind::Log { scroll },
        });
    }

    pub(super) fn close_modal(&mut self) {
        self.modal = None;
    }
}
