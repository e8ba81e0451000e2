use parking_lot::Mutex;

use crate::types::UiState;

/// Receives every UI state transition. The orchestrator never draws anything itself.
pub trait Presenter: Send + Sync {
    fn render(&self, state: &UiState);
}

// What a result panel plus offer button would show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceSnapshot {
    pub state: UiState,
    pub result_visible: bool,
    pub offer_visible: bool,
    pub transitions: usize,
}

impl SurfaceSnapshot {
    pub fn text(&self) -> &str {
        self.state.text().unwrap_or("")
    }
}

/// In-memory presentation layer holding the last rendered state.
#[derive(Debug, Default)]
pub struct UiSurface {
    inner: Mutex<SurfaceSnapshot>,
}

impl UiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.inner.lock().clone()
    }
}

impl Presenter for UiSurface {
    fn render(&self, state: &UiState) {
        let mut surface = self.inner.lock();
        match state {
            UiState::Idle => {}
            // result area is shown once and stays shown
            UiState::Scanning { .. } | UiState::ResultShown { .. } => surface.result_visible = true,
        }
        surface.offer_visible = state.offer_visible();
        surface.state = state.clone();
        surface.transitions += 1;
    }
}

// Writes transitions to stdout for the terminal front end
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render(&self, state: &UiState) {
        match state {
            UiState::Idle => {}
            UiState::Scanning { message } => println!("{}", message),
            UiState::ResultShown {
                text,
                offer_visible,
            } => {
                println!();
                println!("{}", text);
                if *offer_visible {
                    println!();
                    println!(">> Want the full reading? Ask for your extended report.");
                }
            }
        }
    }
}
