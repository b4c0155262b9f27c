//! Transient toast notifications
//!
//! A notification is mounted on a [`NotificationSurface`], stays visible for
//! [`DISPLAY_DURATION`], plays the `slideOut` exit for [`EXIT_DURATION`] and is
//! then unmounted. Every call runs on its own task; concurrent notifications
//! stack independently.

use std::{
    fmt,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::task::JoinHandle;
use tracing::{debug, info};

/// How long a notification stays fully visible
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Length of the exit animation
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Keyframes used by the enter and exit animations
pub const ANIMATION_STYLESHEET: &str = r#"
    @keyframes slideIn {
        from {
            transform: translateX(400px);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(400px);
            opacity: 0;
        }
    }
"#;

/// Visual flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Background color of the toast
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#4A90E2",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// CSS classes of the toast element
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind)
    }

    /// Inline style of the toast element
    pub fn style(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 2rem; \
             border-radius: 8px; background: {}; color: white; font-weight: 600; \
             box-shadow: 0 10px 25px rgba(0,0,0,0.2); z-index: 10000; \
             animation: slideIn 0.3s ease-out;",
            self.kind.background()
        )
    }
}

/// Where notifications are displayed
pub trait NotificationSurface: Send + Sync {
    /// Install a stylesheet, once per surface
    fn install_stylesheet(&self, css: &str);

    /// Show a notification
    ///
    /// The element is rendered with [`Notification::class_name`] and
    /// [`Notification::style`].
    fn mount(&self, notification: &Notification);

    /// Switch a notification to its `slideOut` animation
    fn begin_exit(&self, id: u64);

    /// Remove a notification
    fn unmount(&self, id: u64);
}

/// Surface that reports notifications through tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

impl NotificationSurface for LogSurface {
    fn install_stylesheet(&self, _css: &str) {}

    fn mount(&self, notification: &Notification) {
        info!(
            id = notification.id,
            class = %notification.class_name(),
            "Notification: {}", notification.message
        );
        debug!(id = notification.id, style = %notification.style(), "Notification style");
    }

    fn begin_exit(&self, _id: u64) {}

    fn unmount(&self, _id: u64) {}
}

/// Lifecycle stage of a mounted notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Exiting,
}

#[derive(Debug, Default)]
struct MemorySurfaceState {
    stylesheets: Vec<String>,
    mounted: Vec<(Notification, NotificationPhase)>,
}

/// Surface that keeps mounted notifications in memory, newest last
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<MemorySurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted notifications with their phase
    pub fn mounted(&self) -> Vec<(Notification, NotificationPhase)> {
        self.state
            .lock()
            .map(|state| state.mounted.clone())
            .unwrap_or_default()
    }

    /// Installed stylesheets
    pub fn stylesheets(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.stylesheets.clone())
            .unwrap_or_default()
    }

    fn with_state(&self, f: impl FnOnce(&mut MemorySurfaceState)) {
        if let Ok(mut state) = self.state.lock() {
            f(&mut state);
        }
    }
}

impl NotificationSurface for MemorySurface {
    fn install_stylesheet(&self, css: &str) {
        self.with_state(|state| state.stylesheets.push(css.to_string()));
    }

    fn mount(&self, notification: &Notification) {
        self.with_state(|state| {
            state
                .mounted
                .push((notification.clone(), NotificationPhase::Visible))
        });
    }

    fn begin_exit(&self, id: u64) {
        self.with_state(|state| {
            for (notification, phase) in state.mounted.iter_mut() {
                if notification.id == id {
                    *phase = NotificationPhase::Exiting;
                }
            }
        });
    }

    fn unmount(&self, id: u64) {
        self.with_state(|state| state.mounted.retain(|(n, _)| n.id != id));
    }
}

/// Shows notifications on a surface
#[derive(Clone)]
pub struct NotificationCenter {
    surface: Arc<dyn NotificationSurface>,
    next_id: Arc<AtomicU64>,
}

impl NotificationCenter {
    /// Create a notification center and install the animation keyframes
    pub fn new(surface: Arc<dyn NotificationSurface>) -> Self {
        surface.install_stylesheet(ANIMATION_STYLESHEET);
        Self {
            surface,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Show a notification and schedule its removal
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// completes once the notification has been unmounted.
    pub fn show_notification(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> JoinHandle<()> {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
        };

        self.surface.mount(&notification);

        let surface = Arc::clone(&self.surface);
        let id = notification.id;
        tokio::spawn(async move {
            tokio::time::sleep(DISPLAY_DURATION).await;
            surface.begin_exit(id);
            tokio::time::sleep(EXIT_DURATION).await;
            surface.unmount(id);
        })
    }
}
