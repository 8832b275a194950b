//! Logdrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly page with a drag & drop widget for uploading Google
//! Analytics CSV log exports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadWidget                                               │
//! │  ├── drop zone / file picker                                │
//! │  └── FileList (tracked tasks)                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotificationStack (toasts)                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The widget's behavior lives in [`controller::UploadController`], which
//! knows nothing about the DOM: transfers go through the
//! [`services::TransferMechanism`] trait and messages through
//! [`services::Notifier`].
//!
//! # Modules
//!
//! - [`config`] - Widget configuration
//! - [`types`] - Tasks, notifications, errors
//! - [`tasks`] - Task list with monotonic status
//! - [`controller`] - Upload controller and state change handler
//! - [`services`] - HTTP transfer and notifications
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod tasks;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Tasks
    TaskId, UploadStatus, UploadTask, StatusUpdate, FileStateChange,
    // Notifications
    Notification, NotificationLevel,
    // Errors
    AppError, AppResult,
};

pub use tasks::{Rejected, TaskList};

pub use controller::{on_file_state_change, UploadController};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application on the page body.
pub fn mount() {
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Upload Log File"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    // `/index.html` and any deep link land on the widget too
                    <Route path="/*any" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    view! {
        <div class="app">
            <header class="app-header">
                <UploadWidget config=UploadConfig::default() set_toasts=set_toasts/>
            </header>
        </div>

        <NotificationStack toasts=toasts/>
    }
}
