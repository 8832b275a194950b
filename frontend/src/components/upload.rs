//! Log file upload widget with drag & drop support.
//!
//! Every dropped or picked file becomes a task posted to the configured
//! endpoint; finished uploads show up as notifications.

use leptos::*;
use std::rc::Rc;
use web_sys::{File, FileList as DomFileList, HtmlInputElement};

use super::FileList;
use crate::config::{UploadConfig, UPLOAD_TEXT};
use crate::controller::UploadController;
use crate::services::{HttpTransfer, Toast, ToastNotifier};
use crate::types::UploadTask;

#[component]
pub fn UploadWidget(
    /// Endpoint, multiple-file mode and hint text
    config: UploadConfig,
    /// Toast stack receiving the notifications
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let (tasks, set_tasks) = create_signal(Vec::<UploadTask>::new());
    let (is_dragging, set_is_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let multiple = config.multiple;
    let hint = config.accept_hint.clone();

    let controller = Rc::new(UploadController::new(
        config,
        HttpTransfer,
        ToastNotifier::new(set_toasts),
    ));
    controller.subscribe(move |list| set_tasks.set(list.to_vec()));

    let on_file_change = {
        let controller = controller.clone();
        move |ev: ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(files) = input.files() {
                controller.select_files(collect_files(&files));
            }
            // picking the same file again must fire `change`
            input.set_value("");
        }
    };

    let on_drop = {
        let controller = controller.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            set_is_dragging.set(false);
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                controller.select_files(collect_files(&files));
            }
        }
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        // required for the element to accept a drop
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-widget">
            <div
                class=move || if is_dragging.get() { "upload-dragger dragging" } else { "upload-dragger" }
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=on_drop
            >
                <p class="upload-drag-icon">"📥"</p>
                <p class="upload-text">{UPLOAD_TEXT}</p>
                <p class="upload-hint">{hint}</p>
            </div>

            <input
                type="file"
                name="file"
                style="display:none"
                multiple=multiple
                node_ref=file_input
                on:change=on_file_change
            />

            <FileList tasks=tasks/>
        </div>
    }
}

fn collect_files(list: &DomFileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
