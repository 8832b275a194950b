//! List of tracked uploads under the drop zone.

use leptos::*;

use crate::types::UploadTask;

#[component]
pub fn FileList(tasks: ReadSignal<Vec<UploadTask>>) -> impl IntoView {
    view! {
        <ul class="upload-list">
            <For
                each=move || tasks.get()
                // status in the key re-renders a row when it changes
                key=|task| (task.id, task.status)
                children=move |task| {
                    view! {
                        <li class=format!("upload-item {}", task.status.css_class())>
                            <span class="upload-item-name">{task.name.clone()}</span>
                            <span class="upload-item-size">{format_size(task.size)}</span>
                            <span class="upload-item-status">{task.status.to_string()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Human readable size, e.g. `1.50 MB`.
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }
}
