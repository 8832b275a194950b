//! Server-rendered HTML pages.
//!
//! The upload form works without the WASM frontend; the check page
//! polls itself until the job output appears.

use uuid::Uuid;

use crate::config::CHECK_REFRESH_SECS;

/// Plain upload form served on `/`.
pub fn upload_form(action: &str) -> String {
    format!(
        r#"<!doctype html>
<title>Upload Log File</title>
<h1>Upload Google Analytics Log File</h1>
<p>Please upload a Google Analytics log file in CSV format.</p>
<form action="{action}" method="post" enctype="multipart/form-data">
  <input type="file" name="file">
  <input type="submit" value="Upload" onClick="this.disabled=true; this.value='Processing...';">
</form>
"#
    )
}

/// Self-refreshing page shown while a job has no output yet.
pub fn job_running(id: &Uuid) -> String {
    format!(
        r#"<html>
    <head>
        <meta http-equiv="refresh" content="{CHECK_REFRESH_SECS};url=/check/{id}" />
    </head>
    <body>
        <h1>Running job {id}...</h1>
    </body>
</html>"#
    )
}
