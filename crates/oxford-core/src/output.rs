//! Output formatting for API results.
//!
//! JSON results are rendered with sorted keys and two-space indentation so
//! the same response always prints the same bytes. Binary results are
//! streamed to a file that only appears once the whole body has arrived.

use crate::error::{OxfordError, Result};
use futures_util::{Stream, StreamExt};
use serde_json::{Map, Value};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Recursively rebuild `value` with object keys in lexicographic order.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Render a JSON value as sorted, two-space indented text (no trailing newline).
pub fn render_json(value: &Value) -> String {
    let sorted = sort_keys(value);
    // Serializing a Value cannot fail: keys are always strings.
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| sorted.to_string())
}

/// Write a rendered JSON value followed by a newline.
///
/// `null` (an empty success body) writes nothing.
pub fn write_json<W: Write>(mut writer: W, value: &Value) -> io::Result<()> {
    if value.is_null() {
        return Ok(());
    }
    writeln!(writer, "{}", render_json(value))?;
    writer.flush()
}

/// Stream `chunks` into `dest`, replacing any existing file.
///
/// Bytes go to a hidden sibling file that is renamed over `dest` only after
/// the stream ends cleanly. Any error removes the partial file and leaves
/// `dest` untouched.
pub async fn write_binary<S, B>(chunks: S, dest: &Path) -> Result<u64>
where
    S: Stream<Item = Result<B>>,
    B: AsRef<[u8]>,
{
    let partial = partial_path(dest);
    match stream_to(chunks, &partial).await {
        Ok(written) => {
            tokio::fs::rename(&partial, dest)
                .await
                .map_err(|source| {
                    let _ = std::fs::remove_file(&partial);
                    OxfordError::Output {
                        path: dest.to_path_buf(),
                        source,
                    }
                })?;
            tracing::info!("Wrote {written} bytes to {}", dest.display());
            Ok(written)
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(&partial).await;
            Err(match e {
                OxfordError::Output { source, .. } => OxfordError::Output {
                    path: dest.to_path_buf(),
                    source,
                },
                other => other,
            })
        }
    }
}

async fn stream_to<S, B>(chunks: S, path: &Path) -> Result<u64>
where
    S: Stream<Item = Result<B>>,
    B: AsRef<[u8]>,
{
    let io_error = |source| OxfordError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut chunks = std::pin::pin!(chunks);
    let mut file = tokio::fs::File::create(path).await.map_err(io_error)?;
    let mut written: u64 = 0;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await.map_err(io_error)?;
        written += bytes.len() as u64;
    }

    file.flush().await.map_err(io_error)?;
    file.sync_all().await.map_err(io_error)?;
    Ok(written)
}

/// `dir/.name.part` next to `dest`, so the final rename stays on one filesystem.
fn partial_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string());
    dest.with_file_name(format!(".{name}.part"))
}
