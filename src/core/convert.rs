//! Simulated conversion runner.
//!
//! Stands in for a real transcoding engine: no bytes are decoded or
//! encoded. The runner paces a monotonic 0..=100 progress sequence with
//! a fixed delay per step, then fabricates a result descriptor whose
//! name swaps the extension and whose size is the input scaled by a
//! fixed factor. The download URL wraps the original in-memory file
//! object when one is still held.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::future::TimeoutFuture;

use crate::config::conversion::{PROGRESS_STEPS, SIZE_SCALE, STEP_DELAY_MS};
use crate::core::ConvertError;
use crate::models::{ConversionResult, FileDescriptor};

/// Cooperative cancellation flag for an in-flight run.
///
/// The runner checks the token at every step boundary; the Converting
/// view cancels it on unmount so a run abandoned by navigation stops
/// ticking instead of finishing invisibly in the background.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run the simulated conversion.
///
/// Emits progress integers 0..=100 in strictly increasing order, one
/// per ~[`STEP_DELAY_MS`] tick, suspending between steps so the UI
/// stays responsive. Returns `Ok(None)` if the token was cancelled
/// mid-run; a cancelled run produces no result.
///
/// `handle` is the live browser file object; without it (e.g. the page
/// was reloaded and only metadata survived) the result carries no
/// download URL.
pub async fn run(
    descriptor: &FileDescriptor,
    handle: Option<&web_sys::File>,
    output_format: &str,
    token: &CancelToken,
    mut on_progress: impl FnMut(u8),
) -> Result<Option<ConversionResult>, ConvertError> {
    for step in 0..=PROGRESS_STEPS {
        TimeoutFuture::new(STEP_DELAY_MS).await;
        if token.is_cancelled() {
            return Ok(None);
        }
        on_progress(step);
    }

    let download_url = match handle {
        Some(file) => Some(
            web_sys::Url::create_object_url_with_blob(file)
                .map_err(|e| ConvertError::ObjectUrl(format!("{e:?}")))?,
        ),
        None => None,
    };

    Ok(Some(ConversionResult {
        file_name: output_file_name(&descriptor.name, output_format),
        file_size: scaled_size(descriptor.size),
        download_url,
    }))
}

/// Replace the extension of `name` with `output_format`.
///
/// A name without an extension is left unchanged, matching the
/// permissive suffix-swap the rest of the app assumes.
pub fn output_file_name(name: &str, output_format: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{stem}.{output_format}")
        }
        _ => name.to_string(),
    }
}

/// Placeholder output size: the input scaled by [`SIZE_SCALE`], rounded
/// to whole bytes.
pub fn scaled_size(input_size: u64) -> u64 {
    (input_size as f64 * SIZE_SCALE).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name_swaps_extension() {
        assert_eq!(output_file_name("photo.png", "webp"), "photo.webp");
        assert_eq!(output_file_name("movie.mkv", "mp3"), "movie.mp3");
        assert_eq!(output_file_name("archive.tar.gz", "zip"), "archive.tar.zip");
    }

    #[test]
    fn test_output_file_name_without_extension_is_unchanged() {
        assert_eq!(output_file_name("README", "pdf"), "README");
        // Dotfiles have no extension to swap.
        assert_eq!(output_file_name(".profile", "txt"), ".profile");
    }

    #[test]
    fn test_scaled_size() {
        assert_eq!(scaled_size(1000), 900);
        assert_eq!(scaled_size(0), 0);
        // 5 * 0.9 = 4.5 rounds away from zero.
        assert_eq!(scaled_size(5), 5);
        assert_eq!(scaled_size(1_048_576), 943_718);
    }

    #[test]
    fn test_cancel_token() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        let shared = token.clone();
        shared.cancel();
        assert!(token.is_cancelled());
    }
}
