//! Camera frame decoding
//!
//! Turns raw byte buffers plus declared dimensions into checked
//! `ImageFrame`s. A buffer that does not reshape exactly to
//! (height, width, -1) is a malformed payload and surfaces as
//! `ObservationUnavailable` instead of being coerced.

use contracts::{EnvError, ImageFrame, ImageResponse, Result};
use tracing::trace;

/// Decode one raw response against its declared dimensions.
///
/// The channel count is whatever remains after fixing height and width, so
/// the same path handles RGB, RGBA, and single-channel captures.
pub fn decode_frame(camera_label: &str, response: ImageResponse) -> Result<ImageFrame> {
    let ImageResponse {
        height,
        width,
        data,
    } = response;

    let pixels = height as usize * width as usize;
    if pixels == 0 {
        return Err(EnvError::observation_unavailable(
            camera_label,
            format!("degenerate image dimensions {height}x{width}"),
        ));
    }
    if data.is_empty() || data.len() % pixels != 0 {
        return Err(EnvError::observation_unavailable(
            camera_label,
            format!(
                "buffer of {} bytes does not reshape to {height}x{width}",
                data.len()
            ),
        ));
    }

    let channels = (data.len() / pixels) as u32;
    trace!(camera_label, height, width, channels, "decoded camera frame");

    Ok(ImageFrame {
        height,
        width,
        channels,
        data,
    })
}

/// Decode one frame per viewpoint label, in request order.
///
/// The simulator must answer every request; a short response list is a
/// malformed payload, not a partial observation.
pub fn decode_frames(labels: &[String], responses: Vec<ImageResponse>) -> Result<Vec<ImageFrame>> {
    if responses.len() != labels.len() {
        return Err(EnvError::observation_unavailable(
            "camera",
            format!(
                "requested {} frames, simulator answered {}",
                labels.len(),
                responses.len()
            ),
        ));
    }

    labels
        .iter()
        .zip(responses)
        .map(|(label, response)| decode_frame(label, response))
        .collect()
}
