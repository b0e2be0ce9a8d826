use crate::data::MediaStream;

/// Pick the best audio-only stream out of a resolver catalog.
///
/// Candidates must be in a supported container and carry no video track.
/// Among survivors the highest known bitrate wins; a candidate without a
/// bitrate loses to any candidate with one and is only chosen when no
/// survivor advertises a bitrate. Ties keep the earliest candidate.
///
/// Returns `None` when nothing survives the filters; the caller decides
/// whether that is an error.
pub fn select_best_audio(candidates: &[MediaStream]) -> Option<&MediaStream> {
    let mut best: Option<&MediaStream> = None;
    for candidate in candidates {
        if !candidate.format.is_supported() || !candidate.audio_only {
            continue;
        }
        best = match best {
            // `Option<u32>` ordering: None < Some(_), so a known bitrate
            // always beats an unknown one, and strict `>` keeps the first
            // candidate on ties.
            Some(current) if candidate.audio_bitrate <= current.audio_bitrate => Some(current),
            _ => Some(candidate),
        };
    }
    best
}
