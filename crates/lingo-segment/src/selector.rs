//! Per-language backend resolution.
//!
//! Pure function of (language, explicit override, configuration,
//! availability). Nothing is cached here and nothing is mutated, so it is
//! safe to call from any number of threads.

use lingo_config::segmenter::SegmenterConfig;
use lingo_core::{BackendId, SegmentError};

use crate::availability::Availability;

/// Resolve the backend for one call.
///
/// An explicit override must be honoured or rejected; it is never swapped
/// for another backend. Without one, resolution always succeeds.
pub fn choose_backend(
    language: &str,
    explicit: Option<BackendId>,
    config: &SegmenterConfig,
    availability: Availability,
) -> Result<BackendId, SegmentError> {
    if let Some(backend) = explicit {
        if availability.is_available(backend) {
            tracing::debug!(language, %backend, "explicit backend override");
            return Ok(backend);
        }
        return Err(SegmentError::BackendUnavailable { backend });
    }
    Ok(resolve_default(language, config, availability))
}

/// Resolution without an override, in order:
/// 1. the per-language default, if available
/// 2. with icu missing, the specialized backend a language requires, if available
/// 3. the global default, if available
/// 4. icu, if available
/// 5. naive
pub fn resolve_default(
    language: &str,
    config: &SegmenterConfig,
    availability: Availability,
) -> BackendId {
    if let Some(backend) = config.backend_for(language) {
        if availability.is_available(backend) {
            tracing::debug!(language, %backend, "per-language backend");
            return backend;
        }
        tracing::debug!(language, %backend, "per-language backend unavailable");
    }

    // Naive output for unsegmented scripts is a whole sentence per span,
    // so prefer the specialized backend even when nobody configured it.
    if !availability.icu {
        if let Some(backend) = config.specialized_backend(language) {
            if availability.is_available(backend) {
                tracing::debug!(language, %backend, "specialized backend in place of icu");
                return backend;
            }
        }
    }

    if let Some(backend) = config.default_backend {
        if availability.is_available(backend) {
            tracing::debug!(language, %backend, "global default backend");
            return backend;
        }
    }

    if availability.icu {
        return BackendId::Icu;
    }

    tracing::debug!(language, "falling back to naive backend");
    BackendId::Naive
}
