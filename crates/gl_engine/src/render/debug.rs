//! GL debug output routed into `log`
//!
//! The driver reports diagnostics asynchronously through a debug-message
//! callback carrying (source, type, id, severity, message). Severity maps
//! onto `log` levels so callers can filter with the usual `RUST_LOG`
//! machinery; nothing is filtered or throttled here.

use glow::HasContext;

/// Install the debug-message callback on a freshly created context
///
/// Requires `GL_KHR_debug` (core in 4.3, widely available as an extension
/// on 3.3 contexts). When absent, driver diagnostics are simply disabled;
/// the demonstration itself is unaffected.
pub fn install(gl: &mut glow::Context) {
    if !gl.supported_extensions().contains("GL_KHR_debug") {
        log::warn!("GL_KHR_debug not available; driver diagnostics disabled");
        return;
    }

    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.debug_message_callback(|source, msg_type, id, severity, message| {
            log::log!(
                level_for_severity(severity),
                "GL [{}/{} id={id}] {message}",
                source_name(source),
                type_name(msg_type),
            );
        });
    }
}

/// Map a GL debug severity onto a `log` level
///
/// Unknown severities are treated as warnings rather than dropped.
pub fn level_for_severity(severity: u32) -> log::Level {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => log::Level::Error,
        glow::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        glow::DEBUG_SEVERITY_LOW => log::Level::Info,
        glow::DEBUG_SEVERITY_NOTIFICATION => log::Level::Debug,
        _ => log::Level::Warn,
    }
}

fn source_name(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "api",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "window-system",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "shader-compiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "third-party",
        glow::DEBUG_SOURCE_APPLICATION => "application",
        _ => "other",
    }
}

fn type_name(msg_type: u32) -> &'static str {
    match msg_type {
        glow::DEBUG_TYPE_ERROR => "error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined",
        glow::DEBUG_TYPE_PORTABILITY => "portability",
        glow::DEBUG_TYPE_PERFORMANCE => "performance",
        glow::DEBUG_TYPE_MARKER => "marker",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(level_for_severity(glow::DEBUG_SEVERITY_HIGH), log::Level::Error);
        assert_eq!(level_for_severity(glow::DEBUG_SEVERITY_MEDIUM), log::Level::Warn);
        assert_eq!(level_for_severity(glow::DEBUG_SEVERITY_LOW), log::Level::Info);
        assert_eq!(
            level_for_severity(glow::DEBUG_SEVERITY_NOTIFICATION),
            log::Level::Debug
        );
    }

    #[test]
    fn test_unknown_severity_is_warn() {
        assert_eq!(level_for_severity(0), log::Level::Warn);
        assert_eq!(level_for_severity(u32::MAX), log::Level::Warn);
    }

    #[test]
    fn test_source_and_type_names() {
        assert_eq!(source_name(glow::DEBUG_SOURCE_API), "api");
        assert_eq!(source_name(12345), "other");
        assert_eq!(type_name(glow::DEBUG_TYPE_PERFORMANCE), "performance");
        assert_eq!(type_name(12345), "other");
    }
}
