//! Host-shell input handling
//!
//! Quit and screenshot are presentation concerns of the host app, kept
//! out of the session state machine. They share the same per-tick edge
//! sampling as the start action but go to a separate sink.

use log::info;

use crate::session::TickInput;

/// Host application actions triggered by shell input.
pub trait ShellSink {
    fn request_quit(&mut self);
    fn capture_screenshot(&mut self, filename: &str);
}

/// App identity used to derive screenshot filenames.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub company: String,
    pub product: String,
    pub version: String,
}

impl AppInfo {
    /// `company-product-version_stamp.png`; the caller supplies the
    /// timestamp string.
    pub fn screenshot_filename(&self, stamp: &str) -> String {
        format!(
            "{}-{}-{}_{stamp}.png",
            self.company, self.product, self.version
        )
    }
}

/// Handle the quit and screenshot edges for one tick. Quit is only
/// honored on native builds.
pub fn handle_shell_input(input: &TickInput, app: &AppInfo, sink: &mut dyn ShellSink, stamp: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    if input.quit {
        info!("quit requested");
        sink.request_quit();
    }

    if input.screenshot {
        let filename = app.screenshot_filename(stamp);
        info!("capturing screenshot to {filename}");
        sink.capture_screenshot(&filename);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        quit: bool,
        screenshots: Vec<String>,
    }

    impl ShellSink for RecordingSink {
        fn request_quit(&mut self) {
            self.quit = true;
        }
        fn capture_screenshot(&mut self, filename: &str) {
            self.screenshots.push(filename.to_string());
        }
    }

    fn app() -> AppInfo {
        AppInfo {
            company: "FrostWorks".to_string(),
            product: "IceDash".to_string(),
            version: "1.2.0".to_string(),
        }
    }

    #[test]
    fn test_screenshot_filename_format() {
        assert_eq!(
            app().screenshot_filename("20260830_120000"),
            "FrostWorks-IceDash-1.2.0_20260830_120000.png"
        );
    }

    #[test]
    fn test_screenshot_edge_captures() {
        let mut sink = RecordingSink::default();
        let input = TickInput {
            screenshot: true,
            ..Default::default()
        };
        handle_shell_input(&input, &app(), &mut sink, "stamp");
        assert_eq!(
            sink.screenshots,
            vec!["FrostWorks-IceDash-1.2.0_stamp.png".to_string()]
        );
        assert!(!sink.quit);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_quit_edge_requests_quit() {
        let mut sink = RecordingSink::default();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        handle_shell_input(&input, &app(), &mut sink, "stamp");
        assert!(sink.quit);
        assert!(sink.screenshots.is_empty());
    }

    #[test]
    fn test_idle_input_does_nothing() {
        let mut sink = RecordingSink::default();
        handle_shell_input(&TickInput::default(), &app(), &mut sink, "stamp");
        assert!(!sink.quit);
        assert!(sink.screenshots.is_empty());
    }
}
