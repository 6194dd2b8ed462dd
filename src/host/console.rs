use super::Notifier;
use crate::core::Notice;

/// Prints notices to the terminal; failures go to stderr.
pub(crate) struct ConsoleNotifier {
    json: bool,
    use_color: bool,
}

impl ConsoleNotifier {
    pub(crate) fn new(json: bool, use_color: bool) -> Self {
        Self { json, use_color }
    }

    fn render(&self, notice: &Notice) -> String {
        if self.json {
            return notice.to_json().to_string();
        }
        if !self.use_color {
            return notice.to_string();
        }
        let color = if notice.is_failure() {
            "31"
        } else if matches!(notice, Notice::FeatureDisabled(_)) {
            "33"
        } else {
            "32"
        };
        format!("\x1b[{color}m{notice}\x1b[0m")
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        let line = self.render(notice);
        if notice.is_failure() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
